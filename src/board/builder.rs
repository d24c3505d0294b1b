//! Builder for setting up positions piece by piece or from a layout string.
//!
//! A layout string is the placement part of a FEN record, optionally
//! followed by the side to move and castling field:
//! `"r3k2r/8/8/8/8/8/8/R3K2R w KQkq"`. Move counters and en passant
//! fields are not part of it; en passant is set up with
//! [`BoardBuilder::last_move`].
//!
//! # Example
//! ```
//! use chess_ai::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.count(Color::White, PieceKind::Pawn), 1);
//! ```

use super::error::LayoutError;
use super::{Board, CastlingRights, Color, LastMove, Piece, PieceKind, Square};

#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    last_move: Option<LastMove>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            last_move: None,
        }
    }

    /// Start from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut fields = layout.split_whitespace();
        let placement = fields.next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut builder = Self::new();
        for (i, row) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file).ok_or(LayoutError::BadRankWidth {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                builder.pieces.push((sq, color, kind));
                file += 1;
            }
            if file != 8 {
                return Err(LayoutError::BadRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        builder.side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(LayoutError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if let Some(field) = fields.next() {
            builder.castling_rights = CastlingRights::from_layout_field(field).ok_or_else(|| {
                LayoutError::InvalidCastling {
                    found: field.to_string(),
                }
            })?;
        }

        Ok(builder)
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Record the move that led to this position (enables en passant after a
    /// double push).
    #[must_use]
    pub const fn last_move(mut self, last: LastMove) -> Self {
        self.last_move = Some(last);
        self
    }

    /// Build the board. Each side must have exactly one king.
    pub fn build(self) -> Result<Board, LayoutError> {
        for color in Color::BOTH {
            let found = self
                .pieces
                .iter()
                .filter(|(_, c, k)| *c == color && *k == PieceKind::King)
                .count();
            if found != 1 {
                return Err(LayoutError::KingCount { color, found });
            }
        }

        let mut board = Board::empty();
        for (square, color, kind) in self.pieces {
            board.put(Piece::new(kind, color, square));
        }
        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.last_move = self.last_move;
        board.debug_validate();
        Ok(board)
    }
}

impl Board {
    /// Parse a layout string straight into a board.
    pub fn from_layout(layout: &str) -> Result<Board, LayoutError> {
        BoardBuilder::from_layout(layout)?.build()
    }

    /// The placement part of a layout string for this board.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.grid[rank][file] {
                    Some(p) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(p.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}
