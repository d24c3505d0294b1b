use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{CastlingRights, Color, LastMove, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mailbox board: an 8x8 grid of optional pieces plus the auxiliary state
/// the rules need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8], // [rank][file]
    pub(crate) king_square: [Option<Square>; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) side_to_move: Color,
    pub(crate) last_move: Option<LastMove>,
    pub(crate) placement_hash: u64,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.put(Piece::new(*kind, Color::White, Square::at(0, file)));
            board.put(Piece::new(*kind, Color::Black, Square::at(7, file)));
            board.put(Piece::new(PieceKind::Pawn, Color::White, Square::at(1, file)));
            board.put(Piece::new(PieceKind::Pawn, Color::Black, Square::at(6, file)));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, no castling rights and White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            king_square: [None; 2],
            castling_rights: CastlingRights::none(),
            side_to_move: Color::White,
            last_move: None,
            placement_hash: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank()][sq.file()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Cached location of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_square[color.index()]
    }

    /// All pieces of one color, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .copied()
            .filter(move |p| p.color == color)
    }

    /// Place a piece on its own square, replacing nothing.
    pub(crate) fn put(&mut self, piece: Piece) {
        let sq = piece.square;
        debug_assert!(self.is_empty(sq), "put onto occupied square {sq}");
        if piece.kind == PieceKind::King {
            debug_assert!(
                self.king_square[piece.color.index()].is_none(),
                "second {} king",
                piece.color
            );
            self.king_square[piece.color.index()] = Some(sq);
        }
        self.placement_hash ^= ZOBRIST.piece(piece.kind, piece.color, sq);
        self.grid[sq.rank()][sq.file()] = Some(piece);
    }

    /// Lift whatever stands on `sq` off the board.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.grid[sq.rank()][sq.file()].take()?;
        debug_assert_eq!(piece.square, sq, "piece out of sync with its slot");
        if piece.kind == PieceKind::King {
            self.king_square[piece.color.index()] = None;
        }
        self.placement_hash ^= ZOBRIST.piece(piece.kind, piece.color, sq);
        Some(piece)
    }

    /// Move the piece on `from` to the empty square `to`, keeping its
    /// recorded square in sync.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.take(from).expect("relocate from an empty square");
        self.put(Piece { square: to, ..piece });
    }

    /// Full position key: placement, side to move, castling rights, and the
    /// en passant file when a capture there is actually possible.
    #[must_use]
    pub fn position_key(&self) -> u64 {
        self.placement_hash
            ^ ZOBRIST.side(self.side_to_move)
            ^ ZOBRIST.castling(self.castling_rights)
            ^ ZOBRIST.en_passant(self.en_passant_target())
    }

    /// The square a pawn of the side to move could legally capture onto en
    /// passant, if any.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        let last = self.last_move.filter(LastMove::is_double_pawn_push)?;
        if last.color == self.side_to_move {
            return None;
        }
        let target = Square::at((last.from.rank() + last.to.rank()) / 2, last.to.file());
        [-1isize, 1]
            .into_iter()
            .filter_map(|df| last.to.offset(0, df))
            .filter(|&sq| {
                self.piece_at(sq).is_some_and(|p| {
                    p.kind == PieceKind::Pawn && p.color == self.side_to_move
                })
            })
            .any(|from| self.en_passant_is_legal(from, target, last.to))
            .then_some(target)
    }

    /// Whether capturing en passant from `from` keeps the mover's king safe.
    /// Only reached right after a double push next to an enemy pawn, so a
    /// scratch copy is cheap enough here.
    fn en_passant_is_legal(&self, from: Square, target: Square, victim: Square) -> bool {
        let mover = self.side_to_move;
        let mut scratch = self.clone();
        scratch.take(victim);
        scratch.relocate(from, target);
        !scratch.is_in_check(mover)
    }

    /// Recompute the placement hash from scratch.
    #[must_use]
    pub(crate) fn compute_placement_hash(&self) -> u64 {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .fold(0, |h, p| h ^ ZOBRIST.piece(p.kind, p.color, p.square))
    }

    /// Count of `kind` pieces for `color`.
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|p| p.kind == kind).count()
    }

    /// Bare kings, or a single minor piece against a bare king.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for piece in Color::BOTH.into_iter().flat_map(|c| self.pieces(c)) {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    /// Check the cached state against the grid (debug builds only).
    pub(crate) fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            for color in Color::BOTH {
                let kings: Vec<Square> = self
                    .pieces(color)
                    .filter(|p| p.kind == PieceKind::King)
                    .map(|p| p.square)
                    .collect();
                debug_assert!(kings.len() <= 1, "{color} has {} kings", kings.len());
                debug_assert_eq!(self.king_square(color), kings.first().copied());
            }
            for sq in Square::all() {
                if let Some(p) = self.piece_at(sq) {
                    debug_assert_eq!(p.square, sq, "piece out of sync with its slot");
                }
            }
            debug_assert_eq!(self.placement_hash, self.compute_placement_hash());
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.grid[rank][file].map_or('.', Piece::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
