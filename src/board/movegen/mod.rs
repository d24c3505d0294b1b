//! Move generation.
//!
//! Each piece kind produces pseudo-legal destinations in its own module.
//! Non-king moves then pass a self-check filter that makes the move in
//! place, tests the mover's king and reverts. King steps embed the check
//! test directly.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, PieceKind, Square};

const UNDERPROMOTIONS: [PieceKind; 3] = [PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

impl Board {
    /// Pseudo-legal destinations for the piece on `sq` (empty if none).
    ///
    /// King destinations are already safe; other kinds may still leave
    /// their own king in check.
    #[must_use]
    pub fn candidate_destinations(&self, sq: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(sq) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(28);
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(piece, &mut out),
            PieceKind::Knight => self.knight_destinations(piece, &mut out),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_destinations(piece, &mut out);
            }
            PieceKind::King => self.king_destinations(piece, &mut out),
        }
        out
    }

    /// Strictly legal destinations for the piece on `sq`.
    pub fn legal_moves_for(&mut self, sq: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(sq) else {
            return Vec::new();
        };
        let mut candidates = self.candidate_destinations(sq);
        if piece.kind != PieceKind::King {
            candidates.retain(|&to| self.keeps_king_safe(Move::new(sq, to)));
        }
        candidates
    }

    /// All legal moves for `color`, promotions defaulting to a queen.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        self.generate_legal(color, false)
    }

    /// All legal moves including under-promotions.
    pub(crate) fn generate_legal(&mut self, color: Color, underpromotions: bool) -> MoveList {
        let mut moves = MoveList::new();
        let origins: Vec<(Square, PieceKind)> =
            self.pieces(color).map(|p| (p.square, p.kind)).collect();
        for (from, kind) in origins {
            for to in self.legal_moves_for(from) {
                if kind == PieceKind::Pawn && to.rank() == color.pawn_promotion_rank() {
                    moves.push(Move::with_promotion(from, to, PieceKind::Queen));
                    if underpromotions {
                        for promo in UNDERPROMOTIONS {
                            moves.push(Move::with_promotion(from, to, promo));
                        }
                    }
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// True as soon as any piece of `color` has a legal destination.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self.pieces(color).map(|p| p.square).collect();
        origins
            .into_iter()
            .any(|from| !self.legal_moves_for(from).is_empty())
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Make `mv` in place, test the mover's king, revert.
    fn keeps_king_safe(&mut self, mv: Move) -> bool {
        let Some(piece) = self.piece_at(mv.from) else {
            return false;
        };
        let saved_side = self.side_to_move;
        self.side_to_move = piece.color;
        let safe = self.with_move(mv, |b| !b.is_in_check(piece.color));
        self.side_to_move = saved_side;
        safe
    }

    /// Enemy-or-empty test shared by the step and ray generators.
    #[inline]
    pub(crate) fn can_land_on(&self, sq: Square, mover: Color) -> bool {
        self.piece_at(sq).map_or(true, |p| p.color != mover)
    }
}
