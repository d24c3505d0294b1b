//! Passed pawn bonus.

use crate::board::state::Board;
use crate::board::types::{Color, Piece, PieceKind};

use super::tables::PASSED_PAWN_STEP;

impl Board {
    /// Sum of passed pawn bonuses for `color`. Worth double in the endgame.
    #[must_use]
    pub(crate) fn eval_passed_pawns(&self, color: Color, endgame: bool) -> i32 {
        let enemy_pawns: Vec<Piece> = self
            .pieces(color.opponent())
            .filter(|p| p.kind == PieceKind::Pawn)
            .collect();

        let promotion_rank = color.pawn_promotion_rank();
        let mut score = 0;
        for pawn in self.pieces(color).filter(|p| p.kind == PieceKind::Pawn) {
            let (rank, file) = (pawn.square.rank(), pawn.square.file());
            let blocked = enemy_pawns.iter().any(|e| {
                let ahead = match color {
                    Color::White => e.square.rank() > rank,
                    Color::Black => e.square.rank() < rank,
                };
                ahead && e.square.file().abs_diff(file) <= 1
            });
            if blocked {
                continue;
            }
            let distance = promotion_rank.abs_diff(rank) as i32;
            let bonus = PASSED_PAWN_STEP * (7 - distance);
            score += if endgame { bonus * 2 } else { bonus };
        }
        score
    }
}
