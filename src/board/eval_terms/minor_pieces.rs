use crate::board::state::Board;
use crate::board::types::{Color, PieceKind};

use super::tables::BISHOP_PAIR_BONUS;

impl Board {
    #[must_use]
    pub(crate) fn eval_bishop_pair(&self, color: Color) -> i32 {
        if self.count(color, PieceKind::Bishop) >= 2 {
            BISHOP_PAIR_BONUS
        } else {
            0
        }
    }
}
