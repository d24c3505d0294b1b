//! Doubled and isolated pawns.

use crate::board::state::Board;
use crate::board::types::Color;

use super::helpers::PawnFiles;
use super::tables::{DOUBLED_PAWN_PENALTY, ISOLATED_PAWN_PENALTY};

impl Board {
    /// Pawn structure penalties for `color` (zero or negative).
    #[must_use]
    pub(crate) fn eval_pawn_structure(&self, color: Color, files: &PawnFiles) -> i32 {
        let mut score = 0;
        for file in 0..8 {
            let count = i32::from(files.on_file(color, file));
            if count == 0 {
                continue;
            }
            if count > 1 {
                score -= DOUBLED_PAWN_PENALTY * (count - 1);
            }
            if files.on_adjacent_files(color, file) == 0 {
                score -= ISOLATED_PAWN_PENALTY * count;
            }
        }
        score
    }
}
