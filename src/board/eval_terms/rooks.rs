//! Rooks on open and semi-open files.

use crate::board::state::Board;
use crate::board::types::{Color, PieceKind};

use super::helpers::PawnFiles;
use super::tables::{ROOK_OPEN_FILE_BONUS, ROOK_SEMI_OPEN_FILE_BONUS};

impl Board {
    #[must_use]
    pub(crate) fn eval_rooks(&self, color: Color, files: &PawnFiles) -> i32 {
        self.pieces(color)
            .filter(|p| p.kind == PieceKind::Rook)
            .map(|rook| {
                let file = rook.square.file();
                let ours = files.on_file(color, file) > 0;
                let theirs = files.on_file(color.opponent(), file) > 0;
                match (ours, theirs) {
                    (false, false) => ROOK_OPEN_FILE_BONUS,
                    (false, true) => ROOK_SEMI_OPEN_FILE_BONUS,
                    _ => 0,
                }
            })
            .sum()
    }
}
