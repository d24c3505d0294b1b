use crate::board::state::Board;
use crate::board::types::{Color, PieceKind};

/// Pawn counts per file and color, gathered once per evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnFiles {
    counts: [[u8; 8]; 2],
}

impl PawnFiles {
    pub fn new(board: &Board) -> Self {
        let mut counts = [[0u8; 8]; 2];
        for color in Color::BOTH {
            for pawn in board.pieces(color).filter(|p| p.kind == PieceKind::Pawn) {
                counts[color.index()][pawn.square.file()] += 1;
            }
        }
        PawnFiles { counts }
    }

    #[inline]
    pub fn on_file(&self, color: Color, file: usize) -> u8 {
        self.counts[color.index()][file]
    }

    /// Friendly pawns on the files either side of `file`.
    pub fn on_adjacent_files(&self, color: Color, file: usize) -> u8 {
        let left = file.checked_sub(1).map_or(0, |f| self.on_file(color, f));
        let right = if file < 7 { self.on_file(color, file + 1) } else { 0 };
        left + right
    }
}
