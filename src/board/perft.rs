//! Leaf-node counting for move generator verification.

use super::Board;

impl Board {
    /// Number of leaf nodes `depth` plies below this position, counting every
    /// promotion choice separately.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal(self.side_to_move, true);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|&mv| self.with_move(mv, |b| b.perft(depth - 1)))
            .sum()
    }

    /// Per-move breakdown of [`Board::perft`], sorted by move text.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(String, u64)> {
        let moves = self.generate_legal(self.side_to_move, true);
        let mut out: Vec<(String, u64)> = moves
            .iter()
            .map(|&mv| {
                let nodes = self.with_move(mv, |b| b.perft(depth.saturating_sub(1)));
                (mv.to_string(), nodes)
            })
            .collect();
        out.sort();
        out
    }
}
