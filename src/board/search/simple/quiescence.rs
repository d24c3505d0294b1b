use super::super::constants::{INFINITY, MATE_SCORE};
use super::super::move_order::{is_tactical, ordered};
use super::SearchContext;
use crate::board::MoveList;

impl SearchContext<'_> {
    /// Quiescence search: extend captures and promotions past the horizon
    /// until the position is quiet.
    pub(super) fn quiesce(&mut self, mut alpha: i32, beta: i32, qply: u32) -> i32 {
        self.stats.qnodes += 1;
        let color = self.board.side_to_move();
        let stand_pat = self.board.evaluate(color);

        if qply >= self.params.max_quiescence_depth {
            return stand_pat;
        }

        let in_check = self.board.is_in_check(color);
        let all_moves = self.board.legal_moves(color);

        let mut best_score = if in_check {
            // No stand-pat in check: every evasion must be tried.
            if all_moves.is_empty() {
                return -MATE_SCORE;
            }
            -INFINITY
        } else {
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
            stand_pat
        };

        let moves = if in_check {
            all_moves
        } else {
            let with_checks = qply == 0 && self.params.quiescence_checks;
            let opponent = color.opponent();
            let mut selected = MoveList::new();
            for &mv in &all_moves {
                if is_tactical(&*self.board, &mv)
                    || (with_checks && self.board.with_move(mv, |b| b.is_in_check(opponent)))
                {
                    selected.push(mv);
                }
            }
            selected
        };

        for scored in ordered(&*self.board, &moves).iter() {
            let record = self.board.make_move(scored.mv);
            let score = -self.quiesce(-beta, -alpha, qply + 1);
            self.board.undo_move(record);

            if score > best_score {
                best_score = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best_score
    }
}
