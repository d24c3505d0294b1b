use log::trace;

use super::super::constants::MATE_THRESHOLD;
use super::super::move_order::ordered;
use super::super::{SearchInfo, SearchResult};
use super::SearchContext;
use crate::board::{Move, MoveList};

impl SearchContext<'_> {
    /// Deepen from `start_depth` to `max_depth`, keeping the result of the
    /// deepest iteration that ran to completion.
    pub(super) fn iterative_deepening(&mut self, root_moves: &MoveList, max_depth: u32) -> SearchResult {
        let color = self.board.side_to_move();
        let moves: Vec<Move> = ordered(&*self.board, root_moves)
            .iter()
            .map(|s| s.mv)
            .collect();

        // Used only if no iteration completes.
        let mut result = SearchResult {
            best_move: moves[0],
            score: self.board.evaluate(color),
            depth: 0,
            nodes: 0,
        };

        for depth in self.params.start_depth.max(1)..=max_depth {
            if self.should_stop() {
                break;
            }

            let Some((best_move, score)) = self.search_root(depth, &moves) else {
                trace!("depth {depth} aborted after {} nodes", self.total_nodes());
                break;
            };

            result = SearchResult {
                best_move,
                score,
                depth,
                nodes: self.total_nodes(),
            };
            self.report(depth, score);

            if score.abs() >= MATE_THRESHOLD {
                break;
            }
        }

        result.nodes = self.total_nodes();
        result
    }

    fn report(&mut self, depth: u32, score: i32) {
        let Some(logger) = self.logger.filter(|l| l.enabled()) else {
            return;
        };
        let pv = self.extract_pv(depth as usize);
        let info = SearchInfo {
            depth,
            score,
            nodes: self.stats.nodes,
            qnodes: self.stats.qnodes,
            tt_hits: self.stats.tt_hits,
            hashfull: self.tt.hashfull_per_mille(),
            time_ms: self.start_time.elapsed().as_millis(),
            pv: Self::format_pv(&pv),
        };
        logger.info(&info);
    }
}
