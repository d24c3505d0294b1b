//! Core search implementation.
//!
//! This module implements:
//! - Iterative deepening over completed iterations only
//! - Fail-soft negamax alpha-beta
//! - Quiescence search with stand-pat
//! - Repetition contempt along the current line
//! - Transposition table lookups at exact depth

mod iterative;
mod quiescence;

use std::collections::HashMap;
use std::time::Instant;

use crate::tt::{BoundType, TTEntry, TranspositionTable};

use super::constants::{DRAW_SCORE, INFINITY, MATE_SCORE};
use super::move_order::ordered;
use super::{SearchEngine, SearchLimits, SearchLogger, SearchOutcome, SearchParams, SearchStats};
use crate::board::{Board, Color, Move};

/// Occurrence counts of position keys on the current line, seeded with the
/// game so far.
#[derive(Debug, Clone, Default)]
struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    fn new(counts: HashMap<u64, u32>) -> Self {
        RepetitionTable { counts }
    }

    /// Count one more occurrence and return the new total.
    fn increment(&mut self, key: u64) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    fn decrement(&mut self, key: u64) {
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
    }

    fn get(&self, key: u64) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }
}

/// Search context for a single `search` call
pub struct SearchContext<'a> {
    board: &'a mut Board,
    tt: &'a mut TranspositionTable,
    params: &'a SearchParams,
    stats: &'a mut SearchStats,
    limits: &'a SearchLimits,
    logger: Option<&'a (dyn SearchLogger + Send)>,
    repetitions: RepetitionTable,
    generation: u8,
    /// Side the engine is choosing a move for
    root_color: Color,
    start_time: Instant,
}

/// Entry point used by [`SearchEngine::search`].
pub(super) fn run_search(
    engine: &mut SearchEngine,
    board: &mut Board,
    max_depth: u32,
    limits: &SearchLimits,
) -> SearchOutcome {
    let root_color = board.side_to_move();
    let root_moves = board.legal_moves(root_color);
    if root_moves.is_empty() {
        return if board.is_in_check(root_color) {
            SearchOutcome::Checkmate
        } else {
            SearchOutcome::Stalemate
        };
    }

    let mut repetitions = RepetitionTable::new(std::mem::take(&mut engine.history));
    let root_key = board.position_key();
    if repetitions.get(root_key) == 0 {
        repetitions.increment(root_key);
    }

    let mut ctx = SearchContext {
        board,
        tt: &mut engine.tt,
        params: &engine.params,
        stats: &mut engine.stats,
        limits,
        logger: engine.logger.as_deref(),
        repetitions,
        generation: engine.generation,
        root_color,
        start_time: limits.clock.snapshot().0,
    };

    let result = ctx.iterative_deepening(&root_moves, max_depth);
    ctx.board.debug_validate();
    SearchOutcome::Move(result)
}

impl SearchContext<'_> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.limits.should_stop()
    }

    fn total_nodes(&self) -> u64 {
        self.stats.nodes + self.stats.qnodes
    }

    /// Penalty charged to the engine, seen from `color`'s side.
    fn contempt(&self, color: Color, penalty: i32) -> i32 {
        if color == self.root_color {
            -penalty
        } else {
            penalty
        }
    }

    /// Search every root move at `depth`; `None` if stopped part way.
    /// The root position is already counted in the repetition table.
    fn search_root(&mut self, depth: u32, moves: &[Move]) -> Option<(Move, i32)> {
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves {
            if self.should_stop() {
                return None;
            }
            let record = self.board.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.board.undo_move(record);

            // Strictly better only: ties keep the earlier move.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, best_score) = best?;
        self.tt.store(TTEntry {
            key: self.board.position_key(),
            depth: depth.min(u32::from(u8::MAX)) as u8,
            score: best_score,
            bound_type: BoundType::Exact,
            best_move: Some(best_move),
            color: self.root_color,
            generation: self.generation,
        });
        Some((best_move, best_score))
    }

    /// Count this node on the current line, search it, uncount it.
    fn negamax(&mut self, depth: u32, alpha: i32, beta: i32) -> i32 {
        let key = self.board.position_key();
        let occurrences = self.repetitions.increment(key);
        let score = self.search_node(key, occurrences, depth, alpha, beta);
        self.repetitions.decrement(key);
        score
    }

    fn search_node(
        &mut self,
        key: u64,
        occurrences: u32,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        let color = self.board.side_to_move();

        if occurrences >= 3 {
            return self.contempt(color, self.params.draw_penalty);
        }
        // A revisited position's value depends on the path, so keep it out
        // of the table both ways.
        let repeated = occurrences == 2;
        let penalty = if repeated {
            self.contempt(color, self.params.repetition_penalty)
        } else {
            0
        };

        if !repeated {
            if let Some(entry) = self.tt.probe(key) {
                if entry.depth() == depth && entry.color == color {
                    if let Some(score) = entry.cutoff_score(alpha, beta) {
                        self.stats.tt_hits += 1;
                        return score;
                    }
                }
            }
        }

        if depth == 0 {
            return self.quiesce(alpha, beta, 0) + penalty;
        }

        self.stats.nodes += 1;

        let moves = self.board.legal_moves(color);
        if moves.is_empty() {
            return if self.board.is_in_check(color) {
                -(MATE_SCORE + depth as i32)
            } else {
                DRAW_SCORE
            };
        }

        let alpha_orig = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for scored in ordered(&*self.board, &moves).iter() {
            let mv = scored.mv;
            let record = self.board.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.board.undo_move(record);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        if repeated {
            return best_score + penalty;
        }

        let bound_type = if best_score <= alpha_orig {
            BoundType::UpperBound
        } else if best_score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.store(TTEntry {
            key,
            depth: depth.min(u32::from(u8::MAX)) as u8,
            score: best_score,
            bound_type,
            best_move,
            color,
            generation: self.generation,
        });

        best_score
    }

    /// Principal variation from the table, each move re-validated as legal.
    fn extract_pv(&mut self, max_len: usize) -> Vec<Move> {
        let mut pv = Vec::with_capacity(max_len);
        let mut seen = Vec::with_capacity(max_len);
        let mut records = Vec::with_capacity(max_len);

        while pv.len() < max_len {
            let key = self.board.position_key();
            if seen.contains(&key) {
                break;
            }
            seen.push(key);

            let Some(mv) = self.tt.probe(key).and_then(|e| e.best_move) else {
                break;
            };
            let color = self.board.side_to_move();
            if !self.board.legal_moves(color).contains(&mv) {
                break;
            }
            pv.push(mv);
            records.push(self.board.make_move(mv));
        }

        for record in records.into_iter().rev() {
            self.board.undo_move(record);
        }
        pv
    }

    fn format_pv(pv: &[Move]) -> String {
        pv.iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
