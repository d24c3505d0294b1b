//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening, keeping only fully completed iterations
//! - Negamax alpha-beta search
//! - Quiescence search with stand-pat, check evasions and optional checks
//! - Move ordering by MVV-LVA and promotions
//! - Transposition table with depth and bound checks
//! - Repetition-aware scoring along the current line

mod constants;
mod move_order;
mod params;
mod report;
mod simple;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::tt::TranspositionTable;

use super::{Board, Move};
pub use constants::{DRAW_SCORE, MATE_SCORE, MATE_THRESHOLD};
pub use move_order::order_score;
pub use params::SearchParams;
pub use report::{LogReporter, SearchInfo, SearchLogger};

/// Best move and score from the deepest completed iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score from the mover's point of view
    pub score: i32,
    /// Deepest fully completed iteration (0 if none completed)
    pub depth: u32,
    pub nodes: u64,
}

/// What the engine found for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Move(SearchResult),
    /// Side to move has no legal move and is in check
    Checkmate,
    /// Side to move has no legal move and is not in check
    Stalemate,
}

impl SearchOutcome {
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        match self {
            SearchOutcome::Move(result) => Some(result.best_move),
            SearchOutcome::Checkmate | SearchOutcome::Stalemate => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> Option<i32> {
        match self {
            SearchOutcome::Move(result) => Some(result.score),
            SearchOutcome::Checkmate | SearchOutcome::Stalemate => None,
        }
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Clock for tracking search time limits
pub struct SearchClock {
    start_time: Mutex<Instant>,
    deadline: Mutex<Option<Instant>>,
}

impl SearchClock {
    #[must_use]
    pub fn new(start_time: Instant, deadline: Option<Instant>) -> Self {
        SearchClock {
            start_time: Mutex::new(start_time),
            deadline: Mutex::new(deadline),
        }
    }

    /// A clock starting now with `budget` to spend.
    #[must_use]
    pub fn with_budget(budget: Duration) -> Self {
        let now = Instant::now();
        SearchClock::new(now, Some(now + budget))
    }

    #[must_use]
    pub fn snapshot(&self) -> (Instant, Option<Instant>) {
        (*self.start_time.lock(), *self.deadline.lock())
    }

    #[must_use]
    pub fn expired(&self) -> bool {
        self.deadline.lock().is_some_and(|d| Instant::now() >= d)
    }
}

/// Cooperative limits for a search: an external stop flag and a clock.
/// Both are only consulted between root moves and between iterations.
#[derive(Clone)]
pub struct SearchLimits {
    pub clock: Arc<SearchClock>,
    pub stop: Arc<AtomicBool>,
}

impl SearchLimits {
    /// No deadline, never stopped unless the flag is raised.
    #[must_use]
    pub fn unlimited() -> Self {
        SearchLimits {
            clock: Arc::new(SearchClock::new(Instant::now(), None)),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn with_budget(budget: Duration) -> Self {
        SearchLimits {
            clock: Arc::new(SearchClock::with_budget(budget)),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed) || self.clock.expired()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::unlimited()
    }
}

/// Owns everything one line of searches needs: the transposition table,
/// the game-history position counts, parameters and statistics.
///
/// Not shared between threads; give each concurrent search its own engine.
pub struct SearchEngine {
    tt: TranspositionTable,
    params: SearchParams,
    stats: SearchStats,
    generation: u8,
    history: HashMap<u64, u32>,
    logger: Option<Box<dyn SearchLogger + Send>>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(SearchParams::default())
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        SearchEngine {
            tt: TranspositionTable::new(params.tt_mb),
            params,
            stats: SearchStats::default(),
            generation: 0,
            history: HashMap::new(),
            logger: Some(Box::new(LogReporter)),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replace the parameters. The table is rebuilt if its size changed.
    pub fn set_params(&mut self, params: SearchParams) {
        if params.tt_mb != self.params.tt_mb {
            self.tt = TranspositionTable::new(params.tt_mb);
        }
        self.params = params;
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn set_logger(&mut self, logger: Option<Box<dyn SearchLogger + Send>>) {
        self.logger = logger;
    }

    /// Seed repetition counts for the next search with positions already
    /// seen in the game, keyed by position key (the current position
    /// included). The counts are consumed by that search.
    pub fn set_history(&mut self, counts: HashMap<u64, u32>) {
        self.history = counts;
    }

    /// Drop every cached result.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }

    /// Search the side to move up to `max_depth` plies.
    pub fn get_best_move(&mut self, board: &mut Board, max_depth: u32) -> SearchOutcome {
        self.search(board, max_depth, &SearchLimits::unlimited())
    }

    /// Search with cooperative limits. The board is restored before return.
    pub fn search(
        &mut self,
        board: &mut Board,
        max_depth: u32,
        limits: &SearchLimits,
    ) -> SearchOutcome {
        self.generation = self.generation.wrapping_add(1);
        self.stats.reset();
        simple::run_search(self, board, max_depth, limits)
    }
}
