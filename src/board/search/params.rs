#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable search settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// First depth tried by iterative deepening
    pub start_depth: u32,
    /// Quiescence plies explored past the nominal depth
    pub max_quiescence_depth: u32,
    /// Also try quiet checking moves at the first quiescence ply
    pub quiescence_checks: bool,
    /// Charged to the engine when a line revisits a position once
    pub repetition_penalty: i32,
    /// Charged to the engine when a line reaches a position a third time
    pub draw_penalty: i32,
    /// Transposition table size in megabytes
    pub tt_mb: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            start_depth: 1,
            max_quiescence_depth: 6,
            quiescence_checks: true,
            repetition_penalty: 25,
            draw_penalty: 50,
            tt_mb: 16,
        }
    }
}
