use log::{debug, log_enabled, Level};

use super::constants::{MATE_SCORE, MATE_THRESHOLD};

/// Summary of one completed iterative deepening iteration.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub hashfull: u32,
    pub time_ms: u128,
    pub pv: String,
}

impl SearchInfo {
    /// Moves until mate (positive when the engine mates), if the score is a
    /// mate score.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        if self.score.abs() < MATE_THRESHOLD {
            return None;
        }
        let plies = self.depth as i32 - (self.score.abs() - MATE_SCORE);
        let moves = (plies.max(1) + 1) / 2;
        Some(if self.score > 0 { moves } else { -moves })
    }

    #[must_use]
    pub fn score_text(&self) -> String {
        match self.mate_in() {
            Some(n) => format!("mate {n}"),
            None => format!("cp {}", self.score),
        }
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);

    /// Whether `info` would do anything. The PV is only extracted when true.
    fn enabled(&self) -> bool {
        true
    }
}

/// Forwards iteration summaries to the `log` facade at debug level.
pub struct LogReporter;

impl SearchLogger for LogReporter {
    fn enabled(&self) -> bool {
        log_enabled!(Level::Debug)
    }

    fn info(&self, info: &SearchInfo) {
        debug!(
            "depth {} score {} nodes {} qnodes {} tt_hits {} hashfull {} time {}ms pv {}",
            info.depth,
            info.score_text(),
            info.nodes,
            info.qnodes,
            info.tt_hits,
            info.hashfull,
            info.time_ms,
            info.pv
        );
    }
}
