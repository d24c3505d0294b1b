//! Search constants.
//!
//! Score scale and move ordering priorities used by the alpha-beta search.

// ============================================================================
// SCORES
// ============================================================================

/// Window bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Base magnitude of a checkmate score. A mate found with `d` plies of depth
/// remaining scores `MATE_SCORE + d`, so quicker mates weigh more.
pub const MATE_SCORE: i32 = 100_000;

/// Scores with absolute value >= this are considered checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Stalemate and other neutral draws
pub const DRAW_SCORE: i32 = 0;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores are tried earlier. Quiet moves score 0.

/// Lifts every capture above every quiet move
pub const CAPTURE_BASE: i32 = 1 << 20;

/// Added for a promotion, on top of the promoted piece's value
pub const PROMOTION_BONUS: i32 = 1 << 19;
