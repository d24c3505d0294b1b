//! Chess board representation and game logic.
//!
//! An 8x8 mailbox of optional pieces, rank 0 being White's back rank.
//! Supports the full rules including castling, en passant and promotions,
//! plus the alpha-beta search that picks moves for a computer side.
//!
//! # Example
//! ```
//! use chess_ai::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod eval_terms;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveError, SquareError};
pub use state::Board;
pub use types::{
    CastleOptions, CastlingRights, Color, LastMove, Move, MoveList, MoveRecord, Piece, PieceKind,
    Special, Square,
};

// Public API - search and configuration
pub use search::{
    order_score, LogReporter, SearchClock, SearchEngine, SearchInfo, SearchLimits, SearchLogger,
    SearchOutcome, SearchParams, SearchResult, SearchStats, DRAW_SCORE, MATE_SCORE,
    MATE_THRESHOLD,
};

pub(crate) use types::ScoredMoveList;
