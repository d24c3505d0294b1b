//! A chess rules engine with an alpha-beta search for computer play.
//!
//! - [`board`] - position, legal moves, evaluation and search
//! - [`engine`] - game history, draw rules and computer players
//! - [`tt`] - transposition table used by the search
//! - [`zobrist`] - position hashing keys

pub mod board;
pub mod engine;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, PieceKind, SearchEngine, SearchOutcome, Square};
pub use engine::{ComputerPlayer, Game, GameStatus};
pub use tt::TranspositionTable;
