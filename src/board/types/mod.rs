//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and placed pieces
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `MoveRecord` and `MoveList` - move requests, undo records, lists
//! - `CastlingRights` / `CastleOptions` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleOptions, CastlingRights};
pub use moves::{LastMove, Move, MoveList, MoveRecord, Special};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use moves::ScoredMoveList;
