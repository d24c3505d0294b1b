//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_ai::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert!(!board.legal_moves(Color::White).is_empty());
//! ```

pub use super::{
    Board, BoardBuilder, Color, LayoutError, Move, MoveError, MoveList, Piece, PieceKind,
    SearchEngine, SearchOutcome, SearchParams, Square,
};
