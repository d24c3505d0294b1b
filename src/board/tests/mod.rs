//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions and rules corner cases
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Search results and outcomes
//! - `proptest.rs` - Property-based tests

mod perft;
mod search;

use crate::board::{Board, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn layout(s: &str) -> Board {
    Board::from_layout(s).expect("valid layout")
}
