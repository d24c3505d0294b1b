//! Game management on top of the board.
//!
//! `Game` keeps the move history and the draw bookkeeping (half-move clock
//! and position occurrence counts) that the board itself does not track.
//! `ComputerPlayer` wraps a search engine for one side.

mod game;
mod player;

pub use game::{Game, GameStatus};
pub use player::ComputerPlayer;
