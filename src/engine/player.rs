use log::debug;

use crate::board::{Board, Color, SearchEngine, SearchOutcome, SearchParams};

use super::Game;

/// A computer-controlled side with its own search engine.
pub struct ComputerPlayer {
    color: Color,
    depth: u32,
    engine: SearchEngine,
}

impl ComputerPlayer {
    #[must_use]
    pub fn new(color: Color, depth: u32) -> Self {
        ComputerPlayer::with_params(color, depth, SearchParams::default())
    }

    #[must_use]
    pub fn with_params(color: Color, depth: u32, params: SearchParams) -> Self {
        ComputerPlayer {
            color,
            depth,
            engine: SearchEngine::new(params),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Search `board` for the side to move. The board is left unchanged.
    pub fn get_best_move(&mut self, board: &mut Board) -> SearchOutcome {
        if board.side_to_move() != self.color {
            debug!(
                "{} player asked to move for {}",
                self.color,
                board.side_to_move()
            );
        }
        self.engine.get_best_move(board, self.depth)
    }

    /// Search the game's position with its history as repetition context
    /// and play the chosen move.
    pub fn play_turn(&mut self, game: &mut Game) -> SearchOutcome {
        self.engine.set_history(game.position_counts().clone());
        let mut board = game.board().clone();
        let outcome = self.get_best_move(&mut board);
        if let SearchOutcome::Move(result) = outcome {
            if let Err(err) = game.play_move(result.best_move) {
                debug_assert!(false, "engine chose {}: {err}", result.best_move);
            }
        }
        outcome
    }
}
