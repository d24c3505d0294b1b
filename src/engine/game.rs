use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::board::{Board, Color, Move, MoveError, MoveRecord, PieceKind, Square};

/// Half-moves without a pawn move or capture after which the game is drawn.
const FIFTY_MOVE_LIMIT: u32 = 100;

/// State of a game as seen by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::ThreefoldRepetition => write!(f, "draw by repetition"),
            GameStatus::FiftyMoveRule => write!(f, "draw by 50-move rule"),
            GameStatus::InsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Played {
    record: MoveRecord,
    halfmove_clock_before: u32,
}

/// A board plus the history needed for undo, redo and draw claims.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    halfmove_clock: u32,
    position_counts: HashMap<u64, u32>,
    played: Vec<Played>,
    redo_stack: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game starting from an arbitrary position, counted once.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut position_counts = HashMap::new();
        position_counts.insert(board.position_key(), 1);
        Game {
            board,
            halfmove_clock: 0,
            position_counts,
            played: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Occurrences of every position reached so far, by position key.
    #[must_use]
    pub fn position_counts(&self) -> &HashMap<u64, u32> {
        &self.position_counts
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.played.iter().map(|p| p.record.as_move())
    }

    /// Play a move for the side to move. Rejected moves leave the game as
    /// it was.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        let record = self.apply(from, to, promotion)?;
        self.redo_stack.clear();
        Ok(record)
    }

    pub fn play_move(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        self.play(mv.from, mv.to, mv.promotion)
    }

    /// Take back the last move. Returns `None` at the start of the game.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let played = self.played.pop()?;
        let key = self.board.position_key();
        if let Some(count) = self.position_counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.position_counts.remove(&key);
            }
        }
        self.board.undo_move(played.record);
        self.halfmove_clock = played.halfmove_clock_before;
        self.redo_stack.push(played.record.as_move());
        Some(played.record)
    }

    /// Replay the most recently undone move, if any.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        let mv = self.redo_stack.pop()?;
        match self.apply(mv.from, mv.to, mv.promotion) {
            Ok(record) => Some(record),
            Err(err) => {
                debug_assert!(false, "redo of {mv} failed: {err}");
                self.redo_stack.clear();
                None
            }
        }
    }

    /// True once the current position has occurred three times.
    #[must_use]
    pub fn check_threefold_repetition(&self) -> bool {
        self.position_counts
            .get(&self.board.position_key())
            .is_some_and(|&n| n >= 3)
    }

    /// True once 100 half-moves passed without a pawn move or capture.
    #[must_use]
    pub fn fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
    }

    /// Terminal conditions first, then draw claims.
    pub fn status(&mut self) -> GameStatus {
        let color = self.board.side_to_move();
        if self.board.is_checkmate(color) {
            GameStatus::Checkmate {
                winner: color.opponent(),
            }
        } else if self.board.is_stalemate(color) {
            GameStatus::Stalemate
        } else if self.check_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else if self.fifty_move_rule() {
            GameStatus::FiftyMoveRule
        } else if self.board.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    fn apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        let record = self
            .board
            .apply_move(from, to, promotion)
            .inspect_err(|err| debug!("rejected {from}{to}: {err}"))?;

        let halfmove_clock_before = self.halfmove_clock;
        self.halfmove_clock = if record.resets_halfmove_clock() {
            0
        } else {
            self.halfmove_clock + 1
        };
        *self
            .position_counts
            .entry(self.board.position_key())
            .or_insert(0) += 1;
        self.played.push(Played {
            record,
            halfmove_clock_before,
        });
        Ok(record)
    }
}
