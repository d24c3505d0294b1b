//! Computer against computer from the starting position.
//!
//! Usage: `selfplay [depth] [max_plies]`. Set `RUST_LOG=debug` to see the
//! per-iteration search summaries.

use std::env;

use log::info;

use chess_ai::board::{Color, SearchOutcome};
use chess_ai::engine::{ComputerPlayer, Game};

const DEFAULT_DEPTH: u32 = 3;
const DEFAULT_MAX_PLIES: usize = 200;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let depth = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);
    let max_plies = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut game = Game::new();
    let mut white = ComputerPlayer::new(Color::White, depth);
    let mut black = ComputerPlayer::new(Color::Black, depth);

    for ply in 0..max_plies {
        if game.status().is_over() {
            break;
        }
        let player = match game.side_to_move() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        match player.play_turn(&mut game) {
            SearchOutcome::Move(result) => {
                info!(
                    "ply {} {} plays {} (score {}, depth {}, nodes {})",
                    ply + 1,
                    player.color(),
                    result.best_move,
                    result.score,
                    result.depth,
                    result.nodes
                );
            }
            SearchOutcome::Checkmate | SearchOutcome::Stalemate => break,
        }
    }

    println!("{}", game.board());
    let moves: Vec<String> = game.moves().map(|m| m.to_string()).collect();
    println!("moves: {}", moves.join(" "));
    println!("result: {}", game.status());
}
