use std::env;
use std::process::ExitCode;

use chess_ai::board::Move;
use chess_ai::engine::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in &args {
        let Some(mv) = Move::parse_coordinate(text) else {
            eprintln!("not a coordinate move: {text}");
            return ExitCode::FAILURE;
        };
        if let Err(err) = game.play_move(mv) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut board = game.board().clone();
    let color = board.side_to_move();
    let legal_moves = board.legal_moves(color);
    println!("side_to_move: {color}");
    println!("status: {}", game.status());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", board.is_checkmate(color));
    println!("stalemate: {}", board.is_stalemate(color));
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
