//! Search tests to verify the engine finds correct moves in various positions.

use chess_ai::board::{Board, Color, SearchEngine, SearchOutcome, SearchResult};

fn search(layout: &str, depth: u32) -> SearchResult {
    let mut board = Board::from_layout(layout).expect("valid layout");
    let mut engine = SearchEngine::default();
    match engine.get_best_move(&mut board, depth) {
        SearchOutcome::Move(result) => result,
        other => panic!("expected a move in {layout}, got {other:?}"),
    }
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let result = search("6k1/5ppp/8/8/8/8/8/4Q2K w -", 4);
    assert_eq!(result.best_move.to_string(), "e1e8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    // White to move, Qxf7# is mate
    let result = search(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq",
        4,
    );
    assert_eq!(result.best_move.to_string(), "h5f7", "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    let result = search(
        "r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq",
        3,
    );
    // Qxc6 wins a knight but loses the queen to a pawn
    assert_ne!(result.best_move.to_string(), "f3c6", "Should not hang the queen on c6");
}

/// Test that the engine captures free material
#[test]
fn captures_free_piece() {
    let result = search("4k3/8/8/4n3/8/5N2/8/4K3 w -", 2);
    assert_eq!(result.best_move.to_string(), "f3e5");
    assert!(result.score > 200);
}

/// Test iterative deepening produces legal results at every depth
#[test]
fn iterative_deepening_consistency() {
    let mut board = Board::new();
    let mut engine = SearchEngine::default();
    let moves = board.legal_moves(Color::White);

    for depth in 1..=3 {
        let outcome = engine.get_best_move(&mut board, depth);
        let mv = outcome.best_move().expect("start position has moves");
        assert!(moves.contains(&mv), "Depth {depth} move should be legal");
        assert!(matches!(outcome, SearchOutcome::Move(r) if r.depth == depth));
    }
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // White king on a1 can only escape to a2
    let result = search("1r5k/8/8/8/8/8/8/K6r w -", 3);
    assert_eq!(result.best_move.to_string(), "a1a2", "Only legal move should be Ka2");
}

/// Test that search reports checkmate instead of a move
#[test]
fn no_move_in_checkmate() {
    let mut board =
        Board::from_layout("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq").unwrap();
    assert!(board.is_checkmate(Color::White), "Position should be checkmate");

    let mut engine = SearchEngine::default();
    assert_eq!(engine.get_best_move(&mut board, 4), SearchOutcome::Checkmate);
}

/// Test that stalemate is correctly identified
#[test]
fn identifies_stalemate() {
    // Black to move, king on a8, white queen on b6, white king on c6
    let mut board = Board::from_layout("k7/8/1QK5/8/8/8/8/8 b -").unwrap();
    assert!(board.is_stalemate(Color::Black), "Position should be stalemate");
    assert!(!board.is_checkmate(Color::Black), "Position should not be checkmate");

    let mut engine = SearchEngine::default();
    assert_eq!(engine.get_best_move(&mut board, 3), SearchOutcome::Stalemate);
}

/// Test evaluation is symmetric
#[test]
fn evaluation_symmetry() {
    let board = Board::new();
    assert_eq!(board.evaluate(Color::White), 0);
}

/// Test that positions with material advantage evaluate correctly
#[test]
fn evaluation_material_advantage() {
    let white_up = Board::from_layout("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq").unwrap();
    let black_up = Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq").unwrap();

    let eval_white_up = white_up.evaluate(Color::White);
    let eval_black_up = black_up.evaluate(Color::White);
    assert!(eval_white_up > 800, "White up a queen should be very positive (eval: {eval_white_up})");
    assert!(eval_black_up < -800, "Black up a queen should be very negative (eval: {eval_black_up})");
}
