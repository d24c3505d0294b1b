//! Search tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{layout, sq};
use crate::board::{
    Board, Move, SearchEngine, SearchInfo, SearchLimits, SearchLogger, SearchOutcome,
    SearchParams, SearchResult, MATE_SCORE, MATE_THRESHOLD,
};

fn best(engine: &mut SearchEngine, board: &mut Board, depth: u32) -> SearchResult {
    match engine.get_best_move(board, depth) {
        SearchOutcome::Move(result) => result,
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn test_finds_back_rank_mate() {
    let mut board = layout("6k1/5ppp/8/8/8/8/8/R5K1 w -");
    let mut engine = SearchEngine::default();
    let result = best(&mut engine, &mut board, 3);
    assert_eq!(result.best_move, Move::new(sq("a1"), sq("a8")));
    assert!(result.score >= MATE_THRESHOLD);
    // Mate found at depth 1 ends the deepening early.
    assert_eq!(result.depth, 1);
}

#[test]
fn test_quicker_mate_scores_higher() {
    let mut board = layout("6k1/5ppp/8/8/8/8/8/R5K1 w -");
    let mut engine = SearchEngine::new(SearchParams {
        start_depth: 3,
        ..SearchParams::default()
    });
    let result = best(&mut engine, &mut board, 3);
    assert_eq!(result.best_move, Move::new(sq("a1"), sq("a8")));
    // Mated with two plies left below the root move.
    assert_eq!(result.score, MATE_SCORE + 2);
}

#[test]
fn test_wins_hanging_queen() {
    let mut board = layout("4k3/8/8/3q4/8/8/8/3RK3 w -");
    let mut engine = SearchEngine::default();
    let result = best(&mut engine, &mut board, 2);
    assert_eq!(result.best_move, Move::new(sq("d1"), sq("d5")));
    assert!(result.score > 0);
}

#[test]
fn test_terminal_roots() {
    let mut engine = SearchEngine::default();

    let mut mated = Board::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        mated.apply_move(sq(from), sq(to), None).unwrap();
    }
    assert_eq!(engine.get_best_move(&mut mated, 3), SearchOutcome::Checkmate);

    let mut stalemate = layout("7k/5Q2/6K1/8/8/8/8/8 b -");
    assert_eq!(engine.get_best_move(&mut stalemate, 3), SearchOutcome::Stalemate);
}

#[test]
fn test_search_restores_board() {
    let mut board = layout("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq");
    let before = board.clone();
    let mut engine = SearchEngine::default();
    best(&mut engine, &mut board, 2);
    assert_eq!(board, before);
}

#[test]
fn test_warm_table_gives_same_result() {
    let mut board = Board::new();
    let mut engine = SearchEngine::default();
    let cold = best(&mut engine, &mut board, 3);
    let warm = best(&mut engine, &mut board, 3);
    assert_eq!(
        (cold.best_move, cold.score, cold.depth),
        (warm.best_move, warm.score, warm.depth)
    );
    assert!(engine.stats().tt_hits > 0);

    let mut fresh = SearchEngine::default();
    let again = best(&mut fresh, &mut board, 3);
    assert_eq!((cold.best_move, cold.score), (again.best_move, again.score));

    engine.clear_tt();
    let cleared = best(&mut engine, &mut board, 3);
    assert_eq!(cold, cleared);
}

#[test]
fn test_stopped_search_falls_back_to_legal_move() {
    let mut board = Board::new();
    let mut engine = SearchEngine::default();
    let limits = SearchLimits::unlimited();
    limits.stop.store(true, Ordering::Relaxed);

    let SearchOutcome::Move(result) = engine.search(&mut board, 5, &limits) else {
        panic!("start position has moves");
    };
    assert_eq!(result.depth, 0);
    let color = board.side_to_move();
    assert!(board.legal_moves(color).contains(&result.best_move));
}

#[test]
fn test_expired_clock_completes_no_iteration() {
    let mut board = Board::new();
    let mut engine = SearchEngine::default();
    let limits = SearchLimits::with_budget(Duration::ZERO);
    let result = engine.search(&mut board, 4, &limits);
    assert!(matches!(result, SearchOutcome::Move(r) if r.depth == 0));
}

#[test]
fn test_zero_depth_returns_ordered_first_move() {
    // The only capture is tried first.
    let mut board = layout("4k3/8/8/3q4/8/8/8/3RK3 w -");
    let mut engine = SearchEngine::default();
    let result = best(&mut engine, &mut board, 0);
    assert_eq!(result.best_move, Move::new(sq("d1"), sq("d5")));
    assert_eq!(result.depth, 0);
}

#[test]
fn test_losing_side_takes_the_repetition() {
    let mut board = layout("4k3/8/8/3q4/8/8/8/4K1N1 w -");
    let repeat = Move::new(sq("g1"), sq("f3"));
    let repeated_key = board.with_move(repeat, |b| b.position_key());

    let mut engine = SearchEngine::default();
    engine.set_history(HashMap::from([
        (board.position_key(), 1),
        (repeated_key, 2),
    ]));
    let result = best(&mut engine, &mut board, 2);
    assert_eq!(result.best_move, repeat);
    assert_eq!(result.score, -SearchParams::default().draw_penalty);
}

#[test]
fn test_identical_engines_agree() {
    let mut board = layout("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq");
    let first = best(&mut SearchEngine::default(), &mut board, 2);
    let second = best(&mut SearchEngine::default(), &mut board, 2);
    assert_eq!(first, second);
}

#[test]
fn test_depth_one_sees_the_recapture() {
    // e6 defends d5, so Qxd5 loses the queen one ply past the horizon.
    let mut board = layout("4k3/8/4p3/3p4/8/8/8/3QK3 w -");
    let mut engine = SearchEngine::default();
    let result = best(&mut engine, &mut board, 1);
    assert_ne!(result.best_move, Move::new(sq("d1"), sq("d5")));
    assert!(result.score > 0);
}

#[test]
fn test_without_quiescence_the_capture_looks_free() {
    let mut board = layout("4k3/8/4p3/3p4/8/8/8/3QK3 w -");
    let mut engine = SearchEngine::new(SearchParams {
        max_quiescence_depth: 0,
        ..SearchParams::default()
    });
    let result = best(&mut engine, &mut board, 1);
    assert_eq!(result.best_move, Move::new(sq("d1"), sq("d5")));
}

#[test]
fn test_quiescence_scores_mate_when_no_evasion() {
    // At depth 1 the reply node is already quiescence.
    let mut board = layout("6k1/5ppp/8/8/8/8/8/R5K1 w -");
    let mut engine = SearchEngine::default();
    let result = best(&mut engine, &mut board, 1);
    assert_eq!(result.best_move, Move::new(sq("a1"), sq("a8")));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn test_quiescence_searches_quiet_evasions() {
    // Every reply to Nc7+ is a quiet king move, after which Nxa8 wins the rook.
    let mut board = layout("r3k3/8/8/3N4/8/8/8/4K3 w -");
    let mut engine = SearchEngine::default();
    let result = best(&mut engine, &mut board, 1);
    assert_eq!(result.best_move, Move::new(sq("d5"), sq("c7")));
    assert!(result.score > 0);
}

#[test]
fn test_quiescence_checks_reveal_back_rank_mate() {
    // Rxd5 leaves the first rank to Ra1#, a quiet check.
    let position = "r5k1/8/8/3n4/8/8/5PPP/3R2K1 w -";
    let grab = Move::new(sq("d1"), sq("d5"));

    let mut board = layout(position);
    let mut with_checks = SearchEngine::default();
    let result = best(&mut with_checks, &mut board, 1);
    assert_ne!(result.best_move, grab);
    assert!(result.score > -MATE_THRESHOLD);

    let mut board = layout(position);
    let mut without_checks = SearchEngine::new(SearchParams {
        quiescence_checks: false,
        ..SearchParams::default()
    });
    assert_eq!(best(&mut without_checks, &mut board, 1).best_move, grab);
}

/// Records each iteration and raises the stop flag after it.
struct StopAfterReport {
    stop: Arc<AtomicBool>,
    reports: Arc<Mutex<Vec<SearchInfo>>>,
}

impl SearchLogger for StopAfterReport {
    fn info(&self, info: &SearchInfo) {
        self.reports.lock().push(info.clone());
        self.stop.store(true, Ordering::Relaxed);
    }
}

#[test]
fn test_stop_after_first_iteration_keeps_it() {
    let mut board = Board::new();
    let limits = SearchLimits::unlimited();
    let reports = Arc::new(Mutex::new(Vec::new()));

    let mut engine = SearchEngine::default();
    engine.set_logger(Some(Box::new(StopAfterReport {
        stop: Arc::clone(&limits.stop),
        reports: Arc::clone(&reports),
    })));

    let SearchOutcome::Move(result) = engine.search(&mut board, 5, &limits) else {
        panic!("start position has moves");
    };
    assert_eq!(result.depth, 1);

    let reports = reports.lock();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].depth, 1);
    assert_eq!(reports[0].score, result.score);
    assert_eq!(reports[0].pv, result.best_move.to_string());
}

#[test]
fn test_history_applies_to_one_search() {
    let mut board = layout("4k3/8/8/3q4/8/8/8/4K1N1 w -");
    let repeated_key = board.with_move(Move::new(sq("g1"), sq("f3")), |b| b.position_key());
    let draw = -SearchParams::default().draw_penalty;

    let mut engine = SearchEngine::default();
    engine.set_history(HashMap::from([
        (board.position_key(), 1),
        (repeated_key, 2),
    ]));
    assert_eq!(best(&mut engine, &mut board, 2).score, draw);
    // No repetition to hide in once the game history is gone.
    assert!(best(&mut engine, &mut board, 2).score < draw);
}
