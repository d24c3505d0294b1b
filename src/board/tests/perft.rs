//! Perft (performance test) for move generation correctness.

use super::{layout, sq};
use crate::board::{Board, BoardBuilder, Color, LastMove, PieceKind};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    layout: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        layout: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        layout: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        layout: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w -",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        layout: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq",
        depths: &[(1, 6), (2, 264)],
    },
    TestPosition {
        name: "Position 5",
        layout: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ",
        depths: &[(1, 44), (2, 1486)],
    },
    TestPosition {
        name: "Promotion",
        layout: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b -",
        depths: &[(1, 24), (2, 496)],
    },
    TestPosition {
        name: "Castling",
        layout: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq",
        depths: &[(1, 26), (2, 568)],
    },
];

fn check_depths(name: &str, board: &mut Board, depths: &[(u32, u64)]) {
    for &(depth, expected) in depths {
        let start = Instant::now();
        let nodes = board.perft(depth);
        println!("  {name} depth {depth}: {nodes} nodes in {:?}", start.elapsed());
        assert_eq!(
            nodes, expected,
            "Perft failed for position '{name}' at depth {depth}. Expected: {expected}, Got: {nodes}"
        );
    }
}

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let mut board = layout(position.layout);
        check_depths(position.name, &mut board, position.depths);
    }
}

#[test]
fn test_en_passant_perft() {
    let mut board = BoardBuilder::from_layout("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq")
        .unwrap()
        .last_move(LastMove {
            kind: PieceKind::Pawn,
            color: Color::Black,
            from: sq("f7"),
            to: sq("f5"),
        })
        .build()
        .unwrap();
    check_depths("En Passant Capture", &mut board, &[(1, 31), (2, 707)]);
}

#[test]
fn test_perft_leaves_board_untouched() {
    let mut board = layout("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq");
    let before = board.clone();
    board.perft(2);
    assert_eq!(board, before);
}

#[test]
fn test_divide_sums_to_perft() {
    let mut board = Board::new();
    let divide = board.perft_divide(2);
    assert_eq!(divide.len(), 20);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
    assert!(divide.iter().all(|(_, n)| *n == 20));
}
