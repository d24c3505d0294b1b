//! Positional evaluation terms.
//!
//! - Pawn structure (doubled, isolated)
//! - Passed pawns
//! - Bishop pair
//! - Rooks on open and semi-open files
//!
//! Every term scores one color; the evaluator takes the difference.

mod helpers;
mod minor_pieces;
mod passed_pawns;
mod pawn_structure;
mod rooks;
pub mod tables;

pub(crate) use helpers::PawnFiles;

#[cfg(test)]
mod tests {
    use super::PawnFiles;
    use crate::board::{Board, Color};

    fn layout(s: &str) -> Board {
        Board::from_layout(s).expect("valid layout")
    }

    #[test]
    fn test_doubled_and_isolated() {
        // Two white pawns on d-file, nothing beside them
        let board = layout("4k3/8/8/3P4/3P4/8/8/4K3 w");
        let files = PawnFiles::new(&board);
        // one extra doubled pawn (-20) and two isolated pawns (-30)
        assert_eq!(board.eval_pawn_structure(Color::White, &files), -50);
        assert_eq!(board.eval_pawn_structure(Color::Black, &files), 0);
    }

    #[test]
    fn test_connected_pawns_not_isolated() {
        let board = layout("4k3/8/8/8/8/8/3PP3/4K3 w");
        let files = PawnFiles::new(&board);
        assert_eq!(board.eval_pawn_structure(Color::White, &files), 0);
    }

    #[test]
    fn test_passed_pawn() {
        // d5 pawn is three ranks from promotion: 10 * (7 - 3) = 40
        let board = layout("4k3/8/8/3P4/8/8/8/4K3 w");
        assert_eq!(board.eval_passed_pawns(Color::White, false), 40);
        assert_eq!(board.eval_passed_pawns(Color::White, true), 80);
    }

    #[test]
    fn test_passed_pawn_blocked_by_adjacent_file() {
        let board = layout("4k3/2p5/8/3P4/8/8/8/4K3 w");
        assert_eq!(board.eval_passed_pawns(Color::White, false), 0);
        // d5 also stands ahead of c7 on an adjacent file
        assert_eq!(board.eval_passed_pawns(Color::Black, false), 0);
    }

    #[test]
    fn test_rook_files() {
        // Ra1 on an open file, Rh1 on a file with only a black pawn
        let board = layout("4k3/7p/8/8/8/8/8/R3K2R w");
        let files = PawnFiles::new(&board);
        assert_eq!(board.eval_rooks(Color::White, &files), 25 + 15);
    }

    #[test]
    fn test_bishop_pair() {
        let board = layout("4k3/8/8/8/8/8/8/2B1KB2 w");
        assert_eq!(board.eval_bishop_pair(Color::White), 40);
        assert_eq!(board.eval_bishop_pair(Color::Black), 0);
    }
}
