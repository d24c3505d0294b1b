//! Move ordering for search.

use super::super::{Board, Move, MoveList, PieceKind, ScoredMoveList};
use super::constants::{CAPTURE_BASE, PROMOTION_BONUS};

/// Ordering score: captures by most valuable victim, least valuable
/// attacker, then promotions; quiet moves 0.
pub fn order_score(board: &Board, mv: &Move) -> i32 {
    let Some(attacker) = board.piece_at(mv.from) else {
        return 0;
    };
    let mut score = 0;

    if let Some(victim) = captured_kind(board, mv) {
        score += CAPTURE_BASE + 10 * victim.value() - attacker.kind.value();
    }
    if let Some(promo) = mv.promotion {
        score += PROMOTION_BONUS + promo.value();
    }
    score
}

/// Kind of piece `mv` would capture, including en passant.
pub fn captured_kind(board: &Board, mv: &Move) -> Option<PieceKind> {
    if let Some(victim) = board.piece_at(mv.to) {
        return Some(victim.kind);
    }
    let mover = board.piece_at(mv.from)?;
    (mover.kind == PieceKind::Pawn && mv.from.file() != mv.to.file()).then_some(PieceKind::Pawn)
}

#[inline]
pub fn is_tactical(board: &Board, mv: &Move) -> bool {
    mv.promotion.is_some() || captured_kind(board, mv).is_some()
}

/// Score and sort `moves`, best first. Equal scores keep generation order.
pub fn ordered(board: &Board, moves: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for mv in moves {
        scored.push(*mv, order_score(board, mv));
    }
    scored.sort_by_score_desc();
    scored
}
