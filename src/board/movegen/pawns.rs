use super::super::{Board, Piece, PieceKind, Square};

impl Board {
    pub(super) fn pawn_destinations(&self, pawn: Piece, out: &mut Vec<Square>) {
        let from = pawn.square;
        let dir = pawn.color.pawn_direction();

        if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
            out.push(one);
            if from.rank() == pawn.color.pawn_start_rank() {
                if let Some(two) = from.offset(2 * dir, 0).filter(|&sq| self.is_empty(sq)) {
                    out.push(two);
                }
            }
        }

        for df in [-1, 1] {
            let Some(diag) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(diag) {
                Some(target) if target.color != pawn.color => out.push(diag),
                Some(_) => {}
                None if self.en_passant_available(pawn, df) => out.push(diag),
                None => {}
            }
        }
    }

    /// The previous move was an enemy double push landing right beside
    /// `pawn` on the `df` side.
    fn en_passant_available(&self, pawn: Piece, df: isize) -> bool {
        let Some(beside) = pawn.square.offset(0, df) else {
            return false;
        };
        self.last_move.is_some_and(|last| {
            last.is_double_pawn_push() && last.color != pawn.color && last.to == beside
        }) && self
            .piece_at(beside)
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != pawn.color)
    }
}
