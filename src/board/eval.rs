use super::eval_terms::tables::{pst_bonus, ENDGAME_MATERIAL_LIMIT, LONE_QUEEN_SUPPORT_LIMIT};
use super::eval_terms::PawnFiles;
use super::{Board, Color, PieceKind};

impl Board {
    /// Static score of the position from `color`'s point of view, in
    /// centipawns. Zero-sum: `evaluate(c) == -evaluate(c.opponent())`.
    #[must_use]
    pub fn evaluate(&self, color: Color) -> i32 {
        let endgame = self.is_endgame();
        let files = PawnFiles::new(self);
        self.side_score(color, endgame, &files) - self.side_score(color.opponent(), endgame, &files)
    }

    fn side_score(&self, color: Color, endgame: bool, files: &PawnFiles) -> i32 {
        let placement: i32 = self
            .pieces(color)
            .map(|p| {
                let material = if p.kind == PieceKind::King {
                    0
                } else {
                    p.kind.value()
                };
                material + pst_bonus(p.kind, color, p.square, endgame)
            })
            .sum();

        placement
            + self.eval_pawn_structure(color, files)
            + self.eval_passed_pawns(color, endgame)
            + self.eval_bishop_pair(color)
            + self.eval_rooks(color, files)
    }

    /// Game phase: selects the king table and doubles passed pawn bonuses.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        let queens = |c| self.count(c, PieceKind::Queen);
        let minor_and_rook_material = |c| {
            self.pieces(c)
                .filter(|p| {
                    matches!(
                        p.kind,
                        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook
                    )
                })
                .map(|p| p.kind.value())
                .sum::<i32>()
        };

        if Color::BOTH.iter().all(|&c| queens(c) == 0) {
            return true;
        }
        if Color::BOTH
            .iter()
            .any(|&c| queens(c) == 1 && minor_and_rook_material(c) <= LONE_QUEEN_SUPPORT_LIMIT)
        {
            return true;
        }
        let total: i32 = Color::BOTH
            .iter()
            .map(|&c| minor_and_rook_material(c) + queens(c) as i32 * PieceKind::Queen.value())
            .sum();
        total <= ENDGAME_MATERIAL_LIMIT
    }
}
