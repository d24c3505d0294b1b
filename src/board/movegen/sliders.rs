use super::super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Piece, PieceKind, Square};

impl Board {
    /// Ray casts for bishops, rooks and queens. A ray stops at the first
    /// occupied square, which is included only when it holds an enemy.
    pub(super) fn slider_destinations(&self, slider: Piece, out: &mut Vec<Square>) {
        let diagonal = matches!(slider.kind, PieceKind::Bishop | PieceKind::Queen);
        let straight = matches!(slider.kind, PieceKind::Rook | PieceKind::Queen);

        let dirs = BISHOP_DIRECTIONS
            .iter()
            .filter(|_| diagonal)
            .chain(ROOK_DIRECTIONS.iter().filter(|_| straight));

        for &(dr, df) in dirs {
            let mut cur = slider.square;
            while let Some(next) = cur.offset(dr, df) {
                match self.piece_at(next) {
                    None => out.push(next),
                    Some(p) => {
                        if p.color != slider.color {
                            out.push(next);
                        }
                        break;
                    }
                }
                cur = next;
            }
        }
    }
}
