//! Attack detection: the single oracle check, castling and king safety are
//! built from.

use super::{Board, CastleOptions, Color, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// True if any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.is_attacked_ignoring(square, by, None)
    }

    /// Like [`Board::is_attacked`], but rays pass through `ignore` as if it
    /// were empty. Used to test king steps without moving the king.
    pub(crate) fn is_attacked_ignoring(
        &self,
        square: Square,
        by: Color,
        ignore: Option<Square>,
    ) -> bool {
        let holds = |sq: Square, kinds: &[PieceKind]| {
            self.piece_at(sq)
                .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
        };

        // A pawn of `by` attacks diagonally forward, so look one rank back.
        let back = -by.pawn_direction();
        if [-1, 1]
            .into_iter()
            .filter_map(|df| square.offset(back, df))
            .any(|sq| holds(sq, &[PieceKind::Pawn]))
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| square.offset(dr, df))
            .any(|sq| holds(sq, &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| square.offset(dr, df))
            .any(|sq| holds(sq, &[PieceKind::King]))
        {
            return true;
        }

        let ray_hits = |dirs: &[(isize, isize)], kinds: &[PieceKind]| {
            dirs.iter().any(|&(dr, df)| {
                let mut cur = square;
                while let Some(next) = cur.offset(dr, df) {
                    if Some(next) != ignore {
                        if let Some(p) = self.piece_at(next) {
                            return p.color == by && kinds.contains(&p.kind);
                        }
                    }
                    cur = next;
                }
                false
            })
        };

        ray_hits(&ROOK_DIRECTIONS, &[PieceKind::Rook, PieceKind::Queen])
            || ray_hits(&BISHOP_DIRECTIONS, &[PieceKind::Bishop, PieceKind::Queen])
    }

    /// True if `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_attacked(sq, color.opponent()))
    }

    /// True if a `color` king standing on `square` would be attacked.
    #[must_use]
    pub fn is_in_check_at(&self, color: Color, square: Square) -> bool {
        self.is_attacked_ignoring(square, color.opponent(), self.king_square(color))
    }

    /// Which castling moves `color` may play right now.
    #[must_use]
    pub fn can_castle(&self, color: Color) -> CastleOptions {
        let rank = color.back_rank();
        let king_home = Square::at(rank, 4);
        let king_ok = self
            .piece_at(king_home)
            .is_some_and(|p| p.kind == PieceKind::King && p.color == color);
        if !king_ok || self.is_attacked(king_home, color.opponent()) {
            return CastleOptions::default();
        }

        CastleOptions {
            kingside: self.castle_side_open(color, true),
            queenside: self.castle_side_open(color, false),
        }
    }

    fn castle_side_open(&self, color: Color, kingside: bool) -> bool {
        if !self.castling_rights.has(color, kingside) {
            return false;
        }
        let rank = color.back_rank();
        let (rook_file, between, transit): (usize, &[usize], [usize; 2]) = if kingside {
            (7, &[5, 6], [5, 6])
        } else {
            (0, &[1, 2, 3], [3, 2])
        };

        let rook_ok = self
            .piece_at(Square::at(rank, rook_file))
            .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);

        rook_ok
            && between.iter().all(|&f| self.is_empty(Square::at(rank, f)))
            && transit
                .iter()
                .all(|&f| !self.is_attacked(Square::at(rank, f), color.opponent()))
    }
}
