use super::super::attacks::KING_OFFSETS;
use super::super::{Board, Piece, Square};

impl Board {
    /// Safe king steps plus castling destinations.
    pub(super) fn king_destinations(&self, king: Piece, out: &mut Vec<Square>) {
        out.extend(
            KING_OFFSETS
                .iter()
                .filter_map(|&(dr, df)| king.square.offset(dr, df))
                .filter(|&sq| self.can_land_on(sq, king.color))
                .filter(|&sq| !self.is_in_check_at(king.color, sq)),
        );

        let castle = self.can_castle(king.color);
        let rank = king.color.back_rank();
        if castle.kingside {
            out.push(Square::at(rank, 6));
        }
        if castle.queenside {
            out.push(Square::at(rank, 2));
        }
    }
}
