use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Piece, Square};

impl Board {
    pub(super) fn knight_destinations(&self, knight: Piece, out: &mut Vec<Square>) {
        out.extend(
            KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dr, df)| knight.square.offset(dr, df))
                .filter(|&sq| self.can_land_on(sq, knight.color)),
        );
    }
}
