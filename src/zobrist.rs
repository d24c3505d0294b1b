//! Zobrist hashing for chess positions.
//!
//! Position keys identify a position for the transposition table and for
//! repetition counting. The placement component is kept incrementally by the
//! board; side to move, castling and en passant are folded in on demand.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, PieceKind, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][side]: 0=kingside, 1=queenside
    castling_keys: [[u64; 2]; 2],
    // en passant target file
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed: keys are identical across runs
        let mut rng = StdRng::seed_from_u64(0x00C0_FFEE_D15C_0BA1);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, kind: PieceKind, color: Color, sq: Square) -> u64 {
        self.piece_keys[kind.index()][color.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn side(&self, side_to_move: Color) -> u64 {
        match side_to_move {
            Color::White => 0,
            Color::Black => self.black_to_move_key,
        }
    }

    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            if rights.has(color, true) {
                key ^= self.castling_keys[color.index()][0];
            }
            if rights.has(color, false) {
                key ^= self.castling_keys[color.index()][1];
            }
        }
        key
    }

    #[inline]
    pub(crate) fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant_keys[sq.file()])
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
