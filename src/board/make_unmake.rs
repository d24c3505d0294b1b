use super::error::MoveError;
use super::{Board, Color, LastMove, Move, MoveRecord, Piece, PieceKind, Special, Square};

/// Rook (from, to) files for a castle on the given side.
#[inline]
const fn castle_rook_files(kingside: bool) -> (usize, usize) {
    if kingside {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Board {
    /// Apply a move after checking it against the legal destinations of the
    /// piece on `from`. Nothing is mutated when an error is returned.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                square: from,
                to_move: self.side_to_move,
            });
        }
        if let Some(kind) = promotion.filter(|k| !k.is_promotion_choice()) {
            return Err(MoveError::InvalidPromotion { kind });
        }
        if !self.legal_moves_for(from).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        let promotes =
            piece.kind == PieceKind::Pawn && to.rank() == piece.color.pawn_promotion_rank();
        if let Some(kind) = promotion.filter(|_| !promotes) {
            return Err(MoveError::InvalidPromotion { kind });
        }
        Ok(self.make_move(Move {
            from,
            to,
            promotion,
        }))
    }

    /// Apply a pseudo-legal move without validation.
    pub(crate) fn make_move(&mut self, mv: Move) -> MoveRecord {
        let piece = self.piece_at(mv.from).expect("make_move 'from' empty");
        debug_assert_eq!(piece.color, self.side_to_move, "moving out of turn");
        let color = piece.color;

        let mut record = MoveRecord {
            piece,
            from: mv.from,
            to: mv.to,
            captured: None,
            special: Special::None,
            castling_before: self.castling_rights,
            last_move_before: self.last_move,
        };

        match piece.kind {
            PieceKind::King if mv.from.file().abs_diff(mv.to.file()) == 2 => {
                let kingside = mv.to.file() > mv.from.file();
                let (rook_from, rook_to) = castle_rook_files(kingside);
                let rank = mv.from.rank();
                self.relocate(mv.from, mv.to);
                self.relocate(Square::at(rank, rook_from), Square::at(rank, rook_to));
                record.special = if kingside {
                    Special::CastleKingside
                } else {
                    Special::CastleQueenside
                };
            }
            PieceKind::Pawn if mv.from.file() != mv.to.file() && self.is_empty(mv.to) => {
                // En passant: the victim sits beside the origin, on the destination file.
                let victim = Square::at(mv.from.rank(), mv.to.file());
                record.captured = self.take(victim);
                debug_assert!(
                    record.captured.is_some_and(|p| p.kind == PieceKind::Pawn),
                    "en passant without a pawn to capture"
                );
                self.relocate(mv.from, mv.to);
                record.special = Special::EnPassant;
            }
            PieceKind::Pawn if mv.to.rank() == color.pawn_promotion_rank() => {
                let kind = mv.promotion.unwrap_or(PieceKind::Queen);
                record.captured = self.take(mv.to);
                self.take(mv.from);
                self.put(Piece::new(kind, color, mv.to));
                record.special = Special::Promotion(kind);
            }
            _ => {
                record.captured = self.take(mv.to);
                self.relocate(mv.from, mv.to);
            }
        }

        self.forfeit_castling(mv.from);
        self.forfeit_castling(mv.to);

        self.last_move = Some(LastMove {
            kind: piece.kind,
            color,
            from: mv.from,
            to: mv.to,
        });
        self.side_to_move = color.opponent();
        record
    }

    /// Exact inverse of [`Board::apply_move`].
    pub fn undo_move(&mut self, record: MoveRecord) {
        let MoveRecord {
            piece,
            from,
            to,
            captured,
            special,
            ..
        } = record;

        match special {
            Special::CastleKingside | Special::CastleQueenside => {
                let (rook_from, rook_to) =
                    castle_rook_files(matches!(special, Special::CastleKingside));
                let rank = from.rank();
                self.relocate(to, from);
                self.relocate(Square::at(rank, rook_to), Square::at(rank, rook_from));
            }
            Special::Promotion(_) => {
                self.take(to).expect("undo promotion: 'to' square empty");
                self.put(piece);
            }
            Special::None | Special::EnPassant => self.relocate(to, from),
        }

        if let Some(victim) = captured {
            self.put(victim);
        }

        self.castling_rights = record.castling_before;
        self.last_move = record.last_move_before;
        self.side_to_move = piece.color;
    }

    /// Run `f` with `mv` made on the board, then revert it.
    pub fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> R) -> R {
        let record = self.make_move(mv);
        let result = f(self);
        self.undo_move(record);
        result
    }

    /// A king or rook leaving, or a rook being captured on, its home square
    /// forfeits the matching right.
    fn forfeit_castling(&mut self, sq: Square) {
        for color in Color::BOTH {
            if sq.rank() != color.back_rank() {
                continue;
            }
            match sq.file() {
                0 => self.castling_rights.remove(color, false),
                4 => self.castling_rights.remove_color(color),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            }
        }
    }
}
