//! Making moves and promoting pawns

use crate::board::Board;
use crate::geometry;
use crate::piece::Piece;
use crate::rules::{self, RuleSet};
use crate::types::{PieceKind, Position};

use thiserror::Error;

/// Reason why a move was rejected
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The pawn on this square reached the last rank and was not promoted yet
    #[error("pawn on {0} awaits promotion")]
    PromotionPending(Position),
    /// There is no piece on the source square
    #[error("no piece on {0}")]
    NoPiece(Position),
    /// Source and destination are the same
    #[error("source and destination are the same")]
    NullMove,
    /// The piece has no allowed moves, or they were not computed since the last move
    #[error("no allowed moves for the piece on {0}")]
    NoMoves(Position),
    /// The destination is not among the allowed moves and the move is not an en passant
    #[error("move {src}{dst} is not allowed")]
    NotAllowed { src: Position, dst: Position },
}

/// Reason why a promotion was rejected
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum PromoteError {
    /// There is no piece on the pawn's square
    #[error("no piece on {0}")]
    NoPiece(Position),
    /// A pawn cannot be promoted to this kind
    #[error("cannot promote to {0:?}")]
    BadKind(PieceKind),
}

impl<R: RuleSet + Clone> Board<R> {
    /// Returns `true` if moving the piece `mover` to `dst` captures a pawn en passant
    fn is_enpassant(&self, mover: &Piece, dst: Position) -> bool {
        let src = mover.position();
        if !mover.is_pawn()
            || src.file_delta(dst).abs() != 1
            || src.rank() != geometry::enpassant_src_rank(mover.team())
            || dst.rank() != geometry::enpassant_dst_rank(mover.team())
            || self.piece_at(dst).is_some()
        {
            return false;
        }
        let captured = Position::from_parts(dst.file(), src.rank());
        matches!(
            self.piece_at(captured),
            Some(p) if p.is_pawn() && p.en_passant() && p.team() != mover.team()
        )
    }

    /// Makes the move from `src` to `dst`, or explains why it cannot be made
    ///
    /// The move is checked against the allowed moves of the piece, so
    /// [`Board::calculate_all_moves()`] must be called on this board first. En passant captures
    /// are recognized separately.
    ///
    /// If a pawn reaches the last rank, `on_promotion` is called exactly once with the pawn
    /// already standing on `dst`. The pawn is not promoted yet: the returned board has it in
    /// [`Board::pending_promotion()`] and the caller is expected to call
    /// [`Board::promote_pawn()`] on it before going on. Until then, every move on that board is
    /// rejected with [`MoveError::PromotionPending`].
    ///
    /// All the allowed moves on the returned board are cleared, as they are no longer valid.
    pub fn try_play_move<F: FnMut(&Piece)>(
        &self,
        src: Position,
        dst: Position,
        mut on_promotion: F,
    ) -> Result<Self, MoveError> {
        if let Some(pos) = self.pending_promotion {
            return Err(MoveError::PromotionPending(pos));
        }
        let mover = self.piece_at(src).ok_or(MoveError::NoPiece(src))?;
        if src == dst {
            return Err(MoveError::NullMove);
        }
        if mover.allowed_moves().is_empty() {
            return Err(MoveError::NoMoves(src));
        }

        if self.is_enpassant(mover, dst) {
            let captured = Position::from_parts(dst.file(), src.rank());
            let mut pieces: Vec<Piece> = self
                .pieces
                .iter()
                .filter(|p| !p.is_at(captured))
                .cloned()
                .collect();
            for p in &mut pieces {
                if p.is_at(src) {
                    p.set_position(dst);
                }
                p.set_en_passant(false);
                p.clear_allowed_moves();
            }
            return Ok(self.derive(pieces, None));
        }

        if !mover.allowed_moves().has(dst) {
            return Err(MoveError::NotAllowed { src, dst });
        }

        let mut pieces: Vec<Piece> = self
            .pieces
            .iter()
            .filter(|p| !p.is_at(dst))
            .cloned()
            .collect();
        let mut promotion = None;
        for p in &mut pieces {
            p.clear_allowed_moves();
            if !p.is_at(src) {
                p.set_en_passant(false);
                continue;
            }
            if p.is_pawn() {
                p.set_en_passant(src.rank_delta(dst).abs() == 2);
                p.set_position(dst);
                if dst.rank() == geometry::promotion_rank(p.team()) {
                    promotion = Some(dst);
                    on_promotion(&*p);
                }
            } else {
                p.set_position(dst);
            }
        }
        Ok(self.derive(pieces, promotion))
    }

    /// Makes the move from `src` to `dst`
    ///
    /// Does the same as [`Board::try_play_move()`], except that an illegal move is silently
    /// rejected: the returned board is then equal to `self`.
    pub fn play_move<F: FnMut(&Piece)>(
        &self,
        src: Position,
        dst: Position,
        on_promotion: F,
    ) -> Self {
        self.try_play_move(src, dst, on_promotion)
            .unwrap_or_else(|_| self.clone())
    }

    /// Replaces `pawn` with a piece of kind `kind`
    ///
    /// The piece is looked up by the pawn's square, the new piece keeps the square and the team
    /// and gets no allowed moves and no en passant flag. It is not checked that the pawn really
    /// stands on the last rank.
    pub fn try_promote_pawn(&self, kind: PieceKind, pawn: &Piece) -> Result<Self, PromoteError> {
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(PromoteError::BadKind(kind));
        }
        let pos = pawn.position();
        if rules::piece_at(&self.pieces, pos).is_none() {
            return Err(PromoteError::NoPiece(pos));
        }
        let pieces = self
            .pieces
            .iter()
            .map(|p| {
                if p.is_at(pos) {
                    Piece::new(pos, kind, pawn.team())
                } else {
                    p.clone()
                }
            })
            .collect();
        let pending = self.pending_promotion.filter(|&p| p != pos);
        Ok(self.derive(pieces, pending))
    }

    /// Replaces `pawn` with a piece of kind `kind`
    ///
    /// Does the same as [`Board::try_promote_pawn()`], but returns the board unchanged on error.
    pub fn promote_pawn(&self, kind: PieceKind, pawn: &Piece) -> Self {
        self.try_promote_pawn(kind, pawn)
            .unwrap_or_else(|_| self.clone())
    }
}
