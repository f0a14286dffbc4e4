//! Per-kind movement rules
//!
//! This module contains the purely geometric part of the chess rules: which squares a piece can
//! reach on a given layout, ignoring whether its own king stays safe. The engine never looks at
//! the geometry directly and only talks to a [`RuleSet`].

mod leaper;
mod pawn;
mod slider;

pub use leaper::{King, Knight};
pub use pawn::Pawn;
pub use slider::{Bishop, Queen, Rook};

use crate::piece::{MoveList, Piece};
use crate::types::{PieceKind, Position, Team};

/// Movement rules of a single piece kind
///
/// Implementations must be pure: the result depends only on the arguments.
pub trait MoveRules {
    /// Returns `true` if a piece of team `team` standing on `origin` may move to `destination`
    /// on the layout `pieces`, ignoring king safety
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool;

    /// Returns all the squares `piece` may move to on the layout `pieces`, ignoring king safety
    ///
    /// The piece itself is expected to be present in `pieces`. Squares occupied by pieces of
    /// the same team are never returned.
    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList;
}

/// Provider of [`MoveRules`] for every piece kind
pub trait RuleSet {
    fn rules(&self, kind: PieceKind) -> &dyn MoveRules;

    #[inline]
    fn is_valid(
        &self,
        kind: PieceKind,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        self.rules(kind).is_valid(origin, destination, team, pieces)
    }

    #[inline]
    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        self.rules(piece.kind()).candidates(piece, pieces)
    }
}

/// Standard chess geometry, without castling
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    #[inline]
    fn rules(&self, kind: PieceKind) -> &dyn MoveRules {
        match kind {
            PieceKind::Pawn => &Pawn,
            PieceKind::Knight => &Knight,
            PieceKind::Bishop => &Bishop,
            PieceKind::Rook => &Rook,
            PieceKind::Queen => &Queen,
            PieceKind::King => &King,
        }
    }
}

/// Returns the piece standing on `pos`, if any
#[inline]
pub fn piece_at(pieces: &[Piece], pos: Position) -> Option<&Piece> {
    pieces.iter().find(|p| p.is_at(pos))
}

#[inline]
pub fn is_occupied(pieces: &[Piece], pos: Position) -> bool {
    piece_at(pieces, pos).is_some()
}

/// Returns `true` if `pos` holds a piece of the team opposite to `team`
#[inline]
pub fn is_opponent(pieces: &[Piece], pos: Position, team: Team) -> bool {
    matches!(piece_at(pieces, pos), Some(p) if p.team() != team)
}

/// Returns `true` if a piece of `team` may end its move on `pos`, i.e. the square is either
/// empty or holds an opponent's piece
#[inline]
pub fn is_empty_or_opponent(pieces: &[Piece], pos: Position, team: Team) -> bool {
    match piece_at(pieces, pos) {
        Some(p) => p.team() != team,
        None => true,
    }
}
