//! Pieces and move lists

use crate::types::{PieceKind, Position, Team};

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Maximum number of destinations a single piece can have
///
/// A queen in the middle of an empty board reaches 27 squares, so 32 is always enough.
pub const MAX_DESTINATIONS: usize = 32;

/// Ordered list of destination squares of a single piece
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash)]
pub struct MoveList(ArrayVec<Position, MAX_DESTINATIONS>);

impl Deref for MoveList {
    type Target = ArrayVec<Position, MAX_DESTINATIONS>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Position> for MoveList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        MoveList(iter.into_iter().collect())
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }

    #[inline]
    pub fn has(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Removes `pos` from the list, keeping the order of the remaining items
    #[inline]
    pub fn remove_pos(&mut self, pos: Position) {
        self.0.retain(|p| *p != pos);
    }
}

/// Chess piece standing on the board
///
/// Besides its kind, team and square, the piece carries two pieces of per-turn state:
///
/// - `en_passant` is `true` only for a pawn that advanced two squares on the immediately
///   preceding move.
/// - `allowed_moves` holds the destinations computed by the last
///   [`Board::calculate_all_moves()`](crate::Board::calculate_all_moves). It becomes stale as soon
///   as any piece moves, and boards produced by moves carry empty lists.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    position: Position,
    kind: PieceKind,
    team: Team,
    en_passant: bool,
    allowed_moves: MoveList,
}

impl Piece {
    #[inline]
    pub fn new(position: Position, kind: PieceKind, team: Team) -> Piece {
        Piece {
            position,
            kind,
            team,
            en_passant: false,
            allowed_moves: MoveList::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Returns `true` if this is a pawn that can be captured en passant on the next move
    #[inline]
    pub fn en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub fn allowed_moves(&self) -> &MoveList {
        &self.allowed_moves
    }

    #[inline]
    pub fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }

    /// Returns the piece with `en_passant` flag set to `flag`
    ///
    /// Useful to set up positions where an en passant capture is possible right away.
    #[inline]
    pub fn with_en_passant(mut self, flag: bool) -> Piece {
        self.en_passant = flag;
        self
    }

    #[inline]
    pub(crate) fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, flag: bool) {
        self.en_passant = flag;
    }

    #[inline]
    pub(crate) fn set_allowed_moves(&mut self, moves: MoveList) {
        self.allowed_moves = moves;
    }

    #[inline]
    pub(crate) fn allowed_moves_mut(&mut self) -> &mut MoveList {
        &mut self.allowed_moves
    }

    #[inline]
    pub(crate) fn clear_allowed_moves(&mut self) {
        self.allowed_moves.clear();
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.kind.as_char(self.team), self.position)
    }
}
