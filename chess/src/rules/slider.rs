use super::{is_empty_or_opponent, is_occupied, MoveRules};
use crate::piece::{MoveList, Piece};
use crate::types::{Position, Team};

const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Returns the unit direction from `origin` to `destination` if they lie on one line
/// (horizontal, vertical or diagonal)
fn direction(origin: Position, destination: Position) -> Option<(isize, isize)> {
    let dx = origin.file_delta(destination);
    let dy = origin.rank_delta(destination);
    if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
        return None;
    }
    Some((dx.signum(), dy.signum()))
}

fn slider_is_valid(
    dirs: &[(isize, isize)],
    origin: Position,
    destination: Position,
    team: Team,
    pieces: &[Piece],
) -> bool {
    let (dx, dy) = match direction(origin, destination) {
        Some(dir) if dirs.contains(&dir) => dir,
        _ => return false,
    };
    let mut cur = origin;
    while let Some(next) = cur.try_shift(dx, dy) {
        if next == destination {
            return is_empty_or_opponent(pieces, destination, team);
        }
        if is_occupied(pieces, next) {
            return false;
        }
        cur = next;
    }
    false
}

fn slider_candidates(dirs: &[(isize, isize)], piece: &Piece, pieces: &[Piece]) -> MoveList {
    let mut res = MoveList::new();
    for &(dx, dy) in dirs {
        let mut cur = piece.position();
        while let Some(next) = cur.try_shift(dx, dy) {
            if is_occupied(pieces, next) {
                if is_empty_or_opponent(pieces, next, piece.team()) {
                    res.push(next);
                }
                break;
            }
            res.push(next);
            cur = next;
        }
    }
    res
}

/// Bishop movement
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bishop;

impl MoveRules for Bishop {
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        slider_is_valid(&BISHOP_DIRS, origin, destination, team, pieces)
    }

    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        slider_candidates(&BISHOP_DIRS, piece, pieces)
    }
}

/// Rook movement
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rook;

impl MoveRules for Rook {
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        slider_is_valid(&ROOK_DIRS, origin, destination, team, pieces)
    }

    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        slider_candidates(&ROOK_DIRS, piece, pieces)
    }
}

/// Queen movement
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Queen;

impl MoveRules for Queen {
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        slider_is_valid(&QUEEN_DIRS, origin, destination, team, pieces)
    }

    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        slider_candidates(&QUEEN_DIRS, piece, pieces)
    }
}
