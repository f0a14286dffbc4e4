use super::{is_occupied, is_opponent, piece_at, MoveRules};
use crate::geometry;
use crate::piece::{MoveList, Piece};
use crate::types::{Position, Team};

/// Pawn movement: single and double pushes, diagonal captures and en passant
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pawn;

/// Returns `true` if a pawn of `team` on `origin` can capture en passant by moving to `dst`
///
/// This requires `dst` to be empty and an opponent's pawn that has just made a double step
/// to stand on the square next to `origin` on the same file as `dst`. Such a pawn can only stand
/// on [`geometry::enpassant_src_rank()`].
fn is_enpassant_target(origin: Position, dst: Position, team: Team, pieces: &[Piece]) -> bool {
    if origin.rank() != geometry::enpassant_src_rank(team) || is_occupied(pieces, dst) {
        return false;
    }
    let side = Position::from_parts(dst.file(), origin.rank());
    matches!(
        piece_at(pieces, side),
        Some(p) if p.is_pawn() && p.team() != team && p.en_passant()
    )
}

impl MoveRules for Pawn {
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        let dir = geometry::pawn_direction(team);
        let dx = origin.file_delta(destination);
        let dy = origin.rank_delta(destination);

        if dx == 0 {
            if dy == dir {
                return !is_occupied(pieces, destination);
            }
            if dy == 2 * dir && origin.rank() == geometry::pawn_start_rank(team) {
                return match origin.try_shift(0, dir) {
                    Some(mid) => !is_occupied(pieces, mid) && !is_occupied(pieces, destination),
                    None => false,
                };
            }
            return false;
        }

        if dx.abs() == 1 && dy == dir {
            return is_opponent(pieces, destination, team)
                || is_enpassant_target(origin, destination, team, pieces);
        }

        false
    }

    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        let mut res = MoveList::new();
        let team = piece.team();
        let origin = piece.position();
        let dir = geometry::pawn_direction(team);

        if let Some(one) = origin.try_shift(0, dir) {
            if !is_occupied(pieces, one) {
                res.push(one);
                if origin.rank() == geometry::pawn_start_rank(team) {
                    if let Some(two) = origin.try_shift(0, 2 * dir) {
                        if !is_occupied(pieces, two) {
                            res.push(two);
                        }
                    }
                }
            }
        }

        for dx in [-1, 1] {
            if let Some(dst) = origin.try_shift(dx, dir) {
                if is_opponent(pieces, dst, team) || is_enpassant_target(origin, dst, team, pieces)
                {
                    res.push(dst);
                }
            }
        }

        res
    }
}
