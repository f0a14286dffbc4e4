use super::{is_empty_or_opponent, MoveRules};
use crate::piece::{MoveList, Piece};
use crate::types::{Position, Team};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn leaper_is_valid(
    deltas: &[(isize, isize)],
    origin: Position,
    destination: Position,
    team: Team,
    pieces: &[Piece],
) -> bool {
    let delta = (origin.file_delta(destination), origin.rank_delta(destination));
    deltas.contains(&delta) && is_empty_or_opponent(pieces, destination, team)
}

fn leaper_candidates(deltas: &[(isize, isize)], piece: &Piece, pieces: &[Piece]) -> MoveList {
    deltas
        .iter()
        .filter_map(|&(dx, dy)| piece.position().try_shift(dx, dy))
        .filter(|&dst| is_empty_or_opponent(pieces, dst, piece.team()))
        .collect()
}

/// Knight movement
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Knight;

impl MoveRules for Knight {
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        leaper_is_valid(&KNIGHT_DELTAS, origin, destination, team, pieces)
    }

    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        leaper_candidates(&KNIGHT_DELTAS, piece, pieces)
    }
}

/// King movement (one square in any direction, no castling)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct King;

impl MoveRules for King {
    fn is_valid(
        &self,
        origin: Position,
        destination: Position,
        team: Team,
        pieces: &[Piece],
    ) -> bool {
        leaper_is_valid(&KING_DELTAS, origin, destination, team, pieces)
    }

    fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
        leaper_candidates(&KING_DELTAS, piece, pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    use std::collections::BTreeSet;

    fn moves_of<R: MoveRules>(rules: R, board: &Board, pos: Position) -> BTreeSet<String> {
        let piece = board.piece_at(pos).unwrap();
        rules
            .candidates(piece, board.pieces())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_knight() {
        let b = Board::from_layout("4k3/8/8/8/8/2p5/8/1N2K3").unwrap();
        assert_eq!(
            moves_of(Knight, &b, Position::new(1, 0)),
            BTreeSet::from(["a3".to_string(), "c3".to_string(), "d2".to_string()]),
        );
    }

    #[test]
    fn test_king() {
        let b = Board::from_layout("4k3/8/8/8/8/8/3Pp3/4K3").unwrap();
        assert_eq!(
            moves_of(King, &b, Position::new(4, 0)),
            BTreeSet::from([
                "d1".to_string(),
                "e2".to_string(),
                "f1".to_string(),
                "f2".to_string(),
            ]),
        );
        assert!(!King.is_valid(
            Position::new(4, 0),
            Position::new(4, 2),
            Team::White,
            b.pieces()
        ));
    }
}
