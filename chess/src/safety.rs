//! King safety filter
//!
//! The filter removes from the king's allowed moves every square on which it would be attacked
//! right after the move. It looks exactly one move ahead: for each candidate square it builds
//! the layout after the king moves there and asks whether any opposing piece could reach it.
//!
//! Moves of other pieces are not filtered, so pins and leaving the king in check with a
//! non-king move are not detected.

use crate::bitboard::Bitboard;
use crate::piece::Piece;
use crate::rules::RuleSet;
use crate::types::{Position, Team};

/// Returns the layout obtained by moving the piece from `src` to `dst`, capturing whatever
/// stands on `dst`
///
/// The result is a fresh copy, so `pieces` stays untouched. Allowed moves are dropped from the
/// copy, as they mean nothing for the new layout.
fn simulate_move(pieces: &[Piece], src: Position, dst: Position) -> Vec<Piece> {
    pieces
        .iter()
        .filter(|p| !p.is_at(dst))
        .map(|p| {
            let mut p = p.clone();
            p.clear_allowed_moves();
            if p.is_at(src) {
                p.set_position(dst);
            }
            p
        })
        .collect()
}

/// Returns all the squares that pieces of team `attacker` could reach on layout `pieces`
///
/// Pawns contribute only their diagonal destinations: a pawn push never captures, so the
/// square in front of a pawn is not attacked by it. The diagonal destinations are included
/// only when the rules allow the pawn to move there, i.e. when there is something to capture.
pub fn attacked_squares<R: RuleSet + ?Sized>(
    rules: &R,
    pieces: &[Piece],
    attacker: Team,
) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    for piece in pieces.iter().filter(|p| p.team() == attacker) {
        let candidates = rules.candidates(piece, pieces);
        if piece.is_pawn() {
            let file = piece.position().file();
            res.extend(candidates.iter().copied().filter(|dst| dst.file() != file));
        } else {
            res.extend(candidates.iter().copied());
        }
    }
    res
}

/// Returns `true` if the king standing on `king` could be attacked after moving to `dst`
pub fn is_king_move_unsafe<R: RuleSet + ?Sized>(
    rules: &R,
    pieces: &[Piece],
    king: Position,
    dst: Position,
    attacker: Team,
) -> bool {
    let layout = simulate_move(pieces, king, dst);
    attacked_squares(rules, &layout, attacker).has(dst)
}

/// Restricts the allowed moves of `defending` team's king to the squares not attacked by the
/// other team
///
/// Other pieces of the team keep their allowed moves. If the king has no allowed moves or is
/// missing from `pieces`, nothing is changed. The king itself never changes its position here,
/// all the simulation happens on separate copies of the pieces.
pub fn filter_king_moves<R: RuleSet + ?Sized>(rules: &R, pieces: &mut [Piece], defending: Team) {
    let idx = match pieces
        .iter()
        .position(|p| p.is_king() && p.team() == defending)
    {
        Some(idx) => idx,
        None => return,
    };
    if pieces[idx].allowed_moves().is_empty() {
        return;
    }

    let king = pieces[idx].position();
    let candidates = pieces[idx].allowed_moves().clone();
    let unsafe_moves: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&dst| is_king_move_unsafe(rules, pieces, king, dst, defending.inv()))
        .collect();

    let allowed = pieces[idx].allowed_moves_mut();
    for dst in unsafe_moves {
        allowed.remove_pos(dst);
    }
}
