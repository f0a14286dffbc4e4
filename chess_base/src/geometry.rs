use crate::types::{Rank, Team};

/// Rank delta of a single pawn step for team `t`
pub const fn pawn_direction(t: Team) -> isize {
    match t {
        Team::White => 1,
        Team::Black => -1,
    }
}

/// Rank from which a pawn of team `t` may advance two squares
pub const fn pawn_start_rank(t: Team) -> Rank {
    match t {
        Team::White => Rank::R2,
        Team::Black => Rank::R7,
    }
}

/// Rank on which a pawn of team `t` must be promoted
pub const fn promotion_rank(t: Team) -> Rank {
    match t {
        Team::White => Rank::R8,
        Team::Black => Rank::R1,
    }
}

/// Rank on which a pawn of team `t` stands when it can capture en passant
pub const fn enpassant_src_rank(t: Team) -> Rank {
    match t {
        Team::White => Rank::R5,
        Team::Black => Rank::R4,
    }
}

/// Rank on which a pawn of team `t` lands after capturing en passant
pub const fn enpassant_dst_rank(t: Team) -> Rank {
    match t {
        Team::White => Rank::R6,
        Team::Black => Rank::R3,
    }
}

pub const fn back_rank(t: Team) -> Rank {
    match t {
        Team::White => Rank::R1,
        Team::Black => Rank::R8,
    }
}
