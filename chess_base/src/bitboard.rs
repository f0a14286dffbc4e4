use crate::types::{File, Position, Rank};
use derive_more::BitOr;
use std::fmt;
use std::iter::FromIterator;

/// Set of board squares
///
/// Bit `i` is set iff the square with [`Position::index()`] equal to `i` belongs to the set.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash, BitOr)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const fn with(self, pos: Position) -> Bitboard {
        Bitboard(self.0 | (1_u64 << pos.index()))
    }

    pub fn set(&mut self, pos: Position) {
        *self = self.with(pos);
    }

    pub const fn has(&self, pos: Position) -> bool {
        ((self.0 >> pos.index()) & 1) != 0
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Position> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

impl Extend<Position> for Bitboard {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for pos in iter {
            self.set(pos);
        }
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Bitboard({})", self)
    }
}

/// Formats the set rank by rank, from rank 8 down to rank 1, files from A to H
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            if rank != Rank::R8 {
                write!(f, "/")?;
            }
            for file in File::iter() {
                let bit = self.has(Position::from_parts(file, rank));
                write!(f, "{}", if bit { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_ops() {
        let ca = Position::from_parts(File::A, Rank::R4);
        let cb = Position::from_parts(File::E, Rank::R2);
        let cc = Position::from_parts(File::F, Rank::R3);

        let mut bb = Bitboard::EMPTY;
        assert!(bb.is_empty());
        bb.set(ca);
        bb.set(ca);
        assert_eq!(bb.len(), 1);
        assert!(bb.has(ca));
        assert!(!bb.has(cb));

        let other: Bitboard = [cb, cc].into_iter().collect();
        let joined = bb | other;
        assert_eq!(joined.len(), 3);
        assert_eq!(joined, Bitboard::EMPTY.with(ca).with(cb).with(cc));
        assert_eq!(joined | Bitboard::EMPTY.with(cb), joined);

        bb.extend([cb, cc]);
        assert_eq!(bb, joined);
    }

    #[test]
    fn test_format() {
        let bb = Bitboard::EMPTY
            .with(Position::from_parts(File::A, Rank::R4))
            .with(Position::from_parts(File::E, Rank::R2))
            .with(Position::from_parts(File::F, Rank::R3))
            .with(Position::from_parts(File::H, Rank::R8));
        assert_eq!(
            bb.to_string(),
            "00000001/00000000/00000000/00000000/10000000/00000100/00001000/00000000"
        );
    }
}
