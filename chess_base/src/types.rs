use std::fmt::{self, Display};
use std::hint;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceKindParseError {
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TeamParseError {
    #[error("unexpected team char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board rank, counted from White's side of the board
///
/// `R1` has index 0 and `R8` has index 7, so White pawns move towards larger indices.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => Rank::R1,
            1 => Rank::R2,
            2 => Rank::R3,
            3 => Rank::R4,
            4 => Rank::R5,
            5 => Rank::R6,
            6 => Rank::R7,
            7 => Rank::R8,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::from_index((u32::from(c) - u32::from('1')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'1' + *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Square on the board
///
/// Compared by value. A piece that moves gets a new `Position`, the old one is never changed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub const COUNT: usize = 64;

    /// Creates a position from raw file and rank indices
    ///
    /// # Panics
    ///
    /// Panics if either of the indices is not in `0..8`.
    pub const fn new(file: usize, rank: usize) -> Position {
        Position::from_parts(File::from_index(file), Rank::from_index(rank))
    }

    pub const fn from_parts(file: File, rank: Rank) -> Position {
        Position(((rank as u8) << 3) | file as u8)
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_index_unchecked((self.0 & 7) as usize) }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_index_unchecked((self.0 >> 3) as usize) }
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Signed file difference `other - self`
    pub const fn file_delta(&self, other: Position) -> isize {
        other.file().index() as isize - self.file().index() as isize
    }

    /// Signed rank difference `other - self`
    pub const fn rank_delta(&self, other: Position) -> isize {
        other.rank().index() as isize - self.rank().index() as isize
    }

    pub fn try_shift(self, delta_file: isize, delta_rank: isize) -> Option<Position> {
        let new_file = self.file().index().wrapping_add(delta_file as usize);
        let new_rank = self.rank().index().wrapping_add(delta_rank as usize);
        if new_file >= 8 || new_rank >= 8 {
            return None;
        }
        unsafe {
            Some(Position::from_parts(
                File::from_index_unchecked(new_file),
                Rank::from_index_unchecked(new_rank),
            ))
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Position)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Position({})", self);
        }
        write!(f, "Position(?{:?})", self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file_ch), Some(rank_ch), None) => (file_ch, rank_ch),
            _ => return Err(PositionParseError::BadLength),
        };
        Ok(Position::from_parts(
            File::from_char(file_ch).ok_or(PositionParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(PositionParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

/// One of the two sides
///
/// White pawns move towards rank 8 and Black pawns towards rank 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    pub const COUNT: usize = 2;

    pub const fn inv(&self) -> Team {
        match *self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Team::White, Team::Black].into_iter()
    }

    pub fn as_char(&self) -> char {
        match *self {
            Team::White => 'w',
            Team::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Team> {
        match c {
            'w' => Some(Team::White),
            'b' => Some(Team::Black),
            _ => None,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Team {
    type Err = TeamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Team::from_char(ch).ok_or(TeamParseError::UnexpectedChar(ch)),
            _ => Err(TeamParseError::BadLength),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }

    /// Returns the letter of the piece as used in FEN, in upper case for White
    pub fn as_char(&self, team: Team) -> char {
        let ch = b"PNBRQK"[self.index()] as char;
        match team {
            Team::White => ch,
            Team::Black => ch.to_ascii_lowercase(),
        }
    }

    pub fn as_utf8_char(&self, team: Team) -> char {
        match team {
            Team::White => ['♙', '♘', '♗', '♖', '♕', '♔'][self.index()],
            Team::Black => ['♟', '♞', '♝', '♜', '♛', '♚'][self.index()],
        }
    }

    /// Parses a FEN piece letter, returning the kind together with the team given by its case
    pub fn from_char(c: char) -> Option<(PieceKind, Team)> {
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, team))
    }
}

impl FromStr for PieceKind {
    type Err = PieceKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => PieceKind::from_char(ch)
                .map(|(kind, _)| kind)
                .ok_or(PieceKindParseError::UnexpectedChar(ch)),
            _ => Err(PieceKindParseError::BadLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
            assert_eq!(File::from_char(file.as_char()), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
            assert_eq!(Rank::from_char(rank.as_char()), Some(rank));
        }
        assert_eq!(Rank::R1.as_char(), '1');
        assert_eq!(Rank::R8.as_char(), '8');
    }

    #[test]
    fn test_position() {
        let mut positions = Vec::new();
        for rank in Rank::iter() {
            for file in File::iter() {
                let pos = Position::from_parts(file, rank);
                assert_eq!(pos.file(), file);
                assert_eq!(pos.rank(), rank);
                assert_eq!(Position::new(file.index(), rank.index()), pos);
                positions.push(pos);
            }
        }
        assert_eq!(positions, Position::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_position_eq() {
        assert_eq!(Position::new(3, 1), Position::from_parts(File::D, Rank::R2));
        assert_ne!(Position::new(3, 1), Position::new(1, 3));
    }

    #[test]
    fn test_shift() {
        let d2 = Position::new(3, 1);
        assert_eq!(d2.try_shift(0, 2), Some(Position::new(3, 3)));
        assert_eq!(d2.try_shift(-1, 1), Some(Position::new(2, 2)));
        assert_eq!(d2.try_shift(0, -2), None);
        assert_eq!(Position::new(7, 7).try_shift(1, 0), None);
        assert_eq!(d2.file_delta(Position::new(2, 3)), -1);
        assert_eq!(d2.rank_delta(Position::new(2, 3)), 2);
    }

    #[test]
    fn test_position_str() {
        assert_eq!(Position::new(1, 3).to_string(), "b4");
        assert_eq!(Position::new(0, 0).to_string(), "a1");
        assert_eq!(Position::from_str("e8"), Ok(Position::new(4, 7)));
        assert_eq!(
            Position::from_str("h9"),
            Err(PositionParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(
            Position::from_str("i4"),
            Err(PositionParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(Position::from_str("a"), Err(PositionParseError::BadLength));
        assert_eq!(Position::from_str("a1b"), Err(PositionParseError::BadLength));
    }

    #[test]
    fn test_team() {
        assert_eq!(Team::White.inv(), Team::Black);
        assert_eq!(Team::Black.inv(), Team::White);
        assert_eq!(Team::from_str("w"), Ok(Team::White));
        assert_eq!(Team::from_str("x"), Err(TeamParseError::UnexpectedChar('x')));
    }

    #[test]
    fn test_piece_kind_chars() {
        for kind in PieceKind::iter() {
            for team in Team::iter() {
                assert_eq!(PieceKind::from_char(kind.as_char(team)), Some((kind, team)));
            }
        }
        assert_eq!(PieceKind::from_str("Q"), Ok(PieceKind::Queen));
        assert_eq!(
            PieceKind::from_str("x"),
            Err(PieceKindParseError::UnexpectedChar('x'))
        );
    }
}
