//! Board and related things

use crate::bitboard::Bitboard;
use crate::geometry;
use crate::piece::{MoveList, Piece};
use crate::rules::{self, RuleSet, StandardRules};
use crate::safety;
use crate::types::{File, PieceKind, Position, Rank, Team};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Board validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// Two pieces stand on the same square
    #[error("more than one piece on {0}")]
    Overlap(Position),
    /// One of the sides doesn't have a king
    #[error("no king of team {0:?}")]
    NoKing(Team),
    /// One of the sides has more than one king
    #[error("more than one king of team {0:?}")]
    TooManyKings(Team),
    /// There is a pawn on the 1st or on the 8th rank
    #[error("invalid pawn position {0}")]
    InvalidPawn(Position),
}

/// Error parsing the piece layout (i.e. the first part of FEN)
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Error parsing [`Board`] from a piece layout
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum BoardParseError {
    /// Layout cannot be parsed
    #[error("cannot parse layout: {0}")]
    Layout(#[from] LayoutParseError),
    /// Layout was parsed, but it's invalid
    #[error("invalid position: {0}")]
    Valid(#[from] ValidateError),
}

/// Board options
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Options {
    /// Team whose king moves are restricted by the king safety filter
    ///
    /// The filter works for one team only. The other team's king may still step onto attacked
    /// squares, which allows the caller to restrict only the side it doesn't control itself.
    pub defending: Team,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Options {
            defending: Team::Black,
        }
    }
}

/// Chess board
///
/// The board owns its pieces, so each board is an independent snapshot: all the operations take
/// `&self` and return a new board, never touching the old one.
///
/// Typical usage is:
///
/// 1. call [`Board::calculate_all_moves()`] to fill in the allowed moves of every piece;
/// 2. call [`Board::play_move()`] with the chosen move;
/// 3. if the promotion callback was invoked, call [`Board::promote_pawn()`];
/// 4. repeat.
///
/// # Example
///
/// ```
/// # use kingsafe::{Board, Position};
/// #
/// let board = Board::initial().calculate_all_moves();
/// let board = board.play_move(Position::new(4, 1), Position::new(4, 3), |_| {});
/// assert_eq!(
///     board.as_layout(),
///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
/// );
/// assert!(board.piece_at(Position::new(4, 3)).unwrap().en_passant());
/// ```
#[derive(Debug, Clone)]
pub struct Board<R = StandardRules> {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) rules: R,
    pub(crate) options: Options,
    pub(crate) pending_promotion: Option<Position>,
}

impl Board<StandardRules> {
    /// Creates a board with standard rules and default options
    pub fn new(pieces: Vec<Piece>) -> Result<Self, ValidateError> {
        Self::with_options(pieces, Options::default())
    }

    /// Creates a board with standard rules and the given options
    pub fn with_options(pieces: Vec<Piece>, options: Options) -> Result<Self, ValidateError> {
        Board::with_rules(pieces, StandardRules, options)
    }

    /// Returns a board with the initial position
    pub fn initial() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for team in Team::iter() {
            let rank = geometry::back_rank(team);
            let pawn_rank = geometry::pawn_start_rank(team);
            for (file, kind) in File::iter().zip(BACK_RANK) {
                pieces.push(Piece::new(Position::from_parts(file, rank), kind, team));
                pieces.push(Piece::new(
                    Position::from_parts(file, pawn_rank),
                    PieceKind::Pawn,
                    team,
                ));
            }
        }
        Board {
            pieces,
            rules: StandardRules,
            options: Options::default(),
            pending_promotion: None,
        }
    }

    /// Parses a board from the piece layout part of FEN
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    pub fn from_layout(s: &str) -> Result<Self, BoardParseError> {
        Board::from_str(s)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl<R: RuleSet + Clone> Board<R> {
    /// Creates a board with the given rule provider and options
    ///
    /// The pieces keep their order and their `en_passant` flags. Allowed moves are not
    /// computed, call [`Board::calculate_all_moves()`] for that.
    pub fn with_rules(
        pieces: Vec<Piece>,
        rules: R,
        options: Options,
    ) -> Result<Self, ValidateError> {
        validate(&pieces)?;
        let mut pieces = pieces;
        for p in &mut pieces {
            p.clear_allowed_moves();
        }
        Ok(Board {
            pieces,
            rules,
            options,
            pending_promotion: None,
        })
    }

    /// Returns all the pieces on the board
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the piece standing on `pos`
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        rules::piece_at(&self.pieces, pos)
    }

    /// Returns the king of team `team`
    ///
    /// The result may be `None` only if the king was captured during the game.
    #[inline]
    pub fn king(&self, team: Team) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.is_king() && p.team() == team)
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the square of the pawn that reached the last rank on the previous move and still
    /// waits for [`Board::promote_pawn()`]
    #[inline]
    pub fn pending_promotion(&self) -> Option<Position> {
        self.pending_promotion
    }

    /// Returns the set of all occupied squares
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Team::White) | self.occupied_by(Team::Black)
    }

    /// Returns the set of squares occupied by team `team`
    pub fn occupied_by(&self, team: Team) -> Bitboard {
        self.pieces
            .iter()
            .filter(|p| p.team() == team)
            .map(Piece::position)
            .collect()
    }

    /// Returns `true` if the piece on `src` may move to `dst` by the rules of its kind, ignoring
    /// king safety
    ///
    /// Unlike the allowed moves, this doesn't require [`Board::calculate_all_moves()`] to be
    /// called first.
    pub fn is_pseudo_legal(&self, src: Position, dst: Position) -> bool {
        match self.piece_at(src) {
            Some(p) => self
                .rules
                .is_valid(p.kind(), src, dst, p.team(), &self.pieces),
            None => false,
        }
    }

    /// Returns the board with the allowed moves of every piece recomputed
    ///
    /// For each piece, the rule provider gives the candidate destinations. After that, the king
    /// of the [defending](Options::defending) team loses the destinations that are attacked by
    /// the other team (see [`safety::filter_king_moves()`]).
    pub fn calculate_all_moves(&self) -> Self {
        let mut pieces = self.pieces.clone();
        for piece in &mut pieces {
            let moves = self.rules.candidates(piece, &self.pieces);
            piece.set_allowed_moves(moves);
        }
        safety::filter_king_moves(&self.rules, &mut pieces, self.options.defending);
        self.derive(pieces, self.pending_promotion)
    }

    /// Returns the allowed moves of the piece on `pos`, or `None` if the square is empty
    #[inline]
    pub fn allowed_moves(&self, pos: Position) -> Option<&MoveList> {
        self.piece_at(pos).map(Piece::allowed_moves)
    }

    #[inline]
    pub(crate) fn derive(&self, pieces: Vec<Piece>, pending_promotion: Option<Position>) -> Self {
        Board {
            pieces,
            rules: self.rules.clone(),
            options: self.options,
            pending_promotion,
        }
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use kingsafe::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            pieces: &self.pieces,
            style,
        }
    }

    /// Converts the board into the piece layout part of FEN
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn as_layout(&self) -> String {
        self.to_string()
    }
}

/// Two boards are equal if they hold equal pieces in the same order and have the same options
/// and pending promotion
impl<R> PartialEq for Board<R> {
    #[inline]
    fn eq(&self, other: &Board<R>) -> bool {
        self.pieces == other.pieces
            && self.options == other.options
            && self.pending_promotion == other.pending_promotion
    }
}

impl<R> Eq for Board<R> {}

fn validate(pieces: &[Piece]) -> Result<(), ValidateError> {
    let mut occupied = Bitboard::EMPTY;
    let mut kings = [0_usize; Team::COUNT];
    for p in pieces {
        let pos = p.position();
        if occupied.has(pos) {
            return Err(ValidateError::Overlap(pos));
        }
        occupied.set(pos);
        if p.is_king() {
            kings[p.team().index()] += 1;
        }
        if p.is_pawn() && Team::iter().any(|t| pos.rank() == geometry::back_rank(t)) {
            return Err(ValidateError::InvalidPawn(pos));
        }
    }
    for team in Team::iter() {
        match kings[team.index()] {
            0 => return Err(ValidateError::NoKing(team)),
            1 => {}
            _ => return Err(ValidateError::TooManyKings(team)),
        }
    }
    Ok(())
}

fn parse_layout(s: &str) -> Result<Vec<Piece>, LayoutParseError> {
    type Error = LayoutParseError;

    // Rows go from rank 8 down to rank 1
    let mut file = 0_usize;
    let mut row = 0_usize;
    let mut pieces = Vec::new();
    let rank_of = |row: usize| Rank::from_index(7 - row);
    for c in s.chars() {
        match c {
            '1'..='8' => {
                let add = (c as u8 - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(rank_of(row)));
                }
                file += add;
            }
            '/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(rank_of(row)));
                }
                row += 1;
                file = 0;
                if row >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(rank_of(row)));
                }
                let (kind, team) = PieceKind::from_char(c).ok_or(Error::UnexpectedChar(c))?;
                let pos = Position::from_parts(File::from_index(file), rank_of(row));
                pieces.push(Piece::new(pos, kind, team));
                file += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(rank_of(row)));
    }
    if row < 7 {
        return Err(Error::Underflow);
    }

    Ok(pieces)
}

impl FromStr for Board<StandardRules> {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Board::new(parse_layout(s)?)?)
    }
}

fn layout_grid(pieces: &[Piece]) -> [Option<&Piece>; Position::COUNT] {
    let mut grid = [None; Position::COUNT];
    for p in pieces {
        grid[p.position().index()] = Some(p);
    }
    grid
}

impl<R> Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let grid = layout_grid(&self.pieces);
        for rank in Rank::iter().rev() {
            if rank != Rank::R8 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                match grid[Position::from_parts(file, rank).index()] {
                    Some(p) => {
                        if empty != 0 {
                            write!(f, "{}", (b'0' + empty) as char)?;
                            empty = 0;
                        }
                        write!(f, "{}", p.kind().as_char(p.team()))?;
                    }
                    None => empty += 1,
                }
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    pieces: &'a [Piece],
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const EMPTY: char;

    fn piece(p: &Piece) -> char;

    fn fmt(pieces: &[Piece], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let grid = layout_grid(pieces);
        for rank in Rank::iter().rev() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                let ch = match grid[Position::from_parts(file, rank).index()] {
                    Some(p) => Self::piece(p),
                    None => Self::EMPTY,
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const EMPTY: char = '.';

    fn piece(p: &Piece) -> char {
        p.kind().as_char(p.team())
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const EMPTY: char = '.';

    fn piece(p: &Piece) -> char {
        p.kind().as_utf8_char(p.team())
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.pieces, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.pieces, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MoveRules;

    use std::collections::BTreeSet;

    const INI_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    fn moves_of(b: &Board, pos: Position) -> BTreeSet<String> {
        b.allowed_moves(pos)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(b.to_string(), INI_LAYOUT);
        assert_eq!(b.pieces().len(), 32);
        assert_eq!(Board::from_layout(INI_LAYOUT).unwrap().as_layout(), INI_LAYOUT);
        assert_eq!(
            b.king(Team::White).unwrap().position(),
            Position::from_parts(File::E, Rank::R1)
        );
        assert_eq!(
            b.king(Team::Black).unwrap().position(),
            Position::from_parts(File::E, Rank::R8)
        );
        assert_eq!(b.occupied().len(), 32);
        assert_eq!(b.occupied_by(Team::White).len(), 16);
        assert_eq!(b.pending_promotion(), None);
    }

    #[test]
    fn test_midgame() {
        const LAYOUT: &str = "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K";

        let b = Board::from_layout(LAYOUT).unwrap();
        assert_eq!(b.as_layout(), LAYOUT);
        let bishop = b.piece_at(Position::from_parts(File::B, Rank::R4)).unwrap();
        assert_eq!(bishop.kind(), PieceKind::Bishop);
        assert_eq!(bishop.team(), Team::Black);
        let queen = b.piece_at(Position::from_parts(File::F, Rank::R2)).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.team(), Team::White);
        assert!(b.piece_at(Position::from_parts(File::A, Rank::R1)).is_some());
        assert!(b.piece_at(Position::from_parts(File::B, Rank::R1)).is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP"),
            Err(BoardParseError::Layout(LayoutParseError::Underflow))
        );
        assert_eq!(
            Board::from_layout("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(BoardParseError::Layout(LayoutParseError::RankOverflow(
                Rank::R7
            )))
        );
        assert_eq!(
            Board::from_layout("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(BoardParseError::Layout(LayoutParseError::RankUnderflow(
                Rank::R7
            )))
        );
        assert_eq!(
            Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8"),
            Err(BoardParseError::Layout(LayoutParseError::Overflow))
        );
        assert_eq!(
            Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX"),
            Err(BoardParseError::Layout(LayoutParseError::UnexpectedChar('X')))
        );
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            Board::from_layout("8/8/8/8/8/8/8/4K3"),
            Err(BoardParseError::Valid(ValidateError::NoKing(Team::Black)))
        );
        assert_eq!(
            Board::from_layout("4k3/8/8/8/8/8/8/3KK3"),
            Err(BoardParseError::Valid(ValidateError::TooManyKings(
                Team::White
            )))
        );
        assert_eq!(
            Board::from_layout("P3k3/8/8/8/8/8/8/4K3"),
            Err(BoardParseError::Valid(ValidateError::InvalidPawn(
                Position::from_parts(File::A, Rank::R8)
            )))
        );

        let e1 = Position::from_parts(File::E, Rank::R1);
        let e8 = Position::from_parts(File::E, Rank::R8);
        let pieces = vec![
            Piece::new(e1, PieceKind::King, Team::White),
            Piece::new(e8, PieceKind::King, Team::Black),
            Piece::new(e1, PieceKind::Rook, Team::Black),
        ];
        assert_eq!(Board::new(pieces), Err(ValidateError::Overlap(e1)));
    }

    #[test]
    fn test_calculate_initial() {
        let b = Board::initial().calculate_all_moves();
        let total: usize = b.pieces().iter().map(|p| p.allowed_moves().len()).sum();
        assert_eq!(total, 40);
        assert_eq!(
            moves_of(&b, Position::from_parts(File::G, Rank::R1)),
            BTreeSet::from(["f3".to_string(), "h3".to_string()]),
        );
        assert!(moves_of(&b, Position::from_parts(File::E, Rank::R8)).is_empty());

        // The original board is left untouched
        assert!(Board::initial()
            .pieces()
            .iter()
            .all(|p| p.allowed_moves().is_empty()));
    }

    #[test]
    fn test_calculate_is_snapshot() {
        let b = Board::from_layout("4k3/8/8/8/8/8/8/R3K3").unwrap();
        let computed = b.calculate_all_moves();
        assert!(b.pieces().iter().all(|p| p.allowed_moves().is_empty()));
        assert_eq!(computed.as_layout(), b.as_layout());
        assert_eq!(
            computed
                .allowed_moves(Position::from_parts(File::A, Rank::R1))
                .unwrap()
                .len(),
            10
        );
    }

    #[test]
    fn test_eq_options() {
        let b = Board::from_layout("4k3/8/8/8/8/8/8/4K3").unwrap();
        let options = Options {
            defending: Team::White,
        };
        let other = Board::with_options(b.pieces().to_vec(), options).unwrap();
        assert_eq!(other.options(), &options);
        assert_eq!(other.as_layout(), b.as_layout());
        assert_ne!(other, b);
        assert_eq!(Board::new(b.pieces().to_vec()).unwrap(), b);
    }

    /// Pawns that never capture
    #[derive(Debug, Copy, Clone)]
    struct PushOnlyPawn;

    impl MoveRules for PushOnlyPawn {
        fn is_valid(
            &self,
            origin: Position,
            destination: Position,
            team: Team,
            pieces: &[Piece],
        ) -> bool {
            origin.file_delta(destination) == 0
                && rules::Pawn.is_valid(origin, destination, team, pieces)
        }

        fn candidates(&self, piece: &Piece, pieces: &[Piece]) -> MoveList {
            let file = piece.position().file();
            rules::Pawn
                .candidates(piece, pieces)
                .iter()
                .copied()
                .filter(|dst| dst.file() == file)
                .collect()
        }
    }

    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
    struct NoPawnCaptures;

    impl RuleSet for NoPawnCaptures {
        fn rules(&self, kind: PieceKind) -> &dyn MoveRules {
            match kind {
                PieceKind::Pawn => &PushOnlyPawn,
                PieceKind::Knight => &rules::Knight,
                PieceKind::Bishop => &rules::Bishop,
                PieceKind::Rook => &rules::Rook,
                PieceKind::Queen => &rules::Queen,
                PieceKind::King => &rules::King,
            }
        }
    }

    #[test]
    fn test_custom_rules() {
        let e5 = Position::from_parts(File::E, Rank::R5);
        let d6 = Position::from_parts(File::D, Rank::R6);
        let e6 = Position::from_parts(File::E, Rank::R6);
        let f6 = Position::from_parts(File::F, Rank::R6);

        let standard = Board::from_layout("8/8/3pk3/4P3/8/8/8/K7").unwrap();
        let custom = Board::with_rules(
            standard.pieces().to_vec(),
            NoPawnCaptures,
            Options::default(),
        )
        .unwrap();
        assert_eq!(*custom.rules(), NoPawnCaptures);

        // The pawn on e5 attacks f6 only under the standard rules
        let standard = standard.calculate_all_moves();
        assert!(standard.allowed_moves(e5).unwrap().has(d6));
        assert!(!standard.allowed_moves(e6).unwrap().has(f6));

        let custom = custom.calculate_all_moves();
        assert!(custom.allowed_moves(e5).unwrap().is_empty());
        assert!(custom.allowed_moves(e6).unwrap().has(f6));
        assert!(!custom.is_pseudo_legal(e5, d6));
        assert!(!custom
            .rules()
            .is_valid(PieceKind::Pawn, e5, d6, Team::White, custom.pieces()));
        assert_eq!(custom.as_layout(), standard.as_layout());
    }

    #[test]
    fn test_pseudo_legal() {
        let b = Board::initial();
        assert!(b.is_pseudo_legal(
            Position::from_parts(File::E, Rank::R2),
            Position::from_parts(File::E, Rank::R4)
        ));
        assert!(!b.is_pseudo_legal(
            Position::from_parts(File::E, Rank::R2),
            Position::from_parts(File::E, Rank::R5)
        ));
        assert!(!b.is_pseudo_legal(
            Position::from_parts(File::E, Rank::R4),
            Position::from_parts(File::E, Rank::R5)
        ));
        assert!(b.is_pseudo_legal(
            Position::from_parts(File::B, Rank::R8),
            Position::from_parts(File::C, Rank::R6)
        ));
    }

    #[test]
    fn test_pretty() {
        let b = Board::from_layout("4k3/8/8/8/8/8/8/4K3").unwrap();
        let res = r#"
8│....♚...
7│........
6│........
5│........
4│........
3│........
2│........
1│....♔...
─┼────────
 │abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    }
}
