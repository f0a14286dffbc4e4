//! # Chess move legality and execution engine
//!
//! `kingsafe` keeps a chess position as a list of pieces, computes the squares every piece may
//! move to, restricts the king of one team to the squares not attacked by the other team, and
//! executes moves including en passant captures and pawn promotions.
//!
//! It is a library for a higher-level game layer: it doesn't track whose turn it is, doesn't
//! detect checkmate, stalemate or draws, and doesn't implement castling.
//!
//! # Example
//!
//! ```
//! use kingsafe::{Board, PieceKind, Position};
//!
//! let board = Board::from_layout("4k3/1P6/8/8/8/8/8/4K3").unwrap();
//!
//! // Compute allowed moves, then push the pawn to the last rank
//! let board = board.calculate_all_moves();
//! let mut pawn = None;
//! let board = board.play_move(Position::new(1, 6), Position::new(1, 7), |p| {
//!     pawn = Some(p.clone())
//! });
//!
//! // The pawn waits for promotion
//! let pawn = pawn.unwrap();
//! assert_eq!(board.pending_promotion(), Some(pawn.position()));
//! let board = board.promote_pawn(PieceKind::Queen, &pawn);
//! assert_eq!(board.as_layout(), "1Q2k3/8/8/8/8/8/8/4K3");
//! ```

pub mod board;
pub mod piece;
pub mod play;
pub mod rules;
pub mod safety;

pub use kingsafe_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::{Board, Options};
pub use piece::{MoveList, Piece};
pub use play::{MoveError, PromoteError};
pub use rules::{MoveRules, RuleSet, StandardRules};
pub use types::{File, PieceKind, Position, Rank, Team};
