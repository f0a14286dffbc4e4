//! # Base types for kingsafe
//!
//! This is an auxiliary crate for `kingsafe`, which contains the plain value types shared by
//! the engine: squares, teams, piece kinds and square sets.
//!
//! Normally you don't want to use this crate directly. Use `kingsafe` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
