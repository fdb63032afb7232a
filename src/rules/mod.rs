//! Board capability for game implementations.
//!
//! Games implement `Board` to define:
//! - Legal moves for a position
//! - How a move produces the next position
//! - Win/draw conditions and static evaluation
//!
//! Adversarial search calls into `Board` but never interprets
//! game-specific concepts directly.

pub mod board;

pub use board::{Board, Move, Moves, Piece};
