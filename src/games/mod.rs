//! Concrete boards.
//!
//! - `TicTacToe`: 3x3, X moves first
//! - `ConnectFour`: 7x6, Black moves first

pub mod connectfour;
pub mod tictactoe;

pub use connectfour::{Column, ConnectFour, Disc};
pub use tictactoe::{Mark, TicTacToe};
