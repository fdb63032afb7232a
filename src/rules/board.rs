//! Board capability for two-player, perfect-information games.
//!
//! Games implement `Board` to describe a position:
//! - Whose turn it is and which moves are legal
//! - How a move produces the next position
//! - Win/draw detection and a static evaluation
//!
//! Boards are immutable values. `play` returns a new board and never
//! touches the receiver, so one board can be shared by every branch of a
//! recursive search.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, SearchError};

/// An opaque move: a cell index, a column index, etc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The raw index as a usize.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Legal moves of a position. Inline up to nine (a tic-tac-toe board).
pub type Moves = SmallVec<[Move; 9]>;

/// A player's marker.
pub trait Piece: Copy + Eq + std::fmt::Debug {
    /// The other player.
    fn opposite(self) -> Self;
}

/// A game position.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty when the game is over or the position is stuck
/// - `play`: only called with a move from `legal_moves`
/// - `evaluate`: pure and deterministic, bounded magnitude
pub trait Board: Clone {
    /// Player marker type.
    type Piece: Piece;

    /// The player to move.
    fn turn(&self) -> Self::Piece;

    /// Moves available to the player to move, in a fixed order.
    fn legal_moves(&self) -> Moves;

    /// The position after the player to move plays `mv`.
    ///
    /// Panics if `mv` is not legal here.
    fn play(&self, mv: Move) -> Self;

    /// Has the player who just moved won?
    fn is_win(&self) -> bool;

    /// Score of this position from `player`'s point of view.
    fn evaluate(&self, player: Self::Piece) -> f64;

    /// The game ended without a winner.
    fn is_draw(&self) -> bool {
        !self.is_win() && self.legal_moves().is_empty()
    }

    /// Win or draw.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_draw()
    }

    /// `play` that checks legality first.
    fn try_play(&self, mv: Move) -> Result<Self> {
        if self.legal_moves().contains(&mv) {
            Ok(self.play(mv))
        } else {
            Err(SearchError::IllegalMove(mv))
        }
    }
}
