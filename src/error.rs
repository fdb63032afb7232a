//! Error types for search and game play.
//!
//! A search that exhausts its frontier is not an error: graph searches
//! return `None` in that case and callers check for it explicitly.

use thiserror::Error;

use crate::rules::Move;

/// Errors surfaced by adversarial search, boards and problem builders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A move was requested in a position that has no legal moves.
    #[error("no legal move available")]
    NoLegalMove,

    /// A move outside the position's legal moves was played.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// A board could not be parsed from its text form.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A maze could not be built from the given description.
    #[error("invalid maze: {0}")]
    InvalidMaze(String),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, SearchError>;
