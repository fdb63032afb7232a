//! Playing whole games between agents.
//!
//! An `Agent` chooses moves; `play_match` alternates two of them on a board
//! until the game ends or the ply limit in `MatchConfig` is reached.

pub mod agent;
pub mod game;

pub use agent::{Agent, RandomAgent, SearchAgent};
pub use game::{play_match, MatchConfig, MatchRecord, MatchResult};
