//! # classic-search
//!
//! Classic search algorithms over caller-defined state spaces and
//! two-player game boards.
//!
//! ## Design Principles
//!
//! 1. **Problem-Agnostic**: Graph searches take a start state, a goal
//!    predicate and a successor function. Nothing is known about the state
//!    beyond `Clone + Eq + Hash`.
//!
//! 2. **Immutable Boards**: `Board::play` returns a new position, so a
//!    game-tree search can share one board between all of its branches.
//!
//! 3. **Configuration Over Convention**: Search depth, strategy and pruning
//!    live in `SearchConfig`; match limits in `MatchConfig`.
//!
//! ## Architecture
//!
//! - **Arena Trees**: Graph search nodes live in a `SearchTree` and point to
//!   their parent by `NodeId`. A solution path is recovered by walking those
//!   links back to the root.
//!
//! - **Persistent Data Structures**: Connect four columns are an `im::Vector`
//!   so a move copies one column.
//!
//! ## Modules
//!
//! - `graph`: Frontiers, `dfs`, `bfs`, `astar`, path reconstruction
//! - `rules`: `Board` trait, `Move`, `Piece`
//! - `adversarial`: minimax, alpha-beta, `find_best_move`, `Searcher`
//! - `games`: Tic-tac-toe and connect four
//! - `problems`: Grid mazes
//! - `play`: Agents and the match driver
//! - `core`: Seeded RNG
//! - `error`: `SearchError`

pub mod adversarial;
pub mod core;
pub mod error;
pub mod games;
pub mod graph;
pub mod play;
pub mod problems;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};

pub use crate::error::SearchError;

pub use crate::graph::{
    astar, bfs, dfs, node_to_path,
    Frontier, PriorityQueue, Queue, Stack,
    Node, NodeId, SearchTree, Solution, GraphStats,
    SearchObserver, NoopObserver, LogObserver,
};

pub use crate::rules::{Board, Move, Moves, Piece};

pub use crate::adversarial::{
    alphabeta, find_best_move, minimax,
    SearchConfig, SearchStats, Searcher, Strategy,
};

pub use crate::games::{ConnectFour, Disc, Mark, TicTacToe};

pub use crate::problems::{Maze, MazeLocation};

pub use crate::play::{play_match, Agent, MatchConfig, MatchRecord, MatchResult, RandomAgent, SearchAgent};
