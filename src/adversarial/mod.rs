//! Two-player game-tree search.
//!
//! ## Overview
//!
//! Depth-bounded search over any `Board`:
//!
//! - `minimax`: plain max/min over every reachable position
//! - `alphabeta`: minimax with branch-and-bound pruning; same value, less work
//! - `find_best_move`: the root move with the highest alpha-beta value
//! - `*_iterative`: explicit-stack versions for deep searches
//! - `Searcher`: the above behind a `SearchConfig`, with `SearchStats`
//!
//! ## Usage
//!
//! ```rust
//! use classic_search::adversarial::find_best_move;
//! use classic_search::games::TicTacToe;
//! use classic_search::rules::Move;
//!
//! let board: TicTacToe = "XOXX.O..O".parse().unwrap();
//! assert_eq!(find_best_move(&board, 8), Ok(Move(6)));
//! ```

pub mod config;
pub mod iterative;
pub mod minimax;
pub mod searcher;
pub mod stats;

pub use config::{SearchConfig, Strategy};
pub use iterative::{alphabeta_iterative, minimax_iterative};
pub use minimax::{alphabeta, alphabeta_window, find_best_move, minimax};
pub use searcher::Searcher;
pub use stats::SearchStats;
