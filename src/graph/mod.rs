//! Single-agent state-space search.
//!
//! ## Overview
//!
//! The caller supplies an initial state, a goal predicate and a successor
//! function; the search builds a tree of `Node`s in an arena and returns
//! the goal node as a `Solution`, or `None` when the goal is unreachable.
//!
//! - `dfs`: stack frontier, no shortest-path guarantee
//! - `bfs`: queue frontier, fewest edges
//! - `astar`: priority frontier on `cost + heuristic`, cheapest path under an
//!   admissible, consistent heuristic
//!
//! ## Usage
//!
//! ```rust
//! use classic_search::graph::bfs;
//!
//! // Count up from 0 to 10 using +1 and *2.
//! let solution = bfs(0u32, |n| *n == 10, |n: &u32| vec![n + 1, n * 2]).unwrap();
//! assert_eq!(solution.path(), vec![0, 1, 2, 4, 5, 10]);
//! ```

pub mod frontier;
pub mod informed;
pub mod node;
pub mod observer;
pub mod solution;
pub mod stats;
pub mod tree;
pub mod uninformed;

pub use frontier::{Frontier, PriorityQueue, Queue, Ranked, Stack};
pub use informed::{astar, astar_observed, astar_weighted, astar_weighted_observed};
pub use node::{Node, NodeId};
pub use observer::{LogObserver, NoopObserver, RecordingObserver, SearchObserver};
pub use solution::Solution;
pub use stats::GraphStats;
pub use tree::{node_to_path, SearchTree};
pub use uninformed::{bfs, bfs_observed, dfs, dfs_observed, uninformed};
