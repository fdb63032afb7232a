//! Search problems for the graph algorithms.

pub mod maze;

pub use maze::{euclidean_distance, manhattan_distance, Cell, Maze, MazeLocation};
