//! Configurable game-tree searcher.
//!
//! Wraps the free functions with a `SearchConfig`, collects `SearchStats`
//! and logs each decision. Results are identical to `find_best_move` for
//! every strategy and pruning setting.

use std::time::Instant;

use crate::error::Result;
use crate::rules::{Board, Move};

use super::config::{SearchConfig, Strategy};
use super::iterative::walk;
use super::minimax::{alphabeta_counted, best_scored_move, minimax_counted};
use super::stats::SearchStats;

/// Game-tree search context.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last call.
    stats: SearchStats,
}

impl Searcher {
    /// Create a new searcher.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Value of `board` for `original_player`, searched `max_depth` plies deep.
    pub fn evaluate<B: Board>(&mut self, board: &B, maximizing: bool, original_player: B::Piece) -> f64 {
        let start = Instant::now();
        let mut stats = SearchStats::new();
        let value = self.score(board, maximizing, original_player, &mut stats);

        stats.time_us = start.elapsed().as_micros() as u64;
        self.stats = stats;
        value
    }

    /// Best move for the player to move.
    ///
    /// Every root move is scored with a full window, so the result matches
    /// `find_best_move(board, max_depth)`.
    pub fn best_move<B: Board>(&mut self, board: &B) -> Result<Move> {
        let start = Instant::now();
        let player = board.turn();
        let mut stats = SearchStats::new();
        let result = best_scored_move(board, |child| self.score(child, false, player, &mut stats));

        stats.time_us = start.elapsed().as_micros() as u64;
        self.stats = stats;

        let (mv, value) = result?;
        log::debug!(
            "best move {} (value {}, depth {}, {} nodes, {} cutoffs, {}us, {:.0} nodes/s)",
            mv,
            value,
            self.config.max_depth,
            self.stats.nodes_visited,
            self.stats.cutoffs,
            self.stats.time_us,
            self.stats.nodes_per_second()
        );
        Ok(mv)
    }

    fn score<B: Board>(
        &self,
        board: &B,
        maximizing: bool,
        player: B::Piece,
        stats: &mut SearchStats,
    ) -> f64 {
        let depth = self.config.max_depth;
        let (alpha, beta) = (f64::NEG_INFINITY, f64::INFINITY);

        match (self.config.strategy, self.config.pruning) {
            (Strategy::Recursive, true) => alphabeta_counted(board, maximizing, player, depth, alpha, beta, stats),
            (Strategy::Recursive, false) => minimax_counted(board, maximizing, player, depth, stats),
            (Strategy::Iterative, prune) => walk(board, maximizing, player, depth, alpha, beta, prune, stats),
        }
    }

    /// Get search statistics of the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
