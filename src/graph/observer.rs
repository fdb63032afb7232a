//! Progress reporting for graph searches.
//!
//! The searches themselves never print or log. Callers who want progress
//! pass an observer to the `*_observed` entry points.

use super::stats::GraphStats;

/// Receives progress events from a graph search.
pub trait SearchObserver {
    /// A node at `depth` was popped; `frontier_len` items remain.
    fn on_expand(&mut self, depth: u32, frontier_len: usize) {
        let _ = (depth, frontier_len);
    }

    /// The search ended.
    fn on_finish(&mut self, stats: &GraphStats, found: bool) {
        let _ = (stats, found);
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards events to the `log` facade.
///
/// Expansions are logged at `trace`, every `interval`-th one only.
#[derive(Clone, Debug)]
pub struct LogObserver {
    label: &'static str,
    interval: u32,
    expanded: u32,
}

impl LogObserver {
    /// Create an observer whose log lines start with `label`.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            interval: 1000,
            expanded: 0,
        }
    }

    /// Log every `interval`-th expansion (minimum 1).
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Expansions seen so far.
    #[must_use]
    pub fn expanded(&self) -> u32 {
        self.expanded
    }
}

impl SearchObserver for LogObserver {
    fn on_expand(&mut self, depth: u32, frontier_len: usize) {
        self.expanded += 1;
        if self.expanded % self.interval == 0 {
            log::trace!(
                "{}: expanded={} depth={} frontier={}",
                self.label,
                self.expanded,
                depth,
                frontier_len
            );
        }
    }

    fn on_finish(&mut self, stats: &GraphStats, found: bool) {
        log::debug!(
            "{}: {} after {} expansions ({} generated, branching {:.2}, peak frontier {})",
            self.label,
            if found { "goal found" } else { "no path" },
            stats.nodes_expanded,
            stats.nodes_generated,
            stats.branching_factor(),
            stats.max_frontier
        );
    }
}

/// Records every event; handy in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub depths: Vec<u32>,
    pub finished: Option<(GraphStats, bool)>,
}

impl SearchObserver for RecordingObserver {
    fn on_expand(&mut self, depth: u32, _frontier_len: usize) {
        self.depths.push(depth);
    }

    fn on_finish(&mut self, stats: &GraphStats, found: bool) {
        self.finished = Some((stats.clone(), found));
    }
}
