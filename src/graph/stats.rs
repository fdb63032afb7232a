//! Graph search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Work done by one `dfs`/`bfs`/`astar` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Nodes popped from the frontier.
    pub nodes_expanded: u32,

    /// Nodes pushed onto the frontier, root included.
    pub nodes_generated: u32,

    /// Largest frontier size seen.
    pub max_frontier: usize,
}

impl GraphStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a push that left `frontier_len` items waiting.
    pub(crate) fn record_push(&mut self, frontier_len: usize) {
        self.nodes_generated += 1;
        self.max_frontier = self.max_frontier.max(frontier_len);
    }

    /// Average number of children generated per expansion.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.nodes_generated.saturating_sub(1) as f64 / self.nodes_expanded as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_push() {
        let mut stats = GraphStats::new();
        stats.record_push(1);
        stats.record_push(3);
        stats.record_push(2);

        assert_eq!(stats.nodes_generated, 3);
        assert_eq!(stats.max_frontier, 3);
    }

    #[test]
    fn test_branching_factor() {
        let mut stats = GraphStats::new();
        assert_eq!(stats.branching_factor(), 0.0);

        stats.nodes_generated = 9;
        stats.nodes_expanded = 4;
        assert_eq!(stats.branching_factor(), 2.0);
    }

    #[test]
    fn test_serialization() {
        let stats = GraphStats {
            nodes_expanded: 3,
            nodes_generated: 7,
            max_frontier: 4,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: GraphStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
