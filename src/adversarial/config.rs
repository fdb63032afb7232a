//! Adversarial search configuration parameters.

use serde::{Deserialize, Serialize};

/// How the game tree is walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Depth-first recursion; call-stack depth grows with `max_depth`.
    #[default]
    Recursive,
    /// Explicit stack on the heap; same results as `Recursive`.
    Iterative,
}

/// Adversarial search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below each root move (default: 8).
    /// Depth 0 evaluates the position after the root move directly.
    pub max_depth: u32,

    /// Tree walking strategy.
    pub strategy: Strategy,

    /// Use alpha-beta pruning (default: true).
    /// Pruning only changes the work done, never the chosen value.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            strategy: Strategy::Recursive,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a custom strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.strategy, Strategy::Recursive);
        assert!(config.pruning);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_max_depth(3)
            .with_strategy(Strategy::Iterative)
            .with_pruning(false);

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.strategy, Strategy::Iterative);
        assert!(!config.pruning);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_strategy(Strategy::Iterative);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
