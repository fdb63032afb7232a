//! The result of a successful graph search.

use super::node::{Node, NodeId};
use super::stats::GraphStats;
use super::tree::{node_to_path, SearchTree};

/// A goal node together with the tree it was found in.
///
/// Owning the arena keeps the goal's parent chain alive after the search
/// returns, so the path can be rebuilt on demand.
#[derive(Clone, Debug)]
pub struct Solution<T> {
    tree: SearchTree<T>,
    goal: NodeId,
    stats: GraphStats,
}

impl<T> Solution<T> {
    pub(crate) fn new(tree: SearchTree<T>, goal: NodeId, stats: GraphStats) -> Self {
        Self { tree, goal, stats }
    }

    /// The goal node.
    #[must_use]
    pub fn node(&self) -> &Node<T> {
        self.tree.get(self.goal)
    }

    /// The goal state.
    #[must_use]
    pub fn state(&self) -> &T {
        &self.node().state
    }

    /// ID of the goal node inside `tree()`.
    #[must_use]
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Every node generated during the search.
    #[must_use]
    pub fn tree(&self) -> &SearchTree<T> {
        &self.tree
    }

    /// Accumulated cost of the goal node.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.node().cost
    }

    /// Number of edges from the initial state to the goal.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.node().depth
    }

    /// Work done by the search.
    #[must_use]
    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }

    /// States from the initial state to the goal.
    pub fn path(&self) -> Vec<T>
    where
        T: Clone,
    {
        node_to_path(&self.tree, self.goal)
    }
}
