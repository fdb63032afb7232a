//! Search-tree nodes.
//!
//! Nodes live in a per-search arena (`SearchTree`) and point at their parent
//! by index, so a whole expanded tree is dropped in one piece when the
//! search returns.

use serde::{Deserialize, Serialize};

/// Index into a `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no predecessor".
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Arena slot of this node.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A state together with how it was reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    /// The search state.
    pub state: T,

    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// Accumulated path cost from the root (`g`).
    pub cost: f64,

    /// Heuristic estimate of the remaining cost (`h`).
    pub heuristic: f64,

    /// Number of edges from the root.
    pub depth: u32,
}

impl<T> Node<T> {
    /// Create a root node.
    pub fn root(state: T, heuristic: f64) -> Self {
        Self {
            state,
            parent: NodeId::NONE,
            cost: 0.0,
            heuristic,
            depth: 0,
        }
    }

    /// Create a child of `parent`, which sits at `parent_depth`.
    pub fn child(state: T, parent: NodeId, parent_depth: u32, cost: f64, heuristic: f64) -> Self {
        Self {
            state,
            parent,
            cost,
            heuristic,
            depth: parent_depth + 1,
        }
    }

    /// Priority used by the A* frontier: `cost + heuristic`. Lower is better.
    #[inline]
    #[must_use]
    pub fn f(&self) -> f64 {
        self.cost + self.heuristic
    }

    /// Is this the root of its tree?
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.index(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_root_and_child() {
        let root = Node::root("a", 3.0);
        assert!(root.is_root());
        assert_eq!(root.cost, 0.0);
        assert_eq!(root.f(), 3.0);

        let child = Node::child("b", NodeId::new(0), root.depth, 1.5, 2.0);
        assert!(!child.is_root());
        assert_eq!(child.depth, 1);
        assert_eq!(child.f(), 3.5);
    }

    #[test]
    fn test_serialization() {
        let node = Node::child((1, 2), NodeId::new(3), 4, 5.0, 1.0);
        let json = serde_json::to_string(&node).unwrap();
        let back: Node<(i32, i32)> = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
