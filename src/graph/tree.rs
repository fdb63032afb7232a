//! Arena of search nodes.
//!
//! One `SearchTree` is built per search call. Nodes are appended, never
//! removed, and refer to their parent by `NodeId`.

use super::node::{Node, NodeId};

/// Arena-based search tree.
#[derive(Clone, Debug)]
pub struct SearchTree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(256),
        }
    }

    /// Get a node by ID.
    ///
    /// Panics if `id` was not allocated by this tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Iterate over `id` and its ancestors, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: id,
        }
    }
}

/// Iterator from a node up to the root.
pub struct Ancestors<'a, T> {
    tree: &'a SearchTree<T>,
    next: NodeId,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let node = self.tree.get(self.next);
        self.next = node.parent;
        Some(node)
    }
}

/// States from the root to `id`, in order.
///
/// The tree is left untouched, so the path can be rebuilt any number of times.
pub fn node_to_path<T: Clone>(tree: &SearchTree<T>, id: NodeId) -> Vec<T> {
    let mut path: Vec<T> = tree.ancestors(id).map(|n| n.state.clone()).collect();
    path.reverse();
    path
}
