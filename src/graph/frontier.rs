//! Frontier containers.
//!
//! Plain data structures with no search logic and no deduplication:
//! callers keep their own explored set.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::node::NodeId;

/// Discovered-but-unexpanded items, in some algorithm-specific order.
pub trait Frontier<I> {
    /// Add an item.
    fn push(&mut self, item: I);

    /// Remove the next item to expand.
    fn pop(&mut self) -> Option<I>;

    /// Number of items waiting.
    fn len(&self) -> usize;

    /// Check if nothing is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier (depth-first).
#[derive(Clone, Debug)]
pub struct Stack<I> {
    items: Vec<I>,
}

impl<I> Default for Stack<I> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<I> Stack<I> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I> Frontier<I> for Stack<I> {
    fn push(&mut self, item: I) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<I> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// FIFO frontier (breadth-first).
#[derive(Clone, Debug)]
pub struct Queue<I> {
    items: VecDeque<I>,
}

impl<I> Default for Queue<I> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<I> Queue<I> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I> Frontier<I> for Queue<I> {
    fn push(&mut self, item: I) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<I> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Min-heap frontier: `pop` returns the smallest item.
///
/// Equal items come out in heap order, which is not stable.
#[derive(Clone, Debug)]
pub struct PriorityQueue<I: Ord> {
    heap: BinaryHeap<Reverse<I>>,
}

impl<I: Ord> Default for PriorityQueue<I> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<I: Ord> PriorityQueue<I> {
    /// Create an empty priority queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&I> {
        self.heap.peek().map(|Reverse(item)| item)
    }
}

impl<I: Ord> Frontier<I> for PriorityQueue<I> {
    fn push(&mut self, item: I) {
        self.heap.push(Reverse(item));
    }

    fn pop(&mut self) -> Option<I> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Heap entry for A*: a node keyed by its `cost + heuristic`.
///
/// Only `f` takes part in the ordering; there is no secondary key.
#[derive(Clone, Copy, Debug)]
pub struct Ranked {
    pub f: f64,
    pub id: NodeId,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f)
    }
}
