//! Depth-first and breadth-first search.
//!
//! Both share one loop; only the frontier differs. A state is marked
//! explored when it is pushed, so no state is ever scheduled twice.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use super::frontier::{Frontier, Queue, Stack};
use super::node::{Node, NodeId};
use super::observer::{NoopObserver, SearchObserver};
use super::solution::Solution;
use super::stats::GraphStats;
use super::tree::SearchTree;

/// Depth-first search.
///
/// Complete on finite graphs. The path found is not necessarily shortest.
/// Returns `None` when no reachable state satisfies `goal_test`.
pub fn dfs<T, G, S, I>(initial: T, goal_test: G, successors: S) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    dfs_observed(initial, goal_test, successors, &mut NoopObserver)
}

/// Breadth-first search.
///
/// The path found has the fewest edges among all goal-reaching paths.
/// Returns `None` when no reachable state satisfies `goal_test`.
pub fn bfs<T, G, S, I>(initial: T, goal_test: G, successors: S) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    bfs_observed(initial, goal_test, successors, &mut NoopObserver)
}

/// `dfs` reporting progress to `observer`.
pub fn dfs_observed<T, G, S, I, O>(
    initial: T,
    goal_test: G,
    successors: S,
    observer: &mut O,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    O: SearchObserver + ?Sized,
{
    uninformed(Stack::new(), initial, goal_test, successors, observer)
}

/// `bfs` reporting progress to `observer`.
pub fn bfs_observed<T, G, S, I, O>(
    initial: T,
    goal_test: G,
    successors: S,
    observer: &mut O,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    O: SearchObserver + ?Sized,
{
    uninformed(Queue::new(), initial, goal_test, successors, observer)
}

/// Shared loop for every uninformed frontier.
///
/// Each edge costs 1, so a node's `cost` equals its depth.
pub fn uninformed<T, F, G, S, I, O>(
    mut frontier: F,
    initial: T,
    mut goal_test: G,
    mut successors: S,
    observer: &mut O,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    F: Frontier<NodeId>,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    O: SearchObserver + ?Sized,
{
    let mut tree = SearchTree::new();
    let mut stats = GraphStats::new();
    let mut explored: FxHashSet<T> = FxHashSet::default();

    explored.insert(initial.clone());
    frontier.push(tree.alloc(Node::root(initial, 0.0)));
    stats.record_push(frontier.len());

    while let Some(current) = frontier.pop() {
        stats.nodes_expanded += 1;
        let (depth, cost) = {
            let node = tree.get(current);
            (node.depth, node.cost)
        };
        observer.on_expand(depth, frontier.len());

        if goal_test(&tree.get(current).state) {
            observer.on_finish(&stats, true);
            return Some(Solution::new(tree, current, stats));
        }

        let children = successors(&tree.get(current).state);
        for child in children {
            if explored.contains(&child) {
                continue;
            }
            explored.insert(child.clone());
            frontier.push(tree.alloc(Node::child(child, current, depth, cost + 1.0, 0.0)));
            stats.record_push(frontier.len());
        }
    }

    observer.on_finish(&stats, false);
    None
}
