//! A* search.
//!
//! The frontier is ordered by `g + h`. Each state keeps the best cost found
//! so far; a successor is scheduled only when it is new or reached strictly
//! cheaper. The older, dearer node stays in the heap and is expanded as
//! usual if it is ever popped.
//!
//! The returned path is optimal when the heuristic is admissible and
//! consistent. This is not checked: a bad heuristic still terminates, it
//! just may return a dearer path. Ties in `g + h` are broken by heap order.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::frontier::{Frontier, PriorityQueue, Ranked};
use super::node::Node;
use super::observer::{NoopObserver, SearchObserver};
use super::solution::Solution;
use super::stats::GraphStats;
use super::tree::SearchTree;

/// A* with every edge costing 1.
///
/// Returns `None` when no reachable state satisfies `goal_test`.
pub fn astar<T, G, S, I, H>(initial: T, goal_test: G, successors: S, heuristic: H) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    H: FnMut(&T) -> f64,
{
    astar_observed(initial, goal_test, successors, heuristic, &mut NoopObserver)
}

/// `astar` reporting progress to `observer`.
pub fn astar_observed<T, G, S, I, H, O>(
    initial: T,
    goal_test: G,
    mut successors: S,
    heuristic: H,
    observer: &mut O,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    H: FnMut(&T) -> f64,
    O: SearchObserver + ?Sized,
{
    astar_weighted_observed(
        initial,
        goal_test,
        |state: &T| successors(state).into_iter().map(|s| (s, 1.0)),
        heuristic,
        observer,
    )
}

/// A* where `successors` yields `(state, edge_cost)` pairs.
pub fn astar_weighted<T, G, S, I, H>(
    initial: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = (T, f64)>,
    H: FnMut(&T) -> f64,
{
    astar_weighted_observed(initial, goal_test, successors, heuristic, &mut NoopObserver)
}

/// `astar_weighted` reporting progress to `observer`.
pub fn astar_weighted_observed<T, G, S, I, H, O>(
    initial: T,
    mut goal_test: G,
    mut successors: S,
    mut heuristic: H,
    observer: &mut O,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: FnMut(&T) -> bool,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = (T, f64)>,
    H: FnMut(&T) -> f64,
    O: SearchObserver + ?Sized,
{
    let mut tree = SearchTree::new();
    let mut stats = GraphStats::new();
    let mut frontier = PriorityQueue::new();
    let mut best_cost: FxHashMap<T, f64> = FxHashMap::default();

    let h0 = heuristic(&initial);
    best_cost.insert(initial.clone(), 0.0);
    let root = tree.alloc(Node::root(initial, h0));
    frontier.push(Ranked { f: h0, id: root });
    stats.record_push(frontier.len());

    while let Some(Ranked { id: current, .. }) = frontier.pop() {
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
        for (child, edge_cost) in children {
            let tentative = cost + edge_cost;
            if let Some(&known) = best_cost.get(&child) {
                if known <= tentative {
                    continue;
                }
            }
            best_cost.insert(child.clone(), tentative);

            let h = heuristic(&child);
            let node = Node::child(child, current, depth, tentative, h);
            let f = node.f();
            let id = tree.alloc(node);
            frontier.push(Ranked { f, id });
            stats.record_push(frontier.len());
        }
    }

    observer.on_finish(&stats, false);
    None
}
