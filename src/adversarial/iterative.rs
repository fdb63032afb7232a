//! Explicit-stack minimax and alpha-beta.
//!
//! Same values, same move order and same cutoffs as the recursive versions,
//! but the tree is walked with a heap-allocated stack of frames, so deep
//! searches cannot overflow the call stack.

use crate::rules::{Board, Moves};

use super::minimax::is_leaf;
use super::stats::SearchStats;

/// `minimax` without recursion.
pub fn minimax_iterative<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    max_depth: u32,
) -> f64 {
    walk(
        board,
        maximizing,
        original_player,
        max_depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        false,
        &mut SearchStats::new(),
    )
}

/// `alphabeta` without recursion.
pub fn alphabeta_iterative<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    max_depth: u32,
) -> f64 {
    walk(
        board,
        maximizing,
        original_player,
        max_depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        &mut SearchStats::new(),
    )
}

/// One position whose children are being scanned.
struct Frame<B> {
    board: B,
    maximizing: bool,
    depth: u32,
    moves: Moves,
    next: usize,
    alpha: f64,
    beta: f64,
    best: f64,
}

impl<B: Board> Frame<B> {
    fn new(board: B, maximizing: bool, depth: u32, alpha: f64, beta: f64) -> Self {
        let moves = board.legal_moves();
        Self {
            board,
            maximizing,
            depth,
            moves,
            next: 0,
            alpha,
            beta,
            best: if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
        }
    }

    /// Fold a child's value into this frame.
    fn absorb(&mut self, value: f64, prune: bool, stats: &mut SearchStats) {
        if self.maximizing {
            self.best = self.best.max(value);
            if prune {
                self.alpha = self.alpha.max(value);
            }
        } else {
            self.best = self.best.min(value);
            if prune {
                self.beta = self.beta.min(value);
            }
        }

        if prune && self.beta <= self.alpha {
            stats.cutoffs += 1;
            self.next = self.moves.len();
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn walk<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    max_depth: u32,
    alpha: f64,
    beta: f64,
    prune: bool,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes_visited += 1;
    if is_leaf(board, max_depth) {
        stats.leaves_evaluated += 1;
        return board.evaluate(original_player);
    }

    let mut stack = vec![Frame::new(board.clone(), maximizing, max_depth, alpha, beta)];
    let mut result = f64::NEG_INFINITY;

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.moves.len() {
            let value = frame.best;
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.absorb(value, prune, stats),
                None => result = value,
            }
            continue;
        }

        let mv = frame.moves[frame.next];
        frame.next += 1;
        let child = frame.board.play(mv);
        let child_depth = frame.depth - 1;

        stats.nodes_visited += 1;
        if is_leaf(&child, child_depth) {
            stats.leaves_evaluated += 1;
            let value = child.evaluate(original_player);
            frame.absorb(value, prune, stats);
        } else {
            let next = Frame::new(child, !frame.maximizing, child_depth, frame.alpha, frame.beta);
            stack.push(next);
        }
    }

    result
}
