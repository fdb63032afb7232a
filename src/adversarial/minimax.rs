//! Depth-bounded minimax and alpha-beta over the `Board` capability.
//!
//! Every call does the same three steps: terminal check, recursive
//! expansion, aggregation. Leaves (win, draw, or depth 0) are scored with
//! `evaluate(original_player)`, i.e. always from the root player's side.

use crate::error::{Result, SearchError};
use crate::rules::{Board, Move};

use super::stats::SearchStats;

/// Is `board` scored directly instead of expanded?
#[inline]
pub(crate) fn is_leaf<B: Board>(board: &B, depth: u32) -> bool {
    depth == 0 || board.is_win() || board.is_draw()
}

/// Minimax value of `board` for `original_player`, looking `max_depth` plies ahead.
pub fn minimax<B: Board>(board: &B, maximizing: bool, original_player: B::Piece, max_depth: u32) -> f64 {
    minimax_counted(board, maximizing, original_player, max_depth, &mut SearchStats::new())
}

/// Alpha-beta search from the full window. Always equal to `minimax`.
pub fn alphabeta<B: Board>(board: &B, maximizing: bool, original_player: B::Piece, max_depth: u32) -> f64 {
    alphabeta_window(
        board,
        maximizing,
        original_player,
        max_depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
    )
}

/// Alpha-beta search inside the window `(alpha, beta)`.
///
/// The result is exact when it falls strictly inside the window; otherwise
/// it is a bound on the true value.
pub fn alphabeta_window<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    max_depth: u32,
    alpha: f64,
    beta: f64,
) -> f64 {
    alphabeta_counted(
        board,
        maximizing,
        original_player,
        max_depth,
        alpha,
        beta,
        &mut SearchStats::new(),
    )
}

/// Best move for the player to move, looking `max_depth` plies past each root move.
///
/// Ties keep the earliest move in `legal_moves` order.
pub fn find_best_move<B: Board>(board: &B, max_depth: u32) -> Result<Move> {
    let player = board.turn();
    best_scored_move(board, |child| alphabeta(child, false, player, max_depth)).map(|(mv, _)| mv)
}

/// Scan the root moves left to right and keep the first strictly best one.
///
/// Fails only when there are no legal moves.
pub(crate) fn best_scored_move<B, F>(board: &B, mut score: F) -> Result<(Move, f64)>
where
    B: Board,
    F: FnMut(&B) -> f64,
{
    let moves = board.legal_moves();
    let first = *moves.first().ok_or(SearchError::NoLegalMove)?;

    let mut best = (first, f64::NEG_INFINITY);
    for mv in moves {
        let value = score(&board.play(mv));
        if value > best.1 {
            best = (mv, value);
        }
    }
    Ok(best)
}

pub(crate) fn minimax_counted<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    depth: u32,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes_visited += 1;
    if is_leaf(board, depth) {
        stats.leaves_evaluated += 1;
        return board.evaluate(original_player);
    }

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in board.legal_moves() {
            let value = minimax_counted(&board.play(mv), false, original_player, depth - 1, stats);
            best = best.max(value);
        }
        best
    } else {
        let mut worst = f64::INFINITY;
        for mv in board.legal_moves() {
            let value = minimax_counted(&board.play(mv), true, original_player, depth - 1, stats);
            worst = worst.min(value);
        }
        worst
    }
}

pub(crate) fn alphabeta_counted<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes_visited += 1;
    if is_leaf(board, depth) {
        stats.leaves_evaluated += 1;
        return board.evaluate(original_player);
    }

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in board.legal_moves() {
            let value =
                alphabeta_counted(&board.play(mv), false, original_player, depth - 1, alpha, beta, stats);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                stats.cutoffs += 1;
                break; // beta cutoff
            }
        }
        best
    } else {
        let mut worst = f64::INFINITY;
        for mv in board.legal_moves() {
            let value =
                alphabeta_counted(&board.play(mv), true, original_player, depth - 1, alpha, beta, stats);
            worst = worst.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                stats.cutoffs += 1;
                break; // alpha cutoff
            }
        }
        worst
    }
}
