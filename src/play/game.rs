//! Two-agent match driver.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{Board, Move, Piece};

use super::agent::Agent;

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Stop after this many plies even if the game is not over.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 100 }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ply limit.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult<P> {
    /// The player who made the last move won.
    Winner(P),
    /// Board full or no moves, nobody won.
    Draw,
    /// Ply limit reached first.
    Unfinished,
}

/// Moves played and where they led.
#[derive(Clone, Debug)]
pub struct MatchRecord<B: Board> {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Position after the last move.
    pub board: B,
    /// How the match ended.
    pub result: MatchResult<B::Piece>,
}

impl<B: Board> MatchRecord<B> {
    /// Number of plies played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// No moves were played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

fn outcome<B: Board>(board: &B) -> Option<MatchResult<B::Piece>> {
    if board.is_win() {
        Some(MatchResult::Winner(board.turn().opposite()))
    } else if board.is_draw() {
        Some(MatchResult::Draw)
    } else {
        None
    }
}

/// Play `first` against `second` from `board`, `first` moving first.
///
/// Every chosen move is checked with `try_play`, so an agent returning an
/// illegal move ends the match with `SearchError::IllegalMove`.
pub fn play_match<B: Board>(
    board: B,
    first: &mut dyn Agent<B>,
    second: &mut dyn Agent<B>,
    config: &MatchConfig,
) -> Result<MatchRecord<B>> {
    let mut board = board;
    let mut moves = Vec::new();

    let result = loop {
        if let Some(result) = outcome(&board) {
            break result;
        }
        if moves.len() >= config.max_plies {
            break MatchResult::Unfinished;
        }

        let agent: &mut dyn Agent<B> = if moves.len() % 2 == 0 { &mut *first } else { &mut *second };
        let mv = agent.choose(&board)?;
        log::trace!("ply {}: {} plays {} for {:?}", moves.len(), agent.name(), mv, board.turn());

        board = board.try_play(mv)?;
        moves.push(mv);
    };

    log::debug!("match over after {} plies: {:?}", moves.len(), result);
    Ok(MatchRecord { moves, board, result })
}
