//! Move-choosing agents.

use crate::adversarial::{SearchConfig, SearchStats, Searcher};
use crate::core::{GameRng, GameRngState};
use crate::error::{Result, SearchError};
use crate::rules::{Board, Move};

/// Something that picks a move for the player to move.
pub trait Agent<B: Board> {
    /// Choose a move in `board`.
    ///
    /// Returns `SearchError::NoLegalMove` if there is nothing to play.
    fn choose(&mut self, board: &B) -> Result<Move>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "agent"
    }
}

/// Plays the best move found by a `Searcher`.
#[derive(Clone, Debug, Default)]
pub struct SearchAgent {
    searcher: Searcher,

    /// Counters summed over every move chosen so far.
    total: SearchStats,
}

impl SearchAgent {
    /// Create an agent searching with `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
            total: SearchStats::new(),
        }
    }

    /// The underlying searcher, e.g. for its last stats.
    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Search work summed over all moves chosen so far.
    #[must_use]
    pub fn total_stats(&self) -> &SearchStats {
        &self.total
    }
}

impl<B: Board> Agent<B> for SearchAgent {
    fn choose(&mut self, board: &B) -> Result<Move> {
        let mv = self.searcher.best_move(board);
        self.total.merge(self.searcher.stats());
        mv
    }

    fn name(&self) -> &str {
        "search"
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create an agent drawing from an existing generator.
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Position of the agent's generator, for resuming it later.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// An agent that continues exactly where `state` was captured.
    pub fn resume(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl<B: Board> Agent<B> for RandomAgent {
    fn choose(&mut self, board: &B) -> Result<Move> {
        let moves = board.legal_moves();
        self.rng.choose(&moves).copied().ok_or(SearchError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{ConnectFour, TicTacToe};

    #[test]
    fn test_random_agent_is_seeded() {
        let board = ConnectFour::new();
        let mut a = RandomAgent::new(3);
        let mut b = RandomAgent::new(3);
        for _ in 0..20 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }

    #[test]
    fn test_random_agent_resumes() {
        let board = ConnectFour::new();
        let mut agent = RandomAgent::new(9);
        for _ in 0..5 {
            agent.choose(&board).unwrap();
        }

        let mut resumed = RandomAgent::resume(&agent.state());
        for _ in 0..20 {
            assert_eq!(agent.choose(&board), resumed.choose(&board));
        }
    }

    #[test]
    fn test_random_agent_without_moves() {
        let full: TicTacToe = "XOXXOOOXX".parse().unwrap();
        let mut agent = RandomAgent::new(0);
        assert_eq!(agent.choose(&full), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn test_search_agent_takes_win() {
        let board: TicTacToe = "XX.\nOO.\n...".parse().unwrap();
        let mut agent = SearchAgent::new(SearchConfig::default().with_max_depth(3));
        assert_eq!(agent.choose(&board), Ok(Move(2)));
        assert!(agent.searcher().stats().nodes_visited > 0);
    }

    #[test]
    fn test_search_agent_sums_stats() {
        let board: TicTacToe = "X........".parse().unwrap();
        let mut agent = SearchAgent::new(SearchConfig::default().with_max_depth(2));

        let first = agent.choose(&board).unwrap();
        let after_one = agent.total_stats().nodes_visited;
        assert_eq!(after_one, agent.searcher().stats().nodes_visited);

        agent.choose(&board.play(first)).unwrap();
        let second = agent.searcher().stats().nodes_visited;
        assert_eq!(agent.total_stats().nodes_visited, after_one + second);
    }
}
