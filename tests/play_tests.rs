//! Whole-game tests with agents.

use classic_search::adversarial::SearchConfig;
use classic_search::games::{ConnectFour, TicTacToe};
use classic_search::play::{play_match, Agent, MatchConfig, MatchResult, RandomAgent, SearchAgent};
use classic_search::rules::{Board, Move};
use classic_search::GameRng;

/// Wraps an agent and checks every move it picks against the board.
struct Checked<A>(A);

impl<B: Board, A: Agent<B>> Agent<B> for Checked<A> {
    fn choose(&mut self, board: &B) -> classic_search::error::Result<Move> {
        let mv = self.0.choose(board)?;
        assert!(board.legal_moves().contains(&mv), "illegal move {}", mv);
        Ok(mv)
    }
}

#[test]
fn test_random_agents_only_play_legal_moves() {
    let mut seeds = GameRng::new(99);
    for _ in 0..20 {
        let mut a = Checked(RandomAgent::with_rng(seeds.fork()));
        let mut b = Checked(RandomAgent::with_rng(seeds.fork()));
        let record = play_match(ConnectFour::new(), &mut a, &mut b, &MatchConfig::default()).unwrap();
        assert!(record.len() <= 42);
        assert_ne!(record.result, MatchResult::Unfinished);
    }
}

#[test_log::test]
fn test_perfect_play_draws() {
    let config = SearchConfig::default().with_max_depth(9);
    let mut x = SearchAgent::new(config.clone());
    let mut o = SearchAgent::new(config);

    let record = play_match(TicTacToe::new(), &mut x, &mut o, &MatchConfig::default()).unwrap();
    assert_eq!(record.result, MatchResult::Draw);
    assert_eq!(record.len(), 9);
}

#[test]
fn test_search_never_loses_to_random() {
    for seed in 0..5 {
        let mut search = SearchAgent::new(SearchConfig::default().with_max_depth(9));
        let mut random = RandomAgent::new(seed);

        let record = play_match(TicTacToe::new(), &mut random, &mut search, &MatchConfig::default()).unwrap();
        assert!(
            !matches!(record.result, MatchResult::Winner(p) if p == classic_search::games::Mark::X),
            "seed {} lost: {:?}",
            seed,
            record.moves
        );
    }
}

#[test]
fn test_resumed_agents_finish_the_same_game() {
    let mut a = RandomAgent::new(5);
    let mut b = RandomAgent::new(6);
    let full = play_match(ConnectFour::new(), &mut a, &mut b, &MatchConfig::default()).unwrap();

    let mut a = RandomAgent::new(5);
    let mut b = RandomAgent::new(6);
    let head = play_match(ConnectFour::new(), &mut a, &mut b, &MatchConfig::new().with_max_plies(10)).unwrap();

    let mut a = RandomAgent::resume(&a.state());
    let mut b = RandomAgent::resume(&b.state());
    let tail = play_match(head.board.clone(), &mut a, &mut b, &MatchConfig::default()).unwrap();

    let mut moves = head.moves.clone();
    moves.extend(&tail.moves);
    assert_eq!(moves, full.moves);
    assert_eq!(tail.board, full.board);
    assert_eq!(tail.result, full.result);
}

#[test]
fn test_search_agent_totals_cover_the_match() {
    let mut x = SearchAgent::new(SearchConfig::default().with_max_depth(3));
    let mut o = RandomAgent::new(4);
    let record = play_match(TicTacToe::new(), &mut x, &mut o, &MatchConfig::default()).unwrap();

    assert!(!record.is_empty());
    assert!(x.total_stats().nodes_visited >= x.searcher().stats().nodes_visited);
    assert!(x.total_stats().leaves_evaluated > 0);
}

#[test]
fn test_same_seeds_replay_the_same_game() {
    let play = || {
        let mut a = RandomAgent::new(5);
        let mut b = RandomAgent::new(6);
        play_match(ConnectFour::new(), &mut a, &mut b, &MatchConfig::default()).unwrap()
    };
    let first = play();
    let second = play();
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.board, second.board);
}
