//! Tic-tac-toe.
//!
//! Cells are numbered row-major:
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::rules::{Board, Move, Moves, Piece};

/// Tic-tac-toe player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Piece for Mark {
    fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
    turn: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            turn: Mark::X,
        }
    }

    /// Board from explicit cells and player to move.
    pub fn with_position(cells: [Option<Mark>; 9], turn: Mark) -> Self {
        Self { cells, turn }
    }

    /// The mark in `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// The player with three in a row, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }
}

impl Board for TicTacToe {
    type Piece = Mark;

    fn turn(&self) -> Mark {
        self.turn
    }

    fn legal_moves(&self) -> Moves {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Move(i as u8))
            .collect()
    }

    fn play(&self, mv: Move) -> Self {
        assert!(
            self.get(mv.index()).is_none() && mv.index() < self.cells.len(),
            "cell {} is not free",
            mv
        );
        let mut cells = self.cells;
        cells[mv.index()] = Some(self.turn);
        Self {
            cells,
            turn: self.turn.opposite(),
        }
    }

    fn is_win(&self) -> bool {
        self.winner().is_some()
    }

    /// +1 if `player` has won, -1 if they have lost, 0 otherwise.
    ///
    /// After a win the player to move is the loser.
    fn evaluate(&self, player: Mark) -> f64 {
        if !self.is_win() {
            0.0
        } else if self.turn == player {
            -1.0
        } else {
            1.0
        }
    }
}

/// Parses nine cells (`X`, `O`, and `.`, `E`, `_` or a space for empty).
/// Newlines and `|` are ignored. X moves next unless X has one more mark.
impl FromStr for TicTacToe {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 9];
        let mut count = 0;
        for ch in s.chars().filter(|c| *c != '\n' && *c != '|') {
            if count == 9 {
                return Err(SearchError::InvalidBoard(format!("more than 9 cells in {:?}", s)));
            }
            cells[count] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | 'E' | '_' | ' ' => None,
                other => {
                    return Err(SearchError::InvalidBoard(format!("unexpected character {:?}", other)))
                }
            };
            count += 1;
        }
        if count != 9 {
            return Err(SearchError::InvalidBoard(format!("expected 9 cells, found {}", count)));
        }

        let xs = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let os = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        let turn = if xs > os { Mark::O } else { Mark::X };
        Ok(Self { cells, turn })
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----")?;
            }
            let cell = |col: usize| match self.cells[row * 3 + col] {
                Some(mark) => mark.to_string(),
                None => " ".to_string(),
            };
            writeln!(f, "{}|{}|{}", cell(0), cell(1), cell(2))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = TicTacToe::new();
        assert_eq!(board.turn(), Mark::X);
        assert_eq!(board.legal_moves().len(), 9);
        assert!(!board.is_win());
        assert!(!board.is_draw());
    }

    #[test]
    fn test_play_is_pure() {
        let board = TicTacToe::new();
        let next = board.play(Move(4));

        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.turn(), Mark::O);
        assert!(!next.legal_moves().contains(&Move(4)));
    }

    #[test]
    fn test_win_and_evaluate() {
        let board: TicTacToe = "XXX\nOO.\n...".parse().unwrap();
        assert_eq!(board.turn(), Mark::O);
        assert!(board.is_win());
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.evaluate(Mark::X), 1.0);
        assert_eq!(board.evaluate(Mark::O), -1.0);
        assert!(!board.is_draw());
    }

    #[test]
    fn test_draw() {
        let board: TicTacToe = "XOXXOOOXX".parse().unwrap();
        assert!(!board.is_win());
        assert!(board.is_draw());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.evaluate(Mark::X), 0.0);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let board: TicTacToe = "OOO\nXX.\nX..".parse().unwrap();
        let first = board.evaluate(Mark::X);
        for _ in 0..5 {
            assert_eq!(board.evaluate(Mark::X), first);
        }
        assert_eq!(first, -1.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("XO".parse::<TicTacToe>(), Err(SearchError::InvalidBoard(_))));
        assert!(matches!("XOXOXOXOXO".parse::<TicTacToe>(), Err(SearchError::InvalidBoard(_))));
        assert!(matches!("XOZ......".parse::<TicTacToe>(), Err(SearchError::InvalidBoard(_))));
    }

    #[test]
    fn test_try_play_rejects_occupied_cell() {
        let board = TicTacToe::new().play(Move(0));
        assert_eq!(board.try_play(Move(0)), Err(SearchError::IllegalMove(Move(0))));
        assert!(board.try_play(Move(1)).is_ok());
    }

    #[test]
    #[should_panic(expected = "is not free")]
    fn test_play_occupied_panics() {
        let board = TicTacToe::new().play(Move(0));
        let _ = board.play(Move(0));
    }

    #[test]
    fn test_display() {
        let board: TicTacToe = "X.O......".parse().unwrap();
        assert_eq!(board.to_string(), "X| |O\n-----\n | | \n-----\n | | \n");
    }

    #[test]
    fn test_serialization() {
        let board = TicTacToe::new().play(Move(2));
        let json = serde_json::to_string(&board).unwrap();
        let back: TicTacToe = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
