//! Connect four on the standard 7x6 grid.
//!
//! Columns are kept in a persistent vector, so `play` copies only the
//! column that changes and shares the other six with the parent board.

use std::fmt;

use im::Vector;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::Result;
use crate::rules::{Board, Move, Moves, Piece};

/// Number of columns.
pub const COLUMNS: usize = 7;
/// Number of rows.
pub const ROWS: usize = 6;
/// Discs in a row needed to win.
pub const SEGMENT_LENGTH: usize = 4;

/// Connect four player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Black,
    Red,
}

impl Piece for Disc {
    fn opposite(self) -> Self {
        match self {
            Disc::Black => Disc::Red,
            Disc::Red => Disc::Black,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::Black => write!(f, "B"),
            Disc::Red => write!(f, "R"),
        }
    }
}

/// `(column, row)` cells of one potential four-in-a-row.
pub type Segment = [(usize, usize); SEGMENT_LENGTH];

/// Every potential line of `SEGMENT_LENGTH` cells on a `columns` x `rows` grid.
///
/// Row 0 is the bottom row.
pub fn generate_segments(columns: usize, rows: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    if columns == 0 || rows == 0 {
        return segments;
    }
    let len = SEGMENT_LENGTH;

    // Vertical
    for c in 0..columns {
        for r in 0..(rows + 1).saturating_sub(len) {
            segments.push(std::array::from_fn(|t| (c, r + t)));
        }
    }

    // Horizontal
    for c in 0..(columns + 1).saturating_sub(len) {
        for r in 0..rows {
            segments.push(std::array::from_fn(|t| (c + t, r)));
        }
    }

    // Diagonal, bottom-left to top-right
    for c in 0..(columns + 1).saturating_sub(len) {
        for r in 0..(rows + 1).saturating_sub(len) {
            segments.push(std::array::from_fn(|t| (c + t, r + t)));
        }
    }

    // Diagonal, top-left to bottom-right
    for c in 0..(columns + 1).saturating_sub(len) {
        for r in (len - 1)..rows {
            segments.push(std::array::from_fn(|t| (c + t, r - t)));
        }
    }

    segments
}

static SEGMENTS: Lazy<Vec<Segment>> = Lazy::new(|| generate_segments(COLUMNS, ROWS));

/// One column, filled from the bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    discs: SmallVec<[Disc; ROWS]>,
}

impl Column {
    /// No room left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.discs.len() == ROWS
    }

    /// Number of discs.
    #[must_use]
    pub fn height(&self) -> usize {
        self.discs.len()
    }

    /// The disc at `row` (0 = bottom), if any.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<Disc> {
        self.discs.get(row).copied()
    }

    fn push(&mut self, disc: Disc) {
        assert!(!self.is_full(), "column is full");
        self.discs.push(disc);
    }
}

/// A connect four position. Black moves first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFour {
    columns: Vector<Column>,
    turn: Disc,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFour {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self {
            columns: (0..COLUMNS).map(|_| Column::default()).collect(),
            turn: Disc::Black,
        }
    }

    /// Play `moves` in order from the empty board, checking each one.
    pub fn from_moves(moves: &[u8]) -> Result<Self> {
        moves
            .iter()
            .try_fold(Self::new(), |board, &column| board.try_play(Move(column)))
    }

    /// The disc at `(column, row)`, if any.
    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<Disc> {
        self.columns.get(column).and_then(|c| c.get(row))
    }

    /// A column of the board.
    #[must_use]
    pub fn column(&self, column: usize) -> Option<&Column> {
        self.columns.get(column)
    }

    /// (black, red) disc counts in `segment`.
    fn count_segment(&self, segment: &Segment) -> (usize, usize) {
        segment
            .iter()
            .fold((0, 0), |(black, red), &(c, r)| match self.get(c, r) {
                Some(Disc::Black) => (black + 1, red),
                Some(Disc::Red) => (black, red + 1),
                None => (black, red),
            })
    }

    /// Score of one segment for `player`. Mixed segments are worth nothing.
    fn evaluate_segment(&self, segment: &Segment, player: Disc) -> f64 {
        let (black, red) = self.count_segment(segment);
        if black > 0 && red > 0 {
            return 0.0;
        }

        let score = match black.max(red) {
            2 => 1.0,
            3 => 100.0,
            4 => 1_000_000.0,
            _ => 0.0,
        };
        let owner = if red > black { Disc::Red } else { Disc::Black };
        if owner == player {
            score
        } else {
            -score
        }
    }
}

impl Board for ConnectFour {
    type Piece = Disc;

    fn turn(&self) -> Disc {
        self.turn
    }

    fn legal_moves(&self) -> Moves {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.is_full())
            .map(|(i, _)| Move(i as u8))
            .collect()
    }

    fn play(&self, mv: Move) -> Self {
        assert!(mv.index() < COLUMNS, "column {} is off the board", mv);
        let mut column = self.columns[mv.index()].clone();
        column.push(self.turn);
        Self {
            columns: self.columns.update(mv.index(), column),
            turn: self.turn.opposite(),
        }
    }

    fn is_win(&self) -> bool {
        SEGMENTS.iter().any(|segment| {
            let (black, red) = self.count_segment(segment);
            black == SEGMENT_LENGTH || red == SEGMENT_LENGTH
        })
    }

    /// Sum over all segments: 1 for two discs, 100 for three, 1e6 for four,
    /// positive for `player`'s segments and negative for the opponent's.
    fn evaluate(&self, player: Disc) -> f64 {
        SEGMENTS
            .iter()
            .map(|segment| self.evaluate_segment(segment, player))
            .sum()
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for column in 0..COLUMNS {
                match self.get(column, row) {
                    Some(disc) => write!(f, "{}|", disc)?,
                    None => write!(f, " |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
