//! Grid maze for exercising the graph searches.
//!
//! A maze is a rectangle of cells, some blocked, with a start and a goal.
//! Movement is to the four orthogonal neighbours.
//!
//! ```
//! use classic_search::graph::bfs;
//! use classic_search::problems::Maze;
//!
//! let maze: Maze = "S.X\n..X\nX.G".parse().unwrap();
//! let solution = bfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l)).unwrap();
//! assert_eq!(solution.depth(), 4);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::{Result, SearchError};

/// Contents of one maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Blocked => 'X',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Path => '*',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            ' ' | '.' => Some(Cell::Empty),
            'X' | '#' => Some(Cell::Blocked),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            '*' => Some(Cell::Path),
            _ => None,
        }
    }
}

/// A `(row, column)` position in a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MazeLocation {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub column: usize,
}

impl MazeLocation {
    /// Create a location.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for MazeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A rectangular grid maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    start: MazeLocation,
    goal: MazeLocation,
}

impl Maze {
    /// Random maze: each cell is blocked with probability `sparseness`.
    ///
    /// The same `seed` always yields the same maze. Start and goal are never
    /// blocked; a path between them is not guaranteed. `sparseness` must lie
    /// in `[0, 1]`.
    pub fn random(
        rows: usize,
        columns: usize,
        sparseness: f64,
        seed: u64,
        start: MazeLocation,
        goal: MazeLocation,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(SearchError::InvalidMaze(format!("empty {}x{} grid", rows, columns)));
        }
        if !(0.0..=1.0).contains(&sparseness) {
            return Err(SearchError::InvalidMaze(format!(
                "sparseness {} is not a probability",
                sparseness
            )));
        }
        for loc in [start, goal] {
            if loc.row >= rows || loc.column >= columns {
                return Err(SearchError::InvalidMaze(format!(
                    "{} is outside the {}x{} grid",
                    loc, rows, columns
                )));
            }
        }

        let mut rng = GameRng::new(seed);
        let cells = (0..rows * columns)
            .map(|_| if rng.gen_bool(sparseness) { Cell::Blocked } else { Cell::Empty })
            .collect();

        let mut maze = Self {
            rows,
            columns,
            cells,
            start,
            goal,
        };
        maze.set(start, Cell::Start);
        maze.set(goal, Cell::Goal);
        log::trace!("generated {}x{} maze from seed {}", rows, columns, seed);
        Ok(maze)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Where the search begins.
    #[must_use]
    pub fn start(&self) -> MazeLocation {
        self.start
    }

    /// Where the search ends.
    #[must_use]
    pub fn goal(&self) -> MazeLocation {
        self.goal
    }

    /// The cell at `loc`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, loc: MazeLocation) -> Option<Cell> {
        self.index(loc).map(|i| self.cells[i])
    }

    /// Is `loc` the goal?
    pub fn goal_test(&self, loc: &MazeLocation) -> bool {
        *loc == self.goal
    }

    /// Open neighbours of `loc`, in the order down, up, right, left.
    pub fn successors(&self, loc: &MazeLocation) -> Vec<MazeLocation> {
        let MazeLocation { row, column } = *loc;
        let candidates = [
            (row + 1 < self.rows).then(|| MazeLocation::new(row + 1, column)),
            row.checked_sub(1).map(|r| MazeLocation::new(r, column)),
            (column + 1 < self.columns).then(|| MazeLocation::new(row, column + 1)),
            column.checked_sub(1).map(|c| MazeLocation::new(row, c)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|next| self.get(*next).map_or(false, |cell| cell != Cell::Blocked))
            .collect()
    }

    /// Draw `path` onto the maze. Start and goal keep their symbols.
    pub fn mark(&mut self, path: &[MazeLocation]) {
        for &loc in path {
            self.set(loc, Cell::Path);
        }
        self.set(self.start, Cell::Start);
        self.set(self.goal, Cell::Goal);
    }

    /// Undo `mark`.
    pub fn clear(&mut self, path: &[MazeLocation]) {
        for &loc in path {
            self.set(loc, Cell::Empty);
        }
        self.set(self.start, Cell::Start);
        self.set(self.goal, Cell::Goal);
    }

    fn index(&self, loc: MazeLocation) -> Option<usize> {
        (loc.row < self.rows && loc.column < self.columns).then(|| loc.row * self.columns + loc.column)
    }

    fn set(&mut self, loc: MazeLocation, cell: Cell) {
        if let Some(i) = self.index(loc) {
            self.cells[i] = cell;
        }
    }
}

/// Straight-line distance to `goal`.
pub fn euclidean_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> f64 {
    move |loc| {
        let dr = loc.row as f64 - goal.row as f64;
        let dc = loc.column as f64 - goal.column as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

/// Grid distance to `goal`. Admissible and consistent for 4-way unit moves.
pub fn manhattan_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> f64 {
    move |loc| (loc.row.abs_diff(goal.row) + loc.column.abs_diff(goal.column)) as f64
}

/// One line per row. `X` or `#` blocked, `.` or space open, exactly one `S`
/// and one `G`. `*` is read as open.
impl FromStr for Maze {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();
        let rows = lines.len();
        let columns = lines.first().map_or(0, |l| l.chars().count());
        if rows == 0 || columns == 0 {
            return Err(SearchError::InvalidMaze("no cells".to_string()));
        }

        let mut cells = Vec::with_capacity(rows * columns);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(SearchError::InvalidMaze(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    columns
                )));
            }
            for (column, ch) in line.chars().enumerate() {
                let cell = Cell::from_symbol(ch)
                    .ok_or_else(|| SearchError::InvalidMaze(format!("unexpected character {:?}", ch)))?;
                let loc = MazeLocation::new(row, column);
                let slot = match cell {
                    Cell::Start => &mut start,
                    Cell::Goal => &mut goal,
                    _ => {
                        cells.push(if cell == Cell::Path { Cell::Empty } else { cell });
                        continue;
                    }
                };
                if slot.replace(loc).is_some() {
                    return Err(SearchError::InvalidMaze(format!("duplicate {:?} at {}", cell, loc)));
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or_else(|| SearchError::InvalidMaze("missing start".to_string()))?;
        let goal = goal.ok_or_else(|| SearchError::InvalidMaze("missing goal".to_string()))?;
        Ok(Self {
            rows,
            columns,
            cells,
            start,
            goal,
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
