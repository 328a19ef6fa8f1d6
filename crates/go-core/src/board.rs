//! Board snapshots and text diagrams.

use std::fmt;

use thiserror::Error;

use crate::point::{BOARD_SIZE, NUM_POINTS};
use crate::{Color, Point};

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("diagram has more than 19 rows")]
    TooManyRows,

    #[error("row {row} has more than 19 columns")]
    TooManyColumns { row: usize },

    #[error("invalid glyph '{glyph}' at row {row}, column {col}")]
    InvalidGlyph { row: usize, col: usize, glyph: char },
}

/// A 19x19 board snapshot.
///
/// Boards have value semantics: the operations that change stones return a
/// new board and leave `self` untouched, so a board pushed into a move
/// history never changes afterwards. Cloning copies all 361 cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Color>; NUM_POINTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Board {
            cells: [None; NUM_POINTS],
        }
    }

    /// Returns the stone at `point`, or `None` if the point is empty.
    #[inline]
    pub fn stone_at(&self, point: Point) -> Option<Color> {
        self.cells[point.index()]
    }

    /// Returns true if no stone occupies `point`.
    #[inline]
    pub fn is_empty_at(&self, point: Point) -> bool {
        self.cells[point.index()].is_none()
    }

    /// Returns a copy of this board with a `color` stone at `point`.
    ///
    /// Any stone already on `point` is replaced. This is the scratch board
    /// used to evaluate hypothetical placements; it costs one full copy.
    pub fn with_stone_at(&self, point: Point, color: Color) -> Board {
        let mut next = self.clone();
        next.cells[point.index()] = Some(color);
        next
    }

    /// Returns a copy of this board with every listed point emptied.
    pub fn without_stones<'a, I>(&self, points: I) -> Board
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut next = self.clone();
        for point in points {
            next.cells[point.index()] = None;
        }
        next
    }

    /// Counts the stones of one color.
    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Returns true if the board holds no stones at all.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterates over occupied points and their stones, row-major.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        Point::all().filter_map(move |p| self.stone_at(p).map(|c| (p, c)))
    }

    /// Iterates over empty points, row-major.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(move |&p| self.is_empty_at(p))
    }

    /// Parses a text diagram.
    ///
    /// Each non-blank line is one row starting at the top edge. `.` and `+`
    /// are empty, `X`/`B` black, `O`/`W` white; spaces are ignored. Rows
    /// and columns that are left out are empty.
    ///
    /// ```
    /// use go_core::{Board, Color, Point};
    ///
    /// let board = Board::from_diagram("
    ///     . X
    ///     X O
    /// ").unwrap();
    /// assert_eq!(board.stone_at(Point::new(1, 1).unwrap()), Some(Color::White));
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Board, DiagramError> {
        let mut board = Board::new();
        let rows = diagram.lines().filter(|line| !line.trim().is_empty());

        for (row, line) in rows.enumerate() {
            if row >= BOARD_SIZE {
                return Err(DiagramError::TooManyRows);
            }
            let glyphs = line.chars().filter(|c| !c.is_whitespace());
            for (col, glyph) in glyphs.enumerate() {
                if col >= BOARD_SIZE {
                    return Err(DiagramError::TooManyColumns { row });
                }
                let cell = match glyph {
                    '.' | '+' => None,
                    'X' | 'x' | 'B' | 'b' => Some(Color::Black),
                    'O' | 'o' | 'W' | 'w' => Some(Color::White),
                    _ => return Err(DiagramError::InvalidGlyph { row, col, glyph }),
                };
                board.cells[row * BOARD_SIZE + col] = cell;
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Color::glyph))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
