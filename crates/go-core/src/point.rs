//! Board point (intersection) representation.

use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 19;

/// Number of intersections on the board.
pub const NUM_POINTS: usize = BOARD_SIZE * BOARD_SIZE;

/// Column letters used in vertex notation. `I` is skipped by convention.
const COLUMN_LETTERS: &[u8; BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRST";

/// Orthogonal offsets: up, down, left, right.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An intersection on the board.
///
/// Row 0 is the top edge, column 0 the left edge. Points are ordered
/// row-major, so sorted collections of points read like the board does.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    row: u8,
    col: u8,
}

impl Point {
    /// The nine star points (hoshi) of a 19x19 board.
    pub const STAR_POINTS: [Point; 9] = [
        Point { row: 3, col: 3 },
        Point { row: 3, col: 9 },
        Point { row: 3, col: 15 },
        Point { row: 9, col: 3 },
        Point { row: 9, col: 9 },
        Point { row: 9, col: 15 },
        Point { row: 15, col: 3 },
        Point { row: 15, col: 9 },
        Point { row: 15, col: 15 },
    ];

    /// Creates a point, or `None` if it is off the board.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Point {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns true if `(row, col)` lies on the board.
    #[inline]
    pub const fn is_valid_position(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Creates a point from signed coordinates, or `None` if off the board.
    #[inline]
    pub const fn from_signed(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid_position(row, col) {
            Some(Point {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a point from its row-major index (0-360).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_POINTS {
            Some(Point {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row-major index (0-360).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the orthogonally adjacent points that lie on the board.
    ///
    /// Interior points have four neighbors, edge points three, corners two.
    /// Diagonals are never neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        let (row, col) = (self.row as i32, self.col as i32);
        DIRECTIONS
            .into_iter()
            .filter_map(move |(dr, dc)| Point::from_signed(row + dr, col + dc))
    }

    /// Iterates over every point in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..NUM_POINTS).filter_map(Point::from_index)
    }

    /// Returns true if this is one of the nine star points.
    pub fn is_star_point(self) -> bool {
        Self::STAR_POINTS.contains(&self)
    }

    /// Parses vertex notation such as "D4" or "q16".
    ///
    /// Columns run A-T without I from the left; rows run 19 at the top
    /// down to 1 at the bottom.
    pub fn from_vertex(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.iter().position(|&c| c as char == letter)?;
        let number: usize = chars.as_str().parse().ok()?;
        if number == 0 || number > BOARD_SIZE {
            return None;
        }
        Point::new(BOARD_SIZE - number, col)
    }

    /// Returns the vertex notation for this point.
    pub fn to_vertex(self) -> String {
        format!(
            "{}{}",
            COLUMN_LETTERS[self.col as usize] as char,
            BOARD_SIZE - self.row as usize
        )
    }

    /// Returns the column letter used in vertex notation.
    pub fn column_letter(col: usize) -> Option<char> {
        COLUMN_LETTERS.get(col).map(|&c| c as char)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_vertex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(row: usize, col: usize) -> Point {
        Point::new(row, col).unwrap()
    }

    #[test]
    fn point_new() {
        let p = pt(3, 15);
        assert_eq!(p.row(), 3);
        assert_eq!(p.col(), 15);
        assert_eq!(p.index(), 3 * 19 + 15);
        assert_eq!(Point::new(19, 0), None);
        assert_eq!(Point::new(0, 19), None);
    }

    #[test]
    fn valid_position() {
        assert!(Point::is_valid_position(0, 0));
        assert!(Point::is_valid_position(18, 18));
        assert!(!Point::is_valid_position(-1, 0));
        assert!(!Point::is_valid_position(0, 19));
    }

    #[test]
    fn index_roundtrip_at_corners() {
        assert_eq!(Point::from_index(0), Some(pt(0, 0)));
        assert_eq!(Point::from_index(360), Some(pt(18, 18)));
        assert_eq!(Point::from_index(361), None);
    }

    #[test]
    fn neighbor_counts() {
        assert_eq!(pt(0, 0).neighbors().count(), 2);
        assert_eq!(pt(18, 18).neighbors().count(), 2);
        assert_eq!(pt(0, 9).neighbors().count(), 3);
        assert_eq!(pt(9, 18).neighbors().count(), 3);
        assert_eq!(pt(9, 9).neighbors().count(), 4);
    }

    #[test]
    fn neighbors_are_orthogonal() {
        let found: Vec<Point> = pt(5, 5).neighbors().collect();
        assert_eq!(found, vec![pt(4, 5), pt(6, 5), pt(5, 4), pt(5, 6)]);
    }

    #[test]
    fn all_points_in_order() {
        let all: Vec<Point> = Point::all().collect();
        assert_eq!(all.len(), NUM_POINTS);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn vertex_parsing() {
        assert_eq!(Point::from_vertex("A19"), Some(pt(0, 0)));
        assert_eq!(Point::from_vertex("T1"), Some(pt(18, 18)));
        assert_eq!(Point::from_vertex("d4"), Some(pt(15, 3)));
        assert_eq!(Point::from_vertex("J10"), Some(pt(9, 8)));
        assert_eq!(Point::from_vertex("I5"), None);
        assert_eq!(Point::from_vertex("A0"), None);
        assert_eq!(Point::from_vertex("A20"), None);
        assert_eq!(Point::from_vertex(""), None);
    }

    #[test]
    fn vertex_rendering() {
        assert_eq!(pt(0, 0).to_vertex(), "A19");
        assert_eq!(pt(15, 3).to_vertex(), "D4");
        assert_eq!(pt(9, 8).to_vertex(), "J10");
        assert_eq!(format!("{}", pt(18, 18)), "T1");
    }

    #[test]
    fn star_points() {
        assert!(pt(3, 3).is_star_point());
        assert!(pt(9, 9).is_star_point());
        assert!(!pt(3, 4).is_star_point());
    }
}
