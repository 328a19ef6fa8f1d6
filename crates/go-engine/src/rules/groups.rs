//! Group discovery and liberty counting.

use std::collections::BTreeSet;

use go_core::{Board, Point};

/// Returns the on-board points orthogonally adjacent to `point`.
#[inline]
pub fn neighbors(point: Point) -> impl Iterator<Item = Point> {
    point.neighbors()
}

/// Returns the group containing `seed`: every stone of the seed's color
/// reachable through orthogonal steps over stones of that color.
///
/// Returns an empty set when `seed` is empty. Uses an explicit worklist and
/// a visited set local to this call, so each point is visited once.
pub fn group(board: &Board, seed: Point) -> BTreeSet<Point> {
    let mut members = BTreeSet::new();
    let Some(color) = board.stone_at(seed) else {
        return members;
    };

    members.insert(seed);
    let mut stack = vec![seed];
    while let Some(point) = stack.pop() {
        for next in point.neighbors() {
            if board.stone_at(next) == Some(color) && members.insert(next) {
                stack.push(next);
            }
        }
    }

    members
}

/// Returns the empty points adjacent to any stone of `group`.
pub fn liberties(board: &Board, group: &BTreeSet<Point>) -> BTreeSet<Point> {
    group
        .iter()
        .flat_map(|&point| point.neighbors())
        .filter(|&next| board.is_empty_at(next))
        .collect()
}

/// Returns true if `group` has no liberties left.
pub fn is_captured(board: &Board, group: &BTreeSet<Point>) -> bool {
    // Stops at the first liberty instead of collecting them all.
    !group
        .iter()
        .flat_map(|&point| point.neighbors())
        .any(|next| board.is_empty_at(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use go_core::Color;

    fn pt(row: usize, col: usize) -> Point {
        Point::new(row, col).unwrap()
    }

    #[test]
    fn group_of_empty_point_is_empty() {
        assert!(group(&Board::new(), pt(4, 4)).is_empty());
    }

    #[test]
    fn group_follows_orthogonal_links_only() {
        let board = Board::from_diagram(
            "
            X X .
            . X .
            . . X
            ",
        )
        .unwrap();

        let found = group(&board, pt(0, 0));
        let expected: BTreeSet<Point> = [pt(0, 0), pt(0, 1), pt(1, 1)].into_iter().collect();
        assert_eq!(found, expected);
        assert_eq!(group(&board, pt(2, 2)).len(), 1);
    }

    #[test]
    fn group_stops_at_other_color() {
        let board = Board::from_diagram("X O X").unwrap();
        assert_eq!(group(&board, pt(0, 0)).len(), 1);
        assert_eq!(group(&board, pt(0, 1)).len(), 1);
    }

    #[test]
    fn group_handles_rings() {
        let board = Board::from_diagram(
            "
            X X X
            X . X
            X X X
            ",
        )
        .unwrap();
        assert_eq!(group(&board, pt(1, 0)).len(), 8);
    }

    #[test]
    fn liberties_are_shared_not_double_counted() {
        let board = Board::from_diagram(
            "
            . . .
            X X .
            ",
        )
        .unwrap();
        let stones = group(&board, pt(1, 0));
        let libs = liberties(&board, &stones);
        let expected: BTreeSet<Point> =
            [pt(0, 0), pt(0, 1), pt(1, 2), pt(2, 0), pt(2, 1)].into_iter().collect();
        assert_eq!(libs, expected);
    }

    #[test]
    fn corner_stone_has_two_liberties() {
        let board = Board::new().with_stone_at(pt(0, 0), Color::Black);
        let stones = group(&board, pt(0, 0));
        assert_eq!(liberties(&board, &stones).len(), 2);
        assert!(!is_captured(&board, &stones));
    }

    #[test]
    fn surrounded_stone_is_captured() {
        let board = Board::from_diagram(
            "
            X O
            O .
            ",
        )
        .unwrap();
        let stones = group(&board, pt(0, 0));
        assert!(liberties(&board, &stones).is_empty());
        assert!(is_captured(&board, &stones));
    }
}
