//! Captures, suicide, ko and move legality.

use std::collections::BTreeSet;

use go_core::{Board, Color, Point};

use super::groups::{group, is_captured};
use super::IllegalMove;

/// The board after a move together with the stones it removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The new board.
    pub board: Board,
    /// Opponent stones removed by the move, row-major.
    pub captured: Vec<Point>,
}

/// Returns the opponent stones that a `color` stone at `point` would capture.
///
/// Every opponent group touching `point` is examined on the board with the
/// new stone in place; groups left without liberties are captured whole.
/// A stone is reported once even when its group touches `point` on several
/// sides.
pub fn captured_stones(board: &Board, point: Point, color: Color) -> Vec<Point> {
    let placed = board.with_stone_at(point, color);
    captures_after_placement(&placed, point, color)
}

/// Returns true if a `color` stone at `point` would leave its own group
/// without liberties while capturing nothing.
pub fn is_suicide(board: &Board, point: Point, color: Color) -> bool {
    let placed = board.with_stone_at(point, color);
    if !captures_after_placement(&placed, point, color).is_empty() {
        return false;
    }
    is_captured(&placed, &group(&placed, point))
}

/// Returns true if playing `color` at `point` would recreate the position
/// from two plies earlier.
///
/// `positions` is the game record oldest first and ends with `board`, the
/// position the move is played on. With fewer than two positions there is
/// nothing to repeat.
pub fn is_ko_violation(board: &Board, point: Point, color: Color, positions: &[Board]) -> bool {
    let Some(two_plies_back) = positions.len().checked_sub(2).map(|i| &positions[i]) else {
        return false;
    };
    apply_move(board, point, color).board == *two_plies_back
}

/// Checks whether `color` may play at `point`.
///
/// The checks run in order (occupied, suicide, ko) and the first failure
/// is returned. No state is touched, so repeated calls agree.
pub fn is_valid_move(
    board: &Board,
    point: Point,
    color: Color,
    positions: &[Board],
) -> Result<(), IllegalMove> {
    if !board.is_empty_at(point) {
        return Err(IllegalMove::Occupied);
    }
    if is_suicide(board, point, color) {
        return Err(IllegalMove::Suicide);
    }
    if is_ko_violation(board, point, color, positions) {
        return Err(IllegalMove::Ko);
    }
    Ok(())
}

/// Places a `color` stone at `point` and removes the stones it captures.
///
/// Does not check legality; call [`is_valid_move`] first. The input board
/// is left unchanged.
pub fn apply_move(board: &Board, point: Point, color: Color) -> MoveOutcome {
    let placed = board.with_stone_at(point, color);
    let captured = captures_after_placement(&placed, point, color);
    let board = if captured.is_empty() {
        placed
    } else {
        placed.without_stones(&captured)
    };
    MoveOutcome { board, captured }
}

fn captures_after_placement(placed: &Board, point: Point, color: Color) -> Vec<Point> {
    let opponent = color.opposite();
    let mut captured = BTreeSet::new();

    for next in point.neighbors() {
        if placed.stone_at(next) != Some(opponent) || captured.contains(&next) {
            continue;
        }
        let stones = group(placed, next);
        if is_captured(placed, &stones) {
            captured.extend(stones);
        }
    }

    captured.into_iter().collect()
}
