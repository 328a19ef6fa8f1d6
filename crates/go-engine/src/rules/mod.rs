//! Rule computation over explicit board values.
//!
//! Everything in this module is a pure function: boards go in, new boards
//! and verdicts come out, and no input is ever modified. Session state such
//! as whose turn it is lives in [`GameSession`](crate::GameSession).

mod groups;
mod legality;

pub use groups::{group, is_captured, liberties, neighbors};
pub use legality::{
    apply_move, captured_stones, is_ko_violation, is_suicide, is_valid_move, MoveOutcome,
};

use go_core::Color;
use std::fmt;
use thiserror::Error;

/// Number of lost stones that ends the game.
pub const CAPTURE_LIMIT: u32 = 50;

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    /// The point already holds a stone.
    #[error("point is already occupied")]
    Occupied,
    /// The stone's own group would have no liberties and nothing is captured.
    #[error("suicide is not allowed")]
    Suicide,
    /// The move would recreate the position from two plies earlier.
    #[error("move violates the ko rule")]
    Ko,
}

impl IllegalMove {
    /// Returns the short machine-readable reason.
    pub const fn reason(self) -> &'static str {
        match self {
            IllegalMove::Occupied => "occupied",
            IllegalMove::Suicide => "suicide",
            IllegalMove::Ko => "ko",
        }
    }
}

/// How a finished game was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The loser had `limit` or more stones captured.
    CaptureLimit { limit: u32 },
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    pub winner: Color,
    pub reason: EndReason,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            EndReason::CaptureLimit { limit } => {
                write!(f, "{} wins by capturing {} stones", self.winner, limit)
            }
        }
    }
}

/// Returns the result once either color has lost [`CAPTURE_LIMIT`] stones.
///
/// `black_captured` counts black stones taken off the board, so reaching the
/// limit there means White wins.
pub fn is_game_over(black_captured: u32, white_captured: u32) -> Option<GameResult> {
    is_game_over_with_limit(CAPTURE_LIMIT, black_captured, white_captured)
}

/// Like [`is_game_over`] with a custom limit.
pub fn is_game_over_with_limit(
    limit: u32,
    black_captured: u32,
    white_captured: u32,
) -> Option<GameResult> {
    let reason = EndReason::CaptureLimit { limit };
    if black_captured >= limit {
        Some(GameResult {
            winner: Color::White,
            reason,
        })
    } else if white_captured >= limit {
        Some(GameResult {
            winner: Color::Black,
            reason,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_continues_below_limit() {
        assert_eq!(is_game_over(0, 0), None);
        assert_eq!(is_game_over(49, 49), None);
    }

    #[test]
    fn losing_fifty_black_stones_means_white_wins() {
        let result = is_game_over(50, 3).unwrap();
        assert_eq!(result.winner, Color::White);
        assert_eq!(result.reason, EndReason::CaptureLimit { limit: 50 });
    }

    #[test]
    fn losing_fifty_white_stones_means_black_wins() {
        assert_eq!(is_game_over(12, 57).map(|r| r.winner), Some(Color::Black));
    }

    #[test]
    fn custom_limit() {
        assert_eq!(is_game_over_with_limit(3, 2, 2), None);
        assert_eq!(
            is_game_over_with_limit(3, 0, 3).map(|r| r.winner),
            Some(Color::Black)
        );
    }

    #[test]
    fn result_display() {
        let result = is_game_over(50, 0).unwrap();
        assert_eq!(result.to_string(), "White wins by capturing 50 stones");
    }

    #[test]
    fn illegal_move_reasons() {
        assert_eq!(IllegalMove::Occupied.reason(), "occupied");
        assert_eq!(IllegalMove::Suicide.reason(), "suicide");
        assert_eq!(IllegalMove::Ko.reason(), "ko");
        assert_eq!(IllegalMove::Ko.to_string(), "move violates the ko rule");
    }
}
