//! Go rule engine with game session management.
//!
//! This crate provides:
//! - [`rules`] - pure functions for groups, liberties, captures, suicide,
//!   ko and move legality on explicit [`Board`](go_core::Board) values
//! - [`GameSession`] - the mutable game: turn order, history, capture
//!   tallies, game end, and change notifications
//!
//! # Example
//!
//! ```
//! use go_core::Color;
//! use go_engine::{GameSession, SessionError};
//!
//! let mut session = GameSession::new();
//! session.submit_move(3, 3).unwrap();
//! assert_eq!(session.current_player(), Color::White);
//!
//! // The same point cannot be played twice.
//! let err = session.submit_move(3, 3).unwrap_err();
//! assert_eq!(err.reason(), "occupied");
//! assert!(matches!(err, SessionError::Illegal(_)));
//! ```

pub mod rules;
mod session;

pub use rules::{EndReason, GameResult, IllegalMove, MoveOutcome, CAPTURE_LIMIT};
pub use session::{
    GameSession, GameState, MoveReport, SessionConfig, SessionError, SessionObserver, SessionState,
};
