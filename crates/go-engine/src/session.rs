//! Game session management.
//!
//! [`GameSession`] owns everything that changes during a game: the current
//! board, the position record used for ko, whose turn it is, capture
//! tallies and whether the game has ended. It validates each request with
//! the pure functions in [`rules`](crate::rules) before touching any state
//! and pushes the resulting changes to registered [`SessionObserver`]s.

use std::fmt;

use go_core::{Board, Color, Point};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::rules::{self, GameResult, IllegalMove, MoveOutcome, CAPTURE_LIMIT};

/// Error type for session operations.
///
/// Every error leaves the session exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The move breaks a rule.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    /// The game has already ended; only a restart is accepted.
    #[error("game already ended")]
    GameAlreadyEnded,
    /// The coordinates are off the board.
    #[error("({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },
}

impl SessionError {
    /// Returns the short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            SessionError::Illegal(illegal) => illegal.reason(),
            SessionError::GameAlreadyEnded => "game already ended",
            SessionError::OutOfRange { .. } => "out of range",
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Ended(GameResult),
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of lost stones that ends the game.
    pub capture_limit: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            capture_limit: CAPTURE_LIMIT,
        }
    }
}

impl SessionConfig {
    /// Returns a config that ends the game once either side has lost
    /// `limit` stones, or `None` for a zero limit.
    pub const fn with_capture_limit(limit: u32) -> Option<Self> {
        if limit == 0 {
            None
        } else {
            Some(SessionConfig {
                capture_limit: limit,
            })
        }
    }
}

/// What a successful move changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the stone was placed.
    pub point: Point,
    /// Color of the placed stone.
    pub color: Color,
    /// Opponent stones removed, row-major.
    pub captured: Vec<Point>,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

/// A plain copy of the session's game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    /// Black stones lost so far.
    pub captured_black: u32,
    /// White stones lost so far.
    pub captured_white: u32,
    pub ended: bool,
    pub winner: Option<Color>,
    /// Plies recorded so far, passes included.
    pub move_count: usize,
}

/// Receives session changes, typically to redraw a board.
///
/// All methods default to doing nothing, so an observer only implements
/// what it renders. Calls are synchronous and happen before the session
/// method returns.
pub trait SessionObserver {
    /// A stone was placed and `report.captured` were removed.
    fn move_played(&mut self, _report: &MoveReport) {}

    /// A move or pass was refused.
    fn move_rejected(&mut self, _error: &SessionError) {}

    /// `color` passed.
    fn passed(&mut self, _color: Color) {}

    /// The game is over.
    fn game_ended(&mut self, _result: &GameResult) {}

    /// The set of points the player to move may not play changed.
    fn forbidden_points_changed(&mut self, _points: &[Point]) {}

    /// The session was restarted.
    fn board_cleared(&mut self) {}
}

/// A two-player game of Go.
///
/// Sessions are ordinary owned values; create as many as needed. They are
/// not meant to be shared between threads without external locking.
pub struct GameSession {
    /// Every position of the game, oldest first. The last entry is the
    /// current board; the ones before it are the pre-move boards.
    positions: Vec<Board>,
    current_player: Color,
    /// Lost stones, indexed by the color of the stones.
    captured: [u32; 2],
    state: SessionState,
    last_move: Option<Point>,
    forbidden: Vec<Point>,
    config: SessionConfig,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session on an empty board with Black to move.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with custom settings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self::from_position(Board::new(), Color::Black, config)
    }

    /// Creates a session that starts from an arbitrary board.
    ///
    /// The board has no history, so ko cannot apply to the first move.
    /// [`restart`](Self::restart) still returns to an empty board.
    /// A capture limit of zero is raised to one.
    pub fn from_position(board: Board, to_move: Color, mut config: SessionConfig) -> Self {
        if config.capture_limit == 0 {
            warn!("capture limit of zero raised to one");
            config.capture_limit = 1;
        }
        let mut session = GameSession {
            positions: vec![board],
            current_player: to_move,
            captured: [0; 2],
            state: SessionState::InProgress,
            last_move: None,
            forbidden: Vec::new(),
            config,
            observers: Vec::new(),
        };
        session.forbidden = session.compute_forbidden_points();
        session
    }

    /// Registers an observer. Observers survive restarts.
    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.positions[self.positions.len() - 1]
    }

    /// Returns the board before each recorded ply, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.positions[..self.positions.len() - 1]
    }

    /// Returns the color to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns how many stones of `color` have been captured.
    pub fn captured(&self, color: Color) -> u32 {
        self.captured[color.index()]
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Returns true once the game has ended.
    pub fn is_ended(&self) -> bool {
        matches!(self.state, SessionState::Ended(_))
    }

    /// Returns the winner if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        match self.state {
            SessionState::Ended(result) => Some(result.winner),
            SessionState::InProgress => None,
        }
    }

    /// Returns the point of the most recent stone placement.
    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    /// Returns the number of plies played, passes included.
    pub fn move_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Returns the forbidden points computed after the last move.
    pub fn forbidden_points(&self) -> &[Point] {
        &self.forbidden
    }

    /// Returns a copy of the game state.
    pub fn snapshot(&self) -> GameState {
        GameState {
            board: self.board().clone(),
            current_player: self.current_player,
            captured_black: self.captured(Color::Black),
            captured_white: self.captured(Color::White),
            ended: self.is_ended(),
            winner: self.winner(),
            move_count: self.move_count(),
        }
    }

    /// Checks whether the player to move may play at `point`.
    pub fn check_move(&self, point: Point) -> Result<(), IllegalMove> {
        rules::is_valid_move(self.board(), point, self.current_player, &self.positions)
    }

    /// Plays a stone for the current player at `(row, col)`.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveReport, SessionError> {
        match Point::new(row, col) {
            Some(point) => self.play(point),
            None => self.reject(SessionError::OutOfRange { row, col }),
        }
    }

    /// Plays a stone for the current player at `point`.
    pub fn play(&mut self, point: Point) -> Result<MoveReport, SessionError> {
        if self.is_ended() {
            return self.reject(SessionError::GameAlreadyEnded);
        }
        if let Err(illegal) = self.check_move(point) {
            return self.reject(illegal.into());
        }

        let color = self.current_player;
        let MoveOutcome { board, captured } = rules::apply_move(self.board(), point, color);
        self.positions.push(board);
        self.captured[color.opposite().index()] += captured.len() as u32;
        self.last_move = Some(point);

        let result = rules::is_game_over_with_limit(
            self.config.capture_limit,
            self.captured(Color::Black),
            self.captured(Color::White),
        );
        let report = MoveReport {
            point,
            color,
            captured,
            result,
        };

        debug!(
            point = %point,
            color = %color,
            captured = report.captured.len(),
            "move played"
        );
        for observer in self.observers.iter_mut() {
            observer.move_played(&report);
        }

        match result {
            Some(result) => {
                self.state = SessionState::Ended(result);
                info!(winner = %result.winner, "game ended: {}", result);
                for observer in self.observers.iter_mut() {
                    observer.game_ended(&result);
                }
            }
            None => {
                self.current_player = color.opposite();
                self.forbidden = self.compute_forbidden_points();
                for observer in self.observers.iter_mut() {
                    observer.forbidden_points_changed(&self.forbidden);
                }
            }
        }

        Ok(report)
    }

    /// Passes the turn without placing a stone.
    ///
    /// The unchanged board is still recorded as a ply. Passing never ends
    /// the game and does not refresh the forbidden points.
    pub fn pass(&mut self) -> Result<(), SessionError> {
        if self.is_ended() {
            return self.reject(SessionError::GameAlreadyEnded);
        }

        let color = self.current_player;
        let board = self.board().clone();
        self.positions.push(board);
        self.current_player = color.opposite();

        debug!(color = %color, "pass");
        for observer in self.observers.iter_mut() {
            observer.passed(color);
        }
        Ok(())
    }

    /// Returns to the start of a game: empty board, Black to move.
    ///
    /// Configuration and observers are kept.
    pub fn restart(&mut self) {
        self.positions.clear();
        self.positions.push(Board::new());
        self.current_player = Color::Black;
        self.captured = [0; 2];
        self.state = SessionState::InProgress;
        self.last_move = None;
        self.forbidden.clear();

        info!("game restarted");
        for observer in self.observers.iter_mut() {
            observer.board_cleared();
        }
    }

    /// Returns every empty point the player to move may not play, row-major.
    ///
    /// Legality depends on the player and the history, so this must be
    /// recomputed after each move.
    pub fn compute_forbidden_points(&self) -> Vec<Point> {
        self.board()
            .empty_points()
            .filter(|&point| self.check_move(point).is_err())
            .collect()
    }

    fn reject<T>(&mut self, error: SessionError) -> Result<T, SessionError> {
        debug!(reason = error.reason(), "move rejected");
        for observer in self.observers.iter_mut() {
            observer.move_rejected(&error);
        }
        Err(error)
    }

    #[cfg(test)]
    fn set_captured_for_test(&mut self, color: Color, count: u32) {
        self.captured[color.index()] = count;
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", self.board())
            .field("current_player", &self.current_player)
            .field("captured", &self.captured)
            .field("state", &self.state)
            .field("move_count", &self.move_count())
            .field("observers", &self.observers.len())
            .finish()
    }
}
