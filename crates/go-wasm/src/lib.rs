//! WebAssembly bindings for the Go engine.
//!
//! This crate exposes a [`GoGame`] to JavaScript so a browser page can
//! forward clicks as moves and redraw from what each call returns.
//!
//! # Usage
//!
//! ```javascript
//! import init, { GoGame, starPoints } from 'go-wasm';
//!
//! await init();
//!
//! const game = new GoGame();
//! try {
//!   const result = game.submitMove(3, 3);
//!   drawStone(result.placed);
//!   removeStones(result.captured);
//!   markForbidden(game.forbiddenPoints());
//! } catch (err) {
//!   alert(err.message); // "occupied", "suicide", "ko", ...
//! }
//! ```

use go_core::{Color, Point};
use go_engine::{GameSession, GameState, MoveReport, SessionConfig, SessionError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A point as seen by JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JsPoint {
    pub row: usize,
    pub col: usize,
}

impl From<Point> for JsPoint {
    fn from(point: Point) -> Self {
        JsPoint {
            row: point.row(),
            col: point.col(),
        }
    }
}

/// A placed stone as seen by JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JsStone {
    pub row: usize,
    pub col: usize,
    pub color: &'static str,
}

/// Everything the page needs to redraw after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSummary {
    pub placed: JsStone,
    pub captured: Vec<JsPoint>,
    pub last_move: JsPoint,
    pub winner: Option<&'static str>,
    pub reason: Option<String>,
}

impl From<&MoveReport> for MoveSummary {
    fn from(report: &MoveReport) -> Self {
        MoveSummary {
            placed: JsStone {
                row: report.point.row(),
                col: report.point.col(),
                color: color_name(report.color),
            },
            captured: report.captured.iter().copied().map(JsPoint::from).collect(),
            last_move: report.point.into(),
            winner: report.result.map(|r| color_name(r.winner)),
            reason: report.result.map(|r| r.to_string()),
        }
    }
}

/// Game state as seen by JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub board: Vec<u8>,
    pub current_player: &'static str,
    pub captured_black: u32,
    pub captured_white: u32,
    pub ended: bool,
    pub winner: Option<&'static str>,
    pub move_count: usize,
}

impl From<&GameState> for StateSummary {
    fn from(state: &GameState) -> Self {
        StateSummary {
            board: encode_board(&state.board),
            current_player: color_name(state.current_player),
            captured_black: state.captured_black,
            captured_white: state.captured_white,
            ended: state.ended,
            winner: state.winner.map(color_name),
            move_count: state.move_count,
        }
    }
}

/// A game of Go that can be driven from JavaScript.
#[wasm_bindgen]
pub struct GoGame {
    session: GameSession,
}

#[wasm_bindgen]
impl GoGame {
    /// Creates a new game: empty board, Black to move.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        GoGame {
            session: GameSession::new(),
        }
    }

    /// Creates a game that ends once either side loses `limit` stones.
    /// Throws if `limit` is zero.
    #[wasm_bindgen(js_name = withCaptureLimit)]
    pub fn with_capture_limit(limit: u32) -> Result<GoGame, JsError> {
        Self::from_capture_limit(limit)
            .ok_or_else(|| JsError::new("capture limit must be greater than zero"))
    }

    /// Plays a stone for the side to move.
    ///
    /// Returns `{ placed, captured, lastMove, winner, reason }`, or throws an
    /// error whose message is the rejection reason.
    #[wasm_bindgen(js_name = submitMove)]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<JsValue, JsError> {
        let summary = self.play(row, col).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&summary).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Passes the turn. Throws once the game has ended.
    pub fn pass(&mut self) -> Result<(), JsError> {
        self.session.pass().map_err(to_js_error)
    }

    /// Starts over with an empty board.
    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Returns the rejection reason for a move at `(row, col)`, or null if
    /// the side to move may play there.
    #[wasm_bindgen(js_name = checkMove)]
    pub fn check_move(&self, row: usize, col: usize) -> Option<String> {
        match Point::new(row, col) {
            Some(point) => self
                .session
                .check_move(point)
                .err()
                .map(|e| e.reason().to_string()),
            None => Some("out of range".to_string()),
        }
    }

    /// Returns the 361 cells row-major: 0 empty, 1 black, 2 white.
    pub fn board(&self) -> Vec<u8> {
        encode_board(self.session.board())
    }

    /// Returns the side to move ("black" or "white").
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        color_name(self.session.current_player()).to_string()
    }

    /// Returns how many black stones have been captured.
    #[wasm_bindgen(js_name = capturedBlack)]
    pub fn captured_black(&self) -> u32 {
        self.session.captured(Color::Black)
    }

    /// Returns how many white stones have been captured.
    #[wasm_bindgen(js_name = capturedWhite)]
    pub fn captured_white(&self) -> u32 {
        self.session.captured(Color::White)
    }

    #[wasm_bindgen(js_name = isEnded)]
    pub fn is_ended(&self) -> bool {
        self.session.is_ended()
    }

    /// Returns "black", "white", or null while the game is running.
    pub fn winner(&self) -> Option<String> {
        self.session.winner().map(|c| color_name(c).to_string())
    }

    /// Returns the forbidden points flattened as `[row, col, row, col, ...]`.
    #[wasm_bindgen(js_name = forbiddenPoints)]
    pub fn forbidden_points(&self) -> Vec<u8> {
        flatten(self.session.forbidden_points().iter().copied())
    }

    /// Returns `[row, col]` of the last stone played, or null.
    #[wasm_bindgen(js_name = lastMove)]
    pub fn last_move(&self) -> Option<Vec<u8>> {
        self.session.last_move().map(|p| flatten(std::iter::once(p)))
    }

    /// Returns the whole game state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        let summary = StateSummary::from(&self.session.snapshot());
        serde_wasm_bindgen::to_value(&summary).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl GoGame {
    /// Creates a game with a capture limit, or `None` if `limit` is zero.
    pub fn from_capture_limit(limit: u32) -> Option<GoGame> {
        SessionConfig::with_capture_limit(limit).map(|config| GoGame {
            session: GameSession::with_config(config),
        })
    }

    /// Plays a move and returns the summary handed to JavaScript.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveSummary, SessionError> {
        self.session
            .submit_move(row, col)
            .map(|report| MoveSummary::from(&report))
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

impl Default for GoGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the nine star points flattened as `[row, col, ...]`.
#[wasm_bindgen(js_name = starPoints)]
pub fn star_points() -> Vec<u8> {
    flatten(Point::STAR_POINTS.iter().copied())
}

fn to_js_error(error: SessionError) -> JsError {
    JsError::new(error.reason())
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

fn encode_board(board: &go_core::Board) -> Vec<u8> {
    Point::all()
        .map(|p| match board.stone_at(p) {
            None => 0,
            Some(Color::Black) => 1,
            Some(Color::White) => 2,
        })
        .collect()
}

fn flatten(points: impl Iterator<Item = Point>) -> Vec<u8> {
    points
        .flat_map(|p| [p.row() as u8, p.col() as u8])
        .collect()
}
