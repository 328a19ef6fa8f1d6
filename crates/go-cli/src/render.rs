//! Text rendering of the board and session events.

use std::fmt::Write as _;
use std::io::Write;

use go_core::{Board, Color, Point, BOARD_SIZE};
use go_engine::{GameResult, MoveReport, SessionError, SessionObserver};
use tracing::warn;

/// Glyph for an empty point the side to move may not play.
const FORBIDDEN_GLYPH: char = '*';

/// Display switches for [`TerminalRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_forbidden: bool,
    pub show_coordinates: bool,
}

/// Draws a board as text.
///
/// Stones are `X` (black) and `O` (white), star points `+`, other empty
/// points `.`, forbidden points `*`. The last stone played is wrapped in
/// parentheses.
pub fn render_board(
    board: &Board,
    last_move: Option<Point>,
    forbidden: &[Point],
    show_coordinates: bool,
) -> String {
    let mut out = String::new();

    if show_coordinates {
        out.push_str("  ");
        for col in 0..BOARD_SIZE {
            out.push(' ');
            out.push(Point::column_letter(col).unwrap_or('?'));
        }
        out.push('\n');
    }

    for point in Point::all() {
        if point.col() == 0 && show_coordinates {
            let _ = write!(out, "{:>2}", BOARD_SIZE - point.row());
        }

        let is_last = last_move == Some(point);
        let after_last =
            point.col() > 0 && last_move.is_some_and(|m| m.index() + 1 == point.index());
        out.push(if is_last {
            '('
        } else if after_last {
            ')'
        } else {
            ' '
        });

        out.push(match board.stone_at(point) {
            Some(color) => color.glyph(),
            None if forbidden.contains(&point) => FORBIDDEN_GLYPH,
            None if point.is_star_point() => '+',
            None => '.',
        });

        if point.col() == BOARD_SIZE - 1 {
            if is_last {
                out.push(')');
            }
            out.push('\n');
        }
    }

    out
}

/// Returns the one-line game status shown under the board.
pub fn status_line(to_move: Color, captured: [u32; 2]) -> String {
    format!(
        "{} to move    captured: Black {}, White {}",
        to_move,
        captured[Color::Black.index()],
        captured[Color::White.index()]
    )
}

/// Prints session changes to a terminal.
///
/// Keeps its own copy of the board, updated from the events it receives,
/// the way a graphical board mirrors the game.
pub struct TerminalRenderer {
    out: Box<dyn Write>,
    options: RenderOptions,
    board: Board,
    last_move: Option<Point>,
    forbidden: Vec<Point>,
    captured: [u32; 2],
    to_move: Color,
}

impl TerminalRenderer {
    pub fn new(out: Box<dyn Write>, options: RenderOptions) -> Self {
        TerminalRenderer {
            out,
            options,
            board: Board::new(),
            last_move: None,
            forbidden: Vec::new(),
            captured: [0; 2],
            to_move: Color::Black,
        }
    }

    /// Draws the board and status line.
    pub fn draw(&mut self) {
        let forbidden: &[Point] = if self.options.show_forbidden {
            &self.forbidden
        } else {
            &[]
        };
        let text = format!(
            "{}{}",
            render_board(
                &self.board,
                self.last_move,
                forbidden,
                self.options.show_coordinates
            ),
            status_line(self.to_move, self.captured)
        );
        self.emit(&text);
    }

    fn emit(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("failed to write to terminal: {}", e);
        }
    }
}

impl SessionObserver for TerminalRenderer {
    fn move_played(&mut self, report: &MoveReport) {
        self.board = self
            .board
            .with_stone_at(report.point, report.color)
            .without_stones(&report.captured);
        self.last_move = Some(report.point);
        self.captured[report.color.opposite().index()] += report.captured.len() as u32;
        self.to_move = report.color.opposite();

        let mut line = format!("{} plays {}", report.color, report.point);
        if !report.captured.is_empty() {
            let _ = write!(line, ", capturing {}", report.captured.len());
        }
        self.emit(&line);
    }

    fn move_rejected(&mut self, error: &SessionError) {
        let text = match error {
            SessionError::GameAlreadyEnded => {
                "game already ended; type 'restart' to play again".to_string()
            }
            other => format!("illegal move: {}", other.reason()),
        };
        self.emit(&text);
    }

    fn passed(&mut self, color: Color) {
        self.to_move = color.opposite();
        // The markers belonged to the player who just passed.
        self.forbidden.clear();
        self.emit(&format!("{} passes", color));
        self.draw();
    }

    fn game_ended(&mut self, result: &GameResult) {
        self.forbidden.clear();
        self.draw();
        self.emit(&format!("game over: {}", result));
    }

    fn forbidden_points_changed(&mut self, points: &[Point]) {
        self.forbidden = points.to_vec();
        self.draw();
    }

    fn board_cleared(&mut self) {
        self.board = Board::new();
        self.last_move = None;
        self.forbidden.clear();
        self.captured = [0; 2];
        self.to_move = Color::Black;
        self.emit("new game");
        self.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(row: usize, col: usize) -> Point {
        Point::new(row, col).unwrap()
    }

    #[test]
    fn empty_board_without_coordinates() {
        let text = render_board(&Board::new(), None, &[], false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_SIZE);
        assert_eq!(lines[0], " .".repeat(BOARD_SIZE));
        // Star point at (3,3): glyphs sit at odd offsets.
        assert_eq!(lines[3].chars().nth(1 + 2 * 3), Some('+'));
        assert_eq!(lines[3].chars().nth(1 + 2 * 4), Some('.'));
    }

    #[test]
    fn coordinates_frame_the_board() {
        let text = render_board(&Board::new(), None, &[], true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert!(lines[0].starts_with("   A B C D E F G H J"));
        assert!(lines[0].ends_with("S T"));
        assert!(lines[1].starts_with("19 ."));
        assert!(lines[19].starts_with(" 1 ."));
    }

    #[test]
    fn stones_last_move_and_forbidden_points() {
        let board = Board::new()
            .with_stone_at(pt(0, 1), Color::Black)
            .with_stone_at(pt(1, 0), Color::White);
        let text = render_board(&board, Some(pt(1, 0)), &[pt(0, 0)], false);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with(" * X ."));
        assert!(lines[1].starts_with("(O). ."));
    }

    #[test]
    fn last_move_on_right_edge_is_closed() {
        let board = Board::new().with_stone_at(pt(2, 18), Color::Black);
        let text = render_board(&board, Some(pt(2, 18)), &[], false);
        assert!(text.lines().nth(2).unwrap().ends_with("(X)"));
        // The marker does not leak into the next row.
        assert!(text.lines().nth(3).unwrap().starts_with(" ."));
    }

    #[test]
    fn status() {
        assert_eq!(
            status_line(Color::White, [3, 1]),
            "White to move    captured: Black 3, White 1"
        );
    }
}
