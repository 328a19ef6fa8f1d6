//! Parsing of the commands typed at the prompt.

use go_core::Point;
use thiserror::Error;

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command or point: '{0}'")]
    Unknown(String),

    #[error("({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },
}

/// A command typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a stone for the side to move.
    Play(Point),
    /// Pass the turn.
    Pass,
    /// Start a new game.
    Restart,
    /// List the points the side to move may not play.
    Forbidden,
    /// Redraw the board.
    Board,
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Short help text listing every command.
    pub const HELP: &'static str = "\
commands:
  D4, q16        play at a vertex (columns A-T without I, rows 1-19)
  3 15, 3,15     play at row/column, counted from the top-left corner
  pass    (p)    pass the turn
  restart (r)    start a new game
  forbidden (f)  list points the side to move may not play
  board          redraw the board
  help    (h)    show this text
  quit    (q)    leave";

    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "pass" | "p" => Ok(Command::Pass),
            "restart" | "r" => Ok(Command::Restart),
            "forbidden" | "f" => Ok(Command::Forbidden),
            "board" => Ok(Command::Board),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Self::parse_point(input),
        }
    }

    fn parse_point(input: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if let [row, col] = parts.as_slice() {
            if let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) {
                return Point::new(row, col)
                    .map(Command::Play)
                    .ok_or(CommandError::OffBoard { row, col });
            }
        }

        Point::from_vertex(input)
            .map(Command::Play)
            .ok_or_else(|| CommandError::Unknown(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(row: usize, col: usize) -> Point {
        Point::new(row, col).unwrap()
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(Command::parse("pass"), Ok(Command::Pass));
        assert_eq!(Command::parse("  P "), Ok(Command::Pass));
        assert_eq!(Command::parse("restart"), Ok(Command::Restart));
        assert_eq!(Command::parse("f"), Ok(Command::Forbidden));
        assert_eq!(Command::parse("board"), Ok(Command::Board));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parse_vertex() {
        assert_eq!(Command::parse("D4"), Ok(Command::Play(pt(15, 3))));
        assert_eq!(Command::parse("q16"), Ok(Command::Play(pt(3, 15))));
    }

    #[test]
    fn parse_row_col_pair() {
        assert_eq!(Command::parse("3 15"), Ok(Command::Play(pt(3, 15))));
        assert_eq!(Command::parse("3,15"), Ok(Command::Play(pt(3, 15))));
        assert_eq!(Command::parse("0, 0"), Ok(Command::Play(pt(0, 0))));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("19 0"),
            Err(CommandError::OffBoard { row: 19, col: 0 })
        );
        assert_eq!(
            Command::parse("I5"),
            Err(CommandError::Unknown("I5".to_string()))
        );
        assert_eq!(
            Command::parse("resign"),
            Err(CommandError::Unknown("resign".to_string()))
        );
    }
}
