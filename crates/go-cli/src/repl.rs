//! The read-eval-print loop that drives a session from typed commands.

use std::io::{BufRead, Write};

use go_engine::GameSession;
use tracing::debug;

use crate::command::Command;
use crate::config::CliConfig;
use crate::render::{render_board, RenderOptions, TerminalRenderer};

/// Reads commands from `input` and plays them on a fresh session.
///
/// Board updates are printed by a [`TerminalRenderer`] registered on the
/// session; prompts and command replies go to `output`.
pub struct Repl<R> {
    session: GameSession,
    config: CliConfig,
    input: R,
    output: Box<dyn Write>,
}

impl<R: BufRead> Repl<R> {
    pub fn new(
        config: CliConfig,
        input: R,
        output: Box<dyn Write>,
        render_output: Box<dyn Write>,
    ) -> Self {
        let mut renderer = TerminalRenderer::new(
            render_output,
            RenderOptions {
                show_forbidden: config.show_forbidden,
                show_coordinates: config.show_coordinates,
            },
        );
        renderer.draw();

        let mut session = GameSession::with_config(config.session_config());
        session.add_observer(Box::new(renderer));

        Repl {
            session,
            config,
            input,
            output,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "type 'help' for commands")?;

        while let Some(line) = self.prompt(&format!("{}> ", self.session.current_player()))? {
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            debug!(?command, "command");

            match command {
                Command::Play(point) => {
                    // Rejections are reported by the renderer.
                    let _ = self.session.play(point);
                }
                Command::Pass => {
                    let _ = self.session.pass();
                }
                Command::Restart => self.restart()?,
                Command::Forbidden => self.list_forbidden()?,
                Command::Board => {
                    let forbidden = if self.config.show_forbidden && !self.session.is_ended() {
                        self.session.compute_forbidden_points()
                    } else {
                        Vec::new()
                    };
                    let text = render_board(
                        self.session.board(),
                        self.session.last_move(),
                        &forbidden,
                        self.config.show_coordinates,
                    );
                    write!(self.output, "{}", text)?;
                }
                Command::Help => writeln!(self.output, "{}", Command::HELP)?,
                Command::Quit => break,
            }
        }

        Ok(())
    }

    fn restart(&mut self) -> anyhow::Result<()> {
        if self.config.confirm_restart && self.session.move_count() > 0 {
            let answer = self.prompt("restart the game? [y/N] ")?;
            let confirmed = answer
                .map(|a| matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
                .unwrap_or(false);
            if !confirmed {
                writeln!(self.output, "restart cancelled")?;
                return Ok(());
            }
        }
        self.session.restart();
        Ok(())
    }

    fn list_forbidden(&mut self) -> anyhow::Result<()> {
        let points = self.session.compute_forbidden_points();
        let color = self.session.current_player();
        if points.is_empty() {
            writeln!(self.output, "{} may play on any empty point", color)?;
        } else {
            let list: Vec<String> = points.iter().map(|p| p.to_vertex()).collect();
            writeln!(self.output, "forbidden for {}: {}", color, list.join(" "))?;
        }
        Ok(())
    }

    /// Prints `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use go_core::{Color, Point};
    use std::cell::RefCell;
    use std::io::{self, Cursor};
    use std::rc::Rc;

    /// An in-memory writer whose contents outlive the boxes it is moved into.
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_script(config: CliConfig, script: &str) -> (Repl<Cursor<Vec<u8>>>, String) {
        let buffer = SharedBuffer::default();
        let mut repl = Repl::new(
            config,
            Cursor::new(script.as_bytes().to_vec()),
            Box::new(buffer.clone()),
            Box::new(buffer.clone()),
        );
        repl.run().unwrap();
        (repl, buffer.contents())
    }

    fn pt(row: usize, col: usize) -> Point {
        Point::new(row, col).unwrap()
    }

    #[test]
    fn plays_vertex_and_numeric_moves() {
        let (repl, out) = run_script(CliConfig::default(), "D16\n3 15\nquit\n");

        assert_eq!(repl.session().board().stone_at(pt(3, 3)), Some(Color::Black));
        assert_eq!(repl.session().board().stone_at(pt(3, 15)), Some(Color::White));
        assert!(out.contains("Black plays D16"));
        assert!(out.contains("White plays Q16"));
        assert!(out.contains("Black to move"));
    }

    #[test]
    fn reports_illegal_moves_and_parse_errors() {
        let (repl, out) = run_script(CliConfig::default(), "D4\nD4\nI9\n");

        assert_eq!(repl.session().move_count(), 1);
        assert!(out.contains("illegal move: occupied"));
        assert!(out.contains("unknown command or point: 'I9'"));
    }

    #[test]
    fn capture_limit_ends_the_game() {
        let config = CliConfig {
            capture_limit: 1,
            ..CliConfig::default()
        };
        let (repl, out) = run_script(config, "0 0\n0 1\n9 9\n1 0\n5 5\n");

        assert_eq!(repl.session().winner(), Some(Color::White));
        assert!(out.contains("White plays A18, capturing 1"));
        assert!(out.contains("game over: White wins by capturing 1 stones"));
        assert!(out.contains("game already ended"));
    }

    #[test]
    fn restart_asks_for_confirmation() {
        let (repl, out) = run_script(CliConfig::default(), "D4\nrestart\nn\n");
        assert_eq!(repl.session().move_count(), 1);
        assert!(out.contains("restart cancelled"));

        let (repl, out) = run_script(CliConfig::default(), "D4\nrestart\ny\n");
        assert_eq!(repl.session().move_count(), 0);
        assert!(out.contains("new game"));
    }

    #[test]
    fn restart_without_confirmation() {
        let config = CliConfig {
            confirm_restart: false,
            ..CliConfig::default()
        };
        let (repl, _) = run_script(config, "D4\nQ16\nrestart\n");
        assert!(repl.session().board().is_empty());
        assert_eq!(repl.session().current_player(), Color::Black);
    }

    #[test]
    fn lists_forbidden_points() {
        let (_, out) = run_script(CliConfig::default(), "forbidden\n0 1\n9 9\n1 0\nf\n");
        assert!(out.contains("Black may play on any empty point"));
        assert!(out.contains("forbidden for White: A19"));
    }

    /// Runs `script` and returns only what the `board` command printed.
    fn board_command_output(config: CliConfig, script: &str) -> String {
        let buffer = SharedBuffer::default();
        let mut repl = Repl::new(
            config,
            Cursor::new(script.as_bytes().to_vec()),
            Box::new(buffer.clone()),
            Box::new(io::sink()),
        );
        repl.run().unwrap();
        buffer.contents()
    }

    #[test]
    fn board_command_marks_forbidden_points_when_enabled() {
        let out = board_command_output(CliConfig::default(), "0 1\n9 9\n1 0\nboard\n");
        assert!(out.contains("19 * X"));
    }

    #[test]
    fn board_command_respects_disabled_forbidden_markers() {
        let config = CliConfig {
            show_forbidden: false,
            ..CliConfig::default()
        };
        let out = board_command_output(config, "0 1\n9 9\n1 0\nboard\n");
        assert!(out.contains("19 . X"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn board_command_hides_forbidden_points_after_game_end() {
        let config = CliConfig {
            capture_limit: 1,
            ..CliConfig::default()
        };
        // White captures at A19 and Black's refill there would be suicide.
        let out = board_command_output(config, "0 0\n0 1\n9 9\n1 0\nboard\n");
        assert!(out.contains("19 . O"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn pass_switches_the_prompt() {
        let (repl, out) = run_script(CliConfig::default(), "pass\n");
        assert_eq!(repl.session().current_player(), Color::White);
        assert!(out.contains("Black passes"));
        assert!(out.contains("White> "));
    }
}
