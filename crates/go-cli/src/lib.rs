//! Terminal front end for the Go engine.
//!
//! Two players share one terminal and type moves at a prompt. The pieces:
//! - [`command`] - parsing of typed commands
//! - [`config`] - `go.toml` loading
//! - [`render`] - text board and a [`SessionObserver`](go_engine::SessionObserver)
//!   that prints game events
//! - [`repl`] - the prompt loop

pub mod command;
pub mod config;
pub mod render;
pub mod repl;

pub use command::{Command, CommandError};
pub use config::{CliConfig, ConfigError};
pub use render::{render_board, RenderOptions, TerminalRenderer};
pub use repl::Repl;
