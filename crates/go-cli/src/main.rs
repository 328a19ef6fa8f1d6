//! go-cli - play Go in the terminal.

use clap::Parser;
use go_cli::{CliConfig, Repl};
use std::io;
use std::path::PathBuf;
use tracing::Level;

/// Play a two-player game of Go in the terminal.
#[derive(Parser)]
#[command(name = "go-cli")]
#[command(about = "Play a two-player game of Go in the terminal")]
struct Args {
    /// Path to a TOML config file (defaults to go.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of lost stones that ends the game
    #[arg(long)]
    capture_limit: Option<u32>,

    /// Do not mark forbidden points on the board
    #[arg(long)]
    no_forbidden: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(limit) = args.capture_limit {
        config.capture_limit = limit;
    }
    if args.no_forbidden {
        config.show_forbidden = false;
    }
    config.validate()?;

    let level = match args.verbose {
        0 => config.log_level()?,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting go-cli");
    tracing::info!("Capture limit: {}", config.capture_limit);
    tracing::debug!("Configuration: {:?}", config);

    let stdin = io::stdin();
    let mut repl = Repl::new(
        config,
        stdin.lock(),
        Box::new(io::stdout()),
        Box::new(io::stdout()),
    );
    repl.run()
}
