//! gantt - A terminal Gantt chart viewer.
//!
//! This is the main binary that launches the TUI application.
//!
//! # Usage
//!
//! ```bash
//! # Show the built-in sample records
//! gantt
//!
//! # Show records from a JSON file
//! gantt tasks.json
//!
//! # Skip the login prompt
//! GANTT_SESSION_TOKEN=... gantt tasks.json
//!
//! # Verbose logging (written to the cache directory)
//! GANTT_LOG=debug gantt
//! ```

mod loader;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gantt_config::{Config, session::resolve_session};
use gantt_tui::{App, terminal};

/// A terminal Gantt chart viewer with a resizable task list and timeline.
#[derive(Parser, Debug)]
#[command(name = "gantt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of records
    #[arg(value_name = "FILE")]
    data: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Session token, skipping the login prompt
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is best effort; the viewer runs without a log file.
    if let Err(err) = logging::init_logging() {
        eprintln!("gantt: logging disabled: {err:#}");
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let session = resolve_session(args.token.as_deref(), &config);
    let data = args.data.or_else(|| config.data_path.clone());
    tracing::info!(
        data = ?data,
        authenticated = session.is_authenticated(),
        "starting gantt"
    );

    let records = loader::spawn_loader(data);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(config, session);
    let result = app.run(&mut terminal, records).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_accept_file_and_flags() {
        let args = Args::parse_from(["gantt", "tasks.json", "--config", "g.json5", "--token", "t"]);
        assert_eq!(args.data, Some(PathBuf::from("tasks.json")));
        assert_eq!(args.config, Some(PathBuf::from("g.json5")));
        assert_eq!(args.token.as_deref(), Some("t"));
    }

    #[test]
    fn args_default_to_nothing() {
        let args = Args::parse_from(["gantt"]);
        assert!(args.data.is_none());
        assert!(args.config.is_none());
        assert!(args.token.is_none());
    }

    #[test]
    fn args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
