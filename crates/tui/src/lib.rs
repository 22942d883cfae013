//! Terminal UI for the gantt viewer.
//!
//! This crate provides a Ratatui-based terminal interface that shows records
//! as a task list on the left and a timeline of bars on the right, with a
//! draggable divider between the two.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`shell`]: The two chart panels and the state they share
//! - [`resize`]: The divider drag state machine
//! - [`rows`]: Row geometry shared by both panels
//! - [`state`]: Overlay and login state
//! - [`terminal`]: Terminal setup, teardown, mouse capture, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use gantt_config::{Config, Session};
//! use gantt_protocol::dummy::sample_records;
//! use gantt_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let (tx, rx) = tokio::sync::oneshot::channel();
//!     let _ = tx.send(Ok(sample_records()));
//!
//!     let mut app = App::new(Config::default(), Session::with_token("demo"));
//!     let result = app.run(&mut terminal, rx).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod resize;
pub mod rows;
pub mod shell;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, RecordLoad, RecordReceiver};
pub use resize::{PanelResizer, ResizeState};
pub use shell::{PanelAreas, ViewerShell};
pub use state::{AppState, LoginState};
