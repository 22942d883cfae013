//! Configuration management for the gantt viewer.
//!
//! This crate handles loading, validating, and persisting configuration,
//! and resolves the viewer session.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`session`]: Session token resolution and the login gate
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./gantt.json5` or `./gantt.json`)
//! 2. User config (`<config dir>/gantt/config.json5` or `config.json`)
//! 3. Built-in defaults
//!
//! # Example
//!
//! ```json5
//! {
//!   viewer: {
//!     row_height: 1,
//!     track_width: 240,
//!     // omit to fit the range to the records
//!     range: { start: "2023-06-01T09:00", end: "2023-06-27T13:00" },
//!     columns: ["id", "task_name", "start", "finish"],
//!     header_resolution: "week",
//!     default_color: "rgb(85, 155, 241)",
//!   },
//!   data_path: "schedule.json",
//! }
//! ```
//!
//! ```no_run
//! use gantt_config::Config;
//!
//! # fn example() -> gantt_config::Result<()> {
//! let config = Config::load()?;
//! println!("Track is {} columns wide", config.viewer.track_width);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod session;

pub use config::{Config, ViewerConfig};
pub use error::{ConfigError, Result};
pub use session::Session;
