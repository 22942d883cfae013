//! Shared protocol types for the gantt viewer.
//!
//! This crate defines the core types used across all gantt components:
//! the records being charted, the visible date range, the time-to-position
//! scale, and the messages exchanged between input handling and the UI.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`record`]: The `Record` struct and lenient timestamp parsing
//! - [`range`]: The validated `DateRange`
//! - [`scale`]: `TimeScale`, mapping timestamps onto the timeline track
//! - [`message`]: TUI event messages
//! - [`dummy`]: A sample schedule
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Placing a record on a 3000-unit track:
//!
//! ```
//! use gantt_protocol::{DateRange, Record, TimeScale, parse_timestamp};
//!
//! let ts = |s| parse_timestamp(s).unwrap();
//!
//! let range = DateRange::new(ts("2023-06-01T09:00"), ts("2023-06-27T13:00")).unwrap();
//! let scale = TimeScale::new(range, 3000.0).unwrap();
//!
//! let record = Record::new(1, "Design", ts("2023-06-08T09:00"), ts("2023-06-15T09:00"));
//! let bar = scale.bar_for(&record).unwrap();
//! assert!(bar.left > 800.0 && bar.width > 800.0);
//! ```

pub mod dummy;
pub mod error;
pub mod message;
pub mod range;
pub mod record;
pub mod scale;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use range::DateRange;
pub use record::{DISPLAY_FORMAT, Record, Timestamp, parse_records, parse_timestamp};
pub use scale::{BarGeometry, HeaderResolution, Tick, TimeScale};
