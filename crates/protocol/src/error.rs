//! Error types for the gantt-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, including record parsing failures and range validation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A date range whose end does not come after its start.
    #[error("degenerate date range: end {end} is not after start {start}")]
    DegenerateRange {
        /// The requested start of the range.
        start: NaiveDateTime,
        /// The requested end of the range.
        end: NaiveDateTime,
    },

    /// A timestamp string could not be parsed.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Failed to deserialize records from JSON.
    #[error("failed to deserialize records from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// The track width is not a finite, positive number.
    #[error("invalid track width: {0}")]
    InvalidTrackWidth(f64),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
