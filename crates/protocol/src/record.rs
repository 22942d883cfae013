//! Records displayed by the Gantt viewer.
//!
//! A [`Record`] is one row of the chart: a task with a time span and any
//! number of display fields. Timestamps are parsed leniently so that a single
//! malformed entry never prevents the rest of a document from loading.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ProtocolError, Result};

/// A point in time on the chart.
///
/// Timestamps are wall-clock date-times without a zone, matching how
/// schedules are usually written (`2023-06-01T09:00`).
pub type Timestamp = NaiveDateTime;

/// Format used when a timestamp is shown in a table cell.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date-time formats accepted by [`parse_timestamp`], tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp string.
///
/// Accepts ISO-8601 date-times with or without seconds (`T` or space
/// separated), bare dates (midnight), and RFC 3339 strings with an offset,
/// which are converted to their UTC wall time.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidTimestamp`] if no format matches.
///
/// # Examples
///
/// ```
/// use gantt_protocol::parse_timestamp;
///
/// let ts = parse_timestamp("2023-06-08T09:00:00").unwrap();
/// assert_eq!(ts.to_string(), "2023-06-08 09:00:00");
///
/// assert!(parse_timestamp("next tuesday").is_err());
/// ```
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_utc());
    }

    Err(ProtocolError::InvalidTimestamp(input.to_string()))
}

/// Deserializes an optional timestamp, mapping anything unparseable to `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => parse_timestamp(&raw).ok(),
        _ => None,
    })
}

/// One task row of the chart.
///
/// The well-known fields are typed; any other key present in the source
/// document is kept in [`fields`](Self::fields) so it can be shown as a
/// column.
///
/// # Examples
///
/// ```
/// use gantt_protocol::{Record, parse_timestamp};
///
/// let record = Record::new(
///     1,
///     "Design review",
///     parse_timestamp("2023-06-08T09:00").unwrap(),
///     parse_timestamp("2023-06-15T09:00").unwrap(),
/// )
/// .with_field("task_name", "Design review");
///
/// assert_eq!(record.field("id"), "1");
/// assert_eq!(record.field("task_name"), "Design review");
/// assert!(record.span().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier as it appears in the source document.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    /// Human-readable name of the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the task starts; `None` if missing or unparseable.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<Timestamp>,
    /// When the task finishes; `None` if missing or unparseable.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub finish: Option<Timestamp>,
    /// Bar fill color (e.g. `"red"`, `"#ff8800"`, `"rgb(85, 155, 241)"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Every other field of the source object.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with the given identifier, name, and time span.
    #[must_use]
    pub fn new(
        id: impl Into<Value>,
        name: impl Into<String>,
        start: Timestamp,
        finish: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            start: Some(start),
            finish: Some(finish),
            color: None,
            fields: BTreeMap::new(),
        }
    }

    /// Sets the bar color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Adds an extra display field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the `(start, finish)` pair if both timestamps are present.
    ///
    /// The pair is returned as-is even when `finish < start`.
    #[must_use]
    pub fn span(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.start?, self.finish?))
    }

    /// Returns the display text of a field, looked up by name.
    ///
    /// Typed fields are formatted for display; unknown or null fields yield
    /// an empty string.
    #[must_use]
    pub fn field(&self, name: &str) -> String {
        match name {
            "id" => value_text(&self.id),
            "name" => self.name.clone().unwrap_or_default(),
            "start" => timestamp_text(self.start),
            "finish" => timestamp_text(self.finish),
            "color" => self.color.clone().unwrap_or_default(),
            other => self.fields.get(other).map(value_text).unwrap_or_default(),
        }
    }
}

fn timestamp_text(ts: Option<Timestamp>) -> String {
    ts.map(|ts| ts.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parses a JSON array of records.
///
/// # Errors
///
/// Returns [`ProtocolError::DeserializationFailed`] if the document is not a
/// JSON array of objects. Individual malformed timestamps are not errors.
///
/// # Examples
///
/// ```
/// use gantt_protocol::parse_records;
///
/// let records = parse_records(r#"[
///     {"id": 1, "task_name": "Kickoff", "start": "2023-06-01T09:00:00", "finish": "2023-06-02T09:00:00"},
///     {"id": 2, "task_name": "Broken", "start": "soon"}
/// ]"#).unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert!(records[0].span().is_some());
/// assert!(records[1].span().is_none());
/// ```
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
}
