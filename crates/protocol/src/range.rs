//! The visible time window of the chart.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProtocolError, Result};
use crate::record::{Record, Timestamp, parse_timestamp};

/// A non-empty time window `[start, end]`.
///
/// The invariant `end > start` is checked on construction and on
/// deserialization, so every `DateRange` in circulation is valid.
///
/// # Examples
///
/// ```
/// use gantt_protocol::{DateRange, parse_timestamp};
///
/// let start = parse_timestamp("2023-06-01T09:00").unwrap();
/// let end = parse_timestamp("2023-06-27T13:00").unwrap();
///
/// let range = DateRange::new(start, end).unwrap();
/// assert_eq!(range.start(), start);
///
/// // Reversed or empty ranges are rejected.
/// assert!(DateRange::new(end, start).is_err());
/// assert!(DateRange::new(start, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    start: Timestamp,
    end: Timestamp,
}

/// Unvalidated wire form of [`DateRange`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDateRange {
    #[serde(deserialize_with = "timestamp_string")]
    start: Timestamp,
    #[serde(deserialize_with = "timestamp_string")]
    end: Timestamp,
}

fn timestamp_string<'de, D>(deserializer: D) -> std::result::Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ProtocolError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl DateRange {
    /// Creates a range, failing if `end` is not strictly after `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DegenerateRange`] if `end <= start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if end <= start {
            return Err(ProtocolError::DegenerateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the smallest range covering every parseable timestamp of the
    /// given records.
    ///
    /// Returns `None` if the records do not provide two distinct instants.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_protocol::{DateRange, Record, parse_timestamp};
    ///
    /// let ts = |s| parse_timestamp(s).unwrap();
    /// let records = vec![
    ///     Record::new(1, "a", ts("2023-06-05"), ts("2023-06-09")),
    ///     Record::new(2, "b", ts("2023-06-01"), ts("2023-06-03")),
    /// ];
    ///
    /// let range = DateRange::spanning(&records).unwrap();
    /// assert_eq!(range.start(), ts("2023-06-01"));
    /// assert_eq!(range.end(), ts("2023-06-09"));
    ///
    /// assert!(DateRange::spanning(&[]).is_none());
    /// ```
    #[must_use]
    pub fn spanning(records: &[Record]) -> Option<Self> {
        let instants = records
            .iter()
            .flat_map(|record| [record.start, record.finish])
            .flatten();

        let (min, max) = instants.fold(None, |acc: Option<(Timestamp, Timestamp)>, ts| {
            Some(match acc {
                Some((min, max)) => (min.min(ts), max.max(ts)),
                None => (ts, ts),
            })
        })?;

        Self::new(min, max).ok()
    }

    /// Returns the start of the range.
    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the end of the range.
    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns the length of the range in milliseconds (always positive).
    #[must_use]
    pub fn duration_millis(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}
