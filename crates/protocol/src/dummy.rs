//! Sample data for demonstration and testing.
//!
//! This module provides a small project schedule used when the viewer is
//! started without a data file, and by tests that need realistic records.
//!
//! # Examples
//!
//! ```
//! use gantt_protocol::dummy::{sample_range, sample_records};
//!
//! let records = sample_records();
//! assert_eq!(records.len(), 8);
//! assert!(records.iter().all(|r| r.span().is_some()));
//!
//! let range = sample_range();
//! assert_eq!(records[0].start, Some(range.start()));
//! assert_eq!(records[7].finish, Some(range.end()));
//! ```

use chrono::NaiveDate;

use crate::range::DateRange;
use crate::record::{Record, Timestamp};

/// A builder for sample records.
///
/// Reduces boilerplate when the sample schedule is written out by hand.
struct RecordBuilder {
    id: i64,
    task_name: &'static str,
    start: Timestamp,
    finish: Timestamp,
    color: Option<&'static str>,
}

impl RecordBuilder {
    /// Starts a record spanning `start..finish`, each given as
    /// `(month, day, hour)` in 2023.
    fn new(
        id: i64,
        task_name: &'static str,
        start: (u32, u32, u32),
        finish: (u32, u32, u32),
    ) -> Self {
        Self {
            id,
            task_name,
            start: at(start),
            finish: at(finish),
            color: None,
        }
    }

    /// Sets the bar color.
    fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds the record, mirroring the name into the `task_name` field.
    fn build(self) -> Record {
        let record = Record::new(self.id, self.task_name, self.start, self.finish)
            .with_field("task_name", self.task_name);
        match self.color {
            Some(color) => record.with_color(color),
            None => record,
        }
    }
}

fn at((month, day, hour): (u32, u32, u32)) -> Timestamp {
    NaiveDate::from_ymd_opt(2023, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

/// Returns the date range the sample schedule is laid out on:
/// `2023-06-01T09:00` to `2023-06-27T13:00`.
#[must_use]
pub fn sample_range() -> DateRange {
    DateRange::new(at((6, 1, 9)), at((6, 27, 13)))
        .expect("sample range end is after its start")
}

/// Returns a sample project schedule of eight tasks in June 2023.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        RecordBuilder::new(1, "Kickoff", (6, 1, 9), (6, 2, 17)).build(),
        RecordBuilder::new(2, "Requirements", (6, 2, 9), (6, 7, 17)).build(),
        RecordBuilder::new(3, "Design", (6, 8, 9), (6, 15, 9))
            .color("rgb(241, 155, 85)")
            .build(),
        RecordBuilder::new(4, "Prototype", (6, 12, 9), (6, 19, 17)).build(),
        RecordBuilder::new(5, "Implementation", (6, 15, 9), (6, 23, 17))
            .color("green")
            .build(),
        RecordBuilder::new(6, "Testing", (6, 20, 9), (6, 26, 12)).build(),
        RecordBuilder::new(7, "Documentation", (6, 21, 9), (6, 26, 17))
            .color("#b08cf0")
            .build(),
        RecordBuilder::new(8, "Release", (6, 27, 9), (6, 27, 13))
            .color("red")
            .build(),
    ]
}
