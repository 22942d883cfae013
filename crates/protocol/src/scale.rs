//! Mapping between time and horizontal position on the timeline.
//!
//! The timeline is a track of fixed width representing a [`DateRange`]. A
//! timestamp maps linearly onto that track:
//!
//! ```text
//! offset = (timestamp - start) / (end - start) * track_width
//! ```
//!
//! Timestamps outside the range map to negative offsets or offsets past the
//! end of the track; clipping is the caller's job.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::range::DateRange;
use crate::record::{Record, Timestamp};

/// Maps `ts` onto a track of `track_width` units spanning `range`.
///
/// This is the raw interpolation; prefer [`TimeScale`] which validates the
/// track width once.
///
/// # Examples
///
/// ```
/// use gantt_protocol::{DateRange, parse_timestamp, scale::offset_of};
///
/// let range = DateRange::new(
///     parse_timestamp("2023-06-01").unwrap(),
///     parse_timestamp("2023-06-11").unwrap(),
/// ).unwrap();
///
/// let mid = parse_timestamp("2023-06-06").unwrap();
/// assert_eq!(offset_of(&range, 100.0, mid), 50.0);
/// ```
#[must_use]
pub fn offset_of(range: &DateRange, track_width: f64, ts: Timestamp) -> f64 {
    let elapsed = (ts - range.start()).num_milliseconds() as f64;
    elapsed / range.duration_millis() as f64 * track_width
}

/// Horizontal placement of a bar on the track.
///
/// `width` is negative when the record finishes before it starts; this is
/// passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Offset of the bar's leading edge.
    pub left: f64,
    /// Signed width of the bar.
    pub width: f64,
}

impl BarGeometry {
    /// Offset of the bar's trailing edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Granularity of the timeline header ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderResolution {
    /// One tick per calendar month.
    #[default]
    Month,
    /// One tick per week, on Mondays.
    Week,
    /// One tick per day.
    Day,
}

/// A labelled position on the timeline header.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// The instant the tick marks.
    pub at: Timestamp,
    /// Its offset on the track.
    pub offset: f64,
    /// Short label for display.
    pub label: String,
}

/// A validated date range together with the width of the track it spans.
///
/// # Examples
///
/// ```
/// use gantt_protocol::{DateRange, TimeScale, parse_timestamp};
///
/// let ts = |s| parse_timestamp(s).unwrap();
/// let range = DateRange::new(ts("2023-06-01T09:00"), ts("2023-06-27T13:00")).unwrap();
/// let scale = TimeScale::new(range, 3000.0).unwrap();
///
/// assert_eq!(scale.offset(range.start()), 0.0);
/// assert_eq!(scale.offset(range.end()), 3000.0);
///
/// let bar = scale.bar(ts("2023-06-08T09:00"), ts("2023-06-15T09:00"));
/// assert!((bar.left - 802.55).abs() < 0.01);
/// assert!((bar.width - 802.55).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    range: DateRange,
    track_width: f64,
}

impl TimeScale {
    /// Creates a scale over `range` with a track `track_width` units wide.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidTrackWidth`] if the width is not a
    /// finite, positive number.
    pub fn new(range: DateRange, track_width: f64) -> Result<Self> {
        if !track_width.is_finite() || track_width <= 0.0 {
            return Err(ProtocolError::InvalidTrackWidth(track_width));
        }
        Ok(Self { range, track_width })
    }

    /// Returns the date range of the scale.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the track width.
    #[must_use]
    pub const fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Maps a timestamp onto the track.
    #[must_use]
    pub fn offset(&self, ts: Timestamp) -> f64 {
        offset_of(&self.range, self.track_width, ts)
    }

    /// Returns the bar placement for a `[start, finish]` span.
    #[must_use]
    pub fn bar(&self, start: Timestamp, finish: Timestamp) -> BarGeometry {
        let left = self.offset(start);
        BarGeometry {
            left,
            width: self.offset(finish) - left,
        }
    }

    /// Returns the bar placement for a record, or `None` if either of its
    /// timestamps is missing.
    #[must_use]
    pub fn bar_for(&self, record: &Record) -> Option<BarGeometry> {
        record
            .span()
            .map(|(start, finish)| self.bar(start, finish))
    }

    /// Inverse of [`offset`](Self::offset), rounded to the millisecond.
    #[must_use]
    pub fn date_at(&self, offset: f64) -> Timestamp {
        let millis = offset / self.track_width * self.range.duration_millis() as f64;
        self.range.start() + Duration::milliseconds(millis.round() as i64)
    }

    /// Returns the header ticks falling within the range, at the given
    /// resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_protocol::{DateRange, HeaderResolution, TimeScale, parse_timestamp};
    ///
    /// let ts = |s| parse_timestamp(s).unwrap();
    /// let range = DateRange::new(ts("2023-05-20"), ts("2023-07-10")).unwrap();
    /// let scale = TimeScale::new(range, 100.0).unwrap();
    ///
    /// let labels: Vec<_> = scale
    ///     .ticks(HeaderResolution::Month)
    ///     .into_iter()
    ///     .map(|tick| tick.label)
    ///     .collect();
    /// assert_eq!(labels, ["Jun 2023", "Jul 2023"]);
    /// ```
    #[must_use]
    pub fn ticks(&self, resolution: HeaderResolution) -> Vec<Tick> {
        self.ticks_between(self.range.start(), self.range.end(), resolution)
    }

    /// Returns the header ticks between `from` and `to`, limited to the
    /// range.
    ///
    /// Only the dates in the window are visited, so the cost follows the
    /// window rather than the whole range.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_protocol::{DateRange, HeaderResolution, TimeScale, parse_timestamp};
    ///
    /// let ts = |s| parse_timestamp(s).unwrap();
    /// let range = DateRange::new(ts("1970-01-01"), ts("2023-07-01")).unwrap();
    /// let scale = TimeScale::new(range, 240.0).unwrap();
    ///
    /// let ticks = scale.ticks_between(
    ///     ts("2023-06-28T12:00"),
    ///     ts("2023-07-09"),
    ///     HeaderResolution::Day,
    /// );
    /// let labels: Vec<_> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    /// assert_eq!(labels, ["29", "30", "01"]);
    /// ```
    #[must_use]
    pub fn ticks_between(
        &self,
        from: Timestamp,
        to: Timestamp,
        resolution: HeaderResolution,
    ) -> Vec<Tick> {
        let from = from.max(self.range.start());
        let to = to.min(self.range.end());
        let mut ticks = Vec::new();
        if from > to {
            return ticks;
        }
        let mut day = first_boundary(from, resolution);

        while let Some(current) = day {
            let at = current.and_time(NaiveTime::MIN);
            if at > to {
                break;
            }
            ticks.push(Tick {
                at,
                offset: self.offset(at),
                label: tick_label(current, resolution),
            });
            day = next_boundary(current, resolution);
        }

        ticks
    }
}

/// First tick date at or after `from`.
fn first_boundary(from: Timestamp, resolution: HeaderResolution) -> Option<NaiveDate> {
    let date = from.date();
    let candidate = match resolution {
        HeaderResolution::Month => date.with_day(1)?,
        HeaderResolution::Week => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        HeaderResolution::Day => date,
    };

    if candidate.and_time(NaiveTime::MIN) >= from {
        Some(candidate)
    } else {
        next_boundary(candidate, resolution)
    }
}

fn next_boundary(date: NaiveDate, resolution: HeaderResolution) -> Option<NaiveDate> {
    match resolution {
        HeaderResolution::Month => {
            let (year, month) = if date.month() == 12 {
                (date.year() + 1, 1)
            } else {
                (date.year(), date.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        HeaderResolution::Week => date.checked_add_signed(Duration::days(7)),
        HeaderResolution::Day => date.succ_opt(),
    }
}

fn tick_label(date: NaiveDate, resolution: HeaderResolution) -> String {
    match resolution {
        HeaderResolution::Month => date.format("%b %Y").to_string(),
        HeaderResolution::Week => date.format("%d %b").to_string(),
        HeaderResolution::Day => date.format("%d").to_string(),
    }
}
