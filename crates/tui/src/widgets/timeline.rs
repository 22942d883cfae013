//! Timeline panel rendering.
//!
//! Draws the date header and one bar per record, positioned by a
//! [`TimeScale`]. Track units are terminal columns; the panel shows the
//! slice of the track starting at `scroll_x`.

use std::str::FromStr;

use gantt_protocol::{BarGeometry, HeaderResolution, Record, TimeScale};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::rows::RowWindow;

/// Bar color for records without a usable color of their own.
pub const DEFAULT_BAR_COLOR: Color = Color::Rgb(85, 155, 241);

/// Background of the row under the cursor.
const CURSOR_BG: Color = Color::DarkGray;

/// Parses a record color.
///
/// Accepts `rgb(r, g, b)` as well as everything [`Color::from_str`] knows:
/// named colors, `#rrggbb`, and palette indices.
///
/// # Examples
///
/// ```
/// use gantt_tui::widgets::timeline::parse_color;
/// use ratatui::style::Color;
///
/// assert_eq!(parse_color("rgb(85, 155, 241)"), Some(Color::Rgb(85, 155, 241)));
/// assert_eq!(parse_color("#ff8800"), Some(Color::Rgb(255, 136, 0)));
/// assert_eq!(parse_color("red"), Some(Color::Red));
/// assert_eq!(parse_color("rgb(300, 0, 0)"), None);
/// ```
#[must_use]
pub fn parse_color(input: &str) -> Option<Color> {
    let input = input.trim();
    if let Some(inner) = input
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
        let color = match (channels.next(), channels.next(), channels.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => Color::Rgb(r, g, b),
            _ => return None,
        };
        return channels.next().is_none().then_some(color);
    }
    Color::from_str(input).ok()
}

/// Returns the fill color for a record's bar.
#[must_use]
pub fn bar_color(record: &Record, default: Color) -> Color {
    record
        .color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(default)
}

/// Converts a bar on the track to the cells it covers in a panel `width`
/// columns wide scrolled to `scroll_x`.
///
/// Returns `(x, len)` relative to the panel, or `None` when the bar is empty
/// or entirely out of view. Bars with a positive width cover at least one
/// cell.
#[must_use]
pub fn bar_cells(bar: BarGeometry, scroll_x: u16, width: u16) -> Option<(u16, u16)> {
    if bar.width.is_nan() || bar.width <= 0.0 {
        return None;
    }
    let start = bar.left.floor();
    let end = bar.right().ceil().max(start + 1.0);

    let view_start = f64::from(scroll_x);
    let view_end = view_start + f64::from(width);
    let visible_start = start.max(view_start);
    let visible_end = end.min(view_end);
    if visible_end <= visible_start {
        return None;
    }

    // Both values are within 0..=width here.
    let x = (visible_start - view_start) as u16;
    let len = (visible_end - visible_start) as u16;
    Some((x, len))
}

/// The timeline panel.
///
/// # Examples
///
/// ```
/// use gantt_protocol::dummy::{sample_range, sample_records};
/// use gantt_protocol::{HeaderResolution, TimeScale};
/// use gantt_tui::rows::RowWindow;
/// use gantt_tui::widgets::timeline::{DEFAULT_BAR_COLOR, Timeline};
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
///
/// let records = sample_records();
/// let scale = TimeScale::new(sample_range(), 60.0).unwrap();
/// let area = Rect::new(0, 0, 60, 10);
/// let mut buf = Buffer::empty(area);
///
/// Timeline {
///     records: &records,
///     scale: &scale,
///     resolution: HeaderResolution::Week,
///     default_color: DEFAULT_BAR_COLOR,
///     scroll_x: 0,
///     window: RowWindow::new(0, 1),
/// }
/// .render(area, &mut buf);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timeline<'a> {
    /// Records to draw, in row order.
    pub records: &'a [Record],
    /// Maps timestamps onto the track.
    pub scale: &'a TimeScale,
    /// Header tick granularity.
    pub resolution: HeaderResolution,
    /// Fill for records without a usable color.
    pub default_color: Color,
    /// First track column shown at the left edge of the panel.
    pub scroll_x: u16,
    /// Rows on screen.
    pub window: RowWindow,
}

impl Widget for Timeline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        self.render_header(RowWindow::header(area), buf);

        for index in self.window.visible(area, self.records.len()) {
            let Some(band) = self.window.band(area, index) else {
                continue;
            };
            if self.window.is_cursor(index) {
                buf.set_style(band, Style::default().bg(CURSOR_BG));
            }

            let record = &self.records[index];
            let Some(bar) = self.scale.bar_for(record) else {
                continue;
            };
            if let Some((x, len)) = bar_cells(bar, self.scroll_x, band.width) {
                let cells = Rect {
                    x: band.x + x,
                    width: len,
                    ..band
                };
                let color = bar_color(record, self.default_color);
                buf.set_style(cells, Style::default().bg(color));
            }
        }
    }
}

impl Timeline<'_> {
    /// Writes tick labels, skipping any that would overlap the previous one.
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let view_start = f64::from(self.scroll_x);
        let mut next_free = 0u16;

        // One column of slack on the left for ticks that round onto it.
        let from = self.scale.date_at(view_start - 1.0);
        let to = self.scale.date_at(view_start + f64::from(area.width));

        for tick in self.scale.ticks_between(from, to, self.resolution) {
            let x = tick.offset.round() - view_start;
            if x < f64::from(next_free) || x >= f64::from(area.width) {
                continue;
            }
            let x = x as u16;
            let label_width =
                u16::try_from(Span::raw(tick.label.as_str()).width()).unwrap_or(u16::MAX);
            buf.set_stringn(
                area.x + x,
                area.y,
                format!("▏{}", tick.label),
                usize::from(area.width - x),
                style,
            );
            next_free = x.saturating_add(label_width).saturating_add(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use gantt_protocol::dummy::{sample_range, sample_records};
    use gantt_protocol::parse_timestamp;

    fn bar(left: f64, width: f64) -> BarGeometry {
        BarGeometry { left, width }
    }

    #[test]
    fn parse_rgb_with_spacing() {
        assert_eq!(parse_color("rgb(1,2,3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_color("  rgb( 1 , 2 , 3 ) "), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("rgb(1, 2, 3, 4)"), None);
        assert_eq!(parse_color("not a color"), None);
    }

    #[test]
    fn bar_color_falls_back_to_default() {
        let ts = |s| parse_timestamp(s).unwrap();
        let record = Record::new(1, "a", ts("2023-06-01"), ts("2023-06-02"));
        assert_eq!(bar_color(&record, DEFAULT_BAR_COLOR), DEFAULT_BAR_COLOR);

        let record = record.with_color("chartreuse-ish");
        assert_eq!(bar_color(&record, DEFAULT_BAR_COLOR), DEFAULT_BAR_COLOR);

        let record = record.with_color("rgb(241, 155, 85)");
        assert_eq!(bar_color(&record, DEFAULT_BAR_COLOR), Color::Rgb(241, 155, 85));
    }

    #[test]
    fn bar_cells_covers_partial_columns() {
        assert_eq!(bar_cells(bar(2.4, 3.3), 0, 20), Some((2, 4)));
        assert_eq!(bar_cells(bar(2.6, 0.1), 0, 20), Some((2, 1)));
        assert_eq!(bar_cells(bar(19.6, 0.4), 0, 20), Some((19, 1)));
    }

    #[test]
    fn bar_cells_skips_empty_and_inverted_bars() {
        assert_eq!(bar_cells(bar(5.0, 0.0), 0, 20), None);
        assert_eq!(bar_cells(bar(5.0, -2.0), 0, 20), None);
        assert_eq!(bar_cells(bar(5.0, f64::NAN), 0, 20), None);
    }

    #[test]
    fn bar_cells_clips_to_view() {
        assert_eq!(bar_cells(bar(5.0, 10.0), 8, 20), Some((0, 7)));
        assert_eq!(bar_cells(bar(15.0, 10.0), 0, 20), Some((15, 5)));
        assert_eq!(bar_cells(bar(25.0, 10.0), 0, 20), None);
        assert_eq!(bar_cells(bar(-10.0, 5.0), 0, 20), None);
    }

    #[test]
    fn bars_land_on_their_rows() {
        let records = sample_records();
        let scale = TimeScale::new(sample_range(), 60.0).unwrap();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        Timeline {
            records: &records,
            scale: &scale,
            resolution: HeaderResolution::Week,
            default_color: DEFAULT_BAR_COLOR,
            scroll_x: 0,
            window: RowWindow::new(0, 1),
        }
        .render(area, &mut buf);

        for (index, record) in records.iter().enumerate() {
            let y = 1 + index as u16;
            let cells = bar_cells(scale.bar_for(record).unwrap(), 0, 60).unwrap();
            let expected = bar_color(record, DEFAULT_BAR_COLOR);
            assert_eq!(buf[(cells.0, y)].bg, expected, "row {index}");
        }
        // Row 9 is past the last record.
        assert!((0..60).all(|x| buf[(x, 9)].bg == Color::Reset));
    }

    #[test]
    fn record_without_dates_has_no_bar() {
        let mut records = sample_records();
        records[1].start = None;
        let scale = TimeScale::new(sample_range(), 60.0).unwrap();
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);

        Timeline {
            records: &records,
            scale: &scale,
            resolution: HeaderResolution::Month,
            default_color: DEFAULT_BAR_COLOR,
            scroll_x: 0,
            window: RowWindow::new(0, 1),
        }
        .render(area, &mut buf);

        assert!((0..60).all(|x| buf[(x, 2)].bg == Color::Reset));
        assert!((0..60).any(|x| buf[(x, 3)].bg != Color::Reset));
    }

    #[test]
    fn header_shows_week_ticks() {
        let records = sample_records();
        let scale = TimeScale::new(sample_range(), 60.0).unwrap();
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);

        Timeline {
            records: &records,
            scale: &scale,
            resolution: HeaderResolution::Week,
            default_color: DEFAULT_BAR_COLOR,
            scroll_x: 0,
            window: RowWindow::new(0, 1),
        }
        .render(area, &mut buf);

        let header = buffer_to_string(&buf);
        let header = header.lines().next().unwrap();
        assert!(header.contains("05 Jun"), "{header}");
        assert!(header.contains("12 Jun"), "{header}");
    }

    #[test]
    fn scrolled_header_labels_visible_days() {
        let records = sample_records();
        let scale = TimeScale::new(sample_range(), 240.0).unwrap();
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);

        Timeline {
            records: &records,
            scale: &scale,
            resolution: HeaderResolution::Day,
            default_color: DEFAULT_BAR_COLOR,
            scroll_x: 120,
            window: RowWindow::new(0, 1),
        }
        .render(area, &mut buf);

        let header = buffer_to_string(&buf);
        let header = header.lines().next().unwrap();
        // Track columns 120..160 cover Jun 14 11:00 to Jun 18 19:40.
        for day in ["▏15", "▏16", "▏17", "▏18"] {
            assert!(header.contains(day), "{header}");
        }
        assert!(!header.contains("14"), "{header}");
        assert!(!header.contains("19"), "{header}");
        assert_eq!(buf[(5, 0)].symbol(), "▏");
    }
}
