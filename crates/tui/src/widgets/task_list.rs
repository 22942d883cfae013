//! Task list panel rendering.
//!
//! One column per configured field, sized to fit its widest value, followed
//! by an empty filler column that takes whatever width remains.

use gantt_protocol::Record;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::layout::{COLUMN_SPACING, MAX_COLUMN_WIDTH};
use crate::rows::RowWindow;

/// A laid-out column: its left edge relative to the panel and its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    /// Offset from the panel's left edge.
    pub x: u16,
    /// Width in columns.
    pub width: u16,
}

/// Computes the width of each column from its header and values.
///
/// Widths are at least 1 and at most [`MAX_COLUMN_WIDTH`].
///
/// # Examples
///
/// ```
/// use gantt_protocol::dummy::sample_records;
/// use gantt_tui::widgets::task_list::column_widths;
///
/// let records = sample_records();
/// let columns = vec!["id".to_string(), "task_name".to_string()];
///
/// // "task_name" (9) is narrower than "Implementation" (14).
/// assert_eq!(column_widths(&records, &columns), [2, 14]);
/// ```
#[must_use]
pub fn column_widths(records: &[Record], columns: &[String]) -> Vec<u16> {
    columns
        .iter()
        .map(|column| {
            let widest = records
                .iter()
                .map(|record| text_width(&record.field(column)))
                .chain(std::iter::once(text_width(column)))
                .max()
                .unwrap_or(0);
            u16::try_from(widest)
                .unwrap_or(MAX_COLUMN_WIDTH)
                .clamp(1, MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Places columns left to right in a panel `panel_width` wide.
///
/// Columns that start past the right edge are dropped; the last visible one
/// is cut to fit. The returned filler slot covers the rest of the width.
#[must_use]
pub fn column_slots(widths: &[u16], panel_width: u16) -> (Vec<ColumnSlot>, ColumnSlot) {
    let mut slots = Vec::with_capacity(widths.len());
    let mut x = 0u16;
    for &width in widths {
        if x >= panel_width {
            break;
        }
        let width = width.min(panel_width - x);
        slots.push(ColumnSlot { x, width });
        x = x.saturating_add(width).saturating_add(COLUMN_SPACING);
    }
    let filler_x = x.min(panel_width);
    let filler = ColumnSlot {
        x: filler_x,
        width: panel_width - filler_x,
    };
    (slots, filler)
}

fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Renders the task list: a header line of column names, then one row per
/// record.
///
/// Unknown fields render as empty cells.
///
/// # Examples
///
/// ```
/// use gantt_protocol::dummy::sample_records;
/// use gantt_tui::rows::RowWindow;
/// use gantt_tui::widgets::render_task_list;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let records = sample_records();
/// let columns = vec!["id".to_string(), "task_name".to_string()];
/// let area = Rect::new(0, 0, 30, 10);
/// let mut buf = Buffer::empty(area);
///
/// render_task_list(&records, &columns, RowWindow::new(0, 1), area, &mut buf);
/// ```
pub fn render_task_list(
    records: &[Record],
    columns: &[String],
    window: RowWindow,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.is_empty() {
        return;
    }
    let widths = column_widths(records, columns);
    let (slots, _filler) = column_slots(&widths, area.width);

    let header = RowWindow::header(area);
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    for (column, slot) in columns.iter().zip(&slots) {
        buf.set_stringn(
            header.x + slot.x,
            header.y,
            column,
            usize::from(slot.width),
            header_style,
        );
    }

    let cursor_style = Style::default().bg(Color::DarkGray);
    for index in window.visible(area, records.len()) {
        let Some(band) = window.band(area, index) else {
            continue;
        };
        // The cursor highlight spans the filler column too.
        if window.is_cursor(index) {
            buf.set_style(band, cursor_style);
        }
        let record = &records[index];
        for (column, slot) in columns.iter().zip(&slots) {
            buf.set_stringn(
                band.x + slot.x,
                band.y,
                record.field(column),
                usize::from(slot.width),
                Style::default(),
            );
        }
    }
}
