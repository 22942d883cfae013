//! Row geometry shared by the task list and the timeline.
//!
//! Both panels place record `i` in the same vertical band below their
//! header line, so rows line up across the divider. Only this module turns
//! a record index into screen rows.

use std::ops::Range;

use ratatui::layout::Rect;

use crate::layout::PANEL_HEADER_ROWS;

/// The slice of records on screen and how tall each row is.
///
/// # Examples
///
/// ```
/// use gantt_tui::rows::RowWindow;
/// use ratatui::layout::Rect;
///
/// let window = RowWindow::new(0, 2);
/// let panel = Rect::new(0, 5, 30, 10);
///
/// // Header at y=5, record 0 at y=6..8, record 1 at y=8..10.
/// assert_eq!(window.band(panel, 1), Some(Rect::new(0, 8, 30, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    /// Index of the first record on screen.
    pub first: usize,
    /// Height of every row.
    pub row_height: u16,
    /// Record under the keyboard cursor.
    pub cursor: Option<usize>,
}

impl RowWindow {
    /// Creates a window starting at record `first`, with no cursor.
    #[must_use]
    pub fn new(first: usize, row_height: u16) -> Self {
        Self {
            first,
            row_height: row_height.max(1),
            cursor: None,
        }
    }

    /// Sets the cursor row.
    #[must_use]
    pub fn with_cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Returns `true` if record `index` is under the cursor.
    #[must_use]
    pub fn is_cursor(&self, index: usize) -> bool {
        self.cursor == Some(index)
    }

    /// The header line of a panel.
    #[must_use]
    pub fn header(panel: Rect) -> Rect {
        Rect {
            height: panel.height.min(PANEL_HEADER_ROWS),
            ..panel
        }
    }

    /// Number of rows that fit entirely below the header.
    #[must_use]
    pub fn full_rows(&self, panel_height: u16) -> usize {
        usize::from(panel_height.saturating_sub(PANEL_HEADER_ROWS) / self.row_height)
    }

    /// The band record `index` occupies inside `panel`, clipped to the panel.
    ///
    /// Returns `None` for records scrolled out of view.
    #[must_use]
    pub fn band(&self, panel: Rect, index: usize) -> Option<Rect> {
        let relative = index.checked_sub(self.first)?;
        let offset = relative.checked_mul(usize::from(self.row_height))?;
        let top = usize::from(panel.y) + usize::from(PANEL_HEADER_ROWS) + offset;
        let bottom = usize::from(panel.bottom());
        if top >= bottom {
            return None;
        }
        let height = (bottom - top).min(usize::from(self.row_height));
        Some(Rect {
            x: panel.x,
            y: u16::try_from(top).ok()?,
            width: panel.width,
            height: u16::try_from(height).ok()?,
        })
    }

    /// Indices of the records drawn (fully or partly) in `panel`, out of
    /// `count` records.
    #[must_use]
    pub fn visible(&self, panel: Rect, count: usize) -> Range<usize> {
        let body = usize::from(panel.height.saturating_sub(PANEL_HEADER_ROWS));
        let rows = body.div_ceil(usize::from(self.row_height));
        let start = self.first.min(count);
        start..(start + rows).min(count)
    }

    /// Total height of a panel holding `count` records, header included.
    #[must_use]
    pub fn content_height(&self, count: usize) -> usize {
        usize::from(PANEL_HEADER_ROWS) + count.saturating_mul(usize::from(self.row_height))
    }
}
