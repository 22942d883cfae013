//! The viewer shell: both chart panels, the divider between them, and the
//! state they share.
//!
//! The shell hands the same row height, scroll position, and [`TimeScale`]
//! to the task list and the timeline, so their rows line up. It owns the
//! [`PanelResizer`] and routes pointer presses on the divider to it.

use gantt_config::ViewerConfig;
use gantt_protocol::{DateRange, HeaderResolution, Record, TimeScale};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::layout::{DIVIDER_WIDTH, HORIZONTAL_SCROLL_STEP};
use crate::resize::PanelResizer;
use crate::rows::RowWindow;
use crate::widgets::placeholder::LOADING_TEXT;
use crate::widgets::timeline::DEFAULT_BAR_COLOR;
use crate::widgets::{
    Timeline, parse_color, render_divider, render_placeholder, render_task_list,
};

/// Screen areas of the two panels and the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelAreas {
    /// The task list.
    pub left: Rect,
    /// The divider, as tall as the task list's content.
    pub divider: Rect,
    /// The timeline.
    pub right: Rect,
}

/// State shared by the task list and the timeline.
///
/// # Examples
///
/// ```
/// use gantt_config::ViewerConfig;
/// use gantt_protocol::dummy::sample_records;
/// use gantt_tui::shell::ViewerShell;
/// use ratatui::layout::Rect;
///
/// let mut shell = ViewerShell::new(&ViewerConfig::default());
/// assert!(shell.is_loading());
///
/// shell.set_records(sample_records());
/// shell.layout(Rect::new(0, 0, 81, 20));
///
/// // Header plus eight rows.
/// assert_eq!(shell.divider_height(), 9);
/// assert_eq!(shell.panels().left.width, 40);
/// ```
#[derive(Debug, Clone)]
pub struct ViewerShell {
    records: Option<Vec<Record>>,
    scale: Option<TimeScale>,
    range: Option<DateRange>,
    track_width: f64,
    row_height: u16,
    columns: Vec<String>,
    header_resolution: HeaderResolution,
    default_color: Color,
    resizer: PanelResizer,
    area: Rect,
    divider_height: u16,
    scroll_row: usize,
    scroll_x: u16,
    cursor: Option<usize>,
}

impl ViewerShell {
    /// Creates a shell with no records yet.
    #[must_use]
    pub fn new(viewer: &ViewerConfig) -> Self {
        let default_color = parse_color(&viewer.default_color).unwrap_or_else(|| {
            tracing::warn!(color = %viewer.default_color, "unrecognized default bar color");
            DEFAULT_BAR_COLOR
        });

        Self {
            records: None,
            scale: None,
            range: viewer.range,
            track_width: viewer.track_width,
            row_height: viewer.row_height.max(1),
            columns: viewer.columns.clone(),
            header_resolution: viewer.header_resolution,
            default_color,
            resizer: PanelResizer::new(),
            area: Rect::default(),
            divider_height: 0,
            scroll_row: 0,
            scroll_x: 0,
            cursor: None,
        }
    }

    /// Replaces the record sequence.
    ///
    /// Records with a missing or malformed timestamp keep their row but get
    /// no bar. The time scale covers the configured range, or all record
    /// timestamps when none is configured.
    pub fn set_records(&mut self, records: Vec<Record>) {
        for record in records.iter().filter(|r| r.span().is_none()) {
            tracing::warn!(
                id = %record.field("id"),
                "record has a missing or malformed start/finish, bar omitted"
            );
        }

        let range = self.range.or_else(|| DateRange::spanning(&records));
        self.scale = range.and_then(|range| match TimeScale::new(range, self.track_width) {
            Ok(scale) => Some(scale),
            Err(err) => {
                tracing::warn!(%err, "cannot build time scale");
                None
            }
        });
        tracing::debug!(count = records.len(), range = ?range, "records loaded");

        self.cursor = self
            .cursor
            .filter(|_| !records.is_empty())
            .map(|c| c.min(records.len() - 1));
        self.records = Some(records);
        self.clamp_scroll();
        self.update_divider_height();
    }

    /// Returns `true` until records have been set.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.records.is_none()
    }

    /// Returns the records, or `None` while loading.
    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }

    /// Returns the time scale, or `None` when no range is known.
    #[must_use]
    pub fn scale(&self) -> Option<&TimeScale> {
        self.scale.as_ref()
    }

    /// Returns the panel resizer.
    #[must_use]
    pub fn resizer(&self) -> &PanelResizer {
        &self.resizer
    }

    /// Returns the height of the divider, in rows.
    #[must_use]
    pub fn divider_height(&self) -> u16 {
        self.divider_height
    }

    /// Returns the record under the cursor.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns the index of the first record on screen.
    #[must_use]
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Returns the first track column shown in the timeline.
    #[must_use]
    pub fn scroll_x(&self) -> u16 {
        self.scroll_x
    }

    /// Returns the row window both panels render with.
    #[must_use]
    pub fn row_window(&self) -> RowWindow {
        RowWindow::new(self.scroll_row, self.row_height).with_cursor(self.cursor)
    }

    /// Lays the shell out in `area`.
    ///
    /// The first call sets the even split. Later calls only track size
    /// changes.
    pub fn layout(&mut self, area: Rect) {
        if !self.resizer.is_mounted() && !area.is_empty() {
            self.resizer.mount(i32::from(self.available_width(area)));
        }
        if self.area != area {
            self.area = area;
            self.clamp_scroll();
            self.update_divider_height();
        }
    }

    fn available_width(&self, area: Rect) -> u16 {
        area.width.saturating_sub(DIVIDER_WIDTH)
    }

    /// Splits the shell area between the panels.
    ///
    /// The left width from the resizer is clamped to the area here; the
    /// right panel gets whatever remains.
    #[must_use]
    pub fn panels(&self) -> PanelAreas {
        let area = self.area;
        let available = self.available_width(area);
        let left = self
            .resizer
            .left_width()
            .unwrap_or(i32::from(available) / 2)
            .clamp(0, i32::from(available));
        let left = u16::try_from(left).unwrap_or(available);
        let divider_width = DIVIDER_WIDTH.min(area.width);

        PanelAreas {
            left: Rect { width: left, ..area },
            divider: Rect {
                x: area.x + left,
                y: area.y,
                width: divider_width,
                height: self.divider_height,
            },
            right: Rect {
                x: area.x + left + divider_width,
                y: area.y,
                width: available - left,
                height: area.height,
            },
        }
    }

    /// Makes the divider as tall as the task list's content, capped at the
    /// shell height. Zero while loading.
    fn update_divider_height(&mut self) {
        self.divider_height = match &self.records {
            None => 0,
            Some(records) => {
                let content = self.row_window().content_height(records.len());
                u16::try_from(content)
                    .unwrap_or(u16::MAX)
                    .min(self.area.height)
            }
        };
    }

    // --- Divider ---

    /// Starts a drag if `(column, row)` is on the divider.
    ///
    /// Returns `true` if a drag started. Presses are ignored until the
    /// divider has been laid out. The drag is anchored to the width on
    /// screen, which may be narrower than the stored one after a shrink.
    pub fn pointer_down(&mut self, column: u16, row: u16) -> bool {
        let panels = self.panels();
        let divider = panels.divider;
        if divider.is_empty() || !divider.contains((column, row).into()) {
            return false;
        }
        self.resizer.set_left_width(i32::from(panels.left.width));
        let started = self.resizer.press(i32::from(column));
        if started {
            tracing::trace!(column, "divider drag started");
        }
        started
    }

    /// Feeds a pointer move to the resizer. Returns `true` if the split
    /// changed.
    pub fn pointer_move(&mut self, column: u16) -> bool {
        let changed = self.resizer.drag(i32::from(column));
        if changed {
            self.clamp_scroll();
        }
        changed
    }

    /// Ends any drag in progress.
    pub fn pointer_up(&mut self) {
        self.resizer.release();
    }

    /// Gives the whole width to the task list.
    pub fn show_table_only(&mut self) {
        let available = self.available_width(self.area);
        self.resizer.set_left_width(i32::from(available));
    }

    /// Gives the whole width to the timeline.
    pub fn show_chart_only(&mut self) {
        self.resizer.set_left_width(0);
        self.clamp_scroll();
    }

    /// Restores the even split.
    pub fn reset_split(&mut self) {
        let available = self.available_width(self.area);
        self.resizer.set_left_width(i32::from(available) / 2);
        self.clamp_scroll();
    }

    /// Moves the divider by `delta` columns, keeping it on screen.
    pub fn nudge_divider(&mut self, delta: i32) {
        let available = i32::from(self.available_width(self.area));
        if let Some(left) = self.resizer.left_width() {
            let target = (left.clamp(0, available) + delta).clamp(0, available);
            self.resizer.set_left_width(target);
            self.clamp_scroll();
        }
    }

    // --- Rows ---

    fn record_count(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    fn full_rows(&self) -> usize {
        self.row_window().full_rows(self.area.height).max(1)
    }

    /// Moves the cursor up one row, scrolling to keep it in view.
    pub fn cursor_up(&mut self) {
        if self.record_count() == 0 {
            return;
        }
        let cursor = self.cursor.map_or(0, |c| c.saturating_sub(1));
        self.cursor = Some(cursor);
        if cursor < self.scroll_row {
            self.scroll_row = cursor;
        }
    }

    /// Moves the cursor down one row, scrolling to keep it in view.
    pub fn cursor_down(&mut self) {
        let count = self.record_count();
        if count == 0 {
            return;
        }
        let cursor = self.cursor.map_or(0, |c| (c + 1).min(count - 1));
        self.cursor = Some(cursor);
        let full_rows = self.full_rows();
        if cursor >= self.scroll_row + full_rows {
            self.scroll_row = cursor + 1 - full_rows;
        }
    }

    /// Clears the cursor.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Scrolls both panels by `delta` rows.
    pub fn scroll_rows(&mut self, delta: isize) {
        self.scroll_row = self.scroll_row.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    /// Scrolls the timeline by `steps` increments of
    /// [`HORIZONTAL_SCROLL_STEP`] columns.
    pub fn scroll_timeline(&mut self, steps: i32) {
        let delta = steps.saturating_mul(i32::from(HORIZONTAL_SCROLL_STEP));
        let target = (i32::from(self.scroll_x) + delta).max(0);
        self.scroll_x = u16::try_from(target).unwrap_or(u16::MAX);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max_row = self.record_count().saturating_sub(self.full_rows());
        self.scroll_row = self.scroll_row.min(max_row);

        // Saturating float-to-int conversion.
        let track = self.track_width.ceil() as u16;
        let max_x = track.saturating_sub(self.panels().right.width);
        self.scroll_x = self.scroll_x.min(max_x);
    }

    /// Renders both panels and the divider into the laid-out area.
    ///
    /// Shows "Loading…" until records arrive.
    pub fn render(&self, buf: &mut Buffer) {
        let Some(records) = self.records.as_deref() else {
            render_placeholder(LOADING_TEXT, self.area, buf);
            return;
        };

        let panels = self.panels();
        let window = self.row_window();

        render_task_list(records, &self.columns, window, panels.left, buf);
        render_divider(panels.divider, self.resizer.is_dragging(), buf);

        match &self.scale {
            Some(scale) => Timeline {
                records,
                scale,
                resolution: self.header_resolution,
                default_color: self.default_color,
                scroll_x: self.scroll_x,
                window,
            }
            .render(panels.right, buf),
            None => render_placeholder("No dated records", panels.right, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantt_protocol::dummy::{sample_range, sample_records};
    use gantt_protocol::parse_timestamp;

    fn shell_with(records: Vec<Record>, area: Rect) -> ViewerShell {
        let mut shell = ViewerShell::new(&ViewerConfig::default());
        shell.set_records(records);
        shell.layout(area);
        shell
    }

    #[test]
    fn mount_splits_evenly() {
        let shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));
        let panels = shell.panels();

        assert_eq!(panels.left, Rect::new(0, 0, 40, 20));
        assert_eq!(panels.divider, Rect::new(40, 0, 1, 9));
        assert_eq!(panels.right, Rect::new(41, 0, 40, 20));
    }

    #[test]
    fn mount_happens_once() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));
        shell.layout(Rect::new(0, 0, 121, 20));
        assert_eq!(shell.resizer().left_width(), Some(40));
        assert_eq!(shell.panels().right.width, 80);
    }

    #[test]
    fn divider_tracks_content_height() {
        let mut shell = shell_with(sample_records()[..3].to_vec(), Rect::new(0, 0, 80, 20));
        assert_eq!(shell.divider_height(), 4);

        shell.set_records(sample_records());
        assert_eq!(shell.divider_height(), 9);

        shell.layout(Rect::new(0, 0, 80, 6));
        assert_eq!(shell.divider_height(), 6);
    }

    #[test]
    fn divider_absent_while_loading() {
        let mut shell = ViewerShell::new(&ViewerConfig::default());
        shell.layout(Rect::new(0, 0, 80, 20));
        assert!(shell.is_loading());
        assert_eq!(shell.divider_height(), 0);
        assert!(!shell.pointer_down(39, 0));
    }

    #[test]
    fn drag_resizes_panels() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));

        assert!(shell.pointer_down(40, 3));
        assert!(shell.pointer_move(50));
        shell.pointer_up();
        assert!(!shell.pointer_move(70));

        let panels = shell.panels();
        assert_eq!(panels.left.width, 50);
        assert_eq!(panels.divider.x, 50);
        assert_eq!(panels.right.width, 30);
    }

    #[test]
    fn press_off_divider_is_ignored() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));

        assert!(!shell.pointer_down(39, 3));
        // Below the divider's content height.
        assert!(!shell.pointer_down(40, 15));
        assert!(!shell.resizer().is_dragging());
    }

    #[test]
    fn drag_past_edge_clamps_rectangles_only() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));
        shell.pointer_down(40, 0);
        shell.pointer_move(0);
        shell.pointer_move(200);

        assert_eq!(shell.resizer().left_width(), Some(200));
        let panels = shell.panels();
        assert_eq!(panels.left.width, 80);
        assert_eq!(panels.right.width, 0);
    }

    #[test]
    fn drag_after_shrink_starts_from_visible_width() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 201, 20));
        assert_eq!(shell.resizer().left_width(), Some(100));

        shell.layout(Rect::new(0, 0, 81, 20));
        assert_eq!(shell.panels().divider.x, 80);

        assert!(shell.pointer_down(80, 1));
        assert!(shell.pointer_move(70));
        shell.pointer_up();

        let panels = shell.panels();
        assert_eq!(panels.left.width, 70);
        assert_eq!(panels.divider.x, 70);
        assert_eq!(panels.right.width, 10);
    }

    #[test]
    fn drag_after_table_only_and_shrink() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 121, 20));
        shell.show_table_only();
        shell.layout(Rect::new(0, 0, 61, 20));

        assert!(shell.pointer_down(60, 0));
        assert!(shell.pointer_move(55));
        assert_eq!(shell.panels().left.width, 55);
    }

    #[test]
    fn presets_move_divider() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));

        shell.show_table_only();
        assert_eq!(shell.panels().left.width, 80);
        shell.show_chart_only();
        assert_eq!(shell.panels().left.width, 0);
        assert_eq!(shell.panels().right.width, 80);
        shell.reset_split();
        assert_eq!(shell.panels().left.width, 40);

        shell.nudge_divider(3);
        assert_eq!(shell.panels().left.width, 43);
        shell.nudge_divider(-100);
        assert_eq!(shell.panels().left.width, 0);
    }

    #[test]
    fn cursor_scrolls_into_view() {
        // Header plus three full rows.
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 4));
        for _ in 0..5 {
            shell.cursor_down();
        }
        assert_eq!(shell.cursor(), Some(4));
        assert_eq!(shell.scroll_row(), 2);

        for _ in 0..4 {
            shell.cursor_up();
        }
        assert_eq!(shell.cursor(), Some(0));
        assert_eq!(shell.scroll_row(), 0);
    }

    #[test]
    fn cursor_stops_at_last_record() {
        let mut shell = shell_with(sample_records()[..2].to_vec(), Rect::new(0, 0, 81, 10));
        for _ in 0..5 {
            shell.cursor_down();
        }
        assert_eq!(shell.cursor(), Some(1));
    }

    #[test]
    fn row_scroll_is_clamped() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 4));
        shell.scroll_rows(100);
        assert_eq!(shell.scroll_row(), 5);
        shell.scroll_rows(-2);
        assert_eq!(shell.scroll_row(), 3);
        shell.scroll_rows(-100);
        assert_eq!(shell.scroll_row(), 0);
    }

    #[test]
    fn timeline_scroll_is_clamped_to_track() {
        // Default track is 240 columns; the right panel is 40.
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));
        shell.scroll_timeline(1);
        assert_eq!(shell.scroll_x(), HORIZONTAL_SCROLL_STEP);
        shell.scroll_timeline(1000);
        assert_eq!(shell.scroll_x(), 200);
        shell.scroll_timeline(-1000);
        assert_eq!(shell.scroll_x(), 0);
    }

    #[test]
    fn auto_range_spans_records() {
        let shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));
        assert_eq!(shell.scale().unwrap().range(), sample_range());
    }

    #[test]
    fn configured_range_wins() {
        let ts = |s| parse_timestamp(s).unwrap();
        let range = DateRange::new(ts("2023-05-01"), ts("2023-08-01")).unwrap();
        let viewer = ViewerConfig {
            range: Some(range),
            ..Default::default()
        };
        let mut shell = ViewerShell::new(&viewer);
        shell.set_records(sample_records());
        assert_eq!(shell.scale().unwrap().range(), range);
    }

    #[test]
    fn undated_records_have_no_scale() {
        let mut records = sample_records()[..2].to_vec();
        for record in &mut records {
            record.start = None;
            record.finish = None;
        }
        let shell = shell_with(records, Rect::new(0, 0, 81, 20));
        assert!(shell.scale().is_none());
        assert_eq!(shell.divider_height(), 3);
    }

    #[test]
    fn empty_records_clear_cursor() {
        let mut shell = shell_with(sample_records(), Rect::new(0, 0, 81, 20));
        shell.cursor_down();
        shell.set_records(Vec::new());
        assert_eq!(shell.cursor(), None);
        assert_eq!(shell.divider_height(), 1);
    }
}
