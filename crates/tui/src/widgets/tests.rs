//! Rendering tests that span both chart panels.

use gantt_protocol::dummy::{sample_range, sample_records};
use gantt_protocol::{HeaderResolution, Record, TimeScale};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::timeline::{DEFAULT_BAR_COLOR, bar_color};
use super::{Timeline, render_task_list};
use crate::rows::RowWindow;
use crate::test_utils::buffer_to_string;

fn render_side_by_side(records: &[Record], window: RowWindow, height: u16) -> Buffer {
    let left = Rect::new(0, 0, 20, height);
    let right = Rect::new(20, 0, 40, height);
    let mut buf = Buffer::empty(Rect::new(0, 0, 60, height));
    let scale = TimeScale::new(sample_range(), 40.0).unwrap();

    render_task_list(records, &["task_name".to_string()], window, left, &mut buf);
    Timeline {
        records,
        scale: &scale,
        resolution: HeaderResolution::Week,
        default_color: DEFAULT_BAR_COLOR,
        scroll_x: 0,
        window,
    }
    .render(right, &mut buf);
    buf
}

fn row_text(buf: &Buffer, y: u16, xs: std::ops::Range<u16>) -> String {
    xs.map(|x| buf[(x, y)].symbol()).collect::<String>().trim_end().to_string()
}

fn row_has_bar(buf: &Buffer, y: u16, color: Color) -> bool {
    (20..60).any(|x| buf[(x, y)].bg == color)
}

#[test]
fn five_records_make_five_aligned_rows() {
    let records = sample_records()[..5].to_vec();
    let buf = render_side_by_side(&records, RowWindow::new(0, 1), 10);

    for (index, record) in records.iter().enumerate() {
        let y = 1 + index as u16;
        assert_eq!(row_text(&buf, y, 0..20), record.field("task_name"));
        assert!(
            row_has_bar(&buf, y, bar_color(record, DEFAULT_BAR_COLOR)),
            "no bar for {} on row {y}",
            record.field("task_name")
        );
    }
    for y in 6..10 {
        assert_eq!(row_text(&buf, y, 0..60), "");
    }
}

#[test]
fn taller_rows_stay_aligned() {
    let records = sample_records()[..3].to_vec();
    let buf = render_side_by_side(&records, RowWindow::new(0, 2), 10);

    for (index, record) in records.iter().enumerate() {
        let y = 1 + 2 * index as u16;
        assert_eq!(row_text(&buf, y, 0..20), record.field("task_name"));
        let color = bar_color(record, DEFAULT_BAR_COLOR);
        assert!(row_has_bar(&buf, y, color));
        assert!(row_has_bar(&buf, y + 1, color));
    }
}

#[test]
fn scrolling_moves_both_panels() {
    let records = sample_records();
    let buf = render_side_by_side(&records, RowWindow::new(5, 1), 4);

    for (offset, record) in records[5..8].iter().enumerate() {
        let y = 1 + offset as u16;
        assert_eq!(row_text(&buf, y, 0..20), record.field("task_name"));
        assert!(row_has_bar(&buf, y, bar_color(record, DEFAULT_BAR_COLOR)));
    }
}

#[test]
fn malformed_record_keeps_its_row() {
    let mut records = sample_records()[..3].to_vec();
    records[1].finish = None;
    let buf = render_side_by_side(&records, RowWindow::new(0, 1), 5);

    assert_eq!(row_text(&buf, 2, 0..20), "Requirements");
    assert!(!(20..60).any(|x| buf[(x, 2)].bg != Color::Reset));
    assert!(row_has_bar(&buf, 3, bar_color(&records[2], DEFAULT_BAR_COLOR)));
}

#[test]
fn headers_share_the_first_line() {
    let records = sample_records()[..2].to_vec();
    let buf = render_side_by_side(&records, RowWindow::new(0, 1), 4);

    let content = buffer_to_string(&buf);
    let header = content.lines().next().unwrap();
    assert!(header.starts_with("task_name"));
    assert!(header.contains("Jun"));
}
