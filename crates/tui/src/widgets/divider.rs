//! The draggable divider between the task list and the timeline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

/// Renders the divider as a vertical rule filling `area`.
///
/// The rule is highlighted while a drag is in progress.
pub fn render_divider(area: Rect, dragging: bool, buf: &mut Buffer) {
    let style = if dragging {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let symbol = if dragging { "┃" } else { "│" };

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}
