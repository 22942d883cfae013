//! Centered one-line messages shown in place of panel content.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Text shown while records are being loaded.
pub const LOADING_TEXT: &str = "Loading…";

/// Renders `text` centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use gantt_tui::widgets::placeholder::{LOADING_TEXT, render_placeholder};
///
/// let area = Rect::new(0, 0, 40, 5);
/// let mut buf = Buffer::empty(area);
/// render_placeholder(LOADING_TEXT, area, &mut buf);
/// ```
pub fn render_placeholder(text: &str, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let line = Rect {
        y: area.y + area.height.saturating_sub(1) / 2,
        height: 1,
        ..area
    };
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .render(line, buf);
}
