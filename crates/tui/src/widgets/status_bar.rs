//! Status bar rendering widget.
//!
//! This module renders the one-line footer: the title, the number of loaded
//! records or a status message, and the help cue.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Width reserved for the help cue on the right.
const HELP_CUE_WIDTH: u16 = 8;

/// Renders the status bar.
///
/// `record_count` is `None` while records are loading. A `message`, when
/// present, replaces the record count and is shown in red.
///
/// # Layout
///
/// ```text
/// gantt · 8 records                                                  ? help
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use gantt_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some(8), None, area, &mut buf);
/// ```
pub fn render_status_bar(
    record_count: Option<usize>,
    message: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let [info_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(HELP_CUE_WIDTH)]).areas(area);

    let separator = Span::styled(" · ", Style::default().fg(Color::DarkGray));
    let detail = match (message, record_count) {
        (Some(message), _) => Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        (None, None) => Span::styled("loading", Style::default().fg(Color::DarkGray)),
        (None, Some(1)) => Span::raw("1 record"),
        (None, Some(count)) => Span::raw(format!("{count} records")),
    };

    Paragraph::new(Line::from(vec![
        Span::styled(
            "gantt",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        separator,
        detail,
    ]))
    .render(info_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right)
    .render(help_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(record_count: Option<usize>, message: Option<&str>) -> String {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(record_count, message, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn shows_record_count() {
        let expected = format!("gantt · 8 records{}? help\n", " ".repeat(27));
        assert_eq!(render(Some(8), None), expected);
        assert!(render(Some(1), None).contains("1 record "));
    }

    #[test]
    fn shows_loading() {
        assert!(render(None, None).starts_with("gantt · loading"));
    }

    #[test]
    fn message_replaces_count() {
        let content = render(Some(0), Some("failed to read records.json"));
        assert!(content.contains("failed to read records.json"));
        assert!(!content.contains("records "));
    }
}
