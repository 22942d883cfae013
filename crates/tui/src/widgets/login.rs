//! Login prompt widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::state::LoginState;
use crate::widgets::help::centered_rect;

const LOGIN_WIDTH: u16 = 40;
const LOGIN_HEIGHT: u16 = 7;

/// Renders the password prompt centered in `area`.
///
/// ```text
/// ╭ Sign in ─────────────────────────────╮
/// │                                      │
/// │  Password: ••••                      │
/// │                                      │
/// │  Enter to sign in · Ctrl+C to quit   │
/// ╰──────────────────────────────────────╯
/// ```
pub fn render_login_prompt(login: &LoginState, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(LOGIN_WIDTH, LOGIN_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Sign in ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let status = match &login.error {
        Some(error) => Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Password: ", Style::default().fg(Color::White)),
            Span::styled(login.masked(), Style::default().fg(Color::Yellow)),
            Span::styled("▏", Style::default().fg(Color::DarkGray)),
        ]),
        status,
        Line::from(Span::styled(
            "  Enter to sign in · Ctrl+C to quit",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}
