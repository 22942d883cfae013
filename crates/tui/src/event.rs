//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use gantt_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard, mouse, or resize) to a chart message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts an event to a message while the login prompt is shown.
#[must_use]
pub fn login_event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_login_message(*key),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// The left button drives the divider: press, drag, and release become
/// pointer messages carrying the pointer position. The wheel scrolls.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerMove { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        MouseEventKind::ScrollUp => Some(Message::ScrollUp),
        MouseEventKind::ScrollDown => Some(Message::ScrollDown),
        MouseEventKind::ScrollLeft => Some(Message::ScrollLeft),
        MouseEventKind::ScrollRight => Some(Message::ScrollRight),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Esc` | Escape (clear cursor) |
/// | `Up` / `k` | Cursor up |
/// | `Down` / `j` | Cursor down |
/// | `PageUp` / `PageDown` | Scroll rows |
/// | `Left` / `h` | Scroll timeline left |
/// | `Right` / `l` | Scroll timeline right |
/// | `<` / `>` | Nudge divider |
/// | `t` | Task list only |
/// | `c` | Timeline only |
/// | `=` | Even split |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Up | KeyCode::Char('k') => Some(Message::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::CursorDown),
        KeyCode::PageUp => Some(Message::ScrollUp),
        KeyCode::PageDown => Some(Message::ScrollDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Message::ScrollLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::ScrollRight),

        // Divider
        KeyCode::Char('<') => Some(Message::NudgeDivider { delta: -1 }),
        KeyCode::Char('>') => Some(Message::NudgeDivider { delta: 1 }),
        KeyCode::Char('t') => Some(Message::ShowTableOnly),
        KeyCode::Char('c') => Some(Message::ShowChartOnly),
        KeyCode::Char('=') => Some(Message::ResetSplit),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a login prompt message.
///
/// # Key Bindings (Login)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Submit |
/// | `Esc` | Clear input |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_login_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::LoginSubmit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Backspace => Some(Message::LoginBackspace),
        KeyCode::Char(ch) => Some(Message::LoginInput { ch }),
        _ => None,
    }
}
