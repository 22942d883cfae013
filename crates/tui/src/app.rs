//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use gantt_config::{Config, Session};
use gantt_protocol::{Message, Record};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::{
    AppState,
    event::{event_to_message, login_event_to_message, poll_event},
    layout::{MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    shell::ViewerShell,
    terminal::{AppTerminal, MouseCapture},
    widgets::{render_help_overlay, render_login_prompt, render_status_bar},
};

/// The outcome of loading records, delivered once by the loader.
pub type RecordLoad = anyhow::Result<Vec<Record>>;

/// Receiving end of the record loader.
pub type RecordReceiver = oneshot::Receiver<RecordLoad>;

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    shell: ViewerShell,
    session: Session,
    config: Config,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    ///
    /// The viewer shows "Loading…" until records are delivered, and the
    /// login prompt while `session` is anonymous.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_config::{Config, Session};
    /// use gantt_tui::App;
    ///
    /// let app = App::new(Config::default(), Session::with_token("t"));
    /// assert!(app.shell().is_loading());
    /// ```
    #[must_use]
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            state: AppState::new(),
            shell: ViewerShell::new(&config.viewer),
            session,
            config,
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the viewer shell.
    #[must_use]
    pub fn shell(&self) -> &ViewerShell {
        &self.shell
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Hands the loaded records to the viewer.
    ///
    /// A failed load is reported in the status bar; the viewer then shows an
    /// empty chart.
    pub fn receive_records(&mut self, load: RecordLoad) {
        match load {
            Ok(records) => {
                tracing::info!(count = records.len(), "records received");
                self.state.status = None;
                self.shell.set_records(records);
            }
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "failed to load records");
                self.state.status = Some(format!("{err:#}"));
                self.shell.set_records(Vec::new());
            }
        }
    }

    /// Updates the application state based on a message.
    ///
    /// While the login prompt is shown, only login messages, `Escape`,
    /// `Resize` and `Quit` have an effect. When the help overlay is visible,
    /// keys dismiss it instead of their normal action and pointer gestures
    /// are ignored, apart from a release ending a drag.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }
        if let Message::Resize { width, height } = msg {
            self.shell.layout(content_area(Rect::new(0, 0, width, height)));
            return;
        }

        if !self.session.is_authenticated() {
            self.update_login(msg);
            return;
        }

        if msg.is_login() {
            tracing::trace!(?msg, "login input while signed in");
            return;
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                // A release still ends a drag started before help opened.
                Message::PointerUp { .. } => self.shell.pointer_up(),
                _ if msg.is_pointer() => {}
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        let moves_divider = msg.is_divider();
        match msg {
            Message::Escape => {
                self.shell.pointer_up();
                self.shell.clear_cursor();
            }
            Message::ToggleHelp => self.state.toggle_help(),
            Message::CursorUp => self.shell.cursor_up(),
            Message::CursorDown => self.shell.cursor_down(),
            Message::ScrollUp => self.shell.scroll_rows(-1),
            Message::ScrollDown => self.shell.scroll_rows(1),
            Message::ScrollLeft => self.shell.scroll_timeline(-1),
            Message::ScrollRight => self.shell.scroll_timeline(1),
            Message::PointerDown { column, row } => {
                let _ = self.shell.pointer_down(column, row);
            }
            Message::PointerMove { column, .. } => {
                let _ = self.shell.pointer_move(column);
            }
            Message::PointerUp { .. } => self.shell.pointer_up(),
            Message::NudgeDivider { delta } => self.shell.nudge_divider(delta),
            Message::ShowTableOnly => self.shell.show_table_only(),
            Message::ShowChartOnly => self.shell.show_chart_only(),
            Message::ResetSplit => self.shell.reset_split(),
            // Handled above, or only meaningful at the login prompt
            Message::Quit
            | Message::Resize { .. }
            | Message::LoginInput { .. }
            | Message::LoginBackspace
            | Message::LoginSubmit => {}
        }

        if moves_divider {
            tracing::trace!(left_width = ?self.shell.resizer().left_width(), "split updated");
        }
    }

    fn update_login(&mut self, msg: Message) {
        let login = &mut self.state.login;
        match msg {
            Message::LoginInput { ch } => login.push(ch),
            Message::LoginBackspace => login.backspace(),
            Message::Escape => login.clear(),
            Message::LoginSubmit => {
                let password = login.take_input();
                if self.session.sign_in(&password) {
                    login.clear();
                } else {
                    login.error = Some("Password required".to_string());
                }
            }
            _ => {}
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Shows a "terminal too small" message below the minimum size, the
    /// login prompt while signed out, and the chart otherwise.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let content = content_area(area);
        let status = Rect {
            y: content.bottom(),
            height: STATUS_BAR_HEIGHT,
            ..area
        };

        if self.session.is_authenticated() {
            self.shell.layout(content);
            self.shell.render(frame.buffer_mut());
        } else {
            render_login_prompt(&self.state.login, content, frame.buffer_mut());
        }

        let record_count = self.shell.records().map(<[Record]>::len);
        render_status_bar(
            record_count,
            self.state.status.as_deref(),
            status,
            frame.buffer_mut(),
        );

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Mouse capture is held for the duration of the loop. Records arrive
    /// through `records`; until then the viewer shows "Loading…".
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gantt_config::{Config, Session};
    /// use gantt_protocol::dummy::sample_records;
    /// use gantt_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let (tx, rx) = tokio::sync::oneshot::channel();
    ///     let _ = tx.send(Ok(sample_records()));
    ///
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Config::default(), Session::with_token("demo"));
    ///     let result = app.run(&mut terminal, rx).await;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     result
    /// }
    /// ```
    pub async fn run(
        &mut self,
        terminal: &mut AppTerminal,
        records: RecordReceiver,
    ) -> anyhow::Result<()> {
        let _mouse = MouseCapture::acquire()?;
        let mut records = Some(records);

        loop {
            if let Some(load) = poll_records(&mut records) {
                self.receive_records(load);
            }

            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let msg = if self.session.is_authenticated() {
                    event_to_message(&event)
                } else {
                    login_event_to_message(&event)
                };
                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Takes the loader's result once it is ready.
fn poll_records(receiver: &mut Option<RecordReceiver>) -> Option<RecordLoad> {
    let load = match receiver.as_mut()?.try_recv() {
        Ok(load) => load,
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Closed) => Err(anyhow::anyhow!(
            "record loader stopped before delivering any records"
        )),
    };
    *receiver = None;
    Some(load)
}

/// The area above the status bar.
fn content_area(area: Rect) -> Rect {
    let [content, _status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)]).areas(area);
    content
}
