//! Application state management.
//!
//! This module defines the state that lives outside the chart itself: the
//! help overlay, the status message, and the login prompt.

use std::fmt;

/// Text typed into the login prompt.
///
/// The buffer never shows up in `Debug` output.
#[derive(Default, Clone)]
pub struct LoginState {
    input: String,
    /// Shown under the prompt after a rejected attempt.
    pub error: Option<String>,
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("input", &"[REDACTED]")
            .field("error", &self.error)
            .finish()
    }
}

impl LoginState {
    /// Appends a character to the input.
    pub fn push(&mut self, ch: char) {
        self.input.push(ch);
        self.error = None;
    }

    /// Removes the last character of the input.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Clears the input and any error.
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Takes the input, leaving the prompt empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Number of characters typed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.input.chars().count()
    }

    /// Returns `true` if nothing has been typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// The input with every character masked.
    #[must_use]
    pub fn masked(&self) -> String {
        "•".repeat(self.len())
    }
}

/// The application state.
///
/// Chart state (records, split, scroll) lives in
/// [`ViewerShell`](crate::shell::ViewerShell).
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Message shown in the status bar instead of the record count.
    pub status: Option<String>,
    /// The login prompt.
    pub login: LoginState,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_tui::AppState;
    ///
    /// let state = AppState::new();
    /// assert!(!state.help_visible);
    /// assert!(state.login.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    ///
    /// When help is shown, other interactions are blocked until
    /// help is dismissed.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed,
    /// `false` if help was not visible.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }
}
