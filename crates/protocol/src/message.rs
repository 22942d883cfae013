//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use gantt_protocol::Message;
///
/// let msg = Message::PointerDown { column: 40, row: 3 };
/// assert!(msg.is_pointer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Escape: close the help overlay or clear the login input (contextual).
    Escape,
    /// Toggle help overlay.
    ToggleHelp,
    /// Move the row cursor up, scrolling both panels if needed.
    CursorUp,
    /// Move the row cursor down, scrolling both panels if needed.
    CursorDown,
    /// Scroll both panels up by one row without moving the cursor.
    ScrollUp,
    /// Scroll both panels down by one row without moving the cursor.
    ScrollDown,
    /// Scroll the timeline towards earlier dates.
    ScrollLeft,
    /// Scroll the timeline towards later dates.
    ScrollRight,

    // --- Divider messages ---
    /// Pointer (mouse button or touch) pressed at coordinates.
    PointerDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved while a button or touch is held.
    PointerMove {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Pointer released anywhere on screen.
    PointerUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
    /// Move the divider by a number of columns.
    NudgeDivider {
        /// Columns to move by (positive = right).
        delta: i32,
    },
    /// Give the whole width to the task list.
    ShowTableOnly,
    /// Give the whole width to the timeline.
    ShowChartOnly,
    /// Restore the even split between the panels.
    ResetSplit,
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    // --- Login messages ---
    /// Input a character into the password prompt.
    LoginInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the password prompt.
    LoginBackspace,
    /// Submit the password prompt.
    LoginSubmit,
}

impl Message {
    /// Returns `true` if this message comes from a pointer gesture.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_protocol::Message;
    ///
    /// assert!(Message::PointerUp { column: 0, row: 0 }.is_pointer());
    /// assert!(!Message::ResetSplit.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. } | Self::PointerMove { .. } | Self::PointerUp { .. }
        )
    }

    /// Returns `true` if this message changes the split between the panels.
    #[must_use]
    pub fn is_divider(&self) -> bool {
        self.is_pointer()
            || matches!(
                self,
                Self::NudgeDivider { .. }
                    | Self::ShowTableOnly
                    | Self::ShowChartOnly
                    | Self::ResetSplit
            )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantt_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message belongs to the login prompt.
    #[must_use]
    pub fn is_login(&self) -> bool {
        matches!(
            self,
            Self::LoginInput { .. } | Self::LoginBackspace | Self::LoginSubmit
        )
    }
}
