//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components. Both chart panels read their row geometry
//! from here so their rows line up.

/// Height of the status bar in rows.
///
/// The status bar displays the title, record count, and help cue.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows taken by the header line of each panel (column names over the task
/// list, date ticks over the timeline).
pub const PANEL_HEADER_ROWS: u16 = 1;

/// Width of the divider between the two panels, in columns.
pub const DIVIDER_WIDTH: u16 = 1;

/// Columns the timeline scrolls per step.
pub const HORIZONTAL_SCROLL_STEP: u16 = 8;

/// Widest a task-list column grows to fit its content.
pub const MAX_COLUMN_WIDTH: u16 = 30;

/// Gap between task-list columns.
pub const COLUMN_SPACING: u16 = 1;

/// Minimum terminal height for useful rendering.
///
/// One panel header, one chart row, and the status bar.
pub const MIN_HEIGHT: u16 = PANEL_HEADER_ROWS + 1 + STATUS_BAR_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 24;
