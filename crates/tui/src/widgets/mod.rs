//! Widget components for the gantt TUI.
//!
//! Each widget renders a piece of state into a buffer and holds no state of
//! its own, which keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`task_list`]: The left panel, one column per configured field
//! - [`timeline`]: The right panel, date header and one bar per record
//! - [`divider`]: The draggable rule between the panels
//! - [`status_bar`]: The footer with record count and help cue
//! - [`help`]: The key binding overlay
//! - [`login`]: The password prompt
//! - [`placeholder`]: Centered messages such as "Loading…"
//!
//! # Bar Colors
//!
//! Bars use the record's `color` when it parses (`rgb(r, g, b)`, `#rrggbb`,
//! or a named color), and `rgb(85, 155, 241)` otherwise.

pub mod divider;
pub mod help;
pub mod login;
pub mod placeholder;
pub mod status_bar;
pub mod task_list;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use divider::render_divider;
pub use help::render_help_overlay;
pub use login::render_login_prompt;
pub use placeholder::render_placeholder;
pub use status_bar::render_status_bar;
pub use task_list::render_task_list;
pub use timeline::{Timeline, parse_color};
