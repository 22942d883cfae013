//! Pointer-driven resizing of the split between the two panels.
//!
//! The resizer tracks the left panel width and a two-state drag machine:
//!
//! ```text
//!            press on divider
//!   Idle ───────────────────────▶ Dragging { anchor_pointer_x, anchor_panel_width }
//!    ▲                                │
//!    └──────── release anywhere ──────┘   move: left = anchor_panel_width + (x - anchor_pointer_x)
//! ```
//!
//! Widths are not clamped here. A drag past either edge yields a width
//! outside the container; the shell clamps when it turns widths into
//! rectangles.

/// Drag state of the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeState {
    /// No drag in progress. Pointer moves are ignored.
    #[default]
    Idle,
    /// A drag started on the divider.
    Dragging {
        /// Pointer column at the time of the press.
        anchor_pointer_x: i32,
        /// Left panel width at the time of the press.
        anchor_panel_width: i32,
    },
}

/// Owns the left panel width and the drag state machine.
///
/// # Examples
///
/// ```
/// use gantt_tui::resize::PanelResizer;
///
/// let mut resizer = PanelResizer::new();
/// resizer.mount(800);
/// assert_eq!(resizer.left_width(), Some(400));
///
/// assert!(resizer.press(100));
/// resizer.drag(150);
/// resizer.release();
/// assert_eq!(resizer.left_width(), Some(450));
/// assert_eq!(resizer.right_width(800), Some(350));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PanelResizer {
    state: ResizeState,
    left_width: Option<i32>,
}

impl PanelResizer {
    /// Creates a resizer that has not been laid out yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial even split for a container `container_width` wide.
    ///
    /// Only the first call has an effect.
    pub fn mount(&mut self, container_width: i32) {
        if self.left_width.is_none() {
            self.left_width = Some(container_width / 2);
            tracing::debug!(container_width, "divider mounted");
        }
    }

    /// Returns `true` once the initial split is known.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.left_width.is_some()
    }

    /// Returns the drag state.
    #[must_use]
    pub fn state(&self) -> ResizeState {
        self.state
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ResizeState::Dragging { .. })
    }

    /// Returns the left panel width, or `None` before mounting.
    #[must_use]
    pub fn left_width(&self) -> Option<i32> {
        self.left_width
    }

    /// Returns the space left over for the right panel.
    #[must_use]
    pub fn right_width(&self, container_width: i32) -> Option<i32> {
        self.left_width.map(|left| container_width - left)
    }

    /// Starts a drag at pointer column `x`.
    ///
    /// Returns `false` (and stays idle) if the divider has not been laid out.
    pub fn press(&mut self, x: i32) -> bool {
        let Some(anchor_panel_width) = self.left_width else {
            return false;
        };
        self.state = ResizeState::Dragging {
            anchor_pointer_x: x,
            anchor_panel_width,
        };
        true
    }

    /// Moves the divider with the pointer. Returns `true` if the width
    /// changed.
    pub fn drag(&mut self, x: i32) -> bool {
        let ResizeState::Dragging {
            anchor_pointer_x,
            anchor_panel_width,
        } = self.state
        else {
            return false;
        };
        let new_left = anchor_panel_width + (x - anchor_pointer_x);
        let changed = self.left_width != Some(new_left);
        self.left_width = Some(new_left);
        changed
    }

    /// Ends any drag in progress.
    pub fn release(&mut self) {
        if self.is_dragging() {
            tracing::trace!(left_width = ?self.left_width, "divider released");
        }
        self.state = ResizeState::Idle;
    }

    /// Sets the left panel width directly.
    pub fn set_left_width(&mut self, width: i32) {
        self.left_width = Some(width);
    }

    /// Moves the divider by `delta` columns. Does nothing before mounting.
    pub fn nudge(&mut self, delta: i32) {
        if let Some(left) = self.left_width.as_mut() {
            *left += delta;
        }
    }
}
