//! Input handling module
//!
//! Pointer target classification, the pointer mode state machine and
//! the results handed back to the host for each event.

mod target;

pub use target::{Modifiers, PointerTarget, TitleButton};

use serde::Serialize;

use crate::math::{Rect, Vec2};
use crate::types::{IconId, WindowId};

/// Active pointer gesture. Exactly one is in effect at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PointerMode {
    #[default]
    Idle,
    /// Title-bar drag of one window
    DraggingWindow { window_id: WindowId },
    /// Handle drag of one window
    ResizingWindow { window_id: WindowId },
    /// Selection rectangle anchored at `anchor`
    RubberBanding {
        anchor: Vec2,
        /// Modifier held at gesture start; outside icons keep their state
        additive: bool,
        /// Current rectangle, `None` until the first move
        rect: Option<Rect>,
    },
    /// Group drag of the selected icons
    DraggingIcons {
        start: Vec2,
        origins: Vec<(IconId, Vec2)>,
        /// Icon under the press; its release counts as a click
        pressed: IconId,
    },
}

impl PointerMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, PointerMode::Idle)
    }

    /// Window receiving drag/resize updates, if any
    pub fn window(&self) -> Option<WindowId> {
        match *self {
            PointerMode::DraggingWindow { window_id } | PointerMode::ResizingWindow { window_id } => {
                Some(window_id)
            }
            _ => None,
        }
    }

    /// Short name for logs and snapshots
    pub fn name(&self) -> &'static str {
        match self {
            PointerMode::Idle => "idle",
            PointerMode::DraggingWindow { .. } => "dragging_window",
            PointerMode::ResizingWindow { .. } => "resizing_window",
            PointerMode::RubberBanding { .. } => "rubber_banding",
            PointerMode::DraggingIcons { .. } => "dragging_icons",
        }
    }
}

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResult {
    /// Input was handled by the desktop
    Handled,
    /// Input was not handled (nothing under the pointer cared)
    Unhandled,
    /// A window was opened (icon double-click)
    OpenedWindow { window_id: WindowId },
    /// A window was closed (close button)
    ClosedWindow { window_id: WindowId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_window() {
        assert_eq!(PointerMode::Idle.window(), None);
        assert_eq!(PointerMode::DraggingWindow { window_id: 4 }.window(), Some(4));
        assert_eq!(PointerMode::ResizingWindow { window_id: 2 }.window(), Some(2));
        let band = PointerMode::RubberBanding {
            anchor: Vec2::ZERO,
            additive: false,
            rect: None,
        };
        assert_eq!(band.window(), None);
        assert_eq!(band.name(), "rubber_banding");
    }

    #[test]
    fn test_input_result_json() {
        let json = serde_json::to_string(&InputResult::OpenedWindow { window_id: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"opened_window","window_id":3}"#);
        let json = serde_json::to_string(&InputResult::Handled).unwrap();
        assert_eq!(json, r#"{"type":"handled"}"#);
    }
}
