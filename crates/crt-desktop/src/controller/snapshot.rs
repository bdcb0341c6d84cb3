//! Serializable view of the desktop for the host page

use serde::Serialize;

use super::DesktopController;
use crate::background::GridSnapshot;
use crate::error::{DesktopError, DesktopResult};
use crate::icons::DesktopIcon;
use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, ZIndex};
use crate::window::{Window, WindowKind, WindowTransform};

/// Window with everything the page needs to position its element
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    /// On-screen frame
    pub rect: Rect,
    /// Anchor position as set on the element (`left`/`top`)
    pub position: Vec2,
    pub size: Size,
    pub transform: WindowTransform,
    pub z_index: ZIndex,
    pub active: bool,
    pub maximized: bool,
    pub dragging: bool,
    pub resizing: bool,
}

impl WindowView {
    fn new(window: &Window, active: bool) -> Self {
        Self {
            id: window.id,
            kind: window.kind,
            title: window.title.clone(),
            rect: window.rect(),
            position: window.position,
            size: window.size,
            transform: window.transform,
            z_index: window.z_index,
            active,
            maximized: window.is_maximized(),
            dragging: window.is_dragging(),
            resizing: window.is_resizing(),
        }
    }
}

/// Full desktop state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopSnapshot {
    pub viewport: Size,
    /// Windows in creation order
    pub windows: Vec<WindowView>,
    pub icons: Vec<DesktopIcon>,
    pub selection: Option<Rect>,
    pub mode: &'static str,
    pub active: Option<WindowId>,
}

impl DesktopController {
    /// Capture windows, icons and the selection rectangle
    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            viewport: self.viewport,
            windows: self
                .windows
                .iter()
                .map(|w| WindowView::new(w, self.windows.is_active(w.id)))
                .collect(),
            icons: self.icons.iter().cloned().collect(),
            selection: self.selection_rect(),
            mode: self.mode.name(),
            active: self.windows.active(),
        }
    }

    /// Desktop snapshot as JSON
    pub fn snapshot_json(&self) -> DesktopResult<String> {
        serde_json::to_string(&self.snapshot())
            .map_err(|e| DesktopError::SerializationError(e.to_string()))
    }

    /// Background grid snapshot as JSON
    pub fn grid_json(&self) -> DesktopResult<String> {
        let grid: GridSnapshot = self.background.snapshot();
        serde_json::to_string(&grid).map_err(|e| DesktopError::SerializationError(e.to_string()))
    }
}
