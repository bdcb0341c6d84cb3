//! Window entity: geometry plus the drag / resize / maximize state machine

use serde::{Deserialize, Serialize};

use super::handle::{calculate_resize, ResizeHandle};
use super::{WindowConfig, WindowKind};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{clamp_axis, Rect, Size, Vec2};
use crate::types::{WindowId, ZIndex};

/// How a window's `position` anchors its frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowTransform {
    /// `position` is the top-left corner
    #[default]
    None,
    /// `position` is the frame centre (`translate(-50%, -50%)`)
    Centered,
}

/// Everything needed to put a window back where it was
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub position: Vec2,
    pub size: Size,
    pub transform: WindowTransform,
}

/// Window display state
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum WindowState {
    /// Free-floating at its own geometry
    Normal,
    /// Filling the viewport; `restore` is the geometry to return to
    Maximized { restore: Geometry },
}

impl WindowState {
    /// Check if the window is maximized
    pub fn is_maximized(&self) -> bool {
        matches!(self, WindowState::Maximized { .. })
    }
}

/// In-progress pointer gesture on a window
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Title-bar drag; `offset` is pointer minus frame origin at grab time
    Dragging { offset: Vec2 },
    /// Handle drag, measured from the grab point and the frame at grab time
    Resizing {
        handle: ResizeHandle,
        start_pointer: Vec2,
        start_frame: Rect,
    },
}

/// A draggable, resizable panel
#[derive(Clone, Debug)]
pub struct Window {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    /// Anchor position, interpreted through `transform`
    pub position: Vec2,
    pub size: Size,
    pub min_size: Size,
    pub transform: WindowTransform,
    /// Stacking order; 0 until the window is focused for the first time
    pub z_index: ZIndex,
    pub state: WindowState,
    gesture: Gesture,
}

impl Window {
    /// Create a window from a resolved config
    pub fn new(id: WindowId, config: WindowConfig) -> Self {
        Self {
            id,
            kind: config.kind,
            title: config.title,
            position: config.position,
            size: config.size,
            min_size: config.min_size,
            transform: config.transform,
            z_index: 0,
            state: WindowState::Normal,
            gesture: Gesture::Idle,
        }
    }

    /// Top-left corner of the frame on screen
    pub fn origin(&self) -> Vec2 {
        self.geometry().origin()
    }

    /// On-screen frame
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.origin(), self.size)
    }

    /// Snapshot of position, size and transform
    pub fn geometry(&self) -> Geometry {
        Geometry {
            position: self.position,
            size: self.size,
            transform: self.transform,
        }
    }

    fn apply_geometry(&mut self, geometry: Geometry) {
        self.position = geometry.position;
        self.size = geometry.size;
        self.transform = geometry.transform;
    }

    /// Replace the anchored position with the on-screen origin
    fn bake_transform(&mut self) {
        self.position = self.origin();
        self.transform = WindowTransform::None;
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    pub fn is_maximized(&self) -> bool {
        self.state.is_maximized()
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Grab the window at `pointer`. Returns false for maximized windows.
    pub fn start_drag(&mut self, pointer: Vec2) -> bool {
        if self.is_maximized() {
            tracing::debug!(window = self.id, "drag ignored: window is maximized");
            return false;
        }
        self.gesture = Gesture::Dragging {
            offset: pointer - self.origin(),
        };
        true
    }

    /// Follow the pointer, keeping the frame inside the viewport.
    /// No-op unless a drag is in progress.
    pub fn drag(&mut self, pointer: Vec2, viewport: Size) -> bool {
        let Gesture::Dragging { offset } = self.gesture else {
            return false;
        };
        let target = pointer - offset;
        self.position = Vec2::new(
            clamp_axis(target.x, self.size.width, viewport.width),
            clamp_axis(target.y, self.size.height, viewport.height),
        );
        self.transform = WindowTransform::None;
        true
    }

    pub fn stop_drag(&mut self) {
        if self.is_dragging() {
            self.gesture = Gesture::Idle;
        }
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Grab `handle` at `pointer`. Returns false for maximized windows.
    pub fn start_resize(&mut self, pointer: Vec2, handle: ResizeHandle) -> bool {
        if self.is_maximized() {
            tracing::debug!(window = self.id, "resize ignored: window is maximized");
            return false;
        }
        self.bake_transform();
        self.gesture = Gesture::Resizing {
            handle,
            start_pointer: pointer,
            start_frame: self.rect(),
        };
        true
    }

    /// Apply the handle drag for the current pointer position.
    /// No-op unless a resize is in progress.
    pub fn resize(&mut self, pointer: Vec2, viewport: Size) -> bool {
        let Gesture::Resizing {
            handle,
            start_pointer,
            start_frame,
        } = self.gesture
        else {
            return false;
        };
        let frame = calculate_resize(
            handle,
            start_frame,
            pointer - start_pointer,
            self.min_size,
            viewport,
        );
        self.position = frame.position();
        self.size = frame.size();
        true
    }

    /// The handle currently held, if any
    pub fn active_handle(&self) -> Option<ResizeHandle> {
        match self.gesture {
            Gesture::Resizing { handle, .. } => Some(handle),
            _ => None,
        }
    }

    pub fn stop_resize(&mut self) {
        if self.is_resizing() {
            self.gesture = Gesture::Idle;
        }
    }

    // =========================================================================
    // Maximize / restore
    // =========================================================================

    /// Fill the viewport, remembering the current geometry
    pub fn maximize(&mut self, viewport: Size) -> DesktopResult<()> {
        if self.is_maximized() {
            return Err(DesktopError::InvalidOperation {
                op: "maximize",
                reason: "window is already maximized",
            });
        }
        self.state = WindowState::Maximized {
            restore: self.geometry(),
        };
        self.apply_geometry(Geometry {
            position: Vec2::ZERO,
            size: viewport,
            transform: WindowTransform::None,
        });
        self.gesture = Gesture::Idle;
        Ok(())
    }

    /// Return to the geometry saved by `maximize`
    pub fn restore(&mut self) -> DesktopResult<()> {
        let WindowState::Maximized { restore } = self.state else {
            return Err(DesktopError::InvalidOperation {
                op: "restore",
                reason: "window is not maximized",
            });
        };
        self.apply_geometry(restore);
        self.state = WindowState::Normal;
        Ok(())
    }

    /// Maximize a normal window or restore a maximized one.
    /// Returns the state after the toggle.
    pub fn toggle_maximize(&mut self, viewport: Size) -> WindowState {
        let result = if self.is_maximized() {
            self.restore()
        } else {
            self.maximize(viewport)
        };
        if let Err(err) = result {
            tracing::debug!(window = self.id, %err, "toggle_maximize absorbed error");
        }
        self.state
    }

    /// Re-establish the containment invariant after the viewport changed
    pub fn fit_to_viewport(&mut self, viewport: Size) {
        if let WindowState::Maximized { restore } = self.state {
            self.state = WindowState::Maximized {
                restore: fit_geometry(restore, viewport),
            };
            self.size = viewport;
            self.position = Vec2::ZERO;
            return;
        }
        let fitted = fit_geometry(self.geometry(), viewport);
        self.apply_geometry(fitted);
    }
}

impl Geometry {
    /// Top-left corner of the frame this geometry describes
    pub fn origin(&self) -> Vec2 {
        match self.transform {
            WindowTransform::None => self.position,
            WindowTransform::Centered => self.position - self.size.as_vec2() * 0.5,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.origin(), self.size)
    }
}

/// Leave `geometry` alone when it fits, else bake its transform and pull
/// it inside the viewport
fn fit_geometry(geometry: Geometry, viewport: Size) -> Geometry {
    let rect = geometry.rect();
    if rect.is_inside(viewport) {
        return geometry;
    }
    let fitted = rect.fitted_to(viewport);
    Geometry {
        position: fitted.position(),
        size: fitted.size(),
        transform: WindowTransform::None,
    }
}
