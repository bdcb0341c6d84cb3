//! Resize handles and the resize geometry they drive

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use crate::math::{Rect, Size, Vec2};

/// Which window edges a handle moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

/// One of the eight resize grips around a window frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// All handles, edges first
    pub fn all() -> &'static [ResizeHandle] {
        &[
            ResizeHandle::Top,
            ResizeHandle::Bottom,
            ResizeHandle::Left,
            ResizeHandle::Right,
            ResizeHandle::TopLeft,
            ResizeHandle::TopRight,
            ResizeHandle::BottomLeft,
            ResizeHandle::BottomRight,
        ]
    }

    /// The edges this handle drags
    pub const fn edges(self) -> HandleEdges {
        let (left, right, top, bottom) = match self {
            ResizeHandle::Top => (false, false, true, false),
            ResizeHandle::Bottom => (false, false, false, true),
            ResizeHandle::Left => (true, false, false, false),
            ResizeHandle::Right => (false, true, false, false),
            ResizeHandle::TopLeft => (true, false, true, false),
            ResizeHandle::TopRight => (false, true, true, false),
            ResizeHandle::BottomLeft => (true, false, false, true),
            ResizeHandle::BottomRight => (false, true, false, true),
        };
        HandleEdges {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Handle for a set of edges, `None` for no edges or opposing edges
    pub fn from_edges(edges: HandleEdges) -> Option<Self> {
        if (edges.left && edges.right) || (edges.top && edges.bottom) {
            return None;
        }
        match (edges.left, edges.right, edges.top, edges.bottom) {
            (false, false, true, false) => Some(ResizeHandle::Top),
            (false, false, false, true) => Some(ResizeHandle::Bottom),
            (true, false, false, false) => Some(ResizeHandle::Left),
            (false, true, false, false) => Some(ResizeHandle::Right),
            (true, false, true, false) => Some(ResizeHandle::TopLeft),
            (false, true, true, false) => Some(ResizeHandle::TopRight),
            (true, false, false, true) => Some(ResizeHandle::BottomLeft),
            (false, true, false, true) => Some(ResizeHandle::BottomRight),
            _ => None,
        }
    }

    /// Handle under `point` when it lies within `band` pixels of the frame edge
    pub fn at(frame: &Rect, point: Vec2, band: f32) -> Option<Self> {
        if !frame.contains(point) {
            return None;
        }
        Self::from_edges(HandleEdges {
            left: point.x < frame.x + band,
            right: point.x >= frame.right() - band,
            top: point.y < frame.y + band,
            bottom: point.y >= frame.bottom() - band,
        })
    }

    /// Stable identifier, matching the handle class names in the window chrome
    pub fn id(self) -> &'static str {
        match self {
            ResizeHandle::Top => "top",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::Left => "left",
            ResizeHandle::Right => "right",
            ResizeHandle::TopLeft => "top-left",
            ResizeHandle::TopRight => "top-right",
            ResizeHandle::BottomLeft => "bottom-left",
            ResizeHandle::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for ResizeHandle {
    type Err = DesktopError;

    /// Accepts class names (`"top-left"`) and compass names (`"nw"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" | "n" => Ok(ResizeHandle::Top),
            "bottom" | "s" => Ok(ResizeHandle::Bottom),
            "left" | "w" => Ok(ResizeHandle::Left),
            "right" | "e" => Ok(ResizeHandle::Right),
            "top-left" | "nw" => Ok(ResizeHandle::TopLeft),
            "top-right" | "ne" => Ok(ResizeHandle::TopRight),
            "bottom-left" | "sw" => Ok(ResizeHandle::BottomLeft),
            "bottom-right" | "se" => Ok(ResizeHandle::BottomRight),
            _ => Err(DesktopError::UnknownResizeHandle(s.to_string())),
        }
    }
}

/// Compute the frame produced by dragging `handle` by `delta` from `start`.
///
/// Dragged edges respect `min_size`; left/top drags move the origin so
/// the opposite edge stays put. The result is then cut to the viewport:
/// overflow past the left/top edge shrinks the window and pins it at 0,
/// overflow past the right/bottom edge shrinks it in place.
pub fn calculate_resize(
    handle: ResizeHandle,
    start: Rect,
    delta: Vec2,
    min_size: Size,
    viewport: Size,
) -> Rect {
    let edges = handle.edges();

    let mut left = start.x;
    let mut top = start.y;
    let mut width = start.width;
    let mut height = start.height;

    if edges.right {
        width = (start.width + delta.x).max(min_size.width);
    }
    if edges.left {
        width = (start.width - delta.x).max(min_size.width);
        left = start.x + (start.width - width);
    }
    if edges.bottom {
        height = (start.height + delta.y).max(min_size.height);
    }
    if edges.top {
        height = (start.height - delta.y).max(min_size.height);
        top = start.y + (start.height - height);
    }

    if left < 0.0 {
        width += left;
        left = 0.0;
    }
    if top < 0.0 {
        height += top;
        top = 0.0;
    }
    if left + width > viewport.width {
        width = viewport.width - left;
    }
    if top + height > viewport.height {
        height = viewport.height - top;
    }

    Rect::new(left, top, width, height)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_handle() -> impl Strategy<Value = ResizeHandle> {
        prop::sample::select(ResizeHandle::all().to_vec())
    }

    proptest! {
        /// A frame that starts inside the viewport at or above the minimum
        /// stays inside and at or above the minimum for any drag delta
        #[test]
        fn resize_respects_minimum_and_viewport(
            handle in any_handle(),
            x in 0.0f32..800.0,
            y in 0.0f32..400.0,
            w in 400.0f32..1100.0,
            h in 300.0f32..680.0,
            dx in -3000.0f32..3000.0,
            dy in -3000.0f32..3000.0,
        ) {
            let viewport = Size::new(1920.0, 1080.0);
            let min = Size::new(400.0, 300.0);
            let start = Rect::new(x, y, w, h);
            prop_assume!(start.is_inside(viewport));

            let out = calculate_resize(handle, start, Vec2::new(dx, dy), min, viewport);

            prop_assert!(out.width >= min.width - 0.01, "width {} < min", out.width);
            prop_assert!(out.height >= min.height - 0.01, "height {} < min", out.height);
            prop_assert!(out.x >= 0.0 && out.y >= 0.0);
            prop_assert!(out.right() <= viewport.width + 0.01);
            prop_assert!(out.bottom() <= viewport.height + 0.01);
        }
    }
}
