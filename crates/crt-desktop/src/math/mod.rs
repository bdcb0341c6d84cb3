//! Core geometry types for the desktop
//!
//! All coordinates are client pixels with the origin at the top-left
//! corner of the viewport, matching pointer event `clientX`/`clientY`.

mod grid;
mod rect;
mod size;
mod style;
mod vec2;

pub use grid::{clamp_axis, snap_to_grid};
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
