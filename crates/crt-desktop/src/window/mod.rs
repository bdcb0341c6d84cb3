//! Window management module
//!
//! Provides the window entity with its drag / resize / maximize state
//! machine, resize handles, window kinds and the registry that owns
//! focus and z-order.

mod config;
mod handle;
mod kind;
mod manager;
#[allow(clippy::module_inception)]
mod window;

pub use config::{WindowConfig, WindowOverrides};
pub use handle::{calculate_resize, HandleEdges, ResizeHandle};
pub use kind::{WindowKind, WindowTemplate};
pub use manager::WindowManager;
pub use window::{Geometry, Gesture, Window, WindowState, WindowTransform};

pub use crate::types::WindowId;
