//! CRT Desktop core
//!
//! This crate provides the window manager behind a retro browser desktop:
//! - Window management (create, close, focus, z-order)
//! - Window drag, edge/corner resize and maximize/restore
//! - Desktop icons with rubber-band multi-select and group drag
//! - Hit testing and a pointer mode state machine
//! - The CRT character grid drawn behind everything
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`) and clamping
//! - [`window`]: Window entity, resize handles, kinds and the registry
//! - [`icons`]: Desktop icons, selection and double-click detection
//! - [`input`]: Pointer targets, pointer modes and input results
//! - [`background`]: CRT grid layout and effects
//!
//! ## Example
//!
//! ```rust
//! use crt_desktop::{DesktopController, InputResult, Modifiers, Size, Vec2};
//!
//! let mut desktop = DesktopController::with_viewport(Size::new(1280.0, 800.0));
//! desktop.boot();
//!
//! // Drag the terminal by its title bar
//! let down = desktop.handle_pointer_down_at(Vec2::new(600.0, 160.0), Modifiers::default(), 0.0);
//! assert_eq!(down, InputResult::Handled);
//! desktop.handle_pointer_move(Vec2::new(500.0, 100.0));
//! desktop.handle_pointer_up(16.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Double-clicks and effects take `now_ms` from the caller
//! 3. **Small Modules**: Each concern lives in its own file
//! 4. **Minimal Dependencies**: Core types have no browser dependencies

pub mod background;
pub mod icons;
pub mod input;
pub mod math;
pub mod window;

mod config;
mod controller;
mod error;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use background::{CrtGrid, GridConfig, GridSnapshot};
pub use config::DesktopConfig;
pub use controller::{DesktopController, DesktopSnapshot, WindowView};
pub use error::{DesktopError, DesktopResult};
pub use icons::{ClickTracker, DesktopIcon, IconSet};
pub use input::{InputResult, Modifiers, PointerMode, PointerTarget, TitleButton};
pub use math::{snap_to_grid, FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use types::{IconId, WindowId, ZIndex};
pub use window::{
    calculate_resize, Geometry, ResizeHandle, Window, WindowConfig, WindowKind, WindowManager,
    WindowOverrides, WindowState, WindowTemplate, WindowTransform,
};
