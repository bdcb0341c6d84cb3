//! What a pointer press landed on

use serde::{Deserialize, Serialize};

use crate::math::{FrameStyle, Rect, Vec2};
use crate::types::{IconId, WindowId};
use crate::window::{ResizeHandle, Window};

/// Title-bar buttons, right to left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleButton {
    Close,
    Maximize,
    Minimize,
}

impl TitleButton {
    /// Buttons in slot order from the right edge
    pub fn all() -> &'static [TitleButton] {
        &[TitleButton::Close, TitleButton::Maximize, TitleButton::Minimize]
    }

    fn slot(self) -> usize {
        match self {
            TitleButton::Close => 0,
            TitleButton::Maximize => 1,
            TitleButton::Minimize => 2,
        }
    }

    /// On-screen rectangle of this button for a window frame
    pub fn rect(self, frame: &Rect, style: &FrameStyle) -> Rect {
        let slot = self.slot() as f32;
        let right = frame.right()
            - style.border_width
            - style.button_margin
            - slot * (style.button_size + style.button_spacing);
        let top = frame.y + style.border_width + (style.title_bar_height - style.button_size) * 0.5;
        Rect::new(
            right - style.button_size,
            top,
            style.button_size,
            style.button_size,
        )
    }
}

/// Part of the desktop under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerTarget {
    /// Empty desktop surface
    Desktop,
    Icon { icon: IconId },
    /// Window content area
    WindowBody { window: WindowId },
    TitleBar { window: WindowId },
    TitleButton { window: WindowId, button: TitleButton },
    ResizeHandle { window: WindowId, handle: ResizeHandle },
}

impl PointerTarget {
    /// Window the target belongs to, if any
    pub fn window(&self) -> Option<WindowId> {
        match *self {
            PointerTarget::WindowBody { window }
            | PointerTarget::TitleBar { window }
            | PointerTarget::TitleButton { window, .. }
            | PointerTarget::ResizeHandle { window, .. } => Some(window),
            PointerTarget::Desktop | PointerTarget::Icon { .. } => None,
        }
    }

    /// Classify a point already known to lie inside `window`'s frame
    pub fn in_window(window: &Window, point: Vec2, style: &FrameStyle) -> Self {
        let frame = window.rect();
        let id = window.id;

        if !window.is_maximized() {
            if let Some(handle) = ResizeHandle::at(&frame, point, style.resize_handle_size) {
                return PointerTarget::ResizeHandle { window: id, handle };
            }
        }

        if point.y < frame.y + style.border_width + style.title_bar_height {
            let button = TitleButton::all()
                .iter()
                .copied()
                .find(|b| b.rect(&frame, style).contains(point));
            return match button {
                Some(button) => PointerTarget::TitleButton { window: id, button },
                None => PointerTarget::TitleBar { window: id },
            };
        }

        PointerTarget::WindowBody { window: id }
    }
}

/// Modifier keys held at pointer-down
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS: adds to the selection
    pub fn additive(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, FRAME_STYLE};
    use crate::window::{WindowConfig, WindowKind, WindowTransform};

    fn window() -> Window {
        Window::new(
            5,
            WindowConfig {
                kind: WindowKind::Terminal,
                title: "Terminal".to_string(),
                position: Vec2::new(100.0, 100.0),
                size: Size::new(600.0, 500.0),
                min_size: Size::new(400.0, 300.0),
                transform: WindowTransform::None,
            },
        )
    }

    #[test]
    fn test_title_button_layout() {
        let frame = Rect::new(100.0, 100.0, 600.0, 500.0);
        let close = TitleButton::Close.rect(&frame, &FRAME_STYLE);
        assert_eq!(close, Rect::new(678.0, 105.0, 16.0, 16.0));

        let maximize = TitleButton::Maximize.rect(&frame, &FRAME_STYLE);
        assert_eq!(maximize.right(), close.x - FRAME_STYLE.button_spacing);
    }

    #[test]
    fn test_classify_regions() {
        let w = window();
        let style = FRAME_STYLE;

        assert_eq!(
            PointerTarget::in_window(&w, Vec2::new(102.0, 102.0), &style),
            PointerTarget::ResizeHandle {
                window: 5,
                handle: ResizeHandle::TopLeft
            }
        );
        assert_eq!(
            PointerTarget::in_window(&w, Vec2::new(300.0, 112.0), &style),
            PointerTarget::TitleBar { window: 5 }
        );
        assert_eq!(
            PointerTarget::in_window(&w, Vec2::new(685.0, 112.0), &style),
            PointerTarget::TitleButton {
                window: 5,
                button: TitleButton::Close
            }
        );
        assert_eq!(
            PointerTarget::in_window(&w, Vec2::new(300.0, 300.0), &style),
            PointerTarget::WindowBody { window: 5 }
        );
    }

    #[test]
    fn test_maximized_window_has_no_handles() {
        let mut w = window();
        w.maximize(Size::new(1280.0, 800.0)).unwrap();
        assert_eq!(
            PointerTarget::in_window(&w, Vec2::new(1.0, 1.0), &FRAME_STYLE),
            PointerTarget::TitleBar { window: 5 }
        );
    }

    #[test]
    fn test_target_window() {
        assert_eq!(PointerTarget::TitleBar { window: 3 }.window(), Some(3));
        assert_eq!(PointerTarget::Icon { icon: 1 }.window(), None);
        assert_eq!(PointerTarget::Desktop.window(), None);
    }

    #[test]
    fn test_additive_modifiers() {
        assert!(!Modifiers::default().additive());
        assert!(Modifiers { meta: true, ..Default::default() }.additive());
        assert!(!Modifiers { shift: true, ..Default::default() }.additive());
    }
}
