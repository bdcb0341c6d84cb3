//! Pointer event routing

use super::DesktopController;
use crate::background::Menu;
use crate::input::{InputResult, Modifiers, PointerMode, PointerTarget, TitleButton};
use crate::math::{Rect, Vec2};
use crate::types::{IconId, WindowId};
use crate::window::{ResizeHandle, WindowOverrides};

impl DesktopController {
    /// Classify what lies under `point`: the topmost window's chrome or
    /// body, else an icon, else the bare desktop
    pub fn hit_test(&self, point: Vec2) -> PointerTarget {
        if let Some(window) = self.windows.top_at(point) {
            return PointerTarget::in_window(window, point, &self.config.frame);
        }
        if let Some(icon) = self.icons.icon_at(point) {
            return PointerTarget::Icon { icon: icon.id };
        }
        PointerTarget::Desktop
    }

    /// Hit-test `pos` and handle the press on whatever is there
    pub fn handle_pointer_down_at(
        &mut self,
        pos: Vec2,
        modifiers: Modifiers,
        now_ms: f64,
    ) -> InputResult {
        let target = self.hit_test(pos);
        self.handle_pointer_down(target, pos, modifiers, now_ms)
    }

    /// Handle a primary-button press on `target`
    pub fn handle_pointer_down(
        &mut self,
        target: PointerTarget,
        pos: Vec2,
        modifiers: Modifiers,
        now_ms: f64,
    ) -> InputResult {
        if !self.mode.is_idle() {
            tracing::debug!(mode = self.mode.name(), "press during gesture, ending it");
            self.finish_gesture();
        }

        match target {
            PointerTarget::Desktop => self.start_rubber_band(pos, modifiers),
            PointerTarget::Icon { icon } => self.press_icon(icon, pos, modifiers),
            PointerTarget::WindowBody { window } => self.focus_or_unhandled(window),
            PointerTarget::TitleBar { window } => self.press_title_bar(window, pos, now_ms),
            PointerTarget::TitleButton { window, button } => self.press_title_button(window, button),
            PointerTarget::ResizeHandle { window, handle } => {
                self.press_resize_handle(window, handle, pos)
            }
        }
    }

    /// Handle pointer movement; only the gesture in progress reacts
    pub fn handle_pointer_move(&mut self, pos: Vec2) -> InputResult {
        let viewport = self.viewport;
        match &mut self.mode {
            PointerMode::Idle => InputResult::Unhandled,
            PointerMode::DraggingWindow { window_id } => {
                let id = *window_id;
                match self.windows.get_mut(id) {
                    Some(window) => {
                        window.drag(pos, viewport);
                        tracing::trace!(window = id, x = window.position.x, y = window.position.y, "drag");
                        InputResult::Handled
                    }
                    None => self.abandon_gesture(id),
                }
            }
            PointerMode::ResizingWindow { window_id } => {
                let id = *window_id;
                match self.windows.get_mut(id) {
                    Some(window) => {
                        window.resize(pos, viewport);
                        tracing::trace!(window = id, w = window.size.width, h = window.size.height, "resize");
                        InputResult::Handled
                    }
                    None => self.abandon_gesture(id),
                }
            }
            PointerMode::RubberBanding {
                anchor,
                additive,
                rect,
            } => {
                let band = Rect::from_corners(*anchor, pos);
                *rect = Some(band);
                self.icons.apply_rubber_band(&band, *additive);
                InputResult::Handled
            }
            PointerMode::DraggingIcons { start, origins, .. } => {
                let delta = pos - *start;
                self.icons.drag_group(origins, delta, viewport);
                InputResult::Handled
            }
        }
    }

    /// Handle pointer release: end the gesture and clear its transient
    /// state. Releasing an icon press counts as a click on it.
    pub fn handle_pointer_up(&mut self, now_ms: f64) -> InputResult {
        let pressed = match &self.mode {
            PointerMode::Idle => return InputResult::Unhandled,
            PointerMode::DraggingIcons { pressed, .. } => Some(*pressed),
            _ => None,
        };
        self.finish_gesture();

        match pressed {
            Some(icon) => self.click_icon(icon, now_ms),
            None => InputResult::Handled,
        }
    }

    // =========================================================================
    // Press handlers
    // =========================================================================

    fn start_rubber_band(&mut self, pos: Vec2, modifiers: Modifiers) -> InputResult {
        if let Some(menu) = self.background.menu_at(pos) {
            tracing::debug!(menu = menu.id(), "menubar press");
            if menu == Menu::File {
                self.background.toggle_file_menu();
            }
        }
        let additive = modifiers.additive();
        if !additive {
            self.icons.clear_selection();
        }
        self.set_mode(PointerMode::RubberBanding {
            anchor: pos,
            additive,
            rect: None,
        });
        InputResult::Handled
    }

    fn press_icon(&mut self, icon: IconId, pos: Vec2, modifiers: Modifiers) -> InputResult {
        if let Err(err) = self.icons.press(icon, modifiers.additive()) {
            tracing::debug!(%err, "icon press ignored");
            return InputResult::Unhandled;
        }
        let origins = self.icons.drag_origins(icon);
        self.set_mode(PointerMode::DraggingIcons {
            start: pos,
            origins,
            pressed: icon,
        });
        InputResult::Handled
    }

    fn focus_or_unhandled(&mut self, window: WindowId) -> InputResult {
        match self.windows.focus(window) {
            Ok(_) => InputResult::Handled,
            Err(err) => {
                tracing::debug!(%err, "press on missing window");
                InputResult::Unhandled
            }
        }
    }

    fn press_title_bar(&mut self, window: WindowId, pos: Vec2, now_ms: f64) -> InputResult {
        if self.focus_or_unhandled(window) == InputResult::Unhandled {
            return InputResult::Unhandled;
        }
        if self.title_clicks.click(window, now_ms) {
            if let Err(err) = self.toggle_maximize(window) {
                tracing::debug!(%err, "title double-click ignored");
            }
            return InputResult::Handled;
        }
        let started = self
            .windows
            .get_mut(window)
            .is_some_and(|w| w.start_drag(pos));
        if started {
            self.set_mode(PointerMode::DraggingWindow { window_id: window });
        }
        InputResult::Handled
    }

    fn press_title_button(&mut self, window: WindowId, button: TitleButton) -> InputResult {
        match button {
            TitleButton::Close => match self.close_window(window) {
                Ok(()) => InputResult::ClosedWindow { window_id: window },
                Err(err) => {
                    tracing::debug!(%err, "close ignored");
                    InputResult::Unhandled
                }
            },
            TitleButton::Maximize => {
                if self.focus_or_unhandled(window) == InputResult::Unhandled {
                    return InputResult::Unhandled;
                }
                if let Err(err) = self.toggle_maximize(window) {
                    tracing::debug!(%err, "maximize ignored");
                }
                InputResult::Handled
            }
            // Minimize has no behaviour beyond the focusing press
            TitleButton::Minimize => self.focus_or_unhandled(window),
        }
    }

    fn press_resize_handle(
        &mut self,
        window: WindowId,
        handle: ResizeHandle,
        pos: Vec2,
    ) -> InputResult {
        if self.focus_or_unhandled(window) == InputResult::Unhandled {
            return InputResult::Unhandled;
        }
        let started = self
            .windows
            .get_mut(window)
            .is_some_and(|w| w.start_resize(pos, handle));
        if started {
            tracing::debug!(window, handle = handle.id(), "resize started");
            self.set_mode(PointerMode::ResizingWindow { window_id: window });
        }
        InputResult::Handled
    }

    // =========================================================================
    // Gesture teardown
    // =========================================================================

    fn click_icon(&mut self, icon: IconId, now_ms: f64) -> InputResult {
        if !self.icon_clicks.click(icon, now_ms) {
            return InputResult::Handled;
        }
        let Some(kind) = self.icons.get(icon).map(|i| i.kind) else {
            return InputResult::Handled;
        };
        let window_id = self.create_window(kind, WindowOverrides::default());
        InputResult::OpenedWindow { window_id }
    }

    /// End the current gesture, releasing any window it held
    fn finish_gesture(&mut self) {
        match std::mem::take(&mut self.mode) {
            PointerMode::DraggingWindow { window_id } => {
                if let Some(window) = self.windows.get_mut(window_id) {
                    window.stop_drag();
                }
            }
            PointerMode::ResizingWindow { window_id } => {
                if let Some(window) = self.windows.get_mut(window_id) {
                    window.stop_resize();
                }
            }
            PointerMode::DraggingIcons { origins, .. } if self.config.snap_icons_to_grid => {
                for (id, _) in origins {
                    let Some(position) = self.icons.get(id).map(|i| i.position) else {
                        continue;
                    };
                    let snapped = self.background.snap(position);
                    // The icon was looked up just above
                    let _ = self.icons.move_to(id, snapped, self.viewport);
                }
            }
            PointerMode::Idle
            | PointerMode::RubberBanding { .. }
            | PointerMode::DraggingIcons { .. } => {}
        }
        tracing::debug!("pointer mode -> idle");
    }

    /// The window a gesture targeted has gone away
    fn abandon_gesture(&mut self, window: WindowId) -> InputResult {
        tracing::debug!(window, "gesture target missing, ending gesture");
        self.set_mode(PointerMode::Idle);
        InputResult::Unhandled
    }
}
