//! Window registry: creation order, z-order and focus

use super::{Window, WindowConfig};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use crate::types::{WindowId, ZIndex};

/// Owns every open window
///
/// Windows are kept in creation order. Stacking is decided by each
/// window's `z_index`; focusing hands out the next value of a counter
/// that only ever grows, so the focused window always ends up on top.
pub struct WindowManager {
    windows: Vec<Window>,
    next_id: WindowId,
    /// Last z-index handed out
    top_z: ZIndex,
    active: Option<WindowId>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(10)
    }
}

impl WindowManager {
    /// Create an empty registry whose first focus yields `base_z + 1`
    pub fn new(base_z: ZIndex) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            top_z: base_z,
            active: None,
        }
    }

    /// Register a window. It is not focused.
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        tracing::info!(window = id, kind = config.kind.id(), "window created");
        self.windows.push(Window::new(id, config));
        id
    }

    /// Remove a window. Closing the active window leaves none active.
    pub fn close(&mut self, id: WindowId) -> DesktopResult<Window> {
        let index = self
            .windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if self.active == Some(id) {
            self.active = None;
        }
        tracing::info!(window = id, "window closed");
        Ok(self.windows.remove(index))
    }

    /// Raise a window above all others and make it the active one
    pub fn focus(&mut self, id: WindowId) -> DesktopResult<ZIndex> {
        let window = self
            .windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        self.top_z += 1;
        window.z_index = self.top_z;
        self.active = Some(id);
        tracing::debug!(window = id, z = self.top_z, "window focused");
        Ok(self.top_z)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// The active (most recently focused, still open) window
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active == Some(id)
    }

    /// Highest z-index handed out so far
    pub fn top_z(&self) -> ZIndex {
        self.top_z
    }

    /// All windows in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.iter_mut()
    }

    /// Windows from bottom to top. Ties keep creation order.
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut sorted: Vec<&Window> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// Topmost window whose frame contains `point`
    pub fn top_at(&self, point: Vec2) -> Option<&Window> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .find(|w| w.rect().contains(point))
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::window::{WindowKind, WindowTransform};

    fn config_at(x: f32, y: f32) -> WindowConfig {
        WindowConfig {
            kind: WindowKind::About,
            title: "About Me".to_string(),
            position: Vec2::new(x, y),
            size: Size::new(400.0, 350.0),
            min_size: Size::new(400.0, 300.0),
            transform: WindowTransform::None,
        }
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut wm = WindowManager::default();
        let a = wm.create(config_at(0.0, 0.0));
        wm.close(a).unwrap();
        let b = wm.create(config_at(0.0, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_focus_gives_exactly_one_active_with_greater_z() {
        let mut wm = WindowManager::default();
        let a = wm.create(config_at(0.0, 0.0));
        let b = wm.create(config_at(50.0, 50.0));

        wm.focus(a).unwrap();
        assert!(wm.is_active(a));
        wm.focus(b).unwrap();

        assert!(wm.is_active(b));
        assert!(!wm.is_active(a));
        assert!(wm.get(b).unwrap().z_index > wm.get(a).unwrap().z_index);
    }

    #[test]
    fn test_first_focus_starts_above_base() {
        let mut wm = WindowManager::new(10);
        let a = wm.create(config_at(0.0, 0.0));
        assert_eq!(wm.focus(a), Ok(11));
        assert_eq!(wm.focus(a), Ok(12));
    }

    #[test]
    fn test_close_active_clears_active() {
        let mut wm = WindowManager::default();
        let a = wm.create(config_at(0.0, 0.0));
        wm.focus(a).unwrap();
        wm.close(a).unwrap();

        assert_eq!(wm.active(), None);
        assert_eq!(wm.count(), 0);
        assert_eq!(wm.close(a).unwrap_err(), DesktopError::WindowNotFound(a));
    }

    #[test]
    fn test_focus_unknown_window() {
        let mut wm = WindowManager::default();
        assert_eq!(wm.focus(99), Err(DesktopError::WindowNotFound(99)));
        assert_eq!(wm.active(), None);
    }

    #[test]
    fn test_top_at_prefers_highest_z() {
        let mut wm = WindowManager::default();
        let a = wm.create(config_at(0.0, 0.0));
        let b = wm.create(config_at(100.0, 100.0));

        // Unfocused windows tie at z 0; later creation is on top
        assert_eq!(wm.top_at(Vec2::new(150.0, 150.0)).map(|w| w.id), Some(b));

        wm.focus(a).unwrap();
        assert_eq!(wm.top_at(Vec2::new(150.0, 150.0)).map(|w| w.id), Some(a));
        assert_eq!(wm.top_at(Vec2::new(450.0, 420.0)).map(|w| w.id), Some(b));
        assert!(wm.top_at(Vec2::new(900.0, 900.0)).is_none());
    }
}
