//! Icon collection and the selection operations on it

use super::DesktopIcon;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size, Vec2};
use crate::types::IconId;
use crate::window::WindowKind;

/// Every icon on the desktop, in creation order
#[derive(Clone, Debug, Default)]
pub struct IconSet {
    icons: Vec<DesktopIcon>,
    next_id: IconId,
}

impl IconSet {
    pub fn new() -> Self {
        Self {
            icons: Vec::new(),
            next_id: 1,
        }
    }

    /// Place a new icon and return its ID
    pub fn add(&mut self, kind: WindowKind, position: Vec2, size: Size) -> IconId {
        let id = self.next_id;
        self.next_id += 1;
        self.icons.push(DesktopIcon::new(id, kind, position, size));
        id
    }

    pub fn get(&self, id: IconId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: IconId) -> DesktopResult<&mut DesktopIcon> {
        self.icons
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DesktopError::IconNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesktopIcon> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Last-added icon whose frame contains `point`
    pub fn icon_at(&self, point: Vec2) -> Option<&DesktopIcon> {
        self.icons.iter().rev().find(|i| i.rect().contains(point))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn is_selected(&self, id: IconId) -> bool {
        self.get(id).is_some_and(|i| i.selected)
    }

    /// IDs of the selected icons, in creation order
    pub fn selected_ids(&self) -> Vec<IconId> {
        self.icons
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.id)
            .collect()
    }

    pub fn select(&mut self, id: IconId) -> DesktopResult<()> {
        self.get_mut(id)?.selected = true;
        Ok(())
    }

    pub fn deselect(&mut self, id: IconId) -> DesktopResult<()> {
        self.get_mut(id)?.selected = false;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for icon in &mut self.icons {
            icon.selected = false;
        }
    }

    /// Selection change for a press on `id`.
    ///
    /// A press on an unselected icon replaces the selection, or joins it
    /// when `additive`. A press on a selected icon leaves the selection
    /// alone so the whole group can be dragged.
    pub fn press(&mut self, id: IconId, additive: bool) -> DesktopResult<()> {
        if self.get(id).ok_or(DesktopError::IconNotFound(id))?.selected {
            return Ok(());
        }
        if !additive {
            self.clear_selection();
        }
        self.select(id)
    }

    /// Apply a rubber-band rectangle.
    ///
    /// Icons strictly overlapping `band` become selected. The rest are
    /// deselected unless `additive`, in which case they keep their state.
    pub fn apply_rubber_band(&mut self, band: &Rect, additive: bool) {
        for icon in &mut self.icons {
            if icon.rect().intersects(band) {
                icon.selected = true;
            } else if !additive {
                icon.selected = false;
            }
        }
    }

    // =========================================================================
    // Group drag
    // =========================================================================

    /// Start positions of the icons a drag from `pressed` carries along:
    /// every selected icon, or just `pressed` when nothing is selected.
    pub fn drag_origins(&self, pressed: IconId) -> Vec<(IconId, Vec2)> {
        let selected: Vec<(IconId, Vec2)> = self
            .icons
            .iter()
            .filter(|i| i.selected)
            .map(|i| (i.id, i.position))
            .collect();
        if !selected.is_empty() {
            return selected;
        }
        self.get(pressed)
            .map(|i| vec![(i.id, i.position)])
            .unwrap_or_default()
    }

    /// Move each icon to its origin plus `delta`, clamped independently
    /// into the viewport
    pub fn drag_group(&mut self, origins: &[(IconId, Vec2)], delta: Vec2, viewport: Size) {
        for &(id, origin) in origins {
            let Some(icon) = self.icons.iter_mut().find(|i| i.id == id) else {
                continue;
            };
            let moved = Rect::from_pos_size(origin + delta, icon.size).clamped_to(viewport);
            icon.position = moved.position();
        }
    }

    /// Place one icon, clamped into the viewport
    pub fn move_to(&mut self, id: IconId, position: Vec2, viewport: Size) -> DesktopResult<()> {
        let icon = self.get_mut(id)?;
        icon.position = Rect::from_pos_size(position, icon.size)
            .clamped_to(viewport)
            .position();
        Ok(())
    }

    /// Pull every icon back inside a (possibly smaller) viewport
    pub fn fit_to_viewport(&mut self, viewport: Size) {
        for icon in &mut self.icons {
            icon.position = icon.rect().clamped_to(viewport).position();
        }
    }
}
