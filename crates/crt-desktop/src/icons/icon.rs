use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use crate::types::IconId;
use crate::window::WindowKind;

/// A launcher on the desktop surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: IconId,
    /// Window kind opened on double-click
    pub kind: WindowKind,
    pub label: String,
    /// Top-left corner in client pixels
    pub position: Vec2,
    pub size: Size,
    pub selected: bool,
}

impl DesktopIcon {
    pub fn new(id: IconId, kind: WindowKind, position: Vec2, size: Size) -> Self {
        Self {
            id,
            kind,
            label: kind.label().to_string(),
            position,
            size,
            selected: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}
