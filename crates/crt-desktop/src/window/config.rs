//! Window configuration for creation

use serde::{Deserialize, Serialize};

use super::{WindowKind, WindowTemplate, WindowTransform};
use crate::math::{Size, Vec2};

/// Fully resolved configuration for creating a window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// What the window hosts
    pub kind: WindowKind,
    /// Window title
    pub title: String,
    /// Initial anchor position (top-left, or centre for `Centered`)
    pub position: Vec2,
    /// Initial size
    pub size: Size,
    /// Minimum size enforced while resizing
    pub min_size: Size,
    /// How `position` anchors the frame
    pub transform: WindowTransform,
}

impl WindowConfig {
    /// Resolve a template at a cascade position, then apply overrides
    pub fn from_template(
        kind: WindowKind,
        template: &WindowTemplate,
        position: Vec2,
        min_size: Size,
        overrides: WindowOverrides,
    ) -> Self {
        Self {
            kind,
            title: overrides.title.unwrap_or_else(|| template.title.clone()),
            position: overrides.position.unwrap_or(position),
            size: overrides.size.unwrap_or(template.size),
            min_size,
            transform: overrides.transform.unwrap_or_default(),
        }
    }
}

/// Per-call style overrides for `create_window`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOverrides {
    pub title: Option<String>,
    pub position: Option<Vec2>,
    pub size: Option<Size>,
    pub transform: Option<WindowTransform>,
}
