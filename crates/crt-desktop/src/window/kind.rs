use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use crate::math::{Size, Vec2};

/// The kinds of window the desktop can open
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// Command prompt over the static filesystem
    Terminal,
    /// Static about-me panel
    About,
}

impl WindowKind {
    /// Get all window kinds
    pub fn all() -> &'static [WindowKind] {
        &[WindowKind::Terminal, WindowKind::About]
    }

    /// Get the string ID for this kind
    pub fn id(&self) -> &'static str {
        match self {
            WindowKind::Terminal => "terminal",
            WindowKind::About => "about",
        }
    }

    /// Label shown under the desktop icon
    pub fn label(&self) -> &'static str {
        match self {
            WindowKind::Terminal => "Terminal",
            WindowKind::About => "About Me",
        }
    }

    /// Parse from string ID (e.g., "terminal", "about")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "terminal" => Some(WindowKind::Terminal),
            "about" => Some(WindowKind::About),
            _ => None,
        }
    }
}

impl FromStr for WindowKind {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| DesktopError::UnknownWindowKind(s.to_string()))
    }
}

/// Chrome defaults used when a window of some kind is opened.
///
/// The n-th window of a kind is placed at `base_position + n * cascade_step`
/// on both axes so successive windows fan out diagonally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowTemplate {
    pub title: String,
    pub size: Size,
    pub base_position: Vec2,
    pub cascade_step: f32,
}

impl WindowTemplate {
    /// Built-in template for a kind
    pub fn builtin(kind: WindowKind) -> Self {
        match kind {
            WindowKind::Terminal => Self {
                title: "Terminal".to_string(),
                size: Size::new(600.0, 500.0),
                base_position: Vec2::new(100.0, 50.0),
                cascade_step: 30.0,
            },
            WindowKind::About => Self {
                title: "About Me".to_string(),
                size: Size::new(400.0, 350.0),
                base_position: Vec2::new(150.0, 80.0),
                cascade_step: 25.0,
            },
        }
    }

    /// Position of the `index`-th cascaded window
    pub fn cascade_position(&self, index: u32) -> Vec2 {
        let offset = self.cascade_step * index as f32;
        self.base_position + Vec2::new(offset, offset)
    }
}
