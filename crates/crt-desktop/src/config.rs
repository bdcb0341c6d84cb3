//! Desktop configuration
//!
//! Every field has a default matching the stock desktop, so a host only
//! needs to pass the values it wants to change:
//!
//! ```
//! use crt_desktop::DesktopConfig;
//!
//! let config = DesktopConfig::from_json(r#"{"double_click_ms": 450.0}"#).unwrap();
//! assert_eq!(config.double_click_ms, 450.0);
//! assert_eq!(config.base_z_index, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::background::GridConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{FrameStyle, Size, Vec2};
use crate::types::ZIndex;
use crate::window::{WindowKind, WindowTemplate};

/// Tunables for a `DesktopController`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Smallest size a resize may produce
    pub min_window_size: Size,
    /// Maximum gap between two clicks of a double-click
    pub double_click_ms: f64,
    /// z-index counter start; the first focused window gets `base + 1`
    pub base_z_index: ZIndex,
    /// Window chrome metrics for hit testing
    pub frame: FrameStyle,
    pub icon_size: Size,
    /// Top-left of the first boot icon
    pub icon_origin: Vec2,
    /// Vertical distance between boot icons
    pub icon_spacing: f32,
    /// Snap dropped icons to the background grid
    pub snap_icons_to_grid: bool,
    pub terminal: WindowTemplate,
    pub about: WindowTemplate,
    pub grid: GridConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            min_window_size: Size::new(400.0, 300.0),
            double_click_ms: 300.0,
            base_z_index: 10,
            frame: FrameStyle::default(),
            icon_size: Size::new(64.0, 72.0),
            icon_origin: Vec2::new(20.0, 40.0),
            icon_spacing: 90.0,
            snap_icons_to_grid: false,
            terminal: WindowTemplate::builtin(WindowKind::Terminal),
            about: WindowTemplate::builtin(WindowKind::About),
            grid: GridConfig::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DesktopError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the geometry and grid code cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        fn check(ok: bool, field: &'static str, reason: &'static str) -> DesktopResult<()> {
            if ok {
                Ok(())
            } else {
                Err(DesktopError::InvalidConfig { field, reason })
            }
        }

        let cell = self.grid.cell_size;
        check(cell.is_finite() && cell > 0.0, "grid.cell_size", "must be a positive number")?;
        let min = self.min_window_size;
        check(
            min.width.is_finite() && min.height.is_finite() && min.width >= 0.0 && min.height >= 0.0,
            "min_window_size",
            "must not be negative",
        )?;
        check(
            self.double_click_ms.is_finite() && self.double_click_ms >= 0.0,
            "double_click_ms",
            "must not be negative",
        )
    }

    /// Template used when opening a window of `kind`
    pub fn template(&self, kind: WindowKind) -> &WindowTemplate {
        match kind {
            WindowKind::Terminal => &self.terminal,
            WindowKind::About => &self.about,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DesktopConfig::default();
        assert_eq!(config.min_window_size, Size::new(400.0, 300.0));
        assert_eq!(config.double_click_ms, 300.0);
        assert_eq!(config.base_z_index, 10);
        assert_eq!(config.grid.cell_size, 20.0);
        assert_eq!(config.template(WindowKind::Terminal).size, Size::new(600.0, 500.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            DesktopConfig::from_json(r#"{"min_window_size":{"width":200.0,"height":150.0}}"#)
                .unwrap();
        assert_eq!(config.min_window_size, Size::new(200.0, 150.0));
        assert_eq!(config.about, WindowTemplate::builtin(WindowKind::About));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = DesktopConfig::from_json(r#"{"grid":{"cell_size":0.0}}"#).unwrap_err();
        assert_eq!(
            err,
            DesktopError::InvalidConfig {
                field: "grid.cell_size",
                reason: "must be a positive number",
            }
        );

        let err = DesktopConfig::from_json(r#"{"double_click_ms":-1.0}"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig { field: "double_click_ms", .. }));

        let err =
            DesktopConfig::from_json(r#"{"min_window_size":{"width":-5.0,"height":10.0}}"#)
                .unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig { field: "min_window_size", .. }));

        assert_eq!(DesktopConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_json() {
        let err = DesktopConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
