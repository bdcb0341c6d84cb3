//! CRT background
//!
//! A character grid behind the windows with a menubar in the first row,
//! random blinking cells and a rolling scanline.

mod cell;
mod grid;

pub use cell::{Cell, CellKind, Menu};
pub use grid::{CellView, CrtGrid, GridSnapshot};

use serde::{Deserialize, Serialize};

/// Background grid timing and layout
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    /// Chance per cell per blink step of starting a blink
    pub blink_probability: f64,
    pub blink_interval_ms: f64,
    /// How long a blinking cell shows `*`
    pub blink_duration_ms: f64,
    pub scanline_interval_ms: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            blink_probability: 0.003,
            blink_interval_ms: 200.0,
            blink_duration_ms: 100.0,
            scanline_interval_ms: 100.0,
        }
    }
}
