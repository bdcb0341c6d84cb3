use serde::{Deserialize, Serialize};

/// Window chrome metrics used for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub border_width: f32,
    pub resize_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        FRAME_STYLE
    }
}

/// Default frame style (Win98-style title bar with three square buttons)
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 22.0,
    border_width: 2.0,
    resize_handle_size: 6.0,
    button_size: 16.0,
    button_spacing: 2.0,
    button_margin: 4.0,
};
