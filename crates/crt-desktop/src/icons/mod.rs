//! Desktop icons
//!
//! Icons, the selection set with rubber-band and group-drag updates,
//! and double-click detection.

mod click;
mod icon;
mod set;

pub use click::ClickTracker;
pub use icon::DesktopIcon;
pub use set::IconSet;
