//! Core type definitions for the desktop
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// IDs are never reused within a `DesktopController` instance, so a
/// closed window's ID can't alias a newer window.
pub type WindowId = u64;

/// Unique desktop icon identifier
pub type IconId = u32;

/// Stacking value assigned to a window when it gains focus
pub type ZIndex = u64;
