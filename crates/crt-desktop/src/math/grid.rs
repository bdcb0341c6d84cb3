//! Scalar helpers shared by window and icon placement

/// Snap a coordinate to the nearest multiple of `grid_size`
#[inline]
pub fn snap_to_grid(value: f32, grid_size: f32) -> f32 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Clamp a start coordinate so `[value, value + extent]` fits in `[0, limit]`.
///
/// When the extent is larger than the limit the result is 0, so the
/// leading edge stays visible.
#[inline]
pub fn clamp_axis(value: f32, extent: f32, limit: f32) -> f32 {
    value.min(limit - extent).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(0.0, 20.0), 0.0);
        assert_eq!(snap_to_grid(9.0, 20.0), 0.0);
        assert_eq!(snap_to_grid(10.0, 20.0), 20.0);
        assert_eq!(snap_to_grid(67.0, 20.0), 60.0);
        assert_eq!(snap_to_grid(-31.0, 20.0), -40.0);
    }

    #[test]
    fn test_snap_to_grid_degenerate_size() {
        assert_eq!(snap_to_grid(13.0, 0.0), 13.0);
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-10.0, 100.0, 800.0), 0.0);
        assert_eq!(clamp_axis(750.0, 100.0, 800.0), 700.0);
        assert_eq!(clamp_axis(300.0, 100.0, 800.0), 300.0);
        assert_eq!(clamp_axis(300.0, 900.0, 800.0), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Snapped values are multiples of the grid and within half a cell
        #[test]
        fn snap_is_nearest_multiple(value in -5000.0f32..5000.0, grid in 1.0f32..64.0) {
            let snapped = snap_to_grid(value, grid);
            let cells = snapped / grid;
            prop_assert!((cells - cells.round()).abs() < 1e-3);
            prop_assert!((snapped - value).abs() <= grid * 0.5 + 1e-3);
        }

        /// Clamped spans stay inside the limit whenever they can
        #[test]
        fn clamp_axis_keeps_span_inside(
            value in -5000.0f32..5000.0,
            extent in 0.0f32..1000.0,
            limit in 1000.0f32..4000.0,
        ) {
            let clamped = clamp_axis(value, extent, limit);
            prop_assert!(clamped >= 0.0);
            prop_assert!(clamped + extent <= limit + 1e-3);
        }
    }
}
