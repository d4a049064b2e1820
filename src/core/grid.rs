//! Raster-Snapping für Stage-Koordinaten.

use glam::Vec2;

/// Rastet einen Wert auf das nächstkleinere Vielfache von `grid_size` ein.
///
/// Rastergröße 0 wird als 1 behandelt.
pub fn snap_value(value: f32, grid_size: u32) -> f32 {
    let grid = grid_size.max(1) as f32;
    (value / grid).floor() * grid
}

/// Rastet beide Komponenten einer Stage-Position ein.
pub fn snap_to_grid(position: Vec2, grid_size: u32) -> Vec2 {
    Vec2::new(
        snap_value(position.x, grid_size),
        snap_value(position.y, grid_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn snap_floors_towards_negative_infinity() {
        assert_relative_eq!(snap_value(17.0, 10), 10.0);
        assert_relative_eq!(snap_value(-3.0, 10), -10.0);
        assert_relative_eq!(snap_value(20.0, 10), 20.0);
    }

    #[test]
    fn snapping_is_idempotent() {
        for raw in [-37.5_f32, -0.1, 0.0, 3.3, 99.9, 1234.5] {
            let once = snap_to_grid(Vec2::new(raw, raw * 0.5), 16);
            let twice = snap_to_grid(once, 16);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn grid_size_one_floors_to_integers() {
        let snapped = snap_to_grid(Vec2::new(4.7, -1.2), 1);
        assert_eq!(snapped, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn zero_grid_is_treated_as_one() {
        assert_relative_eq!(snap_value(5.5, 0), 5.0);
    }
}
