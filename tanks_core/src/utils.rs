use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Wrap an angle into (-PI, PI]
pub fn normalize_angle(angle: f64) -> f64 {
    // in range values pass through untouched so they stay bit-exact
    if !angle.is_finite() || (angle > -PI && angle <= PI) {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_in_range_values() {
        assert_eq!(normalize_angle(0.5), 0.5);
        assert_eq!(normalize_angle(PI), PI);
    }

    #[test]
    fn normalize_maps_negative_pi_to_pi() {
        assert_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn normalize_wraps_multiple_turns() {
        let wrapped = normalize_angle(5.0 * TAU + 1.0);
        assert!((wrapped - 1.0).abs() < 1e-9);

        let wrapped = normalize_angle(-3.0 * TAU - 1.0);
        assert!((wrapped + 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_huge_angles_terminates() {
        for angle in [1.0e17, -1.0e17, f64::MAX, f64::MIN] {
            let wrapped = normalize_angle(angle);
            assert!(wrapped > -PI && wrapped <= PI, "{} wrapped to {}", angle, wrapped);
        }
    }

    #[test]
    fn vector_ops() {
        let moved = Vector2::new(1.0, 2.0).plus(&Vector2::new(3.0, -1.0).scale(2.0));
        assert_eq!(moved, Vector2::new(7.0, 0.0));
    }
}
