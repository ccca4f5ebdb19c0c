//! Gravity around a fixed Earth at the origin.
//!
//! `g(h) = g0 (R / (R + h))²`, pointed at the center of the Earth.
//! Nothing here guards the origin itself: a body sitting exactly on
//! the center of the Earth has no direction to fall and gets NaNs.

use crate::angle::Angle;
use crate::kinematics::{Acceleration, Position};

/// Radius of the Earth in meters.
pub const EARTH_RADIUS: f64 = 6_378_000.0;
/// Gravity at sea level in m/s².
pub const SEA_LEVEL_GRAVITY: f64 = 9.80665;

/// Height above the surface of the Earth.
pub fn altitude(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt() - EARTH_RADIUS
}

/// Strength of gravity `h` meters above the surface.
pub fn magnitude(h: f64) -> f64 {
    let base = EARTH_RADIUS / (EARTH_RADIUS + h);
    SEA_LEVEL_GRAVITY * base * base
}

/// Which way is down from `(x, y)`.
pub fn direction(x: f64, y: f64) -> Angle {
    Angle::from_components(0.0 - x, 0.0 - y)
}

/// The pull of the Earth on something at `pos`.
pub fn acceleration_at(pos: &Position) -> Acceleration {
    let (x, y) = (pos.meters_x(), pos.meters_y());
    Acceleration::from_polar(direction(x, y), magnitude(altitude(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sea_level() {
        assert_eq!(altitude(0.0, EARTH_RADIUS), 0.0);
        assert_eq!(magnitude(0.0), SEA_LEVEL_GRAVITY);
    }

    #[test]
    fn geostationary() {
        let h = altitude(0.0, 42_164_000.0);
        assert_eq!(h, 35_786_000.0);
        assert_abs_diff_eq!(magnitude(h), 0.2244, epsilon = 0.0005);
    }

    #[test]
    fn points_at_the_earth() {
        assert_abs_diff_eq!(direction(0.0, 100.0).degrees(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(direction(100.0, 0.0).degrees(), 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(direction(-100.0, 0.0).degrees(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(direction(0.0, -100.0).degrees(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn acceleration_pulls_inward() {
        let acc = acceleration_at(&Position::new(21_082_000.0, 36_515_095.0));
        assert!(acc.ddx() < 0.0);
        assert!(acc.ddy() < 0.0);
        // Same distance as geostationary, so the same strength
        assert_abs_diff_eq!(acc.0.length(), 0.2244, epsilon = 0.0005);
    }
}
