//! The Earth and the stars behind it. Neither of them can be hit.

use crate::angle::Angle;
use crate::gravity::EARTH_RADIUS;
use crate::interface::Sprite;
use crate::kinematics::Position;

use rand::Rng;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The Earth, sitting still at the origin and spinning.
#[derive(Copy, Clone, Debug)]
pub struct Earth {
    angle: Angle,
    /// Radians per frame. Negative, because the Earth turns counterclockwise.
    spin: f64,
}

impl Earth {
    /// An Earth that does a full turn every simulated day.
    pub fn new(time_dilation: f64, frame_rate: f64) -> Self {
        Earth {
            angle: Angle::default(),
            spin: -(2.0 * std::f64::consts::PI / frame_rate) * (time_dilation / SECONDS_PER_DAY),
        }
    }

    pub fn update(&mut self) {
        self.angle.add_radians(self.spin);
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn position(&self) -> Position {
        Position::new(0.0, 0.0)
    }

    pub fn radius(&self) -> f64 {
        EARTH_RADIUS
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Earth {
            rotation: self.angle,
        }
    }
}

/// A twinkly dot in the background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Position,
    pub phase: u8,
}

impl Star {
    /// A star somewhere inside `±corner`, in meters.
    pub fn scatter<R: Rng>(corner: &Position, rng: &mut R) -> Self {
        let mut spread = |half: f64| {
            if half > 0.0 {
                rng.gen_range(-half, half)
            } else {
                0.0
            }
        };
        let x = spread(corner.meters_x().abs());
        let y = spread(corner.meters_y().abs());
        Star {
            pos: Position::new(x, y),
            phase: rng.gen(),
        }
    }

    /// Stars twinkle a little every time they're drawn.
    pub fn sprite(&mut self) -> Sprite {
        let sprite = Sprite::Star {
            position: self.pos,
            phase: self.phase,
        };
        self.phase = self.phase.wrapping_add(1);
        sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn earth_turns_once_a_day() {
        let mut earth = Earth::new(24.0 * 60.0, 30.0);
        // One simulated day is one real minute: 60 seconds at 30 fps
        for _ in 0..(60 * 30 / 2) {
            earth.update();
        }
        assert_abs_diff_eq!(earth.angle().degrees(), 180.0, epsilon = 1e-6);
    }

    #[test]
    fn earth_turns_backwards() {
        let mut earth = Earth::new(24.0 * 60.0, 30.0);
        earth.update();
        assert!(earth.angle().degrees() > 359.0);
    }

    #[test]
    fn stars_stay_on_screen() {
        let corner = Position::new(128_000_000.0, 64_000_000.0);
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let star = Star::scatter(&corner, &mut rng);
            assert!(star.pos.meters_x().abs() <= 128_000_000.0);
            assert!(star.pos.meters_y().abs() <= 64_000_000.0);
        }
    }

    #[test]
    fn stars_twinkle_and_wrap() {
        let mut star = Star {
            pos: Position::new(0.0, 0.0),
            phase: 255,
        };
        match star.sprite() {
            Sprite::Star { phase, .. } => assert_eq!(phase, 255),
            other => panic!("expected a star, got {:?}", other),
        }
        assert_eq!(star.phase, 0);
    }
}
