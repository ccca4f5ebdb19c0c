//! Headings.
//!
//! An Angle is stored in degrees and always kept in `[0, 360)`.
//! Zero points "up" the screen, and angles grow clockwise, so that
//! a heading of `θ` has the unit vector `(sin θ, cos θ)`.

use std::f64::consts::PI;

/// A heading, in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Make an angle from degrees. Anything out of range gets wrapped.
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            degrees: normalize(degrees),
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(degrees_from_radians(radians))
    }

    /// The direction you'd have to travel from the origin to reach `(x, y)`.
    pub fn from_components(x: f64, y: f64) -> Self {
        // atan2 with the arguments swapped, because zero is up and not right.
        Self::from_radians(x.atan2(y))
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        radians_from_degrees(self.degrees)
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        self.degrees = normalize(degrees);
    }

    pub fn set_radians(&mut self, radians: f64) {
        self.set_degrees(degrees_from_radians(radians));
    }

    pub fn add_degrees(&mut self, degrees: f64) {
        self.set_degrees(self.degrees + degrees);
    }

    pub fn add_radians(&mut self, radians: f64) {
        self.add_degrees(degrees_from_radians(radians));
    }

    /// A copy of this angle turned by `degrees`.
    pub fn offset(&self, degrees: f64) -> Self {
        Self::from_degrees(self.degrees + degrees)
    }

    /// The horizontal part of a unit vector pointing this way.
    pub fn sin(&self) -> f64 {
        self.radians().sin()
    }

    /// The vertical part of a unit vector pointing this way.
    pub fn cos(&self) -> f64 {
        self.radians().cos()
    }
}

/// Wrap any finite number of degrees into `[0, 360)`.
///
/// Exactly 360 comes out as 0, so the range really is half-open.
pub fn normalize(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives like -1e-20 up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn degrees_from_radians(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn radians_from_degrees(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
