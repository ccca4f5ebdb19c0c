//! Position, velocity and acceleration, all in meters and seconds.

use crate::angle::Angle;

use euclid::default::{Point2D, Vector2D};

/// How many meters one screen unit covers.
/// Owned by the Simulator and handed to anything that needs pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Zoom {
    pub meters_per_pixel: f64,
}

impl Zoom {
    pub fn new(meters_per_pixel: f64) -> Self {
        Zoom { meters_per_pixel }
    }

    pub fn to_pixels(&self, meters: f64) -> f64 {
        meters / self.meters_per_pixel
    }

    pub fn to_meters(&self, pixels: f64) -> f64 {
        pixels * self.meters_per_pixel
    }
}

/// A point in space. The center of the Earth is the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position(pub Point2D<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position(Point2D::new(x, y))
    }

    /// Build a position from screen units.
    pub fn from_pixels(x: f64, y: f64, zoom: &Zoom) -> Self {
        Self::new(zoom.to_meters(x), zoom.to_meters(y))
    }

    pub fn meters_x(&self) -> f64 {
        self.0.x
    }

    pub fn meters_y(&self) -> f64 {
        self.0.y
    }

    pub fn pixels_x(&self, zoom: &Zoom) -> f64 {
        zoom.to_pixels(self.0.x)
    }

    pub fn pixels_y(&self, zoom: &Zoom) -> f64 {
        zoom.to_pixels(self.0.y)
    }

    pub fn set_meters(&mut self, x: f64, y: f64) {
        self.0 = Point2D::new(x, y);
    }

    pub fn set_meters_x(&mut self, x: f64) {
        self.0.x = x;
    }

    pub fn set_meters_y(&mut self, y: f64) {
        self.0.y = y;
    }

    pub fn add_meters_x(&mut self, dx: f64) {
        self.0.x += dx;
    }

    pub fn add_meters_y(&mut self, dy: f64) {
        self.0.y += dy;
    }

    pub fn set_pixels_x(&mut self, x: f64, zoom: &Zoom) {
        self.0.x = zoom.to_meters(x);
    }

    pub fn set_pixels_y(&mut self, y: f64, zoom: &Zoom) {
        self.0.y = zoom.to_meters(y);
    }

    pub fn distance(&self, other: &Position) -> f64 {
        (self.0 - other.0).length()
    }

    /// The point `meters` away from here, heading in `direction`.
    pub fn ahead(&self, direction: Angle, meters: f64) -> Position {
        Position(self.0 + Vector2D::new(direction.sin(), direction.cos()) * meters)
    }

    /// Move along for `dt` seconds.
    ///
    /// `s = s0 + v t + ½ a t²`, where `v` is the velocity *after* this
    /// frame's acceleration has already been applied to it.
    pub fn update(&mut self, vel: &Velocity, acc: &Acceleration, dt: f64) {
        self.0 += vel.0 * dt + acc.0 * (0.5 * dt * dt);
    }
}

/// Meters per second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Velocity(pub Vector2D<f64>);

impl Default for Velocity {
    fn default() -> Self {
        Velocity(Vector2D::zero())
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity(Vector2D::new(dx, dy))
    }

    /// A velocity of `speed` heading in `direction`.
    pub fn from_polar(direction: Angle, speed: f64) -> Self {
        Self::new(speed * direction.sin(), speed * direction.cos())
    }

    pub fn dx(&self) -> f64 {
        self.0.x
    }

    pub fn dy(&self) -> f64 {
        self.0.y
    }

    pub fn speed(&self) -> f64 {
        self.0.length()
    }

    pub fn add(&mut self, other: &Velocity) {
        self.0 += other.0;
    }

    /// Forward Euler: `v += a dt`.
    pub fn apply_acceleration(&mut self, acc: &Acceleration, dt: f64) {
        self.0 += acc.0 * dt;
    }
}

/// Meters per second squared.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Acceleration(pub Vector2D<f64>);

impl Default for Acceleration {
    fn default() -> Self {
        Acceleration(Vector2D::zero())
    }
}

impl Acceleration {
    pub fn new(ddx: f64, ddy: f64) -> Self {
        Acceleration(Vector2D::new(ddx, ddy))
    }

    /// `magnitude` in `direction`. Zero degrees is straight up.
    pub fn from_polar(direction: Angle, magnitude: f64) -> Self {
        Self::new(magnitude * direction.sin(), magnitude * direction.cos())
    }

    pub fn ddx(&self) -> f64 {
        self.0.x
    }

    pub fn ddy(&self) -> f64 {
        self.0.y
    }

    pub fn add(&mut self, other: &Acceleration) {
        self.0 += other.0;
    }
}
