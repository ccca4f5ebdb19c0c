//! Handles the simulation of everything orbiting the Earth

pub mod angle;
pub mod bodies;
pub mod explosion;
pub mod gravity;
pub mod interface;
pub mod kinematics;
pub mod scenery;

#[cfg(test)]
mod proptest_physics;

use crate::bodies::Body;
use crate::interface::{InputSource, RenderSink};
use crate::kinematics::{Position, Zoom};
use crate::scenery::{Earth, Star};

use log::{debug, info, trace};
use rand::{rngs::SmallRng, SeedableRng};

/// Knobs for a simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Simulated seconds per real second.
    pub time_dilation: f64,
    /// Frames per real second.
    pub frame_rate: f64,
    /// This many meters in distance = 1 pixel
    pub meters_per_pixel: f64,
    /// Width and height of the screen in pixels. (0, 0) is in the middle.
    pub screen_size: (f64, f64),
    pub star_count: usize,
    /// Seeds the stars and all the debris.
    pub seed: u64,
}

impl Settings {
    /// How many simulated seconds go by each frame.
    pub fn seconds_per_frame(&self) -> f64 {
        self.time_dilation / self.frame_rate
    }

    /// How many real seconds each frame takes.
    pub fn frame_duration(&self) -> f64 {
        self.frame_rate.recip()
    }

    /// The upper right corner of the screen, in meters.
    pub fn upper_right(&self) -> Position {
        Position::from_pixels(
            self.screen_size.0 / 2.0,
            self.screen_size.1 / 2.0,
            &Zoom::new(self.meters_per_pixel),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_dilation: TIME_DILATION,
            frame_rate: FRAME_RATE,
            meters_per_pixel: METERS_PER_PIXEL,
            screen_size: (1000.0, 1000.0),
            star_count: STAR_COUNT,
            seed: 0,
        }
    }
}

/// The Earth and everything flying around it.
pub struct Simulator {
    settings: Settings,
    zoom: Zoom,
    earth: Earth,
    /// Everything that can crash. Order doesn't matter.
    bodies: Vec<Body>,
    stars: Vec<Star>,
    rng: SmallRng,
    frames_elapsed: usize,
}

impl Simulator {
    pub fn new(settings: Settings, bodies: Vec<Body>) -> Self {
        let mut rng = SmallRng::seed_from_u64(settings.seed);
        let corner = settings.upper_right();
        let stars = (0..settings.star_count)
            .map(|_| Star::scatter(&corner, &mut rng))
            .collect();
        info!(
            "Starting simulation with {} bodies, {}s per frame",
            bodies.len(),
            settings.seconds_per_frame()
        );
        Simulator {
            zoom: Zoom::new(settings.meters_per_pixel),
            earth: Earth::new(settings.time_dilation, settings.frame_rate),
            settings,
            bodies,
            stars,
            rng,
            frames_elapsed: 0,
        }
    }

    /// Hand the keyboard to whatever wants it. That's only ever the ship.
    pub fn input(&mut self, controls: &impl InputSource) {
        let mut fired = Vec::new();
        for body in self.bodies.iter_mut() {
            if let Some(projectile) = body.input(controls) {
                fired.push(projectile);
            }
        }
        self.bodies.extend(fired);
    }

    /// Run one frame: move everything, crash things together, and sweep up.
    pub fn update(&mut self) {
        self.earth.update();

        let dt = self.settings.seconds_per_frame();
        let age = self.settings.frame_duration();
        for body in self.bodies.iter_mut() {
            body.update(dt);
            body.advance_age(age);
        }

        self.detect_collisions();
        self.remove_dead();
        self.frames_elapsed += 1;
    }

    /// Kill both bodies in every overlapping pair.
    /// Returns how many pairs collided.
    pub fn detect_collisions(&mut self) -> usize {
        let mut crashes = 0;
        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = (&self.bodies[i], &self.bodies[j]);
                if a.is_alive() && b.is_alive() && a.touches(b) {
                    debug!("{:?} #{} hit {:?} #{}", a.kind, i, b.kind, j);
                    self.bodies[i].kill();
                    self.bodies[j].kill();
                    crashes += 1;
                }
            }
        }
        crashes
    }

    /// Take out everything dead or burnt out, and put its debris in its place.
    /// Fresh debris doesn't get checked for crashes until next frame.
    pub fn remove_dead(&mut self) {
        let mut debris = Vec::new();
        let rng = &mut self.rng;
        self.bodies.retain(|body| {
            if body.is_alive() {
                return true;
            }
            if body.has_expired() {
                trace!("{:?} burnt out", body.kind);
            } else {
                let pieces = body.destroy(rng);
                info!("{:?} destroyed into {} pieces", body.kind, pieces.len());
                debris.extend(pieces);
            }
            false
        });
        self.bodies.extend(debris);
    }

    /// Draw the stars, then the Earth, then everything in orbit.
    pub fn draw(&mut self, sink: &mut impl RenderSink) {
        for star in self.stars.iter_mut() {
            sink.draw(star.sprite(), &self.zoom);
        }
        sink.draw(self.earth.sprite(), &self.zoom);
        for body in self.bodies.iter() {
            sink.draw(body.sprite(), &self.zoom);
        }
    }

    /// Put something new into orbit.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn earth(&self) -> &Earth {
        &self.earth
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    /// Change the zoom. Nothing moves, it just gets drawn differently.
    pub fn set_zoom(&mut self, meters_per_pixel: f64) {
        self.zoom = Zoom::new(meters_per_pixel);
    }

    pub fn frames_elapsed(&self) -> usize {
        self.frames_elapsed
    }
}

/// 24 hours in a day X 60 minutes in an hour
pub const TIME_DILATION: f64 = 24.0 * 60.0;
pub const FRAME_RATE: f64 = 30.0;
pub const METERS_PER_PIXEL: f64 = 128_000.0; // 128km equals 1 pixel
pub const STAR_COUNT: usize = 50;
