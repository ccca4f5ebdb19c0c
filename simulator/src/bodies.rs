//! Handles bodies and such
//!
//! Every satellite, scrap of debris, bullet and the player's ship is a [`Body`].
//! What sets them apart is their [`Kind`], which decides how they take input,
//! how long they live and what they break into.

use crate::angle::Angle;
use crate::gravity;
use crate::interface::{InputSource, Sprite};
use crate::kinematics::{Acceleration, Position, Velocity};

use rand::Rng;

/// All the sizes below are given in meters.
/// They were picked to look right at the default zoom of 128km per pixel.
const PIXEL: f64 = 128_000.0;

/// Extra push from the ship's engine, in m/s².
pub const SHIP_THRUST: f64 = 2.0;
/// How far the ship turns per frame while an arrow key is held, in radians.
pub const SHIP_TURN: f64 = 0.1;
/// Bullets leave this much faster than the ship, in m/s.
pub const PROJECTILE_SPEED: f64 = 9_000.0;
/// Bullets appear this far in front of the ship so they don't hit it.
pub const PROJECTILE_LEAD: f64 = 19.0 * PIXEL;
/// Seconds a bullet lasts.
pub const PROJECTILE_LIFESPAN: f64 = 2.0;
/// Fragments last somewhere in this many seconds.
pub const FRAGMENT_LIFESPAN: (f64, f64) = (2.0, 3.0);

/// Cosmetic spin, in radians per frame.
const SATELLITE_SPIN: f64 = 0.02;
const DEBRIS_SPIN: f64 = 0.1;

/// What sort of thing a Body is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The one the player flies.
    Ship,
    Sputnik,
    Gps,
    Hubble,
    Dragon,
    Starlink,
    /// A named chunk of a bigger satellite.
    Part(Part),
    /// Anonymous debris. Burns out on its own.
    Fragment,
    /// Fired by the ship. Burns out on its own.
    Projectile,
}

/// The named pieces satellites come apart into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    GpsCenter,
    GpsLeft,
    GpsRight,
    HubbleTelescope,
    HubbleComputer,
    HubbleLeft,
    HubbleRight,
    DragonCenter,
    DragonLeft,
    DragonRight,
    StarlinkBody,
    StarlinkArray,
}

impl Part {
    pub fn radius(&self) -> f64 {
        use Part::*;
        PIXEL
            * match self {
                GpsCenter => 7.0,
                GpsLeft | GpsRight => 8.0,
                HubbleTelescope => 10.0,
                HubbleComputer => 7.0,
                HubbleLeft | HubbleRight => 8.0,
                DragonCenter | DragonLeft | DragonRight => 6.0,
                StarlinkBody => 2.0,
                StarlinkArray => 4.0,
            }
    }
}

impl Kind {
    /// Collision radius of a fresh body of this kind.
    pub fn radius(&self) -> f64 {
        match self {
            Kind::Ship => 10.0 * PIXEL,
            Kind::Sputnik => 4.0 * PIXEL,
            Kind::Gps => 12.0 * PIXEL,
            Kind::Hubble => 10.0 * PIXEL,
            Kind::Dragon => 7.0 * PIXEL,
            Kind::Starlink => 6.0 * PIXEL,
            Kind::Part(part) => part.radius(),
            Kind::Fragment => 2.0 * PIXEL,
            Kind::Projectile => 0.5 * PIXEL,
        }
    }

    /// Only the ship listens to the keyboard.
    pub fn accepts_input(&self) -> bool {
        *self == Kind::Ship
    }

    /// Atomic kinds vanish without leaving anything behind.
    pub fn is_atomic(&self) -> bool {
        match self {
            Kind::Part(_) | Kind::Fragment | Kind::Projectile => true,
            _ => false,
        }
    }
}

/// How long something has to live.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lifespan {
    /// Seconds until it burns out.
    pub lifespan: f64,
    /// Seconds it has been around.
    pub age: f64,
}

impl Lifespan {
    pub fn new(lifespan: f64) -> Self {
        Lifespan { lifespan, age: 0.0 }
    }

    pub fn has_expired(&self) -> bool {
        self.age >= self.lifespan
    }
}

/// Something flying around the Earth.
#[derive(Clone, Debug)]
pub struct Body {
    pub kind: Kind,
    pub pos: Position,
    pub vel: Velocity,
    /// Which way it's facing. Purely cosmetic for everything but the ship.
    pub angle: Angle,
    /// Radians per frame.
    pub spin: f64,
    pub radius: f64,
    pub dead: bool,
    /// `None` for things that only die by crashing.
    pub lifespan: Option<Lifespan>,
    /// Whether the engine is burning this frame. Only ever set on the ship.
    pub thrusting: bool,
}

impl Body {
    /// Make a body of `kind` with that kind's size and no lifespan.
    pub fn new(kind: Kind, pos: Position, vel: Velocity) -> Self {
        Body {
            kind,
            pos,
            vel,
            angle: Angle::default(),
            spin: if kind == Kind::Ship { 0.0 } else { SATELLITE_SPIN },
            radius: kind.radius(),
            dead: false,
            lifespan: None,
            thrusting: false,
        }
    }

    pub fn ship() -> Self {
        Body::new(
            Kind::Ship,
            Position::new(-450.0 * PIXEL, 450.0 * PIXEL),
            Velocity::new(0.0, -2000.0),
        )
    }

    pub fn sputnik() -> Self {
        Body::new(
            Kind::Sputnik,
            Position::new(-36_515_095.13, 21_082_000.0),
            Velocity::new(2050.0, 2684.68),
        )
    }

    /// GPS satellites come in a constellation, so they need telling where to go.
    pub fn gps(pos: Position, vel: Velocity) -> Self {
        Body::new(Kind::Gps, pos, vel)
    }

    pub fn hubble() -> Self {
        Body::new(
            Kind::Hubble,
            Position::new(0.0, -42_164_000.0),
            Velocity::new(3100.0, 0.0),
        )
    }

    pub fn dragon() -> Self {
        Body::new(
            Kind::Dragon,
            Position::new(0.0, 8_000_000.0),
            Velocity::new(-7900.0, 0.0),
        )
    }

    pub fn starlink() -> Self {
        Body::new(
            Kind::Starlink,
            Position::new(0.0, -13_020_000.0),
            Velocity::new(5800.0, 0.0),
        )
    }

    /// A scrap of `parent`, flung off towards `direction` at `speed` on top of
    /// whatever the parent was already doing.
    pub fn fragment<R: Rng>(parent: &Body, direction: Angle, speed: f64, rng: &mut R) -> Self {
        let mut vel = parent.vel;
        vel.add(&Velocity::from_polar(direction, speed));
        let mut frag = Body::new(Kind::Fragment, parent.pos, vel);
        frag.angle = direction;
        frag.spin = DEBRIS_SPIN;
        frag.lifespan = Some(Lifespan::new(
            rng.gen_range(FRAGMENT_LIFESPAN.0, FRAGMENT_LIFESPAN.1),
        ));
        frag
    }

    /// A named piece of `parent`, flung off like a fragment but without burning out.
    pub fn part(part: Part, parent: &Body, direction: Angle, speed: f64) -> Self {
        let mut vel = parent.vel;
        vel.add(&Velocity::from_polar(direction, speed));
        let mut piece = Body::new(Kind::Part(part), parent.pos, vel);
        piece.angle = direction;
        piece.spin = DEBRIS_SPIN;
        piece
    }

    /// A bullet fired from `ship` along its heading.
    pub fn projectile(ship: &Body) -> Self {
        let mut vel = ship.vel;
        vel.add(&Velocity::from_polar(ship.angle, PROJECTILE_SPEED));
        let mut bullet = Body::new(
            Kind::Projectile,
            ship.pos.ahead(ship.angle, PROJECTILE_LEAD),
            vel,
        );
        bullet.angle = ship.angle;
        bullet.spin = 0.0;
        bullet.lifespan = Some(Lifespan::new(PROJECTILE_LIFESPAN));
        bullet
    }

    /// Advance one frame of `dt` simulated seconds. Dead things don't move.
    pub fn update(&mut self, dt: f64) {
        if self.dead {
            return;
        }
        let mut acc = gravity::acceleration_at(&self.pos);
        if self.thrusting {
            acc.add(&Acceleration::from_polar(self.angle, SHIP_THRUST));
        }
        self.vel.apply_acceleration(&acc, dt);
        self.pos.update(&self.vel, &acc, dt);
        self.angle.add_radians(self.spin);
    }

    /// Respond to the keyboard. Returns a new projectile if one got fired.
    ///
    /// Turning and thrust only last for the frame they're read in.
    pub fn input(&mut self, controls: &impl InputSource) -> Option<Body> {
        if !self.kind.accepts_input() || self.dead {
            return None;
        }
        self.spin = 0.0;
        if controls.left() {
            self.spin -= SHIP_TURN;
        }
        if controls.right() {
            self.spin += SHIP_TURN;
        }
        self.thrusting = controls.up();

        if controls.fire() {
            Some(Body::projectile(self))
        } else {
            None
        }
    }

    /// Let `seconds` of real time pass for things that burn out.
    pub fn advance_age(&mut self, seconds: f64) {
        if let Some(life) = &mut self.lifespan {
            life.age += seconds;
        }
    }

    pub fn has_expired(&self) -> bool {
        self.lifespan.map_or(false, |life| life.has_expired())
    }

    pub fn kill(&mut self) {
        self.dead = true;
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Neither crashed nor burnt out.
    pub fn is_alive(&self) -> bool {
        !self.dead && !self.has_expired()
    }

    /// Whether this and `other` are overlapping.
    pub fn touches(&self, other: &Body) -> bool {
        self.pos.distance(&other.pos) < self.radius + other.radius
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Body {
            kind: self.kind,
            position: self.pos,
            rotation: self.angle,
            thrusting: self.thrusting,
        }
    }
}
