//! Where the simulation meets the outside world.
//! Keys come in through an [`InputSource`], pictures go out through a [`RenderSink`].

use crate::angle::Angle;
use crate::bodies::Kind;
use crate::kinematics::{Position, Zoom};

/// Which keys are down this frame.
/// There's no event queue, so a tap shorter than a frame might get missed.
pub trait InputSource {
    fn up(&self) -> bool;
    fn down(&self) -> bool;
    fn left(&self) -> bool;
    fn right(&self) -> bool;
    fn fire(&self) -> bool;
}

/// A snapshot of the keyboard.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputSource for Controls {
    fn up(&self) -> bool {
        self.up
    }

    fn down(&self) -> bool {
        self.down
    }

    fn left(&self) -> bool {
        self.left
    }

    fn right(&self) -> bool {
        self.right
    }

    fn fire(&self) -> bool {
        self.fire
    }
}

/// One thing to put on the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sprite {
    Earth {
        rotation: Angle,
    },
    Star {
        position: Position,
        /// Twinkle, 0 to 255.
        phase: u8,
    },
    Body {
        kind: Kind,
        position: Position,
        rotation: Angle,
        thrusting: bool,
    },
}

/// Something that can draw sprites. Nothing comes back out of it.
pub trait RenderSink {
    fn draw(&mut self, sprite: Sprite, zoom: &Zoom);
}

/// Collects sprites instead of drawing them. Handy for headless runs.
impl RenderSink for Vec<Sprite> {
    fn draw(&mut self, sprite: Sprite, _zoom: &Zoom) {
        self.push(sprite);
    }
}
