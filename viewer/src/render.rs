//! Turns sprites into ggez circles.

use simulator::angle::Angle;
use simulator::bodies::{Kind, Part};
use simulator::gravity::EARTH_RADIUS;
use simulator::interface::{RenderSink, Sprite};
use simulator::kinematics::{Position, Zoom};

use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder};
use ggez::nalgebra::Point2;
use ggez::{Context, GameResult};

const TOLERANCE: f32 = 0.1;

/// Collects a frame's sprites into one mesh.
pub struct Canvas {
    mesh: MeshBuilder,
    /// Middle of the window, where the Earth goes.
    center: (f32, f32),
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Canvas {
            mesh: MeshBuilder::new(),
            center: (width / 2.0, height / 2.0),
        }
    }

    pub fn build(&self, ctx: &mut Context) -> GameResult<Mesh> {
        self.mesh.build(ctx)
    }

    /// World space has y going up, screen space has it going down.
    fn to_screen(&self, pos: &Position, zoom: &Zoom) -> Point2<f32> {
        Point2::new(
            self.center.0 + pos.pixels_x(zoom) as f32,
            self.center.1 - pos.pixels_y(zoom) as f32,
        )
    }

    fn dot(&mut self, pos: &Position, radius: f32, color: Color, zoom: &Zoom) {
        let point = self.to_screen(pos, zoom);
        self.mesh
            .circle(DrawMode::fill(), point, radius.max(0.5), TOLERANCE, color);
    }

    fn earth(&mut self, rotation: Angle, zoom: &Zoom) {
        let center = Position::new(0.0, 0.0);
        let radius = zoom.to_pixels(EARTH_RADIUS) as f32;
        self.dot(&center, radius, Color::from_rgb_u32(0x2255cc), zoom);

        // a couple of landmasses so you can see it turn
        for &(offset, size) in [(0.0, 0.35), (140.0, 0.25), (230.0, 0.2)].iter() {
            let spot = center.ahead(rotation.offset(offset), EARTH_RADIUS * 0.55);
            self.dot(&spot, radius * size, Color::from_rgb_u32(0x33aa44), zoom);
        }
    }

    fn star(&mut self, position: &Position, phase: u8, zoom: &Zoom) {
        // triangle wave so it fades in and back out
        let brightness = if phase < 128 { phase } else { 255 - phase };
        let b = 0.4 + 0.6 * (brightness as f32 / 127.0);
        self.dot(position, 1.0, Color::new(b, b, b, 1.0), zoom);
    }

    fn body(
        &mut self,
        kind: Kind,
        position: &Position,
        rotation: Angle,
        thrusting: bool,
        zoom: &Zoom,
    ) {
        let radius_m = kind.radius();
        let radius = zoom.to_pixels(radius_m) as f32;

        if thrusting {
            let flame = position.ahead(rotation.offset(180.0), radius_m);
            self.dot(&flame, radius * 0.5, Color::from_rgb_u32(0xff8800), zoom);
        }

        self.dot(position, radius, kind_color(kind), zoom);

        if !kind.is_atomic() {
            let nose = position.ahead(rotation, radius_m * 0.7);
            self.dot(&nose, radius * 0.25, Color::from_rgb_u32(0xffffff), zoom);
        }
    }
}

impl RenderSink for Canvas {
    fn draw(&mut self, sprite: Sprite, zoom: &Zoom) {
        match sprite {
            Sprite::Earth { rotation } => self.earth(rotation, zoom),
            Sprite::Star { position, phase } => self.star(&position, phase, zoom),
            Sprite::Body {
                kind,
                position,
                rotation,
                thrusting,
            } => self.body(kind, &position, rotation, thrusting, zoom),
        }
    }
}

fn kind_color(kind: Kind) -> Color {
    let rgb = match kind {
        Kind::Ship => 0xdddddd,
        Kind::Sputnik => 0xc0c0c0,
        Kind::Gps => 0xd4af37,
        Kind::Hubble => 0x8899aa,
        Kind::Dragon => 0xeeeeee,
        Kind::Starlink => 0x3355aa,
        Kind::Part(part) => match part {
            Part::GpsLeft | Part::GpsRight | Part::HubbleLeft | Part::HubbleRight => 0x2244aa,
            Part::StarlinkArray | Part::DragonLeft | Part::DragonRight => 0x2244aa,
            _ => 0x999999,
        },
        Kind::Fragment => 0x777777,
        Kind::Projectile => 0xff3333,
    };
    Color::from_rgb_u32(rgb)
}
