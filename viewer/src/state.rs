//! Handles the state for the viewer.

use crate::render::Canvas;

use simulator::interface::Controls;
use simulator::Simulator;

use ggez::event::{EventHandler, KeyCode};
use ggez::{
    graphics::{self, Color, DrawParam},
    input::keyboard,
    timer, Context, GameResult,
};

/// The state of the simulation window.
pub struct State {
    simulator: Simulator,
}

impl State {
    pub fn new(_ctx: &mut Context, simulator: Simulator) -> Self {
        State { simulator }
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }
}

/// Whatever keys are held right now.
fn read_controls(ctx: &Context) -> Controls {
    Controls {
        up: keyboard::is_key_pressed(ctx, KeyCode::Up),
        down: keyboard::is_key_pressed(ctx, KeyCode::Down),
        left: keyboard::is_key_pressed(ctx, KeyCode::Left),
        right: keyboard::is_key_pressed(ctx, KeyCode::Right),
        fire: keyboard::is_key_pressed(ctx, KeyCode::Space),
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        let desired_fps = self.simulator.settings().frame_rate.round().max(1.0) as u32;
        while timer::check_update_time(ctx, desired_fps) {
            let controls = read_controls(ctx);
            self.simulator.input(&controls);
            self.simulator.update();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, Color::from_rgb_u32(0x000010));

        let (scr_w, scr_h) = graphics::drawable_size(ctx);
        let mut canvas = Canvas::new(scr_w, scr_h);
        self.simulator.draw(&mut canvas);

        let mesh = canvas.build(ctx)?;
        graphics::draw(ctx, &mesh, DrawParam::default())?;

        graphics::present(ctx)
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(e) = self.fix_coordinates(ctx, width, height) {
            log::warn!("couldn't resize to {}x{}: {}", width, height, e);
        }
    }
}
