mod render;
mod state;
use state::State;

use anyhow::{anyhow, Context as _};
use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder,
};
use log::info;

pub fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            loader::load_file(&path).with_context(|| format!("couldn't load {}", path))?
        }
        None => {
            info!("No scenario given, using the default one");
            loader::prefabs::scenarios::default_scenario()
        }
    };
    let (width, height) = scenario.settings.screen_size;

    let c = Conf::new();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("orbit_simulator", "me")
        .conf(c)
        .window_setup(WindowSetup {
            title: "Orbit simulator!".to_owned(),
            ..Default::default()
        })
        .window_mode(WindowMode {
            width: width as f32,
            height: height as f32,
            resizable: true,
            ..Default::default()
        })
        .build()
        .map_err(|e| anyhow!("couldn't open a window: {}", e))?;

    let state = &mut State::new(ctx, scenario.into_simulator());

    event::run(ctx, event_loop, state).map_err(|e| anyhow!("simulator crashed: {}", e))
}
