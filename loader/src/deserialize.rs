//! Lets you load a scenario from a file.
//!
//! ```json5
//! {
//!     settings: { time_dilation: 1440, frame_rate: 30, seed: 7 },
//!     satellites: [
//!         "ship",
//!         "hubble",
//!         { prefab: "gps", position: [0, 26560000], velocity: [-3880, 0] },
//!     ],
//! }
//! ```
//! Every setting is optional. Satellites are prefabs by name, optionally
//! moved somewhere else.

use serde::Deserialize;

use crate::builder::{Scenario, ScenarioBuilder};
use crate::error::LoadError;

use euclid::default::{Point2D, Vector2D};
use log::info;
use simulator::bodies::Body;
use simulator::kinematics::{Position, Velocity};
use simulator::Settings;

use std::collections::HashMap;
use std::path::Path;

/// A Vector2D or Point2D.
#[derive(Deserialize)]
struct Vec2D(f64, f64);

/// One satellite.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    /// Just the name of a prefab, right where it normally goes
    Prefab(String),
    /// A prefab put somewhere else
    Placed {
        prefab: String,
        #[serde(default)]
        position: Option<Vec2D>,
        #[serde(default)]
        velocity: Option<Vec2D>,
    },
}

/// Anything left out gets the default.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    time_dilation: Option<f64>,
    frame_rate: Option<f64>,
    meters_per_pixel: Option<f64>,
    screen_size: Option<Vec2D>,
    star_count: Option<usize>,
    seed: Option<u64>,
}

/// Serde needs you to define the thing to use it on...
#[derive(Deserialize)]
struct RawScenario {
    #[serde(default)]
    settings: RawSettings,
    satellites: Vec<Entry>,
}

/// Loads a file's contents and returns the ingredients for a simulation.
pub fn load(contents: &str) -> Result<Scenario, LoadError> {
    let raw: RawScenario = json5::from_str(contents)?;
    let mut builder = ScenarioBuilder::new(to_settings(raw.settings)?);

    for entry in raw.satellites {
        builder = builder.add(to_body(entry)?);
    }

    let scenario = builder.construct();
    info!("Loaded scenario with {} satellites", scenario.bodies.len());
    Ok(scenario)
}

/// Reads a scenario off the disk.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Scenario, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    load(&contents)
}

fn to_settings(raw: RawSettings) -> Result<Settings, LoadError> {
    let defaults = Settings::default();
    let settings = Settings {
        time_dilation: raw.time_dilation.unwrap_or(defaults.time_dilation),
        frame_rate: raw.frame_rate.unwrap_or(defaults.frame_rate),
        meters_per_pixel: raw.meters_per_pixel.unwrap_or(defaults.meters_per_pixel),
        screen_size: raw
            .screen_size
            .map_or(defaults.screen_size, |Vec2D(w, h)| (w, h)),
        star_count: raw.star_count.unwrap_or(defaults.star_count),
        seed: raw.seed.unwrap_or(defaults.seed),
    };

    let must_be_positive = [
        ("time_dilation", settings.time_dilation),
        ("frame_rate", settings.frame_rate),
        ("meters_per_pixel", settings.meters_per_pixel),
        ("screen width", settings.screen_size.0),
        ("screen height", settings.screen_size.1),
    ];
    for &(name, value) in must_be_positive.iter() {
        // written this way round so NaN fails too
        if !(value > 0.0 && value.is_finite()) {
            return Err(LoadError::InvalidSettings(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }
    Ok(settings)
}

fn to_body(entry: Entry) -> Result<Body, LoadError> {
    match entry {
        Entry::Prefab(name) => get_body_from_id(&name),
        Entry::Placed {
            prefab,
            position,
            velocity,
        } => {
            let mut body = get_body_from_id(&prefab)?;
            if let Some(Vec2D(x, y)) = position {
                body.pos = Position(Point2D::new(x, y));
            }
            if let Some(Vec2D(dx, dy)) = velocity {
                body.vel = Velocity(Vector2D::new(dx, dy));
            }
            Ok(body)
        }
    }
}

/// Gets a premade satellite from a string
fn get_body_from_id(id: &str) -> Result<Body, LoadError> {
    use crate::prefabs::satellites;

    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<&'static str, fn() -> Body> = HashMap::new();
                $( h.insert(stringify!($name), satellites::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref SATELLITES: HashMap<&'static str, fn() -> Body> =
            maker![ship, sputnik, hubble, dragon, starlink, gps];
    }

    SATELLITES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}
