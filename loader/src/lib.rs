//! The root of this crate doesn't do anything.
//! It just re-exports its contents.

pub mod builder;
pub use builder::{Scenario, ScenarioBuilder};
pub mod deserialize;
pub mod error;
pub use error::LoadError;
pub mod prefabs; // prefabs::satellites::whatever
pub use deserialize::*;

#[macro_use]
extern crate lazy_static;
