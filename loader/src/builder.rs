//! Lets you put together a scenario one satellite at a time.

use simulator::bodies::Body;
use simulator::{Settings, Simulator};

/// Everything needed to start a Simulator.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub settings: Settings,
    pub bodies: Vec<Body>,
}

impl Scenario {
    /// Start the simulation. Consumes the scenario.
    pub fn into_simulator(self) -> Simulator {
        Simulator::new(self.settings, self.bodies)
    }
}

/// Use this struct to construct a scenario easily
pub struct ScenarioBuilder {
    settings: Settings,
    bodies: Vec<Body>,
}

impl ScenarioBuilder {
    /// Make a new empty Builder.
    pub fn new(settings: Settings) -> Self {
        ScenarioBuilder {
            settings,
            bodies: Vec::new(),
        }
    }

    /// Add a satellite to the Builder.
    /// Returns itself so you can keep chaining it.
    pub fn add(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    /// Add a whole bunch of satellites at once.
    pub fn add_bulk<T: IntoIterator<Item = Body>>(mut self, bodies: T) -> Self {
        self.bodies.extend(bodies);
        self
    }

    pub fn construct(self) -> Scenario {
        Scenario {
            settings: self.settings,
            bodies: self.bodies,
        }
    }
}
