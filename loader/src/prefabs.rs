//! Prefabricated satellites and scenarios.

pub mod satellites {
    use simulator::bodies::Body;
    use simulator::kinematics::{Position, Velocity};

    /// Returns the player's ship, up in the top left.
    pub fn ship() -> Body {
        Body::ship()
    }

    /// Returns Sputnik 1. Still beeping.
    pub fn sputnik() -> Body {
        Body::sputnik()
    }

    /// Returns the Hubble Space Telescope.
    /// It's a lot higher up than the real one so it doesn't get lost behind the Earth.
    pub fn hubble() -> Body {
        Body::hubble()
    }

    /// Returns a Crew Dragon on its way up.
    pub fn dragon() -> Body {
        Body::dragon()
    }

    /// Returns one lonely Starlink satellite.
    pub fn starlink() -> Body {
        Body::starlink()
    }

    /// Returns a GPS satellite in the first slot of the constellation.
    pub fn gps() -> Body {
        gps_constellation().remove(0)
    }

    /// Returns all six GPS satellites, 26,560km up and evenly spaced.
    pub fn gps_constellation() -> Vec<Body> {
        const SLOTS: [((f64, f64), (f64, f64)); 6] = [
            ((0.0, 26_560_000.0), (-3880.0, 0.0)),
            ((23_001_634.72, 13_280_000.0), (-1940.00, 3360.18)),
            ((23_001_634.72, -13_280_000.0), (1940.00, 3360.18)),
            ((0.0, -26_560_000.0), (3880.0, 0.0)),
            ((-23_001_634.72, -13_280_000.0), (1940.00, -3360.18)),
            ((-23_001_634.72, 13_280_000.0), (-1940.00, -3360.18)),
        ];
        SLOTS
            .iter()
            .map(|&((x, y), (dx, dy))| Body::gps(Position::new(x, y), Velocity::new(dx, dy)))
            .collect()
    }
}

pub mod scenarios {
    use crate::builder::{Scenario, ScenarioBuilder};
    use crate::prefabs::satellites;
    use simulator::Settings;

    /// The ship, a handful of famous satellites, and the whole GPS constellation.
    pub fn default_scenario() -> Scenario {
        ScenarioBuilder::new(Settings::default())
            .add(satellites::ship())
            .add(satellites::sputnik())
            .add(satellites::hubble())
            .add(satellites::dragon())
            .add(satellites::starlink())
            .add_bulk(satellites::gps_constellation())
            .construct()
    }

    /// Two satellites on a head-on course. Good for watching things blow up.
    pub fn collision_fun() -> Scenario {
        use simulator::angle::Angle;
        use simulator::bodies::Body;
        use simulator::kinematics::{Position, Velocity};

        let top = Position::new(0.0, 26_560_000.0);

        ScenarioBuilder::new(Settings::default())
            .add(satellites::ship())
            .add(Body::gps(top, Velocity::new(-3880.0, 0.0)))
            // Same orbit, going the wrong way
            .add(Body::gps(
                top.ahead(Angle::from_degrees(270.0), 12_000_000.0),
                Velocity::new(3880.0, 0.0),
            ))
            .construct()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulator::bodies::Kind;
    use simulator::gravity;

    #[test]
    fn constellation_is_at_gps_altitude() {
        let gps = satellites::gps_constellation();
        assert_eq!(gps.len(), 6);
        for sat in gps.iter() {
            let r = sat.pos.0.to_vector().length();
            approx::assert_abs_diff_eq!(r, 26_560_000.0, epsilon = 1_000.0);
            // Roughly circular-orbit speed at that height
            approx::assert_abs_diff_eq!(sat.vel.speed(), 3880.0, epsilon = 5.0);
            assert_eq!(sat.kind, Kind::Gps);
        }
    }

    #[test]
    fn constellation_is_spread_out() {
        let gps = satellites::gps_constellation();
        for (i, a) in gps.iter().enumerate() {
            for b in gps.iter().skip(i + 1) {
                assert!(!a.touches(b));
            }
        }
    }

    #[test]
    fn default_scenario_has_everyone() {
        let scenario = scenarios::default_scenario();
        assert_eq!(scenario.bodies.len(), 11);
        assert_eq!(scenario.bodies[0].kind, Kind::Ship);
        assert!(scenario
            .bodies
            .iter()
            .all(|b| gravity::altitude(b.pos.meters_x(), b.pos.meters_y()) > 0.0));
    }

    #[test]
    fn collision_fun_collides() {
        let scenario = scenarios::collision_fun();
        assert_eq!(scenario.bodies.len(), 3);
        assert_eq!(scenario.bodies[1].kind, Kind::Gps);
    }
}
