//! Property-based tests for the angle, gravity and integration helpers.

use proptest::prelude::*;

use crate::angle::{normalize, Angle};
use crate::bodies::{Body, Kind};
use crate::gravity::{self, EARTH_RADIUS};
use crate::kinematics::{Acceleration, Position, Velocity};
use crate::{Settings, Simulator};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_normalize_in_range(x in -1.0e6f64..1.0e6) {
        let y = normalize(x);
        prop_assert!((0.0..360.0).contains(&y), "{} normalized to {}", x, y);
    }

    #[test]
    fn prop_normalize_same_direction(x in -1.0e6f64..1.0e6) {
        let y = normalize(x);
        let turns = (x - y) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-6, "{} and {} differ by {} turns", x, y, turns);
    }

    #[test]
    fn prop_normalize_idempotent(x in -1.0e12f64..1.0e12) {
        let once = normalize(x);
        prop_assert_eq!(normalize(once), once);
        prop_assert_eq!(Angle::from_degrees(once).degrees(), once);
    }

    /// Gravity gets weaker the higher up you go.
    #[test]
    fn prop_gravity_weakens_with_altitude(
        low in (-EARTH_RADIUS + 1.0)..1.0e9,
        gap in 1.0f64..1.0e9,
    ) {
        let high = low + gap;
        prop_assert!(gravity::magnitude(low) > gravity::magnitude(high));
    }

    /// Two steps of dt are the same as one step of 2 dt.
    #[test]
    fn prop_velocity_linear_in_dt(
        dx in -1.0e4f64..1.0e4,
        dy in -1.0e4f64..1.0e4,
        ax in -10.0f64..10.0,
        ay in -10.0f64..10.0,
        dt in 0.0f64..100.0,
    ) {
        let acc = Acceleration::new(ax, ay);
        let mut twice = Velocity::new(dx, dy);
        twice.apply_acceleration(&acc, dt);
        twice.apply_acceleration(&acc, dt);
        let mut once = Velocity::new(dx, dy);
        once.apply_acceleration(&acc, 2.0 * dt);

        prop_assert!((twice.dx() - once.dx()).abs() < 1e-6);
        prop_assert!((twice.dy() - once.dy()).abs() < 1e-6);
    }

    /// However two bodies end up overlapping, neither one survives it.
    #[test]
    fn prop_collisions_are_symmetric(
        x in -4.0e7f64..4.0e7,
        y in 1.0e7f64..4.0e7,
        offset in 0.0f64..500_000.0,
        flip in any::<bool>(),
    ) {
        let a = Body::new(Kind::Sputnik, Position::new(x, y), Velocity::default());
        let b = Body::new(Kind::Starlink, Position::new(x + offset, y), Velocity::default());
        let bodies = if flip { vec![b, a] } else { vec![a, b] };
        let mut sim = Simulator::new(Settings { star_count: 0, ..Settings::default() }, bodies);

        prop_assert_eq!(sim.detect_collisions(), 1);
        prop_assert!(sim.bodies().iter().all(|body| body.is_dead()));
    }
}
