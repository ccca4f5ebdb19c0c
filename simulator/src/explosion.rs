//! What things break into.
//!
//! Each kind has a fixed list of fragments and named parts, each with an angle
//! measured from the parent's heading. Every piece gets flung off along its
//! angle at a random speed, on top of the parent's own velocity.

use crate::bodies::{Body, Kind, Part};

use rand::Rng;

/// Pieces fly off at somewhere in this range of m/s, relative to the parent.
pub const EJECTION_SPEED: (f64, f64) = (5_000.0, 9_000.0);

/// The recipe for blowing something up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Explosion {
    /// Heading offsets in degrees, one per fragment.
    pub fragments: &'static [f64],
    /// Named parts and their heading offsets in degrees.
    pub parts: &'static [(Part, f64)],
}

impl Explosion {
    const NOTHING: Explosion = Explosion {
        fragments: &[],
        parts: &[],
    };

    /// How many bodies this explosion leaves behind.
    pub fn count(&self) -> usize {
        self.fragments.len() + self.parts.len()
    }
}

impl Kind {
    pub fn explosion(&self) -> Explosion {
        use Part::*;
        match self {
            Kind::Sputnik => Explosion {
                fragments: &[0.0, 90.0, 180.0, 270.0],
                parts: &[],
            },
            Kind::Ship => Explosion {
                fragments: &[0.0, 120.0, 240.0],
                parts: &[],
            },
            Kind::Dragon => Explosion {
                fragments: &[60.0, 300.0],
                parts: &[(DragonCenter, 0.0), (DragonLeft, 120.0), (DragonRight, 240.0)],
            },
            Kind::Gps => Explosion {
                fragments: &[0.0, 90.0],
                parts: &[(GpsCenter, 30.0), (GpsLeft, 45.0), (GpsRight, 270.0)],
            },
            Kind::Hubble => Explosion {
                fragments: &[],
                parts: &[
                    (HubbleTelescope, 0.0),
                    (HubbleComputer, 90.0),
                    (HubbleLeft, 180.0),
                    (HubbleRight, 270.0),
                ],
            },
            Kind::Starlink => Explosion {
                fragments: &[90.0, 270.0],
                parts: &[(StarlinkBody, 0.0), (StarlinkArray, 180.0)],
            },
            Kind::Part(_) | Kind::Fragment | Kind::Projectile => Explosion::NOTHING,
        }
    }
}

impl Body {
    /// Break this body apart where it is now.
    ///
    /// Something that merely burnt out leaves nothing behind.
    pub fn destroy<R: Rng>(&self, rng: &mut R) -> Vec<Body> {
        if self.has_expired() {
            return Vec::new();
        }
        let recipe = self.kind.explosion();
        let mut debris = Vec::with_capacity(recipe.count());
        for &offset in recipe.fragments {
            let speed = rng.gen_range(EJECTION_SPEED.0, EJECTION_SPEED.1);
            debris.push(Body::fragment(self, self.angle.offset(offset), speed, rng));
        }
        for &(part, offset) in recipe.parts {
            let speed = rng.gen_range(EJECTION_SPEED.0, EJECTION_SPEED.1);
            debris.push(Body::part(part, self, self.angle.offset(offset), speed));
        }
        debris
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{Position, Velocity};
    use rand::{rngs::SmallRng, SeedableRng};

    fn blow_up(body: &Body) -> Vec<Body> {
        body.destroy(&mut SmallRng::seed_from_u64(42))
    }

    fn fragments(debris: &[Body]) -> usize {
        debris.iter().filter(|b| b.kind == Kind::Fragment).count()
    }

    #[test]
    fn sputnik_makes_four_fragments() {
        let debris = blow_up(&Body::sputnik());
        assert_eq!(debris.len(), 4);
        assert_eq!(fragments(&debris), 4);
        assert!(debris.iter().all(|b| b.kind.is_atomic()));
    }

    #[test]
    fn hubble_makes_four_parts() {
        let debris = blow_up(&Body::hubble());
        assert_eq!(debris.len(), 4);
        assert_eq!(fragments(&debris), 0);
        assert!(debris.contains_kind(Kind::Part(Part::HubbleTelescope)));
        assert!(debris.contains_kind(Kind::Part(Part::HubbleComputer)));
    }

    #[test]
    fn gps_makes_two_fragments_and_three_parts() {
        let gps = Body::gps(Position::new(0.0, 26_560_000.0), Velocity::new(-3880.0, 0.0));
        let debris = blow_up(&gps);
        assert_eq!(debris.len(), 5);
        assert_eq!(fragments(&debris), 2);
        assert!(debris.contains_kind(Kind::Part(Part::GpsCenter)));
        assert!(debris.contains_kind(Kind::Part(Part::GpsLeft)));
        assert!(debris.contains_kind(Kind::Part(Part::GpsRight)));
    }

    #[test]
    fn the_rest_of_the_table() {
        assert_eq!(blow_up(&Body::ship()).len(), 3);
        assert_eq!(fragments(&blow_up(&Body::dragon())), 2);
        assert_eq!(blow_up(&Body::dragon()).len(), 5);
        assert_eq!(fragments(&blow_up(&Body::starlink())), 2);
        assert_eq!(blow_up(&Body::starlink()).len(), 4);
    }

    #[test]
    fn atomic_things_leave_nothing() {
        let ship = Body::ship();
        assert!(blow_up(&Body::projectile(&ship)).is_empty());

        let mut rng = SmallRng::seed_from_u64(3);
        let frag = Body::fragment(&ship, ship.angle, 5000.0, &mut rng);
        assert!(blow_up(&frag).is_empty());

        let part = Body::part(Part::StarlinkArray, &ship, ship.angle, 5000.0);
        assert!(blow_up(&part).is_empty());
    }

    #[test]
    fn debris_starts_at_the_parent_and_flies_away() {
        let gps = Body::gps(Position::new(0.0, 26_560_000.0), Velocity::new(-3880.0, 0.0));
        for piece in blow_up(&gps) {
            assert_eq!(piece.pos, gps.pos);
            let mut kick = piece.vel;
            kick.0 -= gps.vel.0;
            let speed = kick.speed();
            assert!(speed >= EJECTION_SPEED.0 - 1e-6 && speed <= EJECTION_SPEED.1 + 1e-6);
        }
    }

    #[test]
    fn offsets_follow_the_parents_heading() {
        let mut gps = Body::gps(Position::new(0.0, 26_560_000.0), Velocity::default());
        gps.angle = crate::angle::Angle::from_degrees(10.0);
        let debris = blow_up(&gps);
        let headings: Vec<f64> = debris.iter().map(|b| b.angle.degrees()).collect();
        let expected = [10.0, 100.0, 40.0, 55.0, 280.0];
        for (got, want) in headings.iter().zip(expected.iter()) {
            approx::assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn same_seed_same_debris() {
        let a = blow_up(&Body::dragon());
        let b = blow_up(&Body::dragon());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.vel, y.vel);
        }
    }

    #[test]
    fn burnt_out_things_leave_nothing() {
        let ship = Body::ship();
        let mut bullet = Body::projectile(&ship);
        bullet.advance_age(10.0);
        assert!(blow_up(&bullet).is_empty());
    }

    trait ContainsKind {
        fn contains_kind(&self, kind: Kind) -> bool;
    }

    impl ContainsKind for Vec<Body> {
        fn contains_kind(&self, kind: Kind) -> bool {
            self.iter().any(|b| b.kind == kind)
        }
    }
}
