use glam::Vec3;

use crate::core::utils::random::{rand_int, rand_range};
use crate::systems::body::Body;

use super::world::StepStats;
use super::{
    ATTRACTION_RANGE, IMPULSE_COUNTDOWN, IMPULSE_HALF_RANGE, REPULSION_SOFTENING,
    REPULSION_STRENGTH,
};

/// Interaction between two bodies for one step. The vector is the force on
/// the first body; the second receives its negation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PairForce {
    Repulsion(Vec3),
    Attraction(Vec3),
    None,
}

/// Classify and size the force between `a` and `b`. The AABB test wins:
/// overlapping bodies only ever repel.
#[inline]
pub fn pair_force(a: &Body, b: &Body, attraction_constant: f32) -> PairForce {
    let delta = b.position - a.position;
    let distance = delta.length();

    if a.aabb().intersects(&b.aabb()) {
        // Coincident centers normalize to zero: no push, but no NaN either.
        let direction = (-delta).normalize_or_zero();
        let magnitude = REPULSION_STRENGTH / (distance + REPULSION_SOFTENING);
        PairForce::Repulsion(direction * magnitude)
    } else if distance < ATTRACTION_RANGE {
        let magnitude = attraction_constant * a.mass * b.mass / (distance * distance + 1.0);
        PairForce::Attraction(delta.normalize_or_zero() * magnitude)
    } else {
        PairForce::None
    }
}

pub(super) fn apply_gravity(bodies: &mut [Body], gravity: Vec3) {
    for body in bodies.iter_mut() {
        body.apply_force(gravity * body.mass);
    }
}

/// Every unordered pair once, in storage order.
pub(super) fn apply_pair_forces(bodies: &mut [Body], attraction_constant: f32, stats: &mut StepStats) {
    let n = bodies.len();
    for i in 0..n {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            stats.pair_checks += 1;
            match pair_force(a, b, attraction_constant) {
                PairForce::Repulsion(f) => {
                    a.apply_force(f);
                    b.apply_force(-f);
                    stats.repulsions += 1;
                }
                PairForce::Attraction(f) => {
                    a.apply_force(f);
                    b.apply_force(-f);
                    stats.attractions += 1;
                }
                PairForce::None => {}
            }
        }
    }
}

/// Count each body down; when it expires, kick it and re-arm the countdown.
pub(super) fn apply_random_impulses(bodies: &mut [Body], rng_state: &mut u32, stats: &mut StepStats) {
    for body in bodies.iter_mut() {
        body.impulse_countdown -= 1;
        if body.impulse_countdown > 0 {
            continue;
        }

        let [hx, hy, hz] = IMPULSE_HALF_RANGE;
        let impulse = Vec3::new(
            rand_range(rng_state, -hx, hx),
            rand_range(rng_state, -hy, hy),
            rand_range(rng_state, -hz, hz),
        );
        body.apply_force(impulse);
        body.impulse_countdown = rand_int(rng_state, IMPULSE_COUNTDOWN.0, IMPULSE_COUNTDOWN.1);
        stats.impulses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::{BodyExtent, BodyId};

    fn sphere_at(id: u32, radius: f32, position: Vec3) -> Body {
        let extent = BodyExtent::Sphere { radius };
        Body::new(BodyId(id), extent, position, extent.default_mass(), 0.0, 1000)
    }

    #[test]
    fn overlapping_bodies_repel_along_center_line() {
        let a = sphere_at(1, 2.0, Vec3::ZERO);
        let b = sphere_at(2, 2.0, Vec3::new(1.0, 0.0, 0.0));

        match pair_force(&a, &b, 2.0) {
            PairForce::Repulsion(f) => {
                assert!(f.x < 0.0);
                assert_eq!(f.y, 0.0);
                assert_eq!(f.z, 0.0);
                assert!((f.length() - 50.0 / 1.1).abs() < 1e-4);
            }
            other => panic!("expected repulsion, got {:?}", other),
        }
    }

    #[test]
    fn separated_bodies_attract_inside_range() {
        let a = sphere_at(1, 1.0, Vec3::ZERO); // mass 2
        let b = sphere_at(2, 1.0, Vec3::new(0.0, 0.0, 3.0)); // mass 2

        match pair_force(&a, &b, 2.0) {
            PairForce::Attraction(f) => {
                // 2 * 2 * 2 / (9 + 1)
                assert!((f.z - 0.8).abs() < 1e-6);
                assert_eq!(f.x, 0.0);
            }
            other => panic!("expected attraction, got {:?}", other),
        }
    }

    #[test]
    fn far_bodies_do_not_interact() {
        let a = sphere_at(1, 1.0, Vec3::ZERO);
        let b = sphere_at(2, 1.0, Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(pair_force(&a, &b, 2.0), PairForce::None);
    }

    #[test]
    fn coincident_bodies_get_zero_repulsion() {
        let a = sphere_at(1, 1.0, Vec3::ONE);
        let b = sphere_at(2, 1.0, Vec3::ONE);
        assert_eq!(pair_force(&a, &b, 2.0), PairForce::Repulsion(Vec3::ZERO));
    }

    #[test]
    fn pair_pass_is_equal_and_opposite() {
        let mut bodies = vec![
            sphere_at(1, 1.0, Vec3::ZERO),
            sphere_at(2, 1.0, Vec3::new(5.0, 0.0, 0.0)),
            sphere_at(3, 1.0, Vec3::new(0.0, 0.5, 0.0)),
        ];
        let mut stats = StepStats::default();
        apply_pair_forces(&mut bodies, 2.0, &mut stats);

        let total: Vec3 = bodies.iter().map(|b| b.force).sum();
        assert!(total.length() < 1e-4);
        assert_eq!(stats.pair_checks, 3);
        assert_eq!(stats.repulsions, 1);
        assert_eq!(stats.attractions, 2);
    }

    #[test]
    fn impulse_fires_when_countdown_expires() {
        let mut bodies = vec![sphere_at(1, 1.0, Vec3::ZERO), sphere_at(2, 1.0, Vec3::ZERO)];
        bodies[0].impulse_countdown = 1;
        let mut rng = 42u32;
        let mut stats = StepStats::default();

        apply_random_impulses(&mut bodies, &mut rng, &mut stats);

        assert_eq!(stats.impulses, 1);
        let f = bodies[0].force;
        assert!(f.x.abs() <= 5.0 && f.y.abs() <= 2.5 && f.z.abs() <= 5.0);
        assert!((200..600).contains(&bodies[0].impulse_countdown));
        assert_eq!(bodies[1].force, Vec3::ZERO);
        assert_eq!(bodies[1].impulse_countdown, 999);
    }
}
