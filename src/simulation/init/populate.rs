use glam::Vec3;

use crate::core::utils::random::rand_range;
use crate::domain::error::ShapeError;
use crate::domain::shapes::ShapeKind;
use crate::systems::body::BodyId;

use super::SceneCore;

/// Starting mix: kind, count, horizontal spread (full width), y range.
const INITIAL_POPULATION: [(ShapeKind, u32, f32, (f32, f32)); 5] = [
    (ShapeKind::Sphere, 12, 80.0, (10.0, 30.0)),
    (ShapeKind::Cone, 8, 70.0, (0.0, 30.0)),
    (ShapeKind::Cylinder, 6, 60.0, (5.0, 30.0)),
    (ShapeKind::Torus, 4, 50.0, (0.0, 20.0)),
    (ShapeKind::Octahedron, 5, 40.0, (10.0, 30.0)),
];

/// Terminal spawns land in a 40 x 20 x 40 box around the origin.
const RANDOM_SPAWN_HALF_WIDTH: f32 = 20.0;
const RANDOM_SPAWN_Y: (f32, f32) = (-10.0, 10.0);

pub(super) fn spawn_random(scene: &mut SceneCore, kind: ShapeKind) -> Result<BodyId, ShapeError> {
    let rng = &mut scene.rng_state;
    let position = Vec3::new(
        rand_range(rng, -RANDOM_SPAWN_HALF_WIDTH, RANDOM_SPAWN_HALF_WIDTH),
        rand_range(rng, RANDOM_SPAWN_Y.0, RANDOM_SPAWN_Y.1),
        rand_range(rng, -RANDOM_SPAWN_HALF_WIDTH, RANDOM_SPAWN_HALF_WIDTH),
    );
    scene.spawn_shape(kind, position, 1.0, None)
}

pub(super) fn populate_initial_shapes(scene: &mut SceneCore) -> usize {
    let mut spawned = 0;

    for (kind, count, spread, (y_lo, y_hi)) in INITIAL_POPULATION {
        let half = spread * 0.5;
        for _ in 0..count {
            let rng = &mut scene.rng_state;
            let position = Vec3::new(
                rand_range(rng, -half, half),
                rand_range(rng, y_lo, y_hi),
                rand_range(rng, -half, half),
            );
            match scene.spawn_shape(kind, position, 1.0, None) {
                Ok(_) => spawned += 1,
                Err(e) => {
                    console_warn!("initial {} not spawned: {}", kind, e);
                    break;
                }
            }
        }
    }

    console_log!("Populated shape field with {} shapes", spawned);
    spawned
}
