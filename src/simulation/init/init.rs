use crate::core::utils::random::seed_state;
use crate::domain::config::SceneConfig;
use crate::systems::instancing::ShapeInstanceManager;
use crate::systems::physics_world::PhysicsWorld;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SceneCore};

/// Seed offset for scene-level randomness (spawn positions).
const SCENE_RNG_SALT: u32 = 0x85EB_CA6B;

pub(super) fn create_scene_core(config: SceneConfig) -> SceneCore {
    SceneCore {
        physics: PhysicsWorld::from_config(&config),
        shapes: ShapeInstanceManager::from_config(&config),
        pending: Vec::with_capacity(16),
        frame: 0,
        rng_state: seed_state(config.seed ^ SCENE_RNG_SALT),
        render: RenderBuffers {
            // Start small; `extract_aabbs` grows it on demand.
            aabb_buffer: Vec::with_capacity(64 * super::AABB_STRIDE),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
