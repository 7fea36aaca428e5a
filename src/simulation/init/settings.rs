use glam::Vec3;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_gravity(scene: &mut SceneCore, x: f32, y: f32, z: f32) {
    let gravity = Vec3::new(x, y, z);
    scene.physics.set_gravity(gravity);
    scene.config.gravity = scene.physics.gravity().to_array();
}

pub(super) fn set_damping(scene: &mut SceneCore, damping: f32) -> Result<(), String> {
    scene.physics.set_damping(damping)?;
    scene.config.damping = damping;
    Ok(())
}

pub(super) fn set_attraction_constant(scene: &mut SceneCore, g: f32) {
    scene.physics.set_attraction_constant(g);
    scene.config.attraction_constant = scene.physics.attraction_constant();
}

pub(super) fn set_bounds(scene: &mut SceneCore, min: Vec3, max: Vec3) -> Result<(), String> {
    scene.physics.set_bounds(min, max)?;
    scene.config.bounds_min = min.to_array();
    scene.config.bounds_max = max.to_array();
    Ok(())
}

/// The active settings, including runtime changes.
pub(super) fn config_json(scene: &SceneCore) -> String {
    scene.config.to_json()
}
