use super::perf_timer::{timed, PerfTimer};
use super::SceneCore;

pub(super) fn frame(scene: &mut SceneCore, dt: f32, time: f32) {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === COMMANDS ===
    // Applied before physics so the pair pass never sees a half-updated set.
    let (applied, commands_ms) = timed(perf_on, || scene.apply_pending_commands());

    // === PHYSICS ===
    let (_, physics_ms) = timed(perf_on, || scene.physics.update(dt));

    // === INSTANCE SYNC ===
    let (_, sync_ms) = timed(perf_on, || {
        scene.shapes.update_from_physics(&scene.physics, time)
    });

    scene.frame += 1;

    if let Some(t0) = frame_start {
        let step = scene.physics.last_step_stats();
        let stats = &mut scene.perf_stats;
        stats.frame_ms = t0.elapsed_ms();
        stats.commands_ms = commands_ms;
        stats.physics_ms = physics_ms;
        stats.sync_ms = sync_ms;
        stats.commands_applied = applied;
        stats.body_count = scene.physics.body_count() as u32;
        stats.slot_count = scene.shapes.total_shape_count();
        stats.pair_checks = step.pair_checks;
        stats.repulsions = step.repulsions;
        stats.attractions = step.attractions;
        stats.impulses = step.impulses;
        stats.boundary_hits = step.boundary_hits;
        stats.non_finite_fixes = step.non_finite_fixes;
    }
}
