//! Scene - explicit context for the shape field
//!
//! Owned by the render-loop driver. Holds the physics world, the instance
//! manager, the queue of pending UI commands, and perf counters.
//!
//! Per frame (`frame(dt, time)`):
//! 1. apply queued commands (spawn / remove / clear from terminal or panels)
//! 2. `PhysicsWorld::update(dt)`
//! 3. `ShapeInstanceManager::update_from_physics(time)`
//!
//! Commands never run inside the pairwise force pass.

use glam::Vec3;

use crate::domain::config::SceneConfig;
use crate::domain::error::ShapeError;
use crate::domain::shapes::{ShapeBreakdown, ShapeKind};
use crate::systems::body::{Aabb, Body, BodyId};
use crate::systems::instancing::ShapeInstanceManager;
use crate::systems::physics_world::PhysicsWorld;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/populate.rs"]
mod populate;
mod facade;

pub use commands::SceneCommand;
pub use facade::{PoolLayout, Scene};
pub use perf_stats::PerfStats;

/// Scratch buffers handed to the renderer
pub(crate) struct RenderBuffers {
    /// `[id, minx, miny, minz, maxx, maxy, maxz]` per body
    pub(crate) aabb_buffer: Vec<f32>,
}

/// Floats per body in the AABB extraction buffer.
pub const AABB_STRIDE: usize = 7;

/// The simulation scene
pub struct SceneCore {
    config: SceneConfig,
    physics: PhysicsWorld,
    shapes: ShapeInstanceManager,
    pending: Vec<SceneCommand>,

    // State
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Create a scene with the site's default settings
    pub fn new() -> Self {
        init::create_scene_core(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_scene_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SceneConfig::from_json(json)?;
        Ok(init::create_scene_core(config))
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// Direct world access for tools and tests. Bodies added here have no
    /// instance slot.
    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    pub fn shapes(&self) -> &ShapeInstanceManager {
        &self.shapes
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    // === SHAPE API (immediate) ===

    /// Spawn a shape now. Only call between frames.
    pub fn spawn_shape(
        &mut self,
        kind: ShapeKind,
        position: Vec3,
        scale: f32,
        color: Option<u32>,
    ) -> Result<BodyId, ShapeError> {
        self.shapes
            .add_shape(&mut self.physics, kind, position, scale, color)
    }

    /// Spawn a kind at a random spot near the middle of the field.
    pub fn spawn_random(&mut self, kind: ShapeKind) -> Result<BodyId, ShapeError> {
        populate::spawn_random(self, kind)
    }

    /// Seed the field with the site's starting mix of shapes.
    /// Returns how many were spawned.
    pub fn populate_initial_shapes(&mut self) -> usize {
        populate::populate_initial_shapes(self)
    }

    /// Remove a body and park its slot. False when unknown.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        self.shapes.remove_body(&mut self.physics, id)
    }

    /// Remove every shape
    pub fn clear(&mut self) {
        self.shapes.clear(&mut self.physics);
    }

    // === COMMAND QUEUE ===

    /// Queue a command for the start of the next frame
    pub fn queue(&mut self, command: SceneCommand) {
        commands::queue(self, command);
    }

    pub fn queue_spawn_named(
        &mut self,
        kind: &str,
        position: Vec3,
        scale: f32,
        color: Option<u32>,
    ) -> Result<(), ShapeError> {
        commands::queue_spawn_named(self, kind, position, scale, color)
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Apply all queued commands now. Returns how many succeeded.
    pub fn apply_pending_commands(&mut self) -> u32 {
        commands::apply_pending(self)
    }

    // === FRAME ===

    /// Commands, physics, then instance sync.
    pub fn frame(&mut self, dt: f32, time: f32) {
        step::frame(self, dt, time);
    }

    /// Physics only
    pub fn step_physics(&mut self, dt: f32) {
        self.physics.update(dt);
    }

    /// Instance sync only
    pub fn sync_instances(&mut self, time: f32) {
        self.shapes.update_from_physics(&self.physics, time);
    }

    // === QUERIES ===

    pub fn total_shape_count(&self) -> u32 {
        self.shapes.total_shape_count()
    }

    pub fn shape_breakdown(&self) -> ShapeBreakdown {
        self.shapes.shape_breakdown()
    }

    pub fn live_body_count(&self) -> usize {
        self.physics.body_count()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.physics.body(id)
    }

    pub fn aabb(&self, id: BodyId) -> Option<Aabb> {
        self.physics.aabb(id)
    }

    pub fn body_at(&self, point: Vec3, radius: f32) -> Option<BodyId> {
        self.physics.body_at(point, radius)
    }

    // === RENDER EXTRACT ===

    pub fn take_dirty_mask(&mut self) -> u8 {
        self.shapes.take_dirty_mask()
    }

    /// Fill the AABB buffer for every live body; returns the body count.
    pub fn extract_aabbs(&mut self) -> usize {
        render_extract::extract_aabbs(self)
    }

    pub fn aabb_buffer(&self) -> &[f32] {
        &self.render.aabb_buffer
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        settings::set_gravity(self, x, y, z);
    }

    pub fn set_damping(&mut self, damping: f32) -> Result<(), String> {
        settings::set_damping(self, damping)
    }

    pub fn set_attraction_constant(&mut self, g: f32) {
        settings::set_attraction_constant(self, g);
    }

    pub fn set_bounds(&mut self, min: Vec3, max: Vec3) -> Result<(), String> {
        settings::set_bounds(self, min, max)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
