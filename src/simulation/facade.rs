use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::domain::shapes::ShapeKind;
use crate::systems::body::BodyId;

use super::commands::SceneCommand;
use super::perf_stats::PerfStats;
use super::SceneCore;

/// Where one kind's instance buffers live in WASM memory
#[wasm_bindgen]
pub struct PoolLayout {
    matrices_ptr: u32,
    matrices_len_elements: u32,
    matrices_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    count: u32,
    capacity: u32,
    dirty: bool,
}

#[wasm_bindgen]
impl PoolLayout {
    #[wasm_bindgen(getter)]
    pub fn matrices_ptr(&self) -> u32 { self.matrices_ptr }
    #[wasm_bindgen(getter)]
    pub fn matrices_len_elements(&self) -> u32 { self.matrices_len_elements }
    #[wasm_bindgen(getter)]
    pub fn matrices_len_bytes(&self) -> u32 { self.matrices_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    /// Instances the renderer should draw (`InstancedMesh.count`)
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 { self.count }
    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.capacity }
    /// Buffers changed since the last `take_dirty_mask`
    #[wasm_bindgen(getter)]
    pub fn dirty(&self) -> bool { self.dirty }
}

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create a scene with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SceneCore::new(),
        }
    }

    /// Create a scene from a JSON config (camelCase, all keys optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<Scene, JsValue> {
        let core = SceneCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        console_log!("Scene created from config");
        Ok(Self { core })
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame_count() }

    // === SHAPE API ===

    /// Spawn a shape immediately. Returns the body ID, or `undefined` when
    /// the kind is unknown or its pool is full.
    pub fn spawn_shape(
        &mut self,
        kind: &str,
        x: f32,
        y: f32,
        z: f32,
        scale: Option<f32>,
        color: Option<u32>,
    ) -> Option<u32> {
        let kind = ShapeKind::from_name(kind)
            .map_err(|e| console_error!("{}", e))
            .ok()?;
        self.core
            .spawn_shape(kind, Vec3::new(x, y, z), scale.unwrap_or(1.0), color)
            .map(|id| id.0)
            .map_err(|e| console_warn!("{}", e))
            .ok()
    }

    /// Seed the field with the default mix of shapes
    pub fn populate_initial_shapes(&mut self) -> usize {
        self.core.populate_initial_shapes()
    }

    /// Remove a body by ID (parks its slot). False when unknown.
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(BodyId(id))
    }

    // === COMMAND QUEUE (applied at the start of the next frame) ===

    pub fn queue_spawn(
        &mut self,
        kind: &str,
        x: f32,
        y: f32,
        z: f32,
        scale: Option<f32>,
        color: Option<u32>,
    ) -> Result<(), JsValue> {
        self.core
            .queue_spawn_named(kind, Vec3::new(x, y, z), scale.unwrap_or(1.0), color)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn queue_spawn_random(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind = ShapeKind::from_name(kind).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.queue(SceneCommand::SpawnRandom { kind });
        Ok(())
    }

    pub fn queue_remove(&mut self, id: u32) {
        self.core.queue(SceneCommand::Remove { id: BodyId(id) });
    }

    pub fn queue_clear(&mut self) {
        self.core.queue(SceneCommand::Clear);
    }

    pub fn pending_commands(&self) -> usize {
        self.core.pending_commands()
    }

    // === FRAME ===

    /// Apply queued commands, step physics by `dt` seconds, sync instances.
    /// `time` (seconds) drives the color pulse.
    pub fn frame(&mut self, dt: f32, time: f32) {
        self.core.frame(dt, time);
    }

    pub fn step_physics(&mut self, dt: f32) {
        self.core.step_physics(dt);
    }

    pub fn sync_instances(&mut self, time: f32) {
        self.core.sync_instances(time);
    }

    // === QUERIES ===

    pub fn total_shape_count(&self) -> u32 {
        self.core.total_shape_count()
    }

    pub fn live_body_count(&self) -> usize {
        self.core.live_body_count()
    }

    /// `{"sphere":n,"cone":n,...}`
    pub fn shape_breakdown_json(&self) -> String {
        self.core.shape_breakdown().to_json()
    }

    /// First body within `radius` of the point
    pub fn body_at(&self, x: f32, y: f32, z: f32, radius: Option<f32>) -> Option<u32> {
        self.core
            .body_at(Vec3::new(x, y, z), radius.unwrap_or(5.0))
            .map(|id| id.0)
    }

    /// `[x, y, z, rotation, kind_id]` or empty when unknown
    pub fn body_state(&self, id: u32) -> Vec<f32> {
        match self.core.body(BodyId(id)) {
            Some(b) => vec![
                b.position.x,
                b.position.y,
                b.position.z,
                b.rotation,
                b.kind().id() as f32,
            ],
            None => Vec::new(),
        }
    }

    // === RENDER EXTRACT ===

    /// Buffer layout for one kind (see `shape_*()` for IDs)
    pub fn pool_layout(&self, kind_id: u8) -> Result<PoolLayout, JsValue> {
        let kind = ShapeKind::from_id(kind_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let pool = self.core.shapes().pool(kind);
        let matrices = pool.matrix_floats();
        let colors = pool.color_floats();
        Ok(PoolLayout {
            matrices_ptr: matrices.as_ptr() as u32,
            matrices_len_elements: matrices.len() as u32,
            matrices_len_bytes: std::mem::size_of_val(matrices) as u32,
            colors_ptr: colors.as_ptr() as u32,
            colors_len_elements: colors.len() as u32,
            colors_len_bytes: std::mem::size_of_val(colors) as u32,
            count: pool.count() as u32,
            capacity: pool.capacity() as u32,
            dirty: pool.is_dirty(),
        })
    }

    /// Bit per kind ID whose buffers changed since the last call
    pub fn take_dirty_mask(&mut self) -> u8 {
        self.core.take_dirty_mask()
    }

    /// Fill the AABB debug buffer; returns the body count
    pub fn extract_aabbs(&mut self) -> usize {
        self.core.extract_aabbs()
    }

    /// Pointer to `[id, minx, miny, minz, maxx, maxy, maxz]` records (`id` as
    /// raw u32 bits)
    pub fn aabb_buffer_ptr(&self) -> *const f32 {
        self.core.aabb_buffer().as_ptr()
    }

    pub fn aabb_buffer_len(&self) -> usize {
        self.core.aabb_buffer().len()
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_gravity(x, y, z);
    }

    pub fn set_damping(&mut self, damping: f32) -> Result<(), JsValue> {
        self.core
            .set_damping(damping)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_attraction_constant(&mut self, g: f32) {
        self.core.set_attraction_constant(g);
    }

    pub fn set_bounds(
        &mut self,
        min_x: f32,
        min_y: f32,
        min_z: f32,
        max_x: f32,
        max_y: f32,
        max_z: f32,
    ) -> Result<(), JsValue> {
        self.core
            .set_bounds(Vec3::new(min_x, min_y, min_z), Vec3::new(max_x, max_y, max_z))
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Native access for tests and embedding
    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}
