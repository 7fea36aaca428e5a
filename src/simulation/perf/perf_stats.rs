use wasm_bindgen::prelude::*;

/// Per-frame perf snapshot (all zeros while perf metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) commands_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) body_count: u32,
    pub(super) slot_count: u32,
    pub(super) commands_applied: u32,
    pub(super) pair_checks: u32,
    pub(super) repulsions: u32,
    pub(super) attractions: u32,
    pub(super) impulses: u32,
    pub(super) boundary_hits: u32,
    pub(super) non_finite_fixes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn commands_ms(&self) -> f64 { self.commands_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn slot_count(&self) -> u32 { self.slot_count }
    #[wasm_bindgen(getter)]
    pub fn commands_applied(&self) -> u32 { self.commands_applied }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn repulsions(&self) -> u32 { self.repulsions }
    #[wasm_bindgen(getter)]
    pub fn attractions(&self) -> u32 { self.attractions }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn boundary_hits(&self) -> u32 { self.boundary_hits }
    #[wasm_bindgen(getter)]
    pub fn non_finite_fixes(&self) -> u32 { self.non_finite_fixes }
}
