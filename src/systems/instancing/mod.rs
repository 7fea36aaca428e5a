//! Instanced rendering pools
//!
//! One fixed-capacity pool per shape kind. Each live body owns one slot;
//! every frame its transform and color are copied in and the pool is flagged
//! dirty so JS re-uploads the buffer. Buffers are read straight out of WASM
//! memory (column-major 4x4 matrices, RGB floats).
//!
//! Slots are handed out densely and, by default, never reclaimed: removing a
//! body parks its slot far below the scene at near-zero scale. A long session
//! can therefore run a pool out of slots while few shapes are visible. Set
//! `recycleSlots` to reuse parked slots instead.

mod manager;
mod pool;

pub use manager::{InstanceInfo, ShapeInstanceManager};
pub use pool::{parked_matrix, InstancePool};

/// Where removed instances are parked.
pub const PARKED_POSITION: [f32; 3] = [0.0, -10000.0, 0.0];
pub const PARKED_SCALE: f32 = 0.001;
/// Upper bound of the brightness multiplier applied in `update_from_physics`.
pub const MAX_BRIGHTNESS: f32 = 1.3;
