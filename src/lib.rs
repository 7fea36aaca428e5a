//! Shapefield Engine - physics-driven instanced shapes for the portfolio scene
//!
//! Floating spheres, cones, cylinders, tori and octahedra that repel when
//! they touch and drift together otherwise. Rendered by the host with one
//! instanced mesh per kind.
//!
//! Architecture:
//! - core/       - logging macros, RNG
//! - domain/     - shape kinds, config, errors
//! - systems/    - PhysicsWorld, ShapeInstanceManager
//! - simulation/ - Scene orchestration + wasm facade

// Utils with logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::config::SceneConfig;
pub use domain::error::ShapeError;
pub use domain::shapes::{ShapeBreakdown, ShapeKind};
pub use simulation::{PerfStats, PoolLayout, Scene, SceneCommand, SceneCore};
pub use systems::body::{Aabb, Body, BodyExtent, BodyId};
pub use systems::instancing::{InstancePool, ShapeInstanceManager};
pub use systems::physics_world::{PhysicsWorld, StepStats};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Shapefield engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export shape kind IDs for JS (index into `pool_layout`)
#[wasm_bindgen]
pub fn shape_sphere() -> u8 { domain::shapes::SHAPE_SPHERE }
#[wasm_bindgen]
pub fn shape_cone() -> u8 { domain::shapes::SHAPE_CONE }
#[wasm_bindgen]
pub fn shape_cylinder() -> u8 { domain::shapes::SHAPE_CYLINDER }
#[wasm_bindgen]
pub fn shape_torus() -> u8 { domain::shapes::SHAPE_TORUS }
#[wasm_bindgen]
pub fn shape_octahedron() -> u8 { domain::shapes::SHAPE_OCTAHEDRON }

/// Number of shape kinds (and instance pools)
#[wasm_bindgen]
pub fn shape_kind_count() -> u8 { domain::shapes::SHAPE_KIND_COUNT as u8 }
