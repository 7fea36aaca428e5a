//! PhysicsWorld - toy attraction/repulsion field for the shape scene
//!
//! Per step: gravity, an O(n^2) pairwise pass (AABB overlap => repulsion,
//! otherwise attraction inside a cutoff), random impulses, semi-implicit
//! Euler, damping, and inelastic reflection off the world bounds.
//!
//! The pairwise pass has no broad phase. It is sized for tens to a few
//! hundred bodies; the scene never spawns more than that.

mod bounds;
mod forces;
mod world;

pub use forces::{pair_force, PairForce};
pub use world::{PhysicsWorld, StepStats};

/// Repulsion magnitude is `REPULSION_STRENGTH / (distance + REPULSION_SOFTENING)`.
pub const REPULSION_STRENGTH: f32 = 50.0;
pub const REPULSION_SOFTENING: f32 = 0.1;
/// Pairs farther apart than this do not attract.
pub const ATTRACTION_RANGE: f32 = 30.0;
/// Velocity multiplier applied on a boundary bounce.
pub const BOUNCE_RESTITUTION: f32 = -0.7;
/// Countdown range (steps) for the first random impulse.
pub const INITIAL_IMPULSE_COUNTDOWN: (i32, i32) = (0, 300);
/// Countdown range (steps) after an impulse fired.
pub const IMPULSE_COUNTDOWN: (i32, i32) = (200, 600);
/// Half-width of the random impulse per axis.
pub const IMPULSE_HALF_RANGE: [f32; 3] = [5.0, 2.5, 5.0];
/// Half-width of the initial random spin rate.
pub const SPIN_HALF_RANGE: f32 = 0.01;
