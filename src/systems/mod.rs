//! Simulation systems: rigid bodies, the force integrator, and instance pools.

pub mod body;
pub mod instancing;
pub mod physics_world;
