//! Body - a simulated point mass with a collision-proxy extent
//!
//! One `Body` type for every shape kind. The kind-specific part lives in the
//! `BodyExtent` sum type, and AABB / mass are resolved with a `match` on it.
//! Complex kinds are approximated on purpose: cone and cylinder collide as
//! boxes, torus and octahedron as spheres.

mod aabb;
mod body;
mod extent;

pub use aabb::Aabb;
pub use body::{Body, BodyId};
pub use extent::BodyExtent;
