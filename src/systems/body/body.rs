use glam::Vec3;

use crate::domain::shapes::ShapeKind;

use super::aabb::Aabb;
use super::extent::BodyExtent;

/// Floor for the mass used as a divisor.
const MIN_MASS: f32 = 1e-6;

/// Unique handle for a body. Never reused within a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Simulated body - moves as a single point mass
#[derive(Clone, Debug)]
pub struct Body {
    /// Unique ID for this body
    pub id: BodyId,
    /// Shape-specific size (collision proxy + default mass)
    pub extent: BodyExtent,

    // === Physics State ===
    /// World position (center of mass)
    pub position: Vec3,
    /// Velocity (units per second)
    pub velocity: Vec3,
    /// Force accumulated during the current step
    pub force: Vec3,
    /// Always > 0
    pub mass: f32,

    /// Spin around Y (radians)
    pub rotation: f32,
    /// Spin rate (radians per second)
    pub rotation_velocity: f32,

    /// Steps until the next random impulse
    pub impulse_countdown: i32,
}

impl Body {
    pub(crate) fn new(
        id: BodyId,
        extent: BodyExtent,
        position: Vec3,
        mass: f32,
        rotation_velocity: f32,
        impulse_countdown: i32,
    ) -> Self {
        Self {
            id,
            extent,
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            mass,
            rotation: 0.0,
            rotation_velocity,
            impulse_countdown,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.extent.kind()
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.extent.half_extents())
    }

    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    #[inline]
    pub fn clear_force(&mut self) {
        self.force = Vec3::ZERO;
    }

    /// Semi-implicit Euler: velocity from force, then position from velocity.
    pub(crate) fn integrate(&mut self, dt: f32) {
        let inv_mass = 1.0 / self.mass.max(MIN_MASS);
        self.velocity += self.force * (inv_mass * dt);
        self.position += self.velocity * dt;
        self.rotation += self.rotation_velocity * dt;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
