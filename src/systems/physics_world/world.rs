use glam::Vec3;

use crate::core::utils::random::{rand_int, rand_range, seed_state};
use crate::domain::config::{validate_bounds, validate_damping, SceneConfig};
use crate::domain::error::ShapeError;
use crate::domain::shapes::ShapeKind;
use crate::systems::body::{Aabb, Body, BodyExtent, BodyId};

use super::bounds::constrain_to_bounds;
use super::forces::{apply_gravity, apply_pair_forces, apply_random_impulses};
use super::{INITIAL_IMPULSE_COUNTDOWN, SPIN_HALF_RANGE};

/// Counters from the last `update` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub pair_checks: u32,
    pub repulsions: u32,
    pub attractions: u32,
    pub impulses: u32,
    pub boundary_hits: u32,
    /// Bodies whose state had to be reset to stay finite.
    pub non_finite_fixes: u32,
}

/// Owns every simulated body
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    next_id: u32,

    gravity: Vec3,
    bounds: Aabb,
    damping: f32,
    attraction_constant: f32,

    rng_state: u32,
    last_step: StepStats,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::from_config(&SceneConfig::default())
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity: Vec3::from_array(config.gravity),
            bounds: Aabb::new(
                Vec3::from_array(config.bounds_min),
                Vec3::from_array(config.bounds_max),
            ),
            damping: config.damping,
            attraction_constant: config.attraction_constant,
            rng_state: seed_state(config.seed),
            last_step: StepStats::default(),
        }
    }

    /// Create a body from loose kind parameters and add it to the world.
    ///
    /// `params` are radius; radius & height; or major & minor radius.
    /// `mass` overrides the per-kind formula when given.
    pub fn create_body(
        &mut self,
        kind: ShapeKind,
        position: Vec3,
        params: &[f32],
        mass: Option<f32>,
    ) -> Result<BodyId, ShapeError> {
        let extent = BodyExtent::from_params(kind, params)?;
        self.insert_body(extent, position, mass)
    }

    /// Same as `create_body`, with the kind given by name.
    pub fn create_body_named(
        &mut self,
        kind: &str,
        position: Vec3,
        params: &[f32],
        mass: Option<f32>,
    ) -> Result<BodyId, ShapeError> {
        let kind = ShapeKind::from_name(kind)?;
        self.create_body(kind, position, params, mass)
    }

    /// Add a body with an already-built extent.
    pub fn insert_body(
        &mut self,
        extent: BodyExtent,
        position: Vec3,
        mass: Option<f32>,
    ) -> Result<BodyId, ShapeError> {
        if !position.is_finite() {
            return Err(ShapeError::InvalidArgument(format!(
                "body position must be finite, got {}",
                position
            )));
        }

        let mass = match mass {
            Some(m) if m.is_finite() && m > 0.0 => m,
            Some(m) => {
                return Err(ShapeError::InvalidArgument(format!(
                    "mass must be positive and finite, got {}",
                    m
                )))
            }
            None => extent.default_mass(),
        };

        let id = BodyId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(ShapeError::IdsExhausted)?;

        let spin = rand_range(&mut self.rng_state, -SPIN_HALF_RANGE, SPIN_HALF_RANGE);
        let countdown = rand_int(
            &mut self.rng_state,
            INITIAL_IMPULSE_COUNTDOWN.0,
            INITIAL_IMPULSE_COUNTDOWN.1,
        );

        self.bodies
            .push(Body::new(id, extent, position, mass, spin, countdown));
        Ok(id)
    }

    /// Remove a body by ID. Returns false when it was not present.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        match self.bodies.iter().position(|b| b.id == id) {
            Some(idx) => {
                // Keep storage order so pair summation order stays stable.
                self.bodies.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove all bodies. IDs keep counting up.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.body(id).is_some()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn aabb(&self, id: BodyId) -> Option<Aabb> {
        self.body(id).map(Body::aabb)
    }

    /// First body (in storage order) whose center is within `radius` of `point`.
    pub fn body_at(&self, point: Vec3, radius: f32) -> Option<BodyId> {
        self.bodies
            .iter()
            .find(|b| b.position.distance(point) < radius)
            .map(|b| b.id)
    }

    pub fn last_step_stats(&self) -> StepStats {
        self.last_step
    }

    /// Advance every body by `dt` seconds. Non-positive or non-finite `dt`
    /// does nothing.
    pub fn update(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }

        let mut stats = StepStats::default();

        for body in self.bodies.iter_mut() {
            body.clear_force();
        }

        apply_gravity(&mut self.bodies, self.gravity);
        apply_pair_forces(&mut self.bodies, self.attraction_constant, &mut stats);
        apply_random_impulses(&mut self.bodies, &mut self.rng_state, &mut stats);

        for body in self.bodies.iter_mut() {
            let prev_position = body.position;

            body.integrate(dt);
            body.velocity *= self.damping;
            stats.boundary_hits += constrain_to_bounds(body, &self.bounds);

            // A single NaN never recovers under this integrator.
            if !body.velocity.is_finite() {
                body.velocity = Vec3::ZERO;
                stats.non_finite_fixes += 1;
            }
            if !body.position.is_finite() {
                body.position = prev_position;
                stats.non_finite_fixes += 1;
            }
        }

        self.last_step = stats;
    }

    // === Settings ===

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        if gravity.is_finite() {
            self.gravity = gravity;
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn set_bounds(&mut self, min: Vec3, max: Vec3) -> Result<(), String> {
        if !(min.is_finite() && max.is_finite()) {
            return Err("bounds must be finite".to_string());
        }
        validate_bounds(min.to_array(), max.to_array())?;
        self.bounds = Aabb::new(min, max);
        Ok(())
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn set_damping(&mut self, damping: f32) -> Result<(), String> {
        validate_damping(damping)?;
        self.damping = damping;
        Ok(())
    }

    pub fn attraction_constant(&self) -> f32 {
        self.attraction_constant
    }

    pub fn set_attraction_constant(&mut self, g: f32) {
        if g.is_finite() {
            self.attraction_constant = g;
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut world = PhysicsWorld::new();
        let a = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], None).unwrap();
        assert!(world.remove_body(a));
        let b = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_run_out_instead_of_repeating() {
        let mut world = PhysicsWorld::new();
        world.next_id = u32::MAX - 1;

        let last = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], None).unwrap();
        assert_eq!(last, BodyId(u32::MAX - 1));

        let err = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], None);
        assert_eq!(err, Err(ShapeError::IdsExhausted));
        let err = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], None);
        assert_eq!(err, Err(ShapeError::IdsExhausted));
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn new_body_starts_at_rest() {
        let mut world = PhysicsWorld::new();
        let id = world
            .create_body(ShapeKind::Torus, Vec3::new(1.0, 2.0, 3.0), &[2.0, 0.5], None)
            .unwrap();
        let body = world.body(id).unwrap();

        assert_eq!(body.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.force, Vec3::ZERO);
        assert_eq!(body.rotation, 0.0);
        assert!(body.rotation_velocity.abs() <= SPIN_HALF_RANGE);
        assert!((0..300).contains(&body.impulse_countdown));
        assert_eq!(body.mass, 3.0);
    }

    #[test]
    fn mass_override_must_be_positive() {
        let mut world = PhysicsWorld::new();
        let id = world
            .create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], Some(7.5))
            .unwrap();
        assert_eq!(world.body(id).unwrap().mass, 7.5);

        let err = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], Some(0.0));
        assert!(matches!(err, Err(ShapeError::InvalidArgument(_))));
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let mut world = PhysicsWorld::new();
        let err = world.create_body(ShapeKind::Sphere, Vec3::new(f32::NAN, 0.0, 0.0), &[1.0], None);
        assert!(err.is_err());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn body_at_finds_nearest_in_storage_order() {
        let mut world = PhysicsWorld::new();
        let a = world.create_body(ShapeKind::Sphere, Vec3::ZERO, &[1.0], None).unwrap();
        let _b = world
            .create_body(ShapeKind::Sphere, Vec3::new(20.0, 0.0, 0.0), &[1.0], None)
            .unwrap();

        assert_eq!(world.body_at(Vec3::new(1.0, 1.0, 0.0), 5.0), Some(a));
        assert_eq!(world.body_at(Vec3::new(10.0, 0.0, 0.0), 5.0), None);
    }

    #[test]
    fn settings_validate_input() {
        let mut world = PhysicsWorld::new();
        assert!(world.set_damping(1.2).is_err());
        assert_eq!(world.damping(), 0.98);
        assert!(world.set_damping(0.5).is_ok());
        assert_eq!(world.damping(), 0.5);

        assert!(world.set_bounds(Vec3::ONE, Vec3::ZERO).is_err());
        assert!(world.set_bounds(Vec3::splat(-1.0), Vec3::ONE).is_ok());

        world.set_gravity(Vec3::new(0.0, f32::INFINITY, 0.0));
        assert_eq!(world.gravity(), Vec3::new(0.0, -0.1, 0.0));
    }
}
