use std::collections::HashMap;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::core::utils::random::{rand_index, rand_range, seed_state};
use crate::domain::config::SceneConfig;
use crate::domain::error::ShapeError;
use crate::domain::shapes::{color_from_hex, ShapeBreakdown, ShapeKind, PALETTE, SHAPE_KIND_COUNT};
use crate::systems::body::BodyId;
use crate::systems::physics_world::PhysicsWorld;

use super::pool::InstancePool;
use super::MAX_BRIGHTNESS;

/// Decorrelates the manager's RNG stream from the world's.
const RNG_SALT: u32 = 0x9E37_79B9;

/// Where a body is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceInfo {
    pub kind: ShapeKind,
    pub slot: usize,
    /// Base color before velocity/pulse brightening
    pub color: Vec3,
    /// Uniform render scale
    pub scale: f32,
}

/// Keeps one instance slot per body in sync with physics
pub struct ShapeInstanceManager {
    pools: Vec<InstancePool>,
    links: HashMap<BodyId, InstanceInfo>,
    max_instances_per_type: usize,
    recycle_slots: bool,
    rng_state: u32,
}

impl ShapeInstanceManager {
    pub fn new(max_instances_per_type: usize) -> Self {
        let config = SceneConfig {
            max_instances_per_type,
            ..SceneConfig::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let pools = ShapeKind::ALL
            .iter()
            .map(|&kind| InstancePool::new(kind, config.max_instances_per_type))
            .collect();

        Self {
            pools,
            links: HashMap::new(),
            max_instances_per_type: config.max_instances_per_type,
            recycle_slots: config.recycle_slots,
            rng_state: seed_state(config.seed ^ RNG_SALT),
        }
    }

    pub fn max_instances_per_type(&self) -> usize {
        self.max_instances_per_type
    }

    pub fn recycles_slots(&self) -> bool {
        self.recycle_slots
    }

    /// Spawn a shape: create its body, claim a slot, pick scale and color.
    ///
    /// Fails without touching the world or the pools when the kind's pool is
    /// full or an argument is invalid.
    pub fn add_shape(
        &mut self,
        world: &mut PhysicsWorld,
        kind: ShapeKind,
        position: Vec3,
        scale_multiplier: f32,
        color: Option<u32>,
    ) -> Result<BodyId, ShapeError> {
        if !(scale_multiplier.is_finite() && scale_multiplier > 0.0) {
            return Err(ShapeError::InvalidArgument(format!(
                "scale multiplier must be positive and finite, got {}",
                scale_multiplier
            )));
        }

        if self.pools[kind.index()].is_full() {
            console_warn!("Maximum instances reached for {}", kind);
            return Err(ShapeError::CapacityExceeded {
                kind,
                capacity: self.max_instances_per_type,
            });
        }

        let (lo, hi) = kind.base_scale_range();
        let scale = rand_range(&mut self.rng_state, lo, hi) * scale_multiplier;
        let (params, n) = kind.params_for_scale(scale);
        let id = world.create_body(kind, position, &params[..n], None)?;

        let hex = match color {
            Some(hex) => hex,
            None => PALETTE[rand_index(&mut self.rng_state, PALETTE.len())],
        };
        let base_color = color_from_hex(hex);

        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rand_range(&mut self.rng_state, 0.0, std::f32::consts::PI),
            rand_range(&mut self.rng_state, 0.0, std::f32::consts::PI),
            rand_range(&mut self.rng_state, 0.0, std::f32::consts::PI),
        );

        let pool = &mut self.pools[kind.index()];
        let Some(slot) = pool.allocate() else {
            // Checked above; only reachable if the pool changed in between.
            world.remove_body(id);
            return Err(ShapeError::CapacityExceeded {
                kind,
                capacity: self.max_instances_per_type,
            });
        };

        let matrix = Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position);
        pool.write(slot, matrix, base_color);
        pool.mark_dirty();

        self.links.insert(
            id,
            InstanceInfo {
                kind,
                slot,
                color: base_color,
                scale,
            },
        );

        Ok(id)
    }

    /// Same as `add_shape`, with the kind given by name.
    pub fn add_shape_named(
        &mut self,
        world: &mut PhysicsWorld,
        kind: &str,
        position: Vec3,
        scale_multiplier: f32,
        color: Option<u32>,
    ) -> Result<BodyId, ShapeError> {
        let kind = ShapeKind::from_name(kind).map_err(|e| {
            console_error!("{}", e);
            e
        })?;
        self.add_shape(world, kind, position, scale_multiplier, color)
    }

    /// Copy every linked body's transform and brightened color into its slot.
    ///
    /// `time` is in seconds and drives the per-slot pulse.
    pub fn update_from_physics(&mut self, world: &PhysicsWorld, time: f32) {
        let mut touched = [false; SHAPE_KIND_COUNT];

        for body in world.bodies() {
            let Some(info) = self.links.get(&body.id) else {
                continue;
            };

            let rotation = Quat::from_rotation_y(body.rotation);
            let matrix =
                Mat4::from_scale_rotation_translation(Vec3::splat(info.scale), rotation, body.position);
            let color = info.color * brightness(body.velocity.length(), info.slot, time);

            self.pools[info.kind.index()].write(info.slot, matrix, color);
            touched[info.kind.index()] = true;
        }

        for (pool, touched) in self.pools.iter_mut().zip(touched) {
            if touched {
                pool.mark_dirty();
            }
        }
    }

    /// Remove a body from the world and park its slot. Returns false when the
    /// body has no instance.
    pub fn remove_body(&mut self, world: &mut PhysicsWorld, id: BodyId) -> bool {
        let Some(info) = self.links.remove(&id) else {
            return false;
        };
        world.remove_body(id);
        self.pools[info.kind.index()].park(info.slot, self.recycle_slots);
        true
    }

    /// Remove every linked body and park all their slots.
    ///
    /// Slots are parked in body storage order so the recycled-slot order
    /// depends only on the spawn history.
    pub fn clear(&mut self, world: &mut PhysicsWorld) {
        let linked: Vec<BodyId> = world
            .bodies()
            .iter()
            .map(|b| b.id)
            .filter(|id| self.links.contains_key(id))
            .collect();

        for id in linked {
            self.remove_body(world, id);
        }

        // Links whose body was removed behind our back.
        let mut stale: Vec<(BodyId, InstanceInfo)> = self.links.drain().collect();
        stale.sort_by_key(|(id, _)| *id);
        for (_, info) in stale {
            self.pools[info.kind.index()].park(info.slot, self.recycle_slots);
        }
    }

    pub fn instance(&self, id: BodyId) -> Option<&InstanceInfo> {
        self.links.get(&id)
    }

    /// Bodies that currently own a slot.
    pub fn live_instance_count(&self) -> usize {
        self.links.len()
    }

    pub fn pool(&self, kind: ShapeKind) -> &InstancePool {
        &self.pools[kind.index()]
    }

    pub fn pools(&self) -> &[InstancePool] {
        &self.pools
    }

    /// Slots handed out for one kind.
    pub fn shape_count(&self, kind: ShapeKind) -> u32 {
        self.pools[kind.index()].count() as u32
    }

    pub fn total_shape_count(&self) -> u32 {
        self.pools.iter().map(|p| p.count() as u32).sum()
    }

    pub fn shape_breakdown(&self) -> ShapeBreakdown {
        let mut counts = [0u32; SHAPE_KIND_COUNT];
        for (count, pool) in counts.iter_mut().zip(self.pools.iter()) {
            *count = pool.count() as u32;
        }
        ShapeBreakdown::from_counts(counts)
    }

    /// Bit `kind.id()` set for every pool that needs an upload; clears the flags.
    pub fn take_dirty_mask(&mut self) -> u8 {
        let mut mask = 0u8;
        for pool in self.pools.iter_mut() {
            if pool.take_dirty() {
                mask |= 1 << pool.kind().id();
            }
        }
        mask
    }
}

/// Brightness multiplier: a slow per-slot pulse plus a boost for fast bodies.
#[inline]
fn brightness(speed: f32, slot: usize, time: f32) -> f32 {
    let velocity_factor = (speed * 0.1).min(1.0);
    let pulse = (time * 2.0 + slot as f32 * 0.5).sin() * 0.1 + 0.2;
    let emissive = pulse + velocity_factor * 0.3;
    (1.0 + emissive * 0.5).clamp(1.0, MAX_BRIGHTNESS)
}
