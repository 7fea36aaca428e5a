use glam::{Mat4, Quat, Vec3};

use crate::domain::shapes::ShapeKind;

use super::{PARKED_POSITION, PARKED_SCALE};

/// Transform written into a slot whose body is gone.
pub fn parked_matrix() -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(PARKED_SCALE),
        Quat::IDENTITY,
        Vec3::from_array(PARKED_POSITION),
    )
}

/// Fixed-capacity instance buffers for one shape kind
pub struct InstancePool {
    kind: ShapeKind,
    capacity: usize,
    /// Slots handed out so far; the renderer draws `0..count`.
    count: usize,
    matrices: Vec<Mat4>,
    colors: Vec<Vec3>,
    /// Parked slots available for reuse (only filled when recycling).
    free_slots: Vec<usize>,
    dirty: bool,
}

impl InstancePool {
    pub fn new(kind: ShapeKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            count: 0,
            matrices: vec![Mat4::ZERO; capacity],
            colors: vec![Vec3::ZERO; capacity],
            free_slots: Vec::new(),
            dirty: false,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Visible instance count (high-water mark of handed-out slots).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn free_slot_count(&self) -> usize {
        self.free_slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.capacity && self.free_slots.is_empty()
    }

    /// Hand out a slot: a recycled one first, otherwise the next fresh index.
    pub(super) fn allocate(&mut self) -> Option<usize> {
        if let Some(slot) = self.free_slots.pop() {
            return Some(slot);
        }
        if self.count >= self.capacity {
            return None;
        }
        let slot = self.count;
        self.count += 1;
        Some(slot)
    }

    #[inline]
    pub(super) fn write(&mut self, slot: usize, matrix: Mat4, color: Vec3) {
        self.matrices[slot] = matrix;
        self.colors[slot] = color;
    }

    /// Hide a slot in place. With `recycle` it becomes reusable.
    pub(super) fn park(&mut self, slot: usize, recycle: bool) {
        self.matrices[slot] = parked_matrix();
        if recycle {
            self.free_slots.push(slot);
        }
        self.dirty = true;
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag (the renderer calls this before upload).
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn matrix(&self, slot: usize) -> Option<Mat4> {
        self.matrices.get(slot).copied()
    }

    pub fn color(&self, slot: usize) -> Option<Vec3> {
        self.colors.get(slot).copied()
    }

    /// `16 * capacity` floats, column-major per instance.
    pub fn matrix_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.matrices)
    }

    /// `3 * capacity` floats, RGB per instance.
    pub fn color_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}
