//! Scene configuration
//!
//! Loaded from JSON (camelCase keys, every field optional) so the page can
//! tweak the field without a rebuild. Defaults reproduce the live site.

use serde::{Deserialize, Serialize};

/// Largest pool the page will allocate (64 B of matrix + 12 B of color per
/// slot, five pools: about 25 MB at the limit).
pub const MAX_INSTANCES_PER_TYPE: usize = 65_536;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    pub gravity: [f32; 3],
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
    /// Per-step velocity multiplier, in (0, 1].
    pub damping: f32,
    /// G in `G * m1 * m2 / (d^2 + 1)`.
    pub attraction_constant: f32,
    pub max_instances_per_type: usize,
    pub seed: u32,
    /// Reuse parked slots instead of growing the pool.
    pub recycle_slots: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -0.1, 0.0],
            bounds_min: [-45.0, -120.0, -45.0],
            bounds_max: [45.0, 30.0, 45.0],
            damping: 0.98,
            attraction_constant: 2.0,
            max_instances_per_type: 1000,
            seed: 12345,
            recycle_slots: false,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let all_finite = self
            .gravity
            .iter()
            .chain(self.bounds_min.iter())
            .chain(self.bounds_max.iter())
            .chain([self.damping, self.attraction_constant].iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err("config contains a non-finite number".to_string());
        }

        validate_damping(self.damping)?;
        validate_bounds(self.bounds_min, self.bounds_max)?;

        if self.max_instances_per_type == 0 {
            return Err("maxInstancesPerType must be at least 1".to_string());
        }
        if self.max_instances_per_type > MAX_INSTANCES_PER_TYPE {
            return Err(format!(
                "maxInstancesPerType must be at most {}, got {}",
                MAX_INSTANCES_PER_TYPE, self.max_instances_per_type
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f32) -> Result<(), String> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(format!("damping must be in (0, 1], got {}", damping))
    }
}

pub(crate) fn validate_bounds(min: [f32; 3], max: [f32; 3]) -> Result<(), String> {
    for axis in 0..3 {
        if !(min[axis] < max[axis]) {
            return Err(format!(
                "bounds min must be below max on every axis (axis {}: {} >= {})",
                axis, min[axis], max[axis]
            ));
        }
    }
    Ok(())
}
