//! Shape kinds and their per-kind constants
//!
//! A kind decides three things only: the collision proxy, the default mass
//! formula, and which instance pool renders it. Geometry lives on the JS side.

use glam::Vec3;
use serde::Serialize;

use super::error::ShapeError;

pub const SHAPE_SPHERE: u8 = 0;
pub const SHAPE_CONE: u8 = 1;
pub const SHAPE_CYLINDER: u8 = 2;
pub const SHAPE_TORUS: u8 = 3;
pub const SHAPE_OCTAHEDRON: u8 = 4;

/// Number of shape kinds (and instance pools).
pub const SHAPE_KIND_COUNT: usize = 5;

/// Colors picked at random when a spawn has no explicit color.
pub const PALETTE: [u32; 5] = [0x00ffff, 0xff6600, 0x9966ff, 0xff00ff, 0x00ff00];

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Sphere = SHAPE_SPHERE,
    Cone = SHAPE_CONE,
    Cylinder = SHAPE_CYLINDER,
    Torus = SHAPE_TORUS,
    Octahedron = SHAPE_OCTAHEDRON,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; SHAPE_KIND_COUNT] = [
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
        ShapeKind::Octahedron,
    ];

    pub fn from_id(id: u8) -> Result<Self, ShapeError> {
        match id {
            SHAPE_SPHERE => Ok(ShapeKind::Sphere),
            SHAPE_CONE => Ok(ShapeKind::Cone),
            SHAPE_CYLINDER => Ok(ShapeKind::Cylinder),
            SHAPE_TORUS => Ok(ShapeKind::Torus),
            SHAPE_OCTAHEDRON => Ok(ShapeKind::Octahedron),
            _ => Err(ShapeError::InvalidArgument(format!("unknown shape id: {}", id))),
        }
    }

    /// Parse a kind name as typed in the terminal (`spawn torus`).
    pub fn from_name(name: &str) -> Result<Self, ShapeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(ShapeKind::Sphere),
            "cone" => Ok(ShapeKind::Cone),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "torus" => Ok(ShapeKind::Torus),
            "octahedron" => Ok(ShapeKind::Octahedron),
            _ => Err(ShapeError::InvalidArgument(format!("unknown shape kind: {}", name))),
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cone => "cone",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Torus => "torus",
            ShapeKind::Octahedron => "octahedron",
        }
    }

    /// Range the random base scale of a spawned shape is drawn from.
    pub fn base_scale_range(self) -> (f32, f32) {
        match self {
            ShapeKind::Sphere => (3.0, 8.0),
            ShapeKind::Cone => (3.0, 7.0),
            ShapeKind::Cylinder => (2.0, 5.0),
            ShapeKind::Torus => (4.0, 8.0),
            ShapeKind::Octahedron => (3.0, 8.0),
        }
    }

    /// Body parameters for a shape rendered at `scale`, matching the unit
    /// geometries the renderer instances.
    pub fn params_for_scale(self, scale: f32) -> ([f32; 2], usize) {
        match self {
            ShapeKind::Sphere | ShapeKind::Octahedron => ([scale, 0.0], 1),
            ShapeKind::Cone => ([scale * 0.5, scale * 2.0], 2),
            ShapeKind::Cylinder => ([scale * 0.4, scale * 2.5], 2),
            ShapeKind::Torus => ([scale, scale * 0.3], 2),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `0xRRGGBB` into a linear 0..1 RGB triple.
pub fn color_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(r, g, b)
}

/// Per-kind slot counts, serialized for the debug panel / terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShapeBreakdown {
    pub sphere: u32,
    pub cone: u32,
    pub cylinder: u32,
    pub torus: u32,
    pub octahedron: u32,
}

impl ShapeBreakdown {
    pub fn from_counts(counts: [u32; SHAPE_KIND_COUNT]) -> Self {
        Self {
            sphere: counts[SHAPE_SPHERE as usize],
            cone: counts[SHAPE_CONE as usize],
            cylinder: counts[SHAPE_CYLINDER as usize],
            torus: counts[SHAPE_TORUS as usize],
            octahedron: counts[SHAPE_OCTAHEDRON as usize],
        }
    }

    pub fn get(&self, kind: ShapeKind) -> u32 {
        match kind {
            ShapeKind::Sphere => self.sphere,
            ShapeKind::Cone => self.cone,
            ShapeKind::Cylinder => self.cylinder,
            ShapeKind::Torus => self.torus,
            ShapeKind::Octahedron => self.octahedron,
        }
    }

    pub fn total(&self) -> u32 {
        self.sphere + self.cone + self.cylinder + self.torus + self.octahedron
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_ids_round_trip_through_kinds() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(kind.name()), Ok(kind));
            assert_eq!(ShapeKind::from_id(kind.id()), Ok(kind));
        }
        assert_eq!(ShapeKind::from_name("  Torus "), Ok(ShapeKind::Torus));
    }

    #[test]
    fn unknown_kind_is_invalid_argument() {
        assert!(matches!(
            ShapeKind::from_name("dodecahedron"),
            Err(ShapeError::InvalidArgument(_))
        ));
        assert!(matches!(ShapeKind::from_id(9), Err(ShapeError::InvalidArgument(_))));
    }

    #[test]
    fn hex_colors_convert_to_unit_rgb() {
        let c = color_from_hex(0xff6600);
        assert_eq!(c.x, 1.0);
        assert!((c.y - 0.4).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn breakdown_serializes_every_kind() {
        let b = ShapeBreakdown::from_counts([1, 2, 3, 4, 5]);
        assert_eq!(b.total(), 15);
        assert_eq!(b.get(ShapeKind::Torus), 4);
        assert_eq!(
            b.to_json(),
            r#"{"sphere":1,"cone":2,"cylinder":3,"torus":4,"octahedron":5}"#
        );
    }
}
