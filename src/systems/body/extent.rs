use glam::Vec3;

use crate::domain::error::ShapeError;
use crate::domain::shapes::ShapeKind;

/// Kind-specific size of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyExtent {
    Sphere { radius: f32 },
    /// Collides as a `2r x h x 2r` box.
    Cone { radius: f32, height: f32 },
    /// Collides as a `2r x h x 2r` box.
    Cylinder { radius: f32, height: f32 },
    /// Collides as a sphere of `major + minor`.
    Torus { major_radius: f32, minor_radius: f32 },
    /// Collides as a sphere of `radius`.
    Octahedron { radius: f32 },
}

impl BodyExtent {
    /// Build an extent from loose parameters (radius; radius, height;
    /// major, minor). Extra trailing values are ignored.
    pub fn from_params(kind: ShapeKind, params: &[f32]) -> Result<Self, ShapeError> {
        let needed = match kind {
            ShapeKind::Sphere | ShapeKind::Octahedron => 1,
            ShapeKind::Cone | ShapeKind::Cylinder | ShapeKind::Torus => 2,
        };
        if params.len() < needed {
            return Err(ShapeError::InvalidArgument(format!(
                "{} needs {} size parameter(s), got {}",
                kind,
                needed,
                params.len()
            )));
        }
        for &p in &params[..needed] {
            if !(p.is_finite() && p > 0.0) {
                return Err(ShapeError::InvalidArgument(format!(
                    "{} size parameters must be positive and finite, got {}",
                    kind, p
                )));
            }
        }

        Ok(match kind {
            ShapeKind::Sphere => BodyExtent::Sphere { radius: params[0] },
            ShapeKind::Cone => BodyExtent::Cone {
                radius: params[0],
                height: params[1],
            },
            ShapeKind::Cylinder => BodyExtent::Cylinder {
                radius: params[0],
                height: params[1],
            },
            ShapeKind::Torus => BodyExtent::Torus {
                major_radius: params[0],
                minor_radius: params[1],
            },
            ShapeKind::Octahedron => BodyExtent::Octahedron { radius: params[0] },
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            BodyExtent::Sphere { .. } => ShapeKind::Sphere,
            BodyExtent::Cone { .. } => ShapeKind::Cone,
            BodyExtent::Cylinder { .. } => ShapeKind::Cylinder,
            BodyExtent::Torus { .. } => ShapeKind::Torus,
            BodyExtent::Octahedron { .. } => ShapeKind::Octahedron,
        }
    }

    /// Mass used when the caller does not override it.
    pub fn default_mass(&self) -> f32 {
        match *self {
            BodyExtent::Sphere { radius } => radius * radius * 2.0,
            BodyExtent::Cone { radius, height } => radius * height * 1.5,
            BodyExtent::Cylinder { radius, height } => radius * radius * height * 2.0,
            BodyExtent::Torus {
                major_radius,
                minor_radius,
            } => major_radius * minor_radius * 3.0,
            BodyExtent::Octahedron { radius } => radius * radius * 1.8,
        }
    }

    /// Half extents of the collision proxy's AABB.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            BodyExtent::Cone { radius, height } | BodyExtent::Cylinder { radius, height } => {
                Vec3::new(radius, height * 0.5, radius)
            }
            _ => Vec3::splat(self.proxy_radius().unwrap_or_default()),
        }
    }

    /// Radius of the sphere proxy, or `None` for box-proxy kinds.
    pub fn proxy_radius(&self) -> Option<f32> {
        match *self {
            BodyExtent::Sphere { radius } | BodyExtent::Octahedron { radius } => Some(radius),
            BodyExtent::Torus {
                major_radius,
                minor_radius,
            } => Some(major_radius + minor_radius),
            BodyExtent::Cone { .. } | BodyExtent::Cylinder { .. } => None,
        }
    }
}
