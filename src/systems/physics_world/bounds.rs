use crate::systems::body::{Aabb, Body};

use super::BOUNCE_RESTITUTION;

/// Push a body back inside `bounds` axis by axis, reflecting the velocity
/// component with energy loss. Returns the number of axes that bounced.
pub(super) fn constrain_to_bounds(body: &mut Body, bounds: &Aabb) -> u32 {
    let aabb = body.aabb();
    let mut hits = 0;

    for axis in 0..3 {
        if aabb.min[axis] < bounds.min[axis] {
            body.position[axis] += bounds.min[axis] - aabb.min[axis];
            body.velocity[axis] *= BOUNCE_RESTITUTION;
            hits += 1;
        } else if aabb.max[axis] > bounds.max[axis] {
            body.position[axis] -= aabb.max[axis] - bounds.max[axis];
            body.velocity[axis] *= BOUNCE_RESTITUTION;
            hits += 1;
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::{BodyExtent, BodyId};
    use glam::Vec3;

    fn cone_at(position: Vec3, velocity: Vec3) -> Body {
        let extent = BodyExtent::Cone {
            radius: 1.0,
            height: 4.0,
        };
        let mut body = Body::new(BodyId(1), extent, position, extent.default_mass(), 0.0, 100);
        body.velocity = velocity;
        body
    }

    #[test]
    fn reflects_on_each_offending_axis() {
        let bounds = Aabb::new(Vec3::splat(-10.0), Vec3::splat(10.0));
        let mut body = cone_at(Vec3::new(-9.5, 9.0, 0.0), Vec3::new(-2.0, 3.0, 1.0));

        let hits = constrain_to_bounds(&mut body, &bounds);

        assert_eq!(hits, 2);
        assert_eq!(body.position, Vec3::new(-9.0, 8.0, 0.0));
        assert!((body.velocity.x - 1.4).abs() < 1e-6);
        assert!((body.velocity.y + 2.1).abs() < 1e-6);
        assert_eq!(body.velocity.z, 1.0);
    }

    #[test]
    fn leaves_bodies_inside_alone() {
        let bounds = Aabb::new(Vec3::splat(-10.0), Vec3::splat(10.0));
        let mut body = cone_at(Vec3::ZERO, Vec3::ONE);
        assert_eq!(constrain_to_bounds(&mut body, &bounds), 0);
        assert_eq!(body.position, Vec3::ZERO);
        assert_eq!(body.velocity, Vec3::ONE);
    }
}
