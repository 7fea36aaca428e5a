use super::{SceneCore, AABB_STRIDE};

/// Pack `[id, min.xyz, max.xyz]` for every live body, in storage order.
/// The buffer only grows; it is reused across calls.
///
/// The id slot holds the raw `u32` bits (read it through a `Uint32Array`
/// view), so ids above 2^24 survive.
pub(super) fn extract_aabbs(scene: &mut SceneCore) -> usize {
    let buffer = &mut scene.render.aabb_buffer;
    buffer.clear();

    let bodies = scene.physics.bodies();
    buffer.reserve(bodies.len() * AABB_STRIDE);

    for body in bodies {
        let aabb = body.aabb();
        buffer.push(f32::from_bits(body.id.0));
        buffer.extend_from_slice(&aabb.min.to_array());
        buffer.extend_from_slice(&aabb.max.to_array());
    }

    bodies.len()
}
