//! Physics Step
//!
//! The per-entity per-frame update. Velocities are displacements per frame,
//! not per second: the integration is deliberately fixed-step and
//! frame-synchronized, so there is no delta-time parameter anywhere.
//!
//! The order inside [`step`] is a correctness contract, not a style choice.
//! Faces are refreshed first so the ground test below reads this frame's
//! position; gravity is added to the velocity *before* the ground test so
//! the one-frame lookahead in the collision predicate sees the speed the
//! box would actually fall with.

use super::collision::boxes_collide;
use super::entity::Entity;

/// Per-frame increment applied to `velocity.z` of forward-accelerating
/// entities. There is no terminal velocity; late-game enemies arrive fast.
pub const FORWARD_ACCELERATION: f32 = 0.001;

/// Advance one entity by one frame, resolving collision against the ground.
///
/// In order: refresh faces, apply forward acceleration, integrate the
/// horizontal axes, integrate gravity into the vertical velocity, then
/// either bounce off the ground (damped by the entity's restitution) or
/// integrate the vertical position.
///
/// The ground is static; its faces are refreshed at construction and never
/// go stale.
pub fn step(entity: &mut Entity, ground: &Entity) {
    entity.refresh_faces();

    if entity.forward_accel {
        entity.velocity.z += FORWARD_ACCELERATION;
    }

    entity.position.x += entity.velocity.x;
    entity.position.z += entity.velocity.z;

    entity.velocity.y += entity.gravity;

    if boxes_collide(entity, ground) {
        entity.velocity.y *= entity.restitution;
        entity.velocity.y = -entity.velocity.y;
        log::trace!(
            "entity {} bounced, velocity.y now {}",
            entity.id().raw(),
            entity.velocity.y
        );
    } else {
        entity.position.y += entity.velocity.y;
    }
}
