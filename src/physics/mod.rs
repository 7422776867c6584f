//! Physics Module
//!
//! Axis-aligned box entities, the overlap test, and the per-frame
//! integration step. Everything here is pure CPU math over [`glam::Vec3`];
//! there is no coupling to any renderer or windowing layer.

pub mod collision;
pub mod entity;
pub mod step;

pub use collision::boxes_collide;
pub use entity::{Entity, EntityError, EntityId, EntityKind, Faces};
pub use step::{step, FORWARD_ACCELERATION};
