//! AABB Entity
//!
//! The one moving thing in the game: an axis-aligned box with a position,
//! a velocity, and six derived face coordinates. Entities do not know how
//! they are drawn - the host correlates them to its own visual objects
//! through their [`EntityId`].

use glam::Vec3;
use thiserror::Error;

/// Downward acceleration applied per frame, in world units.
pub const DEFAULT_GRAVITY: f32 = -0.005;
/// Fraction of vertical speed kept on a ground bounce.
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Stable identifier correlating an entity with a host-owned visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Create an id from a raw index.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index backing this id.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// What role a box plays in the world.
///
/// The core never inspects this beyond bookkeeping; it exists so the host
/// can choose an appropriate visual when an entity is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The player-controlled box.
    Player,
    /// The static ground slab.
    Ground,
    /// A spawned falling box.
    Enemy,
}

/// Face coordinates of an axis-aligned box, derived from position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Faces {
    /// Minimum x (position.x - width / 2)
    pub left: f32,
    /// Maximum x
    pub right: f32,
    /// Maximum y
    pub top: f32,
    /// Minimum y
    pub bottom: f32,
    /// Maximum z
    pub front: f32,
    /// Minimum z
    pub back: f32,
}

/// Rejected entity construction parameters.
#[derive(Debug, Error, PartialEq)]
pub enum EntityError {
    /// Size components must all be positive and finite.
    #[error("entity size must be positive and finite, got {0}")]
    InvalidSize(Vec3),
    /// Position must be finite on every axis.
    #[error("entity position must be finite, got {0}")]
    NonFinitePosition(Vec3),
    /// Velocity must be finite on every axis.
    #[error("entity velocity must be finite, got {0}")]
    NonFiniteVelocity(Vec3),
}

/// A moving axis-aligned box.
///
/// `size` is fixed at construction; `position` and `velocity` are mutated
/// every frame by the physics step. The `faces` scalars are a cache derived
/// from the latest position - they must be refreshed before any collision
/// test reads them (see [`refresh_faces`](Self::refresh_faces)).
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    /// Role of this box in the world.
    pub kind: EntityKind,
    size: Vec3,
    /// Center of the box in world space.
    pub position: Vec3,
    /// Displacement applied per frame, axis by axis.
    pub velocity: Vec3,
    /// Per-frame downward acceleration.
    pub gravity: f32,
    /// Vertical speed multiplier on bounce (energy loss when < 1).
    pub restitution: f32,
    /// When set, `velocity.z` grows by a fixed increment each frame.
    pub forward_accel: bool,
    faces: Faces,
}

impl Entity {
    /// Create a validated entity.
    ///
    /// # Arguments
    /// * `id` - Host correlation id, unique within a world
    /// * `kind` - Role of the box
    /// * `size` - (width, height, depth), immutable afterwards
    /// * `position` - Center of the box
    /// * `velocity` - Initial per-frame displacement
    ///
    /// # Errors
    /// Returns [`EntityError`] when the size is not strictly positive or any
    /// component of size, position or velocity is NaN/infinite.
    pub fn new(
        id: EntityId,
        kind: EntityKind,
        size: Vec3,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<Self, EntityError> {
        if !size.is_finite() || size.min_element() <= 0.0 {
            return Err(EntityError::InvalidSize(size));
        }
        if !position.is_finite() {
            return Err(EntityError::NonFinitePosition(position));
        }
        if !velocity.is_finite() {
            return Err(EntityError::NonFiniteVelocity(velocity));
        }

        let mut entity = Self {
            id,
            kind,
            size,
            position,
            velocity,
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            forward_accel: false,
            faces: Faces::default(),
        };
        entity.refresh_faces();
        Ok(entity)
    }

    /// Host correlation id.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Replace the id (used when cloning a template into a new spawn).
    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    /// Box dimensions (width, height, depth).
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// The face scalars as of the last [`refresh_faces`](Self::refresh_faces).
    pub fn faces(&self) -> Faces {
        self.faces
    }

    /// Recompute the six face coordinates from the current position.
    ///
    /// Collision tests read the cached faces, so this must run before any
    /// test that involves this entity in the current frame. The physics step
    /// does this first thing; static entities only need it once, at
    /// construction time.
    pub fn refresh_faces(&mut self) {
        let half = self.size * 0.5;
        self.faces = Faces {
            left: self.position.x - half.x,
            right: self.position.x + half.x,
            top: self.position.y + half.y,
            bottom: self.position.y - half.y,
            front: self.position.z + half.z,
            back: self.position.z - half.z,
        };
    }
}
