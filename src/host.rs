//! Host Interface
//!
//! The seam between the headless core and whatever renders it. The core
//! never draws; it announces entities and pushes their transforms through
//! [`SceneSync`], and the host keeps a visual object per [`EntityId`] on
//! its side of the fence. Composition instead of subclassing: entities are
//! plain data, visuals are the host's problem.
//!
//! A typical host binds the scene once, then calls [`advance_frame`] from
//! its per-refresh callback and stops re-arming the callback as soon as it
//! returns [`GamePhase::GameOver`].

use glam::Vec3;

use crate::input::InputState;
use crate::physics::entity::{EntityId, EntityKind};
use crate::world::{GamePhase, World};

/// Receiver for scene updates, implemented by the host renderer.
pub trait SceneSync {
    /// A new entity exists; the host should create a visual for it.
    fn entity_spawned(&mut self, id: EntityId, kind: EntityKind, size: Vec3);

    /// An entity's transform for this frame.
    fn entity_moved(&mut self, id: EntityId, position: Vec3);

    /// The terminal phase was reached. Default: ignore.
    fn game_over(&mut self) {}
}

/// A sync sink that drops everything. Backs headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSync;

impl SceneSync for NullSync {
    fn entity_spawned(&mut self, _id: EntityId, _kind: EntityKind, _size: Vec3) {}
    fn entity_moved(&mut self, _id: EntityId, _position: Vec3) {}
}

/// Announce the initial scene: player, ground, and any enemies already
/// alive, each followed by its current position.
pub fn bind_scene(world: &World, sync: &mut dyn SceneSync) {
    let player = world.player();
    sync.entity_spawned(player.id(), player.kind, player.size());
    sync.entity_moved(player.id(), player.position);

    let ground = world.ground();
    sync.entity_spawned(ground.id(), ground.kind, ground.size());
    sync.entity_moved(ground.id(), ground.position);

    for enemy in world.enemies() {
        sync.entity_spawned(enemy.id(), enemy.kind, enemy.size());
        sync.entity_moved(enemy.id(), enemy.position);
    }
}

/// Run one tick and mirror the result into the host scene.
///
/// Spawns are announced before any positions are pushed, so the host has a
/// visual ready by the time its first transform arrives. The ground never
/// moves and is not re-sent. Returns the phase so the host knows whether
/// to re-arm its frame callback.
pub fn advance_frame(
    world: &mut World,
    input: &InputState,
    sync: &mut dyn SceneSync,
) -> GamePhase {
    let outcome = world.tick(input);

    for id in &outcome.spawned {
        if let Some(entity) = world.entity(*id) {
            sync.entity_spawned(entity.id(), entity.kind, entity.size());
        }
    }

    let player = world.player();
    sync.entity_moved(player.id(), player.position);
    for enemy in world.enemies() {
        sync.entity_moved(enemy.id(), enemy.position);
    }

    if outcome.phase == GamePhase::GameOver {
        sync.game_over();
    }
    outcome.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    #[test]
    fn test_null_sync_is_a_no_op_sink() {
        let mut world = World::new(&WorldConfig::default()).unwrap();
        let input = InputState::new();
        let mut sync = NullSync;

        bind_scene(&world, &mut sync);
        let phase = advance_frame(&mut world, &input, &mut sync);
        assert_eq!(phase, GamePhase::Running);
    }
}
