//! Game World
//!
//! The explicit aggregate holding everything the game mutates: the player,
//! the ground slab, the active enemies, the spawner, and the loop phase.
//! There are no globals; the host owns a `World` and drives it with
//! [`tick`](World::tick) once per display refresh.
//!
//! Velocities are per-frame displacements and the integration is fixed-step
//! by design, so `tick` takes no delta time. Once the phase reaches
//! [`GamePhase::GameOver`] the world is inert: further ticks are no-ops and
//! the host simply stops re-arming its frame callback.

use glam::Vec3;

use crate::config::WorldConfig;
use crate::input::InputState;
use crate::physics::collision::boxes_collide;
use crate::physics::entity::{Entity, EntityError, EntityId, EntityKind};
use crate::physics::step::step;
use crate::spawner::Spawner;

/// Loop state. `GameOver` is terminal - no resume, no reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The loop is live and ticks advance the simulation.
    Running,
    /// The player touched an enemy; the world no longer advances.
    GameOver,
}

/// What a single tick did, for the host to mirror into its scene.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Phase after the tick.
    pub phase: GamePhase,
    /// Ids of enemies created this tick, in spawn order.
    pub spawned: Vec<EntityId>,
}

/// The full game state.
pub struct World {
    config: WorldConfig,
    player: Entity,
    ground: Entity,
    enemies: Vec<Entity>,
    enemy_template: Entity,
    spawner: Spawner,
    phase: GamePhase,
    next_id: u32,
}

impl World {
    /// Assemble a world from a config.
    ///
    /// # Errors
    /// Returns [`EntityError`] when the config describes a degenerate box
    /// (non-positive size, non-finite position or velocity). Validating the
    /// enemy template here keeps spawning infallible later.
    pub fn new(config: &WorldConfig) -> Result<Self, EntityError> {
        let mut player = Entity::new(
            EntityId::new(0),
            EntityKind::Player,
            config.player_size,
            config.player_start,
            config.player_velocity,
        )?;
        player.gravity = config.gravity;
        player.restitution = config.restitution;

        let ground = Entity::new(
            EntityId::new(1),
            EntityKind::Ground,
            config.ground_size,
            config.ground_position,
            Vec3::ZERO,
        )?;

        // Spawns clone this template and only overwrite id and x.
        let mut enemy_template = Entity::new(
            EntityId::new(u32::MAX),
            EntityKind::Enemy,
            config.enemy_size,
            Vec3::new(0.0, config.enemy_spawn_y, config.enemy_spawn_z),
            config.enemy_velocity,
        )?;
        enemy_template.gravity = config.gravity;
        enemy_template.restitution = config.restitution;
        enemy_template.forward_accel = true;

        Ok(Self {
            spawner: Spawner::new(
                config.spawn_interval,
                config.spawn_interval_step,
                config.spawn_interval_floor,
                config.enemy_spawn_half_range,
            ),
            config: config.clone(),
            player,
            ground,
            enemies: Vec::new(),
            enemy_template,
            phase: GamePhase::Running,
            next_id: 2,
        })
    }

    /// The player box.
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// The static ground slab.
    pub fn ground(&self) -> &Entity {
        &self.ground
    }

    /// Active enemies, in spawn order.
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// Look up a live entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        if self.player.id() == id {
            return Some(&self.player);
        }
        if self.ground.id() == id {
            return Some(&self.ground);
        }
        self.enemies.iter().find(|e| e.id() == id)
    }

    /// Current loop phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the terminal phase has been reached.
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// The spawn scheduler (read-only; `tick` drives it).
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Advance the simulation by one frame.
    ///
    /// Reads the input flags, steps the player, steps every enemy and tests
    /// it against the player, runs the spawner, then drops enemies that
    /// sailed past the cull plane. A tick that detects a player-enemy
    /// collision still finishes (remaining enemies keep moving and the
    /// spawner still runs); only future ticks become no-ops.
    pub fn tick(&mut self, input: &InputState) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome {
                phase: self.phase,
                spawned: Vec::new(),
            };
        }

        self.apply_input(input);
        step(&mut self.player, &self.ground);

        for enemy in &mut self.enemies {
            step(enemy, &self.ground);
            if self.phase == GamePhase::Running && boxes_collide(&self.player, enemy) {
                self.phase = GamePhase::GameOver;
                log::info!("player collided with enemy {}, game over", enemy.id().raw());
            }
        }

        let mut spawned = Vec::new();
        if let Some(request) = self.spawner.update() {
            let mut enemy = self.enemy_template.clone();
            enemy.set_id(EntityId::new(self.next_id));
            self.next_id += 1;
            enemy.position.x = request.x;
            enemy.refresh_faces();
            log::debug!(
                "spawned enemy {} at x={:.2}, next interval {}",
                enemy.id().raw(),
                request.x,
                self.spawner.interval()
            );
            spawned.push(enemy.id());
            self.enemies.push(enemy);
        }

        let cull_z = self.config.cull_z;
        self.enemies.retain(|e| {
            let keep = e.position.z - e.size().z * 0.5 <= cull_z;
            if !keep {
                log::debug!("culled enemy {} past z={}", e.id().raw(), cull_z);
            }
            keep
        });

        TickOutcome {
            phase: self.phase,
            spawned,
        }
    }

    /// Translate held keys into the player's velocity for this frame.
    ///
    /// Horizontal velocity is rebuilt from scratch every tick. When opposing
    /// keys are held together the first-checked one wins (A over D, W over
    /// S). The jump key assigns (not adds) a fixed upward velocity.
    fn apply_input(&mut self, input: &InputState) {
        let speed = self.config.player_speed;

        self.player.velocity.x = 0.0;
        self.player.velocity.z = 0.0;
        if input.left {
            self.player.velocity.x = -speed;
        } else if input.right {
            self.player.velocity.x = speed;
        }
        if input.forward {
            self.player.velocity.z = -speed;
        } else if input.backward {
            self.player.velocity.z = speed;
        }
        if input.jump {
            self.player.velocity.y = self.config.jump_impulse;
        }
    }
}
