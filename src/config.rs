//! World Configuration
//!
//! Centralized tunables for the world layout and gameplay feel, replacing
//! constants that would otherwise be scattered across the physics and
//! spawning code. `Default` is the stock game: a unit cube
//! player over a long ground slab, enemies dropping in at z = -20 and
//! accelerating toward the player plane.
//!
//! Configs serialize with serde so a host can ship difficulty presets as
//! JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::entity::{DEFAULT_GRAVITY, DEFAULT_RESTITUTION};

/// Every tunable needed to assemble a [`World`](crate::world::World).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Player box dimensions
    pub player_size: Vec3,
    /// Player start position (center)
    pub player_start: Vec3,
    /// Player initial per-frame velocity
    pub player_velocity: Vec3,
    /// Horizontal speed set while a direction key is held (units/frame)
    pub player_speed: f32,
    /// Vertical velocity assigned when the jump key is held
    pub jump_impulse: f32,
    /// Per-frame downward acceleration for every dynamic entity
    pub gravity: f32,
    /// Vertical speed kept on each ground bounce
    pub restitution: f32,

    /// Ground slab dimensions
    pub ground_size: Vec3,
    /// Ground slab position (center)
    pub ground_position: Vec3,

    /// Enemy box dimensions
    pub enemy_size: Vec3,
    /// Half-width of the lateral band enemies spawn across
    pub enemy_spawn_half_range: f32,
    /// Vertical spawn position (center)
    pub enemy_spawn_y: f32,
    /// Depth spawn position; enemies travel from here toward positive z
    pub enemy_spawn_z: f32,
    /// Enemy initial per-frame velocity
    pub enemy_velocity: Vec3,

    /// Ticks between spawns at game start
    pub spawn_interval: u64,
    /// How much the spawn interval shrinks each time it fires
    pub spawn_interval_step: u64,
    /// Smallest allowed spawn interval
    pub spawn_interval_floor: u64,

    /// Enemies whose back face passes this z plane are despawned
    pub cull_z: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player_size: Vec3::ONE,
            player_start: Vec3::ZERO,
            player_velocity: Vec3::new(0.0, -0.01, 0.0),
            player_speed: 0.05,
            jump_impulse: 0.08,
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,

            ground_size: Vec3::new(10.0, 0.5, 50.0),
            ground_position: Vec3::new(0.0, -2.0, 0.0),

            enemy_size: Vec3::ONE,
            enemy_spawn_half_range: 5.0,
            enemy_spawn_y: 0.0,
            enemy_spawn_z: -20.0,
            enemy_velocity: Vec3::new(0.0, 0.0, 0.005),

            spawn_interval: 200,
            spawn_interval_step: 20,
            spawn_interval_floor: 20,

            cull_z: 10.0,
        }
    }
}

impl WorldConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
