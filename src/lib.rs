//! Box Dodge Core
//!
//! Headless physics-and-collision core for a 3D "dodge the falling boxes"
//! game. A player-controlled cube slides over a ground slab while enemy
//! cubes drop in at a shrinking interval and accelerate toward the player;
//! the first touch ends the run. Rendering, windowing and raw input events
//! belong to the host - this crate only simulates.
//!
//! # Modules
//!
//! - [`physics`] - AABB entities, the overlap test, the per-frame step
//! - [`world`] - the `World` aggregate and its `tick` state machine
//! - [`spawner`] - decreasing-interval enemy scheduler
//! - [`input`] - key pressed-state the host feeds and the tick reads
//! - [`host`] - `SceneSync` trait and the `advance_frame` driver
//! - [`config`] - all tunables, `Default` = the stock game
//! - [`logging`] - env_logger setup
//!
//! # Example
//!
//! ```
//! use box_dodge_core::{advance_frame, bind_scene, GamePhase, InputState, Key, NullSync, World, WorldConfig};
//!
//! let mut world = World::new(&WorldConfig::default()).unwrap();
//! let mut input = InputState::new();
//! let mut sync = NullSync;
//! bind_scene(&world, &mut sync);
//!
//! // Host event loop: feed key events as they arrive...
//! input.handle_key(Key::A, true);
//!
//! // ...and drive one tick per display refresh until the run ends.
//! while advance_frame(&mut world, &input, &mut sync) == GamePhase::Running {
//!     # break;
//! }
//! ```

pub mod config;
pub mod host;
pub mod input;
pub mod logging;
pub mod physics;
pub mod spawner;
pub mod world;

pub use config::WorldConfig;
pub use host::{advance_frame, bind_scene, NullSync, SceneSync};
pub use input::{InputState, Key};
pub use physics::{boxes_collide, step, Entity, EntityError, EntityId, EntityKind, Faces, FORWARD_ACCELERATION};
pub use spawner::{SpawnRequest, Spawner};
pub use world::{GamePhase, TickOutcome, World};
