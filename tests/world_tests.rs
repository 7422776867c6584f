//! World Scenario Tests - Settling, Difficulty Ramp, and Game Over
//!
//! End-to-end runs of the simulation: a player free-falling onto the
//! ground and settling into a damped bounce, enemies crossing the arena
//! until one ends the run, and the host-facing scene sync ordering.

use glam::Vec3;

use box_dodge_core::{
    advance_frame, bind_scene, EntityId, EntityKind, GamePhase, InputState, SceneSync, World,
    WorldConfig,
};

// ============================================================================
// Settling Bounce Scenario
// ============================================================================

#[test]
fn test_free_fall_settles_into_damped_bounce() {
    // Unit cube over a small 5 x 0.5 x 10 slab at y = -2, bouncy
    // restitution 0.8, no enemies in sight.
    let config = WorldConfig {
        ground_size: Vec3::new(5.0, 0.5, 10.0),
        restitution: 0.8,
        spawn_interval: 1_000_000,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();
    let input = InputState::new();

    let ground_top = -2.0 + 0.25;
    let mut peaks = Vec::new();
    let mut prev_y = world.player().position.y;
    let mut climbing = false;

    for _ in 0..4000 {
        world.tick(&input);
        let y = world.player().position.y;

        // The lookahead bounce never lets the bottom face pass the ground
        assert!(
            y - 0.5 >= ground_top,
            "player bottom {} tunneled below ground top {}",
            y - 0.5,
            ground_top
        );

        if y > prev_y {
            climbing = true;
        } else if climbing && y < prev_y {
            // Just passed a local maximum
            peaks.push(prev_y);
            climbing = false;
        }
        prev_y = y;
    }

    assert!(peaks.len() >= 5, "expected several bounces, saw {}", peaks.len());
    for pair in peaks[..5].windows(2) {
        assert!(
            pair[1] < pair[0],
            "bounce peaks should decay: {} then {}",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// Enemy Crossing / Game Over Scenario
// ============================================================================

#[test]
fn test_accelerating_enemy_reaches_player_and_ends_run() {
    // Enemies spawn dead ahead every 10 ticks; the first one spawns at
    // z = -20 with velocity 0.005 and +0.001/tick forward acceleration, so
    // it needs roughly 190 ticks to reach the player plane.
    let config = WorldConfig {
        enemy_spawn_half_range: 0.0,
        spawn_interval: 10,
        spawn_interval_step: 0,
        spawn_interval_floor: 10,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();
    let input = InputState::new();

    let mut game_over_tick = None;
    for tick in 1..=400 {
        if world.tick(&input).phase == GamePhase::GameOver {
            game_over_tick = Some(tick);
            break;
        }
    }

    let tick = game_over_tick.expect("an enemy should have reached the player");
    assert!(
        (150..=300).contains(&tick),
        "game over at tick {}, outside the computable window",
        tick
    );

    // The oldest enemy is the one that made contact, at the player plane
    let front_runner = &world.enemies()[0];
    assert!(front_runner.position.z > -1.5);
    assert!(front_runner.position.z < 1.0);
}

#[test]
fn test_long_run_stays_bounded_when_player_dodges() {
    // Player parked outside the spawn lane: the run never ends, the spawn
    // interval grinds down to its floor, and culling keeps the enemy list
    // from growing without bound.
    let config = WorldConfig {
        player_start: Vec3::new(3.0, 0.0, 0.0),
        enemy_spawn_half_range: 0.0,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();
    let input = InputState::new();

    for _ in 0..5000 {
        world.tick(&input);
    }

    assert_eq!(world.phase(), GamePhase::Running);
    assert_eq!(world.spawner().interval(), 20);
    assert!(
        world.enemies().len() < 50,
        "culling should bound the active list, got {}",
        world.enemies().len()
    );
}

// ============================================================================
// Scene Sync Ordering
// ============================================================================

#[derive(Debug, PartialEq)]
enum Event {
    Spawned(u32, EntityKind),
    Moved(u32),
    Over,
}

#[derive(Default)]
struct RecordingSync {
    events: Vec<Event>,
}

impl SceneSync for RecordingSync {
    fn entity_spawned(&mut self, id: EntityId, kind: EntityKind, _size: Vec3) {
        self.events.push(Event::Spawned(id.raw(), kind));
    }

    fn entity_moved(&mut self, id: EntityId, _position: Vec3) {
        self.events.push(Event::Moved(id.raw()));
    }

    fn game_over(&mut self) {
        self.events.push(Event::Over);
    }
}

#[test]
fn test_bind_scene_announces_player_and_ground() {
    let world = World::new(&WorldConfig::default()).unwrap();
    let mut sync = RecordingSync::default();

    bind_scene(&world, &mut sync);

    assert_eq!(
        sync.events,
        vec![
            Event::Spawned(0, EntityKind::Player),
            Event::Moved(0),
            Event::Spawned(1, EntityKind::Ground),
            Event::Moved(1),
        ]
    );
}

#[test]
fn test_spawn_announced_before_first_transform() {
    let mut world = World::new(&WorldConfig::default()).unwrap();
    let input = InputState::new();
    let mut sync = RecordingSync::default();

    for _ in 0..199 {
        world.tick(&input);
    }
    advance_frame(&mut world, &input, &mut sync);

    let spawn_index = sync
        .events
        .iter()
        .position(|e| matches!(e, Event::Spawned(2, EntityKind::Enemy)))
        .expect("enemy spawn should be announced");
    let move_index = sync
        .events
        .iter()
        .position(|e| matches!(e, Event::Moved(2)))
        .expect("enemy transform should be pushed");
    assert!(spawn_index < move_index);
}

#[test]
fn test_game_over_reported_to_host() {
    box_dodge_core::logging::init(false);

    let config = WorldConfig {
        enemy_spawn_half_range: 0.0,
        enemy_spawn_z: 0.0,
        enemy_velocity: Vec3::ZERO,
        spawn_interval: 1,
        spawn_interval_step: 0,
        spawn_interval_floor: 1,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config).unwrap();
    let input = InputState::new();
    let mut sync = RecordingSync::default();

    let mut phase = GamePhase::Running;
    for _ in 0..10 {
        phase = advance_frame(&mut world, &input, &mut sync);
        if phase == GamePhase::GameOver {
            break;
        }
    }

    assert_eq!(phase, GamePhase::GameOver);
    assert_eq!(sync.events.last(), Some(&Event::Over));
}
