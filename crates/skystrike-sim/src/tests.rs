//! Scenario tests for the simulation engine: determinism, flight envelope,
//! combat, lock-on, and the game-over/restart cycle.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::SessionCommand;
use skystrike_core::config::SimSettings;
use skystrike_core::constants::{AIRCRAFT_SPAWN_POSITION, FRAME_MS};
use skystrike_core::enums::*;
use skystrike_core::events::SimEvent;
use skystrike_core::input::ControlIntent;
use skystrike_core::types::{EntityId, Vec3};

use crate::aircraft::Aircraft;
use crate::camera::Camera;
use crate::engine::{SimConfig, SimulationEngine};
use crate::entities::{Obstacle, Projectile, Target, TargetMotion};

fn quiet_settings() -> SimSettings {
    SimSettings {
        obstacle_spawn_rate: 0.0,
        cloud_spawn_rate: 0.0,
        target_spawn_rate: 0.0,
        ..SimSettings::default()
    }
}

fn engine_with(settings: SimSettings) -> SimulationEngine {
    SimulationEngine::new(SimConfig { seed: 7, settings })
}

fn idle() -> ControlIntent {
    ControlIntent::default()
}

fn firing() -> ControlIntent {
    ControlIntent {
        fire: true,
        ..Default::default()
    }
}

fn place_target(engine: &mut SimulationEngine, position: Vec3, motion: TargetMotion) -> EntityId {
    let id = engine.allocate_id();
    engine.world_mut().targets.insert(Target {
        id,
        position,
        direction: Vec3::X,
        speed: 0.0,
        motion,
        spawn_index: 0,
    });
    id
}

fn hovering() -> TargetMotion {
    TargetMotion::Airborne {
        vertical_direction: 1.0,
        vertical_speed: 0.0,
        min_height: -10.0,
        max_height: 40.0,
    }
}

// ---- Determinism ----

fn busy_settings() -> SimSettings {
    SimSettings {
        target_spawn_rate: 0.2,
        obstacle_spawn_rate: 0.05,
        cloud_spawn_rate: 0.1,
        ..SimSettings::reduced_fidelity()
    }
}

fn busy_intent(tick: u64) -> ControlIntent {
    ControlIntent {
        thrust_forward: tick % 200 < 150,
        turn_left: tick % 120 < 30,
        climb: tick % 90 < 20,
        fire: true,
        ..Default::default()
    }
}

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        settings: busy_settings(),
    };
    let mut engine_a = SimulationEngine::new(config.clone());
    let mut engine_b = SimulationEngine::new(config);

    for tick in 0..600 {
        let now = tick as f64 * FRAME_MS;
        let snap_a = engine_a.tick(&busy_intent(tick), now);
        let snap_b = engine_b.tick(&busy_intent(tick), now);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        settings: busy_settings(),
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        settings: busy_settings(),
    });

    let mut diverged = false;
    for tick in 0..300 {
        let now = tick as f64 * FRAME_MS;
        let json_a = serde_json::to_string(&engine_a.tick(&busy_intent(tick), now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&busy_intent(tick), now)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

#[test]
fn test_simulation_hover_clock_ignores_frame_timing() {
    let settings = SimSettings {
        hover_clock: HoverClock::Simulation,
        target_spawn_rate: 0.5,
        ..quiet_settings()
    };
    let mut steady = engine_with(settings.clone());
    let mut jittery = engine_with(settings);

    for tick in 0..300 {
        let steady_snap = steady.tick(&idle(), tick as f64 * FRAME_MS);
        let jitter = if tick % 3 == 0 { 7.0 } else { 0.0 };
        let jittery_snap = jittery.tick(&idle(), tick as f64 * FRAME_MS * 1.5 + jitter);
        let a: Vec<Vec3> = steady_snap.targets.iter().map(|t| t.position).collect();
        let b: Vec<Vec3> = jittery_snap.targets.iter().map(|t| t.position).collect();
        assert_eq!(a, b);
    }
}

// ---- Flight envelope ----

#[test]
fn test_flight_envelope_holds_under_random_input() {
    let mut engine = engine_with(quiet_settings());
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let settings = engine.settings().clone();
    let half = settings.world_size / 2.0;

    for tick in 0..5000 {
        let intent = ControlIntent {
            thrust_forward: rng.gen_bool(0.8),
            turn_left: rng.gen_bool(0.2),
            turn_right: rng.gen_bool(0.2),
            climb: rng.gen_bool(0.3),
            descend: rng.gen_bool(0.3),
            ..Default::default()
        };
        let snap = engine.tick(&intent, tick as f64 * FRAME_MS);
        let p = snap.aircraft.position;
        assert!(p.y >= settings.min_altitude && p.y <= settings.max_altitude);
        assert!(p.x.abs() <= half && p.z.abs() <= half);
        assert!(snap.aircraft.roll.abs() <= 0.5 + 1e-12);
        assert!(snap.aircraft.pitch.abs() <= 0.3 + 1e-12);
    }
}

// ---- Guns ----

#[test]
fn test_fire_within_cooldown_yields_one_projectile() {
    let mut engine = engine_with(quiet_settings());
    engine.tick(&firing(), 1000.0);
    let snap = engine.tick(&firing(), 1050.0);
    assert_eq!(snap.projectiles.len(), 1);
    assert!(snap.muzzle_flashes.left);
    assert!(!snap.muzzle_flashes.right);
}

#[test]
fn test_guns_alternate_and_flash_hides() {
    let mut engine = engine_with(quiet_settings());
    let mut flashes = Vec::new();
    for shot in 0..4 {
        let snap = engine.tick(&firing(), shot as f64 * 100.0);
        flashes.push((snap.muzzle_flashes.left, snap.muzzle_flashes.right));
    }
    // Each shot's flash is hidden by the time the other gun fires.
    assert_eq!(
        flashes,
        vec![(true, false), (false, true), (true, false), (false, true)]
    );
    let snap = engine.tick(&idle(), 400.0);
    assert!(!snap.muzzle_flashes.left && !snap.muzzle_flashes.right);
}

#[test]
fn test_projectile_count_never_exceeds_cap() {
    let mut engine = engine_with(SimSettings {
        shooting_cooldown: 0.0,
        max_bullets: 8,
        ..quiet_settings()
    });
    let mut seen = Vec::new();
    for tick in 0..40 {
        let snap = engine.tick(&firing(), tick as f64 * FRAME_MS);
        assert!(snap.projectiles.len() <= 8);
        seen = snap.projectiles.iter().map(|p| p.id).collect();
    }
    // Survivors are the newest shots, oldest first.
    let mut sorted = seen.clone();
    sorted.sort();
    assert_eq!(seen, sorted);
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_projectile_hit_scores_exactly_once() {
    let mut engine = engine_with(quiet_settings());
    let target = place_target(&mut engine, Vec3::new(-1.2, 2.0, 12.0), hovering());
    let bystander = place_target(&mut engine, Vec3::new(20.0, 2.0, 12.0), hovering());

    let mut score_events = 0;
    let mut last_score = 0;
    for tick in 0..30 {
        let intent = if tick == 0 { firing() } else { idle() };
        let snap = engine.tick(&intent, tick as f64 * FRAME_MS);
        assert!(snap.score >= last_score);
        last_score = snap.score;
        score_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::ScoreChanged { .. }))
            .count();
    }
    assert_eq!(engine.score(), 10);
    assert_eq!(score_events, 1);
    assert!(engine.world().targets.find(target).is_none());
    assert!(engine.world().targets.find(bystander).is_some());
}

// ---- Collision ----

#[test]
fn test_ramming_a_target_scores() {
    let mut engine = engine_with(quiet_settings());
    place_target(&mut engine, Vec3::new(0.0, 2.0, 1.5), hovering());
    let snap = engine.tick(&idle(), 0.0);
    assert_eq!(snap.score, 10);
    assert!(snap.targets.is_empty());
    assert_eq!(snap.session, SessionState::Playing);
}

#[test]
fn test_lock_on_destroyed_target_is_released_same_tick() {
    let mut engine = engine_with(quiet_settings());
    // In front of the aircraft: on the follow camera's center ray and close
    // enough to ram in the same tick.
    let target = place_target(&mut engine, Vec3::new(0.0, 2.0, 1.5), hovering());
    let snap = engine.tick(&idle(), 0.0);
    assert!(snap
        .events
        .contains(&SimEvent::LockAcquired { target }));
    assert_eq!(snap.score, 10);
    assert!(snap.targets.is_empty());
    assert_eq!(snap.lock.target, None);
    assert_eq!(snap.lock.box_position, None);
    assert_eq!(snap.lock.phase, LockPhase::Unlocked);
    assert!(!engine.lock().in_sight());
}

#[test]
fn test_obstacle_collision_stops_simulation() {
    let mut engine = engine_with(quiet_settings());
    let id = engine.allocate_id();
    engine.world_mut().obstacles.insert(Obstacle {
        id,
        position: Vec3::new(0.0, 1.0, 2.0),
        extents: Vec3::new(2.0, 6.0, 2.0),
    });
    let snap = engine.tick(&idle(), 0.0);
    assert_eq!(snap.session, SessionState::GameOver);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::GameOver { .. })));

    let frozen_tick = snap.time.tick;
    let before = engine.world().aircraft.clone();
    let thrust = ControlIntent {
        thrust_forward: true,
        fire: true,
        ..Default::default()
    };
    for tick in 1..20 {
        let snap = engine.tick(&thrust, tick as f64 * FRAME_MS);
        assert_eq!(snap.time.tick, frozen_tick);
        assert!(snap.projectiles.is_empty());
    }
    assert_eq!(engine.world().aircraft, before);
}

#[test]
fn test_simplified_collision_through_engine() {
    let mut engine = engine_with(SimSettings {
        simplified_collision: true,
        ..quiet_settings()
    });
    let id = engine.allocate_id();
    // Outside the precise box, inside the simplified radius.
    engine.world_mut().obstacles.insert(Obstacle {
        id,
        position: Vec3::new(3.0, 2.0, 0.0),
        extents: Vec3::new(2.0, 4.0, 2.0),
    });
    let snap = engine.tick(&idle(), 0.0);
    assert_eq!(snap.session, SessionState::GameOver);
}

// ---- Restart ----

#[test]
fn test_restart_after_game_over_clears_everything() {
    let mut engine = engine_with(quiet_settings());
    engine.session_mut().set_score(250);

    for i in 0..5 {
        let id = engine.allocate_id();
        // The first obstacle sits on the aircraft.
        let position = if i == 0 {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(40.0, 1.0, -40.0 + i as f64 * 10.0)
        };
        engine.world_mut().obstacles.insert(Obstacle {
            id,
            position,
            extents: Vec3::new(2.0, 6.0, 2.0),
        });
    }
    for i in 0..3 {
        place_target(&mut engine, Vec3::new(-30.0, 5.0, i as f64 * 5.0), hovering());
    }
    for i in 0..10 {
        let id = engine.allocate_id();
        engine.world_mut().projectiles.insert(Projectile {
            id,
            position: Vec3::new(10.0, 10.0, -20.0 + i as f64),
            direction: Vec3::X,
            speed: 0.0,
            gun: Gun::Left,
            created_ms: 0.0,
            ttl_ms: 2000.0,
        });
    }

    let snap = engine.tick(&idle(), 0.0);
    assert_eq!(snap.session, SessionState::GameOver);
    assert_eq!(snap.score, 250);
    assert_eq!(engine.world().entity_count(), 18);
    assert_eq!(snap.obstacles.len(), 5);
    assert_eq!(snap.targets.len(), 3);
    assert_eq!(snap.projectiles.len(), 10);

    engine.queue_command(SessionCommand::Restart);
    let snap = engine.tick(&idle(), 100.0);
    assert_eq!(snap.session, SessionState::Playing);
    assert_eq!(snap.score, 0);
    assert!(snap.obstacles.is_empty());
    assert!(snap.targets.is_empty());
    assert!(snap.projectiles.is_empty());
    assert!(snap.clouds.is_empty());
    assert_eq!(engine.world().entity_count(), 0);
    let aircraft = &engine.world().aircraft;
    assert_eq!(aircraft.position, AIRCRAFT_SPAWN_POSITION);
    assert_eq!((aircraft.pitch, aircraft.yaw, aircraft.roll), (0.0, 0.0, 0.0));
    assert_eq!(snap.lock.phase, LockPhase::Unlocked);

    let removed = snap
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::VisualRemoved { .. }))
        .count();
    assert_eq!(removed, 18);
    assert!(snap.events.contains(&SimEvent::Restarted));
    assert!(snap.events.contains(&SimEvent::ScoreChanged { score: 0 }));
}

#[test]
fn test_restart_rearms_guns() {
    let mut engine = engine_with(quiet_settings());
    engine.tick(&firing(), 1000.0);
    engine.restart();
    // The cooldown from the old session does not carry over, and the left gun fires first.
    let snap = engine.tick(&firing(), 1010.0);
    assert_eq!(snap.projectiles.len(), 1);
    assert!(snap.muzzle_flashes.left);
}

// ---- Aim assist ----

#[test]
fn test_center_ray_lock_grows_then_resets() {
    let mut engine = engine_with(quiet_settings());
    // Nothing in sight yet.
    let snap = engine.tick(&idle(), 0.0);
    assert_eq!(snap.lock.phase, LockPhase::Unlocked);

    let view = Camera::default().viewpoint(&Aircraft::spawn(), engine.settings().viewport_aspect);
    let on_ray = view.ray(0.0, 0.0).at(20.0);
    let target = place_target(&mut engine, on_ray, hovering());

    let snap = engine.tick(&idle(), 100.0);
    assert_eq!(snap.lock.target, Some(target));
    assert_eq!(snap.lock.phase, LockPhase::Locking);
    assert_eq!(snap.lock.elapsed_ms, 0.0);
    assert!(snap
        .events
        .contains(&SimEvent::LockAcquired { target }));
    assert!(snap.events.contains(&SimEvent::Sound {
        cue: SoundCue::LockOn
    }));

    let mut last = 0.0;
    for tick in 1..30 {
        let snap = engine.tick(&idle(), 100.0 + tick as f64 * FRAME_MS);
        assert!(snap.lock.elapsed_ms > last);
        last = snap.lock.elapsed_ms;
    }
    assert_eq!(engine.lock().phase(), LockPhase::Locked);

    engine.world_mut().targets.remove(target);
    let snap = engine.tick(&idle(), 700.0);
    assert_eq!(snap.lock.phase, LockPhase::Unlocked);
    assert_eq!(snap.lock.elapsed_ms, 0.0);
    assert_eq!(snap.lock.target, None);
}

#[test]
fn test_assist_mode_command_enables_proximity_lock() {
    let mut engine = engine_with(quiet_settings());
    // Beside the follow camera, well outside every ray.
    place_target(&mut engine, Vec3::new(12.0, 5.0, -10.0), hovering());

    let snap = engine.tick(&idle(), 0.0);
    assert_eq!(snap.lock.phase, LockPhase::Unlocked);

    engine.queue_command(SessionCommand::SetAssistMode { enabled: true });
    let snap = engine.tick(&idle(), 16.0);
    assert!(engine.settings().assist_mode);
    assert!(snap.lock.target.is_some());
}

#[test]
fn test_batched_commands_apply_in_order() {
    let mut engine = engine_with(quiet_settings());
    engine.session_mut().set_score(40);
    engine.queue_commands([
        SessionCommand::SetAssistMode { enabled: true },
        SessionCommand::Restart,
        SessionCommand::SetAssistMode { enabled: false },
    ]);
    let snap = engine.tick(&idle(), 0.0);
    assert!(!engine.settings().assist_mode);
    assert_eq!(snap.score, 0);
    assert!(snap.events.contains(&SimEvent::Restarted));
}

// ---- Spawning ----

#[test]
fn test_spawned_entities_announce_visuals() {
    let mut engine = engine_with(SimSettings {
        target_spawn_rate: 1.0,
        obstacle_spawn_rate: 1.0,
        cloud_spawn_rate: 1.0,
        max_targets: 2,
        max_obstacles: 2,
        max_clouds: 2,
        ..SimSettings::default()
    });
    let mut added = Vec::new();
    for tick in 0..5 {
        let snap = engine.tick(&idle(), tick as f64 * FRAME_MS);
        for event in snap.events {
            if let SimEvent::VisualAdded { kind, .. } = event {
                added.push(kind);
            }
        }
        if snap.session == SessionState::GameOver {
            break;
        }
    }
    assert_eq!(added.iter().filter(|k| **k == EntityKind::Target).count(), 2);
    assert_eq!(added.iter().filter(|k| **k == EntityKind::Obstacle).count(), 2);
    assert_eq!(added.iter().filter(|k| **k == EntityKind::Cloud).count(), 2);
}
