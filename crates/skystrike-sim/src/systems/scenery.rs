//! Scenery system: obstacle and cloud spawning, cloud drift.

use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use skystrike_core::config::SimSettings;
use skystrike_core::constants::*;
use skystrike_core::enums::EntityKind;
use skystrike_core::events::SimEvent;
use skystrike_core::types::{EntityId, Vec3};

use crate::entities::{Cloud, Obstacle};
use crate::store::{EntityStore, IdAllocator};

/// Spawn rolls for obstacles then clouds, then drift clouds.
pub fn run(
    obstacles: &mut EntityStore<Obstacle>,
    clouds: &mut EntityStore<Cloud>,
    ids: &mut IdAllocator,
    settings: &SimSettings,
    events: &mut Vec<SimEvent>,
    rng: &mut impl Rng,
) {
    if obstacles.len() < settings.max_obstacles && rng.gen::<f64>() < settings.obstacle_spawn_rate {
        let obstacle = create_obstacle(ids.allocate(), settings, rng);
        debug!(id = obstacle.id.0, x = obstacle.position.x, z = obstacle.position.z, "obstacle spawned");
        events.push(SimEvent::VisualAdded {
            kind: EntityKind::Obstacle,
            id: obstacle.id,
            position: obstacle.position,
        });
        obstacles.insert(obstacle);
    }

    if clouds.len() < settings.max_clouds && rng.gen::<f64>() < settings.cloud_spawn_rate {
        let cloud = create_cloud(ids.allocate(), settings, rng);
        events.push(SimEvent::VisualAdded {
            kind: EntityKind::Cloud,
            id: cloud.id,
            position: cloud.position,
        });
        clouds.insert(cloud);
    }

    drift_clouds(clouds, settings, events, rng);
}

/// Box of random footprint and height on a ring just outside the play area.
pub fn create_obstacle(id: EntityId, settings: &SimSettings, rng: &mut impl Rng) -> Obstacle {
    let size = OBSTACLE_MIN_SIZE + rng.gen::<f64>() * OBSTACLE_SIZE_SPREAD;
    let height = OBSTACLE_MIN_HEIGHT + rng.gen::<f64>() * OBSTACLE_HEIGHT_SPREAD;
    let angle = rng.gen::<f64>() * TAU;
    let distance = settings.half_world() + rng.gen::<f64>() * OBSTACLE_RING_DEPTH;
    Obstacle {
        id,
        position: Vec3::new(
            angle.cos() * distance,
            height / 2.0 + GROUND_LEVEL,
            angle.sin() * distance,
        ),
        extents: Vec3::new(size, height, size),
    }
}

pub fn create_cloud(id: EntityId, settings: &SimSettings, rng: &mut impl Rng) -> Cloud {
    let height = CLOUD_MIN_HEIGHT + rng.gen::<f64>() * CLOUD_HEIGHT_SPREAD;
    let angle = rng.gen::<f64>() * TAU;
    let distance = CLOUD_MIN_RADIUS + rng.gen::<f64>() * settings.half_world();
    Cloud {
        id,
        position: Vec3::new(angle.cos() * distance, height, angle.sin() * distance),
    }
}

/// Random walk on x and z. Clouds that wander past the world size are removed.
pub fn drift_clouds(
    clouds: &mut EntityStore<Cloud>,
    settings: &SimSettings,
    events: &mut Vec<SimEvent>,
    rng: &mut impl Rng,
) {
    let mut i = 0;
    while i < clouds.len() {
        let Some(cloud) = clouds.get_mut(i) else {
            break;
        };
        cloud.position.x += (rng.gen::<f64>() - 0.5) * settings.cloud_speed;
        cloud.position.z += (rng.gen::<f64>() - 0.5) * settings.cloud_speed;
        if cloud.position.x.abs() > settings.world_size || cloud.position.z.abs() > settings.world_size {
            let removed = clouds.remove_at(i);
            events.push(SimEvent::VisualRemoved {
                kind: EntityKind::Cloud,
                id: removed.id,
            });
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_obstacles_rest_on_ground_outside_play_area() {
        let settings = SimSettings::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for i in 0..200 {
            let obstacle = create_obstacle(EntityId(i), &settings, &mut rng);
            let r = Vec3::new(obstacle.position.x, 0.0, obstacle.position.z).length();
            assert!((50.0..=60.0).contains(&r));
            assert!((1.0..=3.0).contains(&obstacle.extents.x));
            assert_eq!(obstacle.extents.x, obstacle.extents.z);
            assert!((2.0..=7.0).contains(&obstacle.extents.y));
            // Bottom face sits on the ground plane.
            assert!((obstacle.bounds().min.y - GROUND_LEVEL).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clouds_spawn_in_sky_band() {
        let settings = SimSettings::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for i in 0..200 {
            let cloud = create_cloud(EntityId(i), &settings, &mut rng);
            assert!((5.0..=15.0).contains(&cloud.position.y));
            let r = Vec3::new(cloud.position.x, 0.0, cloud.position.z).length();
            assert!((10.0..=60.0).contains(&r));
        }
    }

    #[test]
    fn test_spawn_caps_hold() {
        let settings = SimSettings {
            obstacle_spawn_rate: 1.0,
            cloud_spawn_rate: 1.0,
            max_obstacles: 4,
            max_clouds: 2,
            ..SimSettings::default()
        };
        let mut obstacles = EntityStore::new();
        let mut clouds = EntityStore::new();
        let mut ids = IdAllocator::default();
        let mut events = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            run(&mut obstacles, &mut clouds, &mut ids, &settings, &mut events, &mut rng);
        }
        assert_eq!(obstacles.len(), 4);
        assert_eq!(clouds.len(), 2);
    }

    #[test]
    fn test_drifting_cloud_past_world_is_removed() {
        let settings = SimSettings::default();
        let mut clouds = EntityStore::new();
        clouds.insert(Cloud {
            id: EntityId(1),
            position: Vec3::new(100.5, 10.0, 0.0),
        });
        clouds.insert(Cloud {
            id: EntityId(2),
            position: Vec3::new(0.0, 10.0, 0.0),
        });
        let mut events = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        drift_clouds(&mut clouds, &settings, &mut events, &mut rng);
        assert_eq!(clouds.len(), 1);
        assert_eq!(clouds.get(0).map(|c| c.id), Some(EntityId(2)));
        let moved = clouds.get(0).unwrap().position;
        assert!(moved.x.abs() <= 0.025 && moved.z.abs() <= 0.025);
        assert_eq!(
            events,
            vec![SimEvent::VisualRemoved {
                kind: EntityKind::Cloud,
                id: EntityId(1)
            }]
        );
    }
}
