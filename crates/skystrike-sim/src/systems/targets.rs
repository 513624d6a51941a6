//! Target system: probabilistic spawning and per-tick movement.

use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use skystrike_core::config::SimSettings;
use skystrike_core::constants::*;
use skystrike_core::enums::EntityKind;
use skystrike_core::events::SimEvent;
use skystrike_core::types::{EntityId, Vec3};

use crate::entities::{Target, TargetMotion};
use crate::store::{EntityStore, IdAllocator};

/// Per-session spawn counter. Gives each target its hover phase.
#[derive(Debug, Clone, Default)]
pub struct TargetSpawner {
    next_index: u32,
}

impl TargetSpawner {
    pub fn next_index(&mut self) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        index
    }
}

/// Roll for a new target. Nothing is drawn from `rng` when the cap is reached.
pub fn spawn(
    targets: &mut EntityStore<Target>,
    spawner: &mut TargetSpawner,
    ids: &mut IdAllocator,
    settings: &SimSettings,
    events: &mut Vec<SimEvent>,
    rng: &mut impl Rng,
) -> Option<EntityId> {
    if targets.len() >= settings.max_targets || rng.gen::<f64>() >= settings.target_spawn_rate {
        return None;
    }
    let target = create_target(ids.allocate(), spawner.next_index(), settings, rng);
    let id = target.id;
    debug!(
        id = id.0,
        airborne = target.is_airborne(),
        x = target.position.x,
        z = target.position.z,
        "target spawned"
    );
    events.push(SimEvent::VisualAdded {
        kind: EntityKind::Target,
        id,
        position: target.position,
    });
    targets.insert(target);
    Some(id)
}

/// Build a target on a random bearing between the inner spawn radius and the
/// outer spawn ring.
pub fn create_target(
    id: EntityId,
    spawn_index: u32,
    settings: &SimSettings,
    rng: &mut impl Rng,
) -> Target {
    let angle = rng.gen::<f64>() * TAU;
    let ring = (settings.half_world() - TARGET_SPAWN_EDGE_MARGIN).max(0.0);
    let distance = TARGET_SPAWN_MIN_RADIUS + rng.gen::<f64>() * ring;

    let (height, motion) = if rng.gen::<f64>() < AIRBORNE_CHANCE {
        let max_height = settings.max_altitude - AIRBORNE_CEILING_MARGIN;
        let band = (max_height - AIRBORNE_MIN_HEIGHT).max(0.0);
        let height = AIRBORNE_MIN_HEIGHT + rng.gen::<f64>() * band;
        let vertical_direction = if rng.gen::<f64>() < 0.5 { 1.0 } else { -1.0 };
        let vertical_speed =
            AIRBORNE_VERTICAL_SPEED_MIN + rng.gen::<f64>() * AIRBORNE_VERTICAL_SPEED_SPREAD;
        (
            height,
            TargetMotion::Airborne {
                vertical_direction,
                vertical_speed,
                min_height: AIRBORNE_MIN_HEIGHT,
                max_height: max_height.max(AIRBORNE_MIN_HEIGHT),
            },
        )
    } else {
        (0.0, TargetMotion::Grounded)
    };

    let direction = Vec3::new(
        (rng.gen::<f64>() - 0.5) * 2.0,
        0.0,
        (rng.gen::<f64>() - 0.5) * 2.0,
    )
    .try_normalize()
    .unwrap_or(Vec3::X);

    Target {
        id,
        position: Vec3::new(angle.cos() * distance, height, angle.sin() * distance),
        direction,
        speed: settings.target_speed,
        motion,
        spawn_index,
    }
}

/// Hover height of a grounded target at clock time `clock_ms`.
pub fn hover_height(clock_ms: f64, spawn_index: u32) -> f64 {
    (clock_ms * HOVER_FREQUENCY + spawn_index as f64).sin() * HOVER_AMPLITUDE
}

/// Move every target one tick. `clock_ms` drives grounded hover.
pub fn run(targets: &mut EntityStore<Target>, settings: &SimSettings, clock_ms: f64) {
    let limit = settings.half_world() - TARGET_BOUNCE_MARGIN;
    for target in targets.iter_mut() {
        advance(target, limit, clock_ms);
    }
}

fn advance(target: &mut Target, limit: f64, clock_ms: f64) {
    target.position.x += target.direction.x * target.speed;
    target.position.z += target.direction.z * target.speed;

    match &mut target.motion {
        TargetMotion::Airborne {
            vertical_direction,
            vertical_speed,
            min_height,
            max_height,
        } => {
            let y = target.position.y + *vertical_direction * *vertical_speed;
            if y >= *max_height {
                target.position.y = *max_height;
                *vertical_direction = -1.0;
            } else if y <= *min_height {
                target.position.y = *min_height;
                *vertical_direction = 1.0;
            } else {
                target.position.y = y;
            }
        }
        TargetMotion::Grounded => {
            target.position.y = hover_height(clock_ms, target.spawn_index);
        }
    }

    // Per-axis bounce off the inner boundary.
    if target.position.x.abs() > limit {
        target.direction.x = -target.direction.x;
        target.position.x = target.position.x.signum() * limit;
    }
    if target.position.z.abs() > limit {
        target.direction.z = -target.direction.z;
        target.position.z = target.position.z.signum() * limit;
    }
}
