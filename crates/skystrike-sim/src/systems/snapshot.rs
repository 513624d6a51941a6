//! Snapshot system: builds a complete `SimSnapshot` from the world.
//!
//! Read-only; never modifies simulation state.

use skystrike_core::events::SimEvent;
use skystrike_core::state::*;
use skystrike_core::types::SimTime;

use crate::aircraft::Aircraft;
use crate::camera::Viewpoint;
use crate::session::Session;
use crate::systems::effects::EffectScheduler;
use crate::systems::lock_on::LockOn;
use crate::world::World;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &Session,
    viewpoint: &Viewpoint,
    lock: &LockOn,
    effects: &EffectScheduler,
    now_ms: f64,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        session: session.state(),
        score: session.score(),
        aircraft: build_aircraft(&world.aircraft),
        camera: viewpoint.view(),
        targets: world
            .targets
            .iter()
            .map(|t| TargetView {
                id: t.id,
                position: t.position,
                airborne: t.is_airborne(),
            })
            .collect(),
        projectiles: world
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                id: p.id,
                position: p.position,
                direction: p.direction,
            })
            .collect(),
        obstacles: world
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                id: o.id,
                position: o.position,
                extents: o.extents,
            })
            .collect(),
        clouds: world
            .clouds
            .iter()
            .map(|c| CloudView {
                id: c.id,
                position: c.position,
            })
            .collect(),
        lock: lock.view(now_ms),
        muzzle_flashes: effects.muzzle_flashes(),
        events,
    }
}

fn build_aircraft(aircraft: &Aircraft) -> AircraftView {
    AircraftView {
        position: aircraft.position,
        pitch: aircraft.pitch,
        yaw: aircraft.yaw,
        roll: aircraft.roll,
        speed_ratio: aircraft.speed_ratio,
        propeller_angle: aircraft.propeller_angle,
    }
}
