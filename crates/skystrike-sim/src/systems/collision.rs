//! Collision system: aircraft against obstacles and targets.
//!
//! Two strategies share one contract. `Precise` overlaps bounding boxes;
//! `Simplified` compares center distance against approximate radii and is
//! selected for reduced-fidelity play.

use tracing::debug;

use skystrike_core::config::SimSettings;
use skystrike_core::constants::{AIRCRAFT_COLLISION_RADIUS, TARGET_RADIUS};
use skystrike_core::enums::{CollisionMode, EntityKind};
use skystrike_core::events::SimEvent;
use skystrike_core::types::EntityId;

use crate::aircraft::Aircraft;
use crate::entities::{Obstacle, Target};
use crate::session::Session;
use crate::store::EntityStore;

pub trait CollisionStrategy {
    /// True when the aircraft touches any obstacle.
    fn check_obstacles(&self, aircraft: &Aircraft, obstacles: &EntityStore<Obstacle>) -> bool;

    /// Every target the aircraft touches, oldest first.
    fn check_targets(&self, aircraft: &Aircraft, targets: &EntityStore<Target>) -> Vec<EntityId>;
}

/// World-space bounding box overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Precise;

impl CollisionStrategy for Precise {
    fn check_obstacles(&self, aircraft: &Aircraft, obstacles: &EntityStore<Obstacle>) -> bool {
        let body = aircraft.bounds();
        obstacles.iter().any(|o| body.intersects(&o.bounds()))
    }

    fn check_targets(&self, aircraft: &Aircraft, targets: &EntityStore<Target>) -> Vec<EntityId> {
        let body = aircraft.bounds();
        targets
            .iter()
            .filter(|t| body.intersects(&t.bounds()))
            .map(|t| t.id)
            .collect()
    }
}

/// Center distance against fixed and extent-derived radii.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplified;

impl CollisionStrategy for Simplified {
    fn check_obstacles(&self, aircraft: &Aircraft, obstacles: &EntityStore<Obstacle>) -> bool {
        obstacles.iter().any(|o| {
            aircraft.position.distance(o.position) < AIRCRAFT_COLLISION_RADIUS + o.approximate_radius()
        })
    }

    fn check_targets(&self, aircraft: &Aircraft, targets: &EntityStore<Target>) -> Vec<EntityId> {
        targets
            .iter()
            .filter(|t| {
                aircraft.position.distance(t.position) < AIRCRAFT_COLLISION_RADIUS + TARGET_RADIUS
            })
            .map(|t| t.id)
            .collect()
    }
}

pub fn strategy(mode: CollisionMode) -> &'static dyn CollisionStrategy {
    match mode {
        CollisionMode::Precise => &Precise,
        CollisionMode::Simplified => &Simplified,
    }
}

/// What the collision pass did this tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollisionOutcome {
    pub crashed: bool,
    pub rammed: Vec<EntityId>,
}

/// Resolve aircraft collisions. An obstacle hit ends the session and skips the
/// target pass; each touched target is destroyed and scored.
pub fn run(
    aircraft: &Aircraft,
    obstacles: &EntityStore<Obstacle>,
    targets: &mut EntityStore<Target>,
    session: &mut Session,
    settings: &SimSettings,
    events: &mut Vec<SimEvent>,
) -> CollisionOutcome {
    let strategy = strategy(settings.collision_mode());

    if strategy.check_obstacles(aircraft, obstacles) {
        session.end(events);
        return CollisionOutcome {
            crashed: true,
            rammed: Vec::new(),
        };
    }

    let rammed = strategy.check_targets(aircraft, targets);
    for &id in &rammed {
        if targets.remove(id).is_some() {
            debug!(target = id.0, "target rammed");
            events.push(SimEvent::VisualRemoved {
                kind: EntityKind::Target,
                id,
            });
            session.award(settings.target_score, events);
        }
    }
    CollisionOutcome {
        crashed: false,
        rammed,
    }
}
