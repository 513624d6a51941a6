//! The entity world: the aircraft plus one store per entity kind.

use tracing::debug;

use skystrike_core::enums::EntityKind;
use skystrike_core::events::SimEvent;

use crate::aircraft::Aircraft;
use crate::entities::{Cloud, Obstacle, Projectile, Target};
use crate::store::{EntityStore, StoredEntity};

#[derive(Debug, Clone, Default)]
pub struct World {
    pub aircraft: Aircraft,
    pub projectiles: EntityStore<Projectile>,
    pub targets: EntityStore<Target>,
    pub obstacles: EntityStore<Obstacle>,
    pub clouds: EntityStore<Cloud>,
}

impl World {
    /// Remove every entity (emitting removal events) and put the aircraft back
    /// at its spawn pose.
    pub fn reset(&mut self, events: &mut Vec<SimEvent>) {
        let removed = drain(&mut self.obstacles, EntityKind::Obstacle, events)
            + drain(&mut self.clouds, EntityKind::Cloud, events)
            + drain(&mut self.targets, EntityKind::Target, events)
            + drain(&mut self.projectiles, EntityKind::Projectile, events);
        self.aircraft = Aircraft::spawn();
        debug!(removed, "world reset");
    }

    pub fn entity_count(&self) -> usize {
        self.projectiles.len() + self.targets.len() + self.obstacles.len() + self.clouds.len()
    }
}

fn drain<T: StoredEntity>(
    store: &mut EntityStore<T>,
    kind: EntityKind,
    events: &mut Vec<SimEvent>,
) -> usize {
    let removed = store.take_all();
    for entity in &removed {
        events.push(SimEvent::VisualRemoved {
            kind,
            id: entity.id(),
        });
    }
    removed.len()
}
