//! Projectile system: gun cooldown, bullet creation, flight, expiry and hits.

use rand::Rng;
use tracing::debug;

use skystrike_core::config::SimSettings;
use skystrike_core::constants::{PROJECTILE_MAX_Y, PROJECTILE_MIN_Y, PROJECTILE_SPAWN_OFFSET};
use skystrike_core::enums::{EntityKind, Gun, SoundCue};
use skystrike_core::events::SimEvent;
use skystrike_core::types::{EntityId, Vec3};

use crate::aircraft::Aircraft;
use crate::entities::{Projectile, Target};
use crate::session::Session;
use crate::store::{EntityStore, IdAllocator};

/// Gun cooldown and alternation state.
#[derive(Debug, Clone)]
pub struct FireControl {
    /// Timestamp of the last successful shot.
    last_fire_ms: Option<f64>,
    /// Gun that fired last. Starts on the right so the first shot comes from the left.
    last_gun: Gun,
}

impl Default for FireControl {
    fn default() -> Self {
        Self {
            last_fire_ms: None,
            last_gun: Gun::Right,
        }
    }
}

/// A successful shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub id: EntityId,
    pub gun: Gun,
}

impl FireControl {
    /// Whether the cooldown has elapsed at `now_ms`.
    pub fn ready(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        match self.last_fire_ms {
            Some(last) => now_ms - last >= cooldown_ms,
            None => true,
        }
    }

    pub fn last_gun(&self) -> Gun {
        self.last_gun
    }

    /// Fire from the next gun if the cooldown allows. Returns `None` when still cooling down.
    #[allow(clippy::too_many_arguments)]
    pub fn fire(
        &mut self,
        aircraft: &Aircraft,
        settings: &SimSettings,
        now_ms: f64,
        ids: &mut IdAllocator,
        projectiles: &mut EntityStore<Projectile>,
        events: &mut Vec<SimEvent>,
        rng: &mut impl Rng,
    ) -> Option<Shot> {
        if !self.ready(now_ms, settings.shooting_cooldown) {
            return None;
        }
        let gun = self.last_gun.other();
        self.last_gun = gun;
        self.last_fire_ms = Some(now_ms);

        let mut direction = aircraft.forward();
        if settings.assist_mode && settings.mobile_bullet_spread > 0.0 {
            direction = spread(direction, settings.mobile_bullet_spread, rng);
        }
        let position = aircraft.muzzle(gun) + direction * PROJECTILE_SPAWN_OFFSET;

        let id = ids.allocate();
        projectiles.insert(Projectile {
            id,
            position,
            direction,
            speed: settings.bullet_speed,
            gun,
            created_ms: now_ms,
            ttl_ms: settings.bullet_lifetime,
        });
        debug!(id = id.0, ?gun, "projectile fired");
        events.push(SimEvent::VisualAdded {
            kind: EntityKind::Projectile,
            id,
            position,
        });
        events.push(SimEvent::Sound {
            cue: SoundCue::Shoot,
        });
        Some(Shot { id, gun })
    }
}

/// Random perturbation of a unit direction. Depth (z) jitter is half the lateral jitter.
pub fn spread(direction: Vec3, amount: f64, rng: &mut impl Rng) -> Vec3 {
    let jitter = Vec3::new(
        (rng.gen::<f64>() - 0.5) * amount,
        (rng.gen::<f64>() - 0.5) * amount,
        (rng.gen::<f64>() - 0.5) * amount * 0.5,
    );
    (direction + jitter).try_normalize().unwrap_or(direction)
}

fn out_of_bounds(position: Vec3, half_world: f64) -> bool {
    position.x.abs() > half_world
        || position.z.abs() > half_world
        || position.y < PROJECTILE_MIN_Y
        || position.y > PROJECTILE_MAX_Y
}

/// Advance every projectile, expire stale ones, resolve target hits, then cap the count.
///
/// Projectiles are visited newest first. Each one tests targets oldest first and
/// stops at its first hit.
pub fn run(
    projectiles: &mut EntityStore<Projectile>,
    targets: &mut EntityStore<Target>,
    session: &mut Session,
    settings: &SimSettings,
    now_ms: f64,
    events: &mut Vec<SimEvent>,
) {
    let half_world = settings.half_world();

    for i in (0..projectiles.len()).rev() {
        let Some(projectile) = projectiles.get_mut(i) else {
            continue;
        };
        projectile.position += projectile.direction * projectile.speed;

        if projectile.expired(now_ms) || out_of_bounds(projectile.position, half_world) {
            let removed = projectiles.remove_at(i);
            events.push(SimEvent::VisualRemoved {
                kind: EntityKind::Projectile,
                id: removed.id,
            });
            continue;
        }

        let bounds = projectile.bounds();
        let Some(hit) = targets.iter().position(|t| bounds.intersects(&t.bounds())) else {
            continue;
        };

        let removed = projectiles.remove_at(i);
        let target = targets.remove_at(hit);
        let center = target.bounds().center();
        debug!(projectile = removed.id.0, target = target.id.0, "target destroyed");
        events.push(SimEvent::VisualRemoved {
            kind: EntityKind::Projectile,
            id: removed.id,
        });
        events.push(SimEvent::VisualRemoved {
            kind: EntityKind::Target,
            id: target.id,
        });
        events.push(SimEvent::Explosion { position: center });
        events.push(SimEvent::Sound {
            cue: SoundCue::Explosion,
        });
        session.award(settings.target_score, events);
    }

    for evicted in projectiles.evict_oldest(settings.max_bullets) {
        events.push(SimEvent::VisualRemoved {
            kind: EntityKind::Projectile,
            id: evicted.id,
        });
    }
}
