//! Aim-assist and lock-on.
//!
//! Casts a fan of rays through the crosshair and remembers the nearest target
//! hit. In assist mode a denser fan is used and, failing any ray hit, the
//! nearest target within range counts as in sight. Lock state only feeds the
//! presentation; it never affects damage or score.

use tracing::debug;

use skystrike_core::config::SimSettings;
use skystrike_core::constants::*;
use skystrike_core::enums::{LockPhase, SoundCue};
use skystrike_core::events::SimEvent;
use skystrike_core::state::{Color, LockView};
use skystrike_core::types::{EntityId, Vec3};

use crate::camera::Viewpoint;
use crate::entities::Target;
use crate::store::EntityStore;

/// The nearest target in sight this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub target: EntityId,
    pub distance: f64,
    pub position: Vec3,
}

/// Screen-space ray offsets: the center first, then four corners, or the
/// assist grid with the center skipped.
pub fn sample_offsets(assist_mode: bool, assist_range: f64) -> Vec<(f64, f64)> {
    let mut offsets = vec![(0.0, 0.0)];
    if assist_mode {
        let steps = [-1.0, -ASSIST_GRID_STEP, 0.0, ASSIST_GRID_STEP, 1.0];
        for x in steps {
            for y in steps {
                if x != 0.0 || y != 0.0 {
                    offsets.push((x * assist_range, y * assist_range));
                }
            }
        }
    } else {
        let d = PRECISE_RAY_SPREAD;
        offsets.extend([(d, d), (-d, d), (d, -d), (-d, -d)]);
    }
    offsets
}

/// Find the nearest target along any sample ray, with the proximity fallback in
/// assist mode.
pub fn detect(
    viewpoint: &Viewpoint,
    targets: &EntityStore<Target>,
    settings: &SimSettings,
) -> Option<Sighting> {
    let mut best: Option<Sighting> = None;
    for (x, y) in sample_offsets(settings.assist_mode, settings.mobile_aim_assist_range) {
        let ray = viewpoint.ray(x, y);
        for target in targets.iter() {
            let Some(distance) = ray.intersect_sphere(target.position, TARGET_RADIUS) else {
                continue;
            };
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Sighting {
                    target: target.id,
                    distance,
                    position: target.position,
                });
            }
        }
    }

    if best.is_none() && settings.assist_mode {
        let mut closest = ASSIST_FALLBACK_RANGE;
        for target in targets.iter() {
            let distance = viewpoint.eye.distance(target.position);
            if distance < closest {
                closest = distance;
                best = Some(Sighting {
                    target: target.id,
                    distance,
                    position: target.position,
                });
            }
        }
    }
    best
}

/// Lock timing and the most recent sighting.
#[derive(Debug, Clone, Default)]
pub struct LockOn {
    sighting: Option<Sighting>,
    /// When the current lock began; 0 while unlocked.
    lock_start_ms: f64,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl LockOn {
    pub fn in_sight(&self) -> bool {
        self.sighting.is_some()
    }

    pub fn sighting(&self) -> Option<Sighting> {
        self.sighting
    }

    /// Milliseconds since acquisition, 0 while unlocked.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn progress(&self) -> f64 {
        if self.sighting.is_none() || self.duration_ms <= 0.0 {
            return 0.0;
        }
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }

    pub fn phase(&self) -> LockPhase {
        match self.sighting {
            None => LockPhase::Unlocked,
            Some(_) if self.progress() < 1.0 => LockPhase::Locking,
            Some(_) => LockPhase::Locked,
        }
    }

    /// Recompute from a fresh detection.
    pub fn update(
        &mut self,
        viewpoint: &Viewpoint,
        targets: &EntityStore<Target>,
        settings: &SimSettings,
        now_ms: f64,
        events: &mut Vec<SimEvent>,
    ) {
        let sighting = detect(viewpoint, targets, settings);
        self.apply(sighting, settings.assist_mode, now_ms, events);
    }

    /// Advance the lock state machine with this tick's sighting.
    pub fn apply(
        &mut self,
        sighting: Option<Sighting>,
        assist_mode: bool,
        now_ms: f64,
        events: &mut Vec<SimEvent>,
    ) {
        self.duration_ms = if assist_mode {
            ASSIST_LOCK_DURATION_MS
        } else {
            LOCK_DURATION_MS
        };

        match sighting {
            Some(found) => {
                if self.sighting.is_none() {
                    self.lock_start_ms = now_ms;
                    debug!(target = found.target.0, distance = found.distance, "lock acquired");
                    events.push(SimEvent::LockAcquired {
                        target: found.target,
                    });
                    events.push(SimEvent::Sound {
                        cue: SoundCue::LockOn,
                    });
                }
                self.elapsed_ms = (now_ms - self.lock_start_ms).max(0.0);
            }
            None => {
                self.lock_start_ms = 0.0;
                self.elapsed_ms = 0.0;
            }
        }
        self.sighting = sighting;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop the sighting if its target is no longer alive. The next sighting
    /// counts as a fresh acquisition.
    pub fn release_if_gone(&mut self, targets: &EntityStore<Target>) {
        let Some(sighting) = self.sighting else {
            return;
        };
        if targets.find(sighting.target).is_none() {
            debug!(target = sighting.target.0, "lock released");
            self.sighting = None;
            self.lock_start_ms = 0.0;
            self.elapsed_ms = 0.0;
        }
    }

    /// Presentation values for the crosshair and lock box at `now_ms`.
    pub fn view(&self, now_ms: f64) -> LockView {
        let Some(sighting) = self.sighting else {
            return LockView {
                phase: LockPhase::Unlocked,
                target: None,
                progress: 0.0,
                elapsed_ms: 0.0,
                distance: None,
                box_position: None,
                box_scale: LOCK_BOX_INITIAL_SCALE,
                box_opacity: 0.0,
                color: Color::RED,
                crosshair_opacity: CROSSHAIR_IDLE_OPACITY,
            };
        };
        let progress = self.progress();
        let normalized = (sighting.distance / LOCK_COLOR_RANGE).min(1.0);
        let pulse = (now_ms * LOCK_PULSE_RATE).sin() * 0.3 + 0.7;
        LockView {
            phase: self.phase(),
            target: Some(sighting.target),
            progress,
            elapsed_ms: self.elapsed_ms,
            distance: Some(sighting.distance),
            box_position: Some(sighting.position),
            box_scale: LOCK_BOX_INITIAL_SCALE
                - (LOCK_BOX_INITIAL_SCALE - LOCK_BOX_FINAL_SCALE) * progress,
            box_opacity: pulse * progress,
            color: Color::from_hsl(0.3 - normalized * 0.3, 1.0, 0.5),
            crosshair_opacity: CROSSHAIR_LOCKED_OPACITY,
        }
    }
}
