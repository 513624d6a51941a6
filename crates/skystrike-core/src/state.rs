//! Snapshot types: the read-only view of the simulation after a tick.
//!
//! A `SimSnapshot` is everything a renderer needs to draw a frame.

use serde::{Deserialize, Serialize};

use crate::enums::{CameraMode, LockPhase, SessionState};
use crate::events::SimEvent;
use crate::types::{EntityId, SimTime, Vec3};

/// Complete simulation state for one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub session: SessionState,
    pub score: u32,
    pub aircraft: AircraftView,
    pub camera: CameraView,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<CloudView>,
    pub lock: LockView,
    pub muzzle_flashes: MuzzleFlashView,
    /// Events produced during this tick.
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AircraftView {
    pub position: Vec3,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub speed_ratio: f64,
    pub propeller_angle: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: CameraMode,
    pub eye: Vec3,
    pub look_at: Vec3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub id: EntityId,
    pub position: Vec3,
    pub airborne: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub position: Vec3,
    pub direction: Vec3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: EntityId,
    pub position: Vec3,
    /// Full width, height, depth.
    pub extents: Vec3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudView {
    pub id: EntityId,
    pub position: Vec3,
}

/// Lock-on presentation state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LockView {
    pub phase: LockPhase,
    pub target: Option<EntityId>,
    /// Lock animation progress in [0, 1].
    pub progress: f64,
    /// Milliseconds since acquisition, 0 when unlocked.
    pub elapsed_ms: f64,
    pub distance: Option<f64>,
    pub box_position: Option<Vec3>,
    pub box_scale: f64,
    pub box_opacity: f64,
    pub color: Color,
    pub crosshair_opacity: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MuzzleFlashView {
    pub left: bool,
    pub right: bool,
}

/// Linear RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    /// Convert hue, saturation, lightness (all in [0, 1]) to RGB.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Color { r: l, g: l, b: l };
        }
        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;
        Color {
            r: hue_to_channel(q, p, h + 1.0 / 3.0),
            g: hue_to_channel(q, p, h),
            b: hue_to_channel(q, p, h - 1.0 / 3.0),
        }
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
