//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Playing,
    /// Ended by an obstacle collision. Only a restart leaves this state.
    GameOver,
}

/// Gun mount on the aircraft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gun {
    #[default]
    Left,
    Right,
}

impl Gun {
    /// The other gun (ping-pong alternation).
    pub fn other(self) -> Self {
        match self {
            Gun::Left => Gun::Right,
            Gun::Right => Gun::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Gun::Left => 0,
            Gun::Right => 1,
        }
    }
}

/// Kind of entity held in the spatial stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle,
    Cloud,
    Target,
    Projectile,
}

/// Sound cues handed to the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Shoot,
    Explosion,
    LockOn,
}

/// Collision strategy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Bounding-volume overlap.
    #[default]
    Precise,
    /// Center-distance against approximate radii.
    Simplified,
}

/// Camera framing used to derive aim-assist rays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Chase camera behind the aircraft.
    #[default]
    Follow,
    /// Free orbit around the aircraft.
    Orbit,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Follow => CameraMode::Orbit,
            CameraMode::Orbit => CameraMode::Follow,
        }
    }
}

/// Lock-on progression as seen by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockPhase {
    #[default]
    Unlocked,
    /// Target in sight, lock animation still running.
    Locking,
    /// Target in sight, animation complete.
    Locked,
}

/// Clock driving grounded-target hover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverClock {
    /// Host-supplied wall-clock timestamp. Hover phase depends on real time.
    #[default]
    Wall,
    /// Accumulated simulation time. Frame-rate independent.
    Simulation,
}
