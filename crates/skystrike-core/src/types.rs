//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::FRAME_MS;

/// World-space vector (x = East, y = Up, z = North-ish; units are world units).
pub type Vec3 = glam::DVec3;

/// Aircraft orientation quaternion.
pub type Quat = glam::DQuat;

/// Stable identifier for a spawned entity. Never reused within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += FRAME_MS;
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centered on `center` extending `half_extents` along each axis.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// World-space AABB enclosing a box of `half_extents` rotated by `rotation`
    /// and centered on `center`.
    pub fn from_oriented(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        let axes = [
            rotation * Vec3::X * half_extents.x,
            rotation * Vec3::Y * half_extents.y,
            rotation * Vec3::Z * half_extents.z,
        ];
        let reach = axes
            .iter()
            .fold(Vec3::ZERO, |acc, axis| acc + axis.abs());
        Self::from_center(center, reach)
    }

    /// Overlap test. Touching faces count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
