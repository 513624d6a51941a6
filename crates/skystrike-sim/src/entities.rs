//! Entity records held in the subsystem stores.
//!
//! Plain data. Behavior lives in `systems`.

use skystrike_core::constants::{PROJECTILE_HALF_EXTENT, TARGET_RADIUS};
use skystrike_core::enums::Gun;
use skystrike_core::types::{Aabb, EntityId, Vec3};

use crate::store::StoredEntity;

/// A live bullet.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec3,
    /// Unit direction of travel.
    pub direction: Vec3,
    /// Distance per tick.
    pub speed: f64,
    pub gun: Gun,
    /// Host timestamp at creation (ms).
    pub created_ms: f64,
    pub ttl_ms: f64,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, Vec3::splat(PROJECTILE_HALF_EXTENT))
    }

    pub fn expired(&self, now_ms: f64) -> bool {
        now_ms - self.created_ms > self.ttl_ms
    }
}

/// Vertical behavior of a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetMotion {
    /// Oscillates between two heights, reflecting at each.
    Airborne {
        /// +1 rising, -1 falling.
        vertical_direction: f64,
        vertical_speed: f64,
        min_height: f64,
        max_height: f64,
    },
    /// Hovers near the ground; height is recomputed from the clock every tick.
    Grounded,
}

#[derive(Debug, Clone)]
pub struct Target {
    pub id: EntityId,
    pub position: Vec3,
    /// Horizontal unit direction (y is always 0).
    pub direction: Vec3,
    pub speed: f64,
    pub motion: TargetMotion,
    /// Spawn order within the session. Phase offset for the hover curve.
    pub spawn_index: u32,
}

impl Target {
    pub fn is_airborne(&self) -> bool {
        matches!(self.motion, TargetMotion::Airborne { .. })
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, Vec3::splat(TARGET_RADIUS))
    }
}

/// Static box resting on the ground.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: EntityId,
    pub position: Vec3,
    /// Full width, height, depth.
    pub extents: Vec3,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.extents * 0.5)
    }

    /// Approximate radius for the distance-threshold collision strategy.
    pub fn approximate_radius(&self) -> f64 {
        self.extents.x.max(self.extents.y) / 2.0
    }
}

/// Drifting scenery. Never collides.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub id: EntityId,
    pub position: Vec3,
}

macro_rules! stored_entity {
    ($($ty:ty),*) => {
        $(
            impl StoredEntity for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }
            }
        )*
    };
}

stored_entity!(Projectile, Target, Obstacle, Cloud);
