//! Simulation constants and fixed tuning parameters.
//!
//! Values here are not user-tunable; see `config::SimSettings` for those.

use crate::types::Vec3;

/// Host frame rate the simulation is tuned for (Hz). One tick per frame.
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Aircraft ---

/// Spawn position after start and restart.
pub const AIRCRAFT_SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Yaw change per tick while turning (radians).
pub const TURN_RATE: f64 = 0.03;

/// Bank (roll) change per tick (radians).
pub const BANK_RATE: f64 = 0.05;

/// Maximum bank angle (radians).
pub const MAX_BANK: f64 = 0.5;

/// Pitch change per tick while climbing/descending (radians).
pub const PITCH_RATE: f64 = 0.03;

/// Maximum pitch angle (radians).
pub const MAX_PITCH: f64 = 0.3;

/// Speed-ratio interpolation factor per tick.
pub const SPEED_RATIO_LERP: f64 = 0.05;

/// Speed ratio approached while thrust is held.
pub const THRUST_SPEED_RATIO: f64 = 1.5;

/// Speed ratio approached with no thrust.
pub const IDLE_SPEED_RATIO: f64 = 1.0;

/// Half-extents of the aircraft's model-space bounding box (wingspan, height, length).
pub const AIRCRAFT_HALF_EXTENTS: Vec3 = Vec3::new(1.5, 0.5, 1.1);

/// Aircraft radius for the simplified collision strategy.
pub const AIRCRAFT_COLLISION_RADIUS: f64 = 1.5;

/// Left gun mount in aircraft-local space.
pub const LEFT_GUN_OFFSET: Vec3 = Vec3::new(-1.2, 0.0, 0.5);

/// Right gun mount in aircraft-local space.
pub const RIGHT_GUN_OFFSET: Vec3 = Vec3::new(1.2, 0.0, 0.5);

// --- Projectiles ---

/// Distance ahead of the muzzle a projectile is created at.
pub const PROJECTILE_SPAWN_OFFSET: f64 = 0.5;

/// Half-extent of a projectile's bounding cube.
pub const PROJECTILE_HALF_EXTENT: f64 = 0.25;

/// Projectiles below this height are removed.
pub const PROJECTILE_MIN_Y: f64 = -2.0;

/// Projectiles above this height are removed.
pub const PROJECTILE_MAX_Y: f64 = 50.0;

// --- Targets ---

/// Target sphere radius (bounding volume, ray tests, simplified collision).
pub const TARGET_RADIUS: f64 = 1.0;

/// Minimum spawn distance from world center.
pub const TARGET_SPAWN_MIN_RADIUS: f64 = 10.0;

/// Spawn ring stops this far short of the world edge.
pub const TARGET_SPAWN_EDGE_MARGIN: f64 = 15.0;

/// Targets bounce this far inside the world edge.
pub const TARGET_BOUNCE_MARGIN: f64 = 5.0;

/// Probability that a new target is airborne.
pub const AIRBORNE_CHANCE: f64 = 0.4;

/// Airborne targets never fly lower than this.
pub const AIRBORNE_MIN_HEIGHT: f64 = 2.0;

/// Airborne ceiling sits this far below the aircraft's max altitude.
pub const AIRBORNE_CEILING_MARGIN: f64 = 2.0;

/// Slowest airborne vertical speed (per tick).
pub const AIRBORNE_VERTICAL_SPEED_MIN: f64 = 0.02;

/// Width of the airborne vertical speed range.
pub const AIRBORNE_VERTICAL_SPEED_SPREAD: f64 = 0.04;

/// Hover phase advance per millisecond.
pub const HOVER_FREQUENCY: f64 = 0.002;

/// Hover amplitude.
pub const HOVER_AMPLITUDE: f64 = 0.3;

// --- Scenery ---

/// Height of the ground plane.
pub const GROUND_LEVEL: f64 = -2.0;

pub const OBSTACLE_MIN_SIZE: f64 = 1.0;
pub const OBSTACLE_SIZE_SPREAD: f64 = 2.0;
pub const OBSTACLE_MIN_HEIGHT: f64 = 2.0;
pub const OBSTACLE_HEIGHT_SPREAD: f64 = 5.0;

/// Obstacles spawn up to this far beyond the world edge.
pub const OBSTACLE_RING_DEPTH: f64 = 10.0;

pub const CLOUD_MIN_HEIGHT: f64 = 5.0;
pub const CLOUD_HEIGHT_SPREAD: f64 = 10.0;
pub const CLOUD_MIN_RADIUS: f64 = 10.0;

// --- Camera ---

/// Follow-camera offset in aircraft-local space.
pub const FOLLOW_CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 3.0, -10.0);

/// Orbit-camera horizontal distance.
pub const ORBIT_CAMERA_DISTANCE: f64 = 10.0;

/// Orbit-camera height above the aircraft.
pub const ORBIT_CAMERA_HEIGHT: f64 = 5.0;

/// Vertical field of view (degrees).
pub const CAMERA_FOV_DEG: f64 = 75.0;

// --- Aim assist ---

/// Screen-space offset of the four corner rays on precise-input devices.
pub const PRECISE_RAY_SPREAD: f64 = 0.1;

/// Grid step (in units of the assist range) for coarse-input ray casts.
pub const ASSIST_GRID_STEP: f64 = 0.5;

/// Proximity fallback radius in assist mode.
pub const ASSIST_FALLBACK_RANGE: f64 = 30.0;

/// Lock animation duration (ms).
pub const LOCK_DURATION_MS: f64 = 300.0;

/// Lock animation duration in assist mode (ms).
pub const ASSIST_LOCK_DURATION_MS: f64 = 200.0;

/// Lock-box scale at acquisition.
pub const LOCK_BOX_INITIAL_SCALE: f64 = 1.5;

/// Lock-box scale at full lock.
pub const LOCK_BOX_FINAL_SCALE: f64 = 1.0;

/// Distance at which the lock color is fully shifted.
pub const LOCK_COLOR_RANGE: f64 = 30.0;

/// Pulse angular rate applied to `now_ms`.
pub const LOCK_PULSE_RATE: f64 = 0.08;

pub const CROSSHAIR_LOCKED_OPACITY: f64 = 0.9;
pub const CROSSHAIR_IDLE_OPACITY: f64 = 0.8;

// --- Effects ---

/// Muzzle flash visibility (ms).
pub const MUZZLE_FLASH_MS: f64 = 100.0;
