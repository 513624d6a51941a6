//! Tunable simulation settings.
//!
//! Every field has a default, so a settings file only needs to name the values
//! it overrides. Field names serialize in camelCase (`planeSpeed`,
//! `shootingCooldown`, ...).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enums::{CollisionMode, HoverClock};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimSettings {
    // --- Aircraft ---
    /// Forward translation per tick while thrusting.
    pub plane_speed: f64,
    /// Altitude change per tick while climbing or descending.
    pub vertical_speed: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    /// Propeller advance per tick at speed ratio 1.
    pub propeller_speed: f64,

    // --- World ---
    /// Edge length of the square play area centered on the origin.
    pub world_size: f64,
    /// Accepted for settings compatibility. Obstacles do not move.
    pub obstacle_speed: f64,
    pub cloud_speed: f64,
    pub obstacle_spawn_rate: f64,
    pub cloud_spawn_rate: f64,
    pub max_obstacles: usize,
    pub max_clouds: usize,

    // --- Targets ---
    pub target_speed: f64,
    pub target_spawn_rate: f64,
    pub max_targets: usize,
    /// Points awarded per destroyed target.
    pub target_score: u32,

    // --- Projectiles ---
    pub bullet_speed: f64,
    /// Minimum gap between shots, in milliseconds.
    pub shooting_cooldown: f64,
    pub max_bullets: usize,
    /// Projectile time-to-live, in milliseconds.
    pub bullet_lifetime: f64,

    // --- Assist mode ---
    pub simplified_collision: bool,
    /// Reduced-fidelity assist: bullet spread, dense aim grid, proximity lock.
    pub assist_mode: bool,
    pub mobile_bullet_spread: f64,
    pub mobile_aim_assist_range: f64,

    // --- Presentation inputs ---
    pub viewport_aspect: f64,
    pub hover_clock: HoverClock,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            plane_speed: 0.1,
            vertical_speed: 0.08,
            min_altitude: 1.0,
            max_altitude: 30.0,
            propeller_speed: 2.0,
            world_size: 100.0,
            obstacle_speed: 0.2,
            cloud_speed: 0.05,
            obstacle_spawn_rate: 0.01,
            cloud_spawn_rate: 0.02,
            max_obstacles: 20,
            max_clouds: 15,
            target_speed: 0.1,
            target_spawn_rate: 0.008,
            max_targets: 10,
            target_score: 10,
            bullet_speed: 1.0,
            shooting_cooldown: 100.0,
            max_bullets: 50,
            bullet_lifetime: 2000.0,
            simplified_collision: false,
            assist_mode: false,
            mobile_bullet_spread: 0.1,
            mobile_aim_assist_range: 0.5,
            viewport_aspect: 16.0 / 9.0,
            hover_clock: HoverClock::Wall,
        }
    }
}

impl SimSettings {
    /// Low-fidelity profile for coarse-input devices.
    pub fn reduced_fidelity() -> Self {
        Self::default().with_reduced_fidelity()
    }

    /// Apply the low-fidelity overrides on top of these settings.
    pub fn with_reduced_fidelity(mut self) -> Self {
        self.max_clouds = 8;
        self.max_obstacles = 12;
        self.max_bullets = 25;
        self.simplified_collision = true;
        self.assist_mode = true;
        self
    }

    pub fn collision_mode(&self) -> CollisionMode {
        if self.simplified_collision {
            CollisionMode::Simplified
        } else {
            CollisionMode::Precise
        }
    }

    /// Half the world size: the horizontal clamp for the aircraft and projectiles.
    pub fn half_world(&self) -> f64 {
        self.world_size / 2.0
    }

    /// Check that every value is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }
        fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )))
            }
        }
        fn probability(name: &str, value: f64) -> Result<(), ConfigError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {value}"
                )))
            }
        }

        positive("worldSize", self.world_size)?;
        non_negative("minAltitude", self.min_altitude)?;
        if !self.max_altitude.is_finite() || self.max_altitude <= self.min_altitude {
            return Err(ConfigError::Invalid(format!(
                "maxAltitude ({}) must exceed minAltitude ({})",
                self.max_altitude, self.min_altitude
            )));
        }
        positive("planeSpeed", self.plane_speed)?;
        positive("verticalSpeed", self.vertical_speed)?;
        positive("targetSpeed", self.target_speed)?;
        positive("bulletSpeed", self.bullet_speed)?;
        positive("bulletLifetime", self.bullet_lifetime)?;
        positive("viewportAspect", self.viewport_aspect)?;
        non_negative("shootingCooldown", self.shooting_cooldown)?;
        non_negative("cloudSpeed", self.cloud_speed)?;
        non_negative("obstacleSpeed", self.obstacle_speed)?;
        non_negative("propellerSpeed", self.propeller_speed)?;
        non_negative("mobileBulletSpread", self.mobile_bullet_spread)?;
        non_negative("mobileAimAssistRange", self.mobile_aim_assist_range)?;
        probability("obstacleSpawnRate", self.obstacle_spawn_rate)?;
        probability("cloudSpawnRate", self.cloud_spawn_rate)?;
        probability("targetSpawnRate", self.target_spawn_rate)?;
        if self.max_bullets == 0 {
            return Err(ConfigError::Invalid("maxBullets must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
