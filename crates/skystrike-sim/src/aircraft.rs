//! Flight controller: integrates the aircraft pose from control intent.

use std::f64::consts::TAU;

use skystrike_core::config::SimSettings;
use skystrike_core::constants::*;
use skystrike_core::enums::Gun;
use skystrike_core::input::{ControlIntent, Turn, Vertical};
use skystrike_core::types::{Aabb, Quat, Vec3};

/// The player aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub position: Vec3,
    /// Rotation about local X. Negative is nose up.
    pub pitch: f64,
    /// Rotation about world Y.
    pub yaw: f64,
    /// Bank. Positive while turning left.
    pub roll: f64,
    /// Smoothed engine ratio, 1.0 idle, approaching 1.5 under thrust.
    pub speed_ratio: f64,
    /// Propeller rotation in [0, TAU).
    pub propeller_angle: f64,
}

impl Default for Aircraft {
    fn default() -> Self {
        Self {
            position: AIRCRAFT_SPAWN_POSITION,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            speed_ratio: IDLE_SPEED_RATIO,
            propeller_angle: 0.0,
        }
    }
}

impl Aircraft {
    /// Aircraft at the spawn pose.
    pub fn spawn() -> Self {
        Self::default()
    }

    /// Orientation as intrinsic X-Y-Z rotations (pitch, yaw, roll).
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
            * Quat::from_rotation_y(self.yaw)
            * Quat::from_rotation_z(self.roll)
    }

    /// Unit vector along the nose.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    /// World position of a gun mount.
    pub fn muzzle(&self, gun: Gun) -> Vec3 {
        let offset = match gun {
            Gun::Left => LEFT_GUN_OFFSET,
            Gun::Right => RIGHT_GUN_OFFSET,
        };
        self.position + self.orientation() * offset
    }

    /// World-space bounding box of the rotated airframe.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_oriented(self.position, AIRCRAFT_HALF_EXTENTS, self.orientation())
    }

    /// Apply one tick of control intent, then clamp to the flight envelope.
    pub fn fly(&mut self, intent: &ControlIntent, settings: &SimSettings) {
        if intent.thrust_forward {
            self.position += self.forward() * settings.plane_speed;
        }

        match intent.turn() {
            Turn::Left => {
                self.yaw += TURN_RATE;
                self.roll = (self.roll + BANK_RATE).min(MAX_BANK);
            }
            Turn::Right => {
                self.yaw -= TURN_RATE;
                self.roll = (self.roll - BANK_RATE).max(-MAX_BANK);
            }
            Turn::None => self.roll = relax(self.roll, BANK_RATE),
        }

        match intent.vertical() {
            Vertical::Climb => {
                self.position.y += settings.vertical_speed;
                self.pitch = (self.pitch - PITCH_RATE).max(-MAX_PITCH);
            }
            Vertical::Descend => {
                self.position.y -= settings.vertical_speed;
                self.pitch = (self.pitch + PITCH_RATE).min(MAX_PITCH);
            }
            Vertical::None => self.pitch = relax(self.pitch, PITCH_RATE),
        }

        self.clamp_to_envelope(settings);

        let goal = if intent.thrust_forward {
            THRUST_SPEED_RATIO
        } else {
            IDLE_SPEED_RATIO
        };
        self.speed_ratio += (goal - self.speed_ratio) * SPEED_RATIO_LERP;
        self.propeller_angle =
            (self.propeller_angle + settings.propeller_speed * self.speed_ratio).rem_euclid(TAU);
    }

    /// Hard clamp: altitude to [min, max], x and z to the world half-size.
    pub fn clamp_to_envelope(&mut self, settings: &SimSettings) {
        let half = settings.half_world();
        self.position.y = self
            .position
            .y
            .clamp(settings.min_altitude, settings.max_altitude);
        self.position.x = self.position.x.clamp(-half, half);
        self.position.z = self.position.z.clamp(-half, half);
    }
}

/// Step `value` toward zero by `rate` without crossing it.
fn relax(value: f64, rate: f64) -> f64 {
    if value > 0.0 {
        (value - rate).max(0.0)
    } else if value < 0.0 {
        (value + rate).min(0.0)
    } else {
        0.0
    }
}
