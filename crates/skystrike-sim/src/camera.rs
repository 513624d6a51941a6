//! View model used to aim the lock-on rays.
//!
//! The host renders with its own camera; this only reproduces the eye position
//! and projection so screen-space offsets map to the same world rays.

use skystrike_core::constants::{
    CAMERA_FOV_DEG, FOLLOW_CAMERA_OFFSET, ORBIT_CAMERA_DISTANCE, ORBIT_CAMERA_HEIGHT,
};
use skystrike_core::enums::CameraMode;
use skystrike_core::input::ControlIntent;
use skystrike_core::state::CameraView;
use skystrike_core::types::Vec3;

use crate::aircraft::Aircraft;
use crate::geometry::Ray;

#[derive(Debug, Clone, Default)]
pub struct Camera {
    mode: CameraMode,
    /// Orbit angle around the aircraft (radians). Reset on entering orbit.
    orbit_angle: f64,
    /// Toggle key state on the previous tick, for edge detection.
    toggle_held: bool,
}

impl Camera {
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Flip the camera mode on the rising edge of `toggle_view`.
    pub fn update(&mut self, intent: &ControlIntent) {
        if intent.toggle_view && !self.toggle_held {
            self.mode = self.mode.toggled();
            if self.mode == CameraMode::Orbit {
                self.orbit_angle = 0.0;
            }
        }
        self.toggle_held = intent.toggle_view;
    }

    pub fn viewpoint(&self, aircraft: &Aircraft, aspect: f64) -> Viewpoint {
        let target = aircraft.position;
        let eye = match self.mode {
            CameraMode::Follow => target + aircraft.orientation() * FOLLOW_CAMERA_OFFSET,
            CameraMode::Orbit => Vec3::new(
                target.x + self.orbit_angle.sin() * ORBIT_CAMERA_DISTANCE,
                target.y + ORBIT_CAMERA_HEIGHT,
                target.z + self.orbit_angle.cos() * ORBIT_CAMERA_DISTANCE,
            ),
        };
        Viewpoint {
            mode: self.mode,
            eye,
            look_at: target,
            fov_y: CAMERA_FOV_DEG.to_radians(),
            aspect,
        }
    }
}

/// A perspective camera looking from `eye` at `look_at` with world +Y up.
#[derive(Debug, Clone, Copy)]
pub struct Viewpoint {
    pub mode: CameraMode,
    pub eye: Vec3,
    pub look_at: Vec3,
    /// Vertical field of view (radians).
    pub fov_y: f64,
    pub aspect: f64,
}

impl Viewpoint {
    /// World ray through normalized device coordinates (x, y), each in [-1, 1].
    pub fn ray(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let forward = (self.look_at - self.eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        let half_height = (self.fov_y / 2.0).tan();
        let half_width = half_height * self.aspect;
        let direction = forward + right * (ndc_x * half_width) + up * (ndc_y * half_height);
        Ray::new(self.eye, direction)
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            mode: self.mode,
            eye: self.eye,
            look_at: self.look_at,
        }
    }
}
