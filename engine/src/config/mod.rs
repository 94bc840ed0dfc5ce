//! Tuning Configuration
//!
//! Flat, named parameters for the gravity field, the orbit camera and the
//! sphere locomotion, gathered so a host can load a whole scene tune from a
//! JSON file. `Default` returns the values the demo ships with.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::orbit;
use crate::player::locomotion;

/// Tuning for the box-shaped gravity field.
///
/// Values are normalized at construction time by
/// [`GravityBox::new`](crate::physics::GravityBox::new); the config carries
/// them as written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityBoxConfig {
    /// Field strength in m/s^2 at full pull.
    pub gravity: f32,
    /// Half-extent of the box along each axis.
    pub boundary_distance: Vec3,
    /// Inward distance from a face within which the pull is full strength.
    pub inner_distance: f32,
    /// Inward distance from a face beyond which the pull is zero.
    pub inner_falloff_distance: f32,
    /// Outward distance within which the pull is unattenuated.
    pub outer_distance: f32,
    /// Outward distance beyond which the pull is zero.
    pub outer_falloff_distance: f32,
}

impl Default for GravityBoxConfig {
    fn default() -> Self {
        Self {
            gravity: 19.62,
            boundary_distance: Vec3::splat(4.0),
            inner_distance: 0.0,
            inner_falloff_distance: 0.0,
            outer_distance: 8.0,
            outer_falloff_distance: 12.0,
        }
    }
}

/// Tuning for the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCameraConfig {
    /// Distance from the focus point to the camera, in meters.
    pub distance: f32,
    /// Radius the focus point may lag behind the target (0 = snap).
    pub focus_radius: f32,
    /// Per-second centering factor for focus smoothing (0 = never, 1 = instant).
    pub focus_centering: f32,
    /// Manual and automatic orbit speed in degrees per second.
    pub rotation_speed: f32,
    /// Lower pitch limit in degrees.
    pub min_vertical_angle: f32,
    /// Upper pitch limit in degrees.
    pub max_vertical_angle: f32,
    /// Seconds of input silence before automatic realignment kicks in.
    pub align_delay: f32,
    /// Taper window in degrees around head-on and tail-on headings.
    pub align_smooth_range: f32,
    /// Maximum gravity-alignment rate in degrees per second.
    pub up_alignment_speed: f32,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            distance: orbit::DISTANCE,
            focus_radius: orbit::FOCUS_RADIUS,
            focus_centering: orbit::FOCUS_CENTERING,
            rotation_speed: orbit::ROTATION_SPEED,
            min_vertical_angle: orbit::MIN_VERTICAL_ANGLE,
            max_vertical_angle: orbit::MAX_VERTICAL_ANGLE,
            align_delay: orbit::ALIGN_DELAY,
            align_smooth_range: orbit::ALIGN_SMOOTH_RANGE,
            up_alignment_speed: orbit::UP_ALIGNMENT_SPEED,
        }
    }
}

/// Tuning for the sphere locomotion controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Target ground speed in m/s.
    pub max_speed: f32,
    /// Ground acceleration cap in m/s^2.
    pub max_acceleration: f32,
    /// Airborne acceleration cap in m/s^2 (currently unused).
    pub max_air_acceleration: f32,
    /// Jump height parameter in meters.
    pub jump_height: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            max_speed: locomotion::MAX_SPEED,
            max_acceleration: locomotion::MAX_ACCELERATION,
            max_air_acceleration: locomotion::MAX_AIR_ACCELERATION,
            jump_height: locomotion::JUMP_HEIGHT,
        }
    }
}

/// Whole-scene tune: field, camera and locomotion together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub gravity_box: GravityBoxConfig,
    pub camera: OrbitCameraConfig,
    pub locomotion: LocomotionConfig,
}

impl DemoConfig {
    /// Load a tune from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(io::Error::other)
    }

    /// Save the tune as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, text)
    }
}
