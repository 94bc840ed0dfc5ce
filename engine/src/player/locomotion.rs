//! Sphere Locomotion
//!
//! Converts 2D player input into velocity adjustments for the rolling
//! sphere, relative to the camera and to the local up-axis supplied by the
//! gravity field. The controller itself is stateless: it reads a velocity,
//! computes a bounded adjustment, and writes the velocity back, leaving
//! integration and contacts to the rigid-body world.

use glam::{Mat4, Vec2, Vec3};

use crate::config::LocomotionConfig;

/// Target ground speed in m/s.
pub const MAX_SPEED: f32 = 5.0;

/// Ground acceleration cap in m/s^2.
pub const MAX_ACCELERATION: f32 = 10.0;

/// Airborne acceleration cap in m/s^2. Carried for tuning; the controller
/// currently has no ground-contact signal, so it is unused.
pub const MAX_AIR_ACCELERATION: f32 = 0.0;

/// Jump height parameter in meters.
pub const JUMP_HEIGHT: f32 = 2.0;

/// Camera-relative velocity controller for the player sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereLocomotion {
    config: LocomotionConfig,
}

impl Default for SphereLocomotion {
    fn default() -> Self {
        Self::with_config(LocomotionConfig::default())
    }
}

impl SphereLocomotion {
    /// Create a controller with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom tuning.
    pub fn with_config(config: LocomotionConfig) -> Self {
        Self { config }
    }

    /// Current tuning parameters.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Steer `velocity` toward the input direction at up to `max_speed`,
    /// changing it by at most `max_acceleration * dt`.
    ///
    /// `input_space` is the camera's world transform; its right and backward
    /// columns are flattened onto the plane perpendicular to `up_axis` so
    /// "forward" always means "along the ground", whatever the ground
    /// currently is. The projected axes keep their shortened length when the
    /// camera looks steeply up or down, so steering deliberately softens at
    /// steep pitch. `player_input` is `(strafe, forward-backward)`, with
    /// positive `y` meaning backward, and is expected pre-clamped to the
    /// unit square.
    pub fn adjust_velocity(
        &self,
        dt: f32,
        input_space: &Mat4,
        player_input: Vec2,
        up_axis: Vec3,
        velocity: &mut Vec3,
    ) {
        let x_axis = input_space.x_axis.truncate().reject_from_normalized(up_axis);
        let z_axis = input_space.z_axis.truncate().reject_from_normalized(up_axis);

        let adjustment = Vec2::new(
            player_input.x * self.config.max_speed - velocity.dot(x_axis),
            player_input.y * self.config.max_speed - velocity.dot(z_axis),
        )
        .clamp_length_max(self.config.max_acceleration * dt);

        *velocity += x_axis * adjustment.x + z_axis * adjustment.y;
    }

    /// Add a jump impulse along the up-axis to `velocity`.
    ///
    /// The jump speed is `sqrt(2 * |gravity|^2 * jump_height)` - the squared
    /// gravity magnitude is deliberate, it is the tuning every jump arc in
    /// the demo was balanced around (a physically derived speed would use the
    /// linear magnitude; see the pinned test). Any velocity already aligned
    /// with the jump direction is
    /// credited against the impulse so repeated jumps cannot stack energy.
    pub fn jump(&self, gravity: Vec3, up_axis: Vec3, velocity: &mut Vec3) {
        let jump_direction = up_axis;

        let mut jump_speed =
            (2.0 * gravity.length_squared() * self.config.jump_height).sqrt();

        // Contact-normal biasing slot; with no contact normal available this
        // collapses back to the up-axis.
        let jump_direction = (jump_direction + up_axis).normalize();

        let aligned_speed = velocity.dot(jump_direction);
        if aligned_speed > 0.0 {
            jump_speed = (jump_speed - aligned_speed).max(0.0);
        }
        *velocity += jump_direction * jump_speed;
    }
}
