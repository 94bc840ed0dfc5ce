//! Gravity-Aligned Orbit Camera
//!
//! A third-person follow camera for worlds where "up" changes from frame to
//! frame. The camera keeps a smoothed focus point near its target, orbits it
//! with pitch/yaw angles expressed in a gravity-aligned reference frame, and
//! re-aligns that frame toward the current up-axis at a bounded angular rate
//! so flips across box edges never snap.
//!
//! When the player leaves the camera alone for a few seconds, the yaw slowly
//! realigns with the direction the focus point is moving, easing off near
//! head-on and tail-on headings to avoid oscillation.
//!
//! This module is window-system agnostic: input arrives as a 2D axis value,
//! output is a world transform for the host renderer.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::camera::angles::{delta_angle, heading_angle, move_towards_angle};
use crate::config::OrbitCameraConfig;

/// Distance from the focus point to the camera, in meters.
pub const DISTANCE: f32 = 5.0;

/// Radius the focus point may lag behind the target before being dragged.
pub const FOCUS_RADIUS: f32 = 1.0;

/// Per-second centering factor for focus smoothing (0 = never, 1 = instant).
pub const FOCUS_CENTERING: f32 = 0.75;

/// Manual and automatic orbit speed in degrees per second.
pub const ROTATION_SPEED: f32 = 90.0;

/// Lower pitch limit in degrees.
pub const MIN_VERTICAL_ANGLE: f32 = -45.0;

/// Upper pitch limit in degrees.
pub const MAX_VERTICAL_ANGLE: f32 = 60.0;

/// Seconds of input silence before automatic heading realignment kicks in.
pub const ALIGN_DELAY: f32 = 5.0;

/// Width in degrees of the taper window around 0 and 180 degree headings.
pub const ALIGN_SMOOTH_RANGE: f32 = 45.0;

/// Maximum rate of the gravity-alignment rotation in degrees per second.
pub const UP_ALIGNMENT_SPEED: f32 = 360.0;

/// Manual camera input below this magnitude per axis is treated as silence.
const INPUT_EPSILON: f32 = 0.01;

/// Focus-point movement (squared) below this is ignored for realignment.
const MOVEMENT_EPSILON_SQR: f32 = 0.0001;

static_assertions::const_assert!(MIN_VERTICAL_ANGLE < MAX_VERTICAL_ANGLE);

/// Orbit-follow camera state, stepped once per frame by [`OrbitCamera::focus`].
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    config: OrbitCameraConfig,

    /// Smoothed point the camera looks at.
    focus_point: Vec3,
    /// Focus point of the previous frame, for movement heading.
    previous_focus_point: Vec3,

    /// Orbit angles in degrees: `x` = pitch, `y` = yaw.
    orbit_angles: Vec2,

    /// Internal clock, accumulated from frame deltas.
    time: f32,
    /// Clock reading of the last frame with manual camera input.
    last_manual_rotation_time: f32,

    /// Rotation mapping world +Y to the current local up-axis.
    gravity_alignment: Quat,
    /// Rotation derived from `orbit_angles` (yaw about Y, then pitch about X).
    orbit_rotation: Quat,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::with_config(OrbitCameraConfig::default())
    }
}

impl OrbitCamera {
    /// Create an orbit camera with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orbit camera with custom tuning.
    pub fn with_config(config: OrbitCameraConfig) -> Self {
        let orbit_angles = Vec2::new(-45.0, 0.0);
        let mut camera = Self {
            // Arm automatic realignment from the first frame.
            last_manual_rotation_time: -config.align_delay,
            config,
            focus_point: Vec3::ZERO,
            previous_focus_point: Vec3::ZERO,
            orbit_angles,
            time: 0.0,
            gravity_alignment: Quat::IDENTITY,
            orbit_rotation: Quat::IDENTITY,
        };
        camera.constrain_angles();
        camera.update_orbit_rotation();
        camera
    }

    /// Smoothed focus point the camera is looking at.
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Current orbit angles in degrees: `x` = pitch, `y` = yaw.
    pub fn orbit_angles(&self) -> Vec2 {
        self.orbit_angles
    }

    /// Rotation mapping world +Y to the current local up-axis.
    pub fn gravity_alignment(&self) -> Quat {
        self.gravity_alignment
    }

    /// Combined camera rotation (gravity alignment then orbit).
    pub fn look_rotation(&self) -> Quat {
        self.gravity_alignment * self.orbit_rotation
    }

    /// World transform from the current state, without stepping the camera.
    ///
    /// This is what locomotion consumes as its input space; the same value is
    /// returned by [`OrbitCamera::focus`] after stepping.
    pub fn transform(&self) -> Mat4 {
        let look_rotation = self.look_rotation();
        let look_direction = look_rotation * Vec3::NEG_Z;
        let look_position = self.focus_point - look_direction * self.config.distance;
        Mat4::from_rotation_translation(look_rotation, look_position)
    }

    /// Step the camera one frame and return its world transform.
    ///
    /// `camera_input` is the manual orbit axis pair (`x` drives pitch, `y`
    /// drives yaw), `target_point` the followed body's position, `up_axis`
    /// the current local up from the gravity field. A `dt` of zero is a
    /// valid no-op frame.
    pub fn focus(&mut self, dt: f32, camera_input: Vec2, target_point: Vec3, up_axis: Vec3) -> Mat4 {
        self.time += dt;
        self.update_gravity_alignment(dt, up_axis);
        self.update_focus_point(dt, target_point);
        if self.manual_rotation(dt, camera_input) || self.automatic_rotation(dt) {
            self.constrain_angles();
            self.update_orbit_rotation();
        }
        self.transform()
    }

    /// Rotate the gravity-aligned frame toward `to_up`, bounded to
    /// `up_alignment_speed` degrees per second.
    fn update_gravity_alignment(&mut self, dt: f32, to_up: Vec3) {
        let from_up = (self.gravity_alignment * Vec3::Y).normalize();
        let angle = from_up.angle_between(to_up).to_degrees();
        let max_angle = self.config.up_alignment_speed * dt;

        let new_alignment =
            (Quat::from_rotation_arc(from_up, to_up) * self.gravity_alignment).normalize();
        if angle <= max_angle {
            self.gravity_alignment = new_alignment;
        } else {
            self.gravity_alignment = self
                .gravity_alignment
                .slerp(new_alignment, max_angle / angle);
        }
    }

    /// Exponentially center the focus point on the target, never letting it
    /// drift farther than `focus_radius`.
    fn update_focus_point(&mut self, dt: f32, target_point: Vec3) {
        self.previous_focus_point = self.focus_point;
        if self.config.focus_radius > 0.0 {
            let distance = target_point.distance(self.focus_point);
            let mut t = 1.0;
            if distance > 0.01 && self.config.focus_centering > 0.0 {
                t = (1.0 - self.config.focus_centering).powf(dt);
            }
            if distance > self.config.focus_radius {
                t = t.min(self.config.focus_radius / distance);
            }
            self.focus_point = target_point.lerp(self.focus_point, t);
        } else {
            self.focus_point = target_point;
        }
    }

    /// Apply manual orbit input. Returns whether the angles changed.
    fn manual_rotation(&mut self, dt: f32, camera_input: Vec2) -> bool {
        if camera_input.x < -INPUT_EPSILON
            || camera_input.x > INPUT_EPSILON
            || camera_input.y < -INPUT_EPSILON
            || camera_input.y > INPUT_EPSILON
        {
            self.orbit_angles += self.config.rotation_speed * dt * camera_input;
            self.last_manual_rotation_time = self.time;
            return true;
        }
        false
    }

    /// Turn the yaw toward the focus point's movement heading once manual
    /// input has been silent for `align_delay` seconds. Returns whether the
    /// angles changed.
    fn automatic_rotation(&mut self, dt: f32) -> bool {
        if self.time - self.last_manual_rotation_time < self.config.align_delay {
            return false;
        }

        let aligned_delta =
            self.gravity_alignment.inverse() * (self.focus_point - self.previous_focus_point);
        let movement = Vec2::new(aligned_delta.x, aligned_delta.z);
        let movement_delta_sqr = movement.length_squared();
        if movement_delta_sqr < MOVEMENT_EPSILON_SQR {
            return false;
        }

        let heading = heading_angle(movement / movement_delta_sqr.sqrt());
        let delta_abs = delta_angle(self.orbit_angles.y, heading).abs();
        // Tiny movements turn the camera slower than the frame time allows.
        let mut rotation_change = self.config.rotation_speed * dt.min(movement_delta_sqr);
        if delta_abs < self.config.align_smooth_range {
            rotation_change *= delta_abs / self.config.align_smooth_range;
        } else if 180.0 - delta_abs < self.config.align_smooth_range {
            // Moving straight at the camera: ease off instead of whipping
            // the yaw around through 180 degrees.
            rotation_change *= (180.0 - delta_abs) / self.config.align_smooth_range;
        }

        self.orbit_angles.y = move_towards_angle(self.orbit_angles.y, heading, rotation_change);
        true
    }

    /// Clamp pitch to the vertical limits and wrap yaw into `[0, 360)`.
    fn constrain_angles(&mut self) {
        self.orbit_angles.x = self
            .orbit_angles
            .x
            .clamp(self.config.min_vertical_angle, self.config.max_vertical_angle);

        if self.orbit_angles.y < 0.0 {
            self.orbit_angles.y += 360.0;
        } else if self.orbit_angles.y >= 360.0 {
            self.orbit_angles.y -= 360.0;
        }
    }

    /// Rebuild the orbit rotation from the angles: yaw about world +Y, then
    /// pitch about world +X.
    fn update_orbit_rotation(&mut self) {
        self.orbit_rotation = Quat::from_axis_angle(Vec3::Y, self.orbit_angles.y.to_radians())
            * Quat::from_axis_angle(Vec3::X, self.orbit_angles.x.to_radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn camera_sits_at_distance_behind_the_focus_point() {
        let mut camera = OrbitCamera::new();
        let transform = camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::Y);
        let position = transform.w_axis.truncate();
        assert!((position.distance(camera.focus_point()) - DISTANCE).abs() < EPSILON);
    }

    #[test]
    fn manual_input_accumulates_into_orbit_angles() {
        let mut camera = OrbitCamera::new();
        camera.focus(1.0, Vec2::new(0.0, 1.0), Vec3::ZERO, Vec3::Y);
        // One second of full yaw input at ROTATION_SPEED deg/s.
        assert!((camera.orbit_angles().y - ROTATION_SPEED).abs() < EPSILON);
    }

    #[test]
    fn pitch_is_clamped_to_the_vertical_limits() {
        let mut camera = OrbitCamera::new();
        for _ in 0..300 {
            camera.focus(DT, Vec2::new(1.0, 0.0), Vec3::ZERO, Vec3::Y);
        }
        assert!(camera.orbit_angles().x <= MAX_VERTICAL_ANGLE + EPSILON);

        for _ in 0..600 {
            camera.focus(DT, Vec2::new(-1.0, 0.0), Vec3::ZERO, Vec3::Y);
        }
        assert!(camera.orbit_angles().x >= MIN_VERTICAL_ANGLE - EPSILON);
    }

    #[test]
    fn yaw_wraps_into_the_zero_to_360_range() {
        let mut camera = OrbitCamera::new();
        for _ in 0..600 {
            camera.focus(DT, Vec2::new(0.0, 1.0), Vec3::ZERO, Vec3::Y);
            let yaw = camera.orbit_angles().y;
            assert!((0.0..360.0).contains(&yaw), "yaw out of range: {yaw}");
        }
    }

    #[test]
    fn zero_dt_frame_changes_nothing() {
        let mut camera = OrbitCamera::new();
        camera.focus(DT, Vec2::ZERO, Vec3::new(0.5, 0.0, 0.0), Vec3::Y);
        let angles = camera.orbit_angles();
        let focus = camera.focus_point();
        let alignment = camera.gravity_alignment();

        let transform = camera.focus(0.0, Vec2::new(1.0, 1.0), Vec3::new(0.5, 0.0, 0.0), Vec3::Y);
        assert_eq!(camera.orbit_angles(), angles);
        assert!((camera.focus_point() - focus).length() < EPSILON);
        assert!(camera.gravity_alignment().dot(alignment).abs() > 1.0 - EPSILON);
        assert!(transform.is_finite());
    }

    #[test]
    fn focus_point_never_lags_more_than_the_focus_radius() {
        let mut camera = OrbitCamera::new();
        let mut target = Vec3::ZERO;
        for _ in 0..120 {
            target.x += 0.2;
            camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
            assert!(camera.focus_point().distance(target) <= FOCUS_RADIUS + EPSILON);
        }
    }

    #[test]
    fn zero_focus_radius_snaps_to_the_target() {
        let mut camera = OrbitCamera::with_config(OrbitCameraConfig {
            focus_radius: 0.0,
            ..OrbitCameraConfig::default()
        });
        let target = Vec3::new(3.0, 1.0, -2.0);
        camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
        assert!((camera.focus_point() - target).length() < EPSILON);
    }

    #[test]
    fn gravity_alignment_rate_is_bounded() {
        let mut camera = OrbitCamera::new();
        camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::Y);
        // Ask for a 90 degree flip in one short frame; the alignment may only
        // turn UP_ALIGNMENT_SPEED * dt degrees.
        camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::X);
        let aligned_up = camera.gravity_alignment() * Vec3::Y;
        let remaining = aligned_up.angle_between(Vec3::X).to_degrees();
        let expected = 90.0 - UP_ALIGNMENT_SPEED * DT;
        assert!((remaining - expected).abs() < 0.5, "remaining {remaining}");
    }

    #[test]
    fn gravity_alignment_converges_to_the_new_up() {
        let mut camera = OrbitCamera::new();
        for _ in 0..120 {
            camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::X);
        }
        let aligned_up = camera.gravity_alignment() * Vec3::Y;
        assert!(aligned_up.angle_between(Vec3::X).to_degrees() < 0.1);
    }

    #[test]
    fn automatic_rotation_waits_for_the_align_delay() {
        let mut camera = OrbitCamera::with_config(OrbitCameraConfig {
            align_delay: 5.0,
            ..OrbitCameraConfig::default()
        });
        // Manual input resets the silence clock.
        camera.focus(DT, Vec2::new(0.0, 1.0), Vec3::ZERO, Vec3::Y);
        let yaw = camera.orbit_angles().y;

        // Under the delay: a moving target must not turn the yaw.
        let mut target = Vec3::ZERO;
        for _ in 0..60 {
            target.x += 0.1;
            camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
        }
        assert!((camera.orbit_angles().y - yaw).abs() < EPSILON);
    }

    #[test]
    fn yaw_converges_toward_the_movement_heading() {
        let mut camera = OrbitCamera::new();
        // Move along +x in the aligned frame: heading 90 degrees.
        let mut target = Vec3::ZERO;
        for _ in 0..1200 {
            target.x += 0.05;
            camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
            let pitch = camera.orbit_angles().x;
            assert!((MIN_VERTICAL_ANGLE..=MAX_VERTICAL_ANGLE).contains(&pitch));
        }
        let yaw = camera.orbit_angles().y;
        assert!(
            delta_angle(yaw, 90.0).abs() < 5.0,
            "yaw did not converge: {yaw}"
        );
    }
}
