//! Camera Tests - Orbit Following and Gravity Alignment
//!
//! Integration tests for the orbit camera driven the way a host loop drives
//! it: one `focus()` call per frame with a moving target and a changing
//! up-axis.

use glam::{Mat4, Quat, Vec2, Vec3};
use gravity_box_engine::camera::{
    delta_angle, OrbitCamera, ALIGN_DELAY, DISTANCE, MAX_VERTICAL_ANGLE, MIN_VERTICAL_ANGLE,
};
use gravity_box_engine::config::OrbitCameraConfig;

const EPSILON: f32 = 1e-4;

const DT: f32 = 1.0 / 60.0;

fn camera_position(transform: &Mat4) -> Vec3 {
    transform.w_axis.truncate()
}

// ============================================================================
// Orbit Following
// ============================================================================

#[test]
fn test_camera_tracks_a_moving_target_at_fixed_distance() {
    let mut camera = OrbitCamera::new();
    let mut target = Vec3::ZERO;
    for frame in 0..300 {
        target = Vec3::new(frame as f32 * 0.05, 4.0, 0.0);
        let transform = camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
        let position = camera_position(&transform);
        assert!(
            (position.distance(camera.focus_point()) - DISTANCE).abs() < EPSILON,
            "camera left its orbit radius at frame {frame}"
        );
        // The focus point trails the target by at most the focus radius.
        assert!(camera.focus_point().distance(target) <= 1.0 + EPSILON);
    }
}

#[test]
fn test_camera_looks_at_the_focus_point() {
    let mut camera = OrbitCamera::new();
    let transform = camera.focus(DT, Vec2::ZERO, Vec3::new(2.0, 4.0, -1.0), Vec3::Y);

    let position = camera_position(&transform);
    let forward = camera.look_rotation() * Vec3::NEG_Z;
    let to_focus = (camera.focus_point() - position).normalize();
    assert!((forward - to_focus).length() < EPSILON);
}

#[test]
fn test_manual_rotation_overrides_automatic_alignment() {
    let mut camera = OrbitCamera::new();
    // Moving target, automatic alignment armed from the start.
    let mut target = Vec3::ZERO;
    for _ in 0..60 {
        target.x += 0.05;
        camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
    }
    let auto_yaw = camera.orbit_angles().y;
    assert!(auto_yaw > 0.0, "automatic alignment never engaged");

    // Manual input both turns the camera and silences auto-alignment.
    camera.focus(DT, Vec2::new(0.0, -1.0), target, Vec3::Y);
    let manual_yaw = camera.orbit_angles().y;
    for _ in 0..60 {
        target.x += 0.05;
        camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
    }
    assert!(
        (camera.orbit_angles().y - manual_yaw).abs() < EPSILON,
        "auto-alignment resumed before the delay expired"
    );
}

#[test]
fn test_automatic_alignment_resumes_after_the_delay() {
    let mut camera = OrbitCamera::new();
    let mut target = Vec3::ZERO;
    // Manual touch at t = 0.
    camera.focus(DT, Vec2::new(0.0, 0.5), target, Vec3::Y);
    let silenced_yaw = camera.orbit_angles().y;

    // Sit out the delay with a target moving along +x (heading 90).
    let silent_frames = (ALIGN_DELAY / DT) as u32 + 120;
    for _ in 0..silent_frames {
        target.x += 0.05;
        camera.focus(DT, Vec2::ZERO, target, Vec3::Y);
    }
    let yaw = camera.orbit_angles().y;
    assert!(
        delta_angle(yaw, 90.0).abs() < delta_angle(silenced_yaw, 90.0).abs(),
        "yaw {yaw} did not move toward the heading after the delay"
    );
}

#[test]
fn test_pitch_stays_inside_limits_under_mixed_input() {
    let mut camera = OrbitCamera::new();
    let mut target = Vec3::ZERO;
    for frame in 0..600 {
        let input = if frame % 2 == 0 {
            Vec2::new(1.0, 0.3)
        } else {
            Vec2::new(-0.4, -0.8)
        };
        target.z += 0.02;
        camera.focus(DT, input, target, Vec3::Y);
        let pitch = camera.orbit_angles().x;
        assert!((MIN_VERTICAL_ANGLE..=MAX_VERTICAL_ANGLE).contains(&pitch));
    }
}

// ============================================================================
// Gravity Alignment
// ============================================================================

#[test]
fn test_alignment_follows_a_slowly_rolling_up_axis() {
    let mut camera = OrbitCamera::new();
    // Up-axis sweeps 90 degrees over two seconds; the camera (at 360 deg/s
    // headroom) should track it closely the whole way.
    for frame in 0..120 {
        let angle = (frame as f32 / 120.0) * 90.0f32.to_radians();
        let up = Quat::from_rotation_z(-angle) * Vec3::Y;
        camera.focus(DT, Vec2::ZERO, Vec3::ZERO, up);

        let aligned_up = camera.gravity_alignment() * Vec3::Y;
        assert!(
            aligned_up.angle_between(up).to_degrees() < 2.0,
            "alignment lagged at frame {frame}"
        );
    }
}

#[test]
fn test_alignment_survives_a_hard_180_flip() {
    let mut camera = OrbitCamera::new();
    camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::Y);
    // Antipodal up: the worst case for arc construction.
    for _ in 0..120 {
        let transform = camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::NEG_Y);
        assert!(transform.is_finite());
    }
    let aligned_up = camera.gravity_alignment() * Vec3::Y;
    assert!(aligned_up.angle_between(Vec3::NEG_Y).to_degrees() < 1.0);
}

// ============================================================================
// Custom Tunes
// ============================================================================

#[test]
fn test_custom_distance_and_limits_are_respected() {
    let mut camera = OrbitCamera::with_config(OrbitCameraConfig {
        distance: 12.0,
        min_vertical_angle: -10.0,
        max_vertical_angle: 10.0,
        ..OrbitCameraConfig::default()
    });
    let transform = camera.focus(DT, Vec2::ZERO, Vec3::ZERO, Vec3::Y);
    let position = camera_position(&transform);
    assert!((position.distance(camera.focus_point()) - 12.0).abs() < EPSILON);
    // The initial -45 pitch is clamped into the narrow band on first step.
    assert!(camera.orbit_angles().x >= -10.0 - EPSILON);

    for _ in 0..120 {
        camera.focus(DT, Vec2::new(1.0, 0.0), Vec3::ZERO, Vec3::Y);
    }
    assert!(camera.orbit_angles().x <= 10.0 + EPSILON);
}
