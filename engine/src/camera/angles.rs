//! Degree-Space Angle Helpers
//!
//! Small utilities for working with orbit angles in degrees, where yaw wraps
//! around at 360. Used by the orbit camera's automatic heading realignment.

use glam::Vec2;

/// Shortest signed difference from `current` to `target`, in degrees.
///
/// The result is in `(-180, 180]`; positive means `target` is reached by
/// increasing `current`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Move `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + (target - current).signum() * max_delta
}

/// Move `current` toward `target` by at most `max_delta`, taking the short
/// way around the 360-degree wrap.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if -max_delta < delta && delta < max_delta {
        return target;
    }
    move_towards(current, current + delta, max_delta)
}

/// Heading angle of a unit direction in the horizontal plane, in degrees.
///
/// `direction` is `(x, z)` in the gravity-aligned frame with `+z` forward at
/// 0 degrees; the result is in `[0, 360)`, increasing clockwise when viewed
/// from above.
pub fn heading_angle(direction: Vec2) -> f32 {
    let angle = direction.y.clamp(-1.0, 1.0).acos().to_degrees();
    if direction.x < 0.0 { 360.0 - angle } else { angle }
}
