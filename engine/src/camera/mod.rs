//! Camera Module
//!
//! Provides the gravity-aligned orbit camera and the degree-space angle
//! helpers it is built on. Window-system agnostic - input arrives as axis
//! values, output is a world transform.

pub mod angles;
pub mod orbit;

pub use angles::{delta_angle, heading_angle, move_towards, move_towards_angle};
pub use orbit::{
    OrbitCamera, ALIGN_DELAY, ALIGN_SMOOTH_RANGE, DISTANCE, FOCUS_CENTERING, FOCUS_RADIUS,
    MAX_VERTICAL_ANGLE, MIN_VERTICAL_ANGLE, ROTATION_SPEED, UP_ALIGNMENT_SPEED,
};
