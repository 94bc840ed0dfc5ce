//! Player Module
//!
//! Camera-relative locomotion for the player sphere.
//!
//! # Components
//!
//! - [`SphereLocomotion`] - Velocity adjustment toward the input direction
//!   in the gravity field's ground plane, plus the jump impulse

pub mod locomotion;

pub use locomotion::{
    SphereLocomotion, JUMP_HEIGHT, MAX_ACCELERATION, MAX_AIR_ACCELERATION, MAX_SPEED,
};
