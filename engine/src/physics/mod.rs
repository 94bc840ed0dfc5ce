//! Physics module for the rolling-sphere playground
//!
//! Provides the box-shaped gravity field and a small handle-indexed body
//! world. The field is the interesting part: it is a pure function of
//! position, parameterized once at startup. The world is a deliberately
//! thin stand-in for an external rigid-body simulator so the rest of the
//! crate can be exercised headless.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg
//!
//! # Submodules
//!
//! - [`gravity_box`] - Position -> gravity vector / up-axis field generator
//! - [`world`] - Handle-indexed rigid-body store with a stand-in integrator

pub mod gravity_box;
pub mod world;

// Re-export commonly used types at the physics module level
pub use gravity_box::GravityBox;
pub use world::{BodyHandle, PhysicsWorld, RigidBody};
