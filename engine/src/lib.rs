//! Gravity Box Engine Library
//!
//! A window-system-agnostic engine core for the rolling-sphere playground:
//! a player-controlled sphere rolls inside a box-shaped gravity field that
//! redefines the local "down" depending on which face, edge or corner region
//! of the box the sphere occupies, while an orbit camera follows it.
//!
//! Rendering, windowing and input devices are deliberately absent - the
//! crate only computes gravity vectors, target velocities and camera
//! transforms; a host loop owns everything else.
//!
//! # Modules
//!
//! - [`physics`] - Box-shaped gravity field and a handle-indexed rigid-body world
//! - [`player`] - Camera-relative sphere locomotion (velocity adjustment, jump)
//! - [`camera`] - Gravity-aligned orbit camera and angle helpers
//! - [`config`] - Flat tuning parameters with JSON load/save
//!
//! # Frame loop
//!
//! ```ignore
//! use gravity_box_engine::camera::OrbitCamera;
//! use gravity_box_engine::physics::{GravityBox, PhysicsWorld};
//! use gravity_box_engine::player::SphereLocomotion;
//! use glam::{Vec2, Vec3};
//!
//! let field = GravityBox::new(19.62, Vec3::splat(4.0), 0.0, 0.0, 8.0, 12.0);
//! let mut camera = OrbitCamera::new();
//! let locomotion = SphereLocomotion::new();
//!
//! // Each frame:
//! world.step(dt);
//! let position = world.body(sphere).unwrap().position;
//! let (gravity, up_axis) = field.gravity_with_up(position, previous_up);
//! let body = world.body_mut(sphere).unwrap();
//! body.gravity = gravity;
//! locomotion.adjust_velocity(dt, &camera.transform(), input, up_axis, &mut body.velocity);
//! let view = camera.focus(dt, camera_input, position, up_axis);
//! ```

pub mod camera;
pub mod config;
pub mod physics;
pub mod player;
