//! Rolling-Sphere Demo (headless)
//!
//! Run with: `cargo run --bin rolling-demo [tune.json]`
//!
//! Drives the full frame loop without a window: a player sphere and a few
//! loose boxes live inside the gravity box, the sphere is pushed around by
//! scripted input, and the orbit camera follows it as "down" flips across
//! the field's faces and edges. State lines are printed once per simulated
//! second so the trajectory can be eyeballed or piped into a plot.
//!
//! Script:
//! - 0-3 s: full forward input, camera untouched
//! - 2.0-2.5 s: manual camera yaw drag
//! - 5 s: a single jump
//! - afterwards: hands off, letting the camera auto-realign

use std::env;
use std::process;

use glam::{Vec2, Vec3};

use gravity_box_engine::camera::OrbitCamera;
use gravity_box_engine::config::DemoConfig;
use gravity_box_engine::physics::{GravityBox, PhysicsWorld, RigidBody};
use gravity_box_engine::player::SphereLocomotion;

/// Fixed simulation step (60 Hz).
const DT: f32 = 1.0 / 60.0;

/// How long the demo runs, in simulated seconds.
const DURATION: f32 = 20.0;

fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match DemoConfig::load_json(&path) {
            Ok(config) => {
                println!("[RollingDemo] Loaded tune from {path}");
                config
            }
            Err(e) => {
                eprintln!("[RollingDemo] Failed to load {path}: {e}");
                process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    let field = GravityBox::from_config(&config.gravity_box);
    let locomotion = SphereLocomotion::with_config(config.locomotion);
    let mut camera = OrbitCamera::with_config(config.camera);
    let mut world = PhysicsWorld::new();

    // Static ground box at the center of the field.
    world.add_body(RigidBody::new_static(Vec3::ZERO));

    // Loose boxes raining onto the ground with plain downward gravity.
    for i in 0..2 {
        for k in 0..2 {
            let mut body = RigidBody::new(
                Vec3::new(i as f32 - 2.0, 4.0 + (i * 2 + k) as f32, k as f32 - 2.0),
                1.0,
            );
            body.gravity = Vec3::new(0.0, -10.0, 0.0);
            world.add_body(body);
        }
    }

    // The player sphere, starting on the top face.
    let sphere = world.add_body(RigidBody::new(Vec3::new(0.0, 4.0, 0.0), 5.0));

    let mut up_axis = Vec3::Y;
    let mut jumped = false;
    let frames = (DURATION / DT) as u32;

    println!("[RollingDemo] Simulating {DURATION} s at {} Hz", (1.0 / DT) as u32);

    for frame in 0..frames {
        let time = frame as f32 * DT;

        let player_input = if time < 3.0 {
            Vec2::new(0.0, -1.0)
        } else {
            Vec2::ZERO
        };
        let camera_input = if (2.0..2.5).contains(&time) {
            Vec2::new(0.0, 0.5)
        } else {
            Vec2::ZERO
        };

        world.step(DT);
        world.despawn_distant();

        let position = world
            .body(sphere)
            .expect("player sphere despawned - field too weak to hold it")
            .position;

        let (gravity, new_up) = field.gravity_with_up(position, up_axis);
        up_axis = new_up;

        let camera_transform = camera.transform();
        {
            let body = world.body_mut(sphere).expect("sphere handle just resolved");
            body.gravity = gravity;
            locomotion.adjust_velocity(
                DT,
                &camera_transform,
                player_input,
                up_axis,
                &mut body.velocity,
            );
            if time >= 5.0 && !jumped {
                jumped = true;
                locomotion.jump(gravity, up_axis, &mut body.velocity);
            }
        }

        camera.focus(DT, camera_input, position, up_axis);

        if frame % 60 == 0 {
            let body = world.body(sphere).expect("sphere handle just resolved");
            let angles = camera.orbit_angles();
            println!(
                "[RollingDemo] t={time:5.1}s pos=({:6.2}, {:6.2}, {:6.2}) |v|={:5.2} up=({:5.2}, {:5.2}, {:5.2}) pitch={:6.1} yaw={:6.1} bodies={}",
                body.position.x,
                body.position.y,
                body.position.z,
                body.velocity.length(),
                up_axis.x,
                up_axis.y,
                up_axis.z,
                angles.x,
                angles.y,
                world.len(),
            );
        }
    }

    println!("[RollingDemo] Done");
}
