//! Rigid-Body World Service
//!
//! A minimal handle-indexed store for the bodies the demo moves around.
//! The world owns every body; callers keep [`BodyHandle`] values, so there
//! is no destruction-order dance between bodies and the world and a stale
//! handle simply resolves to `None` instead of dangling.
//!
//! The integrator is a stand-in for an external rigid-body simulator: it
//! applies per-body gravity and advances positions, nothing more. Collision
//! response, contacts and constraints are out of scope for this crate.

use glam::{Quat, Vec3};

/// Squared distance from the origin beyond which bodies are despawned.
const DESPAWN_DISTANCE_SQR: f32 = 100.0 * 100.0;

/// Opaque generational handle to a body in a [`PhysicsWorld`].
///
/// Handles from removed bodies stay invalid even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

/// A single simulated body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    /// Center-of-mass position in world space.
    pub position: Vec3,
    /// Orientation in world space. Not used by the integrator; carried so
    /// hosts can sync a full pose.
    pub rotation: Quat,
    /// Linear velocity in m/s.
    pub velocity: Vec3,
    /// Per-body gravity in m/s^2, usually refreshed from the field each frame.
    pub gravity: Vec3,
    /// Mass in kg. Zero marks a static body the integrator leaves alone.
    pub mass: f32,
}

impl RigidBody {
    /// Create a dynamic body at rest.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            gravity: Vec3::ZERO,
            mass,
        }
    }

    /// Create a static (immovable) body.
    pub fn new_static(position: Vec3) -> Self {
        Self::new(position, 0.0)
    }

    /// Whether the integrator moves this body.
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }
}

/// Slot in the world's body arena.
#[derive(Debug, Clone)]
struct BodySlot {
    generation: u32,
    body: Option<RigidBody>,
}

/// Handle-indexed body store with a stand-in integrator.
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    slots: Vec<BodySlot>,
    free: Vec<u32>,
}

impl PhysicsWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.body.is_some()).count()
    }

    /// Whether the world holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a body and return its handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            BodyHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(BodySlot {
                generation: 0,
                body: Some(body),
            });
            BodyHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Remove a body. Returns it if the handle was live.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let body = slot.body.take()?;
        slot.generation += 1;
        self.free.push(handle.index);
        Some(body)
    }

    /// Resolve a handle to a body.
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_ref()
    }

    /// Resolve a handle to a mutable body.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_mut()
    }

    /// Iterate over live bodies with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body.as_ref().map(|body| {
                (
                    BodyHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    body,
                )
            })
        })
    }

    /// Advance all dynamic bodies by `dt` seconds (semi-implicit Euler).
    pub fn step(&mut self, dt: f32) {
        for slot in &mut self.slots {
            if let Some(body) = &mut slot.body {
                if body.is_dynamic() {
                    body.velocity += body.gravity * dt;
                    body.position += body.velocity * dt;
                }
            }
        }
    }

    /// Remove bodies that have drifted more than 100 m from the origin.
    ///
    /// Returns how many were removed. Run once per frame as housekeeping so
    /// escapees beyond the field's reach do not accumulate forever.
    pub fn despawn_distant(&mut self) -> usize {
        let mut removed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(body) = &slot.body {
                if body.position.length_squared() > DESPAWN_DISTANCE_SQR {
                    slot.body = None;
                    slot.generation += 1;
                    self.free.push(index as u32);
                    removed += 1;
                }
            }
        }
        removed
    }
}
