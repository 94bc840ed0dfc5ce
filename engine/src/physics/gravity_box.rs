//! Box-Shaped Gravity Field
//!
//! A static field generator that pulls bodies toward the nearest face of an
//! axis-aligned box centered on the origin. Inside the box, gravity points at
//! the closest face and fades out between an inner radius and an inner falloff
//! radius. Outside the box, gravity points back at the nearest face, edge or
//! corner and fades out between an outer radius and an outer falloff radius.
//!
//! The field is pure configuration: construct once, query per frame. It does
//! not integrate motion or resolve contacts - see [`crate::physics::world`]
//! for the body store that consumes its output.
//!
//! # Distance conventions
//!
//! - `boundary_distance` is the half-extent of the box along each axis.
//! - Inner radii are measured inward from a face; outer radii are measured
//!   outward from the box surface.
//! - All radii are reordered at construction so that
//!   `inner <= inner_falloff <= min(boundary)` and `outer <= outer_falloff`.

use glam::Vec3;

use crate::config::GravityBoxConfig;

/// Box-shaped gravity field generator.
///
/// Constructed once with [`GravityBox::new`]; all fields are immutable
/// afterwards. Queried with [`GravityBox::gravity`] or
/// [`GravityBox::gravity_with_up`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityBox {
    /// Field strength in m/s^2 at full pull.
    gravity: f32,

    /// Half-extent of the box along each axis, clamped to >= 0.
    boundary_distance: Vec3,

    /// Inward distance from a face within which the pull is at full strength.
    inner_distance: f32,
    /// Inward distance from a face beyond which the pull is zero.
    inner_falloff_distance: f32,

    /// Outward distance from the surface within which the pull is unattenuated.
    outer_distance: f32,
    /// Outward distance from the surface beyond which the pull is zero.
    outer_falloff_distance: f32,

    /// Cached `1 / (inner_falloff_distance - inner_distance)`.
    inner_falloff_factor: f32,
    /// Cached `1 / (outer_falloff_distance - outer_distance)`.
    outer_falloff_factor: f32,
}

impl GravityBox {
    /// Create a gravity box, normalizing the configuration.
    ///
    /// The half-extents are clamped per component to be non-negative, the
    /// inner radii are clamped against the smallest half-extent, and each
    /// falloff radius is raised to at least its base radius. When a falloff
    /// radius equals its base radius the field cuts off as a step at that
    /// radius instead of fading.
    pub fn new(
        gravity: f32,
        boundary_distance: Vec3,
        inner_distance: f32,
        inner_falloff_distance: f32,
        outer_distance: f32,
        outer_falloff_distance: f32,
    ) -> Self {
        let boundary_distance = boundary_distance.max(Vec3::ZERO);
        let max_inner = boundary_distance
            .x
            .min(boundary_distance.y)
            .min(boundary_distance.z);
        let inner_distance = inner_distance.min(max_inner);
        let inner_falloff_distance = inner_falloff_distance.min(max_inner).max(inner_distance);
        let outer_falloff_distance = outer_falloff_distance.max(outer_distance);

        // A zero-width falloff band never attenuates: the only reachable
        // distances are at or below the base radius (full pull) or past the
        // falloff radius (zero), so the factor is never read. Store 0.0
        // rather than letting the division produce an infinity.
        let inner_falloff_factor = if inner_falloff_distance > inner_distance {
            1.0 / (inner_falloff_distance - inner_distance)
        } else {
            0.0
        };
        let outer_falloff_factor = if outer_falloff_distance > outer_distance {
            1.0 / (outer_falloff_distance - outer_distance)
        } else {
            0.0
        };

        Self {
            gravity,
            boundary_distance,
            inner_distance,
            inner_falloff_distance,
            outer_distance,
            outer_falloff_distance,
            inner_falloff_factor,
            outer_falloff_factor,
        }
    }

    /// Create a gravity box from a tuning config.
    pub fn from_config(config: &GravityBoxConfig) -> Self {
        Self::new(
            config.gravity,
            config.boundary_distance,
            config.inner_distance,
            config.inner_falloff_distance,
            config.outer_distance,
            config.outer_falloff_distance,
        )
    }

    /// Field strength at full pull.
    pub fn gravity_magnitude(&self) -> f32 {
        self.gravity
    }

    /// Half-extent of the box along each axis (after clamping).
    pub fn boundary_distance(&self) -> Vec3 {
        self.boundary_distance
    }

    /// Inner radius pair `(full-strength, cutoff)` after reordering.
    pub fn inner_radii(&self) -> (f32, f32) {
        (self.inner_distance, self.inner_falloff_distance)
    }

    /// Outer radius pair `(full-strength, cutoff)` after reordering.
    pub fn outer_radii(&self) -> (f32, f32) {
        (self.outer_distance, self.outer_falloff_distance)
    }

    /// Gravity vector at a world-space position.
    ///
    /// Outside the box the pull points back toward the nearest face, edge or
    /// corner; inside, toward the single nearest face. Returns `Vec3::ZERO`
    /// anywhere the field has fully faded out.
    pub fn gravity(&self, position: Vec3) -> Vec3 {
        let mut vector = Vec3::ZERO;

        // Per-axis excess beyond the box; counts how many axes are exceeded
        // so faces (1), edges (2) and corners (3) can be told apart.
        let mut outside = 0;
        if position.x > self.boundary_distance.x {
            vector.x = self.boundary_distance.x - position.x;
            outside = 1;
        } else if position.x < -self.boundary_distance.x {
            vector.x = -self.boundary_distance.x - position.x;
            outside = 1;
        }

        if position.y > self.boundary_distance.y {
            vector.y = self.boundary_distance.y - position.y;
            outside += 1;
        } else if position.y < -self.boundary_distance.y {
            vector.y = -self.boundary_distance.y - position.y;
            outside += 1;
        }

        if position.z > self.boundary_distance.z {
            vector.z = self.boundary_distance.z - position.z;
            outside += 1;
        } else if position.z < -self.boundary_distance.z {
            vector.z = -self.boundary_distance.z - position.z;
            outside += 1;
        }

        if outside > 0 {
            // One exceeded axis means the excess vector has a single non-zero
            // component, so its absolute sum is the face distance; near edges
            // and corners the Euclidean length captures the diagonal.
            let distance = if outside == 1 {
                (vector.x + vector.y + vector.z).abs()
            } else {
                vector.length()
            };
            if distance > self.outer_falloff_distance {
                return Vec3::ZERO;
            }
            let mut g = self.gravity / distance;
            if distance > self.outer_distance {
                g *= 1.0 - (distance - self.outer_distance) * self.outer_falloff_factor;
            }
            return g * vector;
        }

        // Inside: pull toward the single nearest face. The comparison chain
        // is the tie-break order; keep it exactly as written.
        let distances = self.boundary_distance - position.abs();
        if distances.x < distances.y {
            if distances.x < distances.z {
                vector.x = self.gravity_component(position.x, distances.x);
            } else {
                vector.z = self.gravity_component(position.z, distances.z);
            }
        } else if distances.y < distances.z {
            vector.y = self.gravity_component(position.y, distances.y);
        } else {
            vector.z = self.gravity_component(position.z, distances.z);
        }

        vector
    }

    /// Gravity vector plus the local up-axis at a world-space position.
    ///
    /// The up-axis is the negated, normalized gravity vector. Where gravity
    /// is exactly zero the up-axis is undefined, so `fallback_up` (normally
    /// the previous frame's up-axis) is returned unchanged.
    pub fn gravity_with_up(&self, position: Vec3, fallback_up: Vec3) -> (Vec3, Vec3) {
        let gravity = self.gravity(position);
        let up_axis = if gravity == Vec3::ZERO {
            fallback_up
        } else {
            -gravity.normalize()
        };
        (gravity, up_axis)
    }

    /// Signed pull along one axis for a point inside the box.
    ///
    /// `distance` is the distance to the nearest face on that axis; the sign
    /// of the result points toward the box center.
    fn gravity_component(&self, coordinate: f32, distance: f32) -> f32 {
        if distance > self.inner_falloff_distance {
            return 0.0;
        }
        let mut g = self.gravity;
        if distance > self.inner_distance {
            g *= 1.0 - (distance - self.inner_distance) * self.inner_falloff_factor;
        }
        if coordinate > 0.0 { -g } else { g }
    }
}
