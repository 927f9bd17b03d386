//! Forces acting on the body.
//!
//! Only gravity is modeled. It is a constant downward acceleration, not a
//! mass-scaled force, so `PhysicsObject::mass` has no effect here.
//!
//! ## Terminal Velocity
//!
//! Constant gravity would accelerate a falling body without bound. Vertical
//! velocity is clamped from below at `-max_fall_speed`:
//!
//! ```text
//!   vy
//!    ↑
//!  0 ┼──╮
//!    │   ╲
//!    │    ╲
//! -50┼─────╲━━━━━━━━━━━━  clamp
//!    └──────────────────→ t
//! ```
//!
//! Upward velocity is never capped.

use crate::presets::WorldConfig;
use crate::types::{constants, PhysicsObject};

/// Anything that changes a body's velocity over a timestep.
pub trait ForceModel {
    /// Update the body's acceleration and velocity for `dt` seconds.
    fn apply(&self, object: &mut PhysicsObject, dt: f32);
}

/// Constant vertical gravity with a terminal fall speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Magnitude of the downward acceleration (m/s²)
    pub acceleration: f32,
    /// Vertical velocity never drops below `-max_fall_speed`
    pub max_fall_speed: f32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            acceleration: constants::GRAVITY,
            max_fall_speed: constants::MAX_FALL_SPEED,
        }
    }
}

impl Gravity {
    pub fn from_world(world: &WorldConfig) -> Self {
        Self {
            acceleration: world.gravity,
            max_fall_speed: world.max_fall_speed,
        }
    }
}

impl ForceModel for Gravity {
    /// Sets `acceleration.y` and integrates vertical velocity only.
    ///
    /// X/Z acceleration is left as the caller set it and is not integrated.
    /// Non-positive `dt` is not special-cased.
    fn apply(&self, object: &mut PhysicsObject, dt: f32) {
        object.acceleration.y = -self.acceleration;

        // v = v0 + a * t
        object.velocity.y += object.acceleration.y * dt;

        if object.velocity.y < -self.max_fall_speed {
            object.velocity.y = -self.max_fall_speed;
        }
    }
}

/// Apply default gravity (9.81 m/s², terminal speed 50 m/s) to `object`.
pub fn apply_gravity(object: &mut PhysicsObject, dt: f32) {
    Gravity::default().apply(object, dt);
}

// =============================================================================
// Tests
// =============================================================================
