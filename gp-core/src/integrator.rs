//! Numerical integration for advancing the body in time.
//!
//! The stepper uses semi-implicit Euler: forces update velocity first, then
//! the updated velocity moves the body.
//!
//! ```text
//! 1. v_new = force_model(v, dt)
//! 2. x_new = x + v_new*dt
//! ```
//!
//! A body at rest at y=2 with dt=1 therefore lands at y = 2 - 9.81, not
//! y = 2 - 0.5*9.81 as the exact parabola would give.

use crate::forces::ForceModel;
use crate::types::PhysicsObject;

/// Semi-implicit Euler integrator.
pub struct Euler;

impl Euler {
    /// Move the body by its current velocity: `position += velocity * dt`.
    pub fn advance_position(object: &mut PhysicsObject, dt: f32) {
        object.position.x += object.velocity.x * dt;
        object.position.y += object.velocity.y * dt;
        object.position.z += object.velocity.z * dt;
    }

    /// Apply forces, then advance position with the new velocity.
    pub fn step<F: ForceModel>(object: &mut PhysicsObject, forces: &F, dt: f32) {
        forces.apply(object, dt);
        Self::advance_position(object, dt);
    }
}

// =============================================================================
// Tests
// =============================================================================
