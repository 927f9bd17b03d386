//! Core types for the ground physics stepper.
//!
//! All units are SI and all scalars are `f32`, matching the host boundary:
//! - Position: meters (m)
//! - Velocity: meters per second (m/s)
//! - Acceleration: meters per second squared (m/s²)
//! - Mass: kilograms (kg)

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities and accelerations.
///
/// Coordinate system:
/// - X: horizontal
/// - Y: vertical (positive upward, ground at y = 0)
/// - Z: horizontal
///
/// Every operation returns a new value; nothing mutates its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Multiply every component by `s`
    pub fn scale(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Component-wise sum
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        self + other
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Component parallel to `normal` (which must be unit length)
    pub fn project_onto_normal(&self, normal: &Self) -> Self {
        normal.scale(self.dot(normal))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        self.scale(scalar)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

// =============================================================================
// Physics Object
// =============================================================================

/// A single simulated body, treated as a sphere for ground contact.
///
/// `mass` is carried but gravity is a constant acceleration, so nothing
/// in the step reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsObject {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub mass: f32,
    /// Fraction of normal velocity reflected on impact, in [0, 1]
    pub restitution: f32,
    /// Fraction of tangential velocity removed per resolution (not time-scaled)
    pub friction: f32,
}

impl PhysicsObject {
    /// The default player: 70 kg, standing 1m above the ground.
    pub fn player() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass: 70.0,
            restitution: 0.3,
            friction: 0.8,
        }
    }

    /// Object at rest at a given position, with the player's material.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            ..Self::player()
        }
    }

    /// Overwrite the kinematic state, leaving material and acceleration alone.
    pub fn set_kinematics(&mut self, position: Vec3, velocity: Vec3) {
        self.position = position;
        self.velocity = velocity;
    }
}

impl Default for PhysicsObject {
    fn default() -> Self {
        Self::player()
    }
}

// =============================================================================
// Plane
// =============================================================================

/// Static infinite plane: `dot(p, normal) - distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed offset from the origin along `normal`
    pub distance: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// The horizontal plane y = 0, facing up.
    pub const fn ground() -> Self {
        Self::new(Vec3::UP, 0.0)
    }

    /// Signed distance from `point` to the plane (positive on the normal side)
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        point.dot(&self.normal) - self.distance
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::ground()
    }
}

// =============================================================================
// Collision Types
// =============================================================================

/// Result of a single plane test. Built per test and consumed right away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    pub is_colliding: bool,
    /// Always the plane's normal, hit or miss
    pub normal: Vec3,
    /// Overlap depth along `normal`; zero when not colliding
    pub penetration: f32,
}

impl CollisionInfo {
    pub fn miss(normal: Vec3) -> Self {
        Self {
            is_colliding: false,
            normal,
            penetration: 0.0,
        }
    }

    pub fn hit(normal: Vec3, penetration: f32) -> Self {
        Self {
            is_colliding: true,
            normal,
            penetration,
        }
    }
}

// =============================================================================
// Step Output
// =============================================================================

/// Kinematic state after a full step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl StepSnapshot {
    /// Flat `[px, py, pz, vx, vy, vz]` layout used at the host boundary.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
        ]
    }
}

impl From<&PhysicsObject> for StepSnapshot {
    fn from(object: &PhysicsObject) -> Self {
        Self {
            position: object.position,
            velocity: object.velocity,
        }
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Default values for the tunables in [`crate::presets::WorldConfig`].
pub mod constants {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.81;

    /// Terminal fall speed (m/s); vertical velocity never drops below its negation
    pub const MAX_FALL_SPEED: f32 = 50.0;

    /// Radius of the sphere used for ground contact (m)
    pub const CONTACT_RADIUS: f32 = 0.5;

    /// Tangential speed below which friction is skipped (m/s)
    pub const TANGENT_EPSILON: f32 = 1e-4;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6 = 32
    }

    #[test]
    fn test_vec3_value_semantics() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0, 1.0, 1.0);

        let sum = a.add(b);
        let scaled = a.scale(3.0);

        assert_eq!(sum, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(scaled, Vec3::new(3.0, 6.0, 9.0));
        // Inputs untouched
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_vec3_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
        assert!((v.magnitude_squared() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_array_conversion() {
        let v: Vec3 = [1.5, -2.0, 0.25].into();
        assert_eq!(v, Vec3::new(1.5, -2.0, 0.25));
        let back: [f32; 3] = v.into();
        assert_eq!(back, [1.5, -2.0, 0.25]);
    }

    #[test]
    fn test_player_defaults() {
        let player = PhysicsObject::player();
        assert_eq!(player.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(player.velocity, Vec3::ZERO);
        assert_eq!(player.acceleration, Vec3::ZERO);
        assert_eq!(player.mass, 70.0);
        assert_eq!(player.restitution, 0.3);
        assert_eq!(player.friction, 0.8);
    }

    #[test]
    fn test_ground_signed_distance() {
        let ground = Plane::ground();
        assert_eq!(ground.signed_distance(&Vec3::new(3.0, 2.0, -1.0)), 2.0);
        assert_eq!(ground.signed_distance(&Vec3::new(0.0, -0.5, 0.0)), -0.5);

        let raised = Plane::new(Vec3::UP, 1.0);
        assert_eq!(raised.signed_distance(&Vec3::new(0.0, 2.0, 0.0)), 1.0);
    }

    #[test]
    fn test_snapshot_layout() {
        let snapshot = StepSnapshot {
            position: Vec3::new(1.0, 2.0, 3.0),
            velocity: Vec3::new(4.0, 5.0, 6.0),
        };
        assert_eq!(snapshot.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
