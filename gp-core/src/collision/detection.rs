//! Discrete sphere-vs-plane overlap detection.
//!
//! The body is a sphere of radius `contact_radius` centered on its position.
//! It collides when its center is closer than the radius to the plane
//! (or behind it).

use crate::presets::WorldConfig;
use crate::types::{constants, CollisionInfo, PhysicsObject, Plane, Vec3};

/// Configuration for collision detection.
#[derive(Debug, Clone)]
pub struct CollisionConfig {
    /// Radius of the body's contact sphere in meters
    pub contact_radius: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            contact_radius: constants::CONTACT_RADIUS,
        }
    }
}

/// Collision detector for a body against a static plane.
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    pub config: CollisionConfig,
}

impl Default for CollisionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionDetector {
    pub fn new() -> Self {
        Self {
            config: CollisionConfig::default(),
        }
    }

    pub fn with_config(config: CollisionConfig) -> Self {
        Self { config }
    }

    pub fn from_world(world: &WorldConfig) -> Self {
        Self::with_config(CollisionConfig {
            contact_radius: world.contact_radius,
        })
    }

    /// Test `object` against `plane`.
    ///
    /// Flags a collision iff the signed distance is strictly below the
    /// contact radius, so a flagged result always has positive penetration.
    /// The returned normal is the plane's normal whether or not it hit.
    pub fn check_plane(&self, object: &PhysicsObject, plane: &Plane) -> CollisionInfo {
        self.check_point(&object.position, plane)
    }

    /// Overlap query for a bare position.
    pub fn overlaps(&self, position: &Vec3, plane: &Plane) -> bool {
        self.check_point(position, plane).is_colliding
    }

    fn check_point(&self, position: &Vec3, plane: &Plane) -> CollisionInfo {
        let radius = self.config.contact_radius;
        let distance = plane.signed_distance(position);

        if distance < radius {
            CollisionInfo::hit(plane.normal, radius - distance)
        } else {
            CollisionInfo::miss(plane.normal)
        }
    }
}

/// Test `object` against `plane` with the default 0.5m contact radius.
pub fn check_plane_collision(object: &PhysicsObject, plane: &Plane) -> CollisionInfo {
    CollisionDetector::new().check_plane(object, plane)
}

// =============================================================================
// Tests
// =============================================================================
