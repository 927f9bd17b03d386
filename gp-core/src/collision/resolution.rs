//! Impulse-based collision resolution against a static plane.
//!
//! Resolution runs in four stages:
//! 1. Push the body out of the plane along the normal
//! 2. Skip the rest if the body is already separating
//! 3. Reflect the normal velocity, scaled by restitution
//! 4. Remove a `friction` fraction of the tangential velocity
//!
//! ## Model Assumptions
//!
//! - **Plane as infinite mass**: the plane never moves, so the full impulse
//!   goes to the body.
//! - **Friction is per contact, not per second**: a body resting on the
//!   ground loses the same fraction of its sliding speed every frame
//!   regardless of `dt`.
//!
//! ```text
//!        v_in        v_out
//!          ╲        ↗
//!           ╲     ╱   normal part: -restitution * v_n
//!            ↘  ╱     tangent part: (1 - friction) * v_t
//! ════════════●════════════ plane
//! ```

use crate::presets::WorldConfig;
use crate::types::{constants, CollisionInfo, PhysicsObject};

/// Which branch of the resolution ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The collision info did not flag a collision; nothing changed
    NoContact,
    /// Position was corrected but the body was already moving away
    Separating,
    /// Position corrected and impulse applied
    Bounced { friction_applied: bool },
}

/// Configuration for collision resolution.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Tangential speed at or below which friction is skipped
    pub tangent_epsilon: f32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            tangent_epsilon: constants::TANGENT_EPSILON,
        }
    }
}

/// Collision resolver for a body against a static plane.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    pub config: ResolutionConfig,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolutionConfig) -> Self {
        Self { config }
    }

    pub fn from_world(world: &WorldConfig) -> Self {
        Self::with_config(ResolutionConfig {
            tangent_epsilon: world.tangent_epsilon,
        })
    }

    /// Resolve `collision` in place on `object`.
    ///
    /// Mutates only position and velocity.
    pub fn resolve(&self, object: &mut PhysicsObject, collision: &CollisionInfo) -> Resolution {
        if !collision.is_colliding {
            return Resolution::NoContact;
        }

        let normal = collision.normal;

        // Positional correction
        object.position += normal * collision.penetration;

        let velocity_along_normal = object.velocity.dot(&normal);
        if velocity_along_normal > 0.0 {
            return Resolution::Separating;
        }

        // j = -(1 + e) * v_n
        let j = -(1.0 + object.restitution) * velocity_along_normal;
        object.velocity += normal * j;

        let friction_applied = self.apply_friction(object, collision);

        log::debug!(
            "resolved ground contact: penetration={:.4} v_n={:.4} friction={}",
            collision.penetration,
            velocity_along_normal,
            friction_applied
        );

        Resolution::Bounced { friction_applied }
    }

    /// Remove a `friction` fraction of the tangential velocity.
    ///
    /// Returns false when the tangential speed is too small to normalize.
    fn apply_friction(&self, object: &mut PhysicsObject, collision: &CollisionInfo) -> bool {
        let normal = collision.normal;
        let vn = object.velocity.project_onto_normal(&normal);
        let tangent = object.velocity - vn;

        let tangent_length = tangent.magnitude();
        if tangent_length <= self.config.tangent_epsilon {
            return false;
        }

        let tangent = tangent / tangent_length;
        let friction_magnitude = -object.velocity.dot(&tangent) * object.friction;
        object.velocity += tangent * friction_magnitude;

        true
    }
}

/// Resolve `collision` on `object` with the default friction threshold.
pub fn resolve_collision(object: &mut PhysicsObject, collision: &CollisionInfo) -> Resolution {
    CollisionResolver::new().resolve(object, collision)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    fn ground_hit(penetration: f32) -> CollisionInfo {
        CollisionInfo::hit(Vec3::UP, penetration)
    }

    fn falling(y: f32, velocity: Vec3) -> PhysicsObject {
        let mut object = PhysicsObject::at_rest(Vec3::new(0.0, y, 0.0));
        object.velocity = velocity;
        object
    }

    #[test]
    fn test_no_contact_is_noop() {
        let mut object = falling(0.2, Vec3::new(1.0, -3.0, 0.0));
        let before = object;

        let outcome = resolve_collision(&mut object, &CollisionInfo::miss(Vec3::UP));

        assert_eq!(outcome, Resolution::NoContact);
        assert_eq!(object, before);
    }

    #[test]
    fn test_position_correction() {
        let mut object = falling(0.2, Vec3::new(0.0, -1.0, 0.0));

        resolve_collision(&mut object, &ground_hit(0.3));

        assert!((object.position.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_with_restitution() {
        let mut object = falling(0.2, Vec3::new(0.0, -10.0, 0.0));

        let outcome = resolve_collision(&mut object, &ground_hit(0.3));

        assert_eq!(
            outcome,
            Resolution::Bounced {
                friction_applied: false
            }
        );
        // Reflected at 30%
        assert!((object.velocity.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_inelastic_stops_normal_motion() {
        let mut object = falling(0.2, Vec3::new(0.0, -10.0, 0.0));
        object.restitution = 0.0;

        resolve_collision(&mut object, &ground_hit(0.3));

        assert_eq!(object.velocity.y, 0.0);
    }

    #[test]
    fn test_perfectly_elastic_reflects() {
        let mut object = falling(0.2, Vec3::new(0.0, -10.0, 0.0));
        object.restitution = 1.0;

        resolve_collision(&mut object, &ground_hit(0.3));

        assert!((object.velocity.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_separating_body_keeps_velocity() {
        let mut object = falling(0.2, Vec3::new(3.0, 2.0, 0.0));

        let outcome = resolve_collision(&mut object, &ground_hit(0.3));

        assert_eq!(outcome, Resolution::Separating);
        assert_eq!(object.velocity, Vec3::new(3.0, 2.0, 0.0));
        // But the position was still corrected
        assert!((object.position.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_friction_removes_tangential_fraction() {
        let mut object = falling(0.2, Vec3::new(5.0, -10.0, 0.0));

        let outcome = resolve_collision(&mut object, &ground_hit(0.3));

        assert_eq!(
            outcome,
            Resolution::Bounced {
                friction_applied: true
            }
        );
        // 80% of the sliding speed is removed
        assert!((object.velocity.x - 1.0).abs() < 1e-5);
        assert!((object.velocity.y - 3.0).abs() < 1e-5);
        assert_eq!(object.velocity.z, 0.0);
    }

    #[test]
    fn test_friction_is_direction_independent() {
        let mut object = falling(0.2, Vec3::new(-3.0, -1.0, 4.0));

        resolve_collision(&mut object, &ground_hit(0.3));

        assert!((object.velocity.x + 0.6).abs() < 1e-5);
        assert!((object.velocity.z - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_friction_floor() {
        let mut object = falling(0.2, Vec3::new(5e-5, -2.0, 0.0));

        let outcome = resolve_collision(&mut object, &ground_hit(0.3));

        assert_eq!(
            outcome,
            Resolution::Bounced {
                friction_applied: false
            }
        );
        assert_eq!(object.velocity.x, 5e-5);
    }

    #[test]
    fn test_resting_contact_with_zero_normal_velocity() {
        // v_n == 0 is not separating, so the impulse branch runs
        let mut object = falling(0.4, Vec3::new(2.0, 0.0, 0.0));

        let outcome = resolve_collision(&mut object, &ground_hit(0.1));

        assert!(matches!(outcome, Resolution::Bounced { .. }));
        assert_eq!(object.velocity.y, 0.0);
        assert!((object.velocity.x - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_custom_epsilon() {
        let resolver = CollisionResolver::with_config(ResolutionConfig {
            tangent_epsilon: 1.0,
        });
        let mut object = falling(0.2, Vec3::new(0.5, -2.0, 0.0));

        resolver.resolve(&mut object, &ground_hit(0.3));

        assert_eq!(object.velocity.x, 0.5);
    }

    #[test]
    fn test_mass_is_ignored() {
        let mut light = falling(0.2, Vec3::new(1.0, -4.0, 0.0));
        let mut heavy = light;
        heavy.mass = 5000.0;

        resolve_collision(&mut light, &ground_hit(0.3));
        resolve_collision(&mut heavy, &ground_hit(0.3));

        assert_eq!(light.velocity, heavy.velocity);
    }
}
