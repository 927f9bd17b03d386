//! Collision detection and resolution against the static ground plane.
//!
//! This module handles:
//! - **Detection**: discrete sphere-vs-plane overlap after the position update
//! - **Resolution**: push-out, restitution impulse and tangential friction
//!
//! ## Discrete Overlap
//!
//! The test only looks at where the body ended up, not the path it took.
//! A large step that carries the body far below the plane is still caught,
//! because the plane is infinite and penetration has no upper bound:
//!
//! ```text
//!    ●  before step
//!    │
//! ═══│═══════════  y = 0
//!    │
//!    ●  after step: penetration = radius - y
//! ```

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
