//! # GP Core
//!
//! A single-body physics stepper: one player sphere against one static
//! ground plane.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, PhysicsObject, Plane, CollisionInfo)
//! - `forces`: Gravity with a terminal fall speed
//! - `integrator`: Semi-implicit Euler position update
//! - `collision`: Sphere-vs-plane detection and impulse resolution
//! - `presets`: YAML-based world and body configuration loader
//! - `simulation`: Caller-owned context exposing the per-frame entry points
//!
//! ## Example
//!
//! ```
//! use gp_core::simulation::Simulation;
//! use gp_core::types::Vec3;
//!
//! let mut sim = Simulation::new();
//! let pos = sim.update_player_physics(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, 1.0);
//! assert!((pos.y - 0.5).abs() < 1e-4);
//! assert!(sim.check_collision(Vec3::new(0.0, 0.4, 0.0)));
//! ```

pub mod collision;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod presets;
pub mod simulation;
pub mod types;

pub use error::PresetError;
pub use simulation::Simulation;
