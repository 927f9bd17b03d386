//! Preset loader.
//!
//! Loads world tunables and body materials from YAML files so the stepper
//! can be retuned without recompiling.
//!
//! ## Directory Structure
//!
//! ```text
//! presets/
//! ├── worlds/
//! │   ├── earth.yaml
//! │   └── moon.yaml
//! └── bodies/
//!     ├── player.yaml
//!     └── rubber_ball.yaml
//! ```
//!
//! Every field has a default, so a preset only needs to list what it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PresetError;
use crate::types::{constants, PhysicsObject, Plane, Vec3};

/// Allowed deviation of a ground normal from unit length.
const NORMAL_TOLERANCE: f32 = 1e-3;

// =============================================================================
// World Config
// =============================================================================

/// Tunables for gravity, contact and friction, plus the static ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub name: String,
    /// Downward acceleration magnitude (m/s²)
    pub gravity: f32,
    /// Terminal fall speed (m/s)
    pub max_fall_speed: f32,
    /// Radius of the body's contact sphere (m)
    pub contact_radius: f32,
    /// Tangential speed below which friction is skipped (m/s)
    pub tangent_epsilon: f32,
    pub ground: Plane,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            gravity: constants::GRAVITY,
            max_fall_speed: constants::MAX_FALL_SPEED,
            contact_radius: constants::CONTACT_RADIUS,
            tangent_epsilon: constants::TANGENT_EPSILON,
            ground: Plane::ground(),
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), PresetError> {
        let positive = [
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("contact_radius", self.contact_radius),
            ("tangent_epsilon", self.tangent_epsilon),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PresetError::invalid(
                    &self.name,
                    format!("{field} must be finite and positive, got {value}"),
                ));
            }
        }

        if !self.ground.normal.is_finite() || !self.ground.distance.is_finite() {
            return Err(PresetError::invalid(&self.name, "ground plane must be finite"));
        }
        let len = self.ground.normal.magnitude();
        if (len - 1.0).abs() > NORMAL_TOLERANCE {
            return Err(PresetError::invalid(
                &self.name,
                format!("ground normal must be unit length, got |n|={len}"),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Body Properties
// =============================================================================

/// Material and spawn point of a simulated body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyProperties {
    pub name: String,
    /// Kilograms. Carried on the body; gravity does not scale with it.
    pub mass: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Position used by `Simulation::init`
    pub spawn: Vec3,
}

impl BodyProperties {
    pub fn player() -> Self {
        let player = PhysicsObject::player();
        Self {
            name: "player".to_string(),
            mass: player.mass,
            restitution: player.restitution,
            friction: player.friction,
            spawn: player.position,
        }
    }

    /// A fresh body at the spawn point with zero velocity and acceleration.
    pub fn spawn_object(&self) -> PhysicsObject {
        PhysicsObject {
            position: self.spawn,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass: self.mass,
            restitution: self.restitution,
            friction: self.friction,
        }
    }

    pub fn validate(&self) -> Result<(), PresetError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(PresetError::invalid(
                &self.name,
                format!("mass must be positive, got {}", self.mass),
            ));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PresetError::invalid(
                &self.name,
                format!("restitution must be in [0, 1], got {}", self.restitution),
            ));
        }
        if !self.friction.is_finite() || self.friction < 0.0 {
            return Err(PresetError::invalid(
                &self.name,
                format!("friction must be non-negative, got {}", self.friction),
            ));
        }
        if !self.spawn.is_finite() {
            return Err(PresetError::invalid(&self.name, "spawn must be finite"));
        }
        Ok(())
    }
}

impl Default for BodyProperties {
    fn default() -> Self {
        Self::player()
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Preset loader with configurable base directory.
pub struct PresetLoader {
    base_path: PathBuf,
}

impl PresetLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain `worlds/` and `bodies/` subdirectories.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate a world by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = PresetLoader::new("presets");
    /// let moon = loader.load_world("moon")?;
    /// ```
    pub fn load_world(&self, name: &str) -> Result<WorldConfig, PresetError> {
        let world: WorldConfig = self.load("worlds", name)?;
        world.validate()?;
        Ok(world)
    }

    /// Load and validate a body by name.
    pub fn load_body(&self, name: &str) -> Result<BodyProperties, PresetError> {
        let body: BodyProperties = self.load("bodies", name)?;
        body.validate()?;
        Ok(body)
    }

    /// List all available worlds.
    pub fn list_worlds(&self) -> Result<Vec<String>, PresetError> {
        self.list("worlds")
    }

    /// List all available bodies.
    pub fn list_bodies(&self) -> Result<Vec<String>, PresetError> {
        self.list("bodies")
    }

    fn load<T: serde::de::DeserializeOwned>(
        &self,
        subdir: &str,
        name: &str,
    ) -> Result<T, PresetError> {
        let path = self.base_path.join(subdir).join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(PresetError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let preset = serde_yaml::from_str(&contents)?;
        log::debug!("loaded preset {}", path.display());
        Ok(preset)
    }

    fn list(&self, subdir: &str) -> Result<Vec<String>, PresetError> {
        let path = self.base_path.join(subdir);
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
