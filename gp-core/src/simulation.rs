//! Simulation context: one body, one ground plane.
//!
//! `Simulation` is owned by the caller and every mutating call takes
//! `&mut self`, so a context is only ever stepped from one place at a time.
//! To share one across threads, wrap it in a `Mutex`.
//!
//! ## Frame Step
//!
//! ```text
//! gravity → position += velocity*dt → ground test → resolve
//! ```
//!
//! No entry point fails. NaN or infinite inputs propagate into the returned
//! state as NaN; nothing is validated on the hot path.

use crate::collision::{CollisionDetector, CollisionResolver, Resolution};
use crate::error::PresetError;
use crate::forces::Gravity;
use crate::integrator::Euler;
use crate::presets::{BodyProperties, PresetLoader, WorldConfig};
use crate::types::{CollisionInfo, PhysicsObject, Plane, StepSnapshot, Vec3};

pub struct Simulation {
    world: WorldConfig,
    body: BodyProperties,
    player: PhysicsObject,
    ground: Plane,
    gravity: Gravity,
    detector: CollisionDetector,
    resolver: CollisionResolver,
    time: f64,
    last_collision: Option<CollisionInfo>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Create an initialized simulation with the default world and player.
    pub fn new() -> Self {
        Self::with_presets(WorldConfig::default(), BodyProperties::player())
    }

    /// Create an initialized simulation from already-loaded presets.
    ///
    /// The presets are trusted as given; `from_presets` validates them.
    pub fn with_presets(world: WorldConfig, body: BodyProperties) -> Self {
        let mut sim = Self {
            gravity: Gravity::from_world(&world),
            detector: CollisionDetector::from_world(&world),
            resolver: CollisionResolver::from_world(&world),
            player: body.spawn_object(),
            ground: world.ground,
            world,
            body,
            time: 0.0,
            last_collision: None,
        };
        sim.init();
        sim
    }

    /// Load the named world and body from a preset directory.
    pub fn from_presets(
        loader: &PresetLoader,
        world: &str,
        body: &str,
    ) -> Result<Self, PresetError> {
        let world = loader.load_world(world)?;
        let body = loader.load_body(body)?;
        Ok(Self::with_presets(world, body))
    }

    /// Reset the player to its spawn state and restore the ground plane.
    ///
    /// Calling this twice simply resets twice.
    pub fn init(&mut self) {
        self.player = self.body.spawn_object();
        self.ground = self.world.ground;
        self.last_collision = None;
        log::info!(
            "physics initialized: world={} body={} spawn=({:.2}, {:.2}, {:.2})",
            self.world.name,
            self.body.name,
            self.player.position.x,
            self.player.position.y,
            self.player.position.z
        );
    }

    /// Release held resources. There are none beyond the context itself.
    pub fn cleanup(&mut self) {
        log::info!("physics released after {:.3}s simulated", self.time);
    }

    /// `init` plus clearing the simulated clock.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.init();
    }

    /// Advance the context by one frame and return position and velocity.
    pub fn update_physics(&mut self, dt: f32) -> StepSnapshot {
        Euler::step(&mut self.player, &self.gravity, dt);

        let collision = self.detector.check_plane(&self.player, &self.ground);
        let outcome = self.resolver.resolve(&mut self.player, &collision);

        self.last_collision = collision.is_colliding.then_some(collision);
        self.time += f64::from(dt);

        log::trace!(
            "step dt={:.4} pos=({:.3}, {:.3}, {:.3}) vel=({:.3}, {:.3}, {:.3}) {:?}",
            dt,
            self.player.position.x,
            self.player.position.y,
            self.player.position.z,
            self.player.velocity.x,
            self.player.velocity.y,
            self.player.velocity.z,
            outcome
        );
        if outcome == Resolution::Separating {
            log::debug!("ground contact while separating; position corrected only");
        }

        StepSnapshot::from(&self.player)
    }

    /// Overwrite the player's position and velocity, step, and return only the
    /// new position. The new velocity stays in the context (see `player()`).
    pub fn update_player_physics(&mut self, position: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
        self.player.set_kinematics(position, velocity);
        self.update_physics(dt).position
    }

    /// Whether a body centered at `position` would overlap the ground.
    ///
    /// Does not touch the player.
    pub fn check_collision(&self, position: Vec3) -> bool {
        self.detector.overlaps(&position, &self.ground)
    }

    /// Run `steps` full steps of `dt` each, returning the final snapshot.
    pub fn step_n(&mut self, dt: f32, steps: usize) -> StepSnapshot {
        for _ in 0..steps {
            self.update_physics(dt);
        }
        StepSnapshot::from(&self.player)
    }

    pub fn player(&self) -> &PhysicsObject {
        &self.player
    }

    pub fn ground(&self) -> &Plane {
        &self.ground
    }

    pub fn world(&self) -> &WorldConfig {
        &self.world
    }

    pub fn body(&self) -> &BodyProperties {
        &self.body
    }

    /// Total simulated seconds since the last reset.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Collision found by the most recent step, if there was one.
    pub fn last_collision(&self) -> Option<CollisionInfo> {
        self.last_collision
    }
}

// =============================================================================
// Tests
// =============================================================================
