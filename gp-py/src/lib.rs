//! Python bindings for the gp-core ground physics stepper.
//!
//! Provides a simple Python API:
//!
//! ```python
//! from ground_physics import PhysicsEngine
//!
//! engine = PhysicsEngine()
//! engine.init()
//!
//! for _ in range(60):
//!     px, py, pz, vx, vy, vz = engine.update_physics(1.0 / 60.0)
//!
//! x, y, z = engine.update_player_physics(0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0)
//! print(engine.check_collision(0.0, 0.4, 0.0))  # True
//! engine.cleanup()
//! ```
//!
//! Each engine owns its own simulation; there is no shared global state.

use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use gp_core::presets::PresetLoader;
use gp_core::types::Vec3 as CoreVec3;
use gp_core::{PresetError, Simulation};

/// 3D vector for positions and velocities.
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec3 {
    #[pyo3(get, set)]
    pub x: f32,
    #[pyo3(get, set)]
    pub y: f32,
    #[pyo3(get, set)]
    pub z: f32,
}

#[pymethods]
impl Vec3 {
    #[new]
    fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn __repr__(&self) -> String {
        format!("Vec3({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }

    fn magnitude(&self) -> f32 {
        CoreVec3::from(*self).magnitude()
    }

    fn to_tuple(&self) -> (f32, f32, f32) {
        (self.x, self.y, self.z)
    }
}

impl From<CoreVec3> for Vec3 {
    fn from(v: CoreVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3> for CoreVec3 {
    fn from(v: Vec3) -> Self {
        CoreVec3::new(v.x, v.y, v.z)
    }
}

fn preset_error(err: PresetError) -> PyErr {
    match err {
        PresetError::NotFound(name) => {
            PyFileNotFoundError::new_err(format!("Preset not found: {}", name))
        }
        PresetError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Ground physics engine: one player body above one ground plane.
///
/// Results come back as freshly allocated lists; an allocation failure
/// raises `MemoryError` rather than aborting.
#[pyclass]
pub struct PhysicsEngine {
    sim: Simulation,
}

#[pymethods]
impl PhysicsEngine {
    /// Create an engine with the default world and player.
    #[new]
    fn new() -> Self {
        Self {
            sim: Simulation::new(),
        }
    }

    /// Create an engine from YAML presets under `path`.
    #[staticmethod]
    fn from_presets(path: &str, world: &str, body: &str) -> PyResult<Self> {
        let loader = PresetLoader::new(path);
        let sim = Simulation::from_presets(&loader, world, body).map_err(preset_error)?;
        Ok(Self { sim })
    }

    /// Reset the player and ground to their initial state.
    fn init(&mut self) {
        self.sim.init();
    }

    /// Release resources held by the engine.
    fn cleanup(&mut self) {
        self.sim.cleanup();
    }

    /// Reset state and the simulated clock.
    fn reset(&mut self) {
        self.sim.reset();
    }

    /// Advance one frame. Returns `[px, py, pz, vx, vy, vz]`.
    fn update_physics<'py>(
        &mut self,
        py: Python<'py>,
        delta_time: f32,
    ) -> PyResult<Bound<'py, PyList>> {
        let snapshot = self.sim.update_physics(delta_time);
        PyList::new(py, snapshot.to_array())
    }

    /// Overwrite the player's position and velocity, advance one frame and
    /// return the new position as `[x, y, z]`.
    #[allow(clippy::too_many_arguments)]
    fn update_player_physics<'py>(
        &mut self,
        py: Python<'py>,
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        vel_x: f32,
        vel_y: f32,
        vel_z: f32,
        delta_time: f32,
    ) -> PyResult<Bound<'py, PyList>> {
        let position = self.sim.update_player_physics(
            CoreVec3::new(pos_x, pos_y, pos_z),
            CoreVec3::new(vel_x, vel_y, vel_z),
            delta_time,
        );
        PyList::new(py, position.to_array())
    }

    /// Whether a body at the given position would overlap the ground.
    fn check_collision(&self, pos_x: f32, pos_y: f32, pos_z: f32) -> bool {
        self.sim.check_collision(CoreVec3::new(pos_x, pos_y, pos_z))
    }

    /// Run multiple frames at once.
    fn step_n<'py>(
        &mut self,
        py: Python<'py>,
        delta_time: f32,
        steps: usize,
    ) -> PyResult<Bound<'py, PyList>> {
        let snapshot = self.sim.step_n(delta_time, steps);
        PyList::new(py, snapshot.to_array())
    }

    /// Current simulation time in seconds.
    #[getter]
    fn time(&self) -> f64 {
        self.sim.time()
    }

    /// Player position as Vec3.
    fn player_position(&self) -> Vec3 {
        self.sim.player().position.into()
    }

    /// Player velocity as Vec3.
    fn player_velocity(&self) -> Vec3 {
        self.sim.player().velocity.into()
    }

    /// Whether the last step touched the ground.
    fn grounded(&self) -> bool {
        self.sim.last_collision().is_some()
    }

    /// Get current state as dict for easy inspection.
    fn state_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let player = self.sim.player();
        let dict = PyDict::new(py);
        dict.set_item("time", self.sim.time())?;
        dict.set_item("world", &self.sim.world().name)?;
        dict.set_item("body", &self.sim.body().name)?;
        dict.set_item("x", player.position.x)?;
        dict.set_item("y", player.position.y)?;
        dict.set_item("z", player.position.z)?;
        dict.set_item("vx", player.velocity.x)?;
        dict.set_item("vy", player.velocity.y)?;
        dict.set_item("vz", player.velocity.z)?;
        dict.set_item("grounded", self.grounded())?;
        Ok(dict)
    }
}

/// Python module definition.
#[pymodule]
fn ground_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Vec3>()?;
    m.add_class::<PhysicsEngine>()?;
    Ok(())
}
