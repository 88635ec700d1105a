//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SimulationConfig`] – tick rate and physical constants
//! - [`CameraConfig`]     – viewport and initial camera placement
//! - [`BodyConfig`]       – initial state for each body
//! - [`InputConfig`]      – optional scripted input commands
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field except the body list has a default, so a minimal file only
//! needs `bodies`.
//!
//! Commands that carry data are written with a YAML tag naming the variant
//! (`!translate [0.0, 0.0, 25.0]`); unit commands are bare strings.
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   timestep_hz: 10000      # dt = 1 / timestep_hz
//!   G: 1.0                  # gravitational constant
//!   eps2: 1.0e-4            # softening epsilon^2
//!
//! camera:
//!   width: 800
//!   height: 600
//!   fov: 90.0
//!   near_plane: 0.1
//!   far_plane: 100.0
//!   position: [0.0, 0.0, -500.0]
//!   target: [0.0, 0.0, 0.0]
//!
//! bodies:
//!   - x: [0.0, 0.0, 0.0]
//!     m: 10000000.0
//!     scale: 40.0
//!     color: [0.8, 0.3, 0.3]
//!   - x: [-50.0, -45.0, 0.0]
//!     v: [10.0, 30.0, 5.0]
//!     m: 75.0
//!     scale: 3.75
//!     temperature: 1500.0
//!     melting_point: 1000.0
//!
//! inputs:
//!   - frame: 10
//!     command: !translate [0.0, 0.0, 25.0]
//!   - frame: 20
//!     command: reset_camera
//! ```

use std::fmt;

use serde::Deserialize;

use crate::simulation::params::{Parameters, DEFAULT_TIMESTEP_HZ};
use crate::visualization::frame::InputCommand;

/// Errors found while validating a loaded scenario
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Viewport width and height must be positive.
    InvalidViewport { width: u32, height: u32 },
    /// Clip planes must satisfy 0 <= near < far.
    InvalidClipPlanes { near: f64, far: f64 },
    /// Field of view must be in (0, 180) degrees.
    InvalidFieldOfView(f64),
    /// Tick rate must be above 1 Hz.
    InvalidTimestep(i64),
    /// Body mass must be positive and finite.
    InvalidMass { body: usize, mass: f64 },
    /// Body scale must be positive and finite.
    InvalidScale { body: usize, scale: f64 },
    /// A vector field did not have 3 components (or a color 3 or 4).
    WrongArity { field: &'static str, expected: usize, found: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidViewport { width, height } => {
                write!(f, "viewport must be non-empty (got {}x{})", width, height)
            }
            ConfigError::InvalidClipPlanes { near, far } => {
                write!(f, "clip planes must satisfy 0 <= near < far (got near {near}, far {far})")
            }
            ConfigError::InvalidFieldOfView(fov) => {
                write!(f, "field of view must be in (0, 180) degrees (got {fov})")
            }
            ConfigError::InvalidTimestep(hz) => write!(f, "timestep must be above 1 Hz (got {hz})"),
            ConfigError::InvalidMass { body, mass } => {
                write!(f, "body {} mass must be positive and finite (got {})", body, mass)
            }
            ConfigError::InvalidScale { body, scale } => {
                write!(f, "body {} scale must be positive and finite (got {})", body, scale)
            }
            ConfigError::WrongArity { field, expected, found } => {
                write!(f, "`{}` needs {} components, found {}", field, expected, found)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tick rate and physical constants
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub timestep_hz: i64, // ticks per simulated second
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening - prevent singular forces at very small separations
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            timestep_hz: DEFAULT_TIMESTEP_HZ,
            g: p.g,
            eps2: p.eps2,
        }
    }
}

/// Viewport and initial camera placement
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    pub fov: f64, // degrees
    pub near_plane: f64,
    pub far_plane: f64,
    pub position: Vec<f64>, // eye, world space
    pub target: Vec<f64>, // look-at point, world space
    pub up: Vec<f64>, // reference up
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: 90.0,
            near_plane: 0.1,
            far_plane: 100.0,
            position: vec![0.0, 0.0, -500.0],
            target: vec![0.0, 0.0, 0.0],
            up: vec![0.0, 1.0, 0.0],
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position
    #[serde(default = "zero3")]
    pub v: Vec<f64>, // initial velocity
    #[serde(default = "zero3")]
    pub spin: Vec<f64>, // angular velocity, stored only
    pub m: f64, // mass
    pub scale: f64, // interaction radius proxy, also drawn radius
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub melting_point: f64,
    #[serde(default = "white")]
    pub color: Vec<f32>, // [r, g, b] or [r, g, b, a]
    #[serde(default)]
    pub shape: Vec<Vec<f64>>, // local-space points, empty = single point
}

/// A command fired before the given frame is run
#[derive(Deserialize, Debug, Clone)]
pub struct InputConfig {
    pub frame: u64,
    pub command: InputCommand,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub inputs: Vec<InputConfig>,
}

fn zero3() -> Vec<f64> {
    vec![0.0, 0.0, 0.0]
}

fn white() -> Vec<f32> {
    vec![1.0, 1.0, 1.0]
}

fn check_arity(field: &'static str, v: &[f64]) -> Result<(), ConfigError> {
    if v.len() != 3 {
        return Err(ConfigError::WrongArity { field, expected: 3, found: v.len() });
    }
    Ok(())
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Reject scenarios the runtime types assume never happen.
    /// Runs once at load time; nothing on the per-frame path validates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.timestep_hz <= 1 {
            return Err(ConfigError::InvalidTimestep(sim.timestep_hz));
        }

        let cam = &self.camera;
        if cam.width == 0 || cam.height == 0 {
            return Err(ConfigError::InvalidViewport { width: cam.width, height: cam.height });
        }
        if !(cam.near_plane >= 0.0 && cam.near_plane < cam.far_plane) {
            return Err(ConfigError::InvalidClipPlanes { near: cam.near_plane, far: cam.far_plane });
        }
        if !(cam.fov > 0.0 && cam.fov < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(cam.fov));
        }
        check_arity("camera.position", &cam.position)?;
        check_arity("camera.target", &cam.target)?;
        check_arity("camera.up", &cam.up)?;

        for (i, b) in self.bodies.iter().enumerate() {
            if !(b.m > 0.0 && b.m.is_finite()) {
                return Err(ConfigError::InvalidMass { body: i, mass: b.m });
            }
            if !(b.scale > 0.0 && b.scale.is_finite()) {
                return Err(ConfigError::InvalidScale { body: i, scale: b.scale });
            }
            check_arity("bodies.x", &b.x)?;
            check_arity("bodies.v", &b.v)?;
            check_arity("bodies.spin", &b.spin)?;
            if !(b.color.len() == 3 || b.color.len() == 4) {
                return Err(ConfigError::WrongArity {
                    field: "bodies.color",
                    expected: 3,
                    found: b.color.len(),
                });
            }
            for p in &b.shape {
                check_arity("bodies.shape", p)?;
            }
        }

        Ok(())
    }
}
