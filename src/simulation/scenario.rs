//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - a `Simulation` (parameters, universe with bodies, camera)
//! - the scripted input commands, sorted by frame
//!
//! This is the body factory of the crate: the core itself never invents
//! starting state.

use crate::configuration::config::{BodyConfig, CameraConfig, ConfigError, ScenarioConfig};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, PhysicsBody, Vector3D};
use crate::simulation::universe::Universe;
use crate::visualization::camera::{Camera, CameraState};
use crate::visualization::frame::{InputCommand, Simulation};
use crate::visualization::surface::Rgba;

/// A scripted input, fired before frame `frame` runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledInput {
    pub frame: u64,
    pub command: InputCommand,
}

pub struct Scenario {
    pub simulation: Simulation,
    pub inputs: Vec<ScheduledInput>,
}

fn vector_from(v: &[f64]) -> Vector3D {
    Vector3D::new(v[0], v[1], v[2])
}

fn build_body(bc: &BodyConfig) -> Body {
    let mut physics = PhysicsBody::new();
    physics.set_position(bc.x[0], bc.x[1], bc.x[2]);
    physics.set_velocity(bc.v[0], bc.v[1], bc.v[2]);
    physics.set_spin_velocity(bc.spin[0], bc.spin[1], bc.spin[2]);
    physics.set_mass(bc.m);
    physics.set_scale(bc.scale);
    physics.set_temperature(bc.temperature);
    physics.set_melting_point(bc.melting_point);

    let mut body = Body::new(physics);
    if !bc.shape.is_empty() {
        body = body.with_shape(bc.shape.iter().map(|p| vector_from(p)).collect());
    }
    // arity already checked by validate
    body.with_color(Rgba::from_slice(&bc.color).unwrap_or_default())
}

fn build_camera(cc: &CameraConfig) -> Camera {
    let mut state = CameraState::new(cc.width, cc.height);
    state.fov = cc.fov;
    state.near_plane = cc.near_plane;
    state.far_plane = cc.far_plane;
    state.position = vector_from(&cc.position);
    state.target = vector_from(&cc.target);
    state.up = vector_from(&cc.up);
    Camera::from_state(state)
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle from it
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let parameters = Parameters {
            timestep_hz: cfg.simulation.timestep_hz,
            g: cfg.simulation.g,
            eps2: cfg.simulation.eps2,
        };

        // Forces: register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        });

        let mut universe = Universe::new(forces);
        for bc in &cfg.bodies {
            universe.insert(build_body(bc));
        }

        let camera = build_camera(&cfg.camera);

        let mut inputs: Vec<ScheduledInput> = cfg
            .inputs
            .iter()
            .map(|ic| ScheduledInput { frame: ic.frame, command: ic.command })
            .collect();
        // stable: same-frame commands keep file order
        inputs.sort_by_key(|input| input.frame);

        Ok(Self {
            simulation: Simulation::new(universe, camera, parameters),
            inputs,
        })
    }

    /// Commands scheduled for `frame`, in file order
    pub fn inputs_for(&self, frame: u64) -> impl Iterator<Item = InputCommand> + '_ {
        self.inputs
            .iter()
            .filter(move |input| input.frame == frame)
            .map(|input| input.command)
    }
}
