pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, PairwiseResult, PhysicsBody, Vector3D};
pub use simulation::vector::{normalize_or_zero, vec3};
pub use simulation::forces::{ForceSet, NewtonianGravity, PairForce};
pub use simulation::collisions::{absorb, merge_outcome, overlaps, MergeOutcome};
pub use simulation::universe::{TickReport, Universe};
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, ScheduledInput};

pub use configuration::config::{
    BodyConfig, CameraConfig, ConfigError, InputConfig, ScenarioConfig, SimulationConfig,
};

pub use visualization::camera::{Axis, Camera, CameraState, ViewBasis};
pub use visualization::frame::{FrameReport, InputCommand, Simulation};
pub use visualization::surface::{DrawCall, DrawSurface, RecordingSurface, Rgba};

pub use benchmark::benchmark::{bench_frame_curve, bench_tick};
