//! Per-frame orchestration
//!
//! `Simulation` is the runtime bundle driven once per frame by whatever owns
//! the window/event loop. A frame is:
//! 1. one `Universe` tick at dt = 1 / timestep_hz
//! 2. for every survivor, as it is emitted: camera world → screen
//! 3. `DrawSurface::draw_circle` with the projected centre
//!
//! Input collaborators call `handle_pointer_move` and `apply_input`; the
//! key/button bindings themselves live outside the crate.

use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::simulation::params::Parameters;
use crate::simulation::states::Vector3D;
use crate::simulation::universe::Universe;
use crate::visualization::camera::Camera;
use crate::visualization::surface::DrawSurface;

/// Smallest radius handed to the surface, keeps far bodies visible
pub const MIN_DRAW_RADIUS: f64 = 0.5;

/// Discrete commands an input collaborator maps key/button events onto
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCommand {
    Translate([f64; 3]), // move camera position
    Retarget([f64; 3]), // move camera target
    NudgeClipPlanes(f64),
    NudgeTimestep(i64), // Hz
    PointerMove([f64; 2]),
    SaveCamera,
    ResetCamera,
}

/// What happened in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub frame_time: Duration,
    pub live_bodies: usize,
    pub merges: usize,
    pub timestep_hz: i64,
}

impl FrameReport {
    pub fn fps(&self) -> f64 {
        let secs = self.frame_time.as_secs_f64();
        if secs > 0.0 { 1.0 / secs } else { f64::INFINITY }
    }
}

pub struct Simulation {
    pub universe: Universe,
    pub camera: Camera,
    pub parameters: Parameters,
    frame: u64,
}

impl Simulation {
    pub fn new(universe: Universe, camera: Camera, parameters: Parameters) -> Self {
        Self {
            universe,
            camera,
            parameters,
            frame: 0,
        }
    }

    /// Frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameReport {
        let frame_start = Instant::now();
        let dt = self.parameters.dt();

        let Simulation { universe, camera, .. } = &mut *self;
        let tick = universe.tick(dt, |body| {
            let screen = camera.world_to_screen(body.physics.position);
            let radius = (body.physics.scale + screen.z).max(MIN_DRAW_RADIUS);
            surface.draw_circle((screen.x, screen.y), radius, body.color);
        });

        let report = FrameReport {
            frame: self.frame,
            frame_time: frame_start.elapsed(),
            live_bodies: tick.live,
            merges: tick.merges,
            timestep_hz: self.parameters.timestep_hz,
        };
        self.frame += 1;
        report
    }

    pub fn increment_timestep(&mut self, increment: i64) {
        self.parameters.increment_timestep(increment);
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        self.camera.handle_pointer_move(x, y);
    }

    pub fn apply_input(&mut self, command: InputCommand) {
        match command {
            InputCommand::Translate(d) => self.camera.translate(Vector3D::from(d)),
            InputCommand::Retarget(d) => self.camera.retarget(Vector3D::from(d)),
            InputCommand::NudgeClipPlanes(delta) => self.camera.adjust_clip_planes(delta),
            InputCommand::NudgeTimestep(inc) => self.increment_timestep(inc),
            InputCommand::PointerMove([x, y]) => self.handle_pointer_move(x, y),
            InputCommand::SaveCamera => self.camera.save_state(),
            InputCommand::ResetCamera => self.camera.reset_to_saved(),
        }
    }
}
