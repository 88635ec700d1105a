//! Pinhole camera and the world → screen transform pipeline
//!
//! The pipeline has three stages, each usable on its own:
//! 1. [`Camera::apply_view_transform`] world space → camera (side/up/look) space
//! 2. [`Camera::project`]              symmetric-frustum perspective + divide
//! 3. [`Camera::ndc_to_screen`]        NDC → pixels relative to viewport centre
//!
//! [`Camera::world_to_screen`] composes all three.
//!
//! The look-at basis is rebuilt from `position`, `target` and `up` on every
//! call and never cached, so mutating the camera can't leave it stale.
//!
//! Singularities don't fail. A zero-length look or side direction normalizes
//! to the zero vector, and a point at view depth 0 skips the perspective
//! divide. Results at those points are defined but not geometrically
//! meaningful.

use crate::simulation::states::Vector3D;
use crate::simulation::vector::{normalize_or_zero, rotate_about_x, rotate_about_y};

/// Degrees of yaw/pitch per pixel of pointer movement
pub const POINTER_SENSITIVITY: f64 = 0.5;

/// Smallest near plane `adjust_clip_planes` will move to
pub const MIN_NEAR_PLANE: f64 = 0.1;

pub const PITCH_LIMIT: f64 = 90.0;

/// World axis selector for per-axis increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Vector3D {
        match self {
            Axis::X => Vector3D::new(1.0, 0.0, 0.0),
            Axis::Y => Vector3D::new(0.0, 1.0, 0.0),
            Axis::Z => Vector3D::new(0.0, 0.0, 1.0),
        }
    }
}

/// Orthonormal camera basis derived from position/target/up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub side: Vector3D,
    pub up: Vector3D,
    pub look: Vector3D,
}

/// Every mutable field of the camera.
/// `Copy`, so a saved snapshot never shares anything with the live state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vector3D,
    pub target: Vector3D,
    pub up: Vector3D, // reference up, not the derived basis vector
    pub yaw: f64, // degrees, unbounded
    pub pitch: f64, // degrees, [-90, 90]
    pub fov: f64, // degrees
    pub near_plane: f64,
    pub far_plane: f64,
    pub width: u32,
    pub height: u32,
    pub previous_pointer: (f64, f64),
}

impl CameraState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Vector3D::new(0.0, 0.0, -500.0),
            target: Vector3D::zeros(),
            up: Vector3D::new(0.0, 1.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            fov: 90.0,
            near_plane: 0.1,
            far_plane: 100.0,
            width,
            height,
            previous_pointer: (width as f64 / 2.0, height as f64 / 2.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    state: CameraState,
    saved: CameraState,
}

impl Camera {
    /// Camera with default placement; the initial state is saved immediately.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_state(CameraState::new(width, height))
    }

    pub fn from_state(state: CameraState) -> Self {
        Self {
            state,
            saved: state,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Direct access for collaborators that own camera placement.
    /// No validation happens here.
    pub fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }

    pub fn saved_state(&self) -> &CameraState {
        &self.saved
    }

    pub fn save_state(&mut self) {
        self.saved = self.state;
    }

    pub fn reset_to_saved(&mut self) {
        self.state = self.saved;
    }

    // =====================================================================
    // Transform pipeline
    // =====================================================================

    pub fn basis(&self) -> ViewBasis {
        let look = normalize_or_zero(self.state.target - self.state.position);
        let side = normalize_or_zero(look.cross(&self.state.up));
        let up = normalize_or_zero(side.cross(&look));
        ViewBasis { side, up, look }
    }

    /// World point → camera space `(side, up, look)` coordinates
    pub fn apply_view_transform(&self, world: Vector3D) -> Vector3D {
        let ViewBasis { side, up, look } = self.basis();
        let translated = world - self.state.position;

        Vector3D::new(translated.dot(&side), translated.dot(&up), translated.dot(&look))
    }

    /// Camera-space point → normalized device coordinates
    pub fn project(&self, view: Vector3D) -> Vector3D {
        let s = &self.state;
        let (zn, zf) = (s.near_plane, s.far_plane);

        let aspect_ratio = s.width as f64 / s.height as f64;
        let tan_half_fov = (s.fov / 2.0).to_radians().tan();

        let mut x = view.x * (1.0 / (tan_half_fov * aspect_ratio));
        let mut y = view.y * (1.0 / tan_half_fov);
        let mut z = view.z * ((-zf - zn) / (zn - zf)) + ((2.0 * zf * zn) / (zn - zf));

        // perspective divide, skipped on the view plane
        if view.z != 0.0 {
            x /= -view.z;
            y /= -view.z;
            z /= -view.z;
        }

        Vector3D::new(x, y, z)
    }

    /// NDC → screen pixels around the viewport centre. Depth passes through.
    pub fn ndc_to_screen(&self, ndc: Vector3D) -> Vector3D {
        let half_width = self.state.width as f64 / 2.0;
        let half_height = self.state.height as f64 / 2.0;

        Vector3D::new(ndc.x * half_width, ndc.y * half_height, ndc.z)
    }

    pub fn world_to_screen(&self, world: Vector3D) -> Vector3D {
        let view = self.apply_view_transform(world);
        let ndc = self.project(view);
        self.ndc_to_screen(ndc)
    }

    /// Rotate `p` about the vertical axis by the current yaw
    pub fn yaw_projection(&self, p: Vector3D) -> Vector3D {
        rotate_about_y(p, self.state.yaw.to_radians())
    }

    /// Rotate `p` about the horizontal axis by the current pitch
    pub fn pitch_projection(&self, p: Vector3D) -> Vector3D {
        rotate_about_x(p, self.state.pitch.to_radians())
    }

    // =====================================================================
    // Input entry points
    // =====================================================================

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        let (px, py) = self.state.previous_pointer;
        let dx = x - px;
        let dy = y - py;

        self.state.yaw += dx * POINTER_SENSITIVITY;
        let pitch = self.state.pitch + dy * POINTER_SENSITIVITY;
        self.state.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.state.previous_pointer = (x, y);
    }

    /// Shift near and far plane together. Rejected if near would drop below
    /// `MIN_NEAR_PLANE`.
    pub fn adjust_clip_planes(&mut self, delta: f64) {
        if self.state.near_plane + delta >= MIN_NEAR_PLANE {
            self.state.near_plane = (self.state.near_plane + delta).max(0.0);
            self.state.far_plane = (self.state.far_plane + delta).max(0.0);
        }
    }

    pub fn translate(&mut self, delta: Vector3D) {
        self.state.position += delta;
    }

    pub fn retarget(&mut self, delta: Vector3D) {
        self.state.target += delta;
    }

    pub fn increment_position(&mut self, axis: Axis, increment: f64) {
        self.translate(axis.unit() * increment);
    }

    pub fn increment_target(&mut self, axis: Axis, increment: f64) {
        self.retarget(axis.unit() * increment);
    }
}
