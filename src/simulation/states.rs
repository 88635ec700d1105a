//! Core state types for the N-body simulation.
//!
//! Defines the per-object physics state and the drawable wrapper around it:
//! - `PhysicsBody` kinematic and thermal state of one object
//! - `Body` a `PhysicsBody` plus shape, color and identity
//!
//! All vectors are `Vector3D`, an alias for nalgebra's `Vector3<f64>`.

use nalgebra::Vector3;

use crate::visualization::surface::Rgba;

pub type Vector3D = Vector3<f64>;

/// Opaque handle identifying a body inside a `Universe`.
/// Assigned on insertion, never reused within one universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Result of one pairwise interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairwiseResult {
    pub collision: bool, // true if the two bodies overlap right now
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub spin: Vector3D, // angular velocity, stored only
    pub mass: f64,
    pub scale: f64, // interaction radius proxy
    pub temperature: f64,
    pub melting_point: f64,
    pub(crate) delta_v: Vector3D, // velocity change accumulated this tick
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            position: Vector3D::zeros(),
            velocity: Vector3D::zeros(),
            spin: Vector3D::zeros(),
            mass: 1.0,
            scale: 1.0,
            temperature: 0.0,
            melting_point: 0.0,
            delta_v: Vector3D::zeros(),
        }
    }
}

impl PhysicsBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = Vector3D::new(x, y, z);
    }

    pub fn set_velocity(&mut self, x: f64, y: f64, z: f64) {
        self.velocity = Vector3D::new(x, y, z);
    }

    pub fn set_spin_velocity(&mut self, x: f64, y: f64, z: f64) {
        self.spin = Vector3D::new(x, y, z);
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn set_melting_point(&mut self, melting_point: f64) {
        self.melting_point = melting_point;
    }

    /// Velocity change queued by `apply_forces` and not yet integrated.
    pub fn pending_delta_v(&self) -> Vector3D {
        self.delta_v
    }

    /// Above its melting point, i.e. eligible for a merge.
    pub fn is_molten(&self) -> bool {
        self.temperature > self.melting_point
    }
}

/// Drawable object: exactly one `PhysicsBody`, a local-space shape and a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) id: BodyId, // overwritten by `Universe::insert`
    pub physics: PhysicsBody,
    pub shape: Vec<Vector3D>,
    pub color: Rgba,
}

impl Body {
    pub fn new(physics: PhysicsBody) -> Self {
        Self {
            id: BodyId(0),
            physics,
            shape: vec![Vector3D::zeros()],
            color: Rgba::WHITE,
        }
    }

    /// Id assigned by the owning `Universe`
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn with_shape(mut self, shape: Vec<Vector3D>) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Shape points placed in world space: scaled by `physics.scale`
    /// and translated to `physics.position`.
    pub fn world_shape(&self) -> Vec<Vector3D> {
        self.shape
            .iter()
            .map(|p| self.physics.position + p * self.physics.scale)
            .collect()
    }
}
