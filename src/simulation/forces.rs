//! Pairwise force / acceleration contributors for the n-body engine
//!
//! A [`ForceSet`] holds boxed [`PairForce`] terms. For an ordered pair
//! (body, other) each term returns the acceleration `other` induces on
//! `body`; the set sums them.

use crate::simulation::states::{PhysicsBody, Vector3D};

/// Trait for acceleration sources acting between two bodies
pub trait PairForce {
    /// Acceleration induced on `body` by `other`
    fn acceleration(&self, body: &PhysicsBody, other: &PhysicsBody) -> Vector3D;
}

/// Collection of pairwise acceleration terms (gravity, drag, etc.)
/// Contributions of all terms are summed per pair
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl PairForce + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration on `body` due to `other`
    pub fn accumulate_accel(&self, body: &PhysicsBody, other: &PhysicsBody) -> Vector3D {
        self.terms
            .iter()
            .fold(Vector3D::zeros(), |acc, term| acc + term.acceleration(body, other))
    }
}

impl Default for ForceSet {
    /// Softened Newtonian gravity with `G = 1`
    fn default() -> Self {
        Self::new().with(NewtonianGravity::default())
    }
}

/// Newtonian gravity with Plummer softening
///
/// a = G * m_other * r / (|r|^2 + eps2)^(3/2), r = other.position - body.position
///
/// If the softened squared distance is exactly zero (coincident bodies and
/// `eps2 == 0`) the term contributes nothing instead of producing NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: 1.0, eps2: 1.0e-4 }
    }
}

impl PairForce for NewtonianGravity {
    fn acceleration(&self, body: &PhysicsBody, other: &PhysicsBody) -> Vector3D {
        // r points from body toward other, so the pull is along +r
        let r = other.position - body.position;
        let d2 = r.norm_squared() + self.eps2;
        if d2 <= 0.0 {
            return Vector3D::zeros();
        }

        let inv_r = d2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        r * (self.g * other.mass * inv_r3)
    }
}
