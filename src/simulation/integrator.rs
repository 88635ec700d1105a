//! Per-body force accumulation and fixed-step integration
//!
//! One tick of a body is split in two halves:
//! - `apply_forces` once per other live body: queue `a * dt` into the
//!   body's velocity accumulator and report overlap
//! - `update` once at the end: kick the velocity, drift the position,
//!   clear the accumulator (semi-implicit Euler)

use super::collisions::overlaps;
use super::forces::ForceSet;
use super::states::{PairwiseResult, PhysicsBody, Vector3D};

impl PhysicsBody {
    /// Accumulate the acceleration `other` exerts on `self` over `dt`.
    /// Only `self` is mutated; the reaction on `other` is applied when the
    /// pair is visited the other way round.
    pub fn apply_forces(
        &mut self,
        other: &PhysicsBody,
        dt: f64,
        forces: &ForceSet,
    ) -> PairwiseResult {
        let a = forces.accumulate_accel(self, other);
        self.delta_v += a * dt;

        PairwiseResult {
            collision: overlaps(self, other),
        }
    }

    /// Integrate accumulated velocity change and advance the position by `dt`.
    pub fn update(&mut self, dt: f64) {
        // Kick: v_n+1 = v_n + sum(a_k * dt)
        self.velocity += self.delta_v;

        // Drift: x_n+1 = x_n + dt * v_n+1
        self.position += self.velocity * dt;

        self.delta_v = Vector3D::zeros();
    }
}
