//! Collision detection and merge resolution
//!
//! Two bodies collide when their centres are no further apart than the sum
//! of their scales. A collision only turns into a merge when both bodies are
//! molten (`temperature > melting_point`); otherwise nothing happens and the
//! bodies keep attracting each other, passing through.
//!
//! A merge is inelastic and purely additive: the survivor gains the loser's
//! mass and scale, its position and velocity are left untouched.

use super::states::PhysicsBody;

/// Which side of an ordered pair survives a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The first body of the pair absorbs the second
    FirstSurvives,
    /// The second body absorbs the first. Also the equal-mass tie-break.
    SecondSurvives,
}

/// True if the two bodies overlap given their positions and scales
pub fn overlaps(a: &PhysicsBody, b: &PhysicsBody) -> bool {
    (b.position - a.position).norm() <= a.scale + b.scale
}

/// Decide the merge for a colliding ordered pair, `None` if the melting
/// point gate fails for either body.
pub fn merge_outcome(first: &PhysicsBody, second: &PhysicsBody) -> Option<MergeOutcome> {
    if !(first.is_molten() && second.is_molten()) {
        return None;
    }

    if first.mass > second.mass {
        Some(MergeOutcome::FirstSurvives)
    } else {
        Some(MergeOutcome::SecondSurvives)
    }
}

/// Fold `loser` into `survivor`: mass and scale are summed.
pub fn absorb(survivor: &mut PhysicsBody, loser: &PhysicsBody) {
    survivor.scale += loser.scale;
    survivor.mass += loser.mass;
}
