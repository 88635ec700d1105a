//! The live set and the per-tick O(n²) scheduler
//!
//! `Universe` exclusively owns the bodies. A tick visits every ordered pair
//! (i, j) of live bodies in collection order, accumulates forces on body i,
//! and resolves merges on the spot. Removal happens while iterating; both
//! cursors are adjusted so that every body still in the list is processed
//! exactly once as the outer body (process-what-remains, no snapshot).
//!
//! Consequences that are part of the behavior:
//! - a body removed mid-tick may already have accumulated forces from
//!   earlier pairs; they are dropped with it
//! - bodies earlier in the list are integrated before later bodies compute
//!   their interactions, so later bodies see updated positions
//! - an outer body that loses a merge is neither integrated nor emitted

use super::collisions::{absorb, merge_outcome, MergeOutcome};
use super::forces::ForceSet;
use super::states::{Body, BodyId};

/// Summary of one scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub merges: usize, // bodies removed by merges this tick
    pub live: usize, // bodies left after the tick
}

pub struct Universe {
    bodies: Vec<Body>,
    forces: ForceSet,
    next_id: u32,
}

impl Universe {
    pub fn new(forces: ForceSet) -> Self {
        Self {
            bodies: Vec::new(),
            forces,
            next_id: 0,
        }
    }

    /// Take ownership of `body`, assigning it a fresh id
    pub fn insert(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Live bodies in collection order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.physics.mass).sum()
    }

    pub fn forces(&self) -> &ForceSet {
        &self.forces
    }

    /// Advance every live body by `dt`, calling `emit` for each survivor
    /// right after it is integrated.
    pub fn tick<F>(&mut self, dt: f64, mut emit: F) -> TickReport
    where
        F: FnMut(&Body),
    {
        let mut merges = 0;
        let mut i = 0;

        'outer: while i < self.bodies.len() {
            let mut j = 0;

            while j < self.bodies.len() {
                if self.bodies[i].id == self.bodies[j].id {
                    j += 1;
                    continue;
                }

                let other = self.bodies[j].physics;
                let result = self.bodies[i].physics.apply_forces(&other, dt, &self.forces);

                if result.collision {
                    match merge_outcome(&self.bodies[i].physics, &other) {
                        Some(MergeOutcome::FirstSurvives) => {
                            absorb(&mut self.bodies[i].physics, &other);
                            self.bodies.remove(j);
                            merges += 1;
                            if j < i {
                                i -= 1;
                            }
                            // j now names the body after the removed one
                            continue;
                        }
                        Some(MergeOutcome::SecondSurvives) => {
                            let loser = self.bodies.remove(i);
                            merges += 1;
                            let survivor = if j > i { j - 1 } else { j };
                            absorb(&mut self.bodies[survivor].physics, &loser.physics);
                            // i now names the next body; the loser is not integrated
                            continue 'outer;
                        }
                        None => {}
                    }
                }

                j += 1;
            }

            let body = &mut self.bodies[i];
            body.physics.update(dt);
            emit(&*body);
            i += 1;
        }

        TickReport {
            merges,
            live: self.bodies.len(),
        }
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(ForceSet::default())
    }
}

impl FromIterator<Body> for Universe {
    fn from_iter<T: IntoIterator<Item = Body>>(iter: T) -> Self {
        let mut universe = Universe::default();
        for body in iter {
            universe.insert(body);
        }
        universe
    }
}
