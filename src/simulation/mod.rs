pub mod states;
pub mod vector;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod universe;
pub mod scenario;
