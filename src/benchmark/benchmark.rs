use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, PhysicsBody};
use crate::simulation::universe::Universe;
use crate::visualization::camera::Camera;
use crate::visualization::frame::Simulation;
use crate::visualization::surface::RecordingSurface;

/// Helper to build a universe of `n` solid bodies on a deterministic spiral
/// (no merges, so every tick costs the full n^2)
pub fn make_universe(n: usize) -> Universe {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let mut physics = PhysicsBody::new();
            physics.set_position(
                (i_f * 0.37).sin() * 500.0,
                (i_f * 0.13).cos() * 500.0,
                (i_f * 0.07).sin() * 500.0,
            );
            physics.set_mass(1.0);
            physics.set_scale(0.01);
            Body::new(physics)
        })
        .collect()
}

/// Time the bare scheduler tick for a range of n
pub fn bench_tick() {
    let ns = [100, 200, 400, 800, 1600];
    let steps = 5;
    let dt = Parameters::default().dt();

    for n in ns {
        let mut universe = make_universe(n);

        // Warm up
        universe.tick(dt, |_| {});

        let t0 = Instant::now();
        for _ in 0..steps {
            universe.tick(dt, |_| {});
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, tick = {:8.6} s", per_tick);
    }
}

/// Time whole frames (tick + projection + draw calls) for a range of n.
/// Paste output directly into a spreadsheet to graph
pub fn bench_frame_curve() {
    println!("N,frame_ms");

    for n in (100..=1600).step_by(100) {
        let steps = if n <= 800 { 5 } else { 1 };

        let camera = Camera::new(800, 600);
        let mut simulation = Simulation::new(make_universe(n), camera, Parameters::default());
        let mut surface = RecordingSurface::new();

        let t0 = Instant::now();
        for _ in 0..steps {
            surface.clear();
            simulation.tick(&mut surface);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
