//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - tick rate (`timestep_hz`, dt = 1 / timestep_hz),
//! - softening and gravitational constant (`eps2`, `g`)

/// Default tick rate, 10 kHz
pub const DEFAULT_TIMESTEP_HZ: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub timestep_hz: i64, // ticks per simulated second, always > 1
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timestep_hz: DEFAULT_TIMESTEP_HZ,
            g: 1.0,
            eps2: 1.0e-4,
        }
    }
}

impl Parameters {
    /// Step size of one tick
    pub fn dt(&self) -> f64 {
        1.0 / self.timestep_hz as f64
    }

    /// Nudge the tick rate. Ignored if the result would not stay above 1 Hz.
    pub fn increment_timestep(&mut self, increment: i64) {
        match self.timestep_hz.checked_add(increment) {
            Some(hz) if hz > 1 => self.timestep_hz = hz,
            _ => {}
        }
    }
}
