//! Drawing collaborator seam
//!
//! The core never draws itself. Once per surviving body per frame it calls
//! [`DrawSurface::draw_circle`] with screen coordinates, a radius and a color.
//! Backends (window, canvas, terminal) implement the trait.

/// RGBA color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// From `[r, g, b]` or `[r, g, b, a]`; missing alpha is opaque, anything
    /// else is `None`.
    pub fn from_slice(channels: &[f32]) -> Option<Self> {
        match *channels {
            [r, g, b] => Some(Self::from_rgb(r, g, b)),
            [r, g, b, a] => Some(Self { r, g, b, a }),
            _ => None,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

pub trait DrawSurface {
    /// Draw a filled circle centred at `centre` (screen pixels)
    fn draw_circle(&mut self, centre: (f64, f64), radius: f64, color: Rgba);
}

/// One recorded `draw_circle` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub centre: (f64, f64),
    pub radius: f64,
    pub color: Rgba,
}

/// Surface that just keeps every call, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_circle(&mut self, centre: (f64, f64), radius: f64, color: Rgba) {
        self.calls.push(DrawCall { centre, radius, color });
    }
}
