//! Color primitives: RGBA color, color ramps, and the output pixel buffer.

use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// 8-bit RGBA bytes for image encoding. Components are clamped.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Component-wise linear blend, `t = 0` returns `self`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let l = |a: f32, b: f32| a + (b - a) * t;
        Self::new(
            l(self.r, other.r),
            l(self.g, other.g),
            l(self.b, other.b),
            l(self.a, other.a),
        )
    }
}

/// Named, ordered palette mapping scalar position to color.
///
/// Index 0 represents the low end of the value range, index `len - 1` the
/// high end. Read-only after load; safe to share across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRamp {
    name: String,
    colors: Vec<Rgba>,
}

impl ColorRamp {
    /// Create a ramp. Empty ramps are not representable; callers validate
    /// at load time and this constructor enforces it.
    pub fn new(name: impl Into<String>, colors: Vec<Rgba>) -> Result<Self, crate::ReplayError> {
        let name = name.into();
        if colors.is_empty() {
            return Err(crate::ReplayError::config_validation(
                format!("ramp '{name}'"),
                "color ramp must contain at least one color",
            ));
        }
        Ok(Self { name, colors })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, clamped to the last entry.
    pub fn color_at(&self, index: usize) -> Rgba {
        self.colors[index.min(self.colors.len() - 1)]
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

/// Flat row-major RGBA output of the pipeline, `index = x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        assert_eq!(pixels.len(), width * height, "pixel buffer size mismatch");
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[x + y * self.width]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Flat RGBA8 byte buffer for image encoding.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_rgba8());
        }
        bytes
    }
}
