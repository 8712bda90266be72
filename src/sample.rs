//! Nearest-pixel texture lookup with wraparound.

use glam::Vec2;

use crate::buffer::PixelBuffer;
use crate::transform::{Transform, texture_to_bitmap};

/// Wrap `x` into `[0, 1)`.
///
/// Non-finite input yields NaN, which [`sample`] resolves to index 0.
#[inline]
pub fn wrap_unit(x: f32) -> f32 {
    let w = x - x.floor();
    // tiny negative inputs round up to exactly 1.0
    if w >= 1.0 { 0.0 } else { w }
}

/// Round a bitmap coordinate to the nearest index in `0..extent`.
///
/// Ties round away from zero. Coordinates that round outside the bitmap
/// (a wrapped coordinate of 0 lands on -0.5) are clamped to the edge.
#[inline]
fn nearest_index(x: f32, extent: u32) -> usize {
    (x.round() as i64).clamp(0, i64::from(extent) - 1) as usize
}

/// Cached texture-to-bitmap lookup for one buffer.
#[derive(Clone, Copy, Debug)]
pub struct Sampler<'a> {
    buffer: &'a PixelBuffer,
    to_bitmap: Transform,
}

impl<'a> Sampler<'a> {
    pub fn new(buffer: &'a PixelBuffer) -> Self {
        Self {
            buffer,
            to_bitmap: texture_to_bitmap(buffer),
        }
    }

    /// Pixel index nearest to texture coordinate `(u, v)`, after wrapping.
    pub fn index(&self, u: f32, v: f32) -> (usize, usize) {
        let p = self
            .to_bitmap
            .apply_point(Vec2::new(wrap_unit(u), wrap_unit(v)));
        (
            nearest_index(p.x, self.buffer.width()),
            nearest_index(p.y, self.buffer.height()),
        )
    }

    /// Stored channel triple nearest to `(u, v)`, in on-disk channel order.
    pub fn sample(&self, u: f32, v: f32) -> [u8; 3] {
        let (i, j) = self.index(u, v);
        self.buffer.pixel(i, j)
    }

    #[cfg(feature = "rgb")]
    pub fn sample_rgb(&self, u: f32, v: f32) -> rgb::RGB8 {
        let [r, g, b] = self.sample(u, v);
        rgb::RGB8::new(r, g, b)
    }
}

/// Color of the pixel in `buffer` nearest to texture coordinate `(u, v)`.
///
/// Texture space repeats with period 1 in both axes. Use [`Sampler`] for
/// many lookups against the same buffer.
pub fn sample(buffer: &PixelBuffer, u: f32, v: f32) -> [u8; 3] {
    Sampler::new(buffer).sample(u, v)
}

/// [`sample`] as a typed pixel.
#[cfg(feature = "rgb")]
pub fn sample_rgb(buffer: &PixelBuffer, u: f32, v: f32) -> rgb::RGB8 {
    Sampler::new(buffer).sample_rgb(u, v)
}
