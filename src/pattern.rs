//! Procedural ring test pattern.
//!
//! Each pixel is colored from its texture coordinate `(u, v)` and its squared
//! distance `r` from the texture center `(0.5, 0.5)`:
//!
//! | region              | triple                                   |
//! |---------------------|------------------------------------------|
//! | `r > 0.16`          | `(100 + 155u, 0, 100 + 155v)`            |
//! | `r < 0.09`          | `(100 + 155v, 0, 100 + 155u)`            |
//! | `0.09 <= r <= 0.16` | `(0, 255, 0)`                            |

use alloc::vec;

use enough::{Stop, Unstoppable};
use glam::Vec2;

use crate::buffer::PixelBuffer;
use crate::error::TextureError;
use crate::stride::checked_stride;
use crate::transform::bitmap_to_texture;

const OUTER_RADIUS_SQ: f32 = 0.16;
const INNER_RADIUS_SQ: f32 = 0.09;
const RING: [u8; 3] = [0, 255, 0];

#[inline]
fn gradient(t: f32) -> u8 {
    (100.0 + 155.0 * t).round() as u8
}

/// Color of the ring pattern at texture coordinate `(u, v)`.
pub fn ring_color(u: f32, v: f32) -> [u8; 3] {
    let r = (u - 0.5) * (u - 0.5) + (v - 0.5) * (v - 0.5);
    if r > OUTER_RADIUS_SQ {
        [gradient(u), 0, gradient(v)]
    } else if r < INNER_RADIUS_SQ {
        [gradient(v), 0, gradient(u)]
    } else {
        RING
    }
}

impl PixelBuffer {
    /// Generate a `width` x `height` ring pattern.
    pub fn procedural(width: u32, height: u32) -> Result<Self, TextureError> {
        Self::procedural_with_stop(width, height, &Unstoppable)
    }

    /// [`procedural`](Self::procedural) with cancellation.
    pub fn procedural_with_stop(
        width: u32,
        height: u32,
        stop: &dyn Stop,
    ) -> Result<Self, TextureError> {
        let stride =
            checked_stride(width).ok_or(TextureError::DimensionsTooLarge { width, height })?;
        let size = stride
            .checked_mul(height as usize)
            .ok_or(TextureError::DimensionsTooLarge { width, height })?;
        stop.check()?;

        let mut buffer = PixelBuffer::from_raw(width, height, stride, vec![0u8; size])?;
        let to_texture = bitmap_to_texture(&buffer);
        log::debug!("generating {width}x{height} ring pattern, stride {stride}");

        for j in 0..height as usize {
            if j % 16 == 0 {
                stop.check()?;
            }
            for i in 0..width as usize {
                let uv = to_texture.apply_point(Vec2::new(i as f32, j as f32));
                let off = buffer.offset(i, j);
                buffer.data_mut()[off..off + 3].copy_from_slice(&ring_color(uv.x, uv.y));
            }
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions() {
        assert_eq!(ring_color(0.05, 0.05), [108, 0, 108]);
        assert_eq!(ring_color(0.55, 0.45), [170, 0, 185]);
        assert_eq!(ring_color(0.15, 0.55), RING);
        assert_eq!(ring_color(0.95, 0.05), [247, 0, 108]);
    }

    #[test]
    fn ten_by_ten() {
        let buf = PixelBuffer::procedural(10, 10).unwrap();
        assert_eq!(buf.stride(), 32);
        assert_eq!(buf.data().len(), 320);
        // center pixel sits at (0.55, 0.55): inner disk
        assert_eq!(buf.pixel(5, 5), [185, 0, 185]);
        // corner pixel sits at (0.05, 0.05): outer ring
        assert_eq!(buf.pixel(0, 0), [108, 0, 108]);
        // (0.15, 0.55) lies in the annulus
        assert_eq!(buf.pixel(1, 5), RING);
        // outer region keeps u in the first channel, inner region swaps it
        assert_eq!(buf.pixel(9, 0), [247, 0, 108]);
        assert_eq!(buf.pixel(5, 4), [170, 0, 185]);
    }

    #[test]
    fn padding_left_zero() {
        let buf = PixelBuffer::procedural(1, 2).unwrap();
        assert_eq!(buf.data()[3], 0);
        assert_eq!(buf.data()[7], 0);
    }

    #[test]
    fn zero_size_rejected() {
        assert!(PixelBuffer::procedural(0, 4).is_err());
        assert!(PixelBuffer::procedural(4, 0).is_err());
    }
}
