//! # zentexture
//!
//! Small-bitmap texture support: 24-bit BMP decoding, a procedural test
//! pattern, and the affine maps between bitmap pixel space and unit texture
//! space used for wraparound nearest-pixel sampling.
//!
//! ## Pixel storage
//!
//! A [`PixelBuffer`] stores rows bottom-up (row 0 is the bottom row), three
//! bytes per pixel, each row padded to a multiple of four bytes
//! ([`compute_stride`]). Decoded files keep the stride their encoder used.
//!
//! ## Coordinate spaces
//!
//! - Bitmap space: integer pixel indices `(i, j)`, origin at the bottom-left.
//! - Texture space: `(u, v)` with period 1 in each axis. Pixel `(i, j)` sits
//!   at `((i + 0.5) / width, (j + 0.5) / height)`.
//!
//! [`bitmap_to_texture`] and [`texture_to_bitmap`] are exact inverses.
//!
//! ## Channel order
//!
//! BMP stores pixels as BGR. The default decoder swaps the first and third
//! byte of pixel (0, 0) only, keeping output compatible with existing
//! consumers. [`ChannelFix::AllPixels`] swaps every pixel;
//! [`ChannelFix::None`] keeps on-disk order. Sampling never reorders channels.
//!
//! ## Non-Goals
//!
//! - Compressed, palettized, or non-24-bit BMP variants
//! - Encoding
//! - Filtering beyond nearest-pixel lookup
//!
//! ## Usage
//!
//! ```no_run
//! use zentexture::{PixelBuffer, Sampler, bitmap_to_texture};
//!
//! let texture = PixelBuffer::open("brick.bmp")?;
//! let sampler = Sampler::new(&texture);
//! let [r, g, b] = sampler.sample(1.25, -0.5); // wraps to (0.25, 0.5)
//!
//! let pattern = PixelBuffer::procedural(64, 64)?;
//! let center = bitmap_to_texture(&pattern).apply_point(zentexture::glam::Vec2::new(32.0, 32.0));
//! # let _ = (r, g, b, center);
//! # Ok::<(), zentexture::TextureError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod channel;
mod decode;
mod error;
mod limits;
mod pattern;
mod sample;
mod stride;
mod transform;

pub mod bmp;

// Re-exports
pub use buffer::PixelBuffer;
pub use channel::{ChannelFix, swap_all_channels, swap_channel_order};
pub use decode::{DecodeRequest, decode_bmp, decode_bmp_file};
pub use enough::{Stop, Unstoppable};
pub use error::TextureError;
pub use glam;
pub use limits::Limits;
pub use pattern::ring_color;
pub use sample::{Sampler, sample, wrap_unit};
pub use stride::{BYTES_PER_PIXEL, compute_stride};
pub use transform::{Transform, bitmap_to_texture, point, texture_to_bitmap, vector};

#[cfg(feature = "rgb")]
pub use sample::sample_rgb;
