//! Uncompressed 24-bit BMP decoding (internal).
//!
//! Only single-plane, 24 bits per pixel, `BI_RGB` files are accepted.
//! Rows are always stored bottom-up in the resulting [`PixelBuffer`](crate::PixelBuffer),
//! whatever the sign of the height field.

mod decode;
mod header;

pub use header::{BitmapHeader, HEADER_SIZE};

pub(crate) use decode::{decode_bytes, decode_reader};
