use crate::bmp::BitmapHeader;
use crate::error::TextureError;

/// Resource limits applied to a validated header before pixel data is read.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the pixel buffer in bytes, row padding included.
    pub max_memory_bytes: Option<u64>,
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), TextureError> {
    match limit {
        Some(max) if value > max => Err(TextureError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check dimensions and buffer size of a parsed header.
    pub(crate) fn check_header(&self, header: &BitmapHeader) -> Result<(), TextureError> {
        let (width, height) = (u64::from(header.width), u64::from(header.height));
        exceeds("width", width, self.max_width)?;
        exceeds("height", height, self.max_height)?;
        exceeds("pixel count", width * height, self.max_pixels)?;
        let bytes = (header.stride as u64).saturating_mul(height);
        exceeds("buffer size", bytes, self.max_memory_bytes)
    }
}
