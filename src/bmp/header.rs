//! Fixed 54-byte BMP header: 14-byte file header plus 40-byte info header.

use crate::error::TextureError;
use crate::stride::{BYTES_PER_PIXEL, checked_stride};

/// Size of the file header and `BITMAPINFOHEADER` combined.
pub const HEADER_SIZE: usize = 54;

const SIGNATURE: &[u8; 2] = b"BM";
const OFF_DATA_OFFSET: usize = 10;
const OFF_WIDTH: usize = 18;
const OFF_HEIGHT: usize = 22;
const OFF_PLANES: usize = 26;
const OFF_BPP: usize = 28;
const OFF_COMPRESSION: usize = 30;
const OFF_DATA_SIZE: usize = 34;

#[inline]
fn u16_le(h: &[u8; HEADER_SIZE], off: usize) -> u16 {
    u16::from_le_bytes([h[off], h[off + 1]])
}

#[inline]
fn u32_le(h: &[u8; HEADER_SIZE], off: usize) -> u32 {
    u32::from_le_bytes([h[off], h[off + 1], h[off + 2], h[off + 3]])
}

#[inline]
fn i32_le(h: &[u8; HEADER_SIZE], off: usize) -> i32 {
    i32::from_le_bytes([h[off], h[off + 1], h[off + 2], h[off + 3]])
}

/// Validated header of an uncompressed 24-bit bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    pub width: u32,
    /// Absolute value of the stored height.
    pub height: u32,
    /// Stored height; negative means the file claims top-down rows.
    pub raw_height: i32,
    /// Byte offset of the pixel data from the start of the file.
    pub data_offset: u32,
    /// Number of pixel data bytes to read.
    pub data_size: usize,
    /// Bytes per row, derived as `data_size / height`.
    pub stride: usize,
}

impl BitmapHeader {
    /// Parse and validate the first [`HEADER_SIZE`] bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, TextureError> {
        let h: &[u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|h| h.try_into().ok())
            .ok_or(TextureError::TruncatedHeader)?;
        Self::from_bytes(h)
    }

    /// Validation runs in a fixed order and the first failure wins:
    /// signature, plane count, bit depth, compression, then dimensions.
    pub fn from_bytes(h: &[u8; HEADER_SIZE]) -> Result<Self, TextureError> {
        if &h[..2] != SIGNATURE {
            return Err(TextureError::NotABitmap);
        }

        let planes = u16_le(h, OFF_PLANES);
        if planes != 1 {
            return Err(TextureError::InvalidHeader(alloc::format!(
                "BMP planes field is {planes}, expected 1"
            )));
        }

        let bpp = u16_le(h, OFF_BPP);
        if bpp != 24 {
            return Err(TextureError::UnsupportedVariant(alloc::format!(
                "BMP bit depth {bpp} unsupported, expected 24"
            )));
        }

        let compression = u32_le(h, OFF_COMPRESSION);
        if compression != 0 {
            return Err(TextureError::UnsupportedVariant(alloc::format!(
                "BMP compression {compression} unsupported, expected 0 (uncompressed)"
            )));
        }

        let raw_width = i32_le(h, OFF_WIDTH);
        let raw_height = i32_le(h, OFF_HEIGHT);
        let mut data_size = u32_le(h, OFF_DATA_SIZE) as usize;
        let data_offset = u32_le(h, OFF_DATA_OFFSET);

        if raw_width <= 0 {
            return Err(TextureError::InvalidHeader(alloc::format!(
                "BMP width is {raw_width}, expected a positive value"
            )));
        }
        let width = raw_width as u32;
        let height = raw_height.unsigned_abs();
        if height == 0 {
            return Err(TextureError::InvalidHeader("BMP height is zero".into()));
        }
        if raw_height < 0 {
            log::warn!("top-down BMP (height {raw_height}); rows are read bottom-up");
        }

        let stride = if data_size == 0 {
            // Uncompressed bitmaps may leave the image size field zero.
            let stride =
                checked_stride(width).ok_or(TextureError::DimensionsTooLarge { width, height })?;
            data_size = stride
                .checked_mul(height as usize)
                .ok_or(TextureError::DimensionsTooLarge { width, height })?;
            log::warn!("BMP image size field is zero, assuming stride {stride}");
            stride
        } else {
            if data_size % height as usize != 0 {
                log::warn!(
                    "BMP image size {data_size} is not a multiple of height {height}; \
                     trailing bytes are ignored"
                );
            }
            data_size / height as usize
        };

        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(TextureError::DimensionsTooLarge { width, height })?;
        if stride < row_bytes {
            return Err(TextureError::InvalidHeader(alloc::format!(
                "BMP row stride {stride} is smaller than {row_bytes} bytes for width {width}"
            )));
        }

        if (data_offset as usize) < HEADER_SIZE {
            log::warn!("BMP pixel data offset {data_offset} overlaps the header");
        }

        log::debug!(
            "BMP header: {width}x{height}, stride {stride}, {data_size} bytes at offset {data_offset}"
        );

        Ok(Self {
            width,
            height,
            raw_height,
            data_offset,
            data_size,
            stride,
        })
    }

    /// Whether the stored height was negative. Informational only.
    pub fn is_top_down(&self) -> bool {
        self.raw_height < 0
    }

    /// Byte range of the pixel data within the file.
    pub fn data_range(&self) -> core::ops::Range<usize> {
        let start = self.data_offset as usize;
        start..start.saturating_add(self.data_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: i32, height: i32, data_size: u32) -> [u8; HEADER_SIZE] {
        let mut h = [0u8; HEADER_SIZE];
        h[0] = b'B';
        h[1] = b'M';
        h[10..14].copy_from_slice(&54u32.to_le_bytes());
        h[14..18].copy_from_slice(&40u32.to_le_bytes());
        h[18..22].copy_from_slice(&width.to_le_bytes());
        h[22..26].copy_from_slice(&height.to_le_bytes());
        h[26..28].copy_from_slice(&1u16.to_le_bytes());
        h[28..30].copy_from_slice(&24u16.to_le_bytes());
        h[34..38].copy_from_slice(&data_size.to_le_bytes());
        h
    }

    #[test]
    fn parses_fields() {
        let h = BitmapHeader::from_bytes(&header(3, 2, 24)).unwrap();
        assert_eq!(h.width, 3);
        assert_eq!(h.height, 2);
        assert_eq!(h.stride, 12);
        assert_eq!(h.data_size, 24);
        assert_eq!(h.data_offset, 54);
        assert_eq!(h.data_range(), 54..78);
        assert!(!h.is_top_down());
    }

    #[test]
    fn negative_height_is_absolute() {
        let h = BitmapHeader::from_bytes(&header(3, -2, 24)).unwrap();
        assert_eq!(h.height, 2);
        assert_eq!(h.raw_height, -2);
        assert!(h.is_top_down());
    }

    #[test]
    fn stride_from_data_size() {
        // encoder padded rows to 16 bytes instead of 12
        let h = BitmapHeader::from_bytes(&header(3, 2, 32)).unwrap();
        assert_eq!(h.stride, 16);
    }

    #[test]
    fn zero_data_size_falls_back_to_computed_stride() {
        let h = BitmapHeader::from_bytes(&header(5, 3, 0)).unwrap();
        assert_eq!(h.stride, 16);
        assert_eq!(h.data_size, 48);
    }

    #[test]
    fn validation_order() {
        // bad signature wins over everything else
        let mut h = header(3, 2, 24);
        h[0] = b'X';
        h[26] = 2;
        h[28] = 8;
        assert!(matches!(
            BitmapHeader::from_bytes(&h),
            Err(TextureError::NotABitmap)
        ));

        // planes checked before bit depth
        let mut h = header(3, 2, 24);
        h[26] = 2;
        h[28] = 8;
        assert!(matches!(
            BitmapHeader::from_bytes(&h),
            Err(TextureError::InvalidHeader(_))
        ));

        // bit depth before compression
        let mut h = header(3, 2, 24);
        h[28] = 32;
        h[30] = 1;
        let err = BitmapHeader::from_bytes(&h).unwrap_err();
        assert!(err.to_string().contains("bit depth 32"));

        let mut h = header(3, 2, 24);
        h[30] = 1;
        let err = BitmapHeader::from_bytes(&h).unwrap_err();
        assert!(err.to_string().contains("compression 1"));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(BitmapHeader::from_bytes(&header(0, 2, 24)).is_err());
        assert!(BitmapHeader::from_bytes(&header(-3, 2, 24)).is_err());
        assert!(BitmapHeader::from_bytes(&header(3, 0, 24)).is_err());
        // 8 bytes per row cannot hold 3 pixels
        assert!(matches!(
            BitmapHeader::from_bytes(&header(3, 2, 16)),
            Err(TextureError::InvalidHeader(_))
        ));
    }

    #[test]
    fn short_input() {
        assert!(matches!(
            BitmapHeader::parse(b"BM\x00\x00"),
            Err(TextureError::TruncatedHeader)
        ));
        assert!(matches!(
            BitmapHeader::parse(&[]),
            Err(TextureError::TruncatedHeader)
        ));
    }
}
