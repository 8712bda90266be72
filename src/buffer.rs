use alloc::vec::Vec;

use crate::error::TextureError;
use crate::stride::BYTES_PER_PIXEL;

/// Bottom-up 24-bit pixel storage with 4-byte-aligned rows.
///
/// Row 0 is the bottom row. Each row holds `width` channel triples followed
/// by `stride - width * 3` padding bytes whose value is unspecified.
///
/// Dimensions and stride are fixed once the buffer exists; pixel bytes can be
/// mutated through [`PixelBuffer::data_mut`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap existing row data.
    ///
    /// Fails when a dimension is zero, when `stride < width * 3`, or when
    /// `data` holds fewer than `stride * height` bytes. Extra trailing bytes
    /// are dropped.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: usize,
        mut data: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidHeader(alloc::format!(
                "zero dimension: {width}x{height}"
            )));
        }
        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(TextureError::DimensionsTooLarge { width, height })?;
        if stride < row_bytes {
            return Err(TextureError::InvalidHeader(alloc::format!(
                "stride {stride} is smaller than {row_bytes} bytes of pixels per row"
            )));
        }
        let needed = stride
            .checked_mul(height as usize)
            .ok_or(TextureError::DimensionsTooLarge { width, height })?;
        if data.len() < needed {
            return Err(TextureError::TruncatedPixelData {
                needed,
                actual: data.len(),
            });
        }
        data.truncate(needed);
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, padding included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw row storage, bottom row first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable row storage; dimensions and stride stay fixed.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take the row storage, padding included.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Byte index of pixel `(i, j)`: `stride * j + 3 * i`.
    ///
    /// No range check is done. Indexing [`data`](Self::data) with the result
    /// for `i >= width` or `j >= height` reads padding, another row, or panics.
    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        self.stride * j + BYTES_PER_PIXEL * i
    }

    /// [`offset`](Self::offset) for in-range coordinates only.
    pub fn checked_offset(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.width as usize && j < self.height as usize {
            Some(self.offset(i, j))
        } else {
            None
        }
    }

    /// Stored channel triple of pixel `(i, j)`.
    ///
    /// # Panics
    ///
    /// If `(i, j)` lies outside the buffer.
    pub fn pixel(&self, i: usize, j: usize) -> [u8; 3] {
        let Some(off) = self.checked_offset(i, j) else {
            panic!(
                "pixel ({i}, {j}) out of range for {}x{} buffer",
                self.width, self.height
            );
        };
        [self.data[off], self.data[off + 1], self.data[off + 2]]
    }

    /// Pixel bytes of each row without padding, bottom row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        self.data
            .chunks_exact(self.stride)
            .map(move |row| &row[..row_bytes])
    }

    /// Typed view of pixel `(i, j)`, channels in stored order.
    #[cfg(feature = "rgb")]
    pub fn pixel_rgb(&self, i: usize, j: usize) -> rgb::RGB8 {
        let [r, g, b] = self.pixel(i, j);
        rgb::RGB8::new(r, g, b)
    }

    /// Copy into a tightly packed [`imgref::ImgVec`], bottom row first.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        for row in self.rows() {
            pixels.extend(
                row.chunks_exact(BYTES_PER_PIXEL)
                    .map(|p| rgb::RGB8::new(p[0], p[1], p[2])),
            );
        }
        imgref::ImgVec::new(pixels, self.width as usize, self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::stride::compute_stride;

    fn numbered(width: u32, height: u32) -> PixelBuffer {
        let stride = compute_stride(width);
        let data = (0..stride * height as usize).map(|b| b as u8).collect();
        PixelBuffer::from_raw(width, height, stride, data).unwrap()
    }

    #[test]
    fn offset_steps() {
        let buf = numbered(5, 4);
        for j in 0..3 {
            for i in 0..4 {
                assert_eq!(buf.offset(i, j + 1) - buf.offset(i, j), buf.stride());
                assert_eq!(buf.offset(i + 1, j) - buf.offset(i, j), 3);
            }
        }
        assert_eq!(buf.offset(0, 0), 0);
        assert_eq!(buf.offset(2, 1), 16 + 6);
    }

    #[test]
    fn checked_offset_bounds() {
        let buf = numbered(3, 2);
        assert_eq!(buf.checked_offset(2, 1), Some(12 + 6));
        assert_eq!(buf.checked_offset(3, 0), None);
        assert_eq!(buf.checked_offset(0, 2), None);
    }

    #[test]
    fn pixel_reads_triple() {
        let buf = numbered(3, 2);
        assert_eq!(buf.pixel(1, 1), [15, 16, 17]);
    }

    #[test]
    #[should_panic]
    fn pixel_out_of_range_panics() {
        numbered(3, 2).pixel(3, 0);
    }

    #[test]
    fn rows_strip_padding() {
        let buf = numbered(1, 3);
        let rows: Vec<&[u8]> = buf.rows().collect();
        assert_eq!(rows, vec![&[0u8, 1, 2][..], &[4, 5, 6][..], &[8, 9, 10][..]]);
    }

    #[test]
    fn from_raw_rejects_short_stride() {
        let err = PixelBuffer::from_raw(4, 1, 8, vec![0; 8]).unwrap_err();
        assert!(matches!(err, TextureError::InvalidHeader(_)));
    }

    #[test]
    fn from_raw_rejects_short_data() {
        let err = PixelBuffer::from_raw(2, 2, 8, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            TextureError::TruncatedPixelData {
                needed: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn from_raw_rejects_zero_dimension() {
        assert!(PixelBuffer::from_raw(0, 2, 4, vec![0; 8]).is_err());
        assert!(PixelBuffer::from_raw(1, 0, 4, vec![]).is_err());
    }

    #[test]
    fn from_raw_drops_trailing_bytes() {
        let buf = PixelBuffer::from_raw(1, 1, 4, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf.data(), &[1, 2, 3, 4]);
        assert_eq!(buf.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn data_mut_edits_in_place() {
        let mut buf = numbered(2, 1);
        let off = buf.offset(1, 0);
        buf.data_mut()[off] = 200;
        assert_eq!(buf.pixel(1, 0), [200, 4, 5]);
        assert_eq!(buf.stride(), 8);
        assert_eq!(buf.into_vec().len(), 8);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgvec_export_is_packed() {
        let buf = numbered(1, 2);
        let img = buf.to_imgvec();
        assert_eq!(img.width(), 1);
        assert_eq!(img.height(), 2);
        assert_eq!(img.buf()[1], rgb::RGB8::new(4, 5, 6));
    }
}
