//! Row alignment for 24-bit rows.

/// Bytes per stored pixel (one channel triple).
pub const BYTES_PER_PIXEL: usize = 3;

/// Row width in bytes for `width` 24-bit pixels, padded to a 4-byte boundary.
pub fn compute_stride(width: u32) -> usize {
    let row = width as usize * BYTES_PER_PIXEL;
    (row + 3) & !3
}

/// Like [`compute_stride`], but `None` on overflow.
pub(crate) fn checked_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}
