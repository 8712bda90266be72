//! 24-bit uncompressed BMP pixel data decoding.

use alloc::vec::Vec;
use std::io::{self, Read, Seek, SeekFrom};

use enough::Stop;

use super::header::{BitmapHeader, HEADER_SIZE};
use crate::buffer::PixelBuffer;
use crate::channel::ChannelFix;
use crate::error::TextureError;
use crate::limits::Limits;

fn finish(
    header: &BitmapHeader,
    pixels: Vec<u8>,
    channel_fix: ChannelFix,
    stop: &dyn Stop,
) -> Result<PixelBuffer, TextureError> {
    let mut buffer = PixelBuffer::from_raw(header.width, header.height, header.stride, pixels)?;
    stop.check()?;
    channel_fix.apply(&mut buffer, stop)?;
    log::trace!("applied channel fix {channel_fix:?}");
    Ok(buffer)
}

/// Decode a complete BMP file held in memory.
pub(crate) fn decode_bytes(
    data: &[u8],
    limits: Option<&Limits>,
    channel_fix: ChannelFix,
    stop: &dyn Stop,
) -> Result<PixelBuffer, TextureError> {
    let header = BitmapHeader::parse(data)?;
    if let Some(limits) = limits {
        limits.check_header(&header)?;
    }
    stop.check()?;

    let range = header.data_range();
    let pixels = data
        .get(range.clone())
        .ok_or(TextureError::TruncatedPixelData {
            needed: header.data_size,
            actual: data.len().saturating_sub(range.start),
        })?;
    log::trace!("read {} pixel bytes from offset {}", pixels.len(), range.start);

    finish(&header, pixels.to_vec(), channel_fix, stop)
}

/// Decode a BMP from a seekable stream.
///
/// Reads the header, seeks to the pixel data and reads exactly
/// `data_size` bytes. The pixel vector grows with the bytes actually read,
/// so a header that overstates its data size fails without a large
/// up-front allocation.
pub(crate) fn decode_reader<R: Read + Seek>(
    mut reader: R,
    limits: Option<&Limits>,
    channel_fix: ChannelFix,
    stop: &dyn Stop,
) -> Result<PixelBuffer, TextureError> {
    let mut raw = [0u8; HEADER_SIZE];
    reader.read_exact(&mut raw).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => TextureError::TruncatedHeader,
        _ => TextureError::Io(e),
    })?;
    let header = BitmapHeader::from_bytes(&raw)?;
    if let Some(limits) = limits {
        limits.check_header(&header)?;
    }
    stop.check()?;

    reader.seek(SeekFrom::Start(u64::from(header.data_offset)))?;
    let mut pixels = Vec::new();
    reader
        .by_ref()
        .take(header.data_size as u64)
        .read_to_end(&mut pixels)?;
    if pixels.len() < header.data_size {
        return Err(TextureError::TruncatedPixelData {
            needed: header.data_size,
            actual: pixels.len(),
        });
    }
    log::trace!(
        "read {} pixel bytes from offset {}",
        pixels.len(),
        header.data_offset
    );

    finish(&header, pixels, channel_fix, stop)
}
