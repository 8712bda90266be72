use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp;
use crate::buffer::PixelBuffer;
use crate::channel::ChannelFix;
use crate::error::TextureError;
use crate::limits::Limits;

/// Decode options for BMP input from memory, a stream, or a file.
///
/// ```no_run
/// use zentexture::{ChannelFix, DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(4096 * 4096), ..Default::default() };
/// let buffer = DecodeRequest::new()
///     .with_limits(&limits)
///     .with_channel_fix(ChannelFix::AllPixels)
///     .decode_file("brick.bmp", Unstoppable)?;
/// println!("{}x{}", buffer.width(), buffer.height());
/// # Ok::<(), zentexture::TextureError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeRequest<'a> {
    limits: Option<&'a Limits>,
    channel_fix: ChannelFix,
}

impl<'a> DecodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Channel order correction applied after reading. Defaults to
    /// [`ChannelFix::FirstPixel`].
    pub fn with_channel_fix(mut self, channel_fix: ChannelFix) -> Self {
        self.channel_fix = channel_fix;
        self
    }

    /// Decode a complete BMP file held in memory.
    pub fn decode(&self, data: &[u8], stop: impl Stop) -> Result<PixelBuffer, TextureError> {
        bmp::decode_bytes(data, self.limits, self.channel_fix, &stop)
    }

    /// Decode from a seekable stream. The stream is consumed and dropped
    /// before returning, on success and on error.
    pub fn decode_reader<R: Read + Seek>(
        &self,
        reader: R,
        stop: impl Stop,
    ) -> Result<PixelBuffer, TextureError> {
        bmp::decode_reader(reader, self.limits, self.channel_fix, &stop)
    }

    /// Open and decode the file at `path`.
    pub fn decode_file(
        &self,
        path: impl AsRef<Path>,
        stop: impl Stop,
    ) -> Result<PixelBuffer, TextureError> {
        let path = path.as_ref();
        log::debug!("decoding {}", path.display());
        let file = File::open(path)?;
        self.decode_reader(BufReader::new(file), stop)
    }
}

impl PixelBuffer {
    /// Decode the BMP file at `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        DecodeRequest::new().decode_file(path, Unstoppable)
    }
}

/// Decode BMP bytes with default options.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<PixelBuffer, TextureError> {
    DecodeRequest::new().decode(data, stop)
}

/// Decode the BMP file at `path` with default options.
pub fn decode_bmp_file(path: impl AsRef<Path>) -> Result<PixelBuffer, TextureError> {
    PixelBuffer::open(path)
}
