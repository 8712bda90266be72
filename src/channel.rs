//! Channel order correction between on-disk (BGR) and in-memory (RGB) triples.

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::TextureError;
use crate::stride::BYTES_PER_PIXEL;

/// How the decoder corrects channel order after reading pixel data.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelFix {
    /// Swap the first and third byte of pixel (0, 0) only. Every other
    /// pixel keeps its on-disk order. This is the historical decoder output
    /// and the default.
    #[default]
    FirstPixel,
    /// Swap the first and third byte of every pixel. Row padding is untouched.
    AllPixels,
    /// Leave all bytes in on-disk order.
    None,
}

/// Swap bytes 0 and 2 of the buffer: the red/blue channels of pixel (0, 0).
pub fn swap_channel_order(buffer: &mut PixelBuffer) {
    buffer.data_mut().swap(0, 2);
}

/// Swap the first and third channel of every pixel.
pub fn swap_all_channels(buffer: &mut PixelBuffer, stop: &dyn Stop) -> Result<(), TextureError> {
    let row_bytes = buffer.width() as usize * BYTES_PER_PIXEL;
    let stride = buffer.stride();
    for (row_idx, row) in buffer.data_mut().chunks_exact_mut(stride).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row[..row_bytes].chunks_exact_mut(BYTES_PER_PIXEL) {
            px.swap(0, 2);
        }
    }
    Ok(())
}

impl ChannelFix {
    pub(crate) fn apply(
        self,
        buffer: &mut PixelBuffer,
        stop: &dyn Stop,
    ) -> Result<(), TextureError> {
        match self {
            ChannelFix::FirstPixel => {
                swap_channel_order(buffer);
                Ok(())
            }
            ChannelFix::AllPixels => swap_all_channels(buffer, stop),
            ChannelFix::None => Ok(()),
        }
    }
}
