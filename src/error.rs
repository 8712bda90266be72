use alloc::string::String;
use enough::StopReason;

/// Errors from bitmap decoding and buffer construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TextureError {
    #[error("not a bitmap: missing \"BM\" signature")]
    NotABitmap,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("truncated header: need 54 bytes")]
    TruncatedHeader,

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl TextureError {
    /// Whether the input itself was rejected, as opposed to an I/O failure
    /// or cancellation.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, TextureError::Io(_) | TextureError::Cancelled(_))
    }
}

impl From<StopReason> for TextureError {
    fn from(r: StopReason) -> Self {
        TextureError::Cancelled(r)
    }
}
