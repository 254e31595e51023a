use std::io;

/// Result type for encode/inspect operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The encoder was asked for an image with a zero dimension.
    #[error("invalid dimensions {width}x{height}: width and height must be nonzero")]
    InvalidDimension { width: u32, height: u32 },

    /// The first 8 bytes of the input are not the PNG signature.
    #[error("input does not start with the PNG signature")]
    InvalidSignature,

    /// The stream ran out before an IHDR chunk appeared.
    #[error("no IHDR chunk found before end of stream")]
    NoHeaderFound,

    /// A chunk declared more bytes than the stream still holds.
    #[error("truncated chunk: {needed} bytes needed, {available} available")]
    TruncatedChunk { needed: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
