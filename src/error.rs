//! Error taxonomy for the codec, container, raster and batch layers.
//!
//! A single enum, in the style of `lz4r::frame::types::Lz4FError`: every
//! fallible operation in this crate returns `Result<_, PixzError>`, and
//! `std::error::Error` is implemented by hand rather than derived with
//! `thiserror`.

use std::fmt;
use std::io;

/// Every way a codec, container, raster or batch operation can fail.
#[derive(Debug)]
pub enum PixzError {
    /// Caller-supplied output buffer cannot hold even the worst-case token
    /// count (compressor) or has run out of room mid-encode.
    OutputTooSmall,
    /// Token stream is malformed: a bad offset/length pair, a truncated
    /// trailing token, or an output buffer too small for the decode.
    CorruptStream,
    /// Container header failed validation: bad magic, an impossible payload
    /// length, or a file shorter than its declared payload.
    CorruptContainer,
    /// The raster back end could not decode (or was handed a zero-dimension)
    /// source image.
    ImageLoadFailed(String),
    /// A filesystem operation failed. Carries the formatted `io::Error` since
    /// `io::Error` itself is not `Clone`/`PartialEq`.
    IoFailed(String),
    /// Any other computation fault raised while a task was running, recorded
    /// on the task rather than aborting the batch.
    ComputeException(String),
}

impl fmt::Display for PixzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixzError::OutputTooSmall => write!(f, "output buffer too small"),
            PixzError::CorruptStream => write!(f, "corrupt token stream"),
            PixzError::CorruptContainer => write!(f, "corrupt container"),
            PixzError::ImageLoadFailed(msg) => write!(f, "image load failed: {msg}"),
            PixzError::IoFailed(msg) => write!(f, "i/o failed: {msg}"),
            PixzError::ComputeException(msg) => write!(f, "compute exception: {msg}"),
        }
    }
}

impl std::error::Error for PixzError {}

impl From<io::Error> for PixzError {
    fn from(e: io::Error) -> Self {
        PixzError::IoFailed(e.to_string())
    }
}

impl From<image::ImageError> for PixzError {
    fn from(e: image::ImageError) -> Self {
        PixzError::ImageLoadFailed(e.to_string())
    }
}
