use thiserror::Error;

/// Failure of a composite conversion or a length calculation.
///
/// The variant tells which side of the pipeline failed: decoding or encoding
/// UTF-8, or encoding UTF-16.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("UTF-8: {0}")]
    Utf8(#[from] utf8::Error),

    #[error("UTF-16: {0}")]
    Utf16(#[from] utf16::Error),
}
