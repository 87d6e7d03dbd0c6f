use thiserror::Error;

/// Errors raised while encoding UTF-16.
///
/// Decoding never fails: unpaired surrogates are passed through.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Above U+10FFFF, or a surrogate (U+D800 to U+DFFF).
    #[error("invalid codepoint: 0x{0:X}")]
    InvalidCodepoint(u32),
}
