use thiserror::Error;

/// Errors raised while encoding or decoding UTF-8.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Above U+10FFFF, or a surrogate (U+D800 to U+DFFF).
    #[error("invalid codepoint: 0x{0:X}")]
    InvalidCodepoint(u32),

    /// A continuation byte or one of 0xF8..=0xFF in leading position.
    #[error("invalid leading byte: 0x{0:02X}")]
    InvalidLeadingByte(u8),

    /// The source ended before all continuation bytes were read.
    #[error("truncated sequence: expected {expected} bytes, got {bytes:02X?}")]
    TruncatedSequence { expected: usize, bytes: Vec<u8> },

    /// A byte in continuation position does not match `10xxxxxx`.
    #[error("invalid continuation byte: 0x{0:02X}")]
    InvalidContinuationByte(u8),

    /// Only raised under `Policy::Strict`.
    #[error("overlong encoding: U+{codepoint:04X} encoded in {len} bytes")]
    OverlongEncoding { codepoint: u32, len: usize },
}
