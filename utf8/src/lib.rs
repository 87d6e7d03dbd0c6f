//! Codepoint ↔ UTF-8 transcoder.
//!
//! ```text
//! codepoint range      bytes  leading byte
//! U+0000..=U+007F      1      0xxxxxxx
//! U+0080..=U+07FF      2      110xxxxx
//! U+0800..=U+FFFF      3      1110xxxx
//! U+10000..=U+10FFFF   4      11110xxx
//! ```
//!
//! Continuation bytes are `10xxxxxx` and carry the remaining bits, most
//! significant chunk first.
//!
//! Decoding is permissive by default: overlong forms, encoded surrogates and
//! 4-byte values up to 0x1FFFFF come back as-is. [`Policy::Strict`] rejects
//! them.

#![forbid(unsafe_code)]

pub mod error;

pub use error::Error;
use utfx::destination::Destination;
use utfx::source::Source;

const MAX_CODEPOINT: u32 = 0x10FFFF;

/// How much the decoder checks beyond the byte structure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Only the sequence structure is checked.
    #[default]
    Permissive,
    /// Also rejects overlong encodings, surrogates and values above
    /// U+10FFFF.
    Strict,
}

/// Number of bytes `encode` writes for `codepoint`.
///
/// # Errors
///
/// `InvalidCodepoint` for surrogates and values above U+10FFFF.
pub fn encoded_len(codepoint: u32) -> Result<usize, Error> {
    check_codepoint(codepoint)?;
    Ok(sequence_len(codepoint))
}

/// Writes the UTF-8 sequence of one codepoint to `dst`.
///
/// Nothing is written when the codepoint is rejected.
///
/// # Example
///
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// utf8::encode(0x20AC, &mut out).unwrap();
/// assert_eq!(vec![0xE2, 0x82, 0xAC], out);
/// ```
pub fn encode<D>(codepoint: u32, dst: &mut D) -> Result<(), Error>
where
    D: Destination<u8> + ?Sized,
{
    let len = encoded_len(codepoint)?;
    if len == 1 {
        dst.accept(codepoint as u8);
        return Ok(());
    }
    let mark: u8 = match len {
        2 => 0xC0,
        3 => 0xE0,
        _ => 0xF0,
    };
    dst.accept(mark | (codepoint >> (6 * (len - 1))) as u8);
    for i in (0..len - 1).rev() {
        dst.accept(0x80 | ((codepoint >> (6 * i)) & 0x3F) as u8);
    }
    Ok(())
}

/// Encodes every codepoint pulled from `src`.
///
/// Stops at the first invalid codepoint. Bytes of the codepoints before it
/// have already been pushed.
pub fn encode_stream<S, D>(src: &mut S, dst: &mut D) -> Result<(), Error>
where
    S: Source<Item = u32> + ?Sized,
    D: Destination<u8> + ?Sized,
{
    while let Some(codepoint) = src.next_unit() {
        encode(codepoint, dst)?;
    }
    Ok(())
}

/// Reads one codepoint from `src`.
///
/// Returns `Ok(None)` when the source is exhausted before a leading byte.
/// The whole sequence is read before anything is returned, so a failure
/// never yields part of a codepoint.
pub fn decode<S>(src: &mut S, policy: Policy) -> Result<Option<u32>, Error>
where
    S: Source<Item = u8> + ?Sized,
{
    let Some(lead) = src.next_unit() else {
        return Ok(None);
    };
    let (len, payload) = match lead {
        0x00..=0x7F => return Ok(Some(u32::from(lead))),
        0xC0..=0xDF => (2, lead & 0x1F),
        0xE0..=0xEF => (3, lead & 0x0F),
        0xF0..=0xF7 => (4, lead & 0x07),
        _ => {
            tracing::debug!(lead, "invalid UTF-8 leading byte");
            return Err(Error::InvalidLeadingByte(lead));
        }
    };

    let mut seq = [lead, 0, 0, 0];
    let mut codepoint = u32::from(payload);
    for i in 1..len {
        let Some(b) = src.next_unit() else {
            tracing::debug!(expected = len, got = i, "truncated UTF-8 sequence");
            return Err(Error::TruncatedSequence {
                expected: len,
                bytes: seq[..i].to_vec(),
            });
        };
        if b & 0xC0 != 0x80 {
            tracing::debug!(byte = b, "invalid UTF-8 continuation byte");
            return Err(Error::InvalidContinuationByte(b));
        }
        seq[i] = b;
        codepoint = (codepoint << 6) | u32::from(b & 0x3F);
    }

    if policy == Policy::Strict {
        if sequence_len(codepoint) < len {
            tracing::debug!(codepoint, len, "overlong UTF-8 encoding");
            return Err(Error::OverlongEncoding { codepoint, len });
        }
        check_codepoint(codepoint)?;
    }
    Ok(Some(codepoint))
}

/// Decodes `src` until it is exhausted, pushing one codepoint per sequence.
///
/// Halts on the first failure. Codepoints decoded before it stay in `dst`.
pub fn decode_stream<S, D>(src: &mut S, dst: &mut D, policy: Policy) -> Result<(), Error>
where
    S: Source<Item = u8> + ?Sized,
    D: Destination<u32> + ?Sized,
{
    while let Some(codepoint) = decode(src, policy)? {
        dst.accept(codepoint);
    }
    Ok(())
}

fn sequence_len(codepoint: u32) -> usize {
    match codepoint {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

fn check_codepoint(codepoint: u32) -> Result<(), Error> {
    if codepoint > MAX_CODEPOINT || (0xD800..=0xDFFF).contains(&codepoint) {
        tracing::debug!(codepoint, "invalid codepoint");
        return Err(Error::InvalidCodepoint(codepoint));
    }
    Ok(())
}
