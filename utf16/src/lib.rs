//! Codepoint ↔ UTF-16 transcoder.
//!
//! Codepoints up to U+FFFF are one code unit. Anything above is split into
//! a surrogate pair:
//!
//! ```text
//! c' = codepoint - 0x10000
//! high = 0xD800 + (c' >> 10)     0xD800..=0xDBFF
//! low  = 0xDC00 + (c' & 0x3FF)   0xDC00..=0xDFFF
//! ```
//!
//! # Unpaired surrogates
//!
//! Decoding accepts ill-formed UTF-16. A high surrogate that is not followed
//! by a low surrogate, and a low surrogate on its own, are handed out
//! unchanged as codepoints in the surrogate range. Callers that need
//! well-formed text have to check for that range themselves. Encoding, on
//! the other hand, rejects surrogate codepoints.

#![forbid(unsafe_code)]

pub mod error;

pub use error::Error;
use utfx::destination::Destination;
use utfx::source::Source;

const MAX_CODEPOINT: u32 = 0x10FFFF;

pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Joins a (high, low) surrogate pair into a codepoint.
pub fn combine(high: u16, low: u16) -> u32 {
    (u32::from(high) - 0xD800) * 0x400 + (u32::from(low) - 0xDC00) + 0x10000
}

/// Number of code units `encode` writes for `codepoint`: 1 or 2.
pub fn encoded_len(codepoint: u32) -> Result<usize, Error> {
    check_codepoint(codepoint)?;
    Ok(if codepoint <= 0xFFFF { 1 } else { 2 })
}

/// Writes one codepoint as one code unit or a surrogate pair.
///
/// ```
/// let mut out: Vec<u16> = Vec::new();
/// utf16::encode(0x1F600, &mut out).unwrap();
/// assert_eq!(vec![0xD83D, 0xDE00], out);
/// ```
pub fn encode<D>(codepoint: u32, dst: &mut D) -> Result<(), Error>
where
    D: Destination<u16> + ?Sized,
{
    if encoded_len(codepoint)? == 1 {
        dst.accept(codepoint as u16);
        return Ok(());
    }
    let c = codepoint - 0x10000;
    dst.accept(0xD800 + (c >> 10) as u16);
    dst.accept(0xDC00 + (c & 0x3FF) as u16);
    Ok(())
}

/// Encodes every codepoint pulled from `src`, stopping at the first invalid
/// one.
pub fn encode_stream<S, D>(src: &mut S, dst: &mut D) -> Result<(), Error>
where
    S: Source<Item = u32> + ?Sized,
    D: Destination<u16> + ?Sized,
{
    while let Some(codepoint) = src.next_unit() {
        encode(codepoint, dst)?;
    }
    Ok(())
}

/// Pairs up surrogates from a code unit source.
///
/// `Codepoints` is itself a source of codepoints, so it can feed any
/// codepoint consumer directly. It keeps at most one unit of lookahead: when
/// a high surrogate is followed by something other than a low surrogate,
/// that unit is held back and handed out next. Once the underlying source
/// has returned `None` it is never pulled again.
#[derive(Debug, Clone)]
pub struct Codepoints<S> {
    src: S,
    pending: Option<u16>,
    exhausted: bool,
}

impl<S: Source<Item = u16>> Codepoints<S> {
    pub fn new(src: S) -> Self {
        Codepoints {
            src,
            pending: None,
            exhausted: false,
        }
    }

    fn pull(&mut self) -> Option<u16> {
        if self.exhausted {
            return None;
        }
        let unit = self.src.next_unit();
        self.exhausted = unit.is_none();
        unit
    }
}

impl<S: Source<Item = u16>> Source for Codepoints<S> {
    type Item = u32;

    fn next_unit(&mut self) -> Option<u32> {
        let unit = match self.pending.take() {
            Some(unit) => unit,
            None => self.pull()?,
        };
        if is_high_surrogate(unit) {
            match self.pull() {
                Some(low) if is_low_surrogate(low) => return Some(combine(unit, low)),
                next => {
                    tracing::trace!(unit, "passing through unpaired high surrogate");
                    self.pending = next;
                }
            }
        }
        Some(u32::from(unit))
    }
}

/// Decodes a whole code unit stream into codepoints.
pub fn decode_stream<S, D>(src: &mut S, dst: &mut D)
where
    S: Source<Item = u16> + ?Sized,
    D: Destination<u32> + ?Sized,
{
    let mut codepoints = Codepoints::new(src);
    while let Some(codepoint) = codepoints.next_unit() {
        dst.accept(codepoint);
    }
}

fn check_codepoint(codepoint: u32) -> Result<(), Error> {
    if codepoint > MAX_CODEPOINT || (0xD800..=0xDFFF).contains(&codepoint) {
        tracing::debug!(codepoint, "invalid codepoint");
        return Err(Error::InvalidCodepoint(codepoint));
    }
    Ok(())
}
