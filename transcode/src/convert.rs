use utf8::Policy;
use utf16::Codepoints;
use utfx::destination::Destination;
use utfx::source::Source;

use crate::error::Error;

/// Converts UTF-16 code units to UTF-8 bytes, one codepoint at a time.
///
/// Surrogates are paired leniently (see the `utf16` crate), but an unpaired
/// surrogate has no UTF-8 form and fails the conversion with
/// `Error::Utf8(InvalidCodepoint)`. Bytes written before the failure stay in
/// `dst`.
pub fn utf16_to_utf8<S, D>(src: &mut S, dst: &mut D) -> Result<(), Error>
where
    S: Source<Item = u16> + ?Sized,
    D: Destination<u8> + ?Sized,
{
    let mut codepoints = Codepoints::new(src);
    while let Some(codepoint) = codepoints.next_unit() {
        utf8::encode(codepoint, dst)?;
    }
    Ok(())
}

/// Converts UTF-8 bytes to UTF-16 code units, one codepoint at a time.
///
/// Decoding follows `policy`. Under `Policy::Permissive` an encoded
/// surrogate or a value above U+10FFFF decodes fine and then fails to encode
/// with `Error::Utf16(InvalidCodepoint)`.
pub fn utf8_to_utf16<S, D>(src: &mut S, dst: &mut D, policy: Policy) -> Result<(), Error>
where
    S: Source<Item = u8> + ?Sized,
    D: Destination<u16> + ?Sized,
{
    while let Some(codepoint) = utf8::decode(src, policy)? {
        utf16::encode(codepoint, dst)?;
    }
    Ok(())
}
