//! String helpers built on the streaming core.
//!
//! Nothing here is installed implicitly. Code that wants
//! `"…".code_point_at(i)` or `String::from_code_points(…)` brings
//! [`CodePointExt`] or [`FromCodePoints`] into scope itself.

use stream::{IterSource, SliceSource, StringDestination};
use utf16::Codepoints;
use utfx::source::Source;

use crate::error::Error;

/// Builds a `String` from codepoints.
///
/// ```
/// assert_eq!("a\u{1F600}", transcode::from_code_points(&[0x61, 0x1F600]).unwrap());
/// assert!(transcode::from_code_points(&[0xD800]).is_err());
/// ```
pub fn from_code_points(codepoints: &[u32]) -> Result<String, Error> {
    let mut dst = StringDestination::new();
    utf16::encode_stream(&mut SliceSource::new(codepoints), &mut dst)?;
    Ok(dst.finish())
}

/// Codepoint starting at UTF-16 offset `index` of `units`.
///
/// Returns `None` when `index` is out of range. An index pointing at the
/// low half of a pair, or at an unpaired surrogate, yields that surrogate.
pub fn code_point_at_utf16(units: &[u16], index: usize) -> Option<u32> {
    let rest = units.get(index..)?;
    Codepoints::new(SliceSource::new(rest)).next_unit()
}

/// Codepoint starting at UTF-16 offset `index` of `s`.
pub fn code_point_at(s: &str, index: usize) -> Option<u32> {
    Codepoints::new(IterSource::new(s.encode_utf16().skip(index))).next_unit()
}

/// Opt-in `code_point_at` for string-like types.
pub trait CodePointExt {
    /// Codepoint at UTF-16 offset `index`, or `None` if out of range.
    fn code_point_at(&self, index: usize) -> Option<u32>;
}

impl CodePointExt for str {
    fn code_point_at(&self, index: usize) -> Option<u32> {
        code_point_at(self, index)
    }
}

impl CodePointExt for [u16] {
    fn code_point_at(&self, index: usize) -> Option<u32> {
        code_point_at_utf16(self, index)
    }
}

/// Opt-in constructor from codepoints.
pub trait FromCodePoints: Sized {
    fn from_code_points(codepoints: &[u32]) -> Result<Self, Error>;
}

impl FromCodePoints for String {
    fn from_code_points(codepoints: &[u32]) -> Result<Self, Error> {
        from_code_points(codepoints)
    }
}

impl FromCodePoints for Vec<u16> {
    fn from_code_points(codepoints: &[u32]) -> Result<Self, Error> {
        let mut units = Vec::with_capacity(codepoints.len());
        utf16::encode_stream(&mut SliceSource::new(codepoints), &mut units)?;
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CodePointExt, FromCodePoints, code_point_at, code_point_at_utf16, from_code_points};
    use crate::error::Error;

    #[rstest(input, expected,
        case(vec![], ""),
        case(vec![0x48, 0x69], "Hi"),
        case(vec![0x1F600, 0x20AC], "\u{1F600}\u{20ac}"),
    )]
    fn test_from_code_points(input: Vec<u32>, expected: &str) {
        assert_eq!(expected, from_code_points(&input).unwrap());
        assert_eq!(expected, String::from_code_points(&input).unwrap());
        assert_eq!(
            expected.encode_utf16().collect::<Vec<_>>(),
            Vec::<u16>::from_code_points(&input).unwrap()
        );
    }

    #[test]
    fn test_from_code_points_large_input() {
        let input: Vec<u32> = (0..3000).map(|i| if i % 3 == 0 { 0x1F600 } else { 0x61 }).collect();
        let s = from_code_points(&input).unwrap();
        assert_eq!(3000, s.chars().count());
        assert_eq!(1000, s.chars().filter(|&c| c == '\u{1F600}').count());
    }

    #[rstest(input, case(0xD800), case(0x110000))]
    fn test_from_code_points_invalid(input: u32) {
        assert_eq!(
            Err(Error::Utf16(utf16::Error::InvalidCodepoint(input))),
            from_code_points(&[0x41, input])
        );
    }

    #[rstest(index, expected,
        case(0, Some(0x61)),
        case(1, Some(0x1F600)),
        case(2, Some(0xDE00)),
        case(3, Some(0x62)),
        case(4, None),
        case(100, None),
    )]
    fn test_code_point_at(index: usize, expected: Option<u32>) {
        let s = "a\u{1F600}b";
        assert_eq!(expected, code_point_at(s, index));
        assert_eq!(expected, s.code_point_at(index));
    }

    #[rstest(index, expected,
        case(0, Some(0xD800)),
        case(1, Some(0x41)),
        case(2, None),
    )]
    fn test_code_point_at_utf16(index: usize, expected: Option<u32>) {
        let units = [0xD800, 0x41];
        assert_eq!(expected, code_point_at_utf16(&units, index));
        assert_eq!(expected, units[..].code_point_at(index));
    }
}
