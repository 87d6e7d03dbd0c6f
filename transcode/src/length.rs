//! Length calculators.
//!
//! Each calculator consumes its source once and counts what the matching
//! conversion would write, without writing it. Counting goes through the
//! same `encoded_len` functions the encoders use, so a calculator fails on
//! exactly the input the conversion fails on.

use utf8::Policy;
use utf16::Codepoints;
use utfx::source::Source;

use crate::error::Error;

/// Codepoint and UTF-8 byte counts of a UTF-16 stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Measure {
    pub codepoints: usize,
    pub bytes: usize,
}

/// Measures a UTF-16 stream as UTF-8 in a single pass.
pub fn measure_utf16<S>(src: &mut S) -> Result<Utf8Measure, Error>
where
    S: Source<Item = u16> + ?Sized,
{
    let mut measure = Utf8Measure::default();
    let mut codepoints = Codepoints::new(src);
    while let Some(codepoint) = codepoints.next_unit() {
        measure.bytes += utf8::encoded_len(codepoint)?;
        measure.codepoints += 1;
    }
    Ok(measure)
}

/// Number of bytes `utf16_to_utf8` would write for `src`.
pub fn utf16_length_as_utf8<S>(src: &mut S) -> Result<usize, Error>
where
    S: Source<Item = u16> + ?Sized,
{
    Ok(measure_utf16(src)?.bytes)
}

/// Number of code units `utf8_to_utf16` would write for `src`.
pub fn utf8_length_as_utf16<S>(src: &mut S, policy: Policy) -> Result<usize, Error>
where
    S: Source<Item = u8> + ?Sized,
{
    let mut units = 0;
    while let Some(codepoint) = utf8::decode(src, policy)? {
        units += utf16::encoded_len(codepoint)?;
    }
    Ok(units)
}

/// Number of codepoints in a UTF-8 stream.
pub fn codepoint_count<S>(src: &mut S, policy: Policy) -> Result<usize, Error>
where
    S: Source<Item = u8> + ?Sized,
{
    let mut count = 0;
    while utf8::decode(src, policy)?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Number of bytes `utf8::encode_stream` would write for `src`.
pub fn codepoints_length_as_utf8<S>(src: &mut S) -> Result<usize, Error>
where
    S: Source<Item = u32> + ?Sized,
{
    let mut bytes = 0;
    while let Some(codepoint) = src.next_unit() {
        bytes += utf8::encoded_len(codepoint)?;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use stream::{Counter, SliceSource, StrSource};
    use utf8::Policy;

    use super::{
        Utf8Measure, codepoint_count, codepoints_length_as_utf8, measure_utf16, utf8_length_as_utf16,
        utf16_length_as_utf8,
    };
    use crate::convert::{utf8_to_utf16, utf16_to_utf8};
    use crate::error::Error;

    #[rstest(input, codepoints, bytes, units,
        case("", 0, 0, 0),
        case("Hello", 5, 5, 5),
        case("\u{e9}", 1, 2, 1),
        case("\u{20ac}", 1, 3, 1),
        case("\u{1F600}", 1, 4, 2),
        case("a\u{e9}\u{20ac}\u{1F600}", 4, 10, 5),
    )]
    fn test_lengths(input: &str, codepoints: usize, bytes: usize, units: usize) {
        assert_eq!(
            Utf8Measure { codepoints, bytes },
            measure_utf16(&mut StrSource::new(input)).unwrap()
        );
        assert_eq!(bytes, utf16_length_as_utf8(&mut StrSource::new(input)).unwrap());

        let encoded = input.as_bytes();
        assert_eq!(units, utf8_length_as_utf16(&mut SliceSource::new(encoded), Policy::Strict).unwrap());
        assert_eq!(codepoints, codepoint_count(&mut SliceSource::new(encoded), Policy::Strict).unwrap());

        let scalars: Vec<u32> = input.chars().map(u32::from).collect();
        assert_eq!(bytes, codepoints_length_as_utf8(&mut SliceSource::new(&scalars)).unwrap());
    }

    #[test]
    fn test_calculators_propagate_failures() {
        assert_eq!(
            Err(Error::Utf8(utf8::Error::InvalidCodepoint(0xD800))),
            utf16_length_as_utf8(&mut SliceSource::new(&[0xD800]))
        );
        assert_eq!(
            Err(Error::Utf8(utf8::Error::TruncatedSequence { expected: 3, bytes: vec![0xE2, 0x82] })),
            utf8_length_as_utf16(&mut SliceSource::new(&[0xE2, 0x82]), Policy::Permissive)
        );
        assert_eq!(
            Err(Error::Utf8(utf8::Error::InvalidContinuationByte(0x41))),
            codepoint_count(&mut SliceSource::new(&[0xC2, 0x41]), Policy::Permissive)
        );
        assert_eq!(
            Err(Error::Utf8(utf8::Error::InvalidCodepoint(0x110000))),
            codepoints_length_as_utf8(&mut SliceSource::new(&[0x41, 0x110000]))
        );
    }

    #[test]
    fn test_codepoint_count_follows_policy() {
        let overlong = [0xC0, 0x80];
        assert_eq!(Ok(1), codepoint_count(&mut SliceSource::new(&overlong), Policy::Permissive));
        assert!(codepoint_count(&mut SliceSource::new(&overlong), Policy::Strict).is_err());
    }

    proptest! {
        #[test]
        fn utf16_length_matches_conversion(units in proptest::collection::vec(any::<u16>(), 0..64)) {
            let mut written = Counter::new();
            let converted = utf16_to_utf8(&mut SliceSource::new(&units), &mut written);
            let computed = utf16_length_as_utf8(&mut SliceSource::new(&units));
            match (converted, computed) {
                (Ok(()), Ok(bytes)) => prop_assert_eq!(written.count(), bytes),
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "conversion {:?} and calculator {:?} disagree", a, b),
            }
        }

        #[test]
        fn utf8_length_matches_conversion(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut written = Counter::new();
            let converted = utf8_to_utf16(&mut SliceSource::new(&bytes), &mut written, Policy::Permissive);
            let computed = utf8_length_as_utf16(&mut SliceSource::new(&bytes), Policy::Permissive);
            match (converted, computed) {
                (Ok(()), Ok(units)) => prop_assert_eq!(written.count(), units),
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "conversion {:?} and calculator {:?} disagree", a, b),
            }
        }

        #[test]
        fn lengths_match_std(s in any::<String>()) {
            prop_assert_eq!(s.len(), utf16_length_as_utf8(&mut StrSource::new(&s)).unwrap());
            prop_assert_eq!(
                s.encode_utf16().count(),
                utf8_length_as_utf16(&mut SliceSource::new(s.as_bytes()), Policy::Strict).unwrap()
            );
            prop_assert_eq!(s.chars().count(), codepoint_count(&mut SliceSource::new(s.as_bytes()), Policy::Strict).unwrap());
        }
    }
}
