use std::marker::PhantomData;
use std::str::EncodeUtf16;

use utfx::Validation;
use utfx::source::Source;

use crate::error::Error;

/// Array source: hands out the elements of a slice in order.
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T> {
    units: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> SliceSource<'a, T> {
    pub fn new(units: &'a [T]) -> Self {
        SliceSource { units, pos: 0 }
    }

    /// Number of units handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [T] {
        &self.units[self.pos..]
    }
}

impl<T: Copy> Source for SliceSource<'_, T> {
    type Item = T;

    fn next_unit(&mut self) -> Option<T> {
        let unit = self.units.get(self.pos).copied()?;
        self.pos += 1;
        Some(unit)
    }
}

/// A source that is exhausted from the start.
#[derive(Debug, Clone, Copy)]
pub struct EmptySource<T>(PhantomData<T>);

impl<T> EmptySource<T> {
    pub fn new() -> Self {
        EmptySource(PhantomData)
    }
}

impl<T> Default for EmptySource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Source for EmptySource<T> {
    type Item = T;

    fn next_unit(&mut self) -> Option<T> {
        None
    }
}

/// A source holding exactly one unit.
#[derive(Debug, Clone, Copy)]
pub struct Singleton<T>(Option<T>);

impl<T> Singleton<T> {
    pub fn new(unit: T) -> Self {
        Singleton(Some(unit))
    }
}

impl<T> Source for Singleton<T> {
    type Item = T;

    fn next_unit(&mut self) -> Option<T> {
        self.0.take()
    }
}

/// Wraps any iterator as a source.
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I: Iterator> IterSource<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        IterSource(iter.into_iter())
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    fn next_unit(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

/// String source: the UTF-16 code units of a `&str`.
#[derive(Debug, Clone)]
pub struct StrSource<'a>(EncodeUtf16<'a>);

impl<'a> StrSource<'a> {
    pub fn new(s: &'a str) -> Self {
        StrSource(s.encode_utf16())
    }
}

impl Source for StrSource<'_> {
    type Item = u16;

    fn next_unit(&mut self) -> Option<u16> {
        self.0.next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// UTF-16 code units read from a raw byte buffer, two bytes per unit.
#[derive(Debug, Clone)]
pub struct Utf16BytesSource<'a> {
    bytes: &'a [u8],
    order: ByteOrder,
}

impl<'a> Utf16BytesSource<'a> {
    /// Builds a source over `bytes`.
    ///
    /// With validation enabled an odd-length buffer is rejected. With
    /// validation skipped the dangling final byte is never read.
    pub fn new(bytes: &'a [u8], order: ByteOrder, validation: Validation) -> Result<Self, Error> {
        if validation.is_enabled() && bytes.len() % 2 != 0 {
            tracing::debug!(len = bytes.len(), "odd length UTF-16 byte buffer");
            return Err(Error::InvalidArgument(format!(
                "UTF-16 input must have an even number of bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Utf16BytesSource { bytes, order })
    }
}

impl Source for Utf16BytesSource<'_> {
    type Item = u16;

    fn next_unit(&mut self) -> Option<u16> {
        let (pair, rest) = self.bytes.split_first_chunk::<2>()?;
        self.bytes = rest;
        Some(match self.order {
            ByteOrder::Little => u16::from_le_bytes(*pair),
            ByteOrder::Big => u16::from_be_bytes(*pair),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utfx::Validation;
    use utfx::source::Source;

    use super::{ByteOrder, EmptySource, IterSource, Singleton, SliceSource, StrSource, Utf16BytesSource};
    use crate::error::Error;

    fn drain<S: Source>(mut src: S) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Some(u) = src.next_unit() {
            out.push(u);
        }
        out
    }

    #[test]
    fn test_slice_source() {
        let data = [1u8, 2, 3];
        let mut src = SliceSource::new(&data);
        assert_eq!(Some(1), src.next_unit());
        assert_eq!(1, src.position());
        assert_eq!(&[2, 3], src.remaining());
        assert_eq!(vec![2, 3], drain(&mut src));
        assert_eq!(None, src.next_unit());
    }

    #[test]
    fn test_empty_and_singleton() {
        assert!(drain(EmptySource::<u32>::new()).is_empty());
        assert_eq!(vec![0x1F600u32], drain(Singleton::new(0x1F600u32)));
    }

    #[test]
    fn test_iter_source() {
        assert_eq!(vec![0u32, 1, 2], drain(IterSource::new(0u32..3)));
    }

    #[rstest(input, expected,
        case("", vec![]),
        case("Hi", vec![0x48, 0x69]),
        case("\u{1F600}", vec![0xD83D, 0xDE00]),
    )]
    fn test_str_source(input: &str, expected: Vec<u16>) {
        assert_eq!(expected, drain(StrSource::new(input)));
    }

    #[rstest(input, order, expected,
        case(vec![0x41, 0x00, 0x3D, 0xD8], ByteOrder::Little, vec![0x0041, 0xD83D]),
        case(vec![0x00, 0x41, 0xD8, 0x3D], ByteOrder::Big, vec![0x0041, 0xD83D]),
        case(vec![], ByteOrder::Big, vec![]),
    )]
    fn test_utf16_bytes_source(input: Vec<u8>, order: ByteOrder, expected: Vec<u16>) {
        let src = Utf16BytesSource::new(&input, order, Validation::Enabled).unwrap();
        assert_eq!(expected, drain(src));
    }

    #[test]
    fn test_utf16_bytes_source_odd_length() {
        let input = [0x41, 0x00, 0x42];
        let err = Utf16BytesSource::new(&input, ByteOrder::Little, Validation::Enabled).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let src = Utf16BytesSource::new(&input, ByteOrder::Little, Validation::Skipped).unwrap();
        assert_eq!(vec![0x0041], drain(src));
    }
}
