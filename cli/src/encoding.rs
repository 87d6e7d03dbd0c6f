use serde::Serialize;
use stream::ByteOrder;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Encoding {
    /// UTF-8 bytes
    Utf8,
    /// UTF-16 code units, two bytes each
    Utf16,
    /// Whitespace separated hexadecimal codepoints (`U+1F600` or `1F600`)
    Codepoints,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum Endian {
    /// Little endian
    #[default]
    Le,
    /// Big endian
    Be,
}

impl From<Endian> for ByteOrder {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Le => ByteOrder::Little,
            Endian::Be => ByteOrder::Big,
        }
    }
}

/// Converted output, tagged with its encoding.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "encoding", content = "units", rename_all = "lowercase")]
pub(crate) enum Units {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Codepoints(Vec<u32>),
}

/// Parses codepoint text such as `U+0041 1F600 u+20ac`.
pub(crate) fn parse_codepoints(text: &str) -> Result<Vec<u32>> {
    text.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("U+")
                .or_else(|| token.strip_prefix("u+"))
                .unwrap_or(token);
            u32::from_str_radix(digits, 16)
                .map_err(|_| Error::InvalidInput(format!("not a hexadecimal codepoint: {token}")))
        })
        .collect()
}

/// Formats codepoints as `U+XXXX` separated by spaces.
pub(crate) fn format_codepoints(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|c| format!("U+{c:04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats code units as four hex digits separated by spaces.
pub(crate) fn format_code_units(units: &[u16]) -> String {
    units
        .iter()
        .map(|u| format!("{u:04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{format_code_units, format_codepoints, parse_codepoints};
    use crate::error::Error;

    #[rstest(input, expected,
        case("", vec![]),
        case("41", vec![0x41]),
        case("U+0041 u+1f600\n20AC", vec![0x41, 0x1F600, 0x20AC]),
        case("  110000  ", vec![0x110000]),
    )]
    fn test_parse_codepoints(input: &str, expected: Vec<u32>) {
        assert_eq!(expected, parse_codepoints(input).unwrap());
    }

    #[rstest(input, case("zz"), case("U+"), case("41 -1"))]
    fn test_parse_codepoints_invalid(input: &str) {
        assert!(matches!(parse_codepoints(input), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_format() {
        assert_eq!("U+0041 U+1F600", format_codepoints(&[0x41, 0x1F600]));
        assert_eq!("D83D DE00", format_code_units(&[0xD83D, 0xDE00]));
    }
}
