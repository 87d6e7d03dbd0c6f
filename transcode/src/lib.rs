//! # transcode
//!
//! Direct UTF-8 ↔ UTF-16 conversion, length calculators, and a thin layer
//! of string helpers on top of the `utf8` and `utf16` codecs.
//!
//! The composite conversions decode one codepoint and immediately re-encode
//! it. No intermediate codepoint buffer exists at any point:
//!
//! ```text
//! Source<u16> → Codepoints → u32 → utf8::encode → Destination<u8>
//! Source<u8>  → utf8::decode → u32 → utf16::encode → Destination<u16>
//! ```
//!
//! ## Example
//!
//! ```
//! use stream::{SliceSource, StrSource};
//! use transcode::{utf16_to_utf8, utf8_length_as_utf16};
//!
//! let mut bytes: Vec<u8> = Vec::new();
//! utf16_to_utf8(&mut StrSource::new("h\u{e9}llo"), &mut bytes).unwrap();
//! assert_eq!("h\u{e9}llo".as_bytes(), &bytes[..]);
//!
//! let units = utf8_length_as_utf16(&mut SliceSource::new(&bytes), utf8::Policy::Strict).unwrap();
//! assert_eq!(5, units);
//! ```

#![forbid(unsafe_code)]

pub mod convert;
pub mod error;
pub mod length;
pub mod text;

pub use convert::{utf8_to_utf16, utf16_to_utf8};
pub use error::Error;
pub use length::{
    Utf8Measure, codepoint_count, codepoints_length_as_utf8, measure_utf16, utf8_length_as_utf16,
    utf16_length_as_utf8,
};
pub use text::{CodePointExt, FromCodePoints, code_point_at, code_point_at_utf16, from_code_points};
