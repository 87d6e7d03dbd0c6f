//! # utfx
//!
//! Core contracts for the utfx transcoders.
//!
//! utfx converts text between three representations: UTF-8 bytes (`u8`),
//! UTF-16 code units (`u16`) and Unicode codepoints (`u32`). Every conversion
//! reads from a [`Source`](source::Source) and writes to a
//! [`Destination`](destination::Destination), so conversions compose without
//! building intermediate arrays:
//!
//! ```text
//! Source<u8> → utf8::decode → u32 → utf16::encode → Destination<u16>
//! ```
//!
//! Concrete adapters live in the `stream` crate, the codecs in `utf8` and
//! `utf16`, and the composite conversions and length calculators in
//! `transcode`.
//!
//! ## Example
//!
//! ```
//! use utfx::destination::Destination;
//! use utfx::source::Source;
//!
//! struct Bytes<'a>(&'a [u8]);
//!
//! impl Source for Bytes<'_> {
//!     type Item = u8;
//!
//!     fn next_unit(&mut self) -> Option<u8> {
//!         let (first, rest) = self.0.split_first()?;
//!         self.0 = rest;
//!         Some(*first)
//!     }
//! }
//!
//! let mut src = Bytes(b"hi");
//! let mut dst: Vec<u8> = Vec::new();
//! while let Some(b) = src.next_unit() {
//!     dst.accept(b);
//! }
//! assert_eq!(b"hi".to_vec(), dst);
//! ```

#![forbid(unsafe_code)]

pub mod destination;
pub mod source;

/// Whether adapter constructors check the shape of their input.
///
/// Constructors that take external data (for instance a raw byte buffer that
/// should hold UTF-16 code units) fail fast with an invalid-argument error
/// under [`Validation::Enabled`]. [`Validation::Skipped`] trusts the caller
/// and drops the checks for hot call sites.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Enabled,
    Skipped,
}

impl Validation {
    /// Maps a "skip validation" flag onto a `Validation`.
    pub fn from_skip(skip: bool) -> Self {
        if skip {
            Validation::Skipped
        } else {
            Validation::Enabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Validation::Enabled
    }
}
