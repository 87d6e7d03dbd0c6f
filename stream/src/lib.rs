//! Concrete [`Source`](utfx::source::Source) and
//! [`Destination`](utfx::destination::Destination) adapters.
//!
//! The transcoders only know the two contracts from `utfx`. This crate binds
//! them to the containers callers actually hold: slices, iterators, string
//! slices, raw UTF-16 byte buffers, closures and a buffered `String`
//! builder.

#![forbid(unsafe_code)]

pub mod destination;
pub mod error;
pub mod source;
pub mod string;

pub use destination::{Counter, FnDestination};
pub use error::Error;
pub use source::{ByteOrder, EmptySource, IterSource, Singleton, SliceSource, StrSource, Utf16BytesSource};
pub use string::{FLUSH_THRESHOLD, StringDestination};
