//! Pull side of a conversion.
//!
//! A `Source` hands out one unit per call until it is exhausted. Every
//! transcoder in utfx reads its input through this trait, so any container
//! can feed any transcoder as long as somebody writes a `Source` for it.
//!
//! # Contract
//!
//! 1. `next_unit` returns `Some(unit)` for the next element in order.
//! 2. `None` is the end-of-stream marker. A transcoder never pulls again
//!    after it has seen `None` within one logical read.
//! 3. Sources are single use. There is no rewind.
//!
//! # Implementation Guide
//!
//! ```
//! use utfx::source::Source;
//!
//! struct Countdown(u8);
//!
//! impl Source for Countdown {
//!     type Item = u8;
//!
//!     fn next_unit(&mut self) -> Option<u8> {
//!         if self.0 == 0 {
//!             return None;
//!         }
//!         self.0 -= 1;
//!         Some(b'0' + self.0)
//!     }
//! }
//!
//! let mut src = Countdown(2);
//! assert_eq!(src.next_unit(), Some(b'1'));
//! assert_eq!(src.next_unit(), Some(b'0'));
//! assert_eq!(src.next_unit(), None);
//! ```

/// Pull-based producer of units.
///
/// # Type Parameters
///
/// * `Item` - the element type: `u8` for UTF-8 bytes, `u16` for UTF-16
///   code units, `u32` for codepoints.
pub trait Source {
    /// The unit handed out by this source.
    type Item;

    /// Returns the next unit, or `None` once the stream is exhausted.
    fn next_unit(&mut self) -> Option<Self::Item>;
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    fn next_unit(&mut self) -> Option<Self::Item> {
        (**self).next_unit()
    }
}
