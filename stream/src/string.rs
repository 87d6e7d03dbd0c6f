//! Buffered string destination.
//!
//! Code units are collected in a small working buffer. Once the buffer
//! reaches the flush threshold its contents are decoded and appended to the
//! accumulated `String`, and the buffer starts over. This keeps the cost of
//! building very large strings bounded to one decode pass per chunk.

use std::mem;

use utfx::destination::Destination;

/// Working buffer size, in UTF-16 code units, at which a flush happens.
pub const FLUSH_THRESHOLD: usize = 1024;

/// Accumulates UTF-16 code units (or `char`s) into a `String`.
///
/// `finish` is the finalize call: it flushes what is left and hands out the
/// result. It is meant to be called once at the end of a conversion. A
/// second call returns whatever was pushed in between, normally nothing.
///
/// Unpaired surrogates cannot live in a `String` and are replaced with
/// U+FFFD. A high surrogate sitting at a flush boundary is held back until
/// the next flush so that a pair split across chunks still decodes.
#[derive(Debug, Clone)]
pub struct StringDestination {
    working: Vec<u16>,
    result: String,
    threshold: usize,
    flushes: usize,
}

impl StringDestination {
    pub fn new() -> Self {
        Self::with_threshold(FLUSH_THRESHOLD)
    }

    pub fn with_threshold(threshold: usize) -> Self {
        let threshold = threshold.max(1);
        StringDestination {
            working: Vec::with_capacity(threshold + 1),
            result: String::new(),
            threshold,
            flushes: 0,
        }
    }

    /// Number of times the working buffer has been decoded into the result.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Flushes the working buffer and returns the accumulated string.
    pub fn finish(&mut self) -> String {
        self.flush(true);
        mem::take(&mut self.result)
    }

    fn flush(&mut self, finishing: bool) {
        let ends_with_high = self
            .working
            .last()
            .is_some_and(|unit| (0xD800..=0xDBFF).contains(unit));
        let carry = if ends_with_high && !finishing {
            self.working.pop()
        } else {
            None
        };
        if !self.working.is_empty() {
            tracing::trace!(units = self.working.len(), "flushing string buffer");
            let decoded = char::decode_utf16(self.working.drain(..)).map(|r| {
                r.unwrap_or_else(|e| {
                    tracing::debug!(unit = e.unpaired_surrogate(), "replacing unpaired surrogate");
                    char::REPLACEMENT_CHARACTER
                })
            });
            self.result.extend(decoded);
            self.flushes += 1;
        }
        self.working.extend(carry);
    }
}

impl Default for StringDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination<u16> for StringDestination {
    fn accept(&mut self, unit: u16) {
        self.working.push(unit);
        if self.working.len() >= self.threshold {
            self.flush(false);
        }
    }
}

impl Destination<char> for StringDestination {
    fn accept(&mut self, c: char) {
        let mut buf = [0u16; 2];
        for &unit in c.encode_utf16(&mut buf).iter() {
            self.accept(unit);
        }
    }
}
