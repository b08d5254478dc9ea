//! Fixed-width digit buffers.
//!
//! A [`DigitBuffer`] holds up to [`MAX_DIGITS`] ASCII digits right-aligned in
//! [`BUFFER_SIZE`] bytes, with every unused leading byte set to `'0'`. This
//! gives every numeral the same shape, so that it can be read as whole
//! 8-byte words by the accumulator and compared byte-wise against the padded
//! `u64::MAX`.

use flt_errors::{Fault, Message};
use flt_utils::Span;

/// Decimal digits of `u64::MAX`.
pub const MAX_DIGITS: usize = 20;

/// `MAX_DIGITS` rounded up to a multiple of 8.
pub const BUFFER_SIZE: usize = 24;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigitBuffer {
    bytes: [u8; BUFFER_SIZE],
    len: usize,
}

impl Default for DigitBuffer {
    fn default() -> Self {
        DigitBuffer::new()
    }
}

impl DigitBuffer {
    pub const fn new() -> Self {
        DigitBuffer {
            bytes: [b'0'; BUFFER_SIZE],
            len: 0,
        }
    }

    /// Normalizes a single run of digits.
    ///
    /// # Errors
    /// `Overflow` if `digits` is longer than [`MAX_DIGITS`]
    pub fn from_digits(digits: &[u8]) -> Result<Self, Fault> {
        let mut buf = DigitBuffer::new();
        buf.push_run(digits)?;
        Ok(buf)
    }

    /// Copies `run` to the left of the digits already in the buffer.
    ///
    /// Runs are pushed from the least significant to the most significant
    /// one, so `push_run(b"25")` followed by `push_run(b"1")` holds `125`.
    /// The bytes are not validated here.
    ///
    /// # Errors
    /// `Overflow` if the buffer would hold more than [`MAX_DIGITS`] digits;
    /// the span covers the digits of `run` that did not fit.
    pub fn push_run(&mut self, run: &[u8]) -> Result<(), Fault> {
        let free = MAX_DIGITS - self.len;
        if run.len() > free {
            return Err(Fault::new(Message::Overflow, Span::new(0, run.len() - free)));
        }

        let end = BUFFER_SIZE - self.len;
        self.bytes[end - run.len()..end].copy_from_slice(run);
        self.len += run.len();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// The pushed digits, without padding.
    pub fn digits(&self) -> &[u8] {
        &self.bytes[BUFFER_SIZE - self.len..]
    }
}

impl std::fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigitBuffer")
            .field(&String::from_utf8_lossy(&self.bytes))
            .finish()
    }
}
