//! Representation of a float as the significant digits and exponent.

use std::ops::Range;

use flt_errors::{Fault, Message};
use flt_utils::Span;
use tracing::trace;

use crate::accumulate::to_integer;
use crate::buffer::DigitBuffer;
use crate::float::{
    pow10_fast_path, MAX_EXPONENT_FAST_PATH, MAX_MANTISSA_FAST_PATH, MIN_EXPONENT_FAST_PATH,
};
use crate::char_span;
use crate::lemire::compute_float;

/// Stand-in for exponents with more digits than an `i64` holds. Any such
/// value rounds to zero or infinity, and it stays clear of overflow when the
/// fraction length is subtracted.
const SATURATED_EXPONENT: i64 = i64::MAX / 4;

/// Exponent digits that always fit an `i64`.
const MAX_EXPONENT_DIGITS: usize = 18;

/// Which evaluator converts a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Clinger: one exact float multiplication or division.
    Fast,
    /// Eisel-Lemire: 128-bit product against a power of five.
    Slow,
}

/// A finite numeral as `(-1)^negative * significand * 10^exponent`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Number {
    pub negative: bool,
    /// The significant digits, `w`.
    pub significand: u64,
    /// The decimal exponent, `q`.
    pub exponent: i64,
}

impl Number {
    /// Detect if the float can be accurately reconstructed from native floats.
    #[inline]
    pub fn is_fast_path(&self) -> bool {
        MIN_EXPONENT_FAST_PATH <= self.exponent
            && self.exponent <= MAX_EXPONENT_FAST_PATH
            && self.significand <= MAX_MANTISSA_FAST_PATH
    }

    pub fn path(&self) -> Path {
        if self.is_fast_path() {
            Path::Fast
        } else {
            Path::Slow
        }
    }

    /// The fast path algorithm using machine-sized integers and floats.
    ///
    /// This only works if both the significand and the power of ten can be
    /// exactly represented as a machine float, since IEEE-754 then guarantees
    /// a single, correct rounding. Returns the magnitude.
    pub fn try_fast_path(&self) -> Option<f64> {
        if !self.is_fast_path() {
            return None;
        }

        let value = self.significand as f64;
        Some(if self.exponent < 0 {
            value / pow10_fast_path((-self.exponent) as usize)
        } else {
            value * pow10_fast_path(self.exponent as usize)
        })
    }

    /// Converts with Eisel-Lemire regardless of the magnitude. Returns the
    /// magnitude.
    pub fn slow_path(&self) -> f64 {
        compute_float(self.exponent, self.significand).to_f64()
    }

    pub fn to_f64(&self) -> f64 {
        let value = match self.try_fast_path() {
            Some(value) => {
                trace!(w = self.significand, q = self.exponent, "fast path");
                value
            }
            None => {
                trace!(w = self.significand, q = self.exponent, "slow path");
                self.slow_path()
            }
        };

        if self.negative {
            -value
        } else {
            value
        }
    }
}

/// Digit runs of a numeral body, as byte ranges into it.
#[derive(Debug, Default)]
struct Runs {
    integer: Range<usize>,
    fraction: Range<usize>,
    exponent: Range<usize>,
    negative_exponent: bool,
}

/// What the digit run being scanned turned out to be, so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Nothing but digits seen: an exponent, unless a point shows up.
    Exponent,
    /// Past the exponent marker: a fraction, unless no point shows up.
    Significand,
    /// Past the decimal point.
    Integer,
}

fn malformed(body: &str, i: usize) -> Fault {
    Fault::new(Message::MalformedNumeral, char_span(body, i))
}

fn is_digit_or_point(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

/// Splits a body into its digit runs, scanning from the right.
///
/// Scanning backwards lets the exponent be known before the significand
/// without any lookahead: the first run is taken to be the exponent and is
/// reclassified as the fraction if a decimal point is met before a marker.
fn scan(body: &str) -> Result<Runs, Fault> {
    let bytes = body.as_bytes();
    let last = bytes.len() - 1;
    if !is_digit_or_point(bytes[0]) {
        return Err(malformed(body, 0));
    }
    if !is_digit_or_point(bytes[last]) {
        return Err(malformed(body, last));
    }

    let mut runs = Runs::default();
    let mut state = Scan::Exponent;
    let mut signed = false;
    let mut run_end = bytes.len();

    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'0'..=b'9' => {}
            b'.' => {
                if state == Scan::Integer {
                    return Err(malformed(body, i));
                }
                runs.fraction = i + 1..run_end;
                state = Scan::Integer;
                run_end = i;
            }
            c @ (b'+' | b'-') => {
                let after_marker = i > 0 && matches!(bytes[i - 1], b'e' | b'E');
                if state != Scan::Exponent || signed || !after_marker || i + 1 == run_end {
                    return Err(malformed(body, i));
                }
                runs.negative_exponent = c == b'-';
                signed = true;
            }
            b'e' | b'E' => {
                let start = i + 1 + usize::from(signed);
                if state != Scan::Exponent || start == run_end {
                    return Err(malformed(body, i));
                }
                runs.exponent = start..run_end;
                state = Scan::Significand;
                run_end = i;
            }
            _ => return Err(malformed(body, i)),
        }
    }
    runs.integer = 0..run_end;

    if runs.integer.is_empty() && runs.fraction.is_empty() {
        return Err(Fault::new(Message::MalformedNumeral, Span::new(0, bytes.len())));
    }
    Ok(runs)
}

fn leading_zeros(digits: &[u8]) -> usize {
    digits.iter().take_while(|&&c| c == b'0').count()
}

fn trailing_zeros(digits: &[u8]) -> usize {
    digits.iter().rev().take_while(|&&c| c == b'0').count()
}

/// Parses the exponent digits, saturating values beyond `i64`.
fn exponent_value(digits: &[u8]) -> Result<i64, Fault> {
    let digits = &digits[leading_zeros(digits)..];
    if digits.len() > MAX_EXPONENT_DIGITS {
        return Ok(SATURATED_EXPONENT);
    }
    let buf = DigitBuffer::from_digits(digits)?;
    Ok(to_integer(&buf)? as i64)
}

/// Decomposes an unsigned numeral body into `(w, q)` such that its exact
/// value is `w * 10^q`.
///
/// The body is `digits [. digits] [(e|E) [+|-] digits]`, with digits on at
/// least one side of the point. Zeros that are not significant do not count
/// against the 20 digits a `u64` can hold.
///
/// # Errors
/// * `MalformedNumeral` on any structural problem, located at the offending
///   byte
/// * `Overflow` if the significant digits exceed `u64::MAX`
pub fn extract(body: &str) -> Result<(u64, i64), Fault> {
    let bytes = body.as_bytes();
    if bytes.is_empty() {
        return Err(Fault::bare(Message::EmptyInput));
    }
    let runs = scan(body)?;

    let significand_span = Span::new(
        0,
        if runs.fraction.is_empty() {
            runs.integer.end
        } else {
            runs.fraction.end
        },
    );

    let mut integer = &bytes[runs.integer.clone()];
    let mut fraction = &bytes[runs.fraction.clone()];
    let fraction_digits = fraction.len() as i64;

    // leading zeros of the digit sequence
    integer = &integer[leading_zeros(integer)..];
    if integer.is_empty() {
        fraction = &fraction[leading_zeros(fraction)..];
    }

    // trailing zeros move into the exponent
    let mut folded = trailing_zeros(fraction);
    fraction = &fraction[..fraction.len() - folded];
    if fraction.is_empty() {
        let n = trailing_zeros(integer);
        integer = &integer[..integer.len() - n];
        folded += n;
    }

    if integer.is_empty() && fraction.is_empty() {
        return Ok((0, 0));
    }

    let mut buf = DigitBuffer::new();
    buf.push_run(fraction)
        .and_then(|_| buf.push_run(integer))
        .map_err(|_| Fault::new(Message::Overflow, significand_span))?;
    let w = to_integer(&buf).map_err(|f| Fault::new(f.msg, significand_span))?;

    let mut exponent = exponent_value(&bytes[runs.exponent.clone()])
        .map_err(|f| f.move_by(runs.exponent.start))?;
    if runs.negative_exponent {
        exponent = -exponent;
    }
    let q = exponent
        .saturating_sub(fraction_digits)
        .saturating_add(folded as i64);

    Ok((w, q))
}
