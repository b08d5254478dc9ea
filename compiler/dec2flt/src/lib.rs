//! Converting decimal strings into IEEE 754 binary floating point numbers.
//!
//! # Problem statement
//!
//! We are given a decimal string such as `12.34e56`. This string consists of integral (`12`),
//! fractional (`34`), and exponent (`56`) parts. The exponent is optional, and so is either side
//! of the decimal point as long as one of them has a digit.
//!
//! We seek the IEEE 754 floating point number that is closest to the exact value of the decimal
//! string, rounding ties, decimal values exactly half-way between two consecutive floats, to
//! the one with an even mantissa.
//!
//! # Implementation
//!
//! First, we ignore signs. Or rather, we remove it at the very beginning of the conversion
//! process and re-apply it at the very end. This is correct in all edge cases since IEEE
//! floats are symmetric around zero, negating one simply flips the first bit.
//!
//! Then we remove the decimal point by adjusting the exponent: Conceptually, `12.34e56` turns
//! into `1234e54`, which we describe with a positive integer `w = 1234` and an integer `q = 54`.
//! The body is scanned right to left into runs of digits, and the significant digits are
//! normalized into a fixed 24-byte buffer that is read back as three 8-byte words. Significands
//! with more than 20 significant digits do not fit a `u64` and are rejected, never truncated.
//!
//! If `w` and `10^q` are both exactly representable, one float multiplication or division is
//! correctly rounded (Clinger's fast path). Everything else goes through the Eisel-Lemire
//! algorithm, which multiplies `w` by a 128-bit truncated power of five and rounds once:
//! "Number Parsing at a Gigabyte per Second", <https://arxiv.org/abs/2101.11408>.
//!
//! # Other
//!
//! The conversion should *never* panic and never allocates unless it fails: a [`ParseError`]
//! owns a copy of the input it was raised for.

pub mod accumulate;
pub mod buffer;
pub mod float;
pub mod integer;
pub mod lemire;
pub mod number;
pub mod table;

pub use flt_errors::{Message, ParseError};
pub use integer::{atol, parse_int};
pub use number::{Number, Path};

use flt_errors::Fault;
use flt_utils::Span;

/// A successfully parsed float literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Nan,
    Infinity { negative: bool },
    Finite(Number),
}

impl Literal {
    pub fn to_f64(self) -> f64 {
        match self {
            Literal::Nan => f64::NAN,
            Literal::Infinity { negative: false } => f64::INFINITY,
            Literal::Infinity { negative: true } => f64::NEG_INFINITY,
            Literal::Finite(num) => num.to_f64(),
        }
    }
}

/// Splits surrounding ASCII whitespace off `input`, returning the byte
/// offset of what is left.
pub(crate) fn trim(input: &str) -> (usize, &str) {
    let start = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let offset = input.len() - start.len();
    (offset, start.trim_end_matches(|c: char| c.is_ascii_whitespace()))
}

/// Span of the character of `s` holding byte `i`.
pub(crate) fn char_span(s: &str, i: usize) -> Span {
    let start = (0..=i).rev().find(|&j| s.is_char_boundary(j)).unwrap_or(0);
    let end = (i + 1..=s.len()).find(|&j| s.is_char_boundary(j)).unwrap_or(s.len());
    Span::new(start, end)
}

/// Splits a leading sign off `s`, returning whether it was negative and the
/// length of the sign.
pub(crate) fn split_sign(s: &str) -> (bool, usize, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, 1, &s[1..]),
        Some(b'+') => (false, 1, &s[1..]),
        _ => (false, 0, s),
    }
}

fn classify(input: &str) -> Result<Literal, Fault> {
    let (offset, s) = trim(input);
    if s.is_empty() {
        return Err(Fault::bare(Message::EmptyInput));
    }

    let (negative, sign_len, body) = split_sign(s);
    let offset = offset + sign_len;

    if body.eq_ignore_ascii_case("nan") {
        return Ok(Literal::Nan);
    }
    if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        return Ok(Literal::Infinity { negative });
    }

    let body = body.strip_suffix(&['f', 'F'][..]).unwrap_or(body);
    if body.is_empty() {
        return Err(Fault::bare(Message::EmptyInput));
    }

    let (significand, exponent) = number::extract(body).map_err(|f| f.move_by(offset))?;
    Ok(Literal::Finite(Number {
        negative,
        significand,
        exponent,
    }))
}

/// Parses `input` without evaluating it.
///
/// # Errors
/// see [`parse_float`]
pub fn parse_number(input: &str) -> Result<Literal, ParseError> {
    classify(input).map_err(|f| f.into_error(input))
}

/// Parses `input` into the nearest `f64`, ties to even.
///
/// Accepts `[+|-] (nan | inf | infinity | number)` surrounded by optional
/// ASCII whitespace, where `number` is
/// `(digits [. [digits]] | . digits) [(e|E) [+|-] digits] [f|F]`.
///
/// # Errors
/// * `EmptyInput` if nothing is left after removing whitespace, sign and suffix
/// * `MalformedNumeral` if the numeral does not follow the grammar
/// * `Overflow` if it has more significant digits than a `u64` holds
pub fn parse_float(input: &str) -> Result<f64, ParseError> {
    parse_number(input).map(Literal::to_f64)
}

/// Alias of [`parse_float`].
///
/// # Errors
/// see [`parse_float`]
#[inline]
pub fn atof(input: &str) -> Result<f64, ParseError> {
    parse_float(input)
}
