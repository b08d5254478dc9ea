//! Integer parsing in any radix from 2 to 36.

use std::cmp::Ordering;
use std::convert::TryFrom;

use flt_errors::{Fault, Message, ParseError};
use flt_utils::Span;

use crate::{char_span, split_sign, trim};

pub const POSITIVE_MIN_I64: u64 = 9_223_372_036_854_775_808;

/// Applies a sign to a magnitude, failing outside the `i64` range.
pub fn convert_sign_and_magnitude(negative: bool, magnitude: u64) -> Option<i64> {
    if negative {
        match magnitude.cmp(&POSITIVE_MIN_I64) {
            #[allow(clippy::cast_possible_wrap)]
            Ordering::Less => Some(-(magnitude as i64)),
            Ordering::Equal => Some(i64::MIN),
            Ordering::Greater => None,
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn prefix_radix(s: &[u8]) -> Option<u32> {
    match s {
        [b'0', b'b' | b'B', ..] => Some(2),
        [b'0', b'o' | b'O', ..] => Some(8),
        [b'0', b'x' | b'X', ..] => Some(16),
        _ => None,
    }
}

fn to_int(input: &str, base: u32) -> Result<i64, Fault> {
    if base == 1 || base > 36 {
        return Err(Fault::bare(Message::InvalidRadix));
    }

    let (offset, s) = trim(input);
    let (negative, sign_len, rest) = split_sign(s);
    if rest.is_empty() {
        return Err(Fault::bare(Message::EmptyInput));
    }

    let bytes = rest.as_bytes();
    let (radix, prefixed) = match (base, prefix_radix(bytes)) {
        (0, Some(radix)) => (radix, true),
        (0, None) => (10, false),
        (base, Some(radix)) if radix == base => (base, true),
        (base, _) => (base, false),
    };
    let start = if prefixed { 2 } else { 0 };
    let digits = &bytes[start..];
    let offset = offset + sign_len + start;

    if digits.is_empty() {
        // only a prefix can be left without digits
        return Err(Fault::new(Message::MalformedNumeral, Span::new(offset - start, offset)));
    }

    let mut magnitude = 0_u64;
    let mut seen_digit = false;
    let mut prev_underscore = false;
    for (i, &c) in digits.iter().enumerate() {
        if c == b'_' {
            // `0x_ff` is fine, `_ff` and `f__f` are not
            if prev_underscore || !(seen_digit || prefixed) {
                return Err(Fault::new(Message::MalformedNumeral, Span::at(i + offset)));
            }
            prev_underscore = true;
            continue;
        }

        let d = char::from(c)
            .to_digit(radix)
            .ok_or_else(|| {
                Fault::new(Message::InvalidDigitCharacter, char_span(input, i + offset))
            })?;
        magnitude = magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(d)))
            .ok_or_else(|| {
                Fault::new(Message::Overflow, Span::new(offset, offset + digits.len()))
            })?;
        seen_digit = true;
        prev_underscore = false;
    }

    if prev_underscore {
        return Err(Fault::new(Message::MalformedNumeral, Span::at(offset + digits.len() - 1)));
    }
    // only digits past this point, and at least one of them
    if base == 0 && !prefixed && digits[0] == b'0' && magnitude != 0 {
        return Err(Fault::new(Message::MalformedNumeral, Span::at(offset)));
    }

    convert_sign_and_magnitude(negative, magnitude)
        .ok_or_else(|| Fault::new(Message::Overflow, Span::new(offset, offset + digits.len())))
}

/// Parses an integer in `base`, or in the base named by its `0b`/`0o`/`0x`
/// prefix when `base` is 0.
///
/// Surrounding ASCII whitespace and a `+`/`-` sign are accepted, and so are
/// single underscores between digits or right after a prefix. With base 0,
/// decimal numbers other than zero cannot start with `0`.
///
/// # Errors
/// * `InvalidRadix` if `base` is neither 0 nor in `2..=36`
/// * `EmptyInput` if there is nothing but a sign
/// * `MalformedNumeral` for misplaced underscores or a prefix without digits
/// * `InvalidDigitCharacter` for a digit outside the radix
/// * `Overflow` if the value is outside the `i64` range
pub fn parse_int(input: &str, base: u32) -> Result<i64, ParseError> {
    to_int(input, base).map_err(|f| f.into_error(input))
}

/// Alias of [`parse_int`].
///
/// # Errors
/// see [`parse_int`]
#[inline]
pub fn atol(input: &str, base: u32) -> Result<i64, ParseError> {
    parse_int(input, base)
}
