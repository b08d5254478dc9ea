//! Implementation of the Eisel-Lemire algorithm.
//!
//! "Number Parsing at a Gigabyte per Second", <https://arxiv.org/abs/2101.11408>,
//! section 5 onwards. The fallback the paper keeps for ambiguous products is
//! never taken with a 64-bit significand and a 128-bit power of five:
//! "Fast number parsing without fallback", <https://arxiv.org/abs/2212.06644>.

use crate::float::{
    BiasedFp, INFINITE_POWER, LARGEST_POWER_OF_TEN, MANTISSA_EXPLICIT_BITS,
    MAX_EXPONENT_ROUND_TO_EVEN, MINIMUM_EXPONENT, MIN_EXPONENT_ROUND_TO_EVEN,
    SMALLEST_POWER_OF_TEN,
};
use crate::table::{LARGEST_POWER_OF_FIVE, POWER_OF_FIVE_128, SMALLEST_POWER_OF_FIVE};

/// Compute `w * 10^q`, rounded to the nearest binary64, ties to even.
///
/// Returns the explicit mantissa bits and the biased exponent. The result
/// saturates to zero or infinity outside the representable range; there is
/// no failure mode.
pub fn compute_float(q: i64, mut w: u64) -> BiasedFp {
    // Short-circuit if the value can only be a literal 0 or infinity.
    if w == 0 || q < SMALLEST_POWER_OF_TEN {
        return BiasedFp::zero();
    } else if q > LARGEST_POWER_OF_TEN {
        return BiasedFp::infinity();
    }

    // Normalize our significant digits, so the most-significant bit is set.
    let lz = w.leading_zeros();
    w <<= lz;
    let (lo, hi) = compute_product_approx(q, w, MANTISSA_EXPLICIT_BITS as usize + 3);

    // 1 + 52 explicit bits + 1 rounding bit, under a leading zero or not
    let upperbit = (hi >> 63) as i32;
    let shift = upperbit + 64 - MANTISSA_EXPLICIT_BITS as i32 - 3;
    let mut mantissa = hi >> shift;
    let mut power2 = power(q as i32) + upperbit - lz as i32 - MINIMUM_EXPONENT;

    if power2 <= 0 {
        if -power2 + 1 >= 64 {
            // Have more than 64 bits below the minimum exponent, must be 0.
            return BiasedFp::zero();
        }
        // Have a subnormal value.
        mantissa >>= -power2 + 1;
        mantissa += mantissa & 1;
        mantissa >>= 1;
        // rounding up may have reached the smallest normal
        power2 = (mantissa >= (1_u64 << MANTISSA_EXPLICIT_BITS)) as i32;
        return BiasedFp { f: mantissa, e: power2 };
    }

    // Need to handle rounding ties. Normally, we need to round up,
    // but if we fall right in between and we have an even basis, we
    // need to round down.
    //
    // This will only occur if:
    //  1. The lower 64 bits of the 128-bit representation is 0.
    //     IE, 5^q fits in single 64-bit word.
    //  2. The least-significant bit prior to truncated mantissa is odd.
    //  3. All the bits truncated when shifting to mantissa bits + 1 are 0.
    //
    // Or, we may fall between two floats: we are exactly halfway.
    if lo <= 1
        && q >= MIN_EXPONENT_ROUND_TO_EVEN
        && q <= MAX_EXPONENT_ROUND_TO_EVEN
        && mantissa & 3 == 1
        && (mantissa << shift) == hi
    {
        // Zero the lowest bit, so we don't round up.
        mantissa &= !1_u64;
    }

    // Round-to-even, then shift the significant digits into place.
    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >= (2_u64 << MANTISSA_EXPLICIT_BITS) {
        // Rounding up overflowed, so the carry bit is set. Set the
        // mantissa to 1 (only the implicit, hidden bit), and then
        // increment the exponent.
        mantissa = 1_u64 << MANTISSA_EXPLICIT_BITS;
        power2 += 1;
    }
    // Zero out the hidden bit.
    mantissa &= !(1_u64 << MANTISSA_EXPLICIT_BITS);
    if power2 >= INFINITE_POWER {
        // Exponent is above largest normal value, must be infinite.
        return BiasedFp::infinity();
    }
    BiasedFp { f: mantissa, e: power2 }
}

/// Calculate a base 2 exponent from a decimal exponent.
/// This uses a pre-computed integer approximation for
/// log2(10), where 217706 / 2^16 is accurate for the
/// entire range of finite decimal exponents.
#[inline]
fn power(q: i32) -> i32 {
    (q.wrapping_mul(152_170 + 65536) >> 16) + 63
}

/// 64×64→128 bit multiplication, as `(lo, hi)`.
#[inline]
pub fn full_multiplication(a: u64, b: u64) -> (u64, u64) {
    let r = u128::from(a) * u128::from(b);
    (r as u64, (r >> 64) as u64)
}

// This will compute or rather approximate w * 5**q and return a pair of 64-bit
// words approximating the result, with the "high" part corresponding to the
// most significant bits and the low part corresponding to the least significant
// bits.
fn compute_product_approx(q: i64, w: u64, precision: usize) -> (u64, u64) {
    debug_assert!(q >= SMALLEST_POWER_OF_FIVE);
    debug_assert!(q <= LARGEST_POWER_OF_FIVE);
    debug_assert!(precision <= 64);

    let mask = if precision < 64 {
        0xFFFF_FFFF_FFFF_FFFF_u64 >> precision
    } else {
        0xFFFF_FFFF_FFFF_FFFF_u64
    };

    // 5^q < 2^64, then the multiplication always provides an exact value.
    // That means whenever we need to round ties to even, we always have
    // an exact value.
    let index = (q - SMALLEST_POWER_OF_FIVE) as usize;
    let (hi5, lo5) = POWER_OF_FIVE_128[index];
    // Only need one multiplication as long as there is 1 zero but
    // in the explicit mantissa bits, +1 for the hidden bit, +1 to
    // determine the rounding direction, +1 for if the computed
    // product has a leading zero.
    let (mut first_lo, mut first_hi) = full_multiplication(w, hi5);
    if first_hi & mask == mask {
        // Need to do a second multiplication to get better precision
        // for the lower product. This will always be exact
        // where q is < 55, since 5^55 < 2^128. If this wraps,
        // then we need to round up the hi product.
        let (_, second_hi) = full_multiplication(w, lo5);
        first_lo = first_lo.wrapping_add(second_hi);
        if second_hi > first_lo {
            first_hi += 1;
        }
    }
    (first_lo, first_hi)
}
