//! IEEE-754 binary64 layout and the final assembly of a parsed value.

/// The number of bits in the significand, *excluding* the hidden bit.
pub const MANTISSA_EXPLICIT_BITS: u32 = 52;
pub const MANTISSA_MASK: u64 = (1 << MANTISSA_EXPLICIT_BITS) - 1;

/// Exponent bias; also `-MINIMUM_EXPONENT`.
pub const EXPONENT_BIAS: i32 = 1023;
pub const MINIMUM_EXPONENT: i32 = -1023;

/// Biased exponent of infinities and NaNs.
pub const INFINITE_POWER: i32 = 0x7FF;

// Round-to-even only happens for negative values of q
// when q ≥ −4 and for positive values when q ≤ 23.
//
// When q ≥ 0, we have that 5^q ≤ 2m+1 ≤ 2^54, so q ≤ 23.
//
// When q < 0, we have w ≥ (2m+1)×5^−q. We must have that w < 2^64
// so (2m+1)×5^−q < 2^64. We have that 2m+1 > 2^53, hence
// 2^53×5^−q < 2^64, so 5^−q < 2^11 or q ≥ −4.
pub const MIN_EXPONENT_ROUND_TO_EVEN: i64 = -4;
pub const MAX_EXPONENT_ROUND_TO_EVEN: i64 = 23;

// Exponent range of the fast path: 10^22 is the largest exactly
// representable power of ten.
pub const MIN_EXPONENT_FAST_PATH: i64 = -22;
pub const MAX_EXPONENT_FAST_PATH: i64 = 22;

/// Largest significand exactly representable by a binary64.
pub const MAX_MANTISSA_FAST_PATH: u64 = 2_u64 << MANTISSA_EXPLICIT_BITS;

/// Smallest decimal exponent of a non-zero value.
pub const SMALLEST_POWER_OF_TEN: i64 = -342;

/// Largest decimal exponent of a non-infinite value.
pub const LARGEST_POWER_OF_TEN: i64 = 308;

/// Get a small power-of-ten for fast-path multiplication.
pub fn pow10_fast_path(exponent: usize) -> f64 {
    const TABLE: [f64; 32] = [
        1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
        1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 0., 0., 0., 0., 0., 0., 0., 0., 0.,
    ];
    TABLE[exponent & 31]
}

/// A float as explicit mantissa bits and a biased binary exponent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BiasedFp {
    /// The significant digits.
    pub f: u64,
    /// The biased, binary exponent.
    pub e: i32,
}

impl BiasedFp {
    pub const fn zero_pow2(e: i32) -> Self {
        Self { f: 0, e }
    }

    pub const fn zero() -> Self {
        Self::zero_pow2(0)
    }

    pub const fn infinity() -> Self {
        Self::zero_pow2(INFINITE_POWER)
    }

    pub fn to_bits(self) -> u64 {
        (self.f & MANTISSA_MASK) | ((self.e as u64) << MANTISSA_EXPLICIT_BITS)
    }

    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.to_bits())
    }
}

/// Packs mantissa bits `m` and the *unbiased* exponent `p` into a binary64.
///
/// The hidden bit of `m`, if any, is dropped.
pub fn assemble(m: u64, p: i32) -> f64 {
    BiasedFp {
        f: m,
        e: p + EXPONENT_BIAS,
    }
    .to_f64()
}

/// Splits `x` into its explicit mantissa bits and unbiased exponent, the
/// inverse of [`assemble`] for finite, positive values.
pub fn disassemble(x: f64) -> (u64, i32) {
    let bits = x.to_bits();
    let e = ((bits >> MANTISSA_EXPLICIT_BITS) & 0x7FF) as i32;
    (bits & MANTISSA_MASK, e - EXPONENT_BIAS)
}
