use dec2flt::float::{assemble, disassemble, BiasedFp, EXPONENT_BIAS, INFINITE_POWER};
use dec2flt::lemire::{compute_float, full_multiplication};
use dec2flt::table::{N_POWERS_OF_FIVE, POWER_OF_FIVE_128, SMALLEST_POWER_OF_FIVE};

fn to_f64(q: i64, w: u64) -> f64 {
    compute_float(q, w).to_f64()
}

#[test]
fn short_circuits() {
    assert_eq!(compute_float(0, 0), BiasedFp::zero());
    assert_eq!(compute_float(-343, u64::MAX), BiasedFp::zero());
    assert_eq!(compute_float(309, 1), BiasedFp::infinity());
    assert_eq!(compute_float(i64::MAX, 1), BiasedFp::infinity());
    assert_eq!(compute_float(i64::MIN, 1), BiasedFp::zero());
}

#[test]
fn normal() {
    assert_eq!(compute_float(0, 1), BiasedFp { f: 0, e: EXPONENT_BIAS });
    assert_eq!(to_f64(-1, 25), 2.5);
    assert_eq!(to_f64(23, 1), 1e23);
    assert_eq!(to_f64(-1, 1), 0.1);
    assert_eq!(to_f64(300, 1), 1e300);
    assert_eq!(to_f64(292, 17_976_931_348_623_157), f64::MAX);
}

#[test]
fn subnormal() {
    assert_eq!(to_f64(-325, 49).to_bits(), 1);
    assert_eq!(to_f64(-324, 5).to_bits(), 1);
    assert_eq!(to_f64(-324, 2), 0.0);
    assert_eq!(to_f64(-324, 3).to_bits(), 1);
    // rounds up into the smallest normal
    assert_eq!(to_f64(-324, 22_250_738_585_072_013), f64::MIN_POSITIVE);
}

#[test]
fn overflow_to_infinity() {
    assert_eq!(compute_float(308, 2), BiasedFp::infinity());
    assert_eq!(compute_float(308, 18), BiasedFp { f: 0, e: INFINITE_POWER });
}

#[test]
fn mantissa_carry() {
    // 2^53 - 0.5 ulp rounds up into the next binade
    assert_eq!(to_f64(-1, 90_071_992_547_409_915), 9_007_199_254_740_992.0);
    assert_eq!(to_f64(0, u64::MAX), 18_446_744_073_709_551_616.0);
}

#[test]
fn multiplication() {
    assert_eq!(full_multiplication(u64::MAX, u64::MAX), (1, u64::MAX - 1));
    assert_eq!(full_multiplication(1 << 32, 1 << 32), (0, 1));
    assert_eq!(full_multiplication(3, 5), (15, 0));
}

#[test]
fn table() {
    assert_eq!(POWER_OF_FIVE_128.len(), N_POWERS_OF_FIVE);
    assert_eq!(
        POWER_OF_FIVE_128[0],
        (0xeef4_53d6_923b_d65a, 0x113f_aa29_06a1_3b3f)
    );
    // 5^0 and 5^1, normalized to bit 127
    let zero = (-SMALLEST_POWER_OF_FIVE) as usize;
    assert_eq!(POWER_OF_FIVE_128[zero], (1 << 63, 0));
    assert_eq!(POWER_OF_FIVE_128[zero + 1], (0xa000_0000_0000_0000, 0));
    for &(hi, _) in POWER_OF_FIVE_128.iter() {
        assert_eq!(hi >> 63, 1);
    }
}

#[test]
fn bit_assembly() {
    assert_eq!(assemble(0, 0), 1.0);
    assert_eq!(assemble(1 << 51, 1), 3.0);
    assert_eq!(assemble(1 << 52, 0), 1.0);
    assert_eq!(assemble(0, -1022), f64::MIN_POSITIVE);
    assert_eq!(assemble(1, -1023).to_bits(), 1);
    assert_eq!(assemble(0, 1024), f64::INFINITY);
    assert_eq!(disassemble(3.0), (1 << 51, 1));
    assert_eq!(disassemble(f64::MAX), ((1 << 52) - 1, 1023));
}
