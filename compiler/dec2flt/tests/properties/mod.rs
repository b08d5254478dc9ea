use dec2flt::{parse_float, Number};
use proptest::prelude::*;

const MAX_EXACT: u64 = 1 << 53;

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
}

proptest! {
    #[test]
    fn exact_integers(n in 0..=MAX_EXACT) {
        prop_assert_eq!(parse_float(&n.to_string()).unwrap(), n as f64);
    }

    #[test]
    fn fast_and_slow_agree(w in 0..=MAX_EXACT, q in -22_i64..=22) {
        let num = Number { negative: false, significand: w, exponent: q };
        let fast = num.try_fast_path().unwrap();
        prop_assert_eq!(fast.to_bits(), num.slow_path().to_bits(), "{}e{}", w, q);
    }

    #[test]
    fn shortest_repr_round_trips(x in finite_f64()) {
        prop_assume!(x.is_finite());
        let plain = parse_float(&x.to_string()).unwrap();
        prop_assert_eq!(plain.to_bits(), x.to_bits(), "{}", x);
        let exp = parse_float(&format!("{:e}", x)).unwrap();
        prop_assert_eq!(exp.to_bits(), x.to_bits(), "{:e}", x);
    }

    #[test]
    fn reparse_is_stable(w in any::<u64>(), q in -360_i64..=330) {
        let input = format!("{}e{}", w, q);
        let once = parse_float(&input).unwrap();
        let twice = parse_float(&once.to_string()).unwrap();
        prop_assert_eq!(once.to_bits(), twice.to_bits(), "{}", input);
    }

    #[test]
    fn matches_std(w in any::<u64>(), q in -360_i64..=330) {
        let input = format!("{}e{}", w, q);
        let expected: f64 = input.parse().unwrap();
        prop_assert_eq!(parse_float(&input).unwrap().to_bits(), expected.to_bits(), "{}", input);
    }

    #[test]
    fn monotonic(a in any::<u64>(), b in any::<u64>(), q in -360_i64..=330) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = parse_float(&format!("{}e{}", lo, q)).unwrap();
        let hi = parse_float(&format!("{}e{}", hi, q)).unwrap();
        prop_assert!(lo <= hi);
    }

    #[test]
    fn sign_is_symmetric(w in any::<u64>(), q in -360_i64..=330) {
        let pos = parse_float(&format!("{}e{}", w, q)).unwrap();
        let neg = parse_float(&format!("-{}e{}", w, q)).unwrap();
        prop_assert_eq!(pos.to_bits() ^ neg.to_bits(), 1 << 63);
    }
}
