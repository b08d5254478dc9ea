use dec2flt::{parse_float, parse_number, Literal, Message, Number, Path};

macro_rules! test {
    ($f: ident, $($input: expr => $expected: expr),+ $(,)?) => {
        #[test]
        fn $f() {
            $(
                let got = parse_float($input)
                    .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e));
                let expected: f64 = $expected;
                assert_eq!(
                    got.to_bits(),
                    expected.to_bits(),
                    "{:?}: expected {:e}, got {:e}",
                    $input,
                    expected,
                    got
                );
            )+
        }
    };
}

macro_rules! fails {
    ($f: ident, $($input: expr => $e: ident $(at $offending: expr)?),+ $(,)?) => {
        #[test]
        fn $f() {
            $(
                match parse_float($input) {
                    Ok(v) => panic!("{:?} parsed as {:e}, expected {}", $input, v, Message::$e),
                    Err(err) => {
                        assert_eq!(err.msg, Message::$e, "{:?}", $input);
                        assert_eq!(err.input, $input);
                        $(assert_eq!(err.offending(), Some($offending), "{:?}", $input);)?
                    }
                }
            )+
        }
    };
}

fn finite(input: &str) -> Number {
    match parse_number(input).unwrap() {
        Literal::Finite(num) => num,
        other => panic!("{:?} is not finite: {:?}", input, other),
    }
}

test!(
    simple,
    "2.25" => 2.25,
    "0.1" => 0.1,
    "1" => 1.0,
    "-1.5" => -1.5,
    "+3" => 3.0,
    "1e23" => 1e23,
    "123.2481e-5" => 1.232481e-3,
    "3.141592653589793" => std::f64::consts::PI,
);

test!(
    point_placement,
    ".5" => 0.5,
    "5." => 5.0,
    "1.e2" => 100.0,
    ".25E-1" => 0.025,
    "1E+2" => 100.0,
);

test!(
    suffix_and_whitespace,
    "1.5f" => 1.5,
    "2F" => 2.0,
    "1e5f" => 100_000.0,
    "  3.25  " => 3.25,
    "\t-0.5\n" => -0.5,
);

test!(
    zeros,
    "0" => 0.0,
    "-0" => -0.0,
    "0.000" => 0.0,
    "-0e10" => -0.0,
    "0e999999999999999999999999" => 0.0,
);

test!(
    insignificant_zeros,
    "0.000000000000000000000000000001" => 1e-30,
    "1.000000000000000000000000" => 1.0,
    "100000000000000000000000" => 1e23,
    "000000000000000000000000000042" => 42.0,
    "12345678901234567890000e-3" => 12345678901234567890.0,
);

test!(
    limits,
    "1e309" => f64::INFINITY,
    "-1e309" => f64::NEG_INFINITY,
    "1e-400" => 0.0,
    "4.9e-324" => f64::from_bits(1),
    "2.4703282292062328e-324" => f64::from_bits(1),
    "2.4703282292062327e-324" => 0.0,
    "2.2250738585072014e-308" => f64::MIN_POSITIVE,
    "2.2250738585072011e-308" => f64::from_bits(0x000F_FFFF_FFFF_FFFF),
    "1.7976931348623157e308" => f64::MAX,
    "1.7976931348623159e308" => f64::INFINITY,
    "18446744073709551615" => 18_446_744_073_709_551_615_u64 as f64,
    "1e100000000000000000000000" => f64::INFINITY,
    "1e-100000000000000000000000" => 0.0,
);

test!(
    ties_to_even,
    "9007199254740992" => 9_007_199_254_740_992.0,
    "9007199254740993" => 9_007_199_254_740_992.0,
    "9007199254740995" => 9_007_199_254_740_996.0,
    "9007199254740993.1" => 9_007_199_254_740_994.0,
    "2.5e-324" => f64::from_bits(1),
);

#[test]
fn specials() {
    for input in &["nan", "NaN", "-nan", "+NAN"] {
        assert!(parse_float(input).unwrap().is_nan(), "{:?}", input);
    }
    assert_eq!(parse_float("inf").unwrap(), f64::INFINITY);
    assert_eq!(parse_float("-Infinity").unwrap(), f64::NEG_INFINITY);
    assert_eq!(parse_float("+INF").unwrap(), f64::INFINITY);
    assert_eq!(
        parse_number("-inf").unwrap(),
        Literal::Infinity { negative: true }
    );
}

#[test]
fn decomposition() {
    assert_eq!(
        finite("123.2481e-5"),
        Number {
            negative: false,
            significand: 1_232_481,
            exponent: -9,
        }
    );
    assert_eq!(
        finite("-1.50"),
        Number {
            negative: true,
            significand: 15,
            exponent: -1,
        }
    );
    assert_eq!(finite("7e-0003").exponent, -3);
    assert_eq!(finite("0.0").significand, 0);
}

#[test]
fn paths() {
    assert_eq!(finite("2.25").path(), Path::Fast);
    assert_eq!(finite("1e22").path(), Path::Fast);
    assert_eq!(finite("1e23").path(), Path::Slow);
    assert_eq!(finite("9007199254740993").path(), Path::Slow);
    assert_eq!(finite("1e-22").path(), Path::Fast);
    assert_eq!(finite("1e-23").path(), Path::Slow);
}

fails!(
    empty,
    "" => EmptyInput,
    "   " => EmptyInput,
    "-" => EmptyInput,
    "+f" => EmptyInput,
);

fails!(
    malformed,
    "1.2.3" => MalformedNumeral at ".",
    "1e" => MalformedNumeral at "e",
    "e5" => MalformedNumeral at "e",
    "1e5.5" => MalformedNumeral at "e",
    "1e5e5" => MalformedNumeral at "e",
    "1x" => MalformedNumeral at "x",
    "1.5€" => MalformedNumeral at "€",
    "½" => MalformedNumeral at "½",
    "1-2" => MalformedNumeral at "-",
    "1e+-5" => MalformedNumeral at "-",
    "1e5+" => MalformedNumeral at "+",
    "--1" => MalformedNumeral at "-",
    "." => MalformedNumeral at ".",
    ".e5" => MalformedNumeral at ".e5",
    "1,5" => MalformedNumeral at ",",
    "infinite" => MalformedNumeral at "i",
);

fails!(
    overflow,
    "18446744073709551616" => Overflow at "18446744073709551616",
    "123456789012345678901" => Overflow at "123456789012345678901",
    "-1234567890.12345678901e5" => Overflow at "1234567890.12345678901",
);

#[test]
fn error_names_original_input() {
    let err = parse_float("  -1.2.3f").unwrap_err();
    assert_eq!(err.to_string(), "malformed numeral: \"  -1.2.3f\"");
    assert_eq!(err.span.map(|s| s.start), Some(4));
}
