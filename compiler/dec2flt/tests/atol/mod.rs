use dec2flt::{atol, parse_int, Message};

macro_rules! test {
    ($f: ident, $(($input: expr, $base: expr) => $expected: expr),+ $(,)?) => {
        #[test]
        fn $f() {
            $(
                assert_eq!(
                    parse_int($input, $base).map_err(|e| e.to_string()),
                    Ok($expected),
                    "{:?} in base {}",
                    $input,
                    $base
                );
            )+
        }
    };
}

macro_rules! fails {
    ($f: ident, $(($input: expr, $base: expr) => $e: ident $(at $offending: expr)?),+ $(,)?) => {
        #[test]
        fn $f() {
            $(
                let err = parse_int($input, $base).unwrap_err();
                assert_eq!(err.msg, Message::$e, "{:?} in base {}", $input, $base);
                assert_eq!(err.input, $input);
                $(assert_eq!(err.offending(), Some($offending), "{:?}", $input);)?
            )+
        }
    };
}

test!(
    decimal,
    ("42", 10) => 42,
    ("-42", 10) => -42,
    (" +7 ", 10) => 7,
    ("007", 10) => 7,
    ("1_000_000", 10) => 1_000_000,
);

test!(
    radix,
    ("ff", 16) => 255,
    ("FF", 16) => 255,
    ("0xff", 16) => 255,
    ("0b1", 16) => 0xb1,
    ("z", 36) => 35,
    ("-101", 2) => -5,
    ("0o17", 8) => 15,
);

test!(
    inferred_radix,
    ("0x1F", 0) => 31,
    ("0X_1f", 0) => 31,
    ("0o17", 0) => 15,
    ("-0b101", 0) => -5,
    ("123", 0) => 123,
    ("000", 0) => 0,
    ("0_0", 0) => 0,
);

test!(
    range,
    ("9223372036854775807", 10) => i64::MAX,
    ("-9223372036854775808", 10) => i64::MIN,
    ("-0x8000000000000000", 0) => i64::MIN,
);

fails!(
    out_of_range,
    ("9223372036854775808", 10) => Overflow,
    ("-9223372036854775809", 10) => Overflow,
    ("99999999999999999999", 10) => Overflow at "99999999999999999999",
    ("0x1_0000_0000_0000_0000", 0) => Overflow,
);

fails!(
    malformed,
    ("012", 0) => MalformedNumeral at "0",
    ("_1", 10) => MalformedNumeral at "_",
    ("1__0", 10) => MalformedNumeral at "_",
    ("1_", 10) => MalformedNumeral at "_",
    ("0x", 0) => MalformedNumeral at "0x",
    ("-0b", 0) => MalformedNumeral at "0b",
);

fails!(
    bad_digits,
    ("12a", 10) => InvalidDigitCharacter at "a",
    ("102", 2) => InvalidDigitCharacter at "2",
    ("0x1g", 0) => InvalidDigitCharacter at "g",
    ("1.5", 10) => InvalidDigitCharacter at ".",
    ("12€", 10) => InvalidDigitCharacter at "€",
);

fails!(
    empty,
    ("", 10) => EmptyInput,
    ("  ", 0) => EmptyInput,
    ("-", 10) => EmptyInput,
);

fails!(
    radix_bounds,
    ("12", 1) => InvalidRadix,
    ("12", 37) => InvalidRadix,
);

#[test]
fn alias() {
    assert_eq!(atol("0x10", 0).unwrap(), 16);
}
