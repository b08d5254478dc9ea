use dec2flt::accumulate::{is_8digits, parse_8digits, to_integer, MAX_PADDED};
use dec2flt::buffer::{DigitBuffer, BUFFER_SIZE, MAX_DIGITS};
use dec2flt::Message;

fn buffer(digits: &str) -> DigitBuffer {
    DigitBuffer::from_digits(digits.as_bytes()).unwrap()
}

#[test]
fn right_aligned() {
    let buf = buffer("123");
    assert_eq!(buf.as_bytes(), b"000000000000000000000123");
    assert_eq!(buf.digits(), b"123");
    assert_eq!(buf.len(), 3);
}

#[test]
fn runs_push_leftwards() {
    let mut buf = DigitBuffer::new();
    buf.push_run(b"25").unwrap();
    buf.push_run(b"").unwrap();
    buf.push_run(b"1").unwrap();
    assert_eq!(buf.digits(), b"125");
    assert_eq!(to_integer(&buf), Ok(125));
}

#[test]
fn too_big() {
    let digits = [b'1'; MAX_DIGITS + 1];
    let err = DigitBuffer::from_digits(&digits).unwrap_err();
    assert_eq!(err.msg, Message::Overflow);

    let mut buf = buffer("1234567890");
    buf.push_run(b"1234567890").unwrap();
    assert_eq!(buf.len(), MAX_DIGITS);
    assert!(buf.push_run(b"1").is_err());
}

#[test]
fn empty_is_zero() {
    let buf = DigitBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes(), &[b'0'; BUFFER_SIZE]);
    assert_eq!(to_integer(&buf), Ok(0));
}

#[test]
fn accumulate() {
    assert_eq!(to_integer(&buffer("7")), Ok(7));
    assert_eq!(to_integer(&buffer("12345678")), Ok(12_345_678));
    assert_eq!(to_integer(&buffer("123456789")), Ok(123_456_789));
    assert_eq!(to_integer(&buffer("10000000000000000")), Ok(10_000_000_000_000_000));
    assert_eq!(to_integer(&buffer("18446744073709551615")), Ok(u64::MAX));
    assert_eq!(to_integer(&buffer("09999999999999999999")), Ok(9_999_999_999_999_999_999));
}

#[test]
fn accumulate_bounds() {
    for digits in &["18446744073709551616", "18446744073709552000", "99999999999999999999"] {
        let err = to_integer(&buffer(digits)).unwrap_err();
        assert_eq!(err.msg, Message::Overflow, "{}", digits);
    }
    assert_eq!(&MAX_PADDED[4..], u64::MAX.to_string().as_bytes());
}

#[test]
fn invalid_digits() {
    let err = to_integer(&buffer("1234a")).unwrap_err();
    assert_eq!(err.msg, Message::InvalidDigitCharacter);
    assert_eq!(err.span.map(|s| s.start), Some(4));

    // invalid bytes win over the range check
    let err = to_integer(&buffer("9999999999999999999/")).unwrap_err();
    assert_eq!(err.msg, Message::InvalidDigitCharacter);
    assert_eq!(err.span.map(|s| s.start), Some(19));
}

#[test]
fn swar() {
    let word = |s: &[u8; 8]| u64::from_le_bytes(*s);
    assert!(is_8digits(word(b"01234567")));
    assert!(is_8digits(word(b"99999999")));
    assert!(!is_8digits(word(b"0123456:")));
    assert!(!is_8digits(word(b"/1234567")));
    assert!(!is_8digits(word(b"1234 678")));
    assert_eq!(parse_8digits(word(b"12345678")), 12_345_678);
    assert_eq!(parse_8digits(word(b"00000001")), 1);
    assert_eq!(parse_8digits(word(b"99999999")), 99_999_999);
}
