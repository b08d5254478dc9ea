use std::path::PathBuf;

use flt_session::diag::emitter::DefaultEmitter;
use flt_session::source_map::loader::MemoryLoader;
use flt_session::{Mode, Session, Value};
use similar::TextDiff;

type TestSession = Session<MemoryLoader, DefaultEmitter<Vec<u8>>>;

fn session(mode: Mode, name: &str, src: &str) -> TestSession {
    let emitter = DefaultEmitter {
        stream: Vec::new(),
        color: false,
    };
    Session::new(MemoryLoader::new().with(name, src), emitter, mode)
}

fn assert_golden(actual: &str, expected: &str) {
    if actual != expected {
        let diff = TextDiff::from_lines(expected, actual);
        panic!(
            "diagnostics differ:\n{}",
            diff.unified_diff().header("expected", "actual")
        );
    }
}

#[test]
fn float_diagnostics() {
    let sess = session(
        Mode::Float,
        "bad.txt",
        "1.5\n# comment\n\n1.2.3\n  -1e+-5\n0x10\n-\n18446744073709551616\n",
    );
    let src = sess
        .source_map()
        .load_source(PathBuf::from("bad.txt"))
        .unwrap();
    let lines = sess
        .convert(src)
        .unwrap()
        .iter()
        .map(|c| (c.line, c.text.to_owned()))
        .collect::<Vec<_>>();
    assert_eq!(lines, vec![(1, "1.5".to_owned())]);
    assert_eq!(sess.error_count(), 5);

    let out = String::from_utf8(sess.into_emitter().stream).unwrap();
    assert_golden(
        &out,
        "\
bad.txt:4:2: error: malformed numeral
1.2.3
 ^
bad.txt:5:7: error: malformed numeral
  -1e+-5
      ^
bad.txt:6:2: error: malformed numeral
0x10
 ^
bad.txt:7:1: error: cannot parse a number from an empty string
-
^
bad.txt:8:1: error: number too large to fit in 64 bits
18446744073709551616
^^^^^^^^^^^^^^^^^^^^
",
    );
}

#[test]
fn integer_diagnostics() {
    let sess = session(
        Mode::Integer { base: 0 },
        "ints",
        "0x_ff\r\n0b102\r\n-9223372036854775808\r\n",
    );
    let src = sess
        .source_map()
        .load_source(PathBuf::from("ints"))
        .unwrap();
    let values = sess
        .convert(src)
        .unwrap()
        .iter()
        .map(|c| c.value)
        .collect::<Vec<_>>();
    assert_eq!(values, vec![Value::Integer(255), Value::Integer(i64::MIN)]);

    let out = String::from_utf8(sess.into_emitter().stream).unwrap();
    assert_golden(&out, "ints:2:5: error: invalid digit\n0b102\n    ^\n");
}

#[test]
fn caret_spans_graphemes() {
    let sess = session(Mode::Float, "wide", "\t1é\n");
    let src = sess.source_map().register_source("wide".to_owned(), "\t1é\n".to_owned());
    assert!(sess.convert(src).unwrap().is_empty());

    let out = String::from_utf8(sess.into_emitter().stream).unwrap();
    assert_golden(&out, "wide:1:3: error: malformed numeral\n\t1é\n\t ^\n");
}

#[test]
fn missing_source() {
    let sess = session(Mode::Float, "present", "1");
    let path = PathBuf::from("absent");
    assert_eq!(sess.source_map().load_source(path.clone()).err(), Some(path));
    assert!(sess.source_map().is_empty());

    sess.source_map()
        .load_source(PathBuf::from("present"))
        .unwrap();
    assert_eq!(sess.source_map().len(), 1);
}
