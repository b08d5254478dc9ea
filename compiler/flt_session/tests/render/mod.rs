use flt_session::diag::emitter::DefaultEmitter;
use flt_session::output::{parse_emit_list, Emit, UnknownEmit};
use flt_session::source_map::loader::MemoryLoader;
use flt_session::{Mode, Session};

const ALL: [Emit; 4] = [Emit::Value, Emit::Bits, Emit::Parts, Emit::Path];

fn render(mode: Mode, src: &str, emit: &[Emit]) -> Vec<String> {
    let emitter = DefaultEmitter {
        stream: Vec::new(),
        color: false,
    };
    let sess = Session::new(MemoryLoader::new(), emitter, mode);
    let src = sess
        .source_map()
        .register_source("render".to_owned(), src.to_owned());
    let rendered = sess
        .convert(src)
        .unwrap()
        .iter()
        .map(|c| c.render(emit))
        .collect();
    assert_eq!(sess.error_count(), 0);
    rendered
}

#[test]
fn floats() {
    assert_eq!(
        render(Mode::Float, "2.25\n1e300\n-0\n-inf\nNaN\n", &ALL),
        vec![
            "2.25\t0x4002000000000000\t225e-2\tfast",
            "1e300\t0x7e37e43c8800759c\t1e300\tslow",
            "-0.0\t0x8000000000000000\t-0e0\tfast",
            "-inf\t0xfff0000000000000\t-inf\tspecial",
            "NaN\t0x7ff8000000000000\tnan\tspecial",
        ]
    );
}

#[test]
fn integers() {
    assert_eq!(
        render(Mode::Integer { base: 16 }, "ff\n-1\n", &ALL),
        vec![
            "255\t0x00000000000000ff\t255\tint",
            "-1\t0xffffffffffffffff\t-1\tint",
        ]
    );
}

#[test]
fn column_order() {
    assert_eq!(
        render(Mode::Float, "  0.5  \n", &[Emit::Path, Emit::Value]),
        vec!["fast\t0.5"]
    );
}

#[test]
fn emit_list() {
    assert_eq!(
        parse_emit_list("value, bits,path"),
        Ok(vec![Emit::Value, Emit::Bits, Emit::Path])
    );
    assert_eq!(
        parse_emit_list("value,hex"),
        Err(UnknownEmit("hex".to_owned()))
    );
}
