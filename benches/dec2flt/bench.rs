#![allow(clippy::missing_panics_doc)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dec2flt::parse_float;
use flt_benches::{fast_numerals, shortest_numerals, slow_numerals};

const COUNT: usize = 1024;

fn bench_corpus(c: &mut Criterion, name: &str, corpus: &[String]) {
    let bytes: usize = corpus.iter().map(String::len).sum();
    c.bench_function(format!("{} {} numerals {} b", name, corpus.len(), bytes).as_str(), |b| {
        b.iter(|| {
            for s in corpus {
                parse_float(black_box(s)).unwrap();
            }
        });
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_corpus(c, "fast", &fast_numerals(COUNT));
    bench_corpus(c, "slow", &slow_numerals(COUNT));
    bench_corpus(c, "shortest", &shortest_numerals(COUNT));

    let std_corpus = shortest_numerals(COUNT);
    c.bench_function(format!("std shortest {} numerals", COUNT).as_str(), |b| {
        b.iter(|| {
            for s in &std_corpus {
                black_box(s).parse::<f64>().unwrap();
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
