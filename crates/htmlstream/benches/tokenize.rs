//! Benchmark – `htmlstream::Tokenizer`
#![allow(missing_docs)]

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use htmlstream::{Sink, Tokenizer};

/// Produce a deterministic document of roughly `target_len` bytes mixing
/// tags, attributes, text and comments.
fn make_html_payload(target_len: usize) -> String {
    const ROW: &str = "<tr class=row><td align='left'>cell <b>bold</b></td>\
                       <!-- note --><td data-x=\"a b\">42</td></tr>\n";
    let mut s = String::with_capacity(target_len + ROW.len());
    s.push_str("<!DOCTYPE html><html><body><table>\n");
    while s.len() < target_len {
        s.push_str(ROW);
    }
    s.push_str("</table></body></html>");
    s
}

/// Counts callbacks so the work cannot be optimised away.
#[derive(Default)]
struct Count(usize);

impl Sink for Count {
    fn on_open(&mut self, _: &htmlstream::BStr) {
        self.0 += 1;
    }

    fn on_close(&mut self, _: &htmlstream::BStr) {
        self.0 += 1;
    }

    fn on_attribute(&mut self, _: &htmlstream::BStr, _: Option<&htmlstream::BStr>) {
        self.0 += 1;
    }

    fn on_text(&mut self, _: &htmlstream::BStr) {
        self.0 += 1;
    }
}

fn run_tokenizer(payload: &[u8], parts: usize) -> usize {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts);

    let mut tokenizer = Tokenizer::new(Count::default());
    for chunk in payload.chunks(chunk_size) {
        tokenizer.feed(chunk);
    }
    tokenizer.finish().0
}

fn bench_tokenizer(c: &mut Criterion) {
    let payload = make_html_payload(100_000);

    let mut group = c.benchmark_group("tokenizer_split");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for &parts in &[1usize, 100, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &p| {
            b.iter(|| black_box(run_tokenizer(black_box(payload.as_bytes()), p)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_tokenizer }
criterion_main!(benches);
