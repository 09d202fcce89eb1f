//! Benchmark – every `decbytes` strategy on the same inputs.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use decbytes::{ChunkedSource, ConcurrentDecoder, Decode, DecoderFactory, DecoderOptions, Strategy};

const LOREM_INPUT: &[u8] = b"76 111 114 101 109 32 105 112 115 117 109 32 100 111 108 111 114 32 115 \
105 116 32 97 109 101 116 44 32 99 111 110 115 101 99 116 101 116 117 \
114 32 97 100 105 112 105 115 99 105 110 103 32 101 108 105 116 46";

/// A deterministic payload of `n` tokens cycling through every byte value.
fn make_payload(n: usize) -> Vec<u8> {
    (0..n)
        .map(|i| (i % 256).to_string())
        .collect::<Vec<_>>()
        .join(" ")
        .into_bytes()
}

fn bench_lorem(c: &mut Criterion) {
    let mut group = c.benchmark_group("lorem");
    for strategy in Strategy::ALL {
        // Decoders are built once per strategy so that buffer reuse is part
        // of what is measured.
        group.bench_function(strategy.name(), |b| {
            strategy.with_decoder(|decoder| {
                b.iter(|| {
                    let mut input = black_box(LOREM_INPUT);
                    let out = decoder.decode(&mut input).unwrap();
                    black_box(out.len());
                });
            });
        });
    }
    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let payload = make_payload(100_000);
    let mut group = c.benchmark_group("chunked");

    for &chunk in &[64usize, 4096] {
        for strategy in Strategy::ALL.into_iter().filter(|s| s.reads_to_end()) {
            if strategy.has_fixed_output() {
                // 100k tokens do not fit the default 4 KiB output.
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), chunk),
                &chunk,
                |b, &chunk| {
                    strategy.with_decoder(|decoder| {
                        b.iter(|| {
                            let mut source = ChunkedSource::new(black_box(&payload), chunk);
                            black_box(decoder.decode(&mut source).unwrap().len());
                        });
                    });
                },
            );
        }

        let factory = DecoderFactory::new(DecoderOptions {
            input_capacity: chunk,
            output_capacity: 1 << 17,
        })
        .unwrap();
        group.bench_with_input(
            BenchmarkId::new("concurrent_large", chunk),
            &chunk,
            |b, &chunk| {
                let mut decoder = factory.decoder();
                b.iter(|| {
                    let mut source = ChunkedSource::new(black_box(&payload), chunk);
                    black_box(decoder.decode(&mut source).unwrap().len());
                });
            },
        );
    }
    group.finish();
}

fn bench_concurrent_threads(c: &mut Criterion) {
    const THREADS: usize = 8;

    c.bench_function("concurrent_threads", |b| {
        b.iter(|| {
            std::thread::scope(|s| {
                for _ in 0..THREADS {
                    s.spawn(|| {
                        let mut decoder = ConcurrentDecoder::new();
                        for _ in 0..64 {
                            let mut input = LOREM_INPUT;
                            black_box(decoder.decode(&mut input).unwrap().len());
                        }
                    });
                }
            });
        });
    });
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

criterion_group! { name = benches; config = criterion(); targets = bench_lorem, bench_chunked, bench_concurrent_threads }
criterion_main!(benches);
