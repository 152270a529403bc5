//! Criterion benchmarks for voxdyn processors
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use voxdyn_core::{DynamicsExt, DynamicsProcessor, SampleCodec};
use voxdyn_effects::{Compressor, Gate};

const SAMPLE_RATE: f64 = 44100.0;
const BLOCK_FRAMES: &[usize] = &[64, 256, 1024, 4410];

fn generate_test_signal(frames: usize) -> Vec<u8> {
    let samples: Vec<i16> = (0..frames)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            (20_000.0 * (2.0 * std::f64::consts::PI * 220.0 * t).sin()) as i16
        })
        .collect();
    SampleCodec::encode_buffer(&samples)
}

fn bench_processor<P: DynamicsProcessor>(c: &mut Criterion, name: &str, mut processor: P) {
    let mut group = c.benchmark_group(name);

    for &frames in BLOCK_FRAMES {
        let input = generate_test_signal(frames);

        group.bench_with_input(BenchmarkId::from_parameter(frames), &frames, |b, _| {
            let mut output = vec![0u8; input.len()];
            b.iter(|| {
                processor.feed_into(black_box(&input), &mut output).unwrap();
                black_box(output[0])
            })
        });
    }

    group.finish();
}

fn bench_compressor(c: &mut Criterion) {
    bench_processor(c, "Compressor", Compressor::new(44, 4410, 10_000));
}

fn bench_gate(c: &mut Criterion) {
    bench_processor(c, "Gate", Gate::new(154, 441, 441, 950));
}

fn bench_voice_chain(c: &mut Criterion) {
    let chain = Compressor::new(44, 4410, 10_000).chain(Gate::new(154, 441, 441, 950));
    bench_processor(c, "VoiceChain", chain);
}

criterion_group!(benches, bench_compressor, bench_gate, bench_voice_chain);

criterion_main!(benches);
