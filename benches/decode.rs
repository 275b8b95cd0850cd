//! Decoder throughput on long accumulated sequences.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rna_relay::{open_frames, translate, Base};

/// A start-marker-dense sequence with a single terminator at the end.
fn long_sequence(len: usize) -> Vec<Base> {
    let pattern = [Base::A, Base::U, Base::G, Base::U, Base::U, Base::U];
    let mut seq: Vec<Base> = pattern.iter().copied().cycle().take(len).collect();
    seq.extend([Base::U, Base::A, Base::A]);
    seq
}

fn bench_translate(c: &mut Criterion) {
    let seq = long_sequence(3_000);
    c.bench_function("translate_3k", |b| b.iter(|| translate(black_box(&seq))));
}

fn bench_open_frames(c: &mut Criterion) {
    let seq = long_sequence(3_000);
    c.bench_function("open_frames_3k", |b| b.iter(|| open_frames(black_box(&seq))));
}

criterion_group!(benches, bench_translate, bench_open_frames);
criterion_main!(benches);
