use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hht_core::fft::forward_real;

fn bench_fft(c: &mut Criterion) {
    let ys: Vec<f64> = (0..4096).map(|i| (i as f64 * 0.01).sin()).collect();
    c.bench_function("forward_real_4096", |b| {
        b.iter(|| forward_real(black_box(&ys)))
    });
}

criterion_group!(benches, bench_fft);
criterion_main!(benches);
