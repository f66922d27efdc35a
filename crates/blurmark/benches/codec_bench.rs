use blurmark::{decode, encode, encode_map, EncodeOptions, PixelMap};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn gradient_image(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x as f64 / width as f64) * 255.0) as u8);
            pixels.push(((y as f64 / height as f64) * 255.0) as u8);
            pixels.push(128);
        }
    }
    pixels
}

// ---------------------------------------------------------------------------
// Encode benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &(w, h) in &[(32u32, 32u32), (64, 64), (128, 128), (256, 256)] {
        let img = gradient_image(w as usize, h as usize);
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        group.bench_with_input(BenchmarkId::new("4x3", &label), &img, |b, img| {
            b.iter(|| encode(img, w, h, 4, 3).unwrap());
        });
    }

    group.finish();
}

fn bench_encode_component_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_components");

    let img = gradient_image(128, 128);
    for &(cx, cy) in &[(1u32, 1u32), (4, 3), (4, 4), (9, 9)] {
        let label = format!("{cx}x{cy}");
        group.bench_with_input(BenchmarkId::new("128x128", &label), &img, |b, img| {
            b.iter(|| encode(img, 128, 128, cx, cy).unwrap());
        });
    }

    group.finish();
}

fn bench_encode_map_inferred(c: &mut Criterion) {
    let map = PixelMap::from_raw(96, 64, gradient_image(96, 64)).unwrap();
    let options = EncodeOptions::default();
    c.bench_function("encode_map/96x64_inferred_prefixed", |b| {
        b.iter(|| encode_map(&map, &options).unwrap());
    });
}

// ---------------------------------------------------------------------------
// Decode benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let hash = encode(&gradient_image(64, 64), 64, 64, 4, 3).unwrap();
    for &(w, h) in &[(32u32, 32u32), (64, 64), (128, 128), (256, 256)] {
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        group.bench_with_input(BenchmarkId::new("4x3", &label), &hash, |b, hash| {
            b.iter(|| decode(hash, w, h, 1.0).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_encode_component_counts,
    bench_encode_map_inferred,
    bench_decode
);
criterion_main!(benches);
