use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt1_codec::{compress_block, compress_image, extract_block};
use safe_allocator_api::RawAlloc;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn generate_image(width: usize, height: usize) -> RawAlloc {
    let mut image = allocate_align_64(width * height * 4);
    for (i, pixel) in image.as_mut_slice().chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % width, i / width);
        pixel[0] = (x ^ y) as u8;
        pixel[1] = (x * 3) as u8;
        pixel[2] = (y * 5) as u8;
        pixel[3] = 255;
    }
    image
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DXT1 Compress (RGBA8888 -> DXT1)");

    for size in [256usize, 1024, 2048] {
        let image = generate_image(size, size);
        let mut output = allocate_align_64((size / 4) * (size / 4) * 8);
        group.throughput(Throughput::Bytes((size * size * 4) as u64));

        group.bench_with_input(BenchmarkId::new("compress_image", size), &size, |b, &size| {
            let input = image.as_slice();
            let output = output.as_mut_slice();
            b.iter(|| compress_image(size, size, input, output).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("compress_block", size), &size, |b, &size| {
            let input = image.as_slice();
            b.iter(|| {
                let mut acc = 0u32;
                for y in (0..size).step_by(4) {
                    for x in (0..size).step_by(4) {
                        acc ^= compress_block(&extract_block(input, size, x, y)).indices;
                    }
                }
                acc
            })
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
