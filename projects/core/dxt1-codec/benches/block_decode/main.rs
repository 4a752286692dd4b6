use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, Criterion};
use dxt1_codec::{decode_block, decompress_image, CompressedBlock, Decoded4x4Block};
use safe_allocator_api::RawAlloc;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DXT1 Decode Blocks (DXT1 -> RGBA8888)");

    // 2048x2048 texture = 2MB of DXT1 blocks
    let (width, height) = (2048usize, 2048usize);
    let dxt1_size = (width / 4) * (height / 4) * 8;

    let mut input = allocate_align_64(dxt1_size);
    let mut output = allocate_align_64(width * height * 4);

    // Fill with valid DXT1 blocks, mixing 4-color and 3-color mode.
    for (block_idx, block) in input.as_mut_slice().chunks_exact_mut(8).enumerate() {
        block[0] = 0x40;
        block[1] = if block_idx % 2 == 0 { 0xF8 } else { 0x00 };
        block[2] = 0x00;
        block[3] = 0xF8;
        for (i, byte) in block[4..].iter_mut().enumerate() {
            *byte = ((block_idx * (i + 4)) % 255) as u8;
        }
    }

    group.throughput(criterion::Throughput::Bytes(dxt1_size as u64));

    group.bench_function("decode_block", |b| {
        let input = input.as_slice();
        b.iter(|| {
            let mut last = Decoded4x4Block::default();
            for block in input.chunks_exact(8) {
                last = decode_block(&CompressedBlock::from_slice(block).unwrap());
            }
            last
        })
    });

    group.bench_function("decompress_image", |b| {
        let input = input.as_slice();
        let output = output.as_mut_slice();
        b.iter(|| decompress_image(width, height, input, output).unwrap())
    });

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
