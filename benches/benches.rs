use criterion::{black_box, criterion_group};
use justframes::{exif, AspectRatio, Layout, Size};

fn configure_group<M>(group: &mut criterion::BenchmarkGroup<M>)
where
    M: criterion::measurement::Measurement,
{
    group.sample_size(1000);
    group.sampling_mode(criterion::SamplingMode::Flat);
}

fn bench_layout(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("layout/calculate");
    configure_group(&mut group);
    let source = Size::wh(4000, 3000);
    for ratio in AspectRatio::ALL {
        group.bench_function(ratio.to_string(), |b| {
            b.iter(|| black_box(Layout::calculate(black_box(source), 8.0, ratio)));
        });
    }
}

fn bench_exif_extract(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("exif/extract");
    configure_group(&mut group);

    // SOI, a run of filler APP0 segments, then the Exif segment
    let mut buffer = vec![0xFF, 0xD8];
    for _ in 0..64 {
        buffer.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x12]);
        buffer.extend_from_slice(&[0u8; 16]);
    }
    let mut payload = exif::EXIF_SIGNATURE.to_vec();
    payload.resize(1024, 0);
    let length = u16::try_from(payload.len() + 2).unwrap();
    buffer.extend_from_slice(&[0xFF, 0xE1]);
    buffer.extend_from_slice(&length.to_be_bytes());
    buffer.extend_from_slice(&payload);
    buffer.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x04, 0x00, 0x00]);

    group.bench_function("app1", |b| {
        b.iter(|| black_box(exif::extract_segment(black_box(&buffer))));
    });
}

criterion_group!(benches, bench_layout, bench_exif_extract);

fn main() {
    benches();

    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
