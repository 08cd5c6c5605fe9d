use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use greymorph_image::{GrayImage, ImageSize};
use greymorph_imgproc::morphology;
use greymorph_imgproc::parallel::ExecutionStrategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_image(width: usize, height: usize) -> GrayImage {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u8> = (0..(width * height)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    GrayImage::new(size, data).unwrap()
}

fn bench_morphology(c: &mut Criterion) {
    let mut group = c.benchmark_group("Morphology");

    for (w, h) in [(256, 224), (512, 448), (1024, 896)].iter() {
        let src = create_test_image(*w, *h);
        let parameter_string = format!("{}x{}", w, h);

        group.bench_with_input(
            BenchmarkId::new("erode_serial", &parameter_string),
            &src,
            |b, src| {
                let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
                b.iter(|| morphology::erode(src, &mut dst, ExecutionStrategy::Serial).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("erode_rows", &parameter_string),
            &src,
            |b, src| {
                let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
                b.iter(|| {
                    morphology::erode(src, &mut dst, ExecutionStrategy::ParallelRows).unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dilate_duality", &parameter_string),
            &src,
            |b, src| {
                let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
                b.iter(|| {
                    morphology::dilate(src, &mut dst, ExecutionStrategy::ParallelRows).unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dilate_direct", &parameter_string),
            &src,
            |b, src| {
                let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
                b.iter(|| {
                    morphology::dilate_direct(src, &mut dst, ExecutionStrategy::ParallelRows)
                        .unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("close", &parameter_string),
            &src,
            |b, src| {
                let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
                b.iter(|| morphology::close(src, &mut dst, ExecutionStrategy::ParallelRows).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_morphology);
criterion_main!(benches);
