use criterion::{black_box, criterion_group, criterion_main, Criterion};
use histoview::chart::plot_histogram;
use histoview::image_loader::{extract_pixels, ImageSample};
use histoview::RgbHistogram;
use image::DynamicImage;

fn test_sample(width: u32, height: u32) -> ImageSample {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    ImageSample::new("bench.png", DynamicImage::ImageRgba8(img))
}

fn bench_extract_pixels(c: &mut Criterion) {
    let sample = test_sample(1920, 1080);

    c.bench_function("extract_pixels_1920x1080", |b| {
        b.iter(|| extract_pixels(black_box(&sample)).unwrap())
    });
}

fn bench_histogram(c: &mut Criterion) {
    let samples = extract_pixels(&test_sample(1920, 1080)).unwrap();

    c.bench_function("rgb_histogram_1920x1080", |b| {
        b.iter(|| RgbHistogram::from_samples(black_box(&samples)).unwrap())
    });
}

fn bench_chart_rebuild(c: &mut Criterion) {
    let histogram = RgbHistogram::from_samples(&extract_pixels(&test_sample(640, 480)).unwrap()).unwrap();

    c.bench_function("plot_histogram_replace", |b| {
        let mut chart = Some(plot_histogram(None, &histogram));
        b.iter(|| {
            chart = Some(plot_histogram(chart.take(), black_box(&histogram)));
        })
    });
}

criterion_group!(benches, bench_extract_pixels, bench_histogram, bench_chart_rebuild);
criterion_main!(benches);
