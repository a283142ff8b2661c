use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_ean::utils::binarization::{binarize_row, otsu_binarize_row, otsu_threshold};
use rust_ean::utils::grayscale::rgb_row_to_grayscale;

fn bench_threshold_row(c: &mut Criterion) {
    let gray: Vec<u8> = (0..1920).map(|x| if x % 6 < 3 { 20 } else { 230 }).collect();
    c.bench_function("binarize_row_1920", |b| {
        b.iter(|| binarize_row(black_box(&gray), black_box(128)))
    });
}

fn bench_otsu_threshold(c: &mut Criterion) {
    let gray: Vec<u8> = (0..1920).map(|x| (x % 256) as u8).collect();
    c.bench_function("otsu_threshold_1920", |b| {
        b.iter(|| otsu_threshold(black_box(&gray)))
    });
}

fn bench_otsu_binarize_row(c: &mut Criterion) {
    let gray: Vec<u8> = (0..1920).map(|x| if x % 6 < 3 { 60 } else { 180 }).collect();
    c.bench_function("otsu_binarize_row_1920", |b| {
        b.iter(|| otsu_binarize_row(black_box(&gray)))
    });
}

fn bench_rgb_to_grayscale(c: &mut Criterion) {
    let rgb: Vec<u8> = (0..1920 * 3).map(|i| (i % 251) as u8).collect();
    c.bench_function("rgb_row_to_grayscale_1920", |b| {
        b.iter(|| rgb_row_to_grayscale(black_box(&rgb)))
    });
}

criterion_group!(
    benches,
    bench_threshold_row,
    bench_rgb_to_grayscale,
    bench_otsu_threshold,
    bench_otsu_binarize_row
);
criterion_main!(benches);
