//! Benchmark tests for the flow layout computations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wrapstack_core::{Alignment, Axis, HorizontalAlignment, Size, VerticalAlignment};
use wrapstack_layout::{grid_size, place, split_into_lines, FitPolicy, FlowLayout};

fn item_sizes(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| Size::new(20.0 + (i % 7) as f32 * 10.0, 10.0 + (i % 3) as f32 * 5.0))
        .collect()
}

fn bench_split(c: &mut Criterion) {
    for count in [10, 100, 1000] {
        let sizes = item_sizes(count);
        c.bench_function(&format!("split_{count}_items"), |b| {
            b.iter(|| {
                split_into_lines(
                    black_box(sizes.len()),
                    black_box(300.0),
                    black_box(8.0),
                    FitPolicy::Inclusive,
                    |i| Some(sizes[i].width),
                )
            })
        });
    }
}

fn bench_grid_size(c: &mut Criterion) {
    let sizes = item_sizes(100);
    let partition = split_into_lines(sizes.len(), 300.0, 8.0, FitPolicy::Inclusive, |i| {
        Some(sizes[i].width)
    });

    c.bench_function("grid_size_100_items", |b| {
        b.iter(|| {
            grid_size(
                black_box(&partition),
                black_box(8.0),
                black_box(8.0),
                |i| sizes[i].width,
                |i| sizes[i].height,
            )
        })
    });
}

fn bench_place(c: &mut Criterion) {
    let sizes = item_sizes(100);
    let partition = split_into_lines(sizes.len(), 300.0, 8.0, FitPolicy::Inclusive, |i| {
        Some(sizes[i].width)
    });
    let alignment = Alignment::new(HorizontalAlignment::Leading, VerticalAlignment::Top);

    c.bench_function("place_100_items", |b| {
        b.iter(|| {
            place(
                black_box(&partition),
                Axis::Horizontal,
                black_box(8.0),
                black_box(8.0),
                alignment,
                black_box(300.0),
                |i| sizes[i].width,
                |i| sizes[i].height,
            )
        })
    });
}

fn bench_full_pass(c: &mut Criterion) {
    let layout = FlowLayout::horizontal()
        .with_main_spacing(8.0)
        .with_cross_spacing(8.0);

    for count in [10, 100] {
        let sizes = item_sizes(count);
        c.bench_function(&format!("flow_layout_{count}_items"), |b| {
            b.iter(|| layout.compute(black_box(&sizes), black_box(300.0)))
        });
    }
}

criterion_group!(benches, bench_split, bench_grid_size, bench_place, bench_full_pass);
criterion_main!(benches);
