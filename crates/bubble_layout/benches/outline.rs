use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bubble_layout::{compute, BubbleGeometry, BubbleLayout, PointerEdge};
use bubble_paint::CornerPathEffect;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for edge in PointerEdge::ALL {
        let geometry = BubbleGeometry::new(320, 180).with_edge(edge).with_offset(40);
        group.bench_function(edge.name(), |b| b.iter(|| compute(black_box(&geometry))));
    }
    group.finish();
}

fn bench_rounded_path(c: &mut Criterion) {
    let outline = compute(&BubbleGeometry::new(320, 180));
    let path = outline.to_path();
    let effect = CornerPathEffect::new(outline.corner_radius() as f32);

    c.bench_function("corner_effect", |b| b.iter(|| effect.apply(black_box(&path))));
}

fn bench_resize(c: &mut Criterion) {
    let mut bubble = BubbleLayout::default();
    let mut width = 200;

    c.bench_function("resize", |b| {
        b.iter(|| {
            width = if width == 200 { 201 } else { 200 };
            bubble.on_size_changed(black_box(width), 120);
        })
    });
}

criterion_group!(benches, bench_compute, bench_rounded_path, bench_resize);
criterion_main!(benches);
