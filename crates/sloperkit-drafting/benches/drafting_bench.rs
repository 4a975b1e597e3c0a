use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sloperkit_core::MeasurementSet;
use sloperkit_drafting::{cubic_bezier_length, render_svg, GarmentView, Point, RenderOptions};

fn measurements() -> MeasurementSet {
    MeasurementSet::from_json_str(include_str!("../tests/fixtures/womens.json"))
        .unwrap_or_default()
}

fn bench_bezier_length(c: &mut Criterion) {
    let p0 = Point::new(10.25, 17.0);
    let c1 = Point::new(6.5, 17.0);
    let c2 = Point::new(5.5, 20.6);
    let p3 = Point::new(7.4, 23.55);
    c.bench_function("cubic_bezier_length", |b| {
        b.iter(|| cubic_bezier_length(black_box(p0), black_box(c1), black_box(c2), black_box(p3)))
    });
}

fn bench_draft_views(c: &mut Criterion) {
    let m = measurements();
    let mut group = c.benchmark_group("draft");
    for view in GarmentView::ALL {
        group.bench_function(view.file_stem(), |b| {
            b.iter(|| black_box(view.draft(black_box(&m))).is_ok())
        });
    }
    group.finish();
}

fn bench_render_all(c: &mut Criterion) {
    let m = measurements();
    let options = RenderOptions::default();
    let patterns: Vec<_> = GarmentView::ALL
        .iter()
        .filter_map(|view| view.draft(&m).ok())
        .collect();
    c.bench_function("render_all_views", |b| {
        b.iter(|| {
            patterns
                .iter()
                .map(|p| render_svg(black_box(p), &options).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_bezier_length, bench_draft_views, bench_render_all);
criterion_main!(benches);
