//! Criterion microbenches for passfoto layout planning and sheet generation.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Landmark JSON parsing (from_json_str)
//! - Layout planning (plan_layout)
//! - Print sheet command generation (sheet_job, magick_args)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::path::Path;

use passfoto::geo::Vector2d;
use passfoto::input::io_json::from_json_str;
use passfoto::input::Landmarks;
use passfoto::layout::{plan_layout, LayoutConfig};
use passfoto::render::{magick_args, sheet_job};

const LANDMARK_FIXTURE: &str = r#"{
    "image": { "filename": "portrait.jpg", "geometry": [3000, 4000] },
    "pois": {
        "left_eye": [1210.5, 1502.0],
        "right_eye": [1795.0, 1531.5],
        "nose": [1504.0, 1830.0],
        "head_y": 420.0,
        "chin_y": 2480.0
    }
}"#;

fn landmarks() -> Landmarks {
    let document = from_json_str(LANDMARK_FIXTURE).unwrap();
    Landmarks::from_document(&document, (3000, 4000))
}

/// A poster-sized canvas so the grid holds a few dozen placements.
fn poster_config() -> LayoutConfig {
    LayoutConfig {
        canvas_mm: Vector2d::new(420.0, 297.0),
        ..Default::default()
    }
}

/// Benchmark landmark JSON parsing.
fn bench_landmarks_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("landmarks_parse");
    group.throughput(Throughput::Bytes(LANDMARK_FIXTURE.len() as u64));

    group.bench_function("from_json_str", |b| {
        b.iter(|| {
            let doc = from_json_str(black_box(LANDMARK_FIXTURE)).unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark layout planning on the default and a poster-sized canvas.
fn bench_plan_layout(c: &mut Criterion) {
    let landmarks = landmarks();
    let mut group = c.benchmark_group("plan_layout");

    for (name, config) in [
        ("postcard", LayoutConfig::default()),
        ("poster", poster_config()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let plan = plan_layout(black_box(&landmarks), black_box(&config)).unwrap();
                black_box(plan)
            })
        });
    }

    group.finish();
}

/// Benchmark building the sheet job and translating it to ImageMagick argv.
///
/// The plan is computed once up front; only command generation is timed.
fn bench_sheet(c: &mut Criterion) {
    let plan = plan_layout(&landmarks(), &poster_config()).unwrap();
    let source = Path::new("portrait.jpg");
    let output = Path::new("sheet.jpg");
    let mut group = c.benchmark_group("sheet");
    group.throughput(Throughput::Elements(plan.placements.len() as u64));

    group.bench_function("sheet_job_with_overlay", |b| {
        b.iter(|| {
            let job = sheet_job(black_box(&plan), source, true);
            black_box(job)
        })
    });

    let job = sheet_job(&plan, source, true);
    group.bench_function("magick_args", |b| {
        b.iter(|| {
            let args = magick_args(black_box(&job), output);
            black_box(args)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_landmarks_parse, bench_plan_layout, bench_sheet);
criterion_main!(benches);
