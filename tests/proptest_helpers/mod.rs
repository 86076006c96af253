#![allow(dead_code)]

use passfoto::geo::Vector2d;
use passfoto::input::Landmarks;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub const EPS: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Relative closeness, for values that may be large.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * a.abs().max(b.abs()).max(1.0)
}

pub fn approx_vec_eq(a: Vector2d, b: Vector2d, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

pub fn arb_point() -> impl Strategy<Value = Vector2d> {
    (-5000.0f64..5000.0, -5000.0f64..5000.0).prop_map(|(x, y)| Vector2d::new(x, y))
}

/// Landmarks for a plausible portrait: eyes at least a few pixels apart
/// horizontally, tilted by at most ±60°, with head above and chin below.
pub fn arb_landmarks() -> BoxedStrategy<Landmarks> {
    (
        200.0f64..2000.0,
        300.0f64..2000.0,
        20.0f64..400.0,
        -1.0f64..1.0,
        0.5f64..3.0,
        0.5f64..3.0,
        any::<bool>(),
    )
        .prop_map(|(cx, cy, half_eye, tilt, above, below, mirrored)| {
            let offset = Vector2d::new(half_eye, half_eye * tilt);
            let (left_eye, right_eye) = if mirrored {
                (Vector2d::new(cx, cy) + offset, Vector2d::new(cx, cy) - offset)
            } else {
                (Vector2d::new(cx, cy) - offset, Vector2d::new(cx, cy) + offset)
            };
            Landmarks {
                left_eye,
                right_eye,
                nose: Vector2d::new(cx, cy + half_eye * 0.5),
                head_y: cy - half_eye * 2.0 * above,
                chin_y: cy + half_eye * 2.0 * below,
                image_size: (4000, 4000),
                recorded_size: None,
            }
        })
        .boxed()
}
