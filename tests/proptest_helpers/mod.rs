#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use rivet_io::model::{Bounds, Point};

/// Precision of six-decimal fixed output, with room for float rounding.
pub const EPS_FIXED: f64 = 1e-6;

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

pub fn arb_coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4_f64
}

/// Non-empty point sets of one shared dimension with scalar appearances.
pub fn arb_points(max_dim: usize, max_points: usize) -> impl Strategy<Value = Vec<Point>> {
    (1..=max_dim).prop_flat_map(move |dim| {
        prop::collection::vec(
            (
                arb_coord(),
                prop::collection::vec(arb_coord(), dim..=dim),
            ),
            1..=max_points,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(appearance, coords)| Point::new(appearance, coords))
                .collect()
        })
    })
}

pub fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (arb_coord(), arb_coord(), arb_coord(), arb_coord())
        .prop_map(|(x0, y0, x1, y1)| Bounds::new((x0, y0), (x1, y1)))
}

pub fn assert_close(a: f64, b: f64, eps: f64) -> Result<(), String> {
    if (a - b).abs() <= eps {
        Ok(())
    } else {
        Err(format!("{a} and {b} differ by more than {eps}"))
    }
}
