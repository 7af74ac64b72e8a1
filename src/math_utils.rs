//! Small numeric helpers shared by the model and its tests.

/// Assert that the percentage deviation between two values stays under a
/// threshold. Useful for equilibrium tests where the exact fixed point is
/// known only approximately.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {{
        let actual_val = $actual;
        let expected_val = $expected;
        let max_dev = $max_deviation;
        let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

        if actual_deviation >= max_dev {
            panic!(
                "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                actual_deviation, max_dev, actual_val, expected_val
            );
        }
    }};
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `a` - Value at ratio 0.0
/// * `b` - Value at ratio 1.0
/// * `ratio` - Interpolation ratio
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Percentage deviation of `actual` from `expected`.
///
/// When `expected` is zero the absolute difference is reported instead,
/// scaled to percent, so the result is still finite.
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        (actual - expected).abs() * 100.0
    } else {
        ((actual - expected) / expected).abs() * 100.0
    }
}
