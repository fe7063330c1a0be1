//! Pure helpers mapping one driving scale into staggered per-segment scales.

use std::f64::consts::PI;

/// Clamp a global scale down for segment `i` of `n`, staggering segment
/// start points by `i/n`.
pub fn max_scale(scale: f64, i: u32, n: u32) -> f64 {
    debug_assert!(n > 0, "segment count must be > 0");
    (scale - f64::from(i) / f64::from(n)).max(0.0)
}

/// Renormalize a staggered segment value back into `[0, 1]`: rises from 0
/// once segment `i` starts, then holds at 1 while later segments catch up.
pub fn divide_scale(scale: f64, i: u32, n: u32) -> f64 {
    max_scale(scale, i, n).min(1.0 / f64::from(n)) * f64::from(n)
}

/// Symmetric pulse easing: 0 → 1 → 0 as `scale` runs 0 → 1.
pub fn sinify(scale: f64) -> f64 {
    (scale * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn max_scale_is_never_negative() {
        for s in [-2.0, -0.5, 0.0, 0.1, 0.5, 0.99, 1.0, 3.0] {
            for i in 0..4 {
                assert!(max_scale(s, i, 4) >= 0.0);
            }
        }
    }

    #[test]
    fn divide_scale_stays_in_unit_interval() {
        for k in 0..=100 {
            let s = f64::from(k) / 100.0;
            for i in 0..4 {
                let v = divide_scale(s, i, 4);
                assert!((0.0..=1.0 + EPS).contains(&v), "divide_scale({s}, {i}, 4) = {v}");
            }
        }
    }

    #[test]
    fn divide_scale_staggers_then_saturates() {
        // Segment 1 of 4 has not started at s = 0.25, is halfway at s = 0.375,
        // and holds at 1 from s = 0.5 on.
        assert!(divide_scale(0.25, 1, 4).abs() < EPS);
        assert!((divide_scale(0.375, 1, 4) - 0.5).abs() < EPS);
        assert!((divide_scale(0.5, 1, 4) - 1.0).abs() < EPS);
        assert!((divide_scale(0.9, 1, 4) - 1.0).abs() < EPS);
    }

    #[test]
    fn sinify_pulses_up_and_back() {
        assert!(sinify(0.0).abs() < EPS);
        assert!((sinify(0.5) - 1.0).abs() < EPS);
        assert!(sinify(1.0).abs() < EPS);
    }
}
