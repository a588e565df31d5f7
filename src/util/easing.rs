//! Easing helpers for the per-frame camera animation.
//!
//! The camera never snaps to the pointer target; it closes a fixed
//! fraction of the remaining distance each tick (a first-order low-pass
//! filter, not a physical spring). Depth travel wraps on a fixed period.

/// Move `current` toward `target` by `fraction` of the remaining
/// distance.
///
/// With a constant target this produces geometric decay: after `n` ticks
/// the remaining distance is `(1 - fraction)^n` of the original.
#[inline]
pub fn approach(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction
}

/// Wrap `value` into `[0, period)`.
///
/// Works for negative inputs; `period` must be positive.
#[inline]
pub fn wrap(value: f32, period: f32) -> f32 {
    value.rem_euclid(period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_closes_fixed_fraction() {
        let next = approach(0.0, 100.0, 0.01);
        assert!((next - 1.0).abs() < 1e-6);
    }

    #[test]
    fn approach_decays_geometrically() {
        let target = 50.0;
        let fraction = 0.01;
        let mut pos = 0.0;
        let mut prev_remaining = target - pos;
        for _ in 0..200 {
            pos = approach(pos, target, fraction);
            let remaining = target - pos;
            let ratio = remaining / prev_remaining;
            assert!((ratio - (1.0 - fraction)).abs() < 1e-4);
            prev_remaining = remaining;
        }
    }

    #[test]
    fn approach_is_monotonic_toward_target() {
        let mut pos = -30.0;
        let mut prev = pos;
        for _ in 0..100 {
            pos = approach(pos, 10.0, 0.05);
            assert!(pos > prev);
            assert!(pos <= 10.0);
            prev = pos;
        }
    }

    #[test]
    fn approach_at_target_is_stationary() {
        assert_eq!(approach(5.0, 5.0, 0.01), 5.0);
    }

    #[test]
    fn wrap_handles_positive_and_negative() {
        assert_eq!(wrap(0.0, 8000.0), 0.0);
        assert_eq!(wrap(8000.0, 8000.0), 0.0);
        assert_eq!(wrap(8500.0, 8000.0), 500.0);
        assert_eq!(wrap(-500.0, 8000.0), 7500.0);
    }
}
