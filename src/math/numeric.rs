//! # Numeric Helpers
//!
//! Range remapping, compass-sector bucketing and digit counting.

use macroquad::math::Vec2;
use std::f32::consts::TAU;

/// Linearly maps `value` from `[low_in, high_in]` onto `[low_out, high_out]`.
///
/// The result is not clamped. `low_in == high_in` divides by zero and yields a
/// non-finite value; keeping the input range non-empty is up to the caller.
///
/// # Examples
///
/// ```
/// use iteria::remap;
///
/// assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// assert_eq!(remap(20.0, 0.0, 10.0, 100.0, 200.0), 300.0);
/// ```
pub fn remap(value: f32, low_in: f32, high_in: f32, low_out: f32, high_out: f32) -> f32 {
    low_out + (value - low_in) * (high_out - low_out) / (high_in - low_in)
}

/// Same as [`remap`], then clamps into the output range.
///
/// The output bounds may be given in either order.
pub fn remap_clamped(value: f32, low_in: f32, high_in: f32, low_out: f32, high_out: f32) -> f32 {
    let (low, high) = if high_out < low_out {
        (high_out, low_out)
    } else {
        (low_out, high_out)
    };

    remap(value, low_in, high_in, low_out, high_out).clamp(low, high)
}

/// Buckets the angle of `direction` into four compass sectors.
///
/// `0` is +X, `1` is +Y, `2` is -X and `3` is -Y. Vectors exactly on a sector
/// boundary may land in either neighbour.
pub fn cardinal_direction(direction: Vec2) -> i32 {
    sector(direction, 4)
}

/// Buckets the angle of `direction` into eight sectors, counter-clockwise from +X.
pub fn ordinal_direction(direction: Vec2) -> i32 {
    sector(direction, 8)
}

fn sector(direction: Vec2, sectors: i32) -> i32 {
    let angle = direction.y.atan2(direction.x);
    let count = sectors as f32;
    ((count * angle / TAU + count).round() as i32).rem_euclid(sectors)
}

/// Number of base-10 digits in `n`, counting the minus sign as a digit.
///
/// # Examples
///
/// ```
/// use iteria::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(-10), 3);
/// assert_eq!(digit_count(i32::MIN), 11);
/// ```
pub fn digit_count(n: i32) -> u32 {
    if n >= 0 {
        if n < 10 {
            return 1;
        }
        if n < 100 {
            return 2;
        }
        if n < 1_000 {
            return 3;
        }
        if n < 10_000 {
            return 4;
        }
        if n < 100_000 {
            return 5;
        }
        if n < 1_000_000 {
            return 6;
        }
        if n < 10_000_000 {
            return 7;
        }
        if n < 100_000_000 {
            return 8;
        }
        if n < 1_000_000_000 {
            return 9;
        }
        10
    } else {
        if n > -10 {
            return 2;
        }
        if n > -100 {
            return 3;
        }
        if n > -1_000 {
            return 4;
        }
        if n > -10_000 {
            return 5;
        }
        if n > -100_000 {
            return 6;
        }
        if n > -1_000_000 {
            return 7;
        }
        if n > -10_000_000 {
            return 8;
        }
        if n > -100_000_000 {
            return 9;
        }
        if n > -1_000_000_000 {
            return 10;
        }
        11
    }
}

/// [`digit_count`] for `i64`.
pub fn digit_count_i64(n: i64) -> u32 {
    const THRESHOLDS: [i64; 18] = [
        10,
        100,
        1_000,
        10_000,
        100_000,
        1_000_000,
        10_000_000,
        100_000_000,
        1_000_000_000,
        10_000_000_000,
        100_000_000_000,
        1_000_000_000_000,
        10_000_000_000_000,
        100_000_000_000_000,
        1_000_000_000_000_000,
        10_000_000_000_000_000,
        100_000_000_000_000_000,
        1_000_000_000_000_000_000,
    ];

    // Compare on the negative side so i64::MIN needs no abs().
    let (negative, sign) = if n < 0 { (n, 1) } else { (-n, 0) };
    for (index, threshold) in THRESHOLDS.iter().enumerate() {
        if negative > -threshold {
            return index as u32 + 1 + sign;
        }
    }
    19 + sign
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap() {
        assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 10.0), 5.0);
        assert_eq!(remap(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
        assert_eq!(remap(0.25, 0.0, 1.0, 10.0, 0.0), 7.5);
    }

    #[test]
    fn test_remap_degenerate_input_range() {
        assert!(!remap(1.0, 2.0, 2.0, 0.0, 1.0).is_finite());
    }

    #[test]
    fn test_remap_clamped() {
        assert_eq!(remap_clamped(2.0, 0.0, 1.0, 0.0, 10.0), 10.0);
        assert_eq!(remap_clamped(-2.0, 0.0, 1.0, 0.0, 10.0), 0.0);
        // Reversed output bounds still clamp.
        assert_eq!(remap_clamped(2.0, 0.0, 1.0, 10.0, 0.0), 0.0);
        assert_eq!(remap_clamped(-2.0, 0.0, 1.0, 10.0, 0.0), 10.0);
        assert_eq!(remap_clamped(0.5, 0.0, 1.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_cardinal_direction() {
        assert_eq!(cardinal_direction(Vec2::new(1.0, 0.0)), 0);
        assert_eq!(cardinal_direction(Vec2::new(0.0, 1.0)), 1);
        assert_eq!(cardinal_direction(Vec2::new(-1.0, 0.0)), 2);
        assert_eq!(cardinal_direction(Vec2::new(0.0, -1.0)), 3);
        assert_eq!(cardinal_direction(Vec2::new(5.0, 1.0)), 0);
        assert_eq!(cardinal_direction(Vec2::new(-5.0, -1.0)), 2);
    }

    #[test]
    fn test_ordinal_direction() {
        assert_eq!(ordinal_direction(Vec2::new(1.0, 0.0)), 0);
        assert_eq!(ordinal_direction(Vec2::new(1.0, 1.0)), 1);
        assert_eq!(ordinal_direction(Vec2::new(0.0, 1.0)), 2);
        assert_eq!(ordinal_direction(Vec2::new(-1.0, 1.0)), 3);
        assert_eq!(ordinal_direction(Vec2::new(-1.0, 0.0)), 4);
        assert_eq!(ordinal_direction(Vec2::new(-1.0, -1.0)), 5);
        assert_eq!(ordinal_direction(Vec2::new(0.0, -1.0)), 6);
        assert_eq!(ordinal_direction(Vec2::new(1.0, -1.0)), 7);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(-5), 2);
        assert_eq!(digit_count(-10), 3);
        assert_eq!(digit_count(999_999), 6);
        assert_eq!(digit_count(2_147_483_647), 10);
        assert_eq!(digit_count(-2_147_483_648), 11);
    }

    #[test]
    fn test_digit_count_matches_formatting() {
        for n in [-1_000_001, -99, -1, 1, 42, 1_000, 123_456_789, i32::MAX] {
            assert_eq!(digit_count(n) as usize, n.to_string().len(), "n = {n}");
        }
    }

    #[test]
    fn test_digit_count_i64() {
        assert_eq!(digit_count_i64(0), 1);
        assert_eq!(digit_count_i64(-10), 3);
        assert_eq!(digit_count_i64(9_999_999_999), 10);
        assert_eq!(digit_count_i64(i64::MAX), 19);
        assert_eq!(digit_count_i64(i64::MIN), 20);
    }
}
