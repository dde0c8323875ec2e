use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians into `(-π, π]`.
///
/// Headings are carried unbounded through intermediate computations and
/// wrapped only where they leave an estimator.
#[inline]
pub fn wrap_angle(theta: f64) -> f64 {
    let wrapped = (theta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    wrap_angle(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn wrap_keeps_half_open_range() {
        assert_abs_diff_eq!(wrap_angle(PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(3.0 * PI), PI, epsilon = 1e-9);
        assert_abs_diff_eq!(wrap_angle(-3.0 * FRAC_PI_4), -3.0 * FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(TAU + FRAC_PI_4), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn diff_crosses_the_seam() {
        let d = angle_diff(PI - 0.1, -PI + 0.1);
        assert_abs_diff_eq!(d, 0.2, epsilon = 1e-12);
    }
}
