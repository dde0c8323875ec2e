use serde::{Deserialize, Serialize};

/// Orientation of a marker in the field frame.
///
/// Components are stored scalar-first, `(w, x, y, z)`, matching the order in
/// which field layouts publish tag orientations. Angle extraction works on
/// the vector-then-scalar tuple `(a, b, c, d) = (x, y, z, w)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    #[inline]
    fn abcd(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.z, self.w)
    }

    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Heading of the marker in the field plane, radians.
    pub fn yaw(&self) -> f64 {
        let (a, b, c, d) = self.abcd();
        (2.0 * (a * b + c * d)).atan2(1.0 - 2.0 * (b * b + c * c))
    }

    /// Out-of-plane tilt; not used by the planar estimate.
    pub fn pitch(&self) -> f64 {
        let (a, b, c, d) = self.abcd();
        (2.0 * (a * d - b * c)).clamp(-1.0, 1.0).asin()
    }

    /// Out-of-plane roll; not used by the planar estimate.
    pub fn roll(&self) -> f64 {
        let (a, b, c, d) = self.abcd();
        (2.0 * (a * c + b * d)).atan2(1.0 - 2.0 * (c * c + d * d))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    // Wall-mounted tag facing the field center.
    const WALL_TAG: Quaternion = Quaternion::new(0.3536, -0.6124, 0.6124, -0.3536);

    #[test]
    fn wall_tag_yaw_is_minus_quarter_turn() {
        assert_abs_diff_eq!(WALL_TAG.yaw(), -FRAC_PI_2, epsilon = 1e-3);
    }

    #[test]
    fn wall_tag_is_nearly_unit() {
        assert_abs_diff_eq!(WALL_TAG.norm(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn pitch_stays_defined_past_gimbal_lock() {
        let q = Quaternion::new(0.8, 0.8, 0.0, 0.0);
        assert!(q.pitch().is_finite());
        assert!(q.roll().is_finite());
    }
}
