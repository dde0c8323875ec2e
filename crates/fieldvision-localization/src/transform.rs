use nalgebra::{Isometry2, Point2, Vector2};

/// A planar rigid transform: rotate by `rotation` (radians, CCW), then
/// translate.
///
/// The rotation angle is kept as given (unbounded) so callers can report it
/// exactly; wrapping happens once, when a pose leaves the estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidTransform2d {
    pub rotation: f64,
    pub translation: Vector2<f64>,
}

impl RigidTransform2d {
    pub fn new(rotation: f64, translation: Vector2<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure rotation about the origin.
    pub fn rotation(rotation: f64) -> Self {
        Self::new(rotation, Vector2::zeros())
    }

    #[inline]
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(self.translation, self.rotation)
    }

    /// Map a point from the local frame into the target frame.
    #[inline]
    pub fn apply(&self, p: Point2<f64>) -> Point2<f64> {
        self.to_isometry() * p
    }

    /// Rotate a free vector (no translation).
    #[inline]
    pub fn rotate(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.to_isometry() * v
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &RigidTransform2d) -> Self {
        Self::new(
            self.rotation + other.rotation,
            self.rotate(other.translation) + self.translation,
        )
    }
}
