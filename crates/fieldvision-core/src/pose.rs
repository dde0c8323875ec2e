use nalgebra::{Isometry2, Point2};
use serde::{Deserialize, Serialize};

use crate::angle::{angle_diff, wrap_angle};

/// A field-relative 2-D pose.
///
/// - `x`, `y`: position in field units (+x east, +y north).
/// - `heading`: radians, counter-clockwise from +x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2d {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Pose2d {
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    #[inline]
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Same pose with `heading` wrapped into `(-π, π]`.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            heading: wrap_angle(self.heading),
            ..self
        }
    }

    /// The pose as a rigid transform from the pose's local frame to the field.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(nalgebra::Vector2::new(self.x, self.y), self.heading)
    }

    /// Component-wise closeness; headings compare modulo a full turn.
    pub fn approx_eq(&self, other: &Pose2d, pos_eps: f64, angle_eps: f64) -> bool {
        (self.x - other.x).abs() <= pos_eps
            && (self.y - other.y).abs() <= pos_eps
            && angle_diff(self.heading, other.heading).abs() <= angle_eps
    }
}
