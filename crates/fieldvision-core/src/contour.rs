use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A closed boundary polyline in image space (px, origin top-left, +y down).
///
/// The last point connects back to the first; the closing point is not
/// repeated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
}

/// Axis-aligned pixel extents of a contour.
///
/// Extents are inclusive: a single pixel has `width == height == 1`.
/// Sizes are `i64` so any pair of `i32` coordinates fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: i32,
    pub y: i32,
    pub width: i64,
    pub height: i64,
}

impl BoundingRect {
    #[inline]
    pub fn bottom_left(&self) -> Point2<f64> {
        Point2::new(self.x as f64, (i64::from(self.y) + self.height) as f64)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point2<f64> {
        Point2::new(
            (i64::from(self.x) + self.width) as f64,
            (i64::from(self.y) + self.height) as f64,
        )
    }
}

/// Raw polygon moments `(m00, m10, m01)`; `m00` is the signed area.
#[derive(Clone, Copy, Debug)]
struct PolygonMoments {
    m00: f64,
    m10: f64,
    m01: f64,
}

impl Contour {
    pub fn new(points: Vec<Point2<i32>>) -> Self {
        Self { points }
    }

    pub fn from_xy(points: &[(i32, i32)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Enclosed area in px² (absolute shoelace area; orientation-free).
    pub fn area(&self) -> f64 {
        self.moments().m00.abs()
    }

    /// Centroid of the enclosed region.
    ///
    /// Degenerate polygons (zero area, e.g. a line of pixels) fall back to the
    /// mean of their vertices. Returns `None` for an empty contour.
    pub fn centroid(&self) -> Option<Point2<f64>> {
        if self.points.is_empty() {
            return None;
        }
        let m = self.moments();
        if m.m00.abs() > f64::EPSILON {
            return Some(Point2::new(m.m10 / m.m00, m.m01 / m.m00));
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        Some(Point2::new(sx / n, sy / n))
    }

    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(BoundingRect {
            x: min_x,
            y: min_y,
            width: i64::from(max_x) - i64::from(min_x) + 1,
            height: i64::from(max_y) - i64::from(min_y) + 1,
        })
    }

    fn moments(&self) -> PolygonMoments {
        let n = self.points.len();
        let mut m = PolygonMoments {
            m00: 0.0,
            m10: 0.0,
            m01: 0.0,
        };
        if n < 3 {
            return m;
        }
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let (x0, y0, x1, y1) = (p.x as f64, p.y as f64, q.x as f64, q.y as f64);
            let cross = x0 * y1 - x1 * y0;
            m.m00 += cross;
            m.m10 += (x0 + x1) * cross;
            m.m01 += (y0 + y1) * cross;
        }
        m.m00 *= 0.5;
        m.m10 /= 6.0;
        m.m01 /= 6.0;
        m
    }
}

/// Pick the contour with the largest enclosed area.
///
/// Ties keep the first contour in enumeration order. Returns `None` when the
/// input is empty.
pub fn largest_contour<I>(contours: I) -> Option<Contour>
where
    I: IntoIterator<Item = Contour>,
{
    let mut best: Option<(f64, Contour)> = None;
    for contour in contours {
        let area = contour.area();
        match &best {
            Some((best_area, _)) if area <= *best_area => {}
            _ => best = Some((area, contour)),
        }
    }
    best.map(|(_, c)| c)
}
