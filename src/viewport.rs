//! Fitting view-box geometry into an output frame.

use crate::geometry::{Geometry, Point, Size};

/// The single factor that fits `view_box` inside `target` without
/// distorting it: the smaller of the two axis ratios.
///
/// Returns 0 if either size is not strictly positive and finite, so a
/// degenerate frame collapses geometry to the origin rather than
/// producing infinities.
pub fn uniform_scale(view_box: Size, target: Size) -> f64 {
    if !view_box.is_drawable() || !target.is_drawable() {
        return 0.;
    }
    (target.width / view_box.width).min(target.height / view_box.height)
}

/// Scale every coordinate of `geometry` (endpoints and control points)
/// by the uniform scale for fitting `view_box` into `target`.
///
/// Segment kinds, order and close markers are preserved; no translation
/// is applied.
pub fn scale(geometry: &Geometry, view_box: Size, target: Size) -> Geometry {
    geometry.scaled(uniform_scale(view_box, target))
}

/// Uniform scale followed by a translation to the frame origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct ViewportTransform {
    pub scale: f64,
    pub origin: Point,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.,
        origin: Point::ORIGIN,
    };

    pub fn new(scale: f64, origin: Point) -> Self {
        Self { scale, origin }
    }

    /// Map a view-box point onto the canvas.
    pub fn apply(&self, p: Point) -> Point {
        p * self.scale + self.origin
    }

    /// Map a canvas point back into view-box coordinates.
    ///
    /// `None` if the transform collapses everything to a point.
    pub fn invert(&self, p: Point) -> Option<Point> {
        if self.scale == 0. || !self.scale.is_finite() {
            return None;
        }
        let d = p - self.origin;
        Some(Point::new(d.x / self.scale, d.y / self.scale))
    }

    pub fn apply_geometry(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(|p| self.apply(p))
    }
}
