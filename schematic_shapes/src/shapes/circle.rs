// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full circle.

use kurbo::{BezPath, Circle, Point, Rect, Shape as _};
use serde::{Deserialize, Serialize};

use crate::shapes::{MIN_EXTENT, PATH_TOLERANCE};
use crate::style::Paint;

/// Circle around `(cx, cy)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeCircle {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius.
    pub radius: f64,
    /// Stroke and fill.
    #[serde(flatten)]
    pub paint: Paint,
}

impl ShapeCircle {
    /// Create a circle; a degenerate radius is coerced.
    pub fn new(cx: f64, cy: f64, radius: f64, paint: Paint) -> Self {
        Self {
            cx,
            cy,
            radius,
            paint,
        }
        .sanitized()
    }

    /// Coerce a zero, negative or non-finite radius to a small positive one.
    pub fn sanitized(mut self) -> Self {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            self.radius = MIN_EXTENT;
        }
        self.paint = self.paint.sanitized();
        self
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Bounds in local units.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center_size(self.center(), (self.radius * 2.0, self.radius * 2.0))
    }

    /// Outline in local units.
    pub fn local_path(&self) -> BezPath {
        Circle::new(self.center(), self.radius).to_path(PATH_TOLERANCE)
    }

    /// Filled circles hit inside the radius; stroke-only ones within half the line
    /// width of the rim.
    pub fn is_point_over(&self, pt: Point) -> bool {
        let d = pt.distance(self.center());
        if self.paint.is_filled() {
            d <= self.radius
        } else {
            (d - self.radius).abs() <= self.paint.half_width()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_only_hits_the_rim() {
        let c = ShapeCircle::new(10.0, 10.0, 5.0, Paint::stroke("#000", 2.0));
        assert!(c.is_point_over(Point::new(15.0, 10.0)));
        assert!(c.is_point_over(Point::new(10.0, 15.9)));
        assert!(!c.is_point_over(Point::new(10.0, 10.0)));
        assert!(!c.is_point_over(Point::new(17.0, 10.0)));
    }

    #[test]
    fn filled_hits_inside() {
        let c = ShapeCircle::new(0.0, 0.0, 5.0, Paint::default().with_fill("red"));
        assert!(c.is_point_over(Point::new(1.0, 1.0)));
        assert!(!c.is_point_over(Point::new(4.0, 4.0)));
    }

    #[test]
    fn bounding_box_spans_the_diameter() {
        let c = ShapeCircle::new(10.0, 20.0, -1.0, Paint::default());
        assert_eq!(c.radius, MIN_EXTENT);
        let c = ShapeCircle::new(10.0, 20.0, 4.0, Paint::default());
        assert_eq!(c.bounding_box(), Rect::new(6.0, 16.0, 14.0, 24.0));
    }
}
