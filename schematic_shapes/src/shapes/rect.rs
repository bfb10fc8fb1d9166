// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangle.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::geometry::rect_contains;
use crate::shapes::MIN_EXTENT;
use crate::style::Paint;

/// Rectangle with its origin at the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Stroke and fill.
    #[serde(flatten)]
    pub paint: Paint,
}

impl ShapeRect {
    /// Create a rectangle; degenerate sizes are coerced.
    pub fn new(x: f64, y: f64, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            paint,
        }
        .sanitized()
    }

    /// Coerce zero, negative or non-finite sizes to a small positive extent.
    pub fn sanitized(mut self) -> Self {
        if !(self.width.is_finite() && self.width > 0.0) {
            self.width = MIN_EXTENT;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            self.height = MIN_EXTENT;
        }
        self.paint = self.paint.sanitized();
        self
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Bounds in local units.
    pub fn bounding_box(&self) -> Rect {
        self.rect()
    }

    /// Outline in local units.
    pub fn local_path(&self) -> BezPath {
        let r = self.rect();
        let mut path = BezPath::new();
        path.move_to((r.x0, r.y0));
        path.line_to((r.x1, r.y0));
        path.line_to((r.x1, r.y1));
        path.line_to((r.x0, r.y1));
        path.close_path();
        path
    }

    /// Filled rectangles hit anywhere inside; stroke-only ones only on the stroke band.
    pub fn is_point_over(&self, pt: Point) -> bool {
        let r = self.rect();
        if self.paint.is_filled() {
            return rect_contains(r, pt);
        }
        let hw = self.paint.half_width();
        let outer = r.inflate(hw, hw);
        if !rect_contains(outer, pt) {
            return false;
        }
        let inner = Rect::new(r.x0 + hw, r.y0 + hw, r.x1 - hw, r.y1 - hw);
        let inner_empty = inner.x0 > inner.x1 || inner.y0 > inner.y1;
        inner_empty || !rect_contains(inner, pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> ShapeRect {
        ShapeRect::new(0.0, 0.0, 100.0, 50.0, Paint::stroke("#000", 2.0).with_fill("none"))
    }

    #[test]
    fn stroke_only_hits_the_band() {
        let r = outline();
        assert!(r.is_point_over(Point::new(0.0, 25.0)));
        assert!(r.is_point_over(Point::new(-1.0, 25.0)));
        assert!(r.is_point_over(Point::new(100.5, 49.0)));
        assert!(!r.is_point_over(Point::new(50.0, 25.0)));
        assert!(!r.is_point_over(Point::new(-1.5, 25.0)));
    }

    #[test]
    fn filled_hits_the_interior() {
        let r = ShapeRect::new(0.0, 0.0, 100.0, 50.0, Paint::stroke("#000", 2.0).with_fill("#fff"));
        assert!(r.is_point_over(Point::new(50.0, 25.0)));
        assert!(r.is_point_over(Point::new(100.0, 50.0)));
        assert!(!r.is_point_over(Point::new(100.1, 50.0)));
    }

    #[test]
    fn thin_rect_is_all_stroke() {
        let r = ShapeRect::new(0.0, 0.0, 2.0, 40.0, Paint::stroke("#000", 4.0));
        assert!(r.is_point_over(Point::new(1.0, 20.0)));
    }

    #[test]
    fn degenerate_size_is_coerced() {
        let r = ShapeRect::new(5.0, 5.0, 0.0, -3.0, Paint::default());
        assert_eq!(r.bounding_box(), Rect::new(5.0, 5.0, 6.0, 6.0));
    }
}
