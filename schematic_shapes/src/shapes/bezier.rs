// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier curve.

use kurbo::{BezPath, CubicBez, ParamCurve, ParamCurveExtrema, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::style::Paint;

/// Refinement rounds of the closest-parameter search.
const REFINE_ITERATIONS: usize = 8;

/// Cubic curve from `(x1, y1)` to `(x2, y2)` with two control points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeBezier {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// First control point x.
    pub cp1x: f64,
    /// First control point y.
    pub cp1y: f64,
    /// Second control point x.
    pub cp2x: f64,
    /// Second control point y.
    pub cp2y: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
    /// Stroke; fills are ignored.
    #[serde(flatten)]
    pub paint: Paint,
}

impl ShapeBezier {
    /// Create a curve from its four control points.
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point, paint: Paint) -> Self {
        Self {
            x1: p0.x,
            y1: p0.y,
            cp1x: p1.x,
            cp1y: p1.y,
            cp2x: p2.x,
            cp2y: p2.y,
            x2: p3.x,
            y2: p3.y,
            paint: paint.sanitized(),
        }
    }

    /// Coerce paint parameters.
    pub fn sanitized(mut self) -> Self {
        self.paint = self.paint.sanitized();
        self
    }

    /// The curve as a Kurbo segment.
    pub fn curve(&self) -> CubicBez {
        CubicBez::new(
            (self.x1, self.y1),
            (self.cp1x, self.cp1y),
            (self.cp2x, self.cp2y),
            (self.x2, self.y2),
        )
    }

    /// Tight bounds of the curve in local units.
    pub fn bounding_box(&self) -> Rect {
        self.curve().bounding_box()
    }

    /// Centerline in local units.
    pub fn local_path(&self) -> BezPath {
        let c = self.curve();
        let mut path = BezPath::new();
        path.move_to(c.p0);
        path.curve_to(c.p1, c.p2, c.p3);
        path
    }

    /// Approximate distance from `pt` to the curve.
    ///
    /// Starts at `t = 0.5` and, for a fixed number of rounds, moves to whichever of
    /// `t - step`, `t`, `t + step` is closest while halving `step` (starting at 0.25).
    pub fn approx_distance(&self, pt: Point) -> f64 {
        let curve = self.curve();
        let mut t = 0.5;
        let mut step = 0.25;
        let mut best = curve.eval(t).distance(pt);
        for _ in 0..REFINE_ITERATIONS {
            let mut best_t = t;
            for candidate in [t - step, t + step] {
                let candidate = candidate.clamp(0.0, 1.0);
                let d = curve.eval(candidate).distance(pt);
                if d < best {
                    best = d;
                    best_t = candidate;
                }
            }
            t = best_t;
            step *= 0.5;
        }
        best
    }

    /// Hit when the approximate distance is within half the line width.
    pub fn is_point_over(&self, pt: Point) -> bool {
        self.approx_distance(pt) <= self.paint.half_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arch() -> ShapeBezier {
        ShapeBezier::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, -40.0),
            Point::new(100.0, -40.0),
            Point::new(100.0, 0.0),
            Paint::stroke("#000", 4.0),
        )
    }

    #[test]
    fn hits_near_the_curve() {
        let b = arch();
        // The apex of a symmetric arch is at t = 0.5.
        let apex = b.curve().eval(0.5);
        assert!(b.is_point_over(apex));
        assert!(b.is_point_over(apex + kurbo::Vec2::new(0.0, 1.5)));
        assert!(b.is_point_over(b.curve().eval(0.2)));
        assert!(!b.is_point_over(Point::new(50.0, 0.0)));
    }

    #[test]
    fn straight_curve_matches_a_line() {
        let b = ShapeBezier::new(
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(60.0, 0.0),
            Point::new(90.0, 0.0),
            Paint::stroke("#000", 2.0),
        );
        assert!(b.approx_distance(Point::new(45.0, 0.5)) < 0.51);
        assert!(!b.is_point_over(Point::new(45.0, 3.0)));
        assert_eq!(b.bounding_box(), Rect::new(0.0, 0.0, 90.0, 0.0));
    }

    #[test]
    fn bounding_box_is_tight() {
        let bb = arch().bounding_box();
        assert_eq!(bb.x0, 0.0);
        assert_eq!(bb.x1, 100.0);
        assert_eq!(bb.y1, 0.0);
        assert!((bb.y0 + 30.0).abs() < 1e-9, "apex at y = -30, got {}", bb.y0);
    }
}
