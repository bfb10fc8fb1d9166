// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight segment.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::geometry::segment_distance;
use crate::style::Paint;

/// Segment from `(x1, y1)` to `(x2, y2)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeLine {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
    /// Stroke; fills are ignored.
    #[serde(flatten)]
    pub paint: Paint,
}

impl ShapeLine {
    /// Create a segment.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, paint: Paint) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            paint: paint.sanitized(),
        }
    }

    /// Start point.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// End point.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Coerce paint parameters.
    pub fn sanitized(mut self) -> Self {
        self.paint = self.paint.sanitized();
        self
    }

    /// Bounds in local units.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.start(), self.end())
    }

    /// Centerline in local units.
    pub fn local_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start());
        path.line_to(self.end());
        path
    }

    /// Hit when the perpendicular distance is within half the line width and the
    /// projection falls between the endpoints.
    pub fn is_point_over(&self, pt: Point) -> bool {
        segment_distance(pt, self.start(), self.end())
            .is_some_and(|d| d <= self.paint.half_width())
    }
}
