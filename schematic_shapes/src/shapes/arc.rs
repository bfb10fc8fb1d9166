// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arc with canvas-style angles.

use kurbo::{Arc, BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::{angle_in_span, arc_distance, canvas_sweep, point_on_circle};
use crate::shapes::{MIN_EXTENT, PATH_TOLERANCE};
use crate::style::Paint;

/// Arc of the circle around `(cx, cy)` from `start_angle` to `end_angle` (radians).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeArc {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius.
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Direction of travel from start to end.
    #[serde(default)]
    pub counterclockwise: bool,
    /// Stroke and fill.
    #[serde(flatten)]
    pub paint: Paint,
}

impl ShapeArc {
    /// Create a clockwise arc; a degenerate radius is coerced.
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        paint: Paint,
    ) -> Self {
        Self {
            cx: center.x,
            cy: center.y,
            radius,
            start_angle,
            end_angle,
            counterclockwise: false,
            paint,
        }
        .sanitized()
    }

    /// Builder-style setter for the direction.
    pub fn counterclockwise(mut self, ccw: bool) -> Self {
        self.counterclockwise = ccw;
        self
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

    /// Conservative bounds: the full circle.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center_size(self.center(), (self.radius * 2.0, self.radius * 2.0))
    }

    /// Arc outline in local units, starting at the start angle.
    pub fn local_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(point_on_circle(self.center(), self.radius, self.start_angle));
        path.extend(self.kurbo_arc().append_iter(PATH_TOLERANCE));
        path
    }

    pub(crate) fn kurbo_arc(&self) -> Arc {
        Arc {
            center: self.center(),
            radii: Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle,
            sweep_angle: canvas_sweep(self.start_angle, self.end_angle, self.counterclockwise),
            x_rotation: 0.0,
        }
    }

    /// Hit when `pt` is within the angular span and either inside the radius (filled) or
    /// within half the line width of it (stroke-only).
    pub fn is_point_over(&self, pt: Point) -> bool {
        if self.paint.is_filled() {
            let rel = pt - self.center();
            angle_in_span(
                rel.y.atan2(rel.x),
                self.start_angle,
                self.end_angle,
                self.counterclockwise,
            ) && rel.hypot() <= self.radius
        } else {
            arc_distance(
                pt,
                self.center(),
                self.radius,
                self.start_angle,
                self.end_angle,
                self.counterclockwise,
            )
            .is_some_and(|d| d <= self.paint.half_width())
        }
    }
}
