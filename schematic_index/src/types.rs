// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// Used both for quadtree node extents and for range queries.
/// `width` and `height` are never negative; constructors clamp them to zero.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from origin and size. Negative sizes are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Square of side `side` centered on `center`.
    pub fn centered(center: Point, side: f64) -> Self {
        let half = side * 0.5;
        Self::new(center.x - half, center.y - half, side, side)
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Area covered by these bounds.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The shorter of the two sides.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether the point lies inside. All four edges are inclusive.
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.max_x() && pt.y >= self.y && pt.y <= self.max_y()
    }

    /// Standard AABB overlap. Touching edges count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.x > self.max_x()
            || other.max_x() < self.x
            || other.y > self.max_y()
            || other.max_y() < self.y)
    }

    /// The four equal quadrants in the order top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Self; 4] {
        let w = self.width * 0.5;
        let h = self.height * 0.5;
        [
            Self::new(self.x, self.y, w, h),
            Self::new(self.x + w, self.y, w, h),
            Self::new(self.x, self.y + h, w, h),
            Self::new(self.x + w, self.y + h, w, h),
        ]
    }

    /// Convert to a Kurbo rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.max_x(), self.max_y())
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<Bounds> for Rect {
    fn from(b: Bounds) -> Self {
        b.to_rect()
    }
}
