// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen/page coordinate mapping with pan and zoom.
//!
//! Screen space is device pixels. The page is drawn scaled by `scale`, shifted by the
//! pan `offset` and by a label gutter of `label_size` page units on the top and left
//! edges:
//!
//! ```text
//! page = (screen - offset - label_size * scale) / scale
//! ```

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Zoom limits for [`PageView::zoom_at`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewLimits {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 20.0,
        }
    }
}

impl ViewLimits {
    /// Clamp `scale` into the limits.
    pub fn clamp(&self, scale: f64) -> f64 {
        let lo = self.min_scale.min(self.max_scale);
        let hi = self.max_scale.max(self.min_scale);
        scale.clamp(lo, hi)
    }
}

/// Current pan and zoom of a page on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageView {
    /// Page units to pixels.
    pub scale: f64,
    /// Pan offset in pixels.
    pub offset: Vec2,
    /// Width of the label gutter, in page units.
    pub label_size: f64,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            label_size: 0.0,
        }
    }
}

impl PageView {
    /// A view at `scale` with no pan and no gutter.
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Builder-style gutter setter.
    pub fn with_label_size(mut self, label_size: f64) -> Self {
        self.label_size = label_size;
        self
    }

    /// Builder-style pan setter.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Pixel position of the page origin.
    pub fn origin(&self) -> Point {
        let gutter = self.label_size * self.scale;
        (self.offset + Vec2::new(gutter, gutter)).to_point()
    }

    /// Page to screen mapping.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin().to_vec2()) * Affine::scale(self.scale)
    }

    /// Map a screen point to page space.
    pub fn screen_to_page(&self, pt: Point) -> Point {
        let o = self.origin();
        Point::new((pt.x - o.x) / self.scale, (pt.y - o.y) / self.scale)
    }

    /// Map a page point to screen space.
    pub fn page_to_screen(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Pan by `delta` pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Multiply the scale by `factor`, keeping the page point under `anchor` fixed.
    ///
    /// The new scale is clamped to `limits`. Non-finite or non-positive factors are
    /// ignored. Returns whether the scale changed.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64, limits: &ViewLimits) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "ignoring invalid zoom factor");
            return false;
        }
        let scale = limits.clamp(self.scale * factor);
        if scale == self.scale {
            return false;
        }
        let page = self.screen_to_page(anchor);
        self.scale = scale;
        // Solve page_to_screen(page) == anchor for the offset.
        let gutter = Vec2::new(self.label_size, self.label_size);
        self.offset = anchor.to_vec2() - (page.to_vec2() + gutter) * scale;
        true
    }
}
