// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint parameters stored on shapes and per-draw overrides.

use kurbo::{Affine, Vec2};
use serde::{Deserialize, Serialize};

/// Stroke color used when a shape does not specify one.
pub const DEFAULT_STROKE: &str = "#000000";

/// Paint parameters of a shape.
///
/// `line_width` is in the shape's unscaled local units. It is the tolerance for hit
/// tests as is; rendering scales it and clamps the result to
/// `[min_line_width, max_line_width]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paint {
    /// Stroke color, or `None`/`"none"` for no stroke.
    pub stroke_style: Option<String>,
    /// Fill color, or `None`/`"none"`/`"transparent"` for no fill.
    pub fill_style: Option<String>,
    /// Unscaled line width.
    pub line_width: f64,
    /// Lower bound of the rendered line width.
    pub min_line_width: f64,
    /// Upper bound of the rendered line width.
    pub max_line_width: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            stroke_style: Some(DEFAULT_STROKE.into()),
            fill_style: None,
            line_width: 1.0,
            min_line_width: 0.5,
            max_line_width: 10.0,
        }
    }
}

fn is_visible_color(color: Option<&str>) -> bool {
    match color.map(str::trim) {
        None | Some("" | "none" | "transparent") => false,
        Some(_) => true,
    }
}

impl Paint {
    /// A stroke-only paint with the given color and width.
    pub fn stroke(color: &str, line_width: f64) -> Self {
        Self {
            stroke_style: Some(color.into()),
            line_width,
            ..Self::default()
        }
    }

    /// Builder-style setter for the fill color.
    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill_style = Some(color.into());
        self
    }

    /// Whether the interior is painted.
    pub fn is_filled(&self) -> bool {
        is_visible_color(self.fill_style.as_deref())
    }

    /// Whether the outline is painted.
    pub fn is_stroked(&self) -> bool {
        is_visible_color(self.stroke_style.as_deref())
    }

    /// Hit-test tolerance: half the unscaled line width.
    pub fn half_width(&self) -> f64 {
        self.line_width * 0.5
    }

    /// Line width on screen for a draw at `scale` with a width `multiplier`.
    ///
    /// Out-of-order bounds are swapped rather than trusted, so unsanitized paints still
    /// get a width between them.
    pub fn rendered_width(&self, scale: f64, multiplier: f64) -> f64 {
        let lo = self.min_line_width.min(self.max_line_width);
        let hi = self.max_line_width.max(self.min_line_width);
        (self.line_width * scale * multiplier).max(lo).min(hi)
    }

    /// Coerce bad widths to defaults and order the width bounds.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            self.line_width = defaults.line_width;
        }
        if !self.min_line_width.is_finite() || self.min_line_width < 0.0 {
            self.min_line_width = defaults.min_line_width;
        }
        if !self.max_line_width.is_finite() {
            self.max_line_width = defaults.max_line_width;
        }
        self.max_line_width = self.max_line_width.max(self.min_line_width);
        self
    }
}

/// Per-draw adjustments. Stored shape geometry is never modified by a draw.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOverrides {
    /// Multiplier from local units to device units.
    pub scale: f64,
    /// Extra factor applied to the rendered line width (for highlighting).
    pub line_width_multiplier: f64,
    /// Replaces the stroke color when set.
    pub stroke_color: Option<String>,
    /// Device-space offset added after scaling.
    pub offset: Vec2,
}

impl Default for DrawOverrides {
    fn default() -> Self {
        Self {
            scale: 1.0,
            line_width_multiplier: 1.0,
            stroke_color: None,
            offset: Vec2::ZERO,
        }
    }
}

impl DrawOverrides {
    /// Overrides that only set the scale.
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Local to device mapping: scale first, then offset.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }
}
