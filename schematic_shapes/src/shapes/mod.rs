// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of shape primitives and their common operations.
//!
//! [`Shape`] dispatches bounding boxes, hit tests and drawing to the variant payloads.
//! Drawing scales the stored local geometry through [`DrawOverrides`]; a failed draw is
//! replaced by a small red cross so one bad shape never aborts a page.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::canvas::{Canvas, StrokeStyle, path_is_finite};
use crate::error::CanvasError;
use crate::style::{DEFAULT_STROKE, DrawOverrides, Paint};

pub mod arc;
pub mod bezier;
pub mod circle;
pub mod line;
pub mod path;
pub mod rect;

pub use arc::ShapeArc;
pub use bezier::ShapeBezier;
pub use circle::ShapeCircle;
pub use line::ShapeLine;
pub use path::{PathCommand, ShapePath};
pub use rect::ShapeRect;

/// Size given to degenerate widths, heights and radii.
pub const MIN_EXTENT: f64 = 1.0;

/// Flattening tolerance for circles and arcs converted to Bézier paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Side length of the fallback cross, in device units.
pub const FALLBACK_GLYPH_SIZE: f64 = 6.0;

/// Color of the fallback cross.
pub const FALLBACK_GLYPH_COLOR: &str = "#ff0000";

/// A shape primitive owned by an element.
///
/// Deserialized shapes come out [sanitized](Shape::sanitized).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect(ShapeRect),
    /// Full circle.
    Circle(ShapeCircle),
    /// Straight segment.
    Line(ShapeLine),
    /// Cubic curve.
    Bezier(ShapeBezier),
    /// Circular arc.
    Arc(ShapeArc),
    /// Command path.
    Path(ShapePath),
}

/// Wire form of [`Shape`], before sanitizing.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ShapeRepr {
    Rect(ShapeRect),
    Circle(ShapeCircle),
    Line(ShapeLine),
    Bezier(ShapeBezier),
    Arc(ShapeArc),
    Path(ShapePath),
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let shape = match ShapeRepr::deserialize(deserializer)? {
            ShapeRepr::Rect(s) => Self::Rect(s),
            ShapeRepr::Circle(s) => Self::Circle(s),
            ShapeRepr::Line(s) => Self::Line(s),
            ShapeRepr::Bezier(s) => Self::Bezier(s),
            ShapeRepr::Arc(s) => Self::Arc(s),
            ShapeRepr::Path(s) => Self::Path(s),
        };
        Ok(shape.sanitized())
    }
}

impl Shape {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Line(_) => "line",
            Self::Bezier(_) => "bezier",
            Self::Arc(_) => "arc",
            Self::Path(_) => "path",
        }
    }

    /// Paint parameters.
    pub fn paint(&self) -> &Paint {
        match self {
            Self::Rect(s) => &s.paint,
            Self::Circle(s) => &s.paint,
            Self::Line(s) => &s.paint,
            Self::Bezier(s) => &s.paint,
            Self::Arc(s) => &s.paint,
            Self::Path(s) => &s.paint,
        }
    }

    /// Coerce degenerate geometry and paint parameters.
    pub fn sanitized(self) -> Self {
        match self {
            Self::Rect(s) => Self::Rect(s.sanitized()),
            Self::Circle(s) => Self::Circle(s.sanitized()),
            Self::Line(s) => Self::Line(s.sanitized()),
            Self::Bezier(s) => Self::Bezier(s.sanitized()),
            Self::Arc(s) => Self::Arc(s.sanitized()),
            Self::Path(s) => Self::Path(s.sanitized()),
        }
    }

    /// Bounds in the shape's local, unscaled space.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(s) => s.bounding_box(),
            Self::Circle(s) => s.bounding_box(),
            Self::Line(s) => s.bounding_box(),
            Self::Bezier(s) => s.bounding_box(),
            Self::Arc(s) => s.bounding_box(),
            Self::Path(s) => s.bounding_box(),
        }
    }

    /// Whether `pt`, given in the same local unscaled space as the shape, is over it.
    ///
    /// Tolerances use the stored line width, so they do not change with zoom.
    pub fn is_point_over(&self, pt: Point) -> bool {
        match self {
            Self::Rect(s) => s.is_point_over(pt),
            Self::Circle(s) => s.is_point_over(pt),
            Self::Line(s) => s.is_point_over(pt),
            Self::Bezier(s) => s.is_point_over(pt),
            Self::Arc(s) => s.is_point_over(pt),
            Self::Path(s) => s.is_point_over(pt),
        }
    }

    /// Outline in local units.
    pub fn local_path(&self) -> BezPath {
        match self {
            Self::Rect(s) => s.local_path(),
            Self::Circle(s) => s.local_path(),
            Self::Line(s) => s.local_path(),
            Self::Bezier(s) => s.local_path(),
            Self::Arc(s) => s.local_path(),
            Self::Path(s) => s.local_path(),
        }
    }

    fn fillable(&self) -> bool {
        !matches!(self, Self::Line(_) | Self::Bezier(_))
    }

    /// Draw the shape, scaled and offset by `overrides`. Errors come from the canvas.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        overrides: &DrawOverrides,
    ) -> Result<(), CanvasError> {
        let paint = self.paint();
        let path = overrides.transform() * self.local_path();
        if self.fillable()
            && paint.is_filled()
            && let Some(fill) = paint.fill_style.as_deref()
        {
            canvas.fill_path(&path, fill)?;
        }
        let color = match (&overrides.stroke_color, paint.is_stroked()) {
            (Some(c), _) => c.as_str(),
            (None, true) => paint.stroke_style.as_deref().unwrap_or(DEFAULT_STROKE),
            (None, false) => return Ok(()),
        };
        let style = StrokeStyle {
            color: color.into(),
            width: paint.rendered_width(overrides.scale, overrides.line_width_multiplier),
        };
        canvas.stroke_path(&path, &style)
    }

    /// Draw the shape, falling back to a red cross if the canvas rejects it.
    ///
    /// Returns `true` when the shape itself was drawn.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, overrides: &DrawOverrides) -> bool {
        let Err(err) = self.draw(canvas, overrides) else {
            return true;
        };
        warn!(kind = self.kind(), %err, "shape draw failed, drawing fallback glyph");
        let center = overrides.transform() * self.bounding_box().center();
        let center = if center.is_finite() && path_is_finite(&self.local_path()) {
            center
        } else {
            overrides.offset.to_point()
        };
        if let Err(err) = draw_fallback_glyph(canvas, center) {
            warn!(%err, "fallback glyph could not be drawn");
        }
        false
    }
}

/// Stroke a small red cross centered on `center` (device units).
pub fn draw_fallback_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
) -> Result<(), CanvasError> {
    let h = FALLBACK_GLYPH_SIZE * 0.5;
    let mut path = BezPath::new();
    path.move_to((center.x - h, center.y - h));
    path.line_to((center.x + h, center.y + h));
    path.move_to((center.x + h, center.y - h));
    path.line_to((center.x - h, center.y + h));
    canvas.stroke_path(
        &path,
        &StrokeStyle {
            color: FALLBACK_GLYPH_COLOR.into(),
            width: 1.0,
        },
    )
}

impl From<ShapeRect> for Shape {
    fn from(s: ShapeRect) -> Self {
        Self::Rect(s)
    }
}

impl From<ShapeCircle> for Shape {
    fn from(s: ShapeCircle) -> Self {
        Self::Circle(s)
    }
}

impl From<ShapeLine> for Shape {
    fn from(s: ShapeLine) -> Self {
        Self::Line(s)
    }
}

impl From<ShapeBezier> for Shape {
    fn from(s: ShapeBezier) -> Self {
        Self::Bezier(s)
    }
}

impl From<ShapeArc> for Shape {
    fn from(s: ShapeArc) -> Self {
        Self::Arc(s)
    }
}

impl From<ShapePath> for Shape {
    fn from(s: ShapePath) -> Self {
        Self::Path(s)
    }
}
