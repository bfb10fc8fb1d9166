// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing seam between shapes and a rendering backend.
//!
//! [`Canvas`] mirrors the small slice of a 2D canvas API that shapes need: a current
//! transform, path fill and stroke, and plain text for labels. [`DisplayList`] records
//! calls in memory, which is what tests and headless tools use.

use kurbo::{Affine, BezPath, PathEl, Point};

use crate::error::CanvasError;

/// Stroke parameters for a single draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// CSS-style color string.
    pub color: String,
    /// Line width in device units.
    pub width: f64,
}

/// A 2D drawing target.
pub trait Canvas {
    /// Replace the current transform applied to subsequent paths.
    fn set_transform(&mut self, transform: Affine);

    /// The current transform.
    fn transform(&self) -> Affine;

    /// Fill `path` with `color`.
    fn fill_path(&mut self, path: &BezPath, color: &str) -> Result<(), CanvasError>;

    /// Stroke `path` with `style`.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) -> Result<(), CanvasError>;

    /// Fill `text` with its alphabetic baseline starting at `origin`.
    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f64,
        color: &str,
    ) -> Result<(), CanvasError>;
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A path fill.
    Fill {
        /// The path as passed in, before the transform.
        path: BezPath,
        /// Fill color.
        color: String,
        /// Transform in effect at the time of the call.
        transform: Affine,
    },
    /// A path stroke.
    Stroke {
        /// The path as passed in, before the transform.
        path: BezPath,
        /// Stroke parameters.
        style: StrokeStyle,
        /// Transform in effect at the time of the call.
        transform: Affine,
    },
    /// A text fill.
    Text {
        /// The string drawn.
        text: String,
        /// Baseline start, before the transform.
        origin: Point,
        /// Font size in device units.
        font_size: f64,
        /// Fill color.
        color: String,
        /// Transform in effect at the time of the call.
        transform: Affine,
    },
}

impl DrawCommand {
    /// Color used by the command.
    pub fn color(&self) -> &str {
        match self {
            Self::Fill { color, .. } | Self::Text { color, .. } => color,
            Self::Stroke { style, .. } => &style.color,
        }
    }

    /// The recorded path, if the command draws one.
    pub fn path(&self) -> Option<&BezPath> {
        match self {
            Self::Fill { path, .. } | Self::Stroke { path, .. } => Some(path),
            Self::Text { .. } => None,
        }
    }

    /// Transform in effect when the command was recorded.
    pub fn transform(&self) -> Affine {
        match self {
            Self::Fill { transform, .. }
            | Self::Stroke { transform, .. }
            | Self::Text { transform, .. } => *transform,
        }
    }
}

/// In-memory [`Canvas`] that validates and records draw calls.
///
/// Calls with non-finite geometry, bad widths or sizes, or empty colors are rejected with a
/// [`CanvasError`] and not recorded.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    transform: Affine,
}

impl DisplayList {
    /// Create an empty display list with the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all commands and reset the transform.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform = Affine::IDENTITY;
    }
}

/// Whether every point of `path` is finite.
///
/// Bounding boxes swallow NaN through `f64::min`/`max`, so this looks at each element.
pub(crate) fn path_is_finite(path: &BezPath) -> bool {
    path.elements().iter().all(|el| match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
        PathEl::QuadTo(a, b) => a.is_finite() && b.is_finite(),
        PathEl::CurveTo(a, b, c) => a.is_finite() && b.is_finite() && c.is_finite(),
        PathEl::ClosePath => true,
    })
}

fn check_path(path: &BezPath) -> Result<(), CanvasError> {
    if path_is_finite(path) {
        Ok(())
    } else {
        Err(CanvasError::NonFiniteGeometry)
    }
}

fn check_color(color: &str) -> Result<(), CanvasError> {
    if color.trim().is_empty() {
        Err(CanvasError::InvalidColor(color.into()))
    } else {
        Ok(())
    }
}

impl Canvas for DisplayList {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn fill_path(&mut self, path: &BezPath, color: &str) -> Result<(), CanvasError> {
        check_path(path)?;
        check_color(color)?;
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color: color.into(),
            transform: self.transform,
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) -> Result<(), CanvasError> {
        check_path(path)?;
        check_color(&style.color)?;
        if !style.width.is_finite() || style.width < 0.0 {
            return Err(CanvasError::InvalidLineWidth(style.width));
        }
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            style: style.clone(),
            transform: self.transform,
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f64,
        color: &str,
    ) -> Result<(), CanvasError> {
        if !origin.is_finite() {
            return Err(CanvasError::NonFiniteGeometry);
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(CanvasError::InvalidFontSize(font_size));
        }
        check_color(color)?;
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            origin,
            font_size,
            color: color.into(),
            transform: self.transform,
        });
        Ok(())
    }
}
