// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the drawing seam.

use thiserror::Error;

/// Errors a [`Canvas`](crate::Canvas) implementation may report for a draw call.
///
/// Shapes never propagate these past [`Shape::render`](crate::Shape::render); a failed
/// draw is replaced by a fallback glyph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// A path contained NaN or infinite coordinates.
    #[error("path contains non-finite coordinates")]
    NonFiniteGeometry,

    /// A stroke width was negative or not finite.
    #[error("invalid line width: {0}")]
    InvalidLineWidth(f64),

    /// A font size was zero, negative or not finite.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f64),

    /// A color string was empty or otherwise unusable.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The rendering backend rejected the call.
    #[error("canvas backend error: {0}")]
    Backend(String),
}
