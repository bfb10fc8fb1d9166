// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schematic Shapes: Kurbo-native drawing primitives for schematic elements.
//!
//! Every element of a schematic is built from a handful of shapes: rectangles, circles,
//! lines, cubic Béziers, arcs and command paths. This crate gives each of them
//!
//! - a bounding box in the element's local, unscaled space,
//! - a stroke-aware point hit test ([`Shape::is_point_over`]),
//! - a draw routine targeting the small [`Canvas`] trait.
//!
//! Shapes are a closed set, so they live in the [`Shape`] enum and dispatch by `match`.
//! Drawing never mutates stored geometry: scale, offset, width multiplier and stroke color
//! are passed per call in [`DrawOverrides`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use schematic_shapes::{DisplayList, DrawOverrides, Paint, Shape, ShapeRect};
//!
//! let rect: Shape = ShapeRect::new(0.0, 0.0, 100.0, 50.0, Paint::stroke("#000", 2.0)).into();
//!
//! // Unfilled rectangles only count their outline, widened by half the line width.
//! assert!(rect.is_point_over(Point::new(100.5, 25.0)));
//! assert!(!rect.is_point_over(Point::new(50.0, 25.0)));
//!
//! // Draw at twice the size into an in-memory canvas.
//! let mut list = DisplayList::new();
//! assert!(rect.render(&mut list, &DrawOverrides::scaled(2.0)));
//! assert_eq!(list.len(), 1);
//! ```
//!
//! Shapes deserialize from the tagged JSON used by element templates:
//!
//! ```rust
//! use schematic_shapes::Shape;
//!
//! let line: Shape = serde_json::from_str(
//!     r#"{"type": "line", "x1": 0, "y1": 0, "x2": 10, "y2": 0, "lineWidth": 2}"#,
//! )
//! .unwrap();
//! assert_eq!(line.kind(), "line");
//! assert!(line.is_point_over(kurbo::Point::new(5.0, 0.9)));
//! ```

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod shapes;
pub mod style;

pub use canvas::{Canvas, DisplayList, DrawCommand, StrokeStyle};
pub use error::CanvasError;
pub use shapes::{
    FALLBACK_GLYPH_COLOR, FALLBACK_GLYPH_SIZE, MIN_EXTENT, PATH_TOLERANCE, PathCommand, Shape,
    ShapeArc, ShapeBezier, ShapeCircle, ShapeLine, ShapePath, ShapeRect, draw_fallback_glyph,
};
pub use style::{DEFAULT_STROKE, DrawOverrides, Paint};
