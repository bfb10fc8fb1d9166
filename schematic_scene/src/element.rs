// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Electrical elements: placed groups of shapes with labels and terminals.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use schematic_shapes::Shape;
use schematic_shapes::geometry::rect_contains;

/// Smallest width and height reported for an element, in page units.
pub const MIN_ELEMENT_SIZE: f64 = 30.0;

/// Pick radius around a terminal, in element-local units.
pub const TERMINAL_HIT_RADIUS: f64 = 4.0;

/// Approximate glyph advance as a fraction of the font size.
pub const LABEL_CHAR_WIDTH: f64 = 0.6;

bitflags::bitflags! {
    /// Element flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is drawn.
        const VISIBLE  = 0b0000_0001;
        /// Element participates in picking.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// A text label anchored in element-local space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Displayed text.
    pub text: String,
    /// Left edge of the text.
    pub x: f64,
    /// Alphabetic baseline.
    pub y: f64,
    /// Font size in local units.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_font_size() -> f64 {
    12.0
}

impl Label {
    /// Create a label with the default font size.
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size: default_font_size(),
        }
    }

    /// Approximate text box: `chars * font_size * 0.6` wide, one font size tall,
    /// sitting on the baseline.
    pub fn bounding_box(&self) -> Rect {
        let chars = self.text.chars().count() as f64;
        let width = chars * self.font_size * LABEL_CHAR_WIDTH;
        Rect::new(self.x, self.y - self.font_size, self.x + width, self.y)
    }

    /// Whether `pt` (element-local) is over the text box.
    pub fn is_point_over(&self, pt: Point) -> bool {
        rect_contains(self.bounding_box(), pt)
    }

    /// Baseline origin.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A connection point of an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    /// Terminal name, unique within its element.
    pub id: String,
    /// Local x.
    pub x: f64,
    /// Local y.
    pub y: f64,
}

impl Terminal {
    /// Create a terminal.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Position in element-local space.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `pt` (element-local) lies within [`TERMINAL_HIT_RADIUS`].
    pub fn is_point_over(&self, pt: Point) -> bool {
        self.position().distance(pt) <= TERMINAL_HIT_RADIUS
    }
}

/// A placed schematic element.
///
/// Shapes, labels and terminals are stored in element-local, unrotated coordinates.
/// The element sits at `(x, y)` on the page and is rotated by `rotation` degrees
/// (clockwise on screen) about the center of its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct ElectricalElement {
    /// Element identifier.
    pub id: String,
    /// Name of the template it was created from, if any.
    pub template: Option<String>,
    /// Page x of the local origin.
    pub x: f64,
    /// Page y of the local origin.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Visibility and picking flags.
    pub flags: ElementFlags,
    /// Owned shapes, in draw order.
    pub shapes: Vec<Shape>,
    /// Owned labels, in draw order.
    pub labels: Vec<Label>,
    /// Owned terminals.
    pub terminals: Vec<Terminal>,
}

impl ElectricalElement {
    /// Create an empty element at `(x, y)`.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            template: None,
            x,
            y,
            rotation: 0.0,
            flags: ElementFlags::default(),
            shapes: Vec::new(),
            labels: Vec::new(),
            terminals: Vec::new(),
        }
    }

    /// Builder-style shape append. The shape is stored sanitized.
    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into().sanitized());
        self
    }

    /// Builder-style label append.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Builder-style terminal append.
    pub fn with_terminal(mut self, terminal: Terminal) -> Self {
        self.terminals.push(terminal);
        self
    }

    /// Builder-style rotation setter, in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Union of the shapes' local bounding boxes; `Rect::ZERO` without shapes.
    pub fn bounding_box(&self) -> Rect {
        self.shapes
            .iter()
            .map(Shape::bounding_box)
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }

    /// Width of the bounding box, at least [`MIN_ELEMENT_SIZE`].
    pub fn width(&self) -> f64 {
        self.bounding_box().width().max(MIN_ELEMENT_SIZE)
    }

    /// Height of the bounding box, at least [`MIN_ELEMENT_SIZE`].
    pub fn height(&self) -> f64 {
        self.bounding_box().height().max(MIN_ELEMENT_SIZE)
    }

    /// `width * height`, the picking priority (smaller wins).
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Page position of the local origin.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the element by `delta` page units.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Whether the element is drawn.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE)
    }

    /// Whether the element takes part in picking. Hidden elements are never picked.
    pub fn is_pickable(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE | ElementFlags::PICKABLE)
    }

    /// Rotation about the local bounding-box center.
    pub fn local_rotation(&self) -> Affine {
        let theta = self.rotation.to_radians();
        if theta == 0.0 || !theta.is_finite() {
            return Affine::IDENTITY;
        }
        Affine::rotate_about(theta, self.bounding_box().center())
    }

    /// Element-local to page mapping.
    pub fn local_to_page(&self) -> Affine {
        Affine::translate(self.origin().to_vec2()) * self.local_rotation()
    }

    /// Map a page point into element-local, unrotated space.
    pub fn page_to_local(&self, pt: Point) -> Point {
        self.local_to_page().inverse() * pt
    }

    /// Whether any shape is over the page point `pt`.
    pub fn is_point_over(&self, pt: Point) -> bool {
        let local = self.page_to_local(pt);
        self.shapes.iter().any(|s| s.is_point_over(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematic_shapes::{Paint, ShapeLine, ShapeRect};

    fn near(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn size_has_a_floor() {
        let tiny = ElectricalElement::new("D1", 0.0, 0.0).with_shape(ShapeLine::new(
            0.0,
            0.0,
            10.0,
            0.0,
            Paint::default(),
        ));
        assert_eq!(tiny.width(), 30.0);
        assert_eq!(tiny.height(), 30.0);

        let big = ElectricalElement::new("U1", 0.0, 0.0)
            .with_shape(ShapeRect::new(0.0, 0.0, 80.0, 20.0, Paint::default()))
            .with_shape(ShapeLine::new(-10.0, 10.0, 0.0, 10.0, Paint::default()));
        assert_eq!(big.bounding_box(), Rect::new(-10.0, 0.0, 80.0, 20.0));
        assert_eq!(big.width(), 90.0);
        assert_eq!(big.area(), 90.0 * 30.0);
    }

    #[test]
    fn empty_element_has_zero_bounds() {
        let e = ElectricalElement::new("X", 5.0, 5.0);
        assert_eq!(e.bounding_box(), Rect::ZERO);
        assert_eq!(e.area(), 900.0);
    }

    #[test]
    fn page_to_local_undoes_translation_and_rotation() {
        let e = ElectricalElement::new("R1", 100.0, 50.0)
            .with_shape(ShapeRect::new(0.0, 0.0, 40.0, 20.0, Paint::default()))
            .with_rotation(90.0);
        // Center stays put under rotation about it.
        assert!(near(e.page_to_local(Point::new(120.0, 60.0)), Point::new(20.0, 10.0)));
        // Clockwise quarter turn on screen: local (40, 10) lands below the center.
        let page = e.local_to_page() * Point::new(40.0, 10.0);
        assert!(near(page, Point::new(120.0, 80.0)));
        assert!(near(e.page_to_local(page), Point::new(40.0, 10.0)));
    }

    #[test]
    fn rotated_element_is_hit_on_its_rotated_outline() {
        let e = ElectricalElement::new("L1", 0.0, 0.0)
            .with_shape(ShapeLine::new(0.0, 0.0, 100.0, 0.0, Paint::stroke("#000", 4.0)))
            .with_rotation(90.0);
        // The horizontal line now stands vertically through x = 50.
        assert!(e.is_point_over(Point::new(50.0, 40.0)));
        assert!(!e.is_point_over(Point::new(80.0, 0.0)));
    }

    #[test]
    fn labels_and_terminals_hit_tests() {
        let label = Label {
            font_size: 10.0,
            ..Label::new("AB", 10.0, 20.0)
        };
        assert_eq!(label.bounding_box(), Rect::new(10.0, 10.0, 22.0, 20.0));
        assert!(label.is_point_over(Point::new(15.0, 15.0)));
        assert!(!label.is_point_over(Point::new(15.0, 21.0)));

        let t = Terminal::new("a", 0.0, 10.0);
        assert!(t.is_point_over(Point::new(3.0, 10.0)));
        assert!(t.is_point_over(Point::new(0.0, 14.0)));
        assert!(!t.is_point_over(Point::new(3.0, 13.0)));
    }

    #[test]
    fn hidden_elements_are_not_pickable() {
        let mut e = ElectricalElement::new("X", 0.0, 0.0);
        assert!(e.is_pickable());
        e.flags.remove(ElementFlags::VISIBLE);
        assert!(!e.is_pickable());
        e.flags = ElementFlags::VISIBLE;
        assert!(!e.is_pickable());
    }
}
