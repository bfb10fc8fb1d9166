// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking elements, labels and terminals under a page-space cursor.
//!
//! Every query maps the page point into each element's local, unrotated frame before
//! asking shapes, labels or terminals. Only pickable elements are considered.

use kurbo::Point;
use tracing::trace;

use crate::element::ElectricalElement;

/// An element hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementHit {
    /// Index of the element in the page's element list.
    pub element: usize,
    /// The cursor in the element's local frame.
    pub local: Point,
}

/// A label hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelHit {
    /// Index of the owning element.
    pub element: usize,
    /// Index of the label within the element.
    pub label: usize,
}

/// A terminal hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TerminalHit {
    /// Index of the owning element.
    pub element: usize,
    /// Index of the terminal within the element.
    pub terminal: usize,
}

/// Pick the element whose shapes contain `pt`.
///
/// Among several hits the element with the smallest `width * height` wins; equal areas
/// keep the earliest element.
pub fn find_element_under_cursor(
    elements: &[ElectricalElement],
    pt: Point,
) -> Option<ElementHit> {
    let mut best: Option<(ElementHit, f64)> = None;
    for (i, element) in elements.iter().enumerate() {
        if !element.is_pickable() {
            continue;
        }
        let local = element.page_to_local(pt);
        if !element.shapes.iter().any(|s| s.is_point_over(local)) {
            continue;
        }
        let area = element.area();
        trace!(id = %element.id, area, "element under cursor");
        match best {
            Some((_, best_area)) if best_area <= area => {}
            _ => best = Some((ElementHit { element: i, local }, area)),
        }
    }
    best.map(|(hit, _)| hit)
}

/// Pick the last-drawn label whose text box contains `pt`.
pub fn find_label_under_cursor(elements: &[ElectricalElement], pt: Point) -> Option<LabelHit> {
    elements
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, e)| e.is_pickable())
        .find_map(|(i, element)| {
            let local = element.page_to_local(pt);
            let label = element.labels.iter().rposition(|l| l.is_point_over(local))?;
            trace!(id = %element.id, label, "label under cursor");
            Some(LabelHit { element: i, label })
        })
}

/// Pick the last-drawn terminal within pick radius of `pt`.
pub fn find_terminal_under_cursor(
    elements: &[ElectricalElement],
    pt: Point,
) -> Option<TerminalHit> {
    elements
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, e)| e.is_pickable())
        .find_map(|(i, element)| {
            let local = element.page_to_local(pt);
            let terminal = element
                .terminals
                .iter()
                .rposition(|t| t.is_point_over(local))?;
            trace!(id = %element.id, terminal, "terminal under cursor");
            Some(TerminalHit {
                element: i,
                terminal,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementFlags, Label, Terminal};
    use schematic_shapes::{Paint, ShapeRect};

    fn boxed(id: &str, x: f64, y: f64, w: f64, h: f64) -> ElectricalElement {
        let paint = Paint::stroke("#000", 2.0).with_fill("#fff");
        ElectricalElement::new(id, x, y).with_shape(ShapeRect::new(0.0, 0.0, w, h, paint))
    }

    #[test]
    fn smallest_area_wins() {
        let elements = [
            boxed("big", 0.0, 0.0, 200.0, 200.0),
            boxed("small", 50.0, 50.0, 40.0, 40.0),
        ];
        let hit = find_element_under_cursor(&elements, Point::new(60.0, 60.0)).unwrap();
        assert_eq!(hit.element, 1);
        assert_eq!(hit.local, Point::new(10.0, 10.0));
        let hit = find_element_under_cursor(&elements, Point::new(150.0, 150.0)).unwrap();
        assert_eq!(hit.element, 0);
        assert!(find_element_under_cursor(&elements, Point::new(500.0, 0.0)).is_none());
    }

    #[test]
    fn equal_areas_keep_the_first_element() {
        let elements = [
            boxed("a", 0.0, 0.0, 50.0, 50.0),
            boxed("b", 10.0, 10.0, 50.0, 50.0),
        ];
        let hit = find_element_under_cursor(&elements, Point::new(20.0, 20.0)).unwrap();
        assert_eq!(hit.element, 0);
    }

    #[test]
    fn size_floor_applies_to_priority() {
        // Both are floored to 30 x 30, so the earlier one wins.
        let elements = [
            boxed("a", 0.0, 0.0, 10.0, 10.0),
            boxed("b", 0.0, 0.0, 5.0, 5.0),
        ];
        let hit = find_element_under_cursor(&elements, Point::new(2.0, 2.0)).unwrap();
        assert_eq!(hit.element, 0);
    }

    #[test]
    fn unpickable_elements_are_skipped() {
        let mut elements = [
            boxed("small", 0.0, 0.0, 40.0, 40.0),
            boxed("big", 0.0, 0.0, 100.0, 100.0),
        ];
        elements[0].flags = ElementFlags::VISIBLE;
        let hit = find_element_under_cursor(&elements, Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.element, 1);
    }

    #[test]
    fn rotated_element_picks_in_its_local_frame() {
        let elements = [boxed("r", 100.0, 100.0, 80.0, 20.0).with_rotation(90.0)];
        // Rotated about (140, 110): the box now spans x 130..150, y 70..150.
        assert!(find_element_under_cursor(&elements, Point::new(140.0, 75.0)).is_some());
        assert!(find_element_under_cursor(&elements, Point::new(105.0, 110.0)).is_none());
    }

    #[test]
    fn last_drawn_label_and_terminal_win() {
        let a = boxed("a", 0.0, 0.0, 50.0, 50.0)
            .with_label(Label::new("A", 0.0, 12.0))
            .with_terminal(Terminal::new("1", 0.0, 25.0));
        let b = boxed("b", 0.0, 0.0, 50.0, 50.0)
            .with_label(Label::new("B", 0.0, 12.0))
            .with_label(Label::new("B2", 0.0, 14.0))
            .with_terminal(Terminal::new("1", 0.0, 25.0))
            .with_terminal(Terminal::new("2", 1.0, 25.0));
        let elements = [a, b];
        assert_eq!(
            find_label_under_cursor(&elements, Point::new(3.0, 8.0)),
            Some(LabelHit {
                element: 1,
                label: 1
            })
        );
        assert_eq!(
            find_terminal_under_cursor(&elements, Point::new(0.5, 26.0)),
            Some(TerminalHit {
                element: 1,
                terminal: 1
            })
        );
        assert!(find_terminal_under_cursor(&elements, Point::new(20.0, 20.0)).is_none());
    }
}
