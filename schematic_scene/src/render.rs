// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing a page onto a [`Canvas`].

use kurbo::{Affine, Circle, Point, Rect, Shape as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use schematic_index::Bounds;
use schematic_shapes::{Canvas, DrawOverrides, PATH_TOLERANCE, StrokeStyle};

use crate::element::{ElectricalElement, TERMINAL_HIT_RADIUS};
use crate::picker::TerminalHit;
use crate::scheme::SchemePage;
use crate::view::PageView;

/// Colors and sizes used by [`render_page`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Grid dot radius in pixels.
    pub dot_radius: f64,
    /// Grid dot color.
    pub dot_color: String,
    /// Page outline color.
    pub border_color: String,
    /// Label text color.
    pub label_color: String,
    /// Stroke color of the selected element and the hovered terminal.
    pub highlight_color: String,
    /// Line width multiplier of the selected element.
    pub highlight_width_multiplier: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dot_radius: 1.0,
            dot_color: "#c0c0c0".into(),
            border_color: "#808080".into(),
            label_color: "#000000".into(),
            highlight_color: "#1e90ff".into(),
            highlight_width_multiplier: 2.0,
        }
    }
}

/// Interaction state drawn on top of the page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    /// Index of the selected element.
    pub selected: Option<usize>,
    /// Terminal under the cursor.
    pub hovered_terminal: Option<TerminalHit>,
}

/// What a [`render_page`] call drew.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Grid dots drawn.
    pub dots: usize,
    /// Elements drawn.
    pub elements: usize,
    /// Shapes replaced by the fallback glyph.
    pub failed_shapes: usize,
}

/// Draw `page` as seen through `view` into a `viewport` given in pixels.
///
/// Updates the dot grid for the view's scale first. Only dots inside the visible part of
/// the page are drawn. Hidden elements are skipped. Draw failures of single shapes are
/// logged and replaced by a fallback glyph; other canvas errors are logged and skipped.
pub fn render_page<C: Canvas + ?Sized>(
    canvas: &mut C,
    page: &mut SchemePage,
    view: &PageView,
    viewport: Rect,
    highlight: &Highlight,
    options: &RenderOptions,
) -> RenderStats {
    let mut stats = RenderStats::default();
    page.dots_mut().calculate_dots(view.scale);
    canvas.set_transform(Affine::IDENTITY);

    let border = view.transform() * page.page_rect().to_path(PATH_TOLERANCE);
    let style = StrokeStyle {
        color: options.border_color.clone(),
        width: 1.0,
    };
    if let Err(err) = canvas.stroke_path(&border, &style) {
        warn!(%err, "page border draw failed");
    }

    let visible = Rect::from_points(
        view.screen_to_page(viewport.origin()),
        view.screen_to_page(Point::new(viewport.x1, viewport.y1)),
    )
    .intersect(page.page_rect());
    if !visible.is_zero_area() {
        for dot in page.dots().dots_in_rect(Bounds::from(visible)) {
            let circle = Circle::new(view.page_to_screen(dot), options.dot_radius);
            match canvas.fill_path(&circle.to_path(PATH_TOLERANCE), &options.dot_color) {
                Ok(()) => stats.dots += 1,
                Err(err) => warn!(%err, "grid dot draw failed"),
            }
        }
    }

    for (i, element) in page.elements().iter().enumerate() {
        if !element.is_visible() {
            continue;
        }
        let selected = highlight.selected == Some(i);
        stats.failed_shapes += draw_element(canvas, element, view, selected, options);
        stats.elements += 1;
    }

    if let Some(hit) = highlight.hovered_terminal {
        draw_terminal_marker(canvas, page, view, hit, options);
    }

    canvas.set_transform(Affine::IDENTITY);
    debug!(
        dots = stats.dots,
        elements = stats.elements,
        failed = stats.failed_shapes,
        "rendered page"
    );
    stats
}

/// Rotation of an element in screen space, about its scaled bounding-box center.
fn screen_rotation(element: &ElectricalElement, view: &PageView) -> Affine {
    let theta = element.rotation.to_radians();
    if theta == 0.0 || !theta.is_finite() {
        return Affine::IDENTITY;
    }
    let pivot = view.page_to_screen(element.origin() + element.bounding_box().center().to_vec2());
    Affine::rotate_about(theta, pivot)
}

/// Draw one element; returns how many shapes fell back to the glyph.
fn draw_element<C: Canvas + ?Sized>(
    canvas: &mut C,
    element: &ElectricalElement,
    view: &PageView,
    selected: bool,
    options: &RenderOptions,
) -> usize {
    canvas.set_transform(screen_rotation(element, view));
    let overrides = DrawOverrides {
        scale: view.scale,
        line_width_multiplier: if selected {
            options.highlight_width_multiplier
        } else {
            1.0
        },
        stroke_color: selected.then(|| options.highlight_color.clone()),
        offset: view.page_to_screen(element.origin()).to_vec2(),
    };
    let failed = element
        .shapes
        .iter()
        .filter(|shape| !shape.render(canvas, &overrides))
        .count();
    let local_to_screen = overrides.transform();
    for label in &element.labels {
        let origin = local_to_screen * label.origin();
        let size = label.font_size * view.scale;
        if let Err(err) = canvas.fill_text(&label.text, origin, size, &options.label_color) {
            warn!(id = %element.id, %err, "label draw failed");
        }
    }
    failed
}

fn draw_terminal_marker<C: Canvas + ?Sized>(
    canvas: &mut C,
    page: &SchemePage,
    view: &PageView,
    hit: TerminalHit,
    options: &RenderOptions,
) {
    let Some(element) = page.elements().get(hit.element) else {
        return;
    };
    let Some(terminal) = element.terminals.get(hit.terminal) else {
        return;
    };
    let center = view.transform() * element.local_to_page() * terminal.position();
    let marker = Circle::new(center, TERMINAL_HIT_RADIUS * view.scale);
    canvas.set_transform(Affine::IDENTITY);
    let style = StrokeStyle {
        color: options.highlight_color.clone(),
        width: 1.0,
    };
    if let Err(err) = canvas.stroke_path(&marker.to_path(PATH_TOLERANCE), &style) {
        warn!(id = %element.id, %err, "terminal marker draw failed");
    }
}
