// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheme pages and their JSON asset format.
//!
//! A scheme asset names the page size, a set of element templates, and the placed
//! element instances:
//!
//! ```json
//! {
//!   "page": { "width": 1123, "height": 794, "labelSize": 20, "dotsPerLength": 30 },
//!   "templates": {
//!     "resistor": {
//!       "shapes": [{ "type": "rect", "x": 0, "y": 0, "width": 40, "height": 12 }],
//!       "labels": [{ "text": "R", "x": 0, "y": -2 }],
//!       "terminals": [{ "id": "1", "x": 0, "y": 6 }, { "id": "2", "x": 40, "y": 6 }]
//!     }
//!   },
//!   "elements": [{ "id": "R1", "template": "resistor", "x": 100, "y": 80, "rotation": 90 }]
//! }
//! ```
//!
//! Each instance gets its own copy of the template's parts, followed by any parts
//! listed on the instance itself.

use std::collections::HashMap;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use schematic_index::{DotsConfig, PageDots};
use schematic_shapes::Shape;

use crate::element::{ElectricalElement, ElementFlags, Label, Terminal};
use crate::picker::{
    ElementHit, LabelHit, TerminalHit, find_element_under_cursor, find_label_under_cursor,
    find_terminal_under_cursor,
};
use crate::view::PageView;

/// Errors raised while building a [`SchemePage`].
#[derive(Error, Debug)]
pub enum SchemeError {
    /// The asset is not valid JSON or does not match the format.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An element names a template that is not defined.
    #[error("element '{element}' uses unknown template '{template}'")]
    UnknownTemplate {
        /// Element id.
        element: String,
        /// Missing template name.
        template: String,
    },

    /// The page width or height is not a positive finite number.
    #[error("invalid page size {width} x {height}")]
    InvalidPageSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// Page dimensions and grid settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    /// Page width in page units (pixels at scale 1).
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Label gutter on the top and left edges.
    #[serde(default)]
    pub label_size: f64,
    /// Dot grid density.
    #[serde(flatten)]
    pub dots: DotsConfig,
}

impl PageSettings {
    /// Settings for a `width` by `height` page with no gutter and default dots.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            label_size: 0.0,
            dots: DotsConfig::default(),
        }
    }
}

/// Reusable parts of an element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementTemplate {
    /// Shapes in local coordinates.
    pub shapes: Vec<Shape>,
    /// Labels in local coordinates.
    pub labels: Vec<Label>,
    /// Terminals in local coordinates.
    pub terminals: Vec<Terminal>,
}

/// A placed element as written in the asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInstance {
    /// Element id.
    pub id: String,
    /// Template to copy parts from.
    #[serde(default)]
    pub template: Option<String>,
    /// Page x.
    pub x: f64,
    /// Page y.
    pub y: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Hidden elements are neither drawn nor picked.
    #[serde(default = "yes")]
    pub visible: bool,
    /// Locked elements are drawn but not picked.
    #[serde(default)]
    pub locked: bool,
    /// Extra parts specific to this instance.
    #[serde(flatten)]
    pub parts: ElementTemplate,
}

fn yes() -> bool {
    true
}

/// The whole asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemeDocument {
    /// Page settings.
    pub page: PageSettings,
    /// Templates by name.
    #[serde(default)]
    pub templates: HashMap<String, ElementTemplate>,
    /// Placed elements in draw order.
    #[serde(default)]
    pub elements: Vec<ElementInstance>,
}

/// A page with its dot grid and elements.
#[derive(Clone, Debug)]
pub struct SchemePage {
    settings: PageSettings,
    dots: PageDots,
    elements: Vec<ElectricalElement>,
}

impl SchemePage {
    /// Create an empty page. The size must be positive and finite.
    pub fn new(settings: PageSettings) -> Result<Self, SchemeError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(settings.width) || !valid(settings.height) {
            return Err(SchemeError::InvalidPageSize {
                width: settings.width,
                height: settings.height,
            });
        }
        let dots = PageDots::with_config(settings.width, settings.height, &settings.dots);
        Ok(Self {
            settings,
            dots,
            elements: Vec::new(),
        })
    }

    /// Parse a scheme asset.
    pub fn from_json(json: &str) -> Result<Self, SchemeError> {
        let doc: SchemeDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Build a page from a parsed asset, instantiating every element.
    pub fn from_document(doc: SchemeDocument) -> Result<Self, SchemeError> {
        let mut page = Self::new(doc.page)?;
        for instance in doc.elements {
            let element = instantiate(instance, &doc.templates)?;
            page.elements.push(element);
        }
        debug!(
            width = page.settings.width,
            height = page.settings.height,
            templates = doc.templates.len(),
            elements = page.elements.len(),
            "loaded scheme page"
        );
        Ok(page)
    }

    /// Page settings.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// The page rectangle in page units.
    pub fn page_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.settings.width, self.settings.height)
    }

    /// A view at `scale` using this page's label gutter.
    pub fn view(&self, scale: f64) -> PageView {
        PageView::new(scale).with_label_size(self.settings.label_size)
    }

    /// The dot grid.
    pub fn dots(&self) -> &PageDots {
        &self.dots
    }

    /// Mutable dot grid, for [`PageDots::calculate_dots`].
    pub fn dots_mut(&mut self) -> &mut PageDots {
        &mut self.dots
    }

    /// Elements in draw order.
    pub fn elements(&self) -> &[ElectricalElement] {
        &self.elements
    }

    /// Mutable elements, for moving and restyling.
    pub fn elements_mut(&mut self) -> &mut [ElectricalElement] {
        &mut self.elements
    }

    /// Append an element on top.
    pub fn push_element(&mut self, element: ElectricalElement) {
        self.elements.push(element);
    }

    /// Nearest grid dot to `pt`, or `pt` itself when no dot is close enough.
    pub fn snap_to_grid(&self, pt: Point) -> Point {
        self.dots.find_closest_dot(pt).unwrap_or(pt)
    }

    /// Element under a screen-space cursor.
    pub fn element_under_cursor(&self, view: &PageView, screen: Point) -> Option<ElementHit> {
        find_element_under_cursor(&self.elements, view.screen_to_page(screen))
    }

    /// Label under a screen-space cursor.
    pub fn label_under_cursor(&self, view: &PageView, screen: Point) -> Option<LabelHit> {
        find_label_under_cursor(&self.elements, view.screen_to_page(screen))
    }

    /// Terminal under a screen-space cursor.
    pub fn terminal_under_cursor(&self, view: &PageView, screen: Point) -> Option<TerminalHit> {
        find_terminal_under_cursor(&self.elements, view.screen_to_page(screen))
    }
}

fn instantiate(
    instance: ElementInstance,
    templates: &HashMap<String, ElementTemplate>,
) -> Result<ElectricalElement, SchemeError> {
    let mut element = ElectricalElement::new(instance.id, instance.x, instance.y);
    element.rotation = instance.rotation;
    if let Some(name) = instance.template {
        let Some(template) = templates.get(&name) else {
            return Err(SchemeError::UnknownTemplate {
                element: element.id,
                template: name,
            });
        };
        element.shapes.extend(template.shapes.iter().cloned());
        element.labels.extend(template.labels.iter().cloned());
        element.terminals.extend(template.terminals.iter().cloned());
        element.template = Some(name);
    }
    element.shapes.extend(instance.parts.shapes);
    element.labels.extend(instance.parts.labels);
    element.terminals.extend(instance.parts.terminals);
    element.shapes = element.shapes.into_iter().map(Shape::sanitized).collect();
    if !instance.visible {
        element.flags.remove(ElementFlags::VISIBLE);
    }
    if instance.locked {
        element.flags.remove(ElementFlags::PICKABLE);
    }
    Ok(element)
}
