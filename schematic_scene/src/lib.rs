// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schematic Scene: pages of electrical elements on a pannable, zoomable canvas.
//!
//! This crate ties the dot grid from [`schematic_index`] and the shapes from
//! [`schematic_shapes`] into an editable page:
//!
//! - [`ElectricalElement`]: a placed, optionally rotated group of shapes, labels and
//!   terminals with [`ElementFlags`] for visibility and picking.
//! - [`PageView`]: screen/page mapping, pan and anchored zoom.
//! - [`find_element_under_cursor`] and friends: picking in each element's local frame.
//!   Among overlapping elements the smallest one wins.
//! - [`SchemePage`]: a page loaded from the JSON scheme asset.
//! - [`render_page`]: grid, elements and highlights drawn onto any [`Canvas`].
//!
//! [`Canvas`]: schematic_shapes::Canvas
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use schematic_scene::{Highlight, RenderOptions, SchemePage, render_page};
//! use schematic_shapes::DisplayList;
//!
//! let mut page = SchemePage::from_json(r#"{
//!     "page": { "width": 400, "height": 300, "labelSize": 10 },
//!     "templates": {
//!         "lamp": { "shapes": [{ "type": "circle", "cx": 10, "cy": 10, "radius": 10 }] }
//!     },
//!     "elements": [{ "id": "H1", "template": "lamp", "x": 50, "y": 50 }]
//! }"#)
//! .unwrap();
//!
//! // Click on the circle's outline at scale 2.
//! let view = page.view(2.0);
//! let hit = page.element_under_cursor(&view, Point::new(160.0, 140.0)).unwrap();
//! assert_eq!(page.elements()[hit.element].id, "H1");
//!
//! let mut canvas = DisplayList::new();
//! let stats = render_page(
//!     &mut canvas,
//!     &mut page,
//!     &view,
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     &Highlight { selected: Some(hit.element), ..Highlight::default() },
//!     &RenderOptions::default(),
//! );
//! assert_eq!(stats.elements, 1);
//! assert!(stats.dots > 0);
//! ```

pub mod element;
pub mod picker;
pub mod render;
pub mod scheme;
pub mod view;

pub use element::{
    ElectricalElement, ElementFlags, LABEL_CHAR_WIDTH, Label, MIN_ELEMENT_SIZE,
    TERMINAL_HIT_RADIUS, Terminal,
};
pub use picker::{
    ElementHit, LabelHit, TerminalHit, find_element_under_cursor, find_label_under_cursor,
    find_terminal_under_cursor,
};
pub use render::{Highlight, RenderOptions, RenderStats, render_page};
pub use scheme::{
    ElementInstance, ElementTemplate, PageSettings, SchemeDocument, SchemeError, SchemePage,
};
pub use view::{PageView, ViewLimits};
