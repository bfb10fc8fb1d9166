// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a scheme, picking under the cursor, and rendering to a display list.
//!
//! Set `RUST_LOG=schematic_scene=trace` to see picking decisions.
//!
//! Run:
//! - `cargo run -p schematic_demos --example pick_element`

use kurbo::{Point, Rect, Vec2};
use schematic_scene::{Highlight, RenderOptions, SchemePage, ViewLimits, render_page};
use schematic_shapes::DisplayList;
use tracing_subscriber::EnvFilter;

const SCHEME: &str = r##"{
    "page": { "width": 1123, "height": 794, "labelSize": 20, "dotsPerLength": 30 },
    "templates": {
        "resistor": {
            "shapes": [
                { "type": "line", "x1": 0, "y1": 6, "x2": 10, "y2": 6 },
                { "type": "rect", "x": 10, "y": 0, "width": 40, "height": 12, "lineWidth": 2 },
                { "type": "line", "x1": 50, "y1": 6, "x2": 60, "y2": 6 }
            ],
            "labels": [{ "text": "R", "x": 10, "y": -3, "fontSize": 10 }],
            "terminals": [{ "id": "1", "x": 0, "y": 6 }, { "id": "2", "x": 60, "y": 6 }]
        },
        "lamp": {
            "shapes": [
                { "type": "circle", "cx": 15, "cy": 15, "radius": 15 },
                { "type": "path", "commands": [
                    { "type": "moveTo", "x": 4, "y": 4 },
                    { "type": "lineTo", "x": 26, "y": 26 },
                    { "type": "moveTo", "x": 26, "y": 4 },
                    { "type": "lineTo", "x": 4, "y": 26 }
                ] }
            ],
            "terminals": [{ "id": "1", "x": 0, "y": 15 }, { "id": "2", "x": 30, "y": 15 }]
        },
        "frame": {
            "shapes": [{ "type": "rect", "x": 0, "y": 0, "width": 300, "height": 200, "fillStyle": "#fafafa" }]
        }
    },
    "elements": [
        { "id": "F1", "template": "frame", "x": 80, "y": 80 },
        { "id": "R1", "template": "resistor", "x": 120, "y": 120 },
        { "id": "R2", "template": "resistor", "x": 220, "y": 150, "rotation": 90 },
        { "id": "H1", "template": "lamp", "x": 300, "y": 200 }
    ]
}"##;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = match SchemePage::from_json(SCHEME) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("failed to load scheme: {}", err);
            return;
        }
    };

    let mut view = page.view(1.0);
    // Zoom in around the lamp, then pan a little.
    let lamp = view.page_to_screen(Point::new(315.0, 215.0));
    view.zoom_at(lamp, 2.0, &ViewLimits::default());
    view.pan_by(Vec2::new(-40.0, -20.0));
    println!("view: scale {}, offset {:?}", view.scale, view.offset);

    let probes = [
        ("resistor body", Point::new(140.0, 120.0)),
        ("rotated resistor", Point::new(250.0, 135.0)),
        ("lamp outline", Point::new(315.0, 200.0)),
        ("frame interior", Point::new(100.0, 260.0)),
        ("off the page", Point::new(2000.0, 2000.0)),
    ];
    let mut selected = None;
    for (name, page_pt) in probes {
        let screen = view.page_to_screen(page_pt);
        match page.element_under_cursor(&view, screen) {
            Some(hit) => {
                let id = &page.elements()[hit.element].id;
                println!("{:>16}: {} (local {:?})", name, id, hit.local);
                if selected.is_none() && id != "F1" {
                    selected = Some(hit.element);
                }
            }
            None => println!("{:>16}: nothing", name),
        }
    }

    let terminal_screen = view.page_to_screen(Point::new(180.0, 126.0));
    let hovered_terminal = page.terminal_under_cursor(&view, terminal_screen);
    if let Some(t) = hovered_terminal {
        let e = &page.elements()[t.element];
        println!("terminal under cursor: {}.{}", e.id, e.terminals[t.terminal].id);
    }

    let mut canvas = DisplayList::new();
    let stats = render_page(
        &mut canvas,
        &mut page,
        &view,
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        &Highlight {
            selected,
            hovered_terminal,
        },
        &RenderOptions::default(),
    );
    println!(
        "rendered {} dots, {} elements, {} draw calls ({} fallbacks)",
        stats.dots,
        stats.elements,
        canvas.len(),
        stats.failed_shapes
    );
}
