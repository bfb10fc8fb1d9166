// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use schematic_scene::{ElectricalElement, Label, Terminal, find_element_under_cursor};
use schematic_shapes::{
    Paint, PathCommand, ShapeArc, ShapeBezier, ShapeLine, ShapePath, ShapeRect,
};

fn gen_elements(cols: usize, rows: usize) -> Vec<ElectricalElement> {
    let mut out = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            let paint = Paint::stroke("#000", 2.0);
            let id = format!("E{}_{}", x, y);
            let e = ElectricalElement::new(id, x as f64 * 60.0, y as f64 * 60.0)
                .with_shape(ShapeRect::new(0.0, 0.0, 40.0, 20.0, paint.clone()))
                .with_shape(ShapeLine::new(-10.0, 10.0, 0.0, 10.0, paint.clone()))
                .with_shape(ShapeBezier::new(
                    Point::new(40.0, 10.0),
                    Point::new(45.0, 0.0),
                    Point::new(45.0, 20.0),
                    Point::new(50.0, 10.0),
                    paint.clone(),
                ))
                .with_shape(ShapeArc::new(Point::new(20.0, 10.0), 6.0, 0.0, 3.0, paint.clone()))
                .with_shape(ShapePath::new(
                    vec![
                        PathCommand::MoveTo { x: 0.0, y: 25.0 },
                        PathCommand::LineTo { x: 40.0, y: 25.0 },
                    ],
                    paint,
                ))
                .with_label(Label::new("R", 0.0, -2.0))
                .with_terminal(Terminal::new("1", -10.0, 10.0))
                .with_rotation(((x + y) % 4) as f64 * 90.0);
            out.push(e);
        }
    }
    out
}

fn bench_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");
    for &n in &[10usize, 30] {
        let elements = gen_elements(n, n);
        group.bench_function(format!("element_under_cursor_{}x{}", n, n), |b| {
            b.iter(|| {
                black_box(find_element_under_cursor(
                    &elements,
                    black_box(Point::new(125.0, 70.0)),
                ))
            })
        });
        group.bench_function(format!("miss_{}x{}", n, n), |b| {
            b.iter(|| {
                black_box(find_element_under_cursor(
                    &elements,
                    black_box(Point::new(-500.0, -500.0)),
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_picking);
criterion_main!(benches);
