// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert points until the root subdivides, run a range query, and look up the leaf
//! containing a point.
//!
//! Run:
//! - `cargo run -p schematic_demos --example quadtree_basics`

use kurbo::Point;
use schematic_index::{Bounds, QuadTree};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
    for i in 0..20 {
        let p = Point::new(i as f64 * 10.0, (i * 7 % 20) as f64 * 10.0);
        let _ = tree.insert(p);
    }
    // Outside the root bounds: rejected.
    let accepted = tree.insert(Point::new(500.0, 0.0));
    println!("out-of-bounds insert accepted: {}", accepted);
    println!(
        "points: {}, divided: {}, depth: {}",
        tree.len(),
        tree.is_divided(),
        tree.depth()
    );

    let hits = tree.query_range(Bounds::new(0.0, 0.0, 100.0, 100.0));
    println!("points in the top-left quadrant: {:?}", hits);

    if let Some(leaf) = tree.find_containing_node(Point::new(30.0, 10.0)) {
        println!("leaf {:?} holds {:?}", leaf.bounds, leaf.points);
    }

    for (i, b) in tree.node_bounds().iter().enumerate() {
        println!("node {}: {:?}", i, b);
    }

    tree.clear();
    println!("after clear: {} points, divided: {}", tree.len(), tree.is_divided());
}
