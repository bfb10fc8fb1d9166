// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page dot grid under zoom.
//!
//! Zoom an A4 landscape page in steps and show when the grid is rebuilt.
//! Set `RUST_LOG=schematic_index=debug` to see rebuild events.
//!
//! Run:
//! - `cargo run -p schematic_demos --example page_dots`

use kurbo::Point;
use schematic_index::PageDots;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut dots = PageDots::new(1123.0, 794.0, 30.0);
    println!("base spacing: {:.3}", dots.base_spacing());

    for scale in [1.0, 1.2, 1.9, 2.0, 3.5, 4.0, 0.4] {
        let rebuilt = dots.calculate_dots(scale);
        println!(
            "scale {:>4}: level {:>2}, spacing {:>7.3}, dots {:>6}, rebuilt: {}",
            scale,
            dots.density_level(),
            dots.current_spacing(),
            dots.all_dots().len(),
            rebuilt
        );
    }

    let cursor = Point::new(103.0, 47.0);
    match dots.find_closest_dot(cursor) {
        Some(dot) => println!("snap {:?} -> {:?}", cursor, dot),
        None => println!("no dot near {:?}", cursor),
    }
    println!("dots sharing the cursor's leaf: {}", dots.dots_in_node(cursor).len());
    println!("rebuilds so far: {}", dots.rebuild_count());
}
