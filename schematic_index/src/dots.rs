// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom-dependent dot grid for a schematic page.
//!
//! The grid spacing halves every time the zoom scale doubles. Rebuilds are gated on a
//! discretized density level, so small zoom deltas do not touch the index.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::quadtree::QuadTree;
use crate::types::Bounds;

/// Configuration for a page's dot grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DotsConfig {
    /// Number of dots across the page width at the base spacing.
    pub dots_per_length: f64,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            dots_per_length: 30.0,
        }
    }
}

/// Highest density level a grid is built at.
///
/// Matches the default largest zoom of 20. Each level quadruples the dot count, so scales
/// past it keep this level's spacing.
pub const MAX_DENSITY_LEVEL: i32 = 5;

/// Discretized density for a zoom scale: `floor(log2(scale * 2))`, capped at
/// [`MAX_DENSITY_LEVEL`].
#[allow(
    clippy::cast_possible_truncation,
    reason = "Levels stay in a tiny range for any finite positive scale."
)]
pub fn density_level(scale: f64) -> i32 {
    ((scale * 2.0).log2().floor() as i32).min(MAX_DENSITY_LEVEL)
}

/// Dot grid of one page, backed by a [`QuadTree`] sized to the page.
#[derive(Clone, Debug)]
pub struct PageDots {
    width: f64,
    height: f64,
    base_spacing: f64,
    last_scale: f64,
    tree: QuadTree,
    rebuilds: u64,
}

impl PageDots {
    /// Create the grid for a `width` by `height` pixel page and build it for scale 1.
    ///
    /// Non-positive sizes and densities are coerced to 1.
    pub fn new(width: f64, height: f64, dots_per_length: f64) -> Self {
        let width = positive_or_one(width);
        let height = positive_or_one(height);
        let dots_per_length = positive_or_one(dots_per_length);
        let mut dots = Self {
            width,
            height,
            base_spacing: width / dots_per_length,
            last_scale: 1.0,
            tree: QuadTree::new(Bounds::new(0.0, 0.0, width, height)),
            rebuilds: 0,
        };
        dots.rebuild(density_level(1.0));
        dots
    }

    /// Create the grid using a [`DotsConfig`].
    pub fn with_config(width: f64, height: f64, config: &DotsConfig) -> Self {
        Self::new(width, height, config.dots_per_length)
    }

    /// Recompute the grid for `scale`.
    ///
    /// Does nothing when `scale` maps to the same density level as the last applied
    /// scale. Returns whether the grid was rebuilt. Non-finite or non-positive scales
    /// are ignored.
    pub fn calculate_dots(&mut self, scale: f64) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            warn!(scale, "ignoring invalid zoom scale for dot grid");
            return false;
        }
        let level = density_level(scale);
        if level == density_level(self.last_scale) {
            return false;
        }
        self.rebuild(level);
        self.last_scale = scale;
        true
    }

    /// Every dot on the page.
    pub fn all_dots(&self) -> Vec<Point> {
        self.tree.query_range(self.page_bounds())
    }

    /// Dots inside `range`, for culling to a visible area.
    pub fn dots_in_rect(&self, range: Bounds) -> Vec<Point> {
        self.tree.query_range(range)
    }

    /// Nearest dot to `pt` within a square window of side `4 * base_spacing`.
    pub fn find_closest_dot(&self, pt: Point) -> Option<Point> {
        let window = Bounds::centered(pt, self.base_spacing * 4.0);
        self.tree
            .query_range(window)
            .into_iter()
            .min_by(|a, b| {
                a.distance_squared(pt)
                    .partial_cmp(&b.distance_squared(pt))
                    .unwrap_or(core::cmp::Ordering::Equal)
            })
    }

    /// Dots sharing the quadtree leaf that contains `pt`. Empty if `pt` is off the page.
    pub fn dots_in_node(&self, pt: Point) -> Vec<Point> {
        self.tree
            .find_containing_node(pt)
            .map(|node| node.points.to_vec())
            .unwrap_or_default()
    }

    /// Page extent in pixels.
    pub fn page_bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    /// Spacing at density level zero: `page width / dots per length`.
    pub fn base_spacing(&self) -> f64 {
        self.base_spacing
    }

    /// Density level of the last applied scale.
    pub fn density_level(&self) -> i32 {
        density_level(self.last_scale)
    }

    /// Spacing of the grid currently stored.
    pub fn current_spacing(&self) -> f64 {
        spacing_for_level(self.base_spacing, self.density_level())
    }

    /// Number of grid rebuilds, including the initial one.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// The underlying index, for debug overlays.
    pub fn quadtree(&self) -> &QuadTree {
        &self.tree
    }

    fn rebuild(&mut self, level: i32) {
        self.tree.clear();
        let spacing = spacing_for_level(self.base_spacing, level);
        let xs = axis_positions(self.width, spacing);
        let ys = axis_positions(self.height, spacing);
        for &y in &ys {
            for &x in &xs {
                self.tree.insert(Point::new(x, y));
            }
        }
        self.rebuilds += 1;
        debug!(
            level,
            spacing,
            dots = self.tree.len(),
            nodes = self.tree.node_bounds().len(),
            "rebuilt page dot grid"
        );
    }
}

fn spacing_for_level(base: f64, level: i32) -> f64 {
    base * 2.0_f64.powi(-level)
}

fn positive_or_one(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}

/// Grid coordinates along one axis: multiples of `spacing` below `extent`, then `extent`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Step counts are bounded by the page size over a positive spacing."
)]
fn axis_positions(extent: f64, spacing: f64) -> Vec<f64> {
    let steps = (extent / spacing).ceil() as usize;
    let mut out: Vec<f64> = (0..steps)
        .map(|i| i as f64 * spacing)
        .filter(|v| *v < extent)
        .collect();
    out.push(extent);
    out
}
