// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schematic Index: point quadtree and page dot grid for a schematic canvas.
//!
//! - [`QuadTree`]: adaptive spatial index over points. Leaves subdivide into four equal
//!   quadrants once they are both crowded and dense enough, and never merge back except
//!   through [`QuadTree::clear`].
//! - [`PageDots`]: the snapping/background dot grid of one page. Its spacing follows the
//!   zoom scale in powers of two and the grid is only rebuilt when the discretized
//!   density level changes.
//! - [`Bounds`]: top-left origin rectangle shared by both.
//!
//! Points are [`kurbo::Point`]s in page space.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use schematic_index::{Bounds, QuadTree};
//!
//! let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
//! for i in 0..20 {
//!     assert!(tree.insert(Point::new(i as f64 * 10.0, i as f64 * 10.0)));
//! }
//! assert!(!tree.insert(Point::new(250.0, 0.0)));
//!
//! // Range queries have inclusive edges.
//! let hits = tree.query_range(Bounds::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits.len(), 6);
//!
//! // The leaf containing a stored point always holds that point.
//! let leaf = tree.find_containing_node(Point::new(30.0, 30.0)).unwrap();
//! assert!(leaf.points.contains(&Point::new(30.0, 30.0)));
//! ```
//!
//! Zoom-driven dot grids:
//!
//! ```rust
//! use kurbo::Point;
//! use schematic_index::PageDots;
//!
//! let mut dots = PageDots::new(1123.0, 794.0, 30.0);
//! let coarse = dots.all_dots().len();
//!
//! // 1.0 and 1.5 share a density level, so nothing is rebuilt.
//! assert!(!dots.calculate_dots(1.5));
//! assert!(dots.calculate_dots(4.0));
//! assert!(dots.all_dots().len() > coarse);
//!
//! let snap = dots.find_closest_dot(Point::new(12.0, 7.0)).unwrap();
//! assert!(snap.distance(Point::new(12.0, 7.0)) <= dots.current_spacing());
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. Degenerate page sizes are coerced to small positive
//! values rather than rejected.

pub mod dots;
pub mod quadtree;
pub mod types;

pub use dots::{DotsConfig, MAX_DENSITY_LEVEL, PageDots, density_level};
pub use kurbo::Point;
pub use quadtree::{DENSITY_THRESHOLD, MIN_NODE_SIZE, NodeView, QuadTree, TARGET_POINTS};
pub use types::Bounds;
