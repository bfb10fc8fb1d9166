// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive point quadtree with density-triggered subdivision.
//!
//! Nodes live in a flat arena and refer to their children by index.
//! There are no parent links; every traversal starts at the root.

use core::fmt::Debug;

use kurbo::Point;

use crate::types::Bounds;

/// Number of points a leaf may hold before it tries to subdivide.
pub const TARGET_POINTS: usize = 8;

/// Nodes whose shorter side is at or below this length never subdivide.
pub const MIN_NODE_SIZE: f64 = 40.0;

/// Minimum point density (points per unit area) required to subdivide.
pub const DENSITY_THRESHOLD: f64 = 0.0001;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct QuadNode {
    bounds: Bounds,
    points: Vec<Point>,
    /// Top-left, top-right, bottom-left, bottom-right. `None` while a leaf.
    children: Option<[NodeIdx; 4]>,
}

impl QuadNode {
    fn leaf(bounds: Bounds) -> Self {
        Self {
            bounds,
            points: Vec::new(),
            children: None,
        }
    }
}

/// Borrowed view of the leaf that contains a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeView<'a> {
    /// Points stored in the leaf.
    pub points: &'a [Point],
    /// Extent of the leaf.
    pub bounds: Bounds,
}

/// Adaptive spatial index over points.
///
/// A node is either a leaf holding points, or internal with exactly four children that
/// quarter its bounds. Subdivision is one-way: a divided node only becomes a leaf again
/// through [`QuadTree::clear`].
#[derive(Clone)]
pub struct QuadTree {
    arena: Vec<QuadNode>,
    len: usize,
}

impl Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("nodes", &self.arena.len())
            .field("points", &self.len)
            .finish_non_exhaustive()
    }
}

impl QuadTree {
    /// Create an empty tree covering `bounds`. The extent never changes afterwards.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            arena: vec![QuadNode::leaf(bounds)],
            len: 0,
        }
    }

    /// Extent of the root node.
    pub fn bounds(&self) -> Bounds {
        self.arena[NodeIdx::ROOT.get()].bounds
    }

    /// Total number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the root has been subdivided.
    pub fn is_divided(&self) -> bool {
        self.arena[NodeIdx::ROOT.get()].children.is_some()
    }

    /// Number of levels, counting the root as one.
    pub fn depth(&self) -> usize {
        self.depth_from(NodeIdx::ROOT)
    }

    /// Insert a point. Returns `false` if the point lies outside the tree's bounds.
    pub fn insert(&mut self, pt: Point) -> bool {
        let inserted = self.insert_at(NodeIdx::ROOT, pt);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// All points inside `range` (inclusive edges).
    pub fn query_range(&self, range: Bounds) -> Vec<Point> {
        let mut out = Vec::new();
        self.query_at(NodeIdx::ROOT, &range, &mut out);
        out
    }

    /// The leaf containing `pt`, or `None` if `pt` is outside the tree.
    ///
    /// On internal boundaries the first quadrant in top-left, top-right, bottom-left,
    /// bottom-right order wins.
    pub fn find_containing_node(&self, pt: Point) -> Option<NodeView<'_>> {
        let mut idx = NodeIdx::ROOT;
        loop {
            let node = &self.arena[idx.get()];
            if !node.bounds.contains(pt) {
                return None;
            }
            match node.children {
                None => {
                    return Some(NodeView {
                        points: &node.points,
                        bounds: node.bounds,
                    });
                }
                Some(children) => {
                    idx = children
                        .into_iter()
                        .find(|c| self.arena[c.get()].bounds.contains(pt))?;
                }
            }
        }
    }

    /// Drop every point and child, reverting the root to an empty leaf.
    pub fn clear(&mut self) {
        let bounds = self.bounds();
        self.arena.clear();
        self.arena.push(QuadNode::leaf(bounds));
        self.len = 0;
    }

    /// Bounds of every node in pre-order. Intended for debug overlays.
    pub fn node_bounds(&self) -> Vec<Bounds> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            out.push(node.bounds);
            if let Some(children) = node.children {
                stack.extend(children.into_iter().rev());
            }
        }
        out
    }

    // --- internals ---

    fn insert_at(&mut self, idx: NodeIdx, pt: Point) -> bool {
        let node = &self.arena[idx.get()];
        if !node.bounds.contains(pt) {
            return false;
        }
        if node.children.is_none() {
            let count = node.points.len() + 1;
            let wants_split = count > TARGET_POINTS
                && node.bounds.min_side() > MIN_NODE_SIZE
                && count as f64 / node.bounds.area() > DENSITY_THRESHOLD;
            if !wants_split {
                self.arena[idx.get()].points.push(pt);
                return true;
            }
            self.subdivide(idx);
        }
        self.insert_into_children(idx, pt)
    }

    fn insert_into_children(&mut self, idx: NodeIdx, pt: Point) -> bool {
        let Some(children) = self.arena[idx.get()].children else {
            return false;
        };
        children.into_iter().any(|c| self.insert_at(c, pt))
    }

    fn subdivide(&mut self, idx: NodeIdx) {
        debug_assert!(
            self.arena[idx.get()].children.is_none(),
            "subdivide called on a divided node"
        );
        let quadrants = self.arena[idx.get()].bounds.quadrants();
        let first = self.arena.len();
        self.arena.extend(quadrants.map(QuadNode::leaf));
        let children = [
            NodeIdx(first),
            NodeIdx(first + 1),
            NodeIdx(first + 2),
            NodeIdx(first + 3),
        ];
        let node = &mut self.arena[idx.get()];
        node.children = Some(children);
        let points = core::mem::take(&mut node.points);
        for pt in points {
            if !self.insert_into_children(idx, pt) {
                // Points outside every quadrant are dropped.
                self.len = self.len.saturating_sub(1);
            }
        }
    }

    fn query_at(&self, idx: NodeIdx, range: &Bounds, out: &mut Vec<Point>) {
        let node = &self.arena[idx.get()];
        if !node.bounds.intersects(range) {
            return;
        }
        out.extend(node.points.iter().copied().filter(|p| range.contains(*p)));
        if let Some(children) = node.children {
            for c in children {
                self.query_at(c, range, out);
            }
        }
    }

    fn depth_from(&self, idx: NodeIdx) -> usize {
        match self.arena[idx.get()].children {
            None => 1,
            Some(children) => {
                1 + children
                    .into_iter()
                    .map(|c| self.depth_from(c))
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(side: f64, n: usize) -> Vec<Point> {
        let step = side / (n as f64 - 1.0);
        let mut out = Vec::with_capacity(n * n);
        for j in 0..n {
            for i in 0..n {
                out.push(Point::new(i as f64 * step, j as f64 * step));
            }
        }
        out
    }

    #[test]
    fn rejects_points_outside_bounds() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 100.0, 100.0));
        assert!(!tree.insert(Point::new(-1.0, 50.0)));
        assert!(!tree.insert(Point::new(50.0, 100.5)));
        assert!(tree.insert(Point::new(100.0, 100.0)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn dense_leaf_subdivides() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
        // 20 points with a uniform spread.
        for j in 0..4 {
            for i in 0..5 {
                assert!(tree.insert(Point::new(20.0 + i as f64 * 40.0, 25.0 + j as f64 * 50.0)));
            }
        }
        assert!(tree.is_divided());
        assert_eq!(tree.len(), 20);
        for pt in tree.query_range(tree.bounds()) {
            let leaf = tree.find_containing_node(pt).unwrap();
            assert!(leaf.points.len() < 20, "no leaf may keep every point");
        }
    }

    #[test]
    fn sparse_or_small_nodes_stay_leaves() {
        // Too sparse: 9 points over a large page do not reach the density threshold.
        let mut sparse = QuadTree::new(Bounds::new(0.0, 0.0, 1000.0, 1000.0));
        for pt in grid(1000.0, 3) {
            sparse.insert(pt);
        }
        assert!(!sparse.is_divided());

        // Too small: the shorter side does not exceed the minimum node size.
        let mut small = QuadTree::new(Bounds::new(0.0, 0.0, 40.0, 400.0));
        for i in 0..30 {
            small.insert(Point::new(1.0, i as f64 * 10.0));
        }
        assert!(!small.is_divided());
        assert_eq!(small.len(), 30);
    }

    #[test]
    fn containing_node_holds_every_inserted_point() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 400.0, 300.0));
        let pts = grid(300.0, 13);
        for pt in &pts {
            assert!(tree.insert(*pt));
        }
        assert!(tree.depth() > 1);
        for pt in &pts {
            let node = tree.find_containing_node(*pt).unwrap();
            assert!(node.points.contains(pt), "{pt:?} missing from its leaf");
            assert!(node.bounds.contains(*pt));
        }
    }

    #[test]
    fn boundary_ties_go_to_top_left() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
        for pt in grid(200.0, 5) {
            tree.insert(pt);
        }
        assert!(tree.is_divided());
        let center = Point::new(100.0, 100.0);
        let node = tree.find_containing_node(center).unwrap();
        let top_left = tree.bounds().quadrants()[0];
        assert!(node.bounds.max_x() <= top_left.max_x());
        assert!(node.bounds.max_y() <= top_left.max_y());
        assert!(node.points.contains(&center));
        assert!(tree.find_containing_node(Point::new(201.0, 0.0)).is_none());
    }

    #[test]
    fn clear_resets_to_an_empty_leaf() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
        for pt in grid(200.0, 10) {
            tree.insert(pt);
        }
        assert!(tree.is_divided());
        tree.clear();
        assert!(tree.is_empty());
        assert!(!tree.is_divided());
        assert!(tree.query_range(tree.bounds()).is_empty());
        assert_eq!(tree.node_bounds(), vec![tree.bounds()]);

        for i in 0..TARGET_POINTS {
            tree.insert(Point::new(10.0 + i as f64 * 20.0, 10.0 + i as f64 * 20.0));
        }
        assert!(!tree.is_divided(), "a fresh leaf takes TARGET_POINTS points");
        tree.insert(Point::new(190.0, 10.0));
        assert!(tree.is_divided());
    }

    #[test]
    fn node_bounds_are_pre_order() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
        for pt in grid(200.0, 4) {
            tree.insert(pt);
        }
        let bounds = tree.node_bounds();
        assert_eq!(bounds[0], tree.bounds());
        assert_eq!(bounds[1], tree.bounds().quadrants()[0]);
        assert_eq!(bounds.len() % 4, 1, "root plus groups of four children");
    }

    #[test]
    fn subdivision_is_not_repeated() {
        let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 200.0, 200.0));
        for pt in grid(200.0, 4) {
            tree.insert(pt);
        }
        let nodes = tree.node_bounds().len();
        // Inserting into a sparse quadrant of a divided node must not create more nodes.
        tree.insert(Point::new(150.0, 150.0));
        assert_eq!(tree.node_bounds().len(), nodes);
    }

    proptest! {
        #[test]
        fn range_query_matches_linear_filter(
            pts in prop::collection::vec((0.0..500.0_f64, 0.0..400.0_f64), 0..300),
            (qx, qy, qw, qh) in (-50.0..500.0_f64, -50.0..400.0_f64, 0.0..300.0_f64, 0.0..300.0_f64),
        ) {
            let mut tree = QuadTree::new(Bounds::new(0.0, 0.0, 500.0, 400.0));
            let pts: Vec<Point> = pts.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            for pt in &pts {
                prop_assert!(tree.insert(*pt));
            }
            let range = Bounds::new(qx, qy, qw, qh);
            let mut got = tree.query_range(range);
            let mut want: Vec<Point> = pts.iter().copied().filter(|p| range.contains(*p)).collect();
            let key = |p: &Point| (p.x.to_bits(), p.y.to_bits());
            got.sort_by_key(key);
            want.sort_by_key(key);
            prop_assert_eq!(got, want);
        }
    }
}
