// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline/arc path built from canvas-style commands.
//!
//! Commands that fail to parse, or that carry non-finite numbers, are dropped
//! without error.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::geometry::{arc_distance, canvas_sweep, point_on_circle, segment_distance};
use crate::shapes::PATH_TOLERANCE;
use crate::style::Paint;

/// One path command.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Straight segment from the current point.
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Circular arc, connected to the current point by a straight segment when drawn.
    Arc {
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Direction of travel.
        #[serde(default)]
        counterclockwise: bool,
    },
}

impl PathCommand {
    fn is_finite(&self) -> bool {
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                ..
            } => [x, y, radius, start_angle, end_angle]
                .iter()
                .all(|v| v.is_finite()),
        }
    }
}

/// Path made of [`PathCommand`]s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePath {
    /// Commands in drawing order.
    #[serde(deserialize_with = "lenient_commands")]
    pub commands: Vec<PathCommand>,
    /// Stroke and fill.
    #[serde(flatten)]
    pub paint: Paint,
}

fn lenient_commands<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<PathCommand>, D::Error> {
    let raw = Vec::<serde_json::Value>::deserialize(de)?;
    Ok(raw
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<PathCommand>(v) {
            Ok(cmd) => Some(cmd),
            Err(err) => {
                debug!(%err, "skipping malformed path command");
                None
            }
        })
        .collect())
}

impl ShapePath {
    /// Create a path; non-finite commands are dropped.
    pub fn new(commands: Vec<PathCommand>, paint: Paint) -> Self {
        Self { commands, paint }.sanitized()
    }

    /// Drop non-finite commands and coerce paint parameters.
    pub fn sanitized(mut self) -> Self {
        let before = self.commands.len();
        self.commands.retain(PathCommand::is_finite);
        if self.commands.len() != before {
            debug!(
                dropped = before - self.commands.len(),
                "dropped non-finite path commands"
            );
        }
        self.paint = self.paint.sanitized();
        self
    }

    /// Bounds of every vertex and arc circle, or a zero rectangle when empty.
    pub fn bounding_box(&self) -> Rect {
        let mut bbox: Option<Rect> = None;
        let mut add = |r: Rect| bbox = Some(bbox.map_or(r, |b| b.union(r)));
        for cmd in self.commands.iter().filter(|c| c.is_finite()) {
            match *cmd {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    add(Rect::from_points((x, y), (x, y)));
                }
                PathCommand::Arc { x, y, radius, .. } => {
                    add(Rect::from_center_size((x, y), (radius * 2.0, radius * 2.0)));
                }
            }
        }
        bbox.unwrap_or(Rect::ZERO)
    }

    /// Outline in local units. Arcs are joined to the current point by a straight line.
    pub fn local_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut has_current = false;
        for cmd in self.commands.iter().filter(|c| c.is_finite()) {
            match *cmd {
                PathCommand::MoveTo { x, y } => {
                    path.move_to((x, y));
                    has_current = true;
                }
                PathCommand::LineTo { x, y } => {
                    if has_current {
                        path.line_to((x, y));
                    } else {
                        path.move_to((x, y));
                        has_current = true;
                    }
                }
                PathCommand::Arc {
                    x,
                    y,
                    radius,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => {
                    let center = Point::new(x, y);
                    let start = point_on_circle(center, radius, start_angle);
                    if has_current {
                        path.line_to(start);
                    } else {
                        path.move_to(start);
                        has_current = true;
                    }
                    let arc = kurbo::Arc {
                        center,
                        radii: kurbo::Vec2::new(radius, radius),
                        start_angle,
                        sweep_angle: canvas_sweep(start_angle, end_angle, counterclockwise),
                        x_rotation: 0.0,
                    };
                    path.extend(arc.append_iter(PATH_TOLERANCE));
                }
            }
        }
        path
    }

    /// Smallest distance from `pt` to any line or arc segment, if any segment is in range.
    ///
    /// Line segments only count when `pt` projects between their endpoints; arcs only
    /// when `pt` is inside their angular span.
    pub fn min_distance(&self, pt: Point) -> Option<f64> {
        let mut current: Option<Point> = None;
        let mut best: Option<f64> = None;
        let mut consider = |d: Option<f64>| {
            if let Some(d) = d {
                best = Some(best.map_or(d, |b| b.min(d)));
            }
        };
        for cmd in self.commands.iter().filter(|c| c.is_finite()) {
            match *cmd {
                PathCommand::MoveTo { x, y } => current = Some(Point::new(x, y)),
                PathCommand::LineTo { x, y } => {
                    let to = Point::new(x, y);
                    if let Some(from) = current {
                        consider(segment_distance(pt, from, to));
                    }
                    current = Some(to);
                }
                PathCommand::Arc {
                    x,
                    y,
                    radius,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => {
                    let center = Point::new(x, y);
                    consider(arc_distance(
                        pt,
                        center,
                        radius,
                        start_angle,
                        end_angle,
                        counterclockwise,
                    ));
                    current = Some(point_on_circle(center, radius, end_angle));
                }
            }
        }
        best
    }

    /// Hit when the nearest segment is within half the line width.
    pub fn is_point_over(&self, pt: Point) -> bool {
        self.min_distance(pt)
            .is_some_and(|d| d <= self.paint.half_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    fn zigzag() -> ShapePath {
        ShapePath::new(
            vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::LineTo { x: 50.0, y: 0.0 },
                PathCommand::LineTo { x: 50.0, y: 50.0 },
                PathCommand::Arc {
                    x: 50.0,
                    y: 70.0,
                    radius: 20.0,
                    start_angle: -PI / 2.0,
                    end_angle: PI / 2.0,
                    counterclockwise: false,
                },
            ],
            Paint::stroke("#000", 2.0),
        )
    }

    #[test]
    fn hits_lines_and_arcs() {
        let p = zigzag();
        assert!(p.is_point_over(Point::new(25.0, 0.5)));
        assert!(p.is_point_over(Point::new(50.9, 25.0)));
        // Rightmost point of the arc.
        assert!(p.is_point_over(Point::new(70.0, 70.0)));
        // Left half of that circle is outside the span.
        assert!(!p.is_point_over(Point::new(30.0, 70.0)));
        assert!(!p.is_point_over(Point::new(25.0, 25.0)));
    }

    #[test]
    fn empty_path_never_hits() {
        let p = ShapePath::new(Vec::new(), Paint::default());
        assert!(!p.is_point_over(Point::ZERO));
        assert_eq!(p.bounding_box(), Rect::ZERO);
    }

    #[test]
    fn bounding_box_covers_vertices_and_arcs() {
        assert_eq!(zigzag().bounding_box(), Rect::new(0.0, 0.0, 70.0, 90.0));
    }

    #[test]
    fn malformed_commands_are_skipped() {
        let json = r#"{
            "commands": [
                {"type": "moveTo", "x": 0, "y": 0},
                {"type": "lineTo", "x": "ten", "y": 0},
                {"x": 5, "y": 5},
                {"type": "curveTo", "x": 1, "y": 1},
                {"type": "lineTo", "x": 10, "y": 0}
            ],
            "lineWidth": 2
        }"#;
        let p: ShapePath = serde_json::from_str(json).unwrap();
        assert_eq!(p.commands.len(), 2);
        assert!(p.is_point_over(Point::new(5.0, 0.5)));
    }

    #[test]
    fn non_finite_commands_are_dropped() {
        let p = ShapePath::new(
            vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::LineTo {
                    x: f64::NAN,
                    y: 0.0,
                },
                PathCommand::LineTo { x: 0.0, y: 10.0 },
            ],
            Paint::default(),
        );
        assert_eq!(p.commands.len(), 2);
        assert!(p.bounding_box().is_finite());
    }

    #[test]
    fn arc_after_line_is_joined_when_drawn() {
        let els = zigzag().local_path();
        // moveTo, two lineTo, joining lineTo to the arc start, then curve segments.
        assert!(matches!(els.elements()[3], kurbo::PathEl::LineTo(_)));
        assert!(matches!(els.elements()[4], kurbo::PathEl::CurveTo(..)));
    }
}
