// Copyright 2025 the Schematic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance and angle helpers shared by the shape hit tests.
//!
//! All angles are radians. Canvas conventions apply: y grows downward, so increasing
//! angles run clockwise on screen.

use core::f64::consts::TAU;

use kurbo::{Point, Rect, Vec2};

/// Map any finite angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}

/// Whether `angle` lies on the span an arc covers from `start` to `end`.
///
/// Clockwise arcs cover `start → end`; counterclockwise arcs cover `end → start`.
/// Spans that wrap across zero are handled, and spans of a full turn or more cover
/// every angle.
pub fn angle_in_span(angle: f64, start: f64, end: f64, counterclockwise: bool) -> bool {
    if (end - start).abs() >= TAU {
        return true;
    }
    let a = normalize_angle(angle);
    let s = normalize_angle(start);
    let e = normalize_angle(end);
    let (lo, hi) = if counterclockwise { (e, s) } else { (s, e) };
    if lo <= hi {
        a >= lo && a <= hi
    } else {
        a >= lo || a <= hi
    }
}

/// Signed sweep a canvas `arc(start, end, counterclockwise)` call traces.
pub fn canvas_sweep(start: f64, end: f64, counterclockwise: bool) -> f64 {
    let delta = end - start;
    if counterclockwise {
        if -delta >= TAU {
            -TAU
        } else {
            -normalize_angle(-delta)
        }
    } else if delta >= TAU {
        TAU
    } else {
        normalize_angle(delta)
    }
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Perpendicular distance from `pt` to the segment `a → b`.
///
/// Returns `None` when the projection of `pt` falls outside the segment, so points
/// beyond either endpoint never count as near it. A zero-length segment measures the
/// distance to its single point.
pub fn segment_distance(pt: Point, a: Point, b: Point) -> Option<f64> {
    let dir = b - a;
    let len = dir.hypot();
    let rel = pt - a;
    if len == 0.0 {
        return Some(rel.hypot());
    }
    let along = rel.dot(dir) / len;
    if !(0.0..=len).contains(&along) {
        return None;
    }
    Some(rel.cross(dir).abs() / len)
}

/// Distance from `pt` to the circle of an arc, if `pt` lies within the arc's angular span.
pub fn arc_distance(
    pt: Point,
    center: Point,
    radius: f64,
    start: f64,
    end: f64,
    counterclockwise: bool,
) -> Option<f64> {
    let rel = pt - center;
    if !angle_in_span(rel.y.atan2(rel.x), start, end, counterclockwise) {
        return None;
    }
    Some((rel.hypot() - radius).abs())
}

/// Inclusive point-in-rectangle test. Kurbo's `Rect::contains` is half-open.
pub fn rect_contains(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}
