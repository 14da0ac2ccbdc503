// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Planar geometry primitives — points, axis-aligned rectangles, and directed
// line segments with perpendicular distance and line intersection.
//
// A `Point` carries no coordinate space of its own. Whether it lives in bitmap
// pixels or view pixels is implied by where it is stored; crossing between the
// two always goes through `CoordinateMapper`.

use serde::{Deserialize, Serialize};

/// Cross-product magnitude below which two lines are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-2;

/// A 2D point in bitmap or view pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// This point translated by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Scale each axis independently.
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Whether both coordinates are within `epsilon` of `other`.
    pub fn approx_eq(&self, other: Point, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// An axis-aligned rectangle given by its four edges.
///
/// Edges are inclusive: a point lying exactly on `right` or `bottom` is
/// contained. An "inverted" rectangle (left > right or top > bottom) contains
/// nothing, which is how a fully squeezed safe region rejects every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A rectangle anchored at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True when the rectangle has no positive area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Shrink every edge inwards by `amount` (negative values grow the rect).
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }
}

/// Orientation of a document edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A directed segment from `from` to `to`.
///
/// Distance and intersection queries treat the segment as its infinite line
/// extension; only `length` depends on the endpoints themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn dx(&self) -> f32 {
        self.to.x - self.from.x
    }

    pub fn dy(&self) -> f32 {
        self.to.y - self.from.y
    }

    pub fn length(&self) -> f32 {
        self.dx().hypot(self.dy())
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.from.x + self.to.x) / 2.0,
            (self.from.y + self.to.y) / 2.0,
        )
    }

    /// Horizontal when the segment spans further in X than in Y.
    pub fn orientation(&self) -> Orientation {
        if self.dx().abs() > self.dy().abs() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// `min(|dx|, |dy|) / max(|dx|, |dy|)`: 0 for axis-aligned segments, 1 for
    /// 45° diagonals. A zero-length segment reports 1.
    pub fn aspect_ratio(&self) -> f32 {
        let (ax, ay) = (self.dx().abs(), self.dy().abs());
        let longest = ax.max(ay);
        if longest == 0.0 {
            return 1.0;
        }
        ax.min(ay) / longest
    }

    /// Perpendicular distance from `point` to the infinite line.
    ///
    /// A zero-length segment degrades to the distance from `from`.
    pub fn distance_from(&self, point: Point) -> f32 {
        let length = self.length();
        if length == 0.0 {
            return self.from.distance_to(point);
        }
        (self.dx() * (self.from.y - point.y) - (self.from.x - point.x) * self.dy()).abs() / length
    }

    /// Intersection of the two infinite line extensions.
    ///
    /// Returns `None` when the lines are parallel, i.e. the cross product of
    /// the two direction vectors is smaller than [`PARALLEL_EPSILON`].
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let cross = self.dx() * other.dy() - self.dy() * other.dx();
        if cross.abs() < PARALLEL_EPSILON {
            return None;
        }

        // Work in f64: corner coordinates of large bitmaps lose precision
        // quickly in the products below.
        let (x1, y1) = (self.from.x as f64, self.from.y as f64);
        let (dx1, dy1) = (self.dx() as f64, self.dy() as f64);
        let (dx2, dy2) = (other.dx() as f64, other.dy() as f64);
        let rx = other.from.x as f64 - x1;
        let ry = other.from.y as f64 - y1;

        let t = (rx * dy2 - ry * dx2) / cross as f64;
        Some(Point::new((x1 + dx1 * t) as f32, (y1 + dy1 * t) as f32))
    }

    /// Y coordinate of the line at `x`, or `None` for a vertical line.
    pub fn y_at(&self, x: f32) -> Option<f32> {
        let dx = self.dx();
        if dx == 0.0 {
            return None;
        }
        Some(self.from.y + self.dy() * (x - self.from.x) / dx)
    }

    /// X coordinate of the line at `y`, or `None` for a horizontal line.
    pub fn x_at(&self, y: f32) -> Option<f32> {
        let dy = self.dy();
        if dy == 0.0 {
            return None;
        }
        Some(self.from.x + self.dx() * (y - self.from.y) / dy)
    }

    /// Stretch the line across `rect`.
    ///
    /// Horizontal lines are re-anchored at `rect.left` and `rect.right`,
    /// vertical lines at `rect.top` and `rect.bottom`. A line that cannot be
    /// solved for the requested axis is returned unchanged.
    pub fn extended_across(&self, rect: &Rect, orientation: Orientation) -> Line {
        match orientation {
            Orientation::Horizontal => match (self.y_at(rect.left), self.y_at(rect.right)) {
                (Some(y_left), Some(y_right)) => Line::new(
                    Point::new(rect.left, y_left),
                    Point::new(rect.right, y_right),
                ),
                _ => *self,
            },
            Orientation::Vertical => match (self.x_at(rect.top), self.x_at(rect.bottom)) {
                (Some(x_top), Some(x_bottom)) => Line::new(
                    Point::new(x_top, rect.top),
                    Point::new(x_bottom, rect.bottom),
                ),
                _ => *self,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn derived_quantities() {
        let l = line(1.0, 2.0, 4.0, 6.0);
        assert_eq!(l.dx(), 3.0);
        assert_eq!(l.dy(), 4.0);
        assert!((l.length() - 5.0).abs() < EPS);
        assert!(l.midpoint().approx_eq(Point::new(2.5, 4.0), EPS));
    }

    #[test]
    fn distance_from_horizontal_line() {
        let l = line(0.0, 10.0, 100.0, 10.0);
        assert!((l.distance_from(Point::new(50.0, 25.0)) - 15.0).abs() < EPS);
        // Measured against the infinite extension, not the segment.
        assert!((l.distance_from(Point::new(500.0, 7.0)) - 3.0).abs() < EPS);
    }

    #[test]
    fn distance_from_zero_length_segment_uses_endpoint() {
        let l = line(3.0, 4.0, 3.0, 4.0);
        assert!((l.distance_from(Point::new(0.0, 0.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn intersection_lies_on_both_lines() {
        let a = line(0.0, 0.0, 10.0, 3.0);
        let b = line(2.0, 9.0, 7.0, -4.0);
        let p = a.intersection(&b).expect("lines are not parallel");
        assert!(a.distance_from(p) < EPS, "{p:?} not on a");
        assert!(b.distance_from(p) < EPS, "{p:?} not on b");
    }

    #[test]
    fn intersection_of_perpendicular_axis_lines() {
        let h = line(0.0, 100.0, 300.0, 100.0);
        let v = line(50.0, 0.0, 50.0, 300.0);
        let p = h.intersection(&v).expect("should intersect");
        assert!(p.approx_eq(Point::new(50.0, 100.0), EPS));
    }

    #[test]
    fn intersection_outside_segments_uses_extensions() {
        let h = line(0.0, 0.0, 1.0, 0.0);
        let v = line(20.0, 5.0, 20.0, 6.0);
        let p = h.intersection(&v).expect("extensions cross");
        assert!(p.approx_eq(Point::new(20.0, 0.0), EPS));
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let a = line(0.0, 0.0, 10.0, 0.0);
        let b = line(0.0, 5.0, 10.0, 5.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn nearly_parallel_below_epsilon_is_rejected() {
        // cross = 1 * 0.005 - 0 * 1 = 0.005 < 1e-2
        let a = line(0.0, 0.0, 1.0, 0.0);
        let b = line(0.0, 1.0, 1.0, 1.005);
        assert!(a.intersection(&b).is_none());
        // cross = 1 * 0.02 = 0.02 >= 1e-2
        let c = line(0.0, 1.0, 1.0, 1.02);
        assert!(a.intersection(&c).is_some());
    }

    #[test]
    fn aspect_ratio_and_orientation() {
        let shallow = line(0.0, 0.0, 100.0, 10.0);
        assert!((shallow.aspect_ratio() - 0.1).abs() < EPS);
        assert_eq!(shallow.orientation(), Orientation::Horizontal);

        let steep = line(0.0, 0.0, -20.0, 100.0);
        assert!((steep.aspect_ratio() - 0.2).abs() < EPS);
        assert_eq!(steep.orientation(), Orientation::Vertical);
    }

    #[test]
    fn solve_for_missing_coordinate() {
        let l = line(0.0, 0.0, 10.0, 5.0);
        assert!((l.y_at(4.0).unwrap() - 2.0).abs() < EPS);
        assert!((l.x_at(2.5).unwrap() - 5.0).abs() < EPS);
        assert!(line(3.0, 0.0, 3.0, 9.0).y_at(1.0).is_none());
        assert!(line(0.0, 3.0, 9.0, 3.0).x_at(1.0).is_none());
    }

    #[test]
    fn extended_across_view_rect() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let h = line(50.0, 10.0, 150.0, 20.0).extended_across(&rect, Orientation::Horizontal);
        assert!(h.from.approx_eq(Point::new(0.0, 5.0), EPS));
        assert!(h.to.approx_eq(Point::new(200.0, 25.0), EPS));

        let v = line(40.0, 25.0, 40.0, 75.0).extended_across(&rect, Orientation::Vertical);
        assert!(v.from.approx_eq(Point::new(40.0, 0.0), EPS));
        assert!(v.to.approx_eq(Point::new(40.0, 100.0), EPS));
    }

    #[test]
    fn rect_containment_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(0.0, 5.0)));
        assert!(!r.contains(Point::new(10.01, 5.0)));

        let inverted = Rect::new(5.0, 0.0, 4.0, 10.0);
        assert!(inverted.is_empty());
        assert!(!inverted.contains(Point::new(4.5, 5.0)));
    }
}
