// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The document quadrilateral — four named corners, derived edges, and the
// per-corner safe regions that keep an edited quad non-degenerate.

use serde::{Deserialize, Serialize};

use crate::geometry::{Line, Orientation, Point, Rect};

/// Default minimum gap, in view pixels, between a corner and its neighbours.
pub const DEFAULT_MIN_SEPARATION: f32 = 5.0;

/// Default inset of a freshly reset quad, as a fraction of each bitmap edge.
pub const DEFAULT_INSET_RATIO: f32 = 0.05;

/// One of the four quad corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test priority: the first corner within reach wins.
    pub const HIT_ORDER: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ];

    /// The corner sharing this corner's horizontal edge.
    pub fn horizontal_neighbor(&self) -> Corner {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::BottomLeft => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
        }
    }

    /// The corner sharing this corner's vertical edge.
    pub fn vertical_neighbor(&self) -> Corner {
        match self {
            Self::TopLeft => Self::BottomLeft,
            Self::BottomLeft => Self::TopLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomRight => Self::TopRight,
        }
    }
}

/// One of the four quad edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Hit-test priority for edge dragging.
    pub const HIT_ORDER: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// The two corners this edge connects, in `(from, to)` order.
    pub fn endpoints(&self) -> (Corner, Corner) {
        match self {
            Self::Top => (Corner::TopLeft, Corner::TopRight),
            Self::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Self::Left => (Corner::TopLeft, Corner::BottomLeft),
            Self::Right => (Corner::TopRight, Corner::BottomRight),
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Top | Self::Bottom => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }
}

/// Four corners of the document boundary plus the rectangle they must stay in.
///
/// Corners are in bitmap pixels. `bounding_view_rect` is in view pixels and is
/// refreshed by the owner whenever the bitmap-to-view mapping changes. The
/// type itself enforces no convexity; the editor's per-drag checks against
/// [`Quadrilateral::safe_region`] do.
///
/// All fields are plain values, so `clone()` is a deep copy: a snapshot taken
/// for a background warp cannot be disturbed by later edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub bounding_view_rect: Rect,
}

impl Quadrilateral {
    pub fn new(top_left: Point, top_right: Point, bottom_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            bounding_view_rect: Rect::default(),
        }
    }

    /// An axis-aligned quad covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(
            Point::new(rect.left, rect.top),
            Point::new(rect.right, rect.top),
            Point::new(rect.left, rect.bottom),
            Point::new(rect.right, rect.bottom),
        )
    }

    /// The default quad for a bitmap: inset by 5% from every edge.
    pub fn default_inset(bitmap_width: u32, bitmap_height: u32) -> Self {
        let mut quad = Self::from_rect(Rect::default());
        quad.reset(bitmap_width, bitmap_height);
        quad
    }

    pub fn with_bounds(mut self, bounding_view_rect: Rect) -> Self {
        self.bounding_view_rect = bounding_view_rect;
        self
    }

    /// Move every corner back to the 5% inset rectangle of the bitmap.
    pub fn reset(&mut self, bitmap_width: u32, bitmap_height: u32) {
        self.reset_with_inset(bitmap_width, bitmap_height, DEFAULT_INSET_RATIO);
    }

    /// Move every corner to the rectangle inset by `ratio` of each dimension.
    /// `ratio` is clamped to `[0, 0.5]`.
    pub fn reset_with_inset(&mut self, bitmap_width: u32, bitmap_height: u32, ratio: f32) {
        let ratio = ratio.clamp(0.0, 0.5);
        let (w, h) = (bitmap_width as f32, bitmap_height as f32);
        let left = w * ratio;
        let right = w * (1.0 - ratio);
        let top = h * ratio;
        let bottom = h * (1.0 - ratio);

        self.top_left = Point::new(left, top);
        self.top_right = Point::new(right, top);
        self.bottom_left = Point::new(left, bottom);
        self.bottom_right = Point::new(right, bottom);
    }

    /// Replace all four corners and the bounding rect with `other`'s.
    pub fn set(&mut self, other: &Quadrilateral) {
        self.clone_from(other);
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    pub fn set_corner(&mut self, corner: Corner, point: Point) {
        match corner {
            Corner::TopLeft => self.top_left = point,
            Corner::TopRight => self.top_right = point,
            Corner::BottomLeft => self.bottom_left = point,
            Corner::BottomRight => self.bottom_right = point,
        }
    }

    /// Corners in clockwise winding starting at the top left:
    /// `[top_left, top_right, bottom_right, bottom_left]`.
    pub fn clockwise(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    pub fn top(&self) -> Line {
        Line::new(self.top_left, self.top_right)
    }

    pub fn bottom(&self) -> Line {
        Line::new(self.bottom_left, self.bottom_right)
    }

    pub fn left(&self) -> Line {
        Line::new(self.top_left, self.bottom_left)
    }

    pub fn right(&self) -> Line {
        Line::new(self.top_right, self.bottom_right)
    }

    pub fn edge(&self, edge: Edge) -> Line {
        match edge {
            Edge::Top => self.top(),
            Edge::Bottom => self.bottom(),
            Edge::Left => self.left(),
            Edge::Right => self.right(),
        }
    }

    /// Map every corner through `f`, keeping the bounding rect.
    pub fn map_corners(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_left: f(self.bottom_left),
            bottom_right: f(self.bottom_right),
            bounding_view_rect: self.bounding_view_rect,
        }
    }

    /// Rescale a quad taken on a `from` sized bitmap onto a `to` sized one.
    ///
    /// A zero dimension in `from` leaves the quad unchanged.
    pub fn rescaled(&self, from: (u32, u32), to: (u32, u32)) -> Self {
        if from.0 == 0 || from.1 == 0 {
            return self.clone();
        }
        let sx = to.0 as f32 / from.0 as f32;
        let sy = to.1 as f32 / from.1 as f32;
        self.map_corners(|p| p.scaled(sx, sy))
    }

    /// The rectangle `corner` may occupy, using the default minimum separation.
    pub fn safe_region(&self, corner: Corner) -> Rect {
        self.safe_region_with_margin(corner, DEFAULT_MIN_SEPARATION)
    }

    /// The rectangle `corner` may occupy without crossing its neighbours.
    ///
    /// The two outer sides come from `bounding_view_rect`; the two inner
    /// sides stop `margin` short of the nearest opposite corner on each axis.
    /// Only meaningful when the quad is expressed in view space.
    pub fn safe_region_with_margin(&self, corner: Corner, margin: f32) -> Rect {
        let bounds = self.bounding_view_rect;
        let min_right_x = self.top_right.x.min(self.bottom_right.x) - margin;
        let max_left_x = self.top_left.x.max(self.bottom_left.x) + margin;
        let min_bottom_y = self.bottom_left.y.min(self.bottom_right.y) - margin;
        let max_top_y = self.top_left.y.max(self.top_right.y) + margin;

        match corner {
            Corner::TopLeft => Rect::new(bounds.left, bounds.top, min_right_x, min_bottom_y),
            Corner::TopRight => Rect::new(max_left_x, bounds.top, bounds.right, min_bottom_y),
            Corner::BottomLeft => Rect::new(bounds.left, max_top_y, min_right_x, bounds.bottom),
            Corner::BottomRight => Rect::new(max_left_x, max_top_y, bounds.right, bounds.bottom),
        }
    }

    /// Whether every corner sits inside its own safe region.
    pub fn is_within_safe_regions(&self, margin: f32) -> bool {
        Corner::HIT_ORDER
            .iter()
            .all(|&c| self.safe_region_with_margin(c, margin).contains(self.corner(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn square_in_view() -> Quadrilateral {
        Quadrilateral::from_rect(Rect::new(100.0, 100.0, 300.0, 400.0))
            .with_bounds(Rect::new(0.0, 0.0, 500.0, 500.0))
    }

    #[test]
    fn reset_insets_five_percent() {
        let quad = Quadrilateral::default_inset(1000, 2000);
        assert!(quad.top_left.approx_eq(Point::new(50.0, 100.0), EPS));
        assert!(quad.top_right.approx_eq(Point::new(950.0, 100.0), EPS));
        assert!(quad.bottom_left.approx_eq(Point::new(50.0, 1900.0), EPS));
        assert!(quad.bottom_right.approx_eq(Point::new(950.0, 1900.0), EPS));
    }

    #[test]
    fn reset_with_inset_clamps_ratio() {
        let mut quad = Quadrilateral::default_inset(200, 100);
        quad.reset_with_inset(200, 100, 0.25);
        assert!(quad.top_left.approx_eq(Point::new(50.0, 25.0), EPS));
        quad.reset_with_inset(200, 100, 0.9);
        assert!(quad.top_left.approx_eq(quad.bottom_right, EPS));
        quad.reset_with_inset(200, 100, -1.0);
        assert!(quad.bottom_right.approx_eq(Point::new(200.0, 100.0), EPS));
    }

    #[test]
    fn derived_edges_connect_named_corners() {
        let quad = square_in_view();
        assert_eq!(quad.top(), Line::new(quad.top_left, quad.top_right));
        assert_eq!(quad.bottom(), Line::new(quad.bottom_left, quad.bottom_right));
        assert_eq!(quad.left(), Line::new(quad.top_left, quad.bottom_left));
        assert_eq!(quad.right(), Line::new(quad.top_right, quad.bottom_right));
        for edge in Edge::HIT_ORDER {
            let (a, b) = edge.endpoints();
            assert_eq!(quad.edge(edge), Line::new(quad.corner(a), quad.corner(b)));
        }
    }

    #[test]
    fn safe_region_top_left() {
        let mut quad = square_in_view();
        quad.top_right.x = 320.0;
        quad.bottom_left.y = 380.0;
        let region = quad.safe_region(Corner::TopLeft);
        assert_eq!(region.left, 0.0);
        assert_eq!(region.top, 0.0);
        // min(320, 300) - 5
        assert!((region.right - 295.0).abs() < EPS);
        // min(380, 400) - 5
        assert!((region.bottom - 375.0).abs() < EPS);
    }

    #[test]
    fn safe_region_bottom_right() {
        let mut quad = square_in_view();
        quad.top_left.x = 90.0;
        quad.top_right.y = 120.0;
        let region = quad.safe_region(Corner::BottomRight);
        // max(90, 100) + 5
        assert!((region.left - 105.0).abs() < EPS);
        // max(100, 120) + 5
        assert!((region.top - 125.0).abs() < EPS);
        assert_eq!(region.right, 500.0);
        assert_eq!(region.bottom, 500.0);
    }

    #[test]
    fn safe_regions_contain_their_corners_for_a_regular_quad() {
        assert!(square_in_view().is_within_safe_regions(DEFAULT_MIN_SEPARATION));
    }

    #[test]
    fn crossed_corner_is_outside_its_region() {
        let mut quad = square_in_view();
        quad.top_left.x = 310.0;
        assert!(!quad.safe_region(Corner::TopLeft).contains(quad.top_left));
        assert!(!quad.is_within_safe_regions(DEFAULT_MIN_SEPARATION));
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = square_in_view();
        let snapshot = original.clone();

        original.set_corner(Corner::TopLeft, Point::new(1.0, 2.0));
        original.bottom_right.x += 40.0;
        original.bounding_view_rect.right = 10.0;

        assert!(snapshot.top_left.approx_eq(Point::new(100.0, 100.0), EPS));
        assert!(snapshot.bottom_right.approx_eq(Point::new(300.0, 400.0), EPS));
        assert_eq!(snapshot.bounding_view_rect.right, 500.0);
    }

    #[test]
    fn rescale_between_bitmap_sizes() {
        let quad = Quadrilateral::from_rect(Rect::new(10.0, 20.0, 90.0, 80.0));
        let scaled = quad.rescaled((100, 100), (200, 50));
        assert!(scaled.top_left.approx_eq(Point::new(20.0, 10.0), EPS));
        assert!(scaled.bottom_right.approx_eq(Point::new(180.0, 40.0), EPS));
        assert_eq!(quad.rescaled((0, 100), (200, 50)), quad);
    }

    #[test]
    fn clockwise_winding() {
        let quad = square_in_view();
        assert_eq!(
            quad.clockwise(),
            [quad.top_left, quad.top_right, quad.bottom_right, quad.bottom_left]
        );
    }

    #[test]
    fn corner_neighbours() {
        assert_eq!(Corner::TopLeft.horizontal_neighbor(), Corner::TopRight);
        assert_eq!(Corner::BottomRight.horizontal_neighbor(), Corner::BottomLeft);
        assert_eq!(Corner::TopRight.vertical_neighbor(), Corner::BottomRight);
        assert_eq!(Corner::BottomLeft.vertical_neighbor(), Corner::TopLeft);
    }
}
