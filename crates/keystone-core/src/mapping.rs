// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bitmap <-> view coordinate mapping.

use crate::geometry::{Point, Rect};
use crate::quad::Quadrilateral;

/// Per-axis scale plus translation between bitmap pixels and view pixels.
///
/// Must be reconfigured whenever the bitmap or the view layout changes; a
/// stale mapper produces wrong but finite coordinates. Before a bitmap is
/// loaded (or for non-positive dimensions) the mapper is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    scale: Point,
    offset: Point,
    bitmap_size: Option<(u32, u32)>,
    view_rect: Rect,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self {
            scale: Point::new(1.0, 1.0),
            offset: Point::default(),
            bitmap_size: None,
            view_rect: Rect::default(),
        }
    }
}

impl CoordinateMapper {
    pub fn new(bitmap_width: i64, bitmap_height: i64, view_rect: Rect) -> Self {
        let mut mapper = Self::default();
        mapper.configure(bitmap_width, bitmap_height, view_rect);
        mapper
    }

    /// Recompute scale and offset for a bitmap displayed inside `view_rect`.
    ///
    /// Non-positive bitmap dimensions, or a view rect without area, put the
    /// mapper into its identity state.
    pub fn configure(&mut self, bitmap_width: i64, bitmap_height: i64, view_rect: Rect) {
        if bitmap_width <= 0 || bitmap_height <= 0 || view_rect.is_empty() {
            *self = Self::default();
            return;
        }

        self.offset = Point::new(view_rect.left, view_rect.top);
        self.scale = Point::new(
            view_rect.width() / bitmap_width as f32,
            view_rect.height() / bitmap_height as f32,
        );
        self.bitmap_size = Some((bitmap_width as u32, bitmap_height as u32));
        self.view_rect = view_rect;
    }

    /// Whether a real bitmap/view pair is configured.
    pub fn is_valid(&self) -> bool {
        self.bitmap_size.is_some()
    }

    pub fn bitmap_size(&self) -> Option<(u32, u32)> {
        self.bitmap_size
    }

    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    pub fn scale(&self) -> Point {
        self.scale
    }

    pub fn to_view(&self, point: Point) -> Point {
        Point::new(
            self.offset.x + point.x * self.scale.x,
            self.offset.y + point.y * self.scale.y,
        )
    }

    pub fn to_bitmap(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.offset.x) / self.scale.x,
            (point.y - self.offset.y) / self.scale.y,
        )
    }

    /// The quad in view space, bounded by the view rect.
    pub fn quad_to_view(&self, quad: &Quadrilateral) -> Quadrilateral {
        let mut mapped = quad.map_corners(|p| self.to_view(p));
        mapped.bounding_view_rect = self.view_rect;
        mapped
    }

    /// The quad back in bitmap space; the view-space bounding rect is kept.
    pub fn quad_to_bitmap(&self, quad: &Quadrilateral) -> Quadrilateral {
        quad.map_corners(|p| self.to_bitmap(p))
    }
}
