// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Planar homography from four point correspondences, backed by the
// `imageproc` projective transform.

use imageproc::geometric_transformations::Projection;
use keystone_core::{Point, Rect};

/// Twice the triangle area below which three points count as collinear.
const COLLINEAR_EPSILON: f32 = 1e-3;

/// A projective transform between two quadrilaterals.
#[derive(Debug, Clone, Copy)]
pub struct Homography {
    projection: Projection,
}

impl Homography {
    pub fn identity() -> Self {
        Self {
            projection: Projection::scale(1.0, 1.0),
        }
    }

    /// The transform mapping each `src[i]` onto `dst[i]`.
    ///
    /// Returns `None` when three points of either set are collinear, or when
    /// the fitted transform is not invertible.
    pub fn from_correspondences(src: &[Point; 4], dst: &[Point; 4]) -> Option<Self> {
        if is_degenerate(src) || is_degenerate(dst) {
            return None;
        }
        let from = src.map(<(f32, f32)>::from);
        let to = dst.map(<(f32, f32)>::from);
        Projection::from_control_points(from, to).map(|projection| Self { projection })
    }

    /// Map `point` through the transform. `None` when it lands at infinity.
    pub fn apply(&self, point: Point) -> Option<Point> {
        let (x, y) = self.projection * (point.x, point.y);
        (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
    }

    /// Whether every point of a 3x3 grid spanning `region` maps back onto
    /// itself within `tolerance` pixels.
    pub fn is_identity_over(&self, region: Rect, tolerance: f32) -> bool {
        let xs = [region.left, (region.left + region.right) / 2.0, region.right];
        let ys = [region.top, (region.top + region.bottom) / 2.0, region.bottom];
        xs.iter().all(|&x| {
            ys.iter().all(|&y| {
                let p = Point::new(x, y);
                self.apply(p).is_some_and(|mapped| mapped.approx_eq(p, tolerance))
            })
        })
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }
}

impl Default for Homography {
    fn default() -> Self {
        Self::identity()
    }
}

fn is_degenerate(points: &[Point; 4]) -> bool {
    let twice_area = |a: Point, b: Point, c: Point| {
        ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs()
    };
    let [p0, p1, p2, p3] = *points;
    [(p0, p1, p2), (p0, p1, p3), (p0, p2, p3), (p1, p2, p3)]
        .into_iter()
        .any(|(a, b, c)| twice_area(a, b, c) < COLLINEAR_EPSILON)
}
