// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turning infinite Hough lines into finite segments.
//
// `imageproc` reports each line in normal form `x·cosθ + y·sinθ = r`. We walk
// that line across the image one pixel at a time, collect runs of edge pixels
// (tolerating gaps up to `max_line_gap`), and keep runs at least
// `min_line_length` long.

use image::GrayImage;
use imageproc::hough::PolarLine;
use keystone_core::{Line, Point};

use super::SegmentParams;

/// Finite segments of `line` that are backed by edge pixels.
pub fn segments_along(edges: &GrayImage, line: &PolarLine, params: &SegmentParams) -> Vec<Line> {
    let (width, height) = edges.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let theta = (line.angle_in_degrees as f32).to_radians();
    let (sin, cos) = theta.sin_cos();
    // Foot of the perpendicular from the origin, and the direction along the line.
    let foot = Point::new(line.r * cos, line.r * sin);
    let (ux, uy) = (-sin, cos);
    let reach = (width as f32).hypot(height as f32).ceil() as i32;

    let mut segments = Vec::new();
    let mut run: Option<(Point, Point)> = None;
    let mut gap = 0.0f32;

    for step in -reach..=reach {
        let t = step as f32;
        let p = Point::new(foot.x + t * ux, foot.y + t * uy);

        if edge_near(edges, p, cos, sin) {
            run = Some(match run {
                Some((start, _)) => (start, p),
                None => (p, p),
            });
            gap = 0.0;
        } else if let Some((start, end)) = run {
            gap += 1.0;
            if gap > params.max_line_gap {
                push_if_long(&mut segments, start, end, params.min_line_length);
                run = None;
                gap = 0.0;
            }
        }
    }
    if let Some((start, end)) = run {
        push_if_long(&mut segments, start, end, params.min_line_length);
    }

    segments
}

fn push_if_long(segments: &mut Vec<Line>, start: Point, end: Point, min_length: f32) {
    let segment = Line::new(start, end);
    if segment.length() >= min_length {
        segments.push(segment);
    }
}

/// Whether `p`, or a pixel one step either side of it along the normal, is an edge.
fn edge_near(edges: &GrayImage, p: Point, cos: f32, sin: f32) -> bool {
    [0.0f32, 1.0, -1.0].iter().any(|&k| {
        let x = (p.x + k * cos).round();
        let y = (p.y + k * sin).round();
        if x < 0.0 || y < 0.0 {
            return false;
        }
        let (x, y) = (x as u32, y as u32);
        x < edges.width() && y < edges.height() && edges.get_pixel(x, y)[0] > 0
    })
}
