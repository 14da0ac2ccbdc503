// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Automatic document boundary detection.
//
// The source is resampled to a square working image, edges are extracted with
// thresholds derived from global intensity statistics, and straight segments
// are classified into horizontal and vertical candidates. The outermost
// candidates on each axis become the document edges; their intersections are
// the corners. This is a best-effort estimate: low-contrast or borderless
// photos fall back to the default inset rectangle.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use imageproc::filter::box_filter;
use keystone_core::{DetectorConfig, Line, Orientation, Point, Quadrilateral};
use tracing::{debug, info, instrument};

use crate::vision::{ImageprocVision, SegmentParams, VisionBackend};

/// Best-guess quadrilateral for a photographed document.
pub struct AutoDetector<V: VisionBackend = ImageprocVision> {
    vision: V,
    config: DetectorConfig,
}

impl AutoDetector<ImageprocVision> {
    pub fn new(config: DetectorConfig) -> Self {
        Self::with_backend(ImageprocVision, config)
    }
}

impl Default for AutoDetector<ImageprocVision> {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

/// Candidate segments split by axis.
#[derive(Debug, Default)]
struct Candidates {
    horizontal: Vec<Line>,
    vertical: Vec<Line>,
}

impl Candidates {
    fn is_sufficient(&self) -> bool {
        self.horizontal.len() >= 2 && self.vertical.len() >= 2
    }
}

/// The four document edges in working coordinates.
#[derive(Debug, Clone, Copy)]
struct Edges {
    top: Line,
    bottom: Line,
    left: Line,
    right: Line,
}

impl<V: VisionBackend> AutoDetector<V> {
    pub fn with_backend(vision: V, config: DetectorConfig) -> Self {
        Self { vision, config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect the document boundary of `image`, in bitmap coordinates.
    ///
    /// Never fails: an empty image or a photo without usable lines yields the
    /// default 5% inset rectangle.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn detect(&self, image: &DynamicImage) -> Quadrilateral {
        let (width, height) = (image.width(), image.height());
        let work = self.config.work_size;
        if width == 0 || height == 0 || work == 0 {
            debug!("Nothing to detect on; using default inset");
            return Quadrilateral::default_inset(width, height);
        }

        let gray = self.prepare(image);
        let candidates = match self.edge_map(&gray) {
            Some(edges_map) => self.find_candidates(&edges_map),
            None => {
                debug!("Working image is uniform; no edges to follow");
                Candidates::default()
            }
        };
        let edges = self.select_edges(&candidates);

        let sx = width as f32 / work as f32;
        let sy = height as f32 / work as f32;
        let quad = self.corners(&edges).map_corners(|p| p.scaled(sx, sy));

        info!(
            horizontal = candidates.horizontal.len(),
            vertical = candidates.vertical.len(),
            "Document boundary detected"
        );
        quad
    }

    // -- Pipeline stages ------------------------------------------------------

    /// Square, grayscale, lightly blurred working image.
    fn prepare(&self, image: &DynamicImage) -> GrayImage {
        let work = self.config.work_size;
        let gray = image.to_luma8();
        let resized = imageops::resize(&gray, work, work, FilterType::Triangle);
        if self.config.blur_radius == 0 {
            resized
        } else {
            box_filter(&resized, self.config.blur_radius, self.config.blur_radius)
        }
    }

    /// Edge map with hysteresis thresholds halfway between the mean and the
    /// extremes. `None` for a uniform image.
    fn edge_map(&self, gray: &GrayImage) -> Option<GrayImage> {
        let (low, high) = edge_thresholds(gray)?;
        debug!(low, high, "Edge thresholds from intensity statistics");
        Some(self.vision.detect_edges(gray, low, high))
    }

    /// Run line detection over the descending threshold series, stopping as
    /// soon as both axes have at least two candidates.
    fn find_candidates(&self, edges: &GrayImage) -> Candidates {
        let mut candidates = Candidates::default();
        for &vote_threshold in &self.config.vote_thresholds {
            let params = SegmentParams {
                vote_threshold,
                suppression_radius: self.config.suppression_radius,
                min_line_length: self.config.min_line_length,
                max_line_gap: self.config.max_line_gap,
            };
            let segments = self.vision.detect_lines(edges, &params);
            candidates = self.classify(segments);
            debug!(
                vote_threshold,
                horizontal = candidates.horizontal.len(),
                vertical = candidates.vertical.len(),
                "Candidates after threshold"
            );
            if candidates.is_sufficient() {
                break;
            }
        }
        candidates
    }

    /// Split segments by axis, dropping diagonals and frame-border artifacts.
    fn classify(&self, segments: Vec<Line>) -> Candidates {
        let margin = self.config.margin();
        let far = self.config.work_size as f32 - margin;
        let inside = |v: f32| v >= margin && v <= far;

        let mut candidates = Candidates::default();
        for segment in segments {
            if segment.aspect_ratio() >= self.config.max_aspect_ratio {
                continue;
            }
            match segment.orientation() {
                Orientation::Horizontal => {
                    if inside(segment.from.y) && inside(segment.to.y) {
                        candidates.horizontal.push(segment);
                    }
                }
                Orientation::Vertical => {
                    if inside(segment.from.x) && inside(segment.to.x) {
                        candidates.vertical.push(segment);
                    }
                }
            }
        }
        candidates
    }

    fn select_edges(&self, candidates: &Candidates) -> Edges {
        let margin = self.config.margin();
        let far = self.config.work_size as f32 - margin;
        let midline = self.config.work_size as f32 / 2.0;

        let horizontal_at = |y: f32| Line::new(Point::new(margin, y), Point::new(far, y));
        let vertical_at = |x: f32| Line::new(Point::new(x, margin), Point::new(x, far));

        let (top, bottom) = pick_pair(
            &candidates.horizontal,
            |p| p.y,
            midline,
            horizontal_at(margin),
            horizontal_at(far),
        );
        let (left, right) = pick_pair(
            &candidates.vertical,
            |p| p.x,
            midline,
            vertical_at(margin),
            vertical_at(far),
        );
        Edges {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Pairwise intersections, with the matching margin corner for parallel pairs.
    fn corners(&self, edges: &Edges) -> Quadrilateral {
        let margin = self.config.margin();
        let far = self.config.work_size as f32 - margin;
        let corner = |a: &Line, b: &Line, fallback: Point| {
            a.intersection(b).unwrap_or_else(|| {
                debug!(?fallback, "Edges are parallel; using margin corner");
                fallback
            })
        };

        Quadrilateral::new(
            corner(&edges.left, &edges.top, Point::new(margin, margin)),
            corner(&edges.right, &edges.top, Point::new(far, margin)),
            corner(&edges.left, &edges.bottom, Point::new(margin, far)),
            corner(&edges.right, &edges.bottom, Point::new(far, far)),
        )
    }
}

/// `(low, high)` Canny thresholds: `(min + mean) / 2` and `(max + mean) / 2`.
/// `None` when every pixel has the same level.
fn edge_thresholds(gray: &GrayImage) -> Option<(f32, f32)> {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;
    for pixel in gray.pixels() {
        let v = pixel[0];
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    if max <= min {
        return None;
    }
    let count = gray.width() as u64 * gray.height() as u64;
    let mean = sum as f32 / count as f32;
    Some(((min as f32 + mean) / 2.0, (max as f32 + mean) / 2.0))
}

/// Choose the near and far edge on one axis.
///
/// Two or more candidates: smallest and largest midpoint coordinate. One
/// candidate: it takes whichever side of the midline it sits on and the other
/// side gets its default. None: both defaults.
fn pick_pair(
    lines: &[Line],
    coordinate: impl Fn(Point) -> f32,
    midline: f32,
    near_default: Line,
    far_default: Line,
) -> (Line, Line) {
    let key = |line: &Line| coordinate(line.midpoint());
    match lines {
        [] => (near_default, far_default),
        [only] => {
            if key(only) < midline {
                (*only, far_default)
            } else {
                (near_default, *only)
            }
        }
        _ => {
            let near = lines
                .iter()
                .min_by(|a, b| key(a).total_cmp(&key(b)))
                .copied()
                .unwrap_or(near_default);
            let far = lines
                .iter()
                .max_by(|a, b| key(a).total_cmp(&key(b)))
                .copied()
                .unwrap_or(far_default);
            (near, far)
        }
    }
}
