// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vision primitives used by the detector and the solver.
//
// The detector and the solver only talk to `VisionBackend`, so tests can swap
// in scripted segments and hosts can plug in an accelerated implementation.
// `ImageprocVision` is the default, built on `imageproc`.

pub mod inpaint;
pub mod segments;

use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::edges::canny;
use imageproc::geometric_transformations::{Interpolation, warp_into};
use imageproc::hough::{LineDetectionOptions, detect_lines};
use keystone_core::{Line, Point};
use tracing::debug;

use crate::homography::Homography;

/// Probabilistic line-segment detection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParams {
    /// Minimum Hough votes for a line to be considered.
    pub vote_threshold: u32,
    /// Non-maximum suppression radius in Hough space.
    pub suppression_radius: u32,
    /// Shortest segment kept, in pixels.
    pub min_line_length: f32,
    /// Longest gap bridged inside one segment, in pixels.
    pub max_line_gap: f32,
}

/// External image primitives.
pub trait VisionBackend: Send + Sync {
    /// Binary edge map (255 = edge) using hysteresis thresholds.
    fn detect_edges(&self, gray: &GrayImage, low: f32, high: f32) -> GrayImage;

    /// Straight segments supported by the edge map.
    fn detect_lines(&self, edges: &GrayImage, params: &SegmentParams) -> Vec<Line>;

    /// Transform mapping `src[i]` onto `dst[i]`.
    fn compute_homography(&self, src: &[Point; 4], dst: &[Point; 4]) -> Option<Homography>;

    /// Resample `input` through `transform` into an `out_size` canvas with a
    /// high-quality filter. Uncovered pixels are transparent black.
    fn warp_image(
        &self,
        input: &RgbaImage,
        transform: &Homography,
        out_size: (u32, u32),
    ) -> Option<RgbaImage>;

    /// Nearest-neighbour resample of a single-channel mask. Uncovered pixels are 0.
    fn warp_mask(
        &self,
        mask: &GrayImage,
        transform: &Homography,
        out_size: (u32, u32),
    ) -> Option<GrayImage>;

    /// Fill every pixel whose `coverage` is 0 from its covered surroundings.
    fn inpaint(&self, image: &RgbaImage, coverage: &GrayImage) -> RgbaImage;
}

/// Floor applied to both Canny thresholds.
const MIN_EDGE_THRESHOLD: f32 = 1.0;

/// Default backend on top of `imageproc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocVision;

impl VisionBackend for ImageprocVision {
    fn detect_edges(&self, gray: &GrayImage, low: f32, high: f32) -> GrayImage {
        // Hysteresis at zero marks every pixel and walks off the image.
        let low = low.max(MIN_EDGE_THRESHOLD);
        canny(gray, low, high.max(low))
    }

    fn detect_lines(&self, edges: &GrayImage, params: &SegmentParams) -> Vec<Line> {
        let options = LineDetectionOptions {
            vote_threshold: params.vote_threshold,
            suppression_radius: params.suppression_radius,
        };
        let polar = detect_lines(edges, options);
        let found: Vec<Line> = polar
            .iter()
            .flat_map(|line| segments::segments_along(edges, line, params))
            .collect();
        debug!(
            vote_threshold = params.vote_threshold,
            hough_lines = polar.len(),
            segments = found.len(),
            "Line segments extracted"
        );
        found
    }

    fn compute_homography(&self, src: &[Point; 4], dst: &[Point; 4]) -> Option<Homography> {
        Homography::from_correspondences(src, dst)
    }

    fn warp_image(
        &self,
        input: &RgbaImage,
        transform: &Homography,
        out_size: (u32, u32),
    ) -> Option<RgbaImage> {
        let mut output = RgbaImage::new(out_size.0, out_size.1);
        warp_into(
            input,
            &transform.projection(),
            Interpolation::Bicubic,
            Rgba([0, 0, 0, 0]),
            &mut output,
        );
        Some(output)
    }

    fn warp_mask(
        &self,
        mask: &GrayImage,
        transform: &Homography,
        out_size: (u32, u32),
    ) -> Option<GrayImage> {
        let mut output = GrayImage::new(out_size.0, out_size.1);
        warp_into(
            mask,
            &transform.projection(),
            Interpolation::Nearest,
            Luma([0]),
            &mut output,
        );
        Some(output)
    }

    fn inpaint(&self, image: &RgbaImage, coverage: &GrayImage) -> RgbaImage {
        inpaint::fill_uncovered(image, coverage)
    }
}
