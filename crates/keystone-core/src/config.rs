// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Configuration for the editor, the auto-detector, the solver, and the
// host-persisted settings.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::quad::{DEFAULT_INSET_RATIO, DEFAULT_MIN_SEPARATION, Quadrilateral};
use crate::types::EditMode;

/// Interactive editor tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Active edit-direction constraint.
    pub mode: EditMode,
    /// Radius, in view pixels, within which a pointer-down grabs a corner or edge.
    pub hit_radius: f32,
    /// Minimum gap, in view pixels, kept between a corner and its neighbours.
    pub min_separation: f32,
    /// Inset of the reset quad, as a percentage of each bitmap dimension.
    pub border_percent: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mode: EditMode::Free,
            hit_radius: 20.0,
            min_separation: DEFAULT_MIN_SEPARATION,
            border_percent: DEFAULT_INSET_RATIO * 100.0,
        }
    }
}

impl EditorConfig {
    /// `border_percent` as a fraction.
    pub fn border_ratio(&self) -> f32 {
        self.border_percent / 100.0
    }
}

/// Line-based document boundary detection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Side of the square working image the source is resampled to.
    pub work_size: u32,
    /// Fraction of the working square treated as frame border.
    pub margin_ratio: f32,
    /// Segments with `min(|dx|,|dy|)/max(|dx|,|dy|)` at or above this are discarded.
    pub max_aspect_ratio: f32,
    /// Hough vote thresholds, tried in order until both axes have two candidates.
    pub vote_thresholds: Vec<u32>,
    /// Shortest segment accepted, in working pixels.
    pub min_line_length: f32,
    /// Longest run of missing edge pixels bridged inside one segment.
    pub max_line_gap: f32,
    /// Box blur radius applied before edge detection.
    pub blur_radius: u32,
    /// Non-maximum suppression radius in Hough space.
    pub suppression_radius: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            work_size: 1024,
            margin_ratio: 0.05,
            max_aspect_ratio: 0.3,
            vote_thresholds: vec![200, 180, 160, 140, 120, 100],
            min_line_length: 300.0,
            max_line_gap: 100.0,
            blur_radius: 1,
            suppression_radius: 8,
        }
    }
}

impl DetectorConfig {
    /// Margin, in working pixels, between the square's edge and the default lines.
    pub fn margin(&self) -> f32 {
        self.work_size as f32 * self.margin_ratio
    }
}

/// Perspective warp options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Fill pixels left uncovered by the warp.
    pub inpaint: bool,
    /// Return only the destination rectangle instead of the full canvas.
    pub crop: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            inpaint: false,
            crop: true,
        }
    }
}

/// A quad remembered from a previous warp, with the bitmap size it was taken on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPerspective {
    pub width: u32,
    pub height: u32,
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl SavedPerspective {
    pub fn capture(quad: &Quadrilateral, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            top_left: quad.top_left,
            top_right: quad.top_right,
            bottom_left: quad.bottom_left,
            bottom_right: quad.bottom_right,
        }
    }

    /// The remembered quad rescaled onto a `width` x `height` bitmap.
    pub fn restore(&self, width: u32, height: u32) -> Quadrilateral {
        Quadrilateral::new(
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        )
        .rescaled((self.width, self.height), (width, height))
    }
}

/// Host-persisted user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerspectiveSettings {
    /// JPEG quality (1-100) used when saving the warped output.
    pub jpeg_quality: u8,
    /// Run auto-detection as soon as an image is opened.
    pub auto_detect_on_open: bool,
    /// Edit-direction mode restored on start.
    pub edit_mode: EditMode,
    /// Inpaint uncovered pixels after warping.
    pub inpaint: bool,
    /// Save the cropped destination rectangle rather than the full canvas.
    pub crop: bool,
    /// Last quad that produced a saved image.
    pub previous: Option<SavedPerspective>,
}

impl Default for PerspectiveSettings {
    fn default() -> Self {
        Self {
            jpeg_quality: 95,
            auto_detect_on_open: false,
            edit_mode: EditMode::Free,
            inpaint: false,
            crop: true,
            previous: None,
        }
    }
}

impl PerspectiveSettings {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            inpaint: self.inpaint,
            crop: self.crop,
        }
    }
}
