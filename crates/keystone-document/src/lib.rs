// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// keystone-document — Image-side processing for Keystone.
//
// Provides the vision primitives (edge detection, line segments, homography,
// warping, inpainting) behind a swappable backend trait, the automatic
// document boundary detector built on them, and the perspective solver that
// turns a finished quadrilateral into a rectified image.

pub mod homography;
pub mod image;
pub mod scan;
pub mod vision;

// Re-export the primary structs so callers can use `keystone_document::AutoDetector` etc.
pub use homography::Homography;
pub use scan::detect::AutoDetector;
pub use scan::solver::{PerspectivePlan, PerspectiveSolver, WarpOutput};
pub use vision::{ImageprocVision, SegmentParams, VisionBackend};
