// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Perspective rectification of a finished quadrilateral.
//
// The quad's corners are mapped onto an axis-aligned rectangle whose edges are
// the averages of the matching source edges, so the output stays about the
// size of the selected region. The warp is drawn into a canvas the size of
// the source image; the caller keeps either the full canvas or the rectangle.

use image::{DynamicImage, GrayImage, Luma, RgbaImage, imageops};
use keystone_core::{Point, Quadrilateral, Rect, SolverConfig};
use tracing::{debug, info, instrument, warn};

use crate::homography::Homography;
use crate::vision::{ImageprocVision, VisionBackend};

/// Geometry of one rectification, before any pixels are touched.
#[derive(Debug, Clone, Copy)]
pub struct PerspectivePlan {
    /// Quad corners in bitmap space: top-left, top-right, bottom-right, bottom-left.
    pub source: [Point; 4],
    /// Axis-aligned target the source corners are mapped onto.
    pub destination: Rect,
    pub homography: Homography,
}

impl PerspectivePlan {
    /// Build the plan for `quad`. `None` if the corners admit no homography
    /// (three or more collinear).
    pub fn for_quad(quad: &Quadrilateral, vision: &impl VisionBackend) -> Option<Self> {
        let source = quad.clockwise();
        let destination = Rect::new(
            (quad.top_left.x + quad.bottom_left.x) / 2.0,
            (quad.top_left.y + quad.top_right.y) / 2.0,
            (quad.top_right.x + quad.bottom_right.x) / 2.0,
            (quad.bottom_left.y + quad.bottom_right.y) / 2.0,
        );
        let targets = rect_corners(&destination);
        let homography = vision.compute_homography(&source, &targets)?;
        Some(Self {
            source,
            destination,
            homography,
        })
    }

    /// Destination corners in the same order as `source`.
    pub fn destination_points(&self) -> [Point; 4] {
        rect_corners(&self.destination)
    }

    /// The destination shrunk by one pixel on every side, which keeps the
    /// resampling seam along the border out of the crop.
    pub fn crop_rect(&self) -> Rect {
        self.destination.inset(1.0)
    }
}

fn rect_corners(rect: &Rect) -> [Point; 4] {
    [
        Point::new(rect.left, rect.top),
        Point::new(rect.right, rect.top),
        Point::new(rect.right, rect.bottom),
        Point::new(rect.left, rect.bottom),
    ]
}

/// Result of a warp.
#[derive(Debug, Clone)]
pub struct WarpOutput {
    /// Full canvas, the size of the source image.
    pub warped: RgbaImage,
    pub plan: PerspectivePlan,
    /// Whether uncovered pixels were filled.
    pub inpainted: bool,
}

impl WarpOutput {
    /// The crop rectangle cut out of the canvas, clamped to its bounds.
    /// `None` when nothing of it lies inside the canvas.
    pub fn cropped(&self) -> Option<RgbaImage> {
        let (width, height) = self.warped.dimensions();
        let crop = self.plan.crop_rect();
        let left = crop.left.round().clamp(0.0, width as f32) as u32;
        let top = crop.top.round().clamp(0.0, height as f32) as u32;
        let right = crop.right.round().clamp(0.0, width as f32) as u32;
        let bottom = crop.bottom.round().clamp(0.0, height as f32) as u32;
        if right <= left || bottom <= top {
            return None;
        }
        Some(imageops::crop_imm(&self.warped, left, top, right - left, bottom - top).to_image())
    }

    /// The crop when `crop` is set and non-empty, otherwise the full canvas.
    pub fn select(&self, crop: bool) -> RgbaImage {
        if crop {
            if let Some(cropped) = self.cropped() {
                return cropped;
            }
            warn!("Crop rectangle is empty; returning the full canvas");
        }
        self.warped.clone()
    }
}

/// Turns a quadrilateral into a rectified image.
pub struct PerspectiveSolver<V: VisionBackend = ImageprocVision> {
    vision: V,
    config: SolverConfig,
}

impl PerspectiveSolver<ImageprocVision> {
    pub fn new(config: SolverConfig) -> Self {
        Self::with_backend(ImageprocVision, config)
    }
}

impl Default for PerspectiveSolver<ImageprocVision> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<V: VisionBackend> PerspectiveSolver<V> {
    pub fn with_backend(vision: V, config: SolverConfig) -> Self {
        Self { vision, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn plan(&self, quad: &Quadrilateral) -> Option<PerspectivePlan> {
        PerspectivePlan::for_quad(quad, &self.vision)
    }

    /// Warp `image` so that `quad` becomes its destination rectangle.
    ///
    /// Returns `None` for an empty image, a degenerate quad, or a
    /// non-invertible transform; there is no partial result.
    #[instrument(skip(self, image, quad), fields(width = image.width(), height = image.height()))]
    pub fn warp(&self, image: &DynamicImage, quad: &Quadrilateral) -> Option<WarpOutput> {
        let size = (image.width(), image.height());
        if size.0 == 0 || size.1 == 0 {
            warn!("Cannot warp an empty image");
            return None;
        }
        let Some(plan) = self.plan(quad) else {
            warn!("Quadrilateral is degenerate; no homography");
            return None;
        };
        debug!(destination = ?plan.destination, "Perspective plan computed");

        let source = image.to_rgba8();
        let mut warped = self.vision.warp_image(&source, &plan.homography, size)?;

        if self.config.inpaint {
            let white = GrayImage::from_pixel(size.0, size.1, Luma([255]));
            let mut coverage = self.vision.warp_mask(&white, &plan.homography, size)?;
            // The colour filter needs a wider footprint than the mask, so
            // pixels it left transparent count as uncovered too.
            for (mask, pixel) in coverage.pixels_mut().zip(warped.pixels()) {
                if pixel[3] == 0 {
                    mask[0] = 0;
                }
            }
            warped = self.vision.inpaint(&warped, &coverage);
        }

        info!(inpainted = self.config.inpaint, "Perspective warp complete");
        Some(WarpOutput {
            warped,
            plan,
            inpainted: self.config.inpaint,
        })
    }

    /// Warp and keep the crop or the full canvas as configured.
    pub fn rectify(&self, image: &DynamicImage, quad: &Quadrilateral) -> Option<RgbaImage> {
        self.warp(image, quad)
            .map(|output| output.select(self.config.crop))
    }
}
