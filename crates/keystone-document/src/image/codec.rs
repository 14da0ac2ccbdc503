// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Decode source photos and encode rectified output using the `image` crate.

use image::{DynamicImage, ImageFormat};
use keystone_core::error::KeystoneError;
use tracing::{debug, info, instrument};

/// Load an image from a file path.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<std::path::Path>) -> Result<DynamicImage, KeystoneError> {
    let img = image::open(path.as_ref()).map_err(|err| {
        KeystoneError::ImageError(format!(
            "failed to open {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    info!(width = img.width(), height = img.height(), "Image loaded");
    Ok(img)
}

/// Decode raw encoded bytes (JPEG, PNG, etc.).
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, KeystoneError> {
    let img = image::load_from_memory(data).map_err(|err| {
        KeystoneError::ImageError(format!("failed to decode image: {}", err))
    })?;
    debug!(
        width = img.width(),
        height = img.height(),
        "Image decoded from bytes"
    );
    Ok(img)
}

/// Encode as JPEG with the given quality (clamped to 1-100).
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, KeystoneError> {
    let quality = quality.clamp(1, 100);
    let mut buffer = Vec::new();
    let rgb = image.to_rgb8();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|err| KeystoneError::ImageError(format!("JPEG encoding failed: {}", err)))?;
    debug!(quality, bytes = buffer.len(), "JPEG encoded");
    Ok(buffer)
}

/// Encode as PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, KeystoneError> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| KeystoneError::ImageError(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}
