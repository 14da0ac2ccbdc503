// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Keystone — perspective correction for photographed documents
//
// Entry point. Initialises logging and settings, then runs one headless
// detect-and-rectify pass over an input photo.

mod services;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::DynamicImage;
use keystone_core::DetectorConfig;
use keystone_core::error::{KeystoneError, Result};
use keystone_core::types::EditMode;
use keystone_document::image::{encode_jpeg, encode_png, load_image};
use services::data_dir::data_dir;
use services::session::PerspectiveSession;
use services::settings_store::{load_settings, persist_settings};
use tracing::{error, info, warn};

/// Detect the page in a document photo and write a perspective-corrected copy.
#[derive(Parser, Debug)]
#[command(name = "keystone", version, about)]
struct CliArgs {
    /// Photo to rectify.
    input: PathBuf,

    /// Where to write the result (PNG for `.png`, JPEG otherwise).
    output: PathBuf,

    /// Fill pixels the warp leaves uncovered.
    #[arg(long)]
    inpaint: bool,

    /// Keep the full warped canvas instead of the crop.
    #[arg(long)]
    full: bool,

    /// Start from the quad saved by the previous run.
    #[arg(long)]
    recall: bool,

    /// Skip auto-detection and warp the default inset.
    #[arg(long)]
    no_detect: bool,

    /// Edit mode to remember for later sessions: free, horizontal or vertical.
    #[arg(long)]
    mode: Option<EditMode>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "keystone failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs) -> Result<()> {
    if args.input == args.output {
        return Err(KeystoneError::InvalidArgument(format!(
            "refusing to overwrite the input photo {}",
            args.input.display()
        )));
    }
    let dir = data_dir();
    let mut settings = load_settings(&dir);
    info!(path = %dir.display(), "Keystone starting");

    let mut session_settings = settings.clone();
    session_settings.auto_detect_on_open = !args.no_detect && !args.recall;
    session_settings.inpaint |= args.inpaint;
    session_settings.crop &= !args.full;
    let mut session = PerspectiveSession::new(session_settings, DetectorConfig::default());
    if let Some(mode) = args.mode {
        session.set_mode(mode);
        settings.edit_mode = mode;
        info!(%mode, "Edit mode set");
    }

    session.set_bitmap(load_image(&args.input)?)?;
    session.wait_for_completion().await;

    if args.recall && !session.recall_previous()? {
        warn!("No previous perspective saved");
        if !args.no_detect {
            session.request_auto_detect()?;
            session.wait_for_completion().await;
        }
    }

    let quad = session.quadrilateral();
    info!(
        top_left = ?quad.top_left,
        top_right = ?quad.top_right,
        bottom_right = ?quad.bottom_right,
        bottom_left = ?quad.bottom_left,
        "Warping quadrilateral"
    );
    session.request_warp()?;
    session.wait_for_completion().await;
    let output = session
        .take_output()
        .ok_or_else(|| KeystoneError::ImageError("perspective warp produced no output".into()))?;

    let bytes = encode_for(&args.output, DynamicImage::ImageRgba8(output), settings.jpeg_quality)?;
    std::fs::write(&args.output, &bytes)?;
    info!(path = %args.output.display(), bytes = bytes.len(), "Rectified image written");

    settings.previous = session.settings().previous.clone();
    if let Err(e) = persist_settings(&dir, &settings) {
        warn!(error = %e, "could not save settings");
    }
    Ok(())
}

/// PNG for `.png` paths, JPEG otherwise.
fn encode_for(path: &Path, image: DynamicImage, jpeg_quality: u8) -> Result<Vec<u8>> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        encode_png(&image)
    } else {
        encode_jpeg(&image, jpeg_quality)
    }
}
