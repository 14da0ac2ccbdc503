// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The editing session a host drives from its interaction thread.
//
// Pointer events, quad edits and listener callbacks all happen on the thread
// that owns the session. Auto-detection and warping run on tokio's blocking
// pool against a snapshot of the bitmap and quad; their results come back
// through a channel and are applied only when the owner pumps them. Every
// bitmap change bumps a generation counter, and a result computed for an
// older generation is dropped.

use std::sync::Arc;

use image::{DynamicImage, RgbaImage};
use keystone_core::error::{KeystoneError, Result};
use keystone_core::types::EditMode;
use keystone_core::{
    DetectorConfig, EditorConfig, PerspectiveSettings, Quadrilateral, Rect, SavedPerspective,
};
use keystone_document::{AutoDetector, PerspectiveSolver};
use keystone_editor::{EditListener, EventOutcome, InteractiveEditor, PointerEvent};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Callbacks for background work, delivered on the owning thread.
#[allow(dead_code)]
pub trait SessionListener {
    /// Auto-detection finished and its quad has been applied to the editor.
    fn on_detect_complete(&mut self, _quad: &Quadrilateral) {}

    /// A warp finished. `None` means it produced no output.
    fn on_warp_complete(&mut self, _output: Option<&RgbaImage>) {}
}

/// A finished background task, tagged with the bitmap generation it ran on.
#[allow(dead_code)]
#[derive(Debug)]
pub enum Completion {
    Detected {
        generation: u64,
        quad: Quadrilateral,
    },
    Warped {
        generation: u64,
        quad: Quadrilateral,
        output: Option<RgbaImage>,
    },
    Failed {
        generation: u64,
        error: String,
    },
}

impl Completion {
    pub fn generation(&self) -> u64 {
        match self {
            Completion::Detected { generation, .. }
            | Completion::Warped { generation, .. }
            | Completion::Failed { generation, .. } => *generation,
        }
    }
}

pub struct PerspectiveSession {
    editor: InteractiveEditor,
    bitmap: Option<Arc<DynamicImage>>,
    generation: u64,
    in_flight: bool,
    /// Detection owed to a bitmap that arrived while a task was running.
    detect_pending: bool,
    detector: Arc<AutoDetector>,
    settings: PerspectiveSettings,
    output: Option<RgbaImage>,
    listener: Option<Box<dyn SessionListener>>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

/// Host-facing session; not every entry point is used by the headless CLI.
#[allow(dead_code)]
impl PerspectiveSession {
    pub fn new(settings: PerspectiveSettings, detector: DetectorConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let editor = InteractiveEditor::new(EditorConfig {
            mode: settings.edit_mode,
            ..EditorConfig::default()
        });
        Self {
            editor,
            bitmap: None,
            generation: 0,
            in_flight: false,
            detect_pending: false,
            detector: Arc::new(AutoDetector::new(detector)),
            settings,
            output: None,
            listener: None,
            tx,
            rx,
        }
    }

    pub fn set_listener(&mut self, listener: Box<dyn SessionListener>) {
        self.listener = Some(listener);
    }

    pub fn set_edit_listener(&mut self, listener: Box<dyn EditListener>) {
        self.editor.set_listener(listener);
    }

    // -- Accessors ------------------------------------------------------------

    pub fn editor(&self) -> &InteractiveEditor {
        &self.editor
    }

    pub fn quadrilateral(&self) -> &Quadrilateral {
        self.editor.quadrilateral()
    }

    pub fn bitmap(&self) -> Option<&DynamicImage> {
        self.bitmap.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn settings(&self) -> &PerspectiveSettings {
        &self.settings
    }

    /// The output of the last successful warp on the current bitmap.
    pub fn output(&self) -> Option<&RgbaImage> {
        self.output.as_ref()
    }

    pub fn take_output(&mut self) -> Option<RgbaImage> {
        self.output.take()
    }

    // -- Bitmap and settings --------------------------------------------------

    /// Load a new bitmap. The quad resets to the default inset, and detection
    /// starts when `auto_detect_on_open` is set. If a task is still running,
    /// detection is queued behind its (now stale) result.
    ///
    /// The bitmap is replaced even when an error is returned; the error only
    /// means detection could not be started.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn set_bitmap(&mut self, image: DynamicImage) -> Result<()> {
        self.generation += 1;
        self.output = None;
        self.detect_pending = false;
        self.editor.set_bitmap_size(image.width(), image.height());
        self.bitmap = Some(Arc::new(image));
        debug!(generation = self.generation, "Bitmap replaced");

        if !self.settings.auto_detect_on_open {
            return Ok(());
        }
        if self.in_flight {
            self.detect_pending = true;
            debug!(generation = self.generation, "Auto-detection queued behind running task");
            return Ok(());
        }
        self.request_auto_detect().map(|_| ())
    }

    pub fn clear_bitmap(&mut self) {
        self.generation += 1;
        self.output = None;
        self.detect_pending = false;
        self.bitmap = None;
        self.editor.clear_bitmap();
    }

    pub fn set_view_rect(&mut self, view_rect: Rect) {
        self.editor.set_view_rect(view_rect);
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.settings.edit_mode = mode;
        self.editor.set_mode(mode);
    }

    pub fn set_inpaint(&mut self, inpaint: bool) {
        self.settings.inpaint = inpaint;
    }

    pub fn set_crop(&mut self, crop: bool) {
        self.settings.crop = crop;
    }

    // -- Quad edits -----------------------------------------------------------

    /// Pointer input. Ignored while background work is in flight.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventOutcome {
        if self.in_flight {
            return EventOutcome::PassThrough;
        }
        self.editor.handle_event(event)
    }

    pub fn set_quadrilateral(&mut self, quad: &Quadrilateral) -> Result<()> {
        self.ensure_idle()?;
        self.editor.set_quad(quad);
        Ok(())
    }

    pub fn reset_quadrilateral(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.editor.reset_quadrilateral();
        Ok(())
    }

    /// Apply the quad remembered from the last warp, rescaled onto the
    /// current bitmap. Returns whether there was one to apply.
    pub fn recall_previous(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        let Some((width, height)) = self.editor.bitmap_size() else {
            return Err(KeystoneError::NoImage);
        };
        let Some(previous) = self.settings.previous.as_ref() else {
            return Ok(false);
        };
        let quad = previous.restore(width, height);
        self.editor.set_quad(&quad);
        info!(width, height, "Previous perspective recalled");
        Ok(true)
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.in_flight {
            return Err(KeystoneError::Busy);
        }
        Ok(())
    }

    // -- Background work ------------------------------------------------------

    /// Start auto-detection on the current bitmap. Returns the generation it
    /// runs against.
    pub fn request_auto_detect(&mut self) -> Result<u64> {
        let bitmap = self.begin_task()?;
        let detector = Arc::clone(&self.detector);
        let generation = self.generation;
        self.spawn(move || Completion::Detected {
            generation,
            quad: detector.detect(&bitmap),
        })?;
        debug!(generation, "Auto-detection requested");
        Ok(generation)
    }

    /// Start a warp of the current bitmap with a snapshot of the current quad.
    pub fn request_warp(&mut self) -> Result<u64> {
        let bitmap = self.begin_task()?;
        let quad = self.editor.snapshot();
        let solver = PerspectiveSolver::new(self.settings.solver_config());
        let generation = self.generation;
        self.spawn(move || {
            let output = solver.rectify(&bitmap, &quad);
            Completion::Warped {
                generation,
                quad,
                output,
            }
        })?;
        debug!(generation, "Warp requested");
        Ok(generation)
    }

    fn begin_task(&self) -> Result<Arc<DynamicImage>> {
        self.ensure_idle()?;
        self.bitmap.clone().ok_or(KeystoneError::NoImage)
    }

    fn spawn(&mut self, work: impl FnOnce() -> Completion + Send + 'static) -> Result<()> {
        let handle = Handle::try_current().map_err(|err| KeystoneError::Task(err.to_string()))?;
        let tx = self.tx.clone();
        let generation = self.generation;
        handle.spawn(async move {
            let completion = match tokio::task::spawn_blocking(work).await {
                Ok(completion) => completion,
                Err(err) => Completion::Failed {
                    generation,
                    error: err.to_string(),
                },
            };
            // The receiver lives as long as the session; a send error only
            // means the session is gone.
            let _ = tx.send(completion);
        });
        self.in_flight = true;
        Ok(())
    }

    /// Apply every completion already delivered, without waiting. Returns
    /// how many were applied (stale ones are not counted).
    pub fn pump_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the in-flight task and apply its result. Returns `false`
    /// when nothing was running or the result was stale.
    pub async fn wait_for_completion(&mut self) -> bool {
        if !self.in_flight {
            return false;
        }
        match self.rx.recv().await {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    fn apply(&mut self, completion: Completion) -> bool {
        self.in_flight = false;
        let applied = if completion.generation() == self.generation {
            self.apply_current(completion);
            true
        } else {
            debug!(
                result_generation = completion.generation(),
                current_generation = self.generation,
                "Dropping stale result"
            );
            false
        };

        if std::mem::take(&mut self.detect_pending) {
            if let Err(err) = self.request_auto_detect() {
                warn!(error = %err, "Queued auto-detection could not start");
            }
        }
        applied
    }

    fn apply_current(&mut self, completion: Completion) {

        match completion {
            Completion::Detected { quad, .. } => {
                self.editor.set_quad(&quad);
                info!("Auto-detected quadrilateral applied");
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_detect_complete(self.editor.quadrilateral());
                }
            }
            Completion::Warped { quad, output, .. } => {
                match (&output, self.editor.bitmap_size()) {
                    (Some(image), Some((width, height))) => {
                        info!(
                            out_width = image.width(),
                            out_height = image.height(),
                            "Warp output ready"
                        );
                        self.settings.previous =
                            Some(SavedPerspective::capture(&quad, width, height));
                    }
                    _ => warn!("Warp produced no output"),
                }
                self.output = output;
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_warp_complete(self.output.as_ref());
                }
            }
            Completion::Failed { error, .. } => {
                warn!(%error, "Background task failed");
            }
        }
    }
}
