// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editor notifications consumed by the hosting UI.

/// Callbacks fired by [`crate::InteractiveEditor`] on the thread that feeds it
/// pointer events. Every method defaults to a no-op.
pub trait EditListener {
    /// The quad changed; the host should redraw.
    fn on_perspective_changed(&mut self) {}

    /// A pointer-down grabbed a corner or an edge.
    fn on_edit_start(&mut self) {}

    /// The drag finished (pointer up, or the bitmap changed underneath it).
    fn on_edit_end(&mut self) {}
}
