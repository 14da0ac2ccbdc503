// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// keystone-editor — Interactive editing of the document quadrilateral.
//
// Pointer events drive a small state machine (idle, dragging one corner,
// dragging an edge's two corners together). Every accepted move keeps each
// corner inside its safe region; rejected moves leave the quad untouched.

pub mod editor;
pub mod listener;
pub mod session;

pub use editor::{EditState, EventOutcome, InteractiveEditor, MoveOutcome, PointerEvent};
pub use listener::EditListener;
pub use session::{EditSession, SessionKind, TrackedPoint};
