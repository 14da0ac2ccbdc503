// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — owns the editing session, runs detection and warping off
// the interaction thread, and persists user settings between runs.

pub mod data_dir;
pub mod session;
pub mod settings_store;
