// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanning pipeline — automatic quadrilateral detection and perspective
// rectification.

pub mod detect;
pub mod solver;

pub use detect::AutoDetector;
pub use solver::PerspectiveSolver;
