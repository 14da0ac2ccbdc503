// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Keystone — Core geometry, quadrilateral model, coordinate mapping, and error
// definitions shared across all crates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod quad;
pub mod types;

pub use config::{DetectorConfig, EditorConfig, PerspectiveSettings, SavedPerspective, SolverConfig};
pub use error::KeystoneError;
pub use geometry::{Line, Orientation, Point, Rect};
pub use mapping::CoordinateMapper;
pub use quad::{Corner, Edge, Quadrilateral};
pub use types::*;
