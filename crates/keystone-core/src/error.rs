// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Keystone.
//
// Geometry anomalies (invalid mapping, missed hit test, parallel lines, a drag
// leaving its safe region) are not errors: they degrade to a safe default and
// are expressed in the return types of the operations that detect them.

use thiserror::Error;

/// Top-level error type for all Keystone operations.
#[derive(Debug, Error)]
pub enum KeystoneError {
    // -- Image errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("no image loaded")]
    NoImage,

    // -- Background work --
    #[error("a detection or warp task is already running")]
    Busy,

    #[error("background task failed: {0}")]
    Task(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KeystoneError>;
