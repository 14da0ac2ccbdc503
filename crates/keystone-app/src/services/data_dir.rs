// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

use tracing::warn;

const APP_DIR: &str = "keystone";

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> PathBuf {
    let dir = resolve_base(
        std::env::var("XDG_DATA_HOME").ok(),
        std::env::var("HOME").ok(),
    )
    .join(APP_DIR);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        warn!(path = %dir.display(), error = %err, "could not create data directory");
    }
    dir
}

/// `$XDG_DATA_HOME`, else `$HOME/.local/share`, else the temp dir.
fn resolve_base(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }
    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share");
    }
    std::env::temp_dir()
}
