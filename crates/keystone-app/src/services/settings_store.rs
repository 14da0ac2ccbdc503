// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings file persistence.
//
// Settings live as pretty-printed JSON in the data directory. A missing file
// means first run; an unreadable or corrupt one is logged and replaced by
// defaults so a bad file never blocks the app.

use std::path::Path;

use keystone_core::PerspectiveSettings;
use keystone_core::error::Result;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

/// Load persisted settings, or defaults.
pub fn load_settings(data_dir: &Path) -> PerspectiveSettings {
    let path = data_dir.join(SETTINGS_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file; using defaults");
            return PerspectiveSettings::default();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "settings unreadable; using defaults");
            return PerspectiveSettings::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "settings corrupt; using defaults");
            PerspectiveSettings::default()
        }
    }
}

/// Write `settings` to the data directory.
pub fn persist_settings(data_dir: &Path, settings: &PerspectiveSettings) -> Result<()> {
    let path = data_dir.join(SETTINGS_FILE);
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, json)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
