// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared domain enums.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeystoneError;

/// Global constraint on the direction a dragged corner may travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    /// Corners move freely; edges are not independently draggable.
    #[default]
    Free,
    /// Corners move along X only. Left and right edges can be dragged.
    HorizontalOnly,
    /// Corners move along Y only. Top and bottom edges can be dragged.
    VerticalOnly,
}

impl EditMode {
    /// Whether edge dragging is available in this mode.
    pub fn allows_edge_drag(&self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Short lowercase name, as shown in logs and accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::HorizontalOnly => "horizontal",
            Self::VerticalOnly => "vertical",
        }
    }

    /// Parse the name produced by [`EditMode::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "free" | "all" => Some(Self::Free),
            "horizontal" | "h" => Some(Self::HorizontalOnly),
            "vertical" | "v" => Some(Self::VerticalOnly),
            _ => None,
        }
    }
}

impl FromStr for EditMode {
    type Err = KeystoneError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| {
            KeystoneError::InvalidArgument(format!(
                "unknown edit mode `{name}` (expected free, horizontal or vertical)"
            ))
        })
    }
}

impl std::fmt::Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
