// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — decoding source photos and encoding rectified output.

pub mod codec;

pub use codec::{decode_image, encode_jpeg, encode_png, load_image};
