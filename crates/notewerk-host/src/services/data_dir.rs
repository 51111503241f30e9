// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

/// Return the shim data directory, creating it if needed.
///
/// On desktop this uses a conventional location. On Android the embedding
/// host should pass its files directory to `HostServices::init_with`
/// instead.
pub fn data_dir() -> PathBuf {
    let base = dirs_fallback();
    let dir = base.join("notewerk");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fall back to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    PathBuf::from("/tmp")
}
