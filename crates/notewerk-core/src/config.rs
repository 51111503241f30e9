// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Shim configuration.

use serde::{Deserialize, Serialize};

/// Persistent shim settings.
///
/// Defaults reproduce the channel and intent names the UI runtime ships
/// with; hosts embedding a rebranded runtime can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShimConfig {
    /// Method-channel name the command bridge answers on.
    pub channel_name: String,
    /// Launch action recognized as "open this note".
    pub launch_action: String,
    /// Extra key carrying the note path in a launch event.
    pub path_extra_key: String,
    /// Prefix applied to launcher shortcut ids derived from note paths.
    pub shortcut_id_prefix: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            channel_name: "com.notes.app/shortcut".into(),
            launch_action: "OPEN_NOTE".into(),
            path_extra_key: "FILE_PATH".into(),
            shortcut_id_prefix: "note_".into(),
        }
    }
}
