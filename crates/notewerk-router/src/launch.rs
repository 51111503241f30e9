// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Inbound launch events from the OS host.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use notewerk_core::ShimConfig;

/// One OS launch event: an action name plus string extras.
///
/// Cold start and re-entry into a running host deliver the same shape;
/// the router decides whether to buffer or forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchEvent {
    /// Intent action, e.g. `OPEN_NOTE`.
    pub action: String,
    /// String extras attached to the intent.
    #[serde(default)]
    pub extras: HashMap<String, String>,
}

impl LaunchEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            extras: HashMap::new(),
        }
    }

    /// The canonical event a pinned note shortcut fires.
    pub fn open_note(config: &ShimConfig, path: impl Into<String>) -> Self {
        Self::new(config.launch_action.clone())
            .with_extra(config.path_extra_key.clone(), path)
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// The note identifier this event asks to open, if it is an open-note
    /// event at all.
    ///
    /// Requires the configured action and a non-blank value under the
    /// configured path extra; every other event yields `None` and is
    /// ignored by the shim.
    pub fn note_path<'a>(&'a self, config: &ShimConfig) -> Option<&'a str> {
        if self.action != config.launch_action {
            return None;
        }
        self.extras
            .get(&config.path_extra_key)
            .map(String::as_str)
            .filter(|path| !path.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_note_event_round_trips_the_path() {
        let config = ShimConfig::default();
        let event = LaunchEvent::open_note(&config, "/notes/a.md");
        assert_eq!(event.note_path(&config), Some("/notes/a.md"));
    }

    #[test]
    fn foreign_action_is_not_an_open_note() {
        let config = ShimConfig::default();
        let event = LaunchEvent::new("android.intent.action.MAIN");
        assert_eq!(event.note_path(&config), None);
    }

    #[test]
    fn open_note_without_path_extra_is_ignored() {
        let config = ShimConfig::default();
        let event = LaunchEvent::new(config.launch_action.clone());
        assert_eq!(event.note_path(&config), None);
    }

    #[test]
    fn blank_path_extra_is_ignored() {
        let config = ShimConfig::default();
        let event = LaunchEvent::new(config.launch_action.clone())
            .with_extra(config.path_extra_key.clone(), "  ");
        assert_eq!(event.note_path(&config), None);
    }
}
