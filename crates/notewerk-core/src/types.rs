// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Core domain types for the Notewerk native shim.

use serde::{Deserialize, Serialize};

/// A validated request to pin a launcher shortcut for one note.
///
/// Field names follow the wire form used by the UI runtime (`filePath`,
/// `noteName`). The struct is transient: it exists for one command
/// invocation and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutRequest {
    /// Path of the note file the shortcut opens.
    pub file_path: String,
    /// Display name shown under the launcher icon.
    pub note_name: String,
}

impl ShortcutRequest {
    pub fn new(file_path: impl Into<String>, note_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            note_name: note_name.into(),
        }
    }

    /// Stable launcher id for this note, derived from the file path.
    ///
    /// Re-pinning the same note reuses the id instead of stacking duplicate
    /// launcher entries.
    pub fn shortcut_id(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.file_path)
    }

    /// Long label shown in the launcher's pin dialog.
    pub fn long_label(&self) -> String {
        format!("Open note: {}", self.note_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_camel_case() {
        let req: ShortcutRequest = serde_json::from_value(serde_json::json!({
            "filePath": "/notes/recipes.md",
            "noteName": "Recipes",
        }))
        .unwrap();
        assert_eq!(req.file_path, "/notes/recipes.md");
        assert_eq!(req.note_name, "Recipes");
    }

    #[test]
    fn shortcut_id_prefixes_the_path() {
        let req = ShortcutRequest::new("/notes/a.md", "A");
        assert_eq!(req.shortcut_id("note_"), "note_/notes/a.md");
    }

    #[test]
    fn long_label_names_the_note() {
        let req = ShortcutRequest::new("/notes/a.md", "Groceries");
        assert_eq!(req.long_label(), "Open note: Groceries");
    }
}
