// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Stub pinner for desktop/CI builds where launcher pinning is unavailable.
//
// `request_pin` returns `CapabilityUnavailable`; the command bridge
// collapses that to a `false` result. The real implementation lives in the
// `android` module.

use notewerk_core::error::{Result, ShimError};

use crate::traits::ShortcutPinner;

/// No-op pinner returned on platforms without a pinned-shortcut service.
pub struct StubPinner;

impl ShortcutPinner for StubPinner {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn request_pin(&self, _target_identifier: &str, _display_label: &str) -> Result<bool> {
        tracing::warn!("ShortcutPinner::request_pin called on stub pinner");
        Err(ShimError::CapabilityUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_reports_capability_unavailable() {
        // Unavailable, not declined: logs can tell the two apart even
        // though the channel reports both as `false`.
        let result = StubPinner.request_pin("/notes/a.md", "A");
        assert!(matches!(result, Err(ShimError::CapabilityUnavailable)));
    }
}
