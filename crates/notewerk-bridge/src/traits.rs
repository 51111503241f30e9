// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Platform-agnostic trait definition for the shortcut capability.
//
// The command bridge never speaks to the OS directly; it goes through this
// seam so tests can script the capability and desktop builds can run with
// a stub.

use notewerk_core::error::Result;

/// OS-level pinned-shortcut service.
///
/// Implementations may be unavailable on a given platform or OS version;
/// they report that as `Ok(false)` or an error rather than panicking. The
/// command bridge collapses either form to a plain `false` for callers.
pub trait ShortcutPinner: Send + Sync {
    /// Human-readable platform name (e.g. "Android", "Desktop (stub)").
    fn platform_name(&self) -> &str;

    /// Ask the launcher to pin a shortcut that opens `target_identifier`,
    /// labelled `display_label`.
    ///
    /// Returns `Ok(true)` if the pin request was accepted and `Ok(false)`
    /// if the platform declined or does not support pinning.
    fn request_pin(&self, target_identifier: &str, display_label: &str) -> Result<bool>;
}
