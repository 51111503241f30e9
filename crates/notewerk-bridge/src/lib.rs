// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Notewerk: command-channel dispatch and native shortcut pinning.
//
// The UI runtime talks to the native side over a single method channel.
// This crate decodes those calls, validates their arguments, and delegates
// shortcut pinning to the platform adapter behind the `ShortcutPinner`
// trait. Platforms without a pinned-shortcut service get a stub adapter
// whose failures the bridge collapses to a plain `false` result.

pub mod channel;
pub mod protocol;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

use notewerk_core::ShimConfig;

/// Retrieves the shortcut-pinning adapter for the target operating system.
pub fn platform_pinner(config: &ShimConfig) -> Box<dyn traits::ShortcutPinner> {
    #[cfg(target_os = "android")]
    {
        // Android: pins through ShortcutManager via `jni-rs`.
        Box::new(android::AndroidPinner::new(config.clone()))
    }
    #[cfg(not(target_os = "android"))]
    {
        // DESKTOP/CI: launcher pinning has no desktop equivalent.
        let _ = config;
        Box::new(stub::StubPinner)
    }
}
