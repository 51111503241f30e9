// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Notewerk: core types and error definitions shared across the shim crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::ShimConfig;
pub use error::ShimError;
pub use types::ShortcutRequest;
