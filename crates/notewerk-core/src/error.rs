// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Unified error types for the Notewerk native shim.

use thiserror::Error;

/// Top-level error type for all shim operations.
#[derive(Debug, Error)]
pub enum ShimError {
    // -- Command channel errors --
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("method not implemented: {0}")]
    NotImplemented(String),

    // -- Shortcut capability errors --
    #[error("shortcut capability error: {0}")]
    Capability(String),

    #[error("shortcut pinning not available on this platform")]
    CapabilityUnavailable,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ShimError>;
