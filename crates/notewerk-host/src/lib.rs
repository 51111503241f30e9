// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Notewerk: host lifecycle wiring for the native shim.
//
// Embedding hosts create one `HostServices` at startup, feed launch events
// and method-channel traffic into it, and attach the UI runtime's receiver
// once the channel is ready.

pub mod services;

pub use services::host_services::HostServices;
