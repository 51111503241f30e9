// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Notewerk: launch-signal routing between the OS host and the UI runtime.
//
// A note can be asked for before the UI runtime is ready to show it (cold
// start from a pinned shortcut). The router buffers at most one such
// request and replays it exactly once when the runtime's receiver attaches.

pub mod launch;
pub mod router;
pub mod slot;

pub use launch::LaunchEvent;
pub use router::{LaunchRouter, SignalReceiver};
pub use slot::PendingSlot;
