// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Deferred-delivery routing for "open note" launch signals.
//
// A launch signal can arrive before the UI runtime is ready to receive it.
// Forward immediately when a receiver is attached; otherwise hold the
// signal (newest wins) until attachment, then deliver it exactly once.

use tracing::{debug, info};

use crate::slot::PendingSlot;

/// UI-side endpoint able to accept a forwarded launch signal.
///
/// Delivery is fire-and-forget; no acknowledgment is modeled.
pub trait SignalReceiver: Send + Sync {
    /// Ask the UI runtime to open the note at `identifier`.
    fn open_note(&self, identifier: &str);
}

/// Routes launch signals to the receiver, buffering at most one while no
/// receiver is attached.
///
/// The router does not track attachment itself; the host owns that fact
/// and passes the current receiver (or its absence) with each call.
#[derive(Debug, Default)]
pub struct LaunchRouter {
    pending: PendingSlot,
}

impl LaunchRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one inbound "open note" signal.
    ///
    /// With a receiver attached the identifier is forwarded synchronously
    /// and never retained. With none it is buffered, displacing any older
    /// undelivered signal. Blank identifiers are dropped: a launch event
    /// has no caller to report a validation error to.
    pub fn on_signal(&mut self, receiver: Option<&dyn SignalReceiver>, identifier: &str) {
        if identifier.trim().is_empty() {
            debug!("ignoring launch signal without note identifier");
            return;
        }

        match receiver {
            Some(receiver) => {
                debug!(identifier, "forwarding launch signal to receiver");
                receiver.open_note(identifier);
            }
            None => {
                if let Some(displaced) = self.pending.replace(identifier.to_string()) {
                    info!(
                        identifier,
                        displaced = %displaced,
                        "buffering launch signal, replacing undelivered one"
                    );
                } else {
                    debug!(identifier, "buffering launch signal until receiver attaches");
                }
            }
        }
    }

    /// Handle the receiver becoming ready.
    ///
    /// Delivers the pending signal, if any, exactly once and empties the
    /// slot. Calling this again without a new signal is a no-op.
    pub fn on_receiver_attached(&mut self, receiver: &dyn SignalReceiver) {
        if let Some(identifier) = self.pending.take() {
            info!(identifier = %identifier, "delivering buffered launch signal");
            receiver.open_note(&identifier);
        }
    }

    /// The buffered identifier, if any.
    pub fn pending_signal(&self) -> Option<&str> {
        self.pending.peek()
    }
}
