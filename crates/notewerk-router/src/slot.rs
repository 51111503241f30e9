// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Single-slot buffer for an undelivered launch signal.

/// At most one launch signal waits for delivery at any time.
///
/// A newer signal always replaces an older undelivered one: if the user
/// taps two note shortcuts before the UI runtime is up, only the second
/// tap survives. There is no queue and no re-delivery after a take.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingSlot {
    /// Nothing waiting.
    #[default]
    Empty,
    /// One undelivered note identifier.
    Holding(String),
}

impl PendingSlot {
    /// Store `identifier`, returning whatever it displaced.
    pub fn replace(&mut self, identifier: String) -> Option<String> {
        match std::mem::replace(self, Self::Holding(identifier)) {
            Self::Empty => None,
            Self::Holding(prev) => Some(prev),
        }
    }

    /// Empty the slot, yielding the held identifier if there was one.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Holding(identifier) => Some(identifier),
        }
    }

    /// The held identifier, if any, without consuming it.
    pub fn peek(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Holding(identifier) => Some(identifier),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
