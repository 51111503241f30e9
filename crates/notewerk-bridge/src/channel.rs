// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Command-channel dispatch.
//
// One method is served: `createShortcut`. Arguments are validated before
// the capability is touched, and capability failures never cross the
// channel boundary; they collapse to a `false` result.

use serde_json::Value;
use tracing::{debug, warn};

use notewerk_core::{ShimError, ShortcutRequest};

use crate::protocol::{
    ARG_FILE_PATH, ARG_NOTE_NAME, METHOD_CREATE_SHORTCUT, MethodCall, MethodReply, reply_for_error,
};
use crate::traits::ShortcutPinner;

/// Serves the UI runtime's method channel.
///
/// Stateless between invocations: the only thing held is the injected
/// capability handle.
pub struct CommandBridge {
    pinner: Box<dyn ShortcutPinner>,
}

impl CommandBridge {
    pub fn new(pinner: Box<dyn ShortcutPinner>) -> Self {
        Self { pinner }
    }

    /// Platform name of the capability behind this bridge.
    pub fn platform_name(&self) -> &str {
        self.pinner.platform_name()
    }

    /// Dispatch one decoded method call.
    pub fn handle(&self, call: &MethodCall) -> MethodReply {
        match call.method.as_str() {
            METHOD_CREATE_SHORTCUT => self.create_shortcut(&call.args),
            other => {
                warn!(method = other, "method not served by the command bridge");
                reply_for_error(&ShimError::NotImplemented(other.to_string()))
            }
        }
    }

    /// Convenience wrapper over [`CommandBridge::handle`].
    pub fn invoke(&self, method: &str, args: Value) -> MethodReply {
        self.handle(&MethodCall::new(method, args))
    }

    /// Serve a `createShortcut` call.
    ///
    /// Both string arguments must be present; the error names exactly the
    /// ones that are not, and the capability is never invoked for an
    /// invalid call.
    fn create_shortcut(&self, args: &Value) -> MethodReply {
        let request = match parse_shortcut_args(args) {
            Ok(request) => request,
            Err(missing) => {
                let missing = missing.join(", ");
                warn!(missing = %missing, "createShortcut called with missing arguments");
                return reply_for_error(&ShimError::InvalidArguments(format!(
                    "missing {missing}"
                )));
            }
        };

        debug!(
            file_path = %request.file_path,
            note_name = %request.note_name,
            platform = self.pinner.platform_name(),
            "requesting shortcut pin"
        );

        match self.pinner.request_pin(&request.file_path, &request.note_name) {
            Ok(accepted) => MethodReply::Success(accepted),
            Err(e) => {
                // Capability faults stay on this side of the channel.
                warn!(error = %e, "shortcut capability failed, reporting false");
                reply_for_error(&e)
            }
        }
    }
}

/// Extract both required arguments, reporting every missing one by name.
///
/// Non-string and null values count as missing; so does a non-object
/// argument payload.
fn parse_shortcut_args(args: &Value) -> std::result::Result<ShortcutRequest, Vec<&'static str>> {
    let file_path = args.get(ARG_FILE_PATH).and_then(Value::as_str);
    let note_name = args.get(ARG_NOTE_NAME).and_then(Value::as_str);

    match (file_path, note_name) {
        (Some(file_path), Some(note_name)) => Ok(ShortcutRequest::new(file_path, note_name)),
        (file_path, note_name) => {
            let mut missing = Vec::new();
            if file_path.is_none() {
                missing.push(ARG_FILE_PATH);
            }
            if note_name.is_none() {
                missing.push(ARG_NOTE_NAME);
            }
            Err(missing)
        }
    }
}
