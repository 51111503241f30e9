// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Wire protocol for the UI runtime's method channel.
//
// The UI runtime sends `{"method": ..., "args": ...}` envelopes and expects
// either a bare boolean result or an error object carrying a
// machine-readable code. One method is served (`createShortcut`); the
// native side sends one (`openNote`) in the other direction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use notewerk_core::error::{Result, ShimError};

// ---------------------------------------------------------------------------
// Method names and argument keys
// ---------------------------------------------------------------------------

/// Inbound: ask the native side to pin a launcher shortcut.
pub const METHOD_CREATE_SHORTCUT: &str = "createShortcut";

/// Outbound: ask the UI runtime to open a note.
pub const METHOD_OPEN_NOTE: &str = "openNote";

/// Required `createShortcut` argument: path of the note file.
pub const ARG_FILE_PATH: &str = "filePath";

/// Required `createShortcut` argument: display name of the note.
pub const ARG_NOTE_NAME: &str = "noteName";

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// A call was missing required arguments.
pub const CODE_INVALID_ARGS: &str = "INVALID_ARGS";

/// The bridge does not serve the requested method.
pub const CODE_NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// One inbound call from the UI runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name, e.g. `createShortcut`.
    pub method: String,
    /// Method arguments; an object for every method served here.
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// The outbound call asking the UI runtime to open a note.
///
/// Its argument is the bare note path rather than an object; that is the
/// shape the runtime's `openNote` handler was shipped with.
pub fn open_note_call(path: &str) -> MethodCall {
    MethodCall::new(METHOD_OPEN_NOTE, Value::String(path.to_string()))
}

/// Outcome of one method call, before wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodReply {
    /// The capability's boolean verdict.
    Success(bool),
    /// Structured failure reported back to the caller.
    Error { code: String, message: String },
    /// The method is not served by this bridge.
    ///
    /// Kept distinct from [`MethodReply::Error`] so hosts with a
    /// channel-native "not implemented" signal can map it directly.
    NotImplemented,
}

impl MethodReply {
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::Error {
            code: CODE_INVALID_ARGS.into(),
            message: message.into(),
        }
    }
}

/// Map a native-side error onto the wire reply.
///
/// Only the two caller-facing kinds cross the channel with a code; anything
/// the capability (or the platform underneath it) raises collapses to a
/// plain `false` result, indistinguishable from a declined pin.
pub fn reply_for_error(err: &ShimError) -> MethodReply {
    match err {
        ShimError::InvalidArguments(message) => MethodReply::invalid_args(message.clone()),
        ShimError::NotImplemented(_) => MethodReply::NotImplemented,
        _ => MethodReply::Success(false),
    }
}

// ---------------------------------------------------------------------------
// Wire codec
// ---------------------------------------------------------------------------

/// Decode one `{"method": ..., "args": ...}` envelope.
///
/// Payloads without a string `method` are rejected; a missing `args`
/// defaults to null, which every handler treats as an empty argument set.
pub fn decode_call(raw: &str) -> Result<MethodCall> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a reply for the wire.
///
/// Success is a bare JSON boolean; failures are `{"code", "message"}`
/// objects. Plain JSON has no channel-native "not implemented" signal, so
/// that variant encodes as a fixed `NOT_IMPLEMENTED` error object.
pub fn encode_reply(reply: &MethodReply) -> Value {
    match reply {
        MethodReply::Success(accepted) => Value::Bool(*accepted),
        MethodReply::Error { code, message } => serde_json::json!({
            "code": code,
            "message": message,
        }),
        MethodReply::NotImplemented => serde_json::json!({
            "code": CODE_NOT_IMPLEMENTED,
            "message": "method not implemented",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_call_reads_method_and_args() {
        let call = decode_call(
            r#"{"method": "createShortcut", "args": {"filePath": "/notes/a.md", "noteName": "A"}}"#,
        )
        .unwrap();
        assert_eq!(call.method, METHOD_CREATE_SHORTCUT);
        assert_eq!(call.args[ARG_FILE_PATH], "/notes/a.md");
        assert_eq!(call.args[ARG_NOTE_NAME], "A");
    }

    #[test]
    fn decode_call_without_method_is_rejected() {
        assert!(decode_call(r#"{"args": {}}"#).is_err());
    }

    #[test]
    fn decode_call_defaults_missing_args_to_null() {
        let call = decode_call(r#"{"method": "createShortcut"}"#).unwrap();
        assert!(call.args.is_null());
    }

    #[test]
    fn success_encodes_as_bare_boolean() {
        assert_eq!(encode_reply(&MethodReply::Success(true)), Value::Bool(true));
        assert_eq!(
            encode_reply(&MethodReply::Success(false)),
            Value::Bool(false)
        );
    }

    #[test]
    fn error_encodes_code_and_message() {
        let wire = encode_reply(&MethodReply::invalid_args("missing filePath"));
        assert_eq!(wire["code"], CODE_INVALID_ARGS);
        assert_eq!(wire["message"], "missing filePath");
    }

    #[test]
    fn not_implemented_encodes_its_own_code() {
        let wire = encode_reply(&MethodReply::NotImplemented);
        assert_eq!(wire["code"], CODE_NOT_IMPLEMENTED);
    }

    #[test]
    fn open_note_call_carries_the_bare_path() {
        let call = open_note_call("/notes/a.md");
        assert_eq!(call.method, METHOD_OPEN_NOTE);
        assert_eq!(call.args, Value::String("/notes/a.md".into()));
    }

    #[test]
    fn native_errors_map_onto_the_wire() {
        let reply = reply_for_error(&ShimError::InvalidArguments("missing noteName".into()));
        assert_eq!(reply, MethodReply::invalid_args("missing noteName"));

        let reply = reply_for_error(&ShimError::NotImplemented("renameShortcut".into()));
        assert_eq!(reply, MethodReply::NotImplemented);

        // Capability trouble of any kind reads as a plain decline.
        let reply = reply_for_error(&ShimError::CapabilityUnavailable);
        assert_eq!(reply, MethodReply::Success(false));
        let reply = reply_for_error(&ShimError::Capability("jni fault".into()));
        assert_eq!(reply, MethodReply::Success(false));
    }
}
