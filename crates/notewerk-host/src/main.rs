// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// notewerk-doctor: self-check for the native shim.
//
// Runs the shipped pipeline end to end in a scratch data directory:
// signal buffering → flush on attach → live forwarding → command channel
// validation → a real pin request through the platform capability →
// settings persistence. Exits non-zero if any check fails.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::json;

use notewerk_bridge::protocol::{
    CODE_INVALID_ARGS, METHOD_CREATE_SHORTCUT, MethodReply, decode_call, encode_reply,
};
use notewerk_core::ShimConfig;
use notewerk_host::HostServices;
use notewerk_host::services::host_services::load_config;
use notewerk_router::SignalReceiver;

/// Result of a single self-check step.
struct StepResult {
    name: &'static str,
    passed: bool,
    detail: String,
}

/// Records every identifier the shim forwards, for verification.
#[derive(Default)]
struct CaptureReceiver {
    opened: Mutex<Vec<String>>,
}

impl CaptureReceiver {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("capture lock poisoned").clone()
    }
}

impl SignalReceiver for CaptureReceiver {
    fn open_note(&self, identifier: &str) {
        self.opened
            .lock()
            .expect("capture lock poisoned")
            .push(identifier.to_string());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("notewerk doctor starting");

    println!("notewerk doctor");
    println!("===============");

    let steps = run_self_check();
    let mut failures = 0;
    for step in &steps {
        let mark = if step.passed { "ok" } else { "FAIL" };
        if !step.passed {
            failures += 1;
        }
        println!("  {:>4}  {:<24}  {}", mark, step.name, step.detail);
    }

    println!();
    if failures == 0 {
        println!("all {} checks passed", steps.len());
    } else {
        println!("{failures} of {} checks failed", steps.len());
        std::process::exit(1);
    }
}

/// Run every check in order against one shared service instance.
///
/// Later steps build on earlier ones (the flush check delivers what the
/// buffering check queued), so order matters.
fn run_self_check() -> Vec<StepResult> {
    let mut steps = Vec::new();

    let dir = std::env::temp_dir().join("notewerk-doctor");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        steps.push(StepResult {
            name: "data directory",
            passed: false,
            detail: format!("cannot create {}: {e}", dir.display()),
        });
        return steps;
    }

    let config = ShimConfig::default();
    let pinner = notewerk_bridge::platform_pinner(&config);
    let services = HostServices::init_with(pinner, config, dir.clone());
    let receiver = Arc::new(CaptureReceiver::default());

    steps.push(check_capability(&services));
    steps.push(check_buffering(&services));
    steps.push(check_flush(&services, &receiver));
    steps.push(check_idempotent_attach(&services, &receiver));
    steps.push(check_live_forwarding(&services, &receiver));
    steps.push(check_argument_validation(&services));
    steps.push(check_unknown_method(&services));
    steps.push(check_pin_request(&services));
    steps.push(check_settings(&services, &dir));

    steps
}

fn check_capability(services: &HostServices) -> StepResult {
    StepResult {
        name: "shortcut capability",
        passed: true,
        detail: format!("platform: {}", services.platform_name()),
    }
}

fn check_buffering(services: &HostServices) -> StepResult {
    services.on_signal("/notes/a.md");
    services.on_signal("/notes/b.md");
    let pending = services.pending_signal();
    StepResult {
        name: "signal buffering",
        passed: pending.as_deref() == Some("/notes/b.md"),
        detail: format!("pending after two signals: {pending:?}"),
    }
}

fn check_flush(services: &HostServices, receiver: &Arc<CaptureReceiver>) -> StepResult {
    services.attach_receiver(receiver.clone());
    let opened = receiver.opened();
    StepResult {
        name: "flush on attach",
        passed: opened == ["/notes/b.md"] && services.pending_signal().is_none(),
        detail: format!("delivered: {opened:?}"),
    }
}

fn check_idempotent_attach(services: &HostServices, receiver: &Arc<CaptureReceiver>) -> StepResult {
    services.attach_receiver(receiver.clone());
    let opened = receiver.opened();
    StepResult {
        name: "idempotent attach",
        passed: opened.len() == 1,
        detail: format!("deliveries after re-attach: {}", opened.len()),
    }
}

fn check_live_forwarding(services: &HostServices, receiver: &Arc<CaptureReceiver>) -> StepResult {
    services.on_signal("/notes/c.md");
    let opened = receiver.opened();
    StepResult {
        name: "live forwarding",
        passed: opened.last().map(String::as_str) == Some("/notes/c.md")
            && services.pending_signal().is_none(),
        detail: format!("last delivery: {:?}", opened.last()),
    }
}

fn check_argument_validation(services: &HostServices) -> StepResult {
    let reply = services.invoke(METHOD_CREATE_SHORTCUT, json!({ "filePath": "/notes/c.md" }));
    let (passed, detail) = match &reply {
        MethodReply::Error { code, message } if code == CODE_INVALID_ARGS => {
            (message.contains("noteName"), format!("{code}: {message}"))
        }
        other => (false, format!("unexpected reply: {other:?}")),
    };
    StepResult {
        name: "argument validation",
        passed,
        detail,
    }
}

fn check_unknown_method(services: &HostServices) -> StepResult {
    let reply = services.invoke("renameShortcut", json!({}));
    StepResult {
        name: "unknown method",
        passed: reply == MethodReply::NotImplemented,
        detail: format!("renameShortcut: {reply:?}"),
    }
}

fn check_pin_request(services: &HostServices) -> StepResult {
    let raw =
        r#"{"method": "createShortcut", "args": {"filePath": "/notes/c.md", "noteName": "C"}}"#;
    let call = match decode_call(raw) {
        Ok(call) => call,
        Err(e) => {
            return StepResult {
                name: "pin request",
                passed: false,
                detail: format!("envelope decode failed: {e}"),
            };
        }
    };
    let reply = services.handle_method_call(&call);
    let wire = encode_reply(&reply);
    // Either verdict is healthy; capability faults must still encode as a
    // bare boolean, never as an error object.
    StepResult {
        name: "pin request",
        passed: wire.is_boolean(),
        detail: format!("{} replied {wire}", services.platform_name()),
    }
}

fn check_settings(services: &HostServices, dir: &Path) -> StepResult {
    let mut config = services.config();
    config.shortcut_id_prefix = "doctor_".into();
    if let Err(e) = services.save_config(&config) {
        return StepResult {
            name: "settings round-trip",
            passed: false,
            detail: format!("save failed: {e}"),
        };
    }
    let reloaded = load_config(dir);
    StepResult {
        name: "settings round-trip",
        passed: reloaded.map(|c| c.shortcut_id_prefix) == Some("doctor_".to_string()),
        detail: format!("config.json in {}", dir.display()),
    }
}
