// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Central service layer: owns the launch router, the receiver attachment
// fact, the command bridge, and the persisted settings.
//
// The router is single-threaded state behind `&mut self`; wrapping it in
// `Arc<Mutex<>>` here keeps slot writes serialized even if the embedding
// host calls in from more than one thread. Every path that takes both
// locks takes the receiver fact first and the router second, so a signal
// can never be buffered after an attach has already flushed the slot.
// Contention is negligible: every operation is a short synchronous hop.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use notewerk_bridge::channel::CommandBridge;
use notewerk_bridge::protocol::{MethodCall, MethodReply};
use notewerk_bridge::traits::ShortcutPinner;
use notewerk_core::ShimConfig;
use notewerk_core::error::Result;
use notewerk_router::{LaunchEvent, LaunchRouter, SignalReceiver};

use super::data_dir;

/// Shared shim services for the embedding host.
///
/// All fields are cheaply cloneable (Arc-wrapped) so the struct can be
/// handed to lifecycle callbacks without lifetime issues.
#[derive(Clone)]
pub struct HostServices {
    router: Arc<Mutex<LaunchRouter>>,
    receiver: Arc<Mutex<Option<Arc<dyn SignalReceiver>>>>,
    bridge: Arc<CommandBridge>,
    config: Arc<Mutex<ShimConfig>>,
    data_dir: PathBuf,
}

impl HostServices {
    /// Initialise the shim with the platform pinner and default data dir.
    /// Call once at host startup.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        let config = load_config(&dir).unwrap_or_default();
        let pinner = notewerk_bridge::platform_pinner(&config);
        Self::init_with(pinner, config, dir)
    }

    /// Initialise with an explicit pinner, config, and data dir.
    ///
    /// This is the seam the doctor binary and tests use to inject a
    /// scripted capability.
    pub fn init_with(pinner: Box<dyn ShortcutPinner>, config: ShimConfig, dir: PathBuf) -> Self {
        let bridge = CommandBridge::new(pinner);
        info!(
            path = %dir.display(),
            channel = %config.channel_name,
            platform = bridge.platform_name(),
            "initialising shim services"
        );

        Self {
            router: Arc::new(Mutex::new(LaunchRouter::new())),
            receiver: Arc::new(Mutex::new(None)),
            bridge: Arc::new(bridge),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        }
    }

    // -- Launch signals ------------------------------------------------------

    /// Feed one OS launch event into the shim.
    ///
    /// Called from both the cold-start and the re-entry lifecycle hook;
    /// events that are not open-note events are ignored.
    pub fn handle_launch(&self, event: &LaunchEvent) {
        let config = self.config.lock().expect("config lock poisoned").clone();
        match event.note_path(&config) {
            Some(path) => self.on_signal(path),
            None => debug!(action = %event.action, "ignoring launch event"),
        }
    }

    /// Route one "open note" signal.
    ///
    /// Forwards to the attached receiver, or buffers (newest wins) until
    /// one attaches. The receiver lock is held across the routing so an
    /// attach cannot land between reading the fact and writing the slot.
    pub fn on_signal(&self, identifier: &str) {
        let receiver = self.receiver.lock().expect("receiver lock poisoned");
        let mut router = self.router.lock().expect("router lock poisoned");
        router.on_signal(receiver.as_deref(), identifier);
    }

    /// Attach the UI runtime's receiver.
    ///
    /// Records the attachment fact, then flushes the pending signal (if
    /// any) exactly once. Safe to call again after an engine restart.
    pub fn attach_receiver(&self, receiver: Arc<dyn SignalReceiver>) {
        *self.receiver.lock().expect("receiver lock poisoned") = Some(Arc::clone(&receiver));
        info!("receiver attached, flushing any pending launch signal");
        let mut router = self.router.lock().expect("router lock poisoned");
        router.on_receiver_attached(receiver.as_ref());
    }

    /// Detach the receiver (e.g. the UI runtime is shutting down).
    ///
    /// Later signals buffer again until the next attachment.
    pub fn detach_receiver(&self) {
        *self.receiver.lock().expect("receiver lock poisoned") = None;
        info!("receiver detached, signals will buffer");
    }

    /// The buffered identifier, if any. Mostly useful for diagnostics.
    pub fn pending_signal(&self) -> Option<String> {
        self.router
            .lock()
            .expect("router lock poisoned")
            .pending_signal()
            .map(String::from)
    }

    // -- Command channel -----------------------------------------------------

    /// Dispatch one decoded method call from the UI runtime.
    pub fn handle_method_call(&self, call: &MethodCall) -> MethodReply {
        self.bridge.handle(call)
    }

    /// Convenience wrapper building the call envelope in place.
    pub fn invoke(&self, method: &str, args: serde_json::Value) -> MethodReply {
        self.bridge.invoke(method, args)
    }

    /// Platform name of the shortcut capability.
    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    // -- Settings ------------------------------------------------------------

    /// Current shim configuration (cloned snapshot).
    pub fn config(&self) -> ShimConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Replace the configuration and persist it to `config.json`.
    pub fn save_config(&self, config: &ShimConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }

    /// The directory holding persisted settings.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// -- Config persistence ------------------------------------------------------

const CONFIG_FILE: &str = "config.json";

/// Read the persisted configuration, if a readable one exists.
///
/// A missing or corrupt file yields `None`; callers fall back to defaults.
pub fn load_config(data_dir: &Path) -> Option<ShimConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &Path, config: &ShimConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    use notewerk_bridge::protocol::{
        CODE_INVALID_ARGS, METHOD_CREATE_SHORTCUT, decode_call, encode_reply,
    };
    use notewerk_core::ShimError;

    /// Records every identifier the shim forwards.
    #[derive(Default)]
    struct CaptureReceiver {
        opened: Mutex<Vec<String>>,
    }

    impl CaptureReceiver {
        fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl SignalReceiver for CaptureReceiver {
        fn open_note(&self, identifier: &str) {
            self.opened.lock().unwrap().push(identifier.to_string());
        }
    }

    /// Pinner double accepting every request.
    struct AcceptPinner;

    impl ShortcutPinner for AcceptPinner {
        fn platform_name(&self) -> &str {
            "test"
        }

        fn request_pin(&self, _target_identifier: &str, _display_label: &str) -> Result<bool> {
            Ok(true)
        }
    }

    /// Pinner double failing every request.
    struct FaultingPinner;

    impl ShortcutPinner for FaultingPinner {
        fn platform_name(&self) -> &str {
            "test"
        }

        fn request_pin(&self, _target_identifier: &str, _display_label: &str) -> Result<bool> {
            Err(ShimError::Capability("launcher unavailable".into()))
        }
    }

    fn test_services(dir: &Path) -> HostServices {
        HostServices::init_with(
            Box::new(AcceptPinner),
            ShimConfig::default(),
            dir.to_path_buf(),
        )
    }

    #[test]
    fn cold_start_delivers_only_the_last_signal_once() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());
        let receiver = Arc::new(CaptureReceiver::default());

        svc.on_signal("/notes/a.md");
        svc.on_signal("/notes/b.md");
        svc.attach_receiver(receiver.clone());

        assert_eq!(receiver.opened(), vec!["/notes/b.md"]);
        assert_eq!(svc.pending_signal(), None);

        // A second attachment event delivers nothing further.
        svc.attach_receiver(receiver.clone());
        assert_eq!(receiver.opened(), vec!["/notes/b.md"]);
    }

    #[test]
    fn live_signal_goes_straight_through() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());
        let receiver = Arc::new(CaptureReceiver::default());

        svc.attach_receiver(receiver.clone());
        svc.on_signal("/notes/a.md");

        assert_eq!(receiver.opened(), vec!["/notes/a.md"]);
        assert_eq!(svc.pending_signal(), None);
    }

    #[test]
    fn detach_buffers_later_signals() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());
        let receiver = Arc::new(CaptureReceiver::default());

        svc.attach_receiver(receiver.clone());
        svc.detach_receiver();
        svc.on_signal("/notes/a.md");

        assert!(receiver.opened().is_empty());
        assert_eq!(svc.pending_signal(), Some("/notes/a.md".into()));
    }

    #[test]
    fn attach_during_a_signal_stream_leaves_nothing_pending() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());
        let receiver = Arc::new(CaptureReceiver::default());

        let sender = {
            let svc = svc.clone();
            std::thread::spawn(move || {
                for n in 0..100 {
                    svc.on_signal(&format!("/notes/{n}.md"));
                }
            })
        };
        svc.attach_receiver(receiver.clone());
        sender.join().unwrap();

        // Signals routed after the attach forward directly; anything
        // buffered before it is flushed by the attach itself. Either way
        // the slot ends up empty.
        assert_eq!(svc.pending_signal(), None);
        assert!(!receiver.opened().is_empty());
    }

    #[test]
    fn launch_events_feed_the_router() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());
        let config = svc.config();

        svc.handle_launch(&LaunchEvent::open_note(&config, "/notes/a.md"));
        assert_eq!(svc.pending_signal(), Some("/notes/a.md".into()));

        // Unrelated launch events leave the slot alone.
        svc.handle_launch(&LaunchEvent::new("android.intent.action.MAIN"));
        assert_eq!(svc.pending_signal(), Some("/notes/a.md".into()));
    }

    #[test]
    fn method_calls_reach_the_bridge() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());

        let reply = svc.invoke(
            METHOD_CREATE_SHORTCUT,
            json!({ "filePath": "/notes/a.md", "noteName": "A" }),
        );
        assert_eq!(reply, MethodReply::Success(true));

        let reply = svc.invoke(METHOD_CREATE_SHORTCUT, json!({}));
        assert!(matches!(reply, MethodReply::Error { ref code, .. } if code == CODE_INVALID_ARGS));
    }

    #[test]
    fn full_shim_cycle_with_a_faulting_capability() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = HostServices::init_with(
            Box::new(FaultingPinner),
            ShimConfig::default(),
            tmp.path().to_path_buf(),
        );
        let receiver = Arc::new(CaptureReceiver::default());

        // Two signals land before the UI runtime is up; only the newest
        // survives, and re-attaching delivers nothing further.
        svc.on_signal("/notes/a.md");
        svc.on_signal("/notes/b.md");
        svc.attach_receiver(receiver.clone());
        assert_eq!(receiver.opened(), vec!["/notes/b.md"]);
        svc.attach_receiver(receiver.clone());
        assert_eq!(receiver.opened(), vec!["/notes/b.md"]);

        // The capability fault reads as a plain decline on the wire.
        let raw =
            r#"{"method": "createShortcut", "args": {"filePath": "/notes/b.md", "noteName": "B"}}"#;
        let reply = svc.handle_method_call(&decode_call(raw).unwrap());
        assert_eq!(encode_reply(&reply), Value::Bool(false));

        let reply = svc.invoke(METHOD_CREATE_SHORTCUT, json!({ "filePath": "/notes/b.md" }));
        assert!(matches!(
            reply,
            MethodReply::Error { ref code, ref message }
                if code == CODE_INVALID_ARGS && message.contains("noteName")
        ));

        let reply = svc.invoke("renameShortcut", json!({}));
        assert_eq!(reply, MethodReply::NotImplemented);
    }

    #[test]
    fn config_round_trips_through_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = test_services(tmp.path());

        let mut config = svc.config();
        config.launch_action = "SHOW_NOTE".into();
        svc.save_config(&config).unwrap();

        let reloaded = load_config(tmp.path()).unwrap();
        assert_eq!(reloaded.launch_action, "SHOW_NOTE");
    }

    #[test]
    fn corrupt_config_file_falls_back_to_none() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(load_config(tmp.path()).is_none());
    }
}
