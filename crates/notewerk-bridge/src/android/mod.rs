// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Android shortcut pinning via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Pinning goes through
// `android.content.pm.ShortcutManager`; the request is synchronous up to
// the launcher's own confirmation UI.
//
// ## Architecture notes
//
// Pinned shortcuts exist from API 26 (Oreo). Below that, and on launchers
// that do not support pinning, `request_pin` returns `Ok(false)`. Callers
// cannot distinguish that from a user decline, which matches the channel
// contract.
//
// The pin intent re-opens the hosting activity with the configured launch
// action and note-path extra. The host is responsible for feeding the
// resulting intent back into the launch router (see the host crate).

#![cfg(target_os = "android")]

use jni::JNIEnv;
use jni::objects::{JObject, JString, JValue};

use notewerk_core::error::{Result, ShimError};
use notewerk_core::{ShimConfig, ShortcutRequest};

use crate::traits::ShortcutPinner;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// First Android API level with `ShortcutManager.requestPinShortcut`.
const MIN_PIN_API_LEVEL: i32 = 26;

/// `Intent.FLAG_ACTIVITY_SINGLE_TOP`: reuse a running activity instead of
/// stacking a new instance per shortcut tap.
const FLAG_ACTIVITY_SINGLE_TOP: i32 = 0x2000_0000;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by the NDK glue code, then attaches the current thread if it is not
/// already attached.
fn jni_env() -> Result<JNIEnv<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| ShimError::Capability(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread_permanently()
        .map_err(|e| ShimError::Capability(format!("failed to attach JNI thread: {e}")))
}

/// Obtain the hosting Android `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(ShimError::Capability(
            "Android context is null, native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `ShimError::Capability`.
fn jni_err(context: &str, e: jni::errors::Error) -> ShimError {
    ShimError::Capability(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// Pinner struct
// ---------------------------------------------------------------------------

/// Android implementation of the shortcut capability.
///
/// Holds only the shim configuration (launch action, extra key, id
/// prefix); all pinning state lives on the Java side.
pub struct AndroidPinner {
    config: ShimConfig,
}

impl AndroidPinner {
    /// Create a new Android pinner.
    ///
    /// This does **not** touch JNI; the first JNI call happens when
    /// `request_pin` is invoked.
    pub fn new(config: ShimConfig) -> Self {
        Self { config }
    }
}

impl ShortcutPinner for AndroidPinner {
    fn platform_name(&self) -> &str {
        "Android"
    }

    /// Pin a launcher shortcut through `ShortcutManager`.
    ///
    /// Returns `Ok(false)` without touching the launcher when the device is
    /// below API 26 or its launcher does not support pinning. The launcher
    /// may still show its own confirmation UI after `Ok(true)`; that
    /// outcome is not observable here.
    fn request_pin(&self, target_identifier: &str, display_label: &str) -> Result<bool> {
        let mut env = jni_env()?;
        let activity = activity()?;
        let request = ShortcutRequest::new(target_identifier, display_label);

        tracing::info!(
            path = target_identifier,
            label = display_label,
            "Android: requesting pinned shortcut"
        );

        // -- API level gate -----------------------------------------------------
        let sdk_int = env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .map_err(|e| jni_err("Build.VERSION.SDK_INT", e))?
            .i()
            .map_err(|e| jni_err("SDK_INT->i", e))?;

        if sdk_int < MIN_PIN_API_LEVEL {
            tracing::info!(sdk_int, "Android: pinned shortcuts need API 26, reporting false");
            return Ok(false);
        }

        // -- manager = activity.getSystemService(ShortcutManager.class) ---------
        let manager_class = env
            .find_class("android/content/pm/ShortcutManager")
            .map_err(|e| jni_err("find_class(ShortcutManager)", e))?;

        let manager: JObject = env
            .call_method(
                &activity,
                "getSystemService",
                "(Ljava/lang/Class;)Ljava/lang/Object;",
                &[JValue::Object(&manager_class)],
            )
            .map_err(|e| jni_err("getSystemService(ShortcutManager)", e))?
            .l()
            .map_err(|e| jni_err("getSystemService->l", e))?;

        if manager.is_null() {
            tracing::warn!("Android: ShortcutManager service missing, reporting false");
            return Ok(false);
        }

        // -- Launcher support gate ----------------------------------------------
        let supported = env
            .call_method(&manager, "isRequestPinShortcutSupported", "()Z", &[])
            .map_err(|e| jni_err("isRequestPinShortcutSupported", e))?
            .z()
            .map_err(|e| jni_err("isRequestPinShortcutSupported->z", e))?;

        if !supported {
            tracing::info!("Android: launcher does not support pinning, reporting false");
            return Ok(false);
        }

        // -- Build the intent the shortcut fires --------------------------------
        let intent = self.build_pin_intent(&mut env, &activity, &request)?;

        // -- Build the ShortcutInfo ---------------------------------------------
        let shortcut = self.build_shortcut_info(&mut env, &activity, &request, &intent)?;

        // -- manager.requestPinShortcut(shortcut, null) --------------------------
        let accepted = env
            .call_method(
                &manager,
                "requestPinShortcut",
                "(Landroid/content/pm/ShortcutInfo;Landroid/content/IntentSender;)Z",
                &[JValue::Object(&shortcut), JValue::Object(&JObject::null())],
            )
            .map_err(|e| jni_err("requestPinShortcut", e))?
            .z()
            .map_err(|e| jni_err("requestPinShortcut->z", e))?;

        tracing::info!(accepted, "Android: pin request dispatched");
        Ok(accepted)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

impl AndroidPinner {
    /// Build the explicit intent a pinned shortcut fires: the hosting
    /// activity, the configured launch action, and the note-path extra.
    fn build_pin_intent<'a>(
        &self,
        env: &mut JNIEnv<'a>,
        activity: &JObject<'_>,
        request: &ShortcutRequest,
    ) -> Result<JObject<'a>> {
        let j_action: JString = env
            .new_string(&self.config.launch_action)
            .map_err(|e| jni_err("new_string(action)", e))?;

        let intent: JObject = env
            .new_object(
                "android/content/Intent",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_action)],
            )
            .map_err(|e| jni_err("new Intent(action)", e))?;

        // intent.setClass(activity, activity.getClass()) keeps the shortcut
        // bound to the hosting activity regardless of how the app is named.
        let activity_class: JObject = env
            .call_method(activity, "getClass", "()Ljava/lang/Class;", &[])
            .map_err(|e| jni_err("Activity.getClass", e))?
            .l()
            .map_err(|e| jni_err("getClass->l", e))?;

        env.call_method(
            &intent,
            "setClass",
            "(Landroid/content/Context;Ljava/lang/Class;)Landroid/content/Intent;",
            &[JValue::Object(activity), JValue::Object(&activity_class)],
        )
        .map_err(|e| jni_err("Intent.setClass", e))?;

        // intent.putExtra(pathExtraKey, filePath)
        let j_extra_key: JString = env
            .new_string(&self.config.path_extra_key)
            .map_err(|e| jni_err("new_string(extra_key)", e))?;

        let j_path: JString = env
            .new_string(&request.file_path)
            .map_err(|e| jni_err("new_string(file_path)", e))?;

        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&j_extra_key), JValue::Object(&j_path)],
        )
        .map_err(|e| jni_err("putExtra(path)", e))?;

        env.call_method(
            &intent,
            "addFlags",
            "(I)Landroid/content/Intent;",
            &[JValue::Int(FLAG_ACTIVITY_SINGLE_TOP)],
        )
        .map_err(|e| jni_err("addFlags(SINGLE_TOP)", e))?;

        Ok(intent)
    }

    /// Build the `ShortcutInfo`: stable id, labels, application icon, and
    /// the pin intent.
    fn build_shortcut_info<'a>(
        &self,
        env: &mut JNIEnv<'a>,
        activity: &JObject<'_>,
        request: &ShortcutRequest,
        intent: &JObject<'_>,
    ) -> Result<JObject<'a>> {
        let shortcut_id = request.shortcut_id(&self.config.shortcut_id_prefix);
        let j_id: JString = env
            .new_string(&shortcut_id)
            .map_err(|e| jni_err("new_string(shortcut_id)", e))?;

        // new ShortcutInfo.Builder(context, id)
        let builder: JObject = env
            .new_object(
                "android/content/pm/ShortcutInfo$Builder",
                "(Landroid/content/Context;Ljava/lang/String;)V",
                &[JValue::Object(activity), JValue::Object(&j_id)],
            )
            .map_err(|e| jni_err("new ShortcutInfo.Builder", e))?;

        // builder.setShortLabel(noteName)
        let j_short: JString = env
            .new_string(&request.note_name)
            .map_err(|e| jni_err("new_string(short_label)", e))?;

        env.call_method(
            &builder,
            "setShortLabel",
            "(Ljava/lang/CharSequence;)Landroid/content/pm/ShortcutInfo$Builder;",
            &[JValue::Object(&j_short)],
        )
        .map_err(|e| jni_err("setShortLabel", e))?;

        // builder.setLongLabel("Open note: ...")
        let j_long: JString = env
            .new_string(request.long_label())
            .map_err(|e| jni_err("new_string(long_label)", e))?;

        env.call_method(
            &builder,
            "setLongLabel",
            "(Ljava/lang/CharSequence;)Landroid/content/pm/ShortcutInfo$Builder;",
            &[JValue::Object(&j_long)],
        )
        .map_err(|e| jni_err("setLongLabel", e))?;

        // builder.setIcon(Icon.createWithResource(context, applicationInfo.icon))
        let app_info: JObject = env
            .call_method(
                activity,
                "getApplicationInfo",
                "()Landroid/content/pm/ApplicationInfo;",
                &[],
            )
            .map_err(|e| jni_err("getApplicationInfo", e))?
            .l()
            .map_err(|e| jni_err("getApplicationInfo->l", e))?;

        let icon_res = env
            .get_field(&app_info, "icon", "I")
            .map_err(|e| jni_err("ApplicationInfo.icon", e))?
            .i()
            .map_err(|e| jni_err("icon->i", e))?;

        let icon: JObject = env
            .call_static_method(
                "android/graphics/drawable/Icon",
                "createWithResource",
                "(Landroid/content/Context;I)Landroid/graphics/drawable/Icon;",
                &[JValue::Object(activity), JValue::Int(icon_res)],
            )
            .map_err(|e| jni_err("Icon.createWithResource", e))?
            .l()
            .map_err(|e| jni_err("createWithResource->l", e))?;

        env.call_method(
            &builder,
            "setIcon",
            "(Landroid/graphics/drawable/Icon;)Landroid/content/pm/ShortcutInfo$Builder;",
            &[JValue::Object(&icon)],
        )
        .map_err(|e| jni_err("setIcon", e))?;

        // builder.setIntent(intent)
        env.call_method(
            &builder,
            "setIntent",
            "(Landroid/content/Intent;)Landroid/content/pm/ShortcutInfo$Builder;",
            &[JValue::Object(intent)],
        )
        .map_err(|e| jni_err("setIntent", e))?;

        // builder.build()
        env.call_method(&builder, "build", "()Landroid/content/pm/ShortcutInfo;", &[])
            .map_err(|e| jni_err("ShortcutInfo.build", e))?
            .l()
            .map_err(|e| jni_err("build->l", e))
    }
}
