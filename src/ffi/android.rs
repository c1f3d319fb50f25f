//! Android platform bindings via JNI (Java Native Interface).
//!
//! This module provides JNI-compatible functions that can be called directly
//! from Java/Kotlin on Android.
//!
//! # Package Name
//! The JNI functions are named for package: `com.dayani.m.roboplatform`
//! Class: `NativeTestActivity`

use std::ffi::c_void;

use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use tracing::error;

use crate::{greeter, logging, Result};

/// Wrap Rust text in a new local Java string.
fn new_java_string<'local>(env: &mut JNIEnv<'local>, s: &str) -> Result<JString<'local>> {
    Ok(env.new_string(s)?)
}

/// Called by the VM when `System.loadLibrary` loads this library.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init_default();
    JNI_VERSION_1_6
}

/// `public native String stringFromJNI();`
///
/// The receiver is unused and may be null. Returns null only when the VM
/// cannot allocate the string; the VM's `OutOfMemoryError` stays pending for
/// the caller.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_dayani_m_roboplatform_NativeTestActivity_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    match new_java_string(&mut env, &greeter::string_from_native()) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("stringFromJNI: {}", e);
            std::ptr::null_mut()
        }
    }
}
