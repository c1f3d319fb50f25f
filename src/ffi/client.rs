//! C ABI exports.
//!
//! Ownership rules:
//! - `roboplatform_string_from_native` allocates; the caller releases the
//!   string with `roboplatform_string_free` and nothing else.
//! - `roboplatform_copy_greeting` writes into memory the caller owns.
//! - `roboplatform_version` returns static memory that must not be freed.

use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;

use tracing::{error, warn};

use super::types::NativeResult;
use crate::greeter::greeting_cstring;
use crate::{logging, LogConfig, Result};

/// Get the greeting as a newly allocated C string.
///
/// # Returns
/// Owned NUL-terminated UTF-8 string, or null if it could not be built.
/// Release it with `roboplatform_string_free`.
#[no_mangle]
pub extern "C" fn roboplatform_string_from_native() -> *mut c_char {
    match greeting_cstring() {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("Failed to build greeting: {}", e);
            ptr::null_mut()
        }
    }
}

/// Release a string returned by `roboplatform_string_from_native`.
///
/// # Safety
/// `s` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn roboplatform_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(CString::from_raw(s));
}

/// Copy the greeting into a caller-owned buffer.
///
/// `out_len`, when not null, receives the required size including the NUL
/// terminator. A null `buf` with `buf_len == 0` only queries that size.
///
/// # Returns
/// `NativeResult::Ok`, `BufferTooSmall` (buffer untouched) or `InvalidParam`.
///
/// # Safety
/// `buf` must be null or valid for `buf_len` bytes of writes. `out_len` must
/// be null or valid for one write.
#[no_mangle]
pub unsafe extern "C" fn roboplatform_copy_greeting(
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> c_int {
    let greeting = match greeting_cstring() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build greeting: {}", e);
            return NativeResult::from(&e).into();
        }
    };
    let bytes = greeting.as_bytes_with_nul();

    if !out_len.is_null() {
        *out_len = bytes.len();
    }

    if buf.is_null() {
        return if buf_len == 0 {
            NativeResult::BufferTooSmall.into()
        } else {
            NativeResult::InvalidParam.into()
        };
    }

    if buf_len < bytes.len() {
        return NativeResult::BufferTooSmall.into();
    }

    ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, bytes.len());
    NativeResult::Ok.into()
}

/// Get library version.
///
/// # Returns
/// Version string (null-terminated UTF-8), static; do not free.
#[no_mangle]
pub extern "C" fn roboplatform_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}

/// Install the global logger.
///
/// # Arguments
/// * `config_json` - JSON `LogConfig`, or null for defaults.
///
/// # Returns
/// `NativeResult::Ok` (also when a logger was already installed) or
/// `InvalidParam` for bad UTF-8, JSON or level.
///
/// # Safety
/// `config_json` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn roboplatform_init_logging(config_json: *const c_char) -> c_int {
    let config_str = if config_json.is_null() {
        None
    } else {
        Some(CStr::from_ptr(config_json))
    };

    match init_logging(config_str) {
        Ok(_) => NativeResult::Ok.into(),
        Err(e) => {
            warn!("Logger not installed: {}", e);
            NativeResult::from(&e).into()
        }
    }
}

fn init_logging(config_json: Option<&CStr>) -> Result<bool> {
    let config = match config_json {
        Some(json) => LogConfig::from_json(json.to_str()?)?,
        None => LogConfig::default(),
    };
    logging::init(&config)
}
