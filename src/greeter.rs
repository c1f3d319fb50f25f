//! The greeting handed to `NativeTestActivity`.

use std::ffi::CString;

use crate::{Result, GREETING};

/// Return the greeting as an owned string.
///
/// Pure and stateless, safe to call from any thread.
pub fn string_from_native() -> String {
    GREETING.to_owned()
}

/// Return the greeting as an owned C string for the C ABI.
pub(crate) fn greeting_cstring() -> Result<CString> {
    Ok(CString::new(GREETING)?)
}
