//! FFI types for C interoperability.
//!
//! These types are designed to be safe across the C ABI boundary.

use std::ffi::c_int;

use crate::Error;

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeResult {
    /// Operation succeeded.
    Ok = 0,
    /// Invalid parameter (null pointer, bad UTF-8, bad config).
    InvalidParam = -1,
    /// Caller buffer cannot hold the result.
    BufferTooSmall = -2,
    /// Internal error.
    InternalError = -99,
}

impl NativeResult {
    /// Convert a raw return code back into a result, if it is one.
    pub fn from_code(code: c_int) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            -1 => Some(Self::InvalidParam),
            -2 => Some(Self::BufferTooSmall),
            -99 => Some(Self::InternalError),
            _ => None,
        }
    }
}

impl From<NativeResult> for c_int {
    fn from(r: NativeResult) -> Self {
        r as c_int
    }
}

impl From<&Error> for NativeResult {
    fn from(err: &Error) -> Self {
        if err.is_caller_error() {
            NativeResult::InvalidParam
        } else {
            NativeResult::InternalError
        }
    }
}
