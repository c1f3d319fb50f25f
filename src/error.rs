//! Error types for the native library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the native library.
#[derive(Error, Debug)]
pub enum Error {
    /// JNI runtime errors (string allocation, pending exceptions)
    #[error("JNI error: {0}")]
    Jni(String),

    /// Text contains a NUL byte and cannot cross the C boundary
    #[error("Interior NUL byte: {0}")]
    InteriorNul(#[from] std::ffi::NulError),

    /// C input was not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error was caused by bad caller input rather than the runtime.
    ///
    /// `InteriorNul` only comes from library-owned text, so it is internal.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidUtf8(_) | Self::Config(_))
    }
}

#[cfg(feature = "jni")]
impl From<jni::errors::Error> for Error {
    fn from(err: jni::errors::Error) -> Self {
        Self::Jni(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
