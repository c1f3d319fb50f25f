//! RoboPlatform native library
//!
//! Loaded by `NativeTestActivity` through `System.loadLibrary`. The JNI
//! exports live in [`ffi`]; a plain C ABI with explicit string ownership is
//! exported next to them for NDK and test callers.

pub mod config;
pub mod error;
pub mod ffi;
pub mod greeter;
pub mod logging;

// Re-export main types
pub use config::LogConfig;
pub use error::{Error, Result};
pub use greeter::string_from_native;

/// Text returned by `stringFromJNI`.
pub const GREETING: &str = "Hello from C++";

/// Library version, exposed over the C ABI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
