//! FFI (Foreign Function Interface) module.
//!
//! Two boundaries export the same greeting:
//! - Kotlin/Java (Android) via JNI, see [`android`] (feature `jni`)
//! - C callers (NDK code, tests) via the plain C ABI in [`client`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Android App                           │
//! │  ┌──────────────────────────────┐   ┌─────────────────┐  │
//! │  │ NativeTestActivity (Java)    │   │ NDK C/C++ code  │  │
//! │  │  stringFromJNI()             │   │                 │  │
//! │  └──────────────┬───────────────┘   └────────┬────────┘  │
//! │                 │                            │           │
//! │  ┌──────────────▼───────────────┐   ┌────────▼────────┐  │
//! │  │ JNI layer (android.rs)       │   │ C ABI (client)  │  │
//! │  └──────────────┬───────────────┘   └────────┬────────┘  │
//! │                 └──────────────┬─────────────┘           │
//! │                 ┌──────────────▼───────────────┐         │
//! │                 │ greeter::string_from_native  │         │
//! │                 └──────────────────────────────┘         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage from Java (Android)
//!
//! ```java
//! static {
//!     System.loadLibrary("roboplatform_native");
//! }
//!
//! public native String stringFromJNI();
//! ```
//!
//! # Usage from C
//!
//! ```c
//! char *s = roboplatform_string_from_native();
//! if (s != NULL) {
//!     puts(s);
//!     roboplatform_string_free(s);
//! }
//! ```

mod client;
mod types;

pub use client::*;
pub use types::*;

#[cfg(feature = "jni")]
pub mod android;
