//! Drives the exported C ABI the way an NDK caller would.

use std::ffi::{c_char, CStr};
use std::ptr;
use std::thread;

use roboplatform_native::ffi::{
    roboplatform_copy_greeting, roboplatform_string_free, roboplatform_string_from_native,
    NativeResult,
};
use roboplatform_native::GREETING;

fn owned_greeting() -> String {
    let raw = roboplatform_string_from_native();
    assert!(!raw.is_null());
    let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_owned();
    unsafe { roboplatform_string_free(raw) };
    text
}

#[test]
fn single_call_returns_greeting() {
    assert_eq!(owned_greeting(), "Hello from C++");
}

#[test]
fn concurrent_calls_agree() {
    let handles: Vec<_> = (0..1000).map(|_| thread::spawn(owned_greeting)).collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), GREETING);
    }
}

#[test]
fn each_call_allocates_a_fresh_string() {
    let a = roboplatform_string_from_native();
    let b = roboplatform_string_from_native();
    assert_ne!(a, b);
    unsafe {
        assert_eq!(CStr::from_ptr(a), CStr::from_ptr(b));
        roboplatform_string_free(a);
        roboplatform_string_free(b);
    }
}

#[test]
fn free_null_is_noop() {
    unsafe { roboplatform_string_free(ptr::null_mut()) };
}

#[test]
fn size_query_reports_required_length() {
    let mut len = 0usize;
    let code = unsafe { roboplatform_copy_greeting(ptr::null_mut(), 0, &mut len) };
    assert_eq!(code, NativeResult::BufferTooSmall as i32);
    assert_eq!(len, GREETING.len() + 1);
}

#[test]
fn null_buffer_with_length_is_invalid() {
    let code = unsafe { roboplatform_copy_greeting(ptr::null_mut(), 64, ptr::null_mut()) };
    assert_eq!(code, NativeResult::InvalidParam as i32);
}

#[test]
fn short_buffer_is_left_untouched() {
    // Room for the text but not the terminator.
    let mut buf = [b'x' as c_char; 14];
    let mut len = 0usize;
    let code = unsafe { roboplatform_copy_greeting(buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(code, NativeResult::BufferTooSmall as i32);
    assert_eq!(len, 15);
    assert!(buf.iter().all(|&c| c == b'x' as c_char));
}

#[test]
fn exact_buffer_is_filled() {
    let mut buf = [0 as c_char; 15];
    let code = unsafe { roboplatform_copy_greeting(buf.as_mut_ptr(), buf.len(), ptr::null_mut()) };
    assert_eq!(code, NativeResult::Ok as i32);
    let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
    assert_eq!(text.to_bytes(), b"Hello from C++");
}
