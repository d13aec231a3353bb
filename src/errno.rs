// CLASSIFICATION: COMMUNITY
// Filename: errno.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Accessors for the calling thread's OS error channel (`errno`).
//!
//! The bridge never reads or writes `errno` itself; these helpers let callers
//! inspect it right after a failed call, and let test doubles set it the way
//! the kernel would.

use std::io;

use libc::c_int;

#[cfg(any(
    target_os = "linux",
    target_os = "emscripten",
    target_os = "fuchsia"
))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno_location()
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno()
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__error()
}

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
unsafe fn errno_location() -> *mut c_int {
    libc::___errno()
}

/// Current value of `errno` on this thread.
pub fn last_error() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Overwrite `errno` on this thread.
pub fn set_last_error(code: i32) {
    // SAFETY: the location is thread-local and valid for the thread's lifetime.
    unsafe { *errno_location() = code as c_int };
}

/// Reset `errno` to zero on this thread.
pub fn clear_last_error() {
    set_last_error(0);
}
