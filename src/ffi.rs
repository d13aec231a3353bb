// CLASSIFICATION: COMMUNITY
// Filename: ffi.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! ABI shims for the host `ioctl` entry point.
//!
//! The C prototype is `int ioctl(int fd, unsigned long request, ...)`. The
//! request code is as wide as the target's `long` (64 bits on LP64, 32 bits
//! on ILP32) and the trailing argument is passed as a machine word, wide
//! enough to carry a pointer.

use libc::{c_int, c_ulong};

/// Open kernel descriptor naming an I2C adapter, e.g. `/dev/i2c-1`.
pub type RawFd = c_int;

/// Request code, native `long` width on the target ABI.
pub type Request = c_ulong;

/// Third `ioctl` argument: a pointer-sized integer or an address.
pub type Arg = usize;

/// Fixed-arity entry point with the `ioctl` ABI.
///
/// Test doubles and trampolines are declared with this shape; stable Rust
/// cannot define a variadic function.
pub type IoctlFn = unsafe extern "C" fn(RawFd, Request, Arg) -> c_int;

/// The entry point exactly as the C runtime exports it.
pub type VariadicIoctlFn = unsafe extern "C" fn(RawFd, Request, ...) -> c_int;

extern "C" {
    /// Link-time binding to the C runtime's `ioctl`.
    ///
    /// Declared variadic so the call follows the variadic calling convention
    /// on every ABI, not only where fixed and variadic calls coincide.
    #[link_name = "ioctl"]
    pub fn sys_ioctl(fd: RawFd, request: Request, ...) -> c_int;
}

/// Returns the link-time symbol as a variadic function pointer.
pub const fn linked_entry() -> VariadicIoctlFn {
    sys_ioctl
}
