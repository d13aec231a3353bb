// CLASSIFICATION: COMMUNITY
// Filename: bridge.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! The syscall bridge: one call into the host `ioctl`.
//!
//! The bridge forwards `(fd, request, arg)` unchanged and hands back the raw
//! return value. It does not allocate, copy, retry, log, or look at `errno`;
//! after a `-1` the caller reads the cause from [`crate::errno::last_error`].

use std::fmt;
use std::io;
use std::os::unix::io::AsRawFd;

use libc::c_int;

use crate::binding::{self, GLOBAL};
use crate::config::BridgeConfig;
use crate::error::BindResult;
use crate::ffi::{self, Arg, IoctlFn, RawFd, Request, VariadicIoctlFn};

#[derive(Clone, Copy)]
enum Entry {
    Fixed(IoctlFn),
    Variadic(VariadicIoctlFn),
}

/// Handle to a resolved `ioctl` entry point.
///
/// Stateless and `Copy`; any number of threads may invoke the same bridge
/// concurrently.
#[derive(Clone, Copy)]
pub struct SyscallBridge {
    entry: Entry,
}

impl fmt::Debug for SyscallBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.entry {
            Entry::Fixed(_) => "fixed",
            Entry::Variadic(_) => "variadic",
        };
        f.debug_struct("SyscallBridge").field("entry", &kind).finish()
    }
}

impl SyscallBridge {
    /// Bridge over the C runtime symbol bound at link time.
    pub const fn linked() -> Self {
        Self::from_variadic(ffi::linked_entry())
    }

    /// Bridge over an arbitrary entry point with the `ioctl` ABI, e.g. a
    /// test double standing in for the kernel.
    pub const fn from_entry(entry: IoctlFn) -> Self {
        Self {
            entry: Entry::Fixed(entry),
        }
    }

    /// Bridge over a variadic entry point, e.g. one resolved through a
    /// loader other than [`bind`](Self::bind). Calls use the variadic
    /// convention exactly as they do for the C runtime symbol.
    pub const fn from_variadic(entry: VariadicIoctlFn) -> Self {
        Self {
            entry: Entry::Variadic(entry),
        }
    }

    /// Resolve a bridge per `config`. Not cached.
    pub fn bind(config: &BridgeConfig) -> BindResult<Self> {
        binding::resolve(config)
    }

    /// Process-wide bridge.
    ///
    /// If nothing bound the process-wide cell yet, it is bound at link time
    /// and this cannot fail. If [`global_with`](Self::global_with) ran first,
    /// its outcome is returned instead.
    pub fn global() -> BindResult<Self> {
        GLOBAL.get_or_bind(&BridgeConfig::default())
    }

    /// Process-wide bridge, binding the cell with `config` if this is the
    /// first use. The first config to reach the cell wins; later callers get
    /// its outcome, success or failure.
    pub fn global_with(config: &BridgeConfig) -> BindResult<Self> {
        GLOBAL.get_or_bind(config)
    }

    /// Issue `ioctl(fd, request, arg)` and return the kernel's result.
    ///
    /// `>= 0` is success (some requests return a count). `-1` is failure,
    /// with the cause left in `errno`.
    ///
    /// # Safety
    ///
    /// `request` must be valid for the device behind `fd`. If `arg` is an
    /// address, it must point to memory laid out as the request expects and
    /// stay valid, and unaliased where the kernel writes, until the call
    /// returns.
    #[inline]
    pub unsafe fn invoke(&self, fd: RawFd, request: Request, arg: Arg) -> c_int {
        match self.entry {
            Entry::Fixed(f) => f(fd, request, arg),
            Entry::Variadic(f) => f(fd, request, arg),
        }
    }

    /// Like [`invoke`](Self::invoke), turning `-1` into the OS error.
    ///
    /// The error code is taken verbatim from `errno`; an interrupted call
    /// comes back as `ErrorKind::Interrupted` and is not resumed.
    ///
    /// # Safety
    ///
    /// Same contract as [`invoke`](Self::invoke).
    pub unsafe fn invoke_checked(&self, fd: RawFd, request: Request, arg: Arg) -> io::Result<c_int> {
        let ret = self.invoke(fd, request, arg);
        if ret == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(ret)
        }
    }

    /// Invoke on the descriptor of an owning handle such as a `File`.
    ///
    /// The handle keeps ownership; the descriptor is only borrowed for the
    /// call.
    ///
    /// # Safety
    ///
    /// Same contract as [`invoke`](Self::invoke).
    pub unsafe fn invoke_on<F: AsRawFd + ?Sized>(
        &self,
        handle: &F,
        request: Request,
        arg: Arg,
    ) -> c_int {
        self.invoke(handle.as_raw_fd(), request, arg)
    }
}

/// `ioctl(fd, request, arg)` through the link-time binding.
///
/// # Safety
///
/// See [`SyscallBridge::invoke`].
#[inline]
pub unsafe fn ioctl(fd: RawFd, request: Request, arg: Arg) -> c_int {
    SyscallBridge::linked().invoke(fd, request, arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errno::{clear_last_error, last_error, set_last_error};

    unsafe extern "C" fn echo_arg(_fd: RawFd, _request: Request, arg: Arg) -> c_int {
        arg as c_int
    }

    unsafe extern "C" fn busy(_fd: RawFd, _request: Request, _arg: Arg) -> c_int {
        set_last_error(libc::EBUSY);
        -1
    }

    #[test]
    fn fixed_entry_is_forwarded() {
        let bridge = SyscallBridge::from_entry(echo_arg);
        assert_eq!(unsafe { bridge.invoke(3, 0x0703, 0x50) }, 0x50);
    }

    #[test]
    fn checked_surfaces_errno() {
        let bridge = SyscallBridge::from_entry(busy);
        let err = unsafe { bridge.invoke_checked(3, 0x0707, 0) }.unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBUSY));
        clear_last_error();
    }

    #[test]
    fn checked_passes_counts_through() {
        let bridge = SyscallBridge::from_entry(echo_arg);
        assert_eq!(unsafe { bridge.invoke_checked(3, 0x0707, 2) }.unwrap(), 2);
    }

    #[test]
    fn linked_bad_descriptor() {
        clear_last_error();
        let ret = unsafe { ioctl(-1, 0x0703, 0x50) };
        assert_eq!(ret, -1);
        assert_eq!(last_error(), libc::EBADF);
    }

    const LINKED: SyscallBridge = SyscallBridge::linked();

    #[test]
    fn linked_is_usable_in_const_context() {
        clear_last_error();
        assert_eq!(unsafe { LINKED.invoke(-1, 0x0703, 0x50) }, -1);
        assert_eq!(last_error(), libc::EBADF);
    }

    #[test]
    fn debug_names_entry_kind() {
        let dbg = format!("{:?}", SyscallBridge::linked());
        assert!(dbg.contains("variadic"));
    }
}
