// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-17
// Author: Lukas Bower

//! Raw `ioctl` entry point for Linux `i2c-dev` adapters.
//!
//! A caller opens `/dev/i2c-N`, builds a request code and argument (slave
//! address selection, `i2c_rdwr_ioctl_data`, SMBus payloads) and hands them to
//! [`SyscallBridge::invoke`]. The kernel's return value comes back untouched
//! and, on `-1`, the cause is read from [`errno::last_error`].
//!
//! ```no_run
//! use std::fs::OpenOptions;
//! use i2c_ioctl_bridge::{errno, SyscallBridge};
//!
//! const I2C_SLAVE: libc::c_ulong = 0x0703;
//!
//! let bus = OpenOptions::new().read(true).write(true).open("/dev/i2c-1")?;
//! let bridge = SyscallBridge::global().expect("link-time binding");
//! if unsafe { bridge.invoke_on(&bus, I2C_SLAVE, 0x50) } == -1 {
//!     eprintln!("select failed: errno {}", errno::last_error());
//! }
//! # std::io::Result::Ok(())
//! ```

#[cfg(not(unix))]
compile_error!("i2c-ioctl-bridge requires a Unix host with an ioctl entry point");

/// ABI shims and the link-time `ioctl` declaration.
pub mod ffi;

/// Thread-local OS error channel.
pub mod errno;

/// Binding configuration.
pub mod config;

/// Binding failures.
pub mod error;

/// Process-global, one-time entry point resolution.
pub mod binding;

/// The bridge itself.
pub mod bridge;

pub use binding::BindingCell;
pub use bridge::{ioctl, SyscallBridge};
pub use config::{BindStrategy, BridgeConfig};
pub use error::{BindError, BindResult};
pub use ffi::{Arg, IoctlFn, RawFd, Request};
