// CLASSIFICATION: COMMUNITY
// Filename: bridge_libc.rs v0.1
// Date Modified: 2026-10-17
// Author: Cohesix Codex

//! Calls through the real C runtime. Only descriptors that are guaranteed
//! invalid or harmless are used, so no I2C hardware is needed.

use std::io::ErrorKind;

use i2c_ioctl_bridge::errno::{clear_last_error, last_error};
use i2c_ioctl_bridge::{ioctl, BindError, BindStrategy, BridgeConfig, SyscallBridge};

const I2C_SLAVE: libc::c_ulong = 0x0703;

#[test]
fn linked_call_reports_bad_descriptor() {
    let _ = env_logger::builder().is_test(true).try_init();
    clear_last_error();
    let ret = unsafe { ioctl(-1, I2C_SLAVE, 0x50) };
    assert_eq!(ret, -1);
    assert_eq!(last_error(), libc::EBADF);
}

#[test]
fn global_bridge_is_link_time() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bridge = SyscallBridge::global().unwrap();
    let again = SyscallBridge::global().unwrap();
    assert_eq!(unsafe { bridge.invoke(-1, I2C_SLAVE, 0) }, -1);
    assert_eq!(last_error(), libc::EBADF);
    assert_eq!(unsafe { again.invoke(-1, I2C_SLAVE, 0) }, -1);
}

#[test]
fn dynamic_bridge_matches_linked() {
    let _ = env_logger::builder().is_test(true).try_init();
    let cfg = BridgeConfig::dynamic();
    assert_eq!(cfg.strategy, BindStrategy::Dynamic);
    let bridge = SyscallBridge::bind(&cfg).unwrap();

    let err = unsafe { bridge.invoke_checked(-1, I2C_SLAVE, 0x50) }.unwrap_err();
    assert_eq!(err.raw_os_error(), Some(libc::EBADF));
}

#[test]
fn regular_file_rejects_i2c_request() {
    let _ = env_logger::builder().is_test(true).try_init();
    let file = scratch_file();
    let ret = unsafe { SyscallBridge::linked().invoke_on(&file, I2C_SLAVE, 0x50) };
    assert_eq!(ret, -1);
    // Not a character device: ENOTTY on Linux, EINVAL on some BSDs.
    let code = last_error();
    assert!(code == libc::ENOTTY || code == libc::EINVAL, "errno {}", code);
}

#[test]
fn unknown_library_fails_to_bind() {
    let _ = env_logger::builder().is_test(true).try_init();
    let cfg = BridgeConfig::default().with_library("libno-such-runtime.so.42");
    match SyscallBridge::bind(&cfg) {
        Err(BindError::Library { library, reason }) => {
            assert_eq!(library, "libno-such-runtime.so.42");
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn checked_error_kind_for_bad_descriptor() {
    let err = unsafe { SyscallBridge::linked().invoke_checked(-1, I2C_SLAVE, 0) }.unwrap_err();
    assert_ne!(err.kind(), ErrorKind::Interrupted);
    assert_eq!(err.raw_os_error(), Some(libc::EBADF));
}

fn scratch_file() -> std::fs::File {
    let path = std::env::temp_dir().join(format!("i2c-bridge-{}", std::process::id()));
    let file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .unwrap();
    let _ = std::fs::remove_file(&path);
    file
}
