// CLASSIFICATION: COMMUNITY
// Filename: binding.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! One-time resolution of the `ioctl` entry point.
//!
//! Link-time binding is the default and never fails. Runtime resolution goes
//! through the dynamic loader and may fail if the C runtime cannot be opened
//! or does not export the symbol; either way the outcome is computed once per
//! [`BindingCell`] and every thread observes the same result.

use libloading::{Library, Symbol};
use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::bridge::SyscallBridge;
use crate::config::{BindStrategy, BridgeConfig};
use crate::error::{BindError, BindResult};
use crate::ffi::VariadicIoctlFn;

const PROCESS_IMAGE: &str = "<process image>";

/// Once-initialised binding, safe to race from many threads.
pub struct BindingCell {
    cell: OnceCell<BindResult<SyscallBridge>>,
}

impl BindingCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Resolve with `config` on first use; later calls return the first
    /// outcome whatever config they pass.
    pub fn get_or_bind(&self, config: &BridgeConfig) -> BindResult<SyscallBridge> {
        self.cell.get_or_init(|| resolve(config)).clone()
    }

    /// Outcome of the first resolution, if it has happened.
    pub fn get(&self) -> Option<BindResult<SyscallBridge>> {
        self.cell.get().cloned()
    }
}

impl Default for BindingCell {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) static GLOBAL: BindingCell = BindingCell::new();

/// Resolve the entry point described by `config`, uncached.
pub fn resolve(config: &BridgeConfig) -> BindResult<SyscallBridge> {
    match config.strategy {
        BindStrategy::Linked => {
            debug!("ioctl bound at link time");
            Ok(SyscallBridge::linked())
        }
        BindStrategy::Dynamic => resolve_dynamic(config),
    }
}

fn resolve_dynamic(config: &BridgeConfig) -> BindResult<SyscallBridge> {
    let (library, label) = match &config.library {
        Some(path) => {
            let label = path.to_string_lossy().into_owned();
            let lib = unsafe { Library::new(path) }.map_err(|e| {
                warn!("C runtime {} not loadable: {}", label, e);
                BindError::Library {
                    library: label.clone(),
                    reason: e.to_string(),
                }
            })?;
            (lib, label)
        }
        None => (
            Library::from(libloading::os::unix::Library::this()),
            PROCESS_IMAGE.to_string(),
        ),
    };

    let entry: VariadicIoctlFn = unsafe {
        let sym: Symbol<VariadicIoctlFn> =
            library.get(config.symbol.as_bytes()).map_err(|e| {
                warn!("symbol {} missing from {}: {}", config.symbol, label, e);
                BindError::Symbol {
                    symbol: config.symbol.clone(),
                    library: label.clone(),
                    reason: e.to_string(),
                }
            })?;
        *sym
    };

    // The entry pointer must outlive every bridge copy; the library stays
    // mapped until the process exits.
    std::mem::forget(library);
    debug!("{} resolved from {}", config.symbol, label);
    Ok(SyscallBridge::from_variadic(entry))
}
