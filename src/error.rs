// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

use thiserror::Error;

/// Failure to resolve the `ioctl` entry point.
///
/// Kernel-side call failures are not represented here; they come back as a
/// `-1` return with `errno` set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("cannot load C runtime {library}: {reason}")]
    Library { library: String, reason: String },
    #[error("symbol {symbol} not found in {library}: {reason}")]
    Symbol {
        symbol: String,
        library: String,
        reason: String,
    },
}

pub type BindResult<T> = Result<T, BindError>;
