// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! How the bridge finds its `ioctl` entry point.

use std::ffi::OsString;

/// Symbol looked up when resolving at runtime.
pub const DEFAULT_SYMBOL: &str = "ioctl";

/// Where the entry point comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindStrategy {
    /// Symbol resolved by the linker against the C runtime. Cannot fail.
    #[default]
    Linked,
    /// Symbol looked up at first use through the dynamic loader.
    Dynamic,
}

/// Binding configuration for [`crate::SyscallBridge::bind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub strategy: BindStrategy,
    /// Library to open for [`BindStrategy::Dynamic`]. `None` searches the
    /// running process image, which already maps the C runtime.
    pub library: Option<OsString>,
    pub symbol: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            strategy: BindStrategy::Linked,
            library: None,
            symbol: DEFAULT_SYMBOL.into(),
        }
    }
}

impl BridgeConfig {
    /// Runtime resolution from the process image.
    pub fn dynamic() -> Self {
        Self {
            strategy: BindStrategy::Dynamic,
            ..Self::default()
        }
    }

    /// Open `library` instead of searching the process image. Implies
    /// [`BindStrategy::Dynamic`].
    pub fn with_library(mut self, library: impl Into<OsString>) -> Self {
        self.strategy = BindStrategy::Dynamic;
        self.library = Some(library.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }
}
