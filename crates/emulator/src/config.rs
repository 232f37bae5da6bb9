//! Emulator configuration.
//!
//! This module defines the knobs an embedding kernel can set. It provides:
//! 1. **Defaults:** The lowest user address and tracing off.
//! 2. **Structure:** [`EmulatorConfig`], deserializable from JSON.
//! 3. **Validation:** Rejection of bounds that cannot hold an aligned access.
//!
//! In-kernel users normally take `EmulatorConfig::default()`; the diagnostics
//! CLI and tests load it from JSON.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the emulator.
mod defaults {
    /// Lowest user-addressable address (64 KiB).
    ///
    /// The first 64 KiB stay unmapped so null-pointer-relative accesses fault.
    pub const USER_START: u64 = crate::common::constants::DEFAULT_USER_START;

    /// Largest access size; the user bound must be aligned to it.
    pub const MAX_ACCESS: u64 = 8;
}

/// Emulator settings.
///
/// # Examples
///
/// ```
/// use fpemu_core::config::EmulatorConfig;
///
/// let config = EmulatorConfig::from_json(r#"{ "trace": true }"#).unwrap();
/// assert!(config.trace);
/// assert_eq!(config.user_start, 0x1_0000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmulatorConfig {
    /// Lowest user-addressable address; memory operands below it fault.
    #[serde(default = "EmulatorConfig::default_user_start")]
    pub user_start: u64,

    /// Emit a `trace!` event for every floating-point register access.
    #[serde(default)]
    pub trace: bool,
}

impl EmulatorConfig {
    fn default_user_start() -> u64 {
        defaults::USER_START
    }

    /// Parses and validates a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::UnalignedUserStart`] if the bound is not 8-byte aligned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that deserialization alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnalignedUserStart`] if `user_start` is not a
    /// multiple of the largest access size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_start % defaults::MAX_ACCESS != 0 {
            return Err(ConfigError::UnalignedUserStart(self.user_start));
        }
        Ok(())
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            user_start: defaults::USER_START,
            trace: false,
        }
    }
}
