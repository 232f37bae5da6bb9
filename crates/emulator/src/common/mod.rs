//! Common types and constants used throughout the emulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Status-word layout, enable bit, IEEE 754 sign and identity patterns.
//! 2. **Data Types:** Operand width and memory access direction.
//! 3. **Error Handling:** Decode/access error taxonomy and configuration errors.

/// Architectural constants (status word, IEEE 754 patterns, address bounds).
pub mod constants;

/// Operand width and memory access direction definitions.
pub mod data;

/// Error types for emulation and configuration.
pub mod error;

pub use data::{Direction, Width};
pub use error::{AccessFault, ConfigError, EmulateError, FaultKind};
