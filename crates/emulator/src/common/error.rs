//! Emulation Error Definitions.
//!
//! This module defines the error taxonomy of the emulator. It provides:
//! 1. **Decode-time signal:** A trapped word that is not a floating-point
//!    instruction this emulator understands.
//! 2. **Access-time faults:** Misaligned or out-of-range effective addresses,
//!    tagged by direction and kind.
//! 3. **Configuration errors:** Failures while parsing an [`EmulatorConfig`](crate::config::EmulatorConfig).
//!
//! Numeric exceptional conditions (NaN, overflow, division by zero) are never
//! errors; they are part of the IEEE 754 result and the accrued flags.

use std::fmt;

use thiserror::Error;

use super::data::Direction;

/// Kind of an access-time fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The effective address is not a multiple of the access size.
    Misaligned,
    /// The effective address lies below the user address space.
    OutOfRange,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misaligned => write!(f, "misaligned"),
            Self::OutOfRange => write!(f, "out-of-range"),
        }
    }
}

/// A rejected effective address.
///
/// Produced by the address validator and reported to the matching
/// [`FaultHandler`](crate::platform::FaultHandler) method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} {direction} at {addr:#x}")]
pub struct AccessFault {
    /// Whether the faulting access was a load or a store.
    pub direction: Direction,
    /// Why the address was rejected.
    pub kind: FaultKind,
    /// The rejected effective address.
    pub addr: u64,
}

/// Reasons an emulation call does not complete normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EmulateError {
    /// The trapped word matches no supported floating-point encoding.
    ///
    /// No state was modified; the caller should take its illegal-instruction
    /// path. The associated value is the instruction word.
    #[error("unrecognized floating-point instruction {0:#010x}")]
    Unrecognized(u32),

    /// A memory operand was rejected and reported to the fault handler.
    ///
    /// No register writeback took place.
    #[error("emulation aborted: {0}")]
    Fault(#[from] AccessFault),
}

/// Errors raised while loading an emulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`EmulatorConfig`](crate::config::EmulatorConfig).
    #[error("invalid emulator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The user address bound cannot hold an aligned access.
    #[error("user_start {0:#x} must be 8-byte aligned")]
    UnalignedUserStart(u64),
}
