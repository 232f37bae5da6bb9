//! Operand Width and Access Direction Types.
//!
//! This module defines the small tagged types shared by the register file, the
//! address validator, and the dispatch engine:
//! 1. **Width:** Every floating-point register access names its precision.
//! 2. **Direction:** Every emulated memory access is either a load or a store.

use std::fmt;

/// Precision of a floating-point operand.
///
/// Register slots are always 64 bits wide; the width selects how the slot is
/// interpreted on each access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// IEEE 754 binary32, held in the low 32 bits of a slot.
    Single,
    /// IEEE 754 binary64, held verbatim in a slot.
    Double,
}

impl Width {
    /// Returns the access size in bytes (4 or 8).
    #[inline]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Returns the assembler suffix (`s` or `d`).
    #[inline]
    pub const fn suffix(self) -> char {
        match self {
            Self::Single => 's',
            Self::Double => 'd',
        }
    }

    /// Returns the other precision.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Single,
        }
    }
}

/// Direction of an emulated memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Memory is read into a floating-point register.
    Load,
    /// A floating-point register is written to memory.
    Store,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Store => write!(f, "store"),
        }
    }
}
