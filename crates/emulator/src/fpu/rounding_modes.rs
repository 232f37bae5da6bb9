//! Floating-point rounding mode support.
//!
//! Five rounding modes are defined for the 3-bit `rm` field:
//!
//! | Value | Mode | Description                          |
//! |-------|------|--------------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even       |
//! | 0b001 | RTZ  | Round towards Zero                   |
//! | 0b010 | RDN  | Round Down (towards −∞)              |
//! | 0b011 | RUP  | Round Up (towards +∞)                |
//! | 0b100 | RMM  | Round to Nearest, ties to Max Magnitude |
//!
//! `0b111` in an instruction selects the mode held in the status word;
//! `0b101` and `0b110` are reserved.

use std::fmt;

use crate::common::constants::{FSR_RM_MASK, FSR_RM_SHIFT, RM_DYNAMIC};

/// IEEE 754 rounding mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards −∞).
    Rdn = 0b010,
    /// Round Up (towards +∞).
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    Rmm = 0b100,
}

impl RoundingMode {
    /// Decodes a 3-bit rounding mode field from an instruction or the status word.
    ///
    /// Returns `None` for reserved encodings (0b101, 0b110) and the dynamic
    /// sentinel (0b111), which must be resolved by [`resolve`](Self::resolve).
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            0b100 => Some(Self::Rmm),
            _ => None,
        }
    }

    /// Resolves an instruction's `rm` field to the effective rounding mode.
    ///
    /// # Arguments
    ///
    /// * `field` - The instruction's 3-bit rounding-mode field.
    /// * `fsr`   - The floating-point status word at call time.
    ///
    /// # Returns
    ///
    /// The instruction's own mode, or the status word's mode when `field` is
    /// the dynamic sentinel. A reserved status-word mode clamps to
    /// [`Rmm`](Self::Rmm). `None` if a static field is reserved.
    pub const fn resolve(field: u8, fsr: u32) -> Option<Self> {
        if field & 0x7 == RM_DYNAMIC {
            let bits = ((fsr >> FSR_RM_SHIFT) & FSR_RM_MASK) as u8;
            if bits > Self::Rmm as u8 {
                Some(Self::Rmm)
            } else {
                Self::from_bits(bits)
            }
        } else {
            Self::from_bits(field)
        }
    }

    /// Returns the lowercase assembler mnemonic (`rne`, `rtz`, ...).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Rne => "rne",
            Self::Rtz => "rtz",
            Self::Rdn => "rdn",
            Self::Rup => "rup",
            Self::Rmm => "rmm",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
