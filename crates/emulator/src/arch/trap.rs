//! Trap Frame.
//!
//! The register snapshot the trap subsystem hands to the emulator. The
//! emulator reads source operands from `gpr`, writes integer results back to
//! it, and may set the FP-enable bit in `sr`.

use serde::{Deserialize, Serialize};

use crate::common::constants::NUM_GPRS;

/// Saved user state at the point of a floating-point trap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapFrame {
    /// General-purpose registers `x0`-`x31`.
    pub gpr: [u64; NUM_GPRS],
    /// Saved status register.
    pub sr: u64,
    /// Faulting program counter.
    pub epc: u64,
    /// Rejected address of the last faulting memory operand.
    #[serde(default)]
    pub badvaddr: u64,
    /// The trapped instruction word.
    pub insn: u32,
}

impl TrapFrame {
    /// Creates a zeroed frame for the given instruction.
    pub fn new(insn: u32) -> Self {
        Self {
            insn,
            ..Self::default()
        }
    }

    /// Reads a general-purpose register. `x0` always reads 0.
    #[inline]
    pub fn read_gpr(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.gpr[idx] }
    }

    /// Writes a general-purpose register. Writes to `x0` are discarded.
    #[inline]
    pub fn write_gpr(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.gpr[idx] = val;
        }
    }
}
