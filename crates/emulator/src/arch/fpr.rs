//! Floating-Point Register File.
//!
//! This module implements the software copy of the floating-point state. It
//! performs the following:
//! 1. **Storage:** 32 canonical 64-bit slots plus the status word `fsr`.
//! 2. **Width-Aware Access:** Every read and write names its precision;
//!    single-precision writes go through the bound [`Transcode`].
//! 3. **Status Word:** Rounding-mode lookup and exception-flag accrual.
//! 4. **Tracing:** Optional per-access `trace!` events.
//!
//! A slot holds either a double's bit pattern verbatim, or a single's bit
//! pattern recoverable by the transcoder's `narrow`. The upper half of a
//! single slot is never interpreted numerically.

use tracing::trace;

use super::transcode::{self, Transcode};
use crate::common::constants::{FSR_FLAGS_MASK, FSR_RM_MASK, FSR_RM_SHIFT, NUM_FPRS};
use crate::common::data::Width;
use crate::fpu::exception_flags::FpFlags;

/// Floating-Point Register file.
///
/// One instance per execution context, persisted across traps and passed by
/// exclusive reference into the emulator.
#[derive(Clone, Debug)]
pub struct FloatRegisterFile {
    fpr: [u64; NUM_FPRS],
    fsr: u32,
    transcoder: Option<&'static dyn Transcode>,
    trace: bool,
}

impl Default for FloatRegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatRegisterFile {
    /// Creates a register file with every slot and the status word zeroed.
    ///
    /// No transcoder is bound until the context is first entered; until then
    /// single-precision accesses use the soft transcoder.
    pub const fn new() -> Self {
        Self {
            fpr: [0; NUM_FPRS],
            fsr: 0,
            transcoder: None,
            trace: false,
        }
    }

    /// Creates a register file from saved slots and status word.
    pub const fn from_parts(fpr: [u64; NUM_FPRS], fsr: u32) -> Self {
        Self {
            fpr,
            fsr,
            transcoder: None,
            trace: false,
        }
    }

    /// Enables or disables per-access trace events.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Binds the transcoder if none has been bound yet.
    ///
    /// # Returns
    ///
    /// `true` if this call performed the binding.
    pub fn bind_transcoder(&mut self, transcoder: &'static dyn Transcode) -> bool {
        if self.transcoder.is_some() {
            return false;
        }
        self.transcoder = Some(transcoder);
        true
    }

    /// Returns true once a transcoder has been bound.
    pub const fn is_bound(&self) -> bool {
        self.transcoder.is_some()
    }

    fn transcoder(&self) -> &'static dyn Transcode {
        match self.transcoder {
            Some(t) => t,
            None => &transcode::SOFT,
        }
    }

    /// Reads register `idx` at the given width.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `width` - Access precision.
    ///
    /// # Returns
    ///
    /// The full slot for `Double`; the 32-bit single pattern, zero-extended,
    /// for `Single`.
    pub fn read(&self, idx: usize, width: Width) -> u64 {
        let slot = self.fpr[idx];
        let value = match width {
            Width::Double => slot,
            Width::Single => u64::from(self.transcoder().transcode_narrow(slot)),
        };
        if self.trace {
            trace!("fpr{}[{idx}] => {value:#x}", width.suffix());
        }
        value
    }

    /// Writes register `idx` at the given width.
    ///
    /// For `Single`, the low 32 bits of `value` are transcoded into the slot.
    pub fn write(&mut self, idx: usize, width: Width, value: u64) {
        let slot = match width {
            Width::Double => value,
            Width::Single => self.transcoder().transcode_widen(value as u32),
        };
        if self.trace {
            trace!("fpr{}[{idx}] <= {value:#x}", width.suffix());
        }
        self.fpr[idx] = slot;
    }

    /// Returns the raw slots.
    pub const fn slots(&self) -> &[u64; NUM_FPRS] {
        &self.fpr
    }

    /// Returns the raw slots for bulk synchronization with hardware.
    pub const fn slots_mut(&mut self) -> &mut [u64; NUM_FPRS] {
        &mut self.fpr
    }

    /// Returns the status word.
    pub const fn fsr(&self) -> u32 {
        self.fsr
    }

    /// Replaces the status word.
    pub fn set_fsr(&mut self, fsr: u32) {
        self.fsr = fsr;
    }

    /// Returns the dynamic rounding-mode field (`fsr[7:5]`).
    pub const fn dynamic_rm(&self) -> u8 {
        ((self.fsr >> FSR_RM_SHIFT) & FSR_RM_MASK) as u8
    }

    /// Returns the accrued exception flags (`fsr[4:0]`).
    pub const fn flags(&self) -> FpFlags {
        FpFlags::from_bits((self.fsr & FSR_FLAGS_MASK) as u8)
    }

    /// ORs `raised` into the accrued flags.
    pub fn accrue(&mut self, raised: FpFlags) {
        self.fsr |= u32::from(raised.bits());
    }
}
