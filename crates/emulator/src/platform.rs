//! Platform Collaborators.
//!
//! The emulator reaches outside itself through two traits:
//! 1. **Privileged:** Status-register access and bulk FPU state transfer.
//! 2. **FaultHandler:** The kernel's misaligned-access and address-fault paths.

use crate::arch::TrapFrame;
use crate::arch::transcode::{self, Transcode};
use crate::common::constants::NUM_FPRS;
use crate::common::data::Direction;
use crate::common::error::{AccessFault, FaultKind};

/// Privileged register access on the emulating hart.
pub trait Privileged {
    /// Returns true if a hardware floating-point unit is present.
    fn has_fpu(&self) -> bool;

    /// Reads the privileged status register.
    fn read_status(&self) -> u64;

    /// Writes the privileged status register.
    fn write_status(&mut self, value: u64);

    /// Copies the unit's registers into `fpr` and returns its status word.
    fn save_fp_state(&mut self, fpr: &mut [u64; NUM_FPRS]) -> u32;

    /// Loads the unit's registers from `fpr` and its status word from `fsr`.
    fn restore_fp_state(&mut self, fpr: &[u64; NUM_FPRS], fsr: u32);

    /// Returns the transcoder to bind for contexts on this hart.
    fn transcoder(&self) -> &'static dyn Transcode {
        transcode::select(self.has_fpu())
    }
}

/// Kernel handlers for rejected memory operands.
///
/// Each method receives the trap frame and the rejected address. The
/// emulator returns immediately after the call; the handler decides how the
/// program continues.
pub trait FaultHandler {
    /// Handles a misaligned floating-point load.
    fn on_misaligned_load(&mut self, tf: &mut TrapFrame, addr: u64);

    /// Handles a misaligned floating-point store.
    fn on_misaligned_store(&mut self, tf: &mut TrapFrame, addr: u64);

    /// Handles a floating-point load outside the user address space.
    fn on_fault_load(&mut self, tf: &mut TrapFrame, addr: u64);

    /// Handles a floating-point store outside the user address space.
    fn on_fault_store(&mut self, tf: &mut TrapFrame, addr: u64);
}

impl AccessFault {
    /// Invokes the handler method matching this fault's direction and kind.
    pub fn report<H: FaultHandler + ?Sized>(&self, handler: &mut H, tf: &mut TrapFrame) {
        match (self.direction, self.kind) {
            (Direction::Load, FaultKind::Misaligned) => handler.on_misaligned_load(tf, self.addr),
            (Direction::Store, FaultKind::Misaligned) => {
                handler.on_misaligned_store(tf, self.addr);
            }
            (Direction::Load, FaultKind::OutOfRange) => handler.on_fault_load(tf, self.addr),
            (Direction::Store, FaultKind::OutOfRange) => handler.on_fault_store(tf, self.addr),
        }
    }
}
