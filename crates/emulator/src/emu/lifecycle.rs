//! Trap Lifecycle Controller.
//!
//! Brings the floating-point execution context up on entry to an emulation
//! call and synchronizes it back on exit. With a hardware unit present the
//! context moves through three states:
//!
//! 1. **Disabled:** `SR_EF` clear; the unit has never been used.
//! 2. **Enabling:** The first entry sets `SR_EF` and seeds the unit from the
//!    software register file. One-shot.
//! 3. **Active:** Sticky. Each entry loads the register file from the unit and
//!    each exit pushes it back.
//!
//! Without a unit the software register file is the persistent state and only
//! the transcoder is bound.

use tracing::debug;

use crate::arch::{FloatRegisterFile, TrapFrame};
use crate::common::constants::SR_EF;
use crate::platform::Privileged;

/// Floating-point context state as seen from the privileged status register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No hardware unit, or the unit has not been enabled yet.
    Disabled,
    /// This entry enabled the unit.
    Enabling,
    /// The unit was already enabled.
    Active,
}

/// Returns the current state without changing it.
pub fn state<P: Privileged + ?Sized>(platform: &P) -> ContextState {
    if platform.has_fpu() && platform.read_status() & SR_EF != 0 {
        ContextState::Active
    } else {
        ContextState::Disabled
    }
}

/// An entered floating-point context.
///
/// Dropping it without calling [`exit`](Self::exit) skips synchronization,
/// which is what the fault path wants.
#[derive(Debug)]
#[must_use = "an entered context must be exited to synchronize the register file"]
pub struct ActiveContext {
    hardware: bool,
    state: ContextState,
}

impl ActiveContext {
    /// Returns the state this entry left the context in.
    pub const fn state(&self) -> ContextState {
        self.state
    }

    /// Pushes the register file and status word back into the hardware unit.
    pub fn exit<P: Privileged + ?Sized>(self, platform: &mut P, regs: &FloatRegisterFile) {
        if self.hardware {
            platform.restore_fp_state(regs.slots(), regs.fsr());
        }
    }
}

/// Activates the floating-point context for an emulation call.
///
/// # Arguments
///
/// * `platform` - Privileged register access.
/// * `regs` - The context's software register file.
/// * `tf` - The trap frame; its saved status gains `SR_EF` on first enable.
pub fn enter<P: Privileged + ?Sized>(
    platform: &mut P,
    regs: &mut FloatRegisterFile,
    tf: &mut TrapFrame,
) -> ActiveContext {
    let transcoder = platform.transcoder();
    if regs.bind_transcoder(transcoder) {
        debug!(?transcoder, "bound transcoder");
    }

    if !platform.has_fpu() {
        return ActiveContext {
            hardware: false,
            state: ContextState::Disabled,
        };
    }

    let status = platform.read_status();
    let state = if status & SR_EF == 0 {
        platform.write_status(status | SR_EF);
        tf.sr |= SR_EF;
        platform.restore_fp_state(regs.slots(), regs.fsr());
        debug!("enabled floating-point unit");
        ContextState::Enabling
    } else {
        ContextState::Active
    };

    let fsr = platform.save_fp_state(regs.slots_mut());
    regs.set_fsr(fsr);

    ActiveContext {
        hardware: true,
        state,
    }
}
