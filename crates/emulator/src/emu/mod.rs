//! Emulation entry point.
//!
//! This module ties the components together. It provides:
//! 1. **Dispatch:** Operation execution and writeback ([`dispatch`]).
//! 2. **Lifecycle:** Context activation and synchronization ([`lifecycle`]).
//! 3. **Emulator:** The [`Emulator`] that owns the platform collaborators and
//!    runs one trapped instruction per [`Emulator::emulate`] call.

/// Operation execution and writeback.
pub mod dispatch;

/// Floating-point context activation and synchronization.
pub mod lifecycle;

use tracing::{debug, warn};

use crate::arch::{FloatRegisterFile, TrapFrame};
use crate::common::error::EmulateError;
use crate::config::EmulatorConfig;
use crate::fpu::env;
use crate::isa::decode::decode;
use crate::mem::UserMemory;
use crate::platform::{FaultHandler, Privileged};

use self::dispatch::EmulationOutcome;

/// Trap-time floating-point emulator.
///
/// Owns the collaborators it calls out to; the register file and trap frame
/// belong to the execution context and are passed in per call.
#[derive(Debug)]
pub struct Emulator<P, M, F> {
    config: EmulatorConfig,
    platform: P,
    memory: M,
    faults: F,
}

impl<P, M, F> Emulator<P, M, F>
where
    P: Privileged,
    M: UserMemory,
    F: FaultHandler,
{
    /// Creates an emulator.
    ///
    /// # Arguments
    ///
    /// * `config` - Emulator settings.
    /// * `platform` - Privileged register access for this hart.
    /// * `memory` - User memory back end.
    /// * `faults` - Handlers for rejected memory operands.
    pub const fn new(config: EmulatorConfig, platform: P, memory: M, faults: F) -> Self {
        Self {
            config,
            platform,
            memory,
            faults,
        }
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Returns the platform collaborator.
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Returns the user memory back end.
    pub const fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the user memory back end mutably.
    pub const fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns the fault handler.
    pub const fn faults(&self) -> &F {
        &self.faults
    }

    /// Returns the fault handler mutably.
    pub const fn faults_mut(&mut self) -> &mut F {
        &mut self.faults
    }

    /// Consumes the emulator, returning its collaborators.
    pub fn into_parts(self) -> (P, M, F) {
        (self.platform, self.memory, self.faults)
    }

    /// Emulates the instruction recorded in `tf.insn`.
    ///
    /// The sequence is decode, context entry, execute, writeback, flag
    /// accrual, and context exit. On success the caller resumes the program
    /// at the next instruction.
    ///
    /// # Errors
    ///
    /// * [`EmulateError::Unrecognized`] if the word is not a supported
    ///   floating-point instruction or statically selects a reserved rounding
    ///   mode. Such a word causes no side effects at all.
    /// * [`EmulateError::Fault`] if a memory operand was rejected. `tf.badvaddr`
    ///   holds the rejected address and the matching [`FaultHandler`] method
    ///   has already run; no floating-point or integer register was
    ///   written and the context was not synchronized.
    pub fn emulate(
        &mut self,
        regs: &mut FloatRegisterFile,
        tf: &mut TrapFrame,
    ) -> Result<(), EmulateError> {
        let word = tf.insn;
        let insn = decode(word).ok_or(EmulateError::Unrecognized(word))?;
        debug!(epc = format_args!("{:#x}", tf.epc), "emulating {insn}");

        regs.set_trace(self.config.trace);
        let active = lifecycle::enter(&mut self.platform, regs, tf);
        env::clear_flags();

        match dispatch::execute(&insn, regs, tf, &mut self.memory, self.config.user_start) {
            Ok(EmulationOutcome::Unrecognized) => {
                active.exit(&mut self.platform, regs);
                Err(EmulateError::Unrecognized(word))
            }
            Ok(outcome) => {
                dispatch::apply(outcome, regs, tf);
                regs.accrue(env::flags());
                active.exit(&mut self.platform, regs);
                Ok(())
            }
            Err(fault) => {
                warn!(epc = format_args!("{:#x}", tf.epc), "{insn}: {fault}");
                tf.badvaddr = fault.addr;
                fault.report(&mut self.faults, tf);
                Err(fault.into())
            }
        }
    }
}
