//! Trap-time floating-point emulation.
//!
//! This crate emulates floating-point instructions for a kernel whose harts
//! lack (or have disabled) a hardware floating-point unit:
//! 1. **ISA:** Field extraction, the static decode table, and disassembly.
//! 2. **Architecture:** The width-aware register file, trap frame, and transcoders.
//! 3. **FPU:** A bit-pattern facade over the `softfp` IEEE 754 library.
//! 4. **Memory:** Address validation and user memory back ends.
//! 5. **Emulation:** Dispatch, lifecycle control, and the [`Emulator`] entry point.
//!
//! # Example
//!
//! ```ignore
//! let mut emu = Emulator::new(EmulatorConfig::default(), platform, memory, faults);
//! match emu.emulate(&mut regs, &mut tf) {
//!     Ok(()) => tf.epc += 4,
//!     Err(EmulateError::Unrecognized(_)) => raise_illegal_instruction(&mut tf),
//!     Err(EmulateError::Fault(_)) => {} // handler already ran
//! }
//! ```

/// Register file, trap frame, and transcoders.
pub mod arch;
/// Common types and constants (widths, directions, errors).
pub mod common;
/// Emulator configuration.
pub mod config;
/// Dispatch engine, lifecycle controller, and emulator entry point.
pub mod emu;
/// IEEE 754 facade and numeric environment.
pub mod fpu;
/// Instruction set (opcodes, decode table, instruction fields, disassembly).
pub mod isa;
/// Address validation and user memory access.
pub mod mem;
/// Privileged-register and fault-handler collaborator traits.
pub mod platform;

/// Width-aware floating-point register file.
pub use crate::arch::{FloatRegisterFile, TrapFrame};
/// Error returned by [`Emulator::emulate`].
pub use crate::common::error::EmulateError;
/// Emulator settings; use `EmulatorConfig::default()` or load from JSON.
pub use crate::config::EmulatorConfig;
/// Main emulator type.
pub use crate::emu::Emulator;
/// Collaborator traits.
pub use crate::platform::{FaultHandler, Privileged};
