//! Architectural state touched by the emulator.
//!
//! 1. **FPRs:** The software floating-point register file and status word.
//! 2. **Traps:** The trap frame handed over by the trap subsystem.
//! 3. **Transcoding:** Single/double width conversion for register slots.

/// Floating-Point Register file implementation.
pub mod fpr;

/// Trap frame definition.
pub mod trap;

/// Width conversion between single patterns and 64-bit slots.
pub mod transcode;

pub use fpr::FloatRegisterFile;
pub use trap::TrapFrame;
pub use transcode::{SoftTranscoder, Transcode};
