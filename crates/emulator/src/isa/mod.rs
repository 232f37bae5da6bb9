//! Floating-Point Instruction Set Definitions.
//!
//! Contains the opcode and function-code constants, field extraction, the
//! static decode table, and the disassembler for the emulated floating-point
//! instructions.

/// Instruction decoding against the static encoding table.
pub mod decode;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Field extraction and the decoded instruction record.
pub mod instruction;

/// Operation kinds selected by the decoder.
pub mod op;

/// Opcode, format, and function-code constants.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;
pub use op::Op;
