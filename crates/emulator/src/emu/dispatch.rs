//! Arithmetic Dispatch Engine.
//!
//! Maps a decoded [`Instruction`] onto the FPU facade, reading operands from
//! the register file and trap frame and producing an [`EmulationOutcome`].
//! Writeback is a separate step ([`apply`]) so a faulting memory operand never
//! leaves a partial result behind.
//!
//! Addition, subtraction, and multiplication are all routed through the fused
//! multiply-add primitive:
//!
//! | op    | computed as              |
//! |-------|--------------------------|
//! | add   | `fma(a, 1.0, b)`         |
//! | sub   | `fma(a, 1.0, -b)`        |
//! | mul   | `fma(a, b, +0)`          |
//! | madd  | `fma(a, b, c)`           |
//! | msub  | `fma(a, b, -c)`          |
//! | nmsub | `-fma(a, b, -c)`         |
//! | nmadd | `-fma(a, b, c)`          |

use crate::arch::{FloatRegisterFile, TrapFrame};
use crate::common::constants::{F32_ONE, F64_ONE};
use crate::common::data::{Direction, Width};
use crate::common::error::AccessFault;
use crate::fpu::Fpu;
use crate::fpu::env;
use crate::fpu::rounding_modes::RoundingMode;
use crate::isa::instruction::Instruction;
use crate::isa::op::{ArithOp, CmpOp, FusedOp, Op};
use crate::mem::validate::{effective, validate};
use crate::mem::UserMemory;

/// Result of executing one instruction, before writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmulationOutcome {
    /// Write `value` to general-purpose register `rd`.
    Integer {
        /// Destination register.
        rd: usize,
        /// Full 64-bit register value.
        value: u64,
    },
    /// Write `value` to floating-point register `rd` at `width`.
    Float {
        /// Destination register.
        rd: usize,
        /// Precision of the result.
        width: Width,
        /// Result bit pattern; single results occupy the low 32 bits.
        value: u64,
    },
    /// A store was performed; nothing to write back.
    MemoryWrite {
        /// The validated address written.
        addr: u64,
        /// Size of the store.
        width: Width,
    },
    /// The instruction selects a reserved rounding mode.
    Unrecognized,
}

const fn one(width: Width) -> u64 {
    match width {
        Width::Single => F32_ONE as u64,
        Width::Double => F64_ONE,
    }
}

/// Executes a decoded instruction.
///
/// The caller owns the exception-flag accumulator around this call. For
/// rounding operations the resolved mode is installed in [`env`] before the
/// library is invoked.
///
/// # Arguments
///
/// * `insn` - The decoded instruction.
/// * `regs` - The floating-point register file supplying float operands.
/// * `tf` - The trap frame supplying integer operands.
/// * `memory` - Back end for loads and stores.
/// * `user_start` - The lowest user-addressable address.
///
/// # Errors
///
/// Returns the [`AccessFault`] for a rejected memory operand. No memory or
/// register state has been modified in that case.
pub fn execute<M: UserMemory + ?Sized>(
    insn: &Instruction,
    regs: &FloatRegisterFile,
    tf: &TrapFrame,
    memory: &mut M,
    user_start: u64,
) -> Result<EmulationOutcome, AccessFault> {
    if insn.op.rounds() {
        match RoundingMode::resolve(insn.rm, regs.fsr()) {
            Some(mode) => env::set_rounding_mode(mode),
            None => return Ok(EmulationOutcome::Unrecognized),
        }
    }

    let rd = insn.rd;
    let float = |width: Width, value: u64| EmulationOutcome::Float { rd, width, value };
    let integer = |value: u64| EmulationOutcome::Integer { rd, value };

    let outcome = match insn.op {
        Op::Load(width) => {
            let addr = effective(tf.read_gpr(insn.rs1), insn.imm);
            let ea = validate(addr, width, Direction::Load, user_start)?;
            let value = match width {
                Width::Single => u64::from(memory.load_u32(ea)),
                Width::Double => memory.load_u64(ea),
            };
            float(width, value)
        }
        Op::Store(width) => {
            let addr = effective(tf.read_gpr(insn.rs1), insn.imm);
            let ea = validate(addr, width, Direction::Store, user_start)?;
            let value = regs.read(insn.rs2, width);
            match width {
                Width::Single => memory.store_u32(ea, value as u32),
                Width::Double => memory.store_u64(ea, value),
            }
            EmulationOutcome::MemoryWrite { addr, width }
        }
        Op::MoveToInt(width) => integer(regs.read(insn.rs1, width)),
        Op::MoveFromInt(width) => float(width, tf.read_gpr(insn.rs1)),
        Op::SignInject(op, width) => {
            let a = regs.read(insn.rs1, width);
            let b = regs.read(insn.rs2, width);
            float(width, Fpu::sign_inject(op, width, a, b))
        }
        Op::Compare(op, width) => {
            let a = regs.read(insn.rs1, width);
            let b = regs.read(insn.rs2, width);
            let hit = match op {
                CmpOp::Eq => Fpu::eq(width, a, b),
                CmpOp::Lt => Fpu::lt(width, a, b),
                CmpOp::Le => Fpu::le(width, a, b),
            };
            integer(u64::from(hit))
        }
        Op::ToInt(format, width) => integer(Fpu::to_int(format, width, regs.read(insn.rs1, width))),
        Op::FromInt(format, width) => float(width, Fpu::from_int(format, width, tf.read_gpr(insn.rs1))),
        Op::Convert(Width::Single) => float(Width::Single, Fpu::narrow(regs.read(insn.rs1, Width::Double))),
        Op::Convert(Width::Double) => float(Width::Double, Fpu::widen(regs.read(insn.rs1, Width::Single))),
        Op::Arith(op, width) => {
            let a = regs.read(insn.rs1, width);
            let b = regs.read(insn.rs2, width);
            let value = match op {
                ArithOp::Add => Fpu::mul_add(width, a, one(width), b),
                ArithOp::Sub => Fpu::mul_add(width, a, one(width), Fpu::negate(width, b)),
                ArithOp::Mul => Fpu::mul_add(width, a, b, 0),
                ArithOp::Div => Fpu::div(width, a, b),
                ArithOp::Sqrt => Fpu::sqrt(width, a),
            };
            float(width, value)
        }
        Op::Fused(op, width) => {
            let a = regs.read(insn.rs1, width);
            let b = regs.read(insn.rs2, width);
            let c = regs.read(insn.rs3, width);
            let value = match op {
                FusedOp::MAdd => Fpu::mul_add(width, a, b, c),
                FusedOp::MSub => Fpu::mul_add(width, a, b, Fpu::negate(width, c)),
                FusedOp::NMSub => {
                    Fpu::negate(width, Fpu::mul_add(width, a, b, Fpu::negate(width, c)))
                }
                FusedOp::NMAdd => Fpu::negate(width, Fpu::mul_add(width, a, b, c)),
            };
            float(width, value)
        }
    };
    Ok(outcome)
}

/// Writes an outcome back to architectural state.
///
/// Integer results go to the trap frame (writes to `x0` are dropped);
/// floating-point results go through the width-aware register write.
pub fn apply(outcome: EmulationOutcome, regs: &mut FloatRegisterFile, tf: &mut TrapFrame) {
    match outcome {
        EmulationOutcome::Integer { rd, value } => tf.write_gpr(rd, value),
        EmulationOutcome::Float { rd, width, value } => regs.write(rd, width, value),
        EmulationOutcome::MemoryWrite { .. } | EmulationOutcome::Unrecognized => {}
    }
}
