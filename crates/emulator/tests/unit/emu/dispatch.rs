//! # Dispatch Tests
//!
//! Exercises `execute` and `apply` directly: outcomes are produced without
//! touching architectural state, and writeback honours `x0`.

use fpemu_core::arch::{FloatRegisterFile, TrapFrame};
use fpemu_core::common::data::Width::{Double, Single};
use fpemu_core::emu::dispatch::{EmulationOutcome, apply, execute};
use fpemu_core::isa::decode::decode;
use fpemu_core::isa::instruction::Instruction;
use fpemu_core::isa::op::{ArithOp, Op};
use fpemu_core::isa::opcodes::*;
use pretty_assertions::assert_eq;

use crate::common::builder::InstructionBuilder as B;
use crate::common::harness::USER_BASE;
use crate::common::mocks::SparseMemory;

const BOUND: u64 = 0x1_0000;

#[test]
fn execute_does_not_write_registers() {
    let mut regs = FloatRegisterFile::new();
    regs.write(1, Double, 1.0f64.to_bits());
    regs.write(2, Double, 2.0f64.to_bits());
    let tf = TrapFrame::default();
    let mut mem = SparseMemory::new();

    let insn = decode(B::fadd(Double, 3, 1, 2)).expect("fadd.d decodes");
    let outcome = execute(&insn, &regs, &tf, &mut mem, BOUND).expect("no fault");

    assert_eq!(
        outcome,
        EmulationOutcome::Float { rd: 3, width: Double, value: 3.0f64.to_bits() }
    );
    assert_eq!(regs.read(3, Double), 0);
}

#[test]
fn store_reports_memory_write() {
    let mut regs = FloatRegisterFile::new();
    regs.write(4, Single, 0x4048_f5c3);
    let mut tf = TrapFrame::default();
    tf.gpr[2] = USER_BASE;
    let mut mem = SparseMemory::new();

    let insn = decode(B::store(Single, 4, 2, 12)).expect("fsw decodes");
    let outcome = execute(&insn, &regs, &tf, &mut mem, BOUND).expect("no fault");

    assert_eq!(outcome, EmulationOutcome::MemoryWrite { addr: USER_BASE + 12, width: Single });
    assert_eq!(mem.peek(USER_BASE + 12, 4), 0x4048_f5c3);
}

#[test]
fn apply_discards_x0() {
    let mut regs = FloatRegisterFile::new();
    let mut tf = TrapFrame::default();
    apply(EmulationOutcome::Integer { rd: 0, value: 99 }, &mut regs, &mut tf);
    apply(EmulationOutcome::Integer { rd: 1, value: 5 }, &mut regs, &mut tf);
    assert_eq!(tf.gpr[0], 0);
    assert_eq!(tf.gpr[1], 5);
}

#[test]
fn reserved_rounding_mode_is_unrecognized_outcome() {
    let regs = FloatRegisterFile::new();
    let tf = TrapFrame::default();
    let mut mem = SparseMemory::new();
    // The decoder never yields this; build it by hand.
    let insn = Instruction::new(B::unary(FSQRT, Single, 1, 2, 6), Op::Arith(ArithOp::Sqrt, Single));
    let outcome = execute(&insn, &regs, &tf, &mut mem, BOUND).expect("no fault");
    assert_eq!(outcome, EmulationOutcome::Unrecognized);
}
