//! # Rounding Mode Tests
//!
//! Covers resolution of the `rm` field (static, dynamic, reserved) and its
//! observable effect on an inexact single-precision addition.

use fpemu_core::EmulateError;
use fpemu_core::common::data::Width::{Double, Single};
use fpemu_core::fpu::Fpu;
use fpemu_core::fpu::env;
use fpemu_core::fpu::exception_flags::FpFlags;
use fpemu_core::fpu::rounding_modes::RoundingMode;
use fpemu_core::isa::opcodes::{FADD, FCVT_F_F};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::InstructionBuilder as B;
use crate::common::harness::TestContext;
use crate::common::mocks::MockMachine;

/// 2^-30 as binary32; below half an ulp of 1.0.
const TINY: u32 = 0x3080_0000;

#[rstest]
#[case(0, Some(RoundingMode::Rne))]
#[case(1, Some(RoundingMode::Rtz))]
#[case(2, Some(RoundingMode::Rdn))]
#[case(3, Some(RoundingMode::Rup))]
#[case(4, Some(RoundingMode::Rmm))]
#[case(5, None)]
#[case(6, None)]
fn static_field_resolves(#[case] field: u8, #[case] expected: Option<RoundingMode>) {
    // The status word is ignored for static fields.
    assert_eq!(RoundingMode::resolve(field, 0b011 << 5), expected);
}

#[rstest]
#[case(0b101)]
#[case(0b110)]
#[case(0b111)]
fn dynamic_field_with_reserved_status_clamps(#[case] status_rm: u32) {
    assert_eq!(RoundingMode::resolve(7, status_rm << 5), Some(RoundingMode::Rmm));
}

proptest! {
    #[test]
    fn dynamic_field_reads_status(rm in 0u32..5, flags in 0u32..32) {
        let fsr = (rm << 5) | flags;
        prop_assert_eq!(RoundingMode::resolve(7, fsr).map(|m| m as u32), Some(rm));
    }
}

#[rstest]
#[case(RoundingMode::Rne, 0x3eaa_aaab)]
#[case(RoundingMode::Rtz, 0x3eaa_aaaa)]
#[case(RoundingMode::Rdn, 0x3eaa_aaaa)]
#[case(RoundingMode::Rup, 0x3eaa_aaab)]
#[case(RoundingMode::Rmm, 0x3eaa_aaab)]
fn library_reads_thread_rounding_mode(#[case] mode: RoundingMode, #[case] expected: u64) {
    env::set_rounding_mode(mode);
    env::clear_flags();
    let third = Fpu::div(Single, u64::from(1.0f32.to_bits()), u64::from(3.0f32.to_bits()));
    assert_eq!(third, expected);
    assert_eq!(env::flags(), FpFlags::NX);
}

fn add_one_and_tiny(rm_field: u32, dynamic: u32) -> (u32, FpFlags) {
    add_one_and(TINY, rm_field, dynamic)
}

fn add_one_and(addend: u32, rm_field: u32, dynamic: u32) -> (u32, FpFlags) {
    let mut ctx = TestContext::new();
    ctx.set_dynamic_rm(dynamic);
    ctx.set_f32(0, 1.0);
    ctx.regs.write(1, Single, u64::from(addend));
    let word = B::new().op_fp(FADD, Single).rd(2).rs1(0).rs2(1).rm(rm_field).build();
    ctx.run(word).expect("fadd.s emulates");
    (ctx.f32_bits(2), ctx.regs.flags())
}

#[rstest]
#[case::dynamic_rup(7, 0b011, 0x3f80_0001)]
#[case::dynamic_rtz(7, 0b001, 0x3f80_0000)]
#[case::dynamic_rne(7, 0b000, 0x3f80_0000)]
#[case::static_rup_overrides_rtz(3, 0b001, 0x3f80_0001)]
#[case::static_rdn_overrides_rup(2, 0b011, 0x3f80_0000)]
fn mode_selects_result(#[case] field: u32, #[case] dynamic: u32, #[case] expected: u32) {
    let (bits, flags) = add_one_and_tiny(field, dynamic);
    assert_eq!(bits, expected);
    assert!(flags.contains(FpFlags::NX));
}

#[test]
fn reserved_static_mode_is_unrecognized() {
    let mut ctx = TestContext::new();
    ctx.set_f32(0, 1.0);
    ctx.set_f32(1, 1.0);
    let word = B::new().op_fp(FADD, Single).rd(2).rs1(0).rs2(1).rm(5).build();
    assert_eq!(ctx.run(word), Err(EmulateError::Unrecognized(word)));
    assert_eq!(ctx.f32_bits(2), 0);
}

#[test]
fn reserved_static_mode_leaves_unit_untouched() {
    let mut ctx = TestContext::with_machine(MockMachine::with_fpu());
    let word = B::new().op_fp(FADD, Single).rd(2).rs1(0).rs2(1).rm(5).build();
    assert_eq!(ctx.run(word), Err(EmulateError::Unrecognized(word)));

    let machine = ctx.emu.platform();
    assert_eq!(ctx.tf.sr, 0);
    assert_eq!(machine.status, 0);
    assert_eq!((machine.status_writes, machine.saves, machine.restores), (0, 0, 0));
    assert!(!ctx.regs.is_bound());
}

#[test]
fn reserved_dynamic_mode_rounds_to_max_magnitude() {
    // 1 + 2^-24 is a tie between 1.0 and its successor.
    let (bits, _) = add_one_and(0x3380_0000, 7, 0b101);
    assert_eq!(bits, 0x3f80_0001);
    let (bits, _) = add_one_and(0x3380_0000, 7, 0b000);
    assert_eq!(bits, 0x3f80_0000);
}

#[test]
fn widening_ignores_reserved_mode() {
    let mut ctx = TestContext::new();
    ctx.set_f32(1, 1.5);
    ctx.run(B::unary(FCVT_F_F, Double, 2, 1, 5)).expect("fcvt.d.s emulates");
    assert_eq!(ctx.f64(2), 1.5);
}
