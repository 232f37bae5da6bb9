//! # Arithmetic Tests
//!
//! Addition, subtraction, and multiplication route through the fused
//! multiply-add primitive; the fused family negates operands and results as
//! bit operations.

use fpemu_core::common::data::Width::{self, Double, Single};
use fpemu_core::fpu::exception_flags::FpFlags;
use fpemu_core::isa::opcodes::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::InstructionBuilder as B;
use crate::common::harness::TestContext;

fn run_double(word: u32, a: f64, b: f64, c: f64) -> TestContext {
    let mut ctx = TestContext::new();
    ctx.set_f64(1, a);
    ctx.set_f64(2, b);
    ctx.set_f64(3, c);
    ctx.run(word).expect("instruction emulates");
    ctx
}

fn fused(opcode: u32, width: Width) -> u32 {
    B::new().fused(opcode, width, 3).rd(4).rs1(1).rs2(2).build()
}

#[rstest]
#[case::madd(OP_FMADD, 7.0)]
#[case::msub(OP_FMSUB, 5.0)]
#[case::nmsub(OP_FNMSUB, -5.0)]
#[case::nmadd(OP_FNMADD, -7.0)]
fn fused_family(#[case] opcode: u32, #[case] expected: f64) {
    let ctx = run_double(fused(opcode, Double), 2.0, 3.0, 1.0);
    assert_eq!(ctx.f64(4), expected);
}

#[test]
fn fused_single_rounds_once() {
    // (1 + 2^-12)^2 - 1 = 2^-11 + 2^-24; a separate multiply would drop 2^-24.
    let mut ctx = TestContext::new();
    let a = 1.0f32 + f32::powi(2.0, -12);
    ctx.set_f32(1, a);
    ctx.set_f32(2, a);
    ctx.set_f32(3, 1.0);
    ctx.run(fused(OP_FMSUB, Single)).expect("fmsub.s emulates");
    assert_eq!(ctx.f32(4), f32::powi(2.0, -11) + f32::powi(2.0, -24));
}

#[test]
fn add_sub_mul_div_double() {
    assert_eq!(run_double(B::fadd(Double, 4, 1, 2), 1.25, 2.5, 0.0).f64(4), 3.75);
    assert_eq!(run_double(B::fsub(Double, 4, 1, 2), 1.25, 2.5, 0.0).f64(4), -1.25);
    assert_eq!(run_double(B::fmul(Double, 4, 1, 2), 1.25, 2.5, 0.0).f64(4), 3.125);
    let div = B::new().op_fp(FDIV, Double).rd(4).rs1(1).rs2(2).build();
    assert_eq!(run_double(div, 1.0, 4.0, 0.0).f64(4), 0.25);
}

#[test]
fn multiply_of_negative_zero_product_gains_positive_addend() {
    // -1 * 0 + (+0) is +0 under round-to-nearest.
    let ctx = run_double(B::fmul(Double, 4, 1, 2), -1.0, 0.0, 0.0);
    assert_eq!(ctx.f64_bits(4), 0);
}

#[test]
fn divide_by_zero_raises_dz() {
    let div = B::new().op_fp(FDIV, Single).rd(4).rs1(1).rs2(2).build();
    let mut ctx = TestContext::new();
    ctx.set_f32(1, 1.0);
    ctx.set_f32(2, 0.0);
    ctx.run(div).expect("fdiv.s emulates");
    assert_eq!(ctx.f32(4), f32::INFINITY);
    assert_eq!(ctx.regs.flags(), FpFlags::DZ);
}

#[test]
fn sqrt_of_negative_is_invalid() {
    let mut ctx = TestContext::new();
    ctx.set_f64(1, -4.0);
    ctx.run(B::unary(FSQRT, Double, 4, 1, 7)).expect("fsqrt.d emulates");
    assert!(ctx.f64(4).is_nan());
    assert!(ctx.regs.flags().contains(FpFlags::NV));
}

#[test]
fn sqrt_single() {
    let mut ctx = TestContext::new();
    ctx.set_f32(1, 2.25);
    ctx.run(B::unary(FSQRT, Single, 4, 1, 0)).expect("fsqrt.s emulates");
    assert_eq!(ctx.f32(4), 1.5);
    assert!(ctx.regs.flags().is_empty());
}

#[test]
fn flags_accrue_across_instructions() {
    let mut ctx = TestContext::new();
    ctx.set_f32(1, 1.0);
    ctx.set_f32(2, 0.0);
    ctx.set_f32(3, 3.0);
    let div_zero = B::new().op_fp(FDIV, Single).rd(4).rs1(1).rs2(2).build();
    let div_inexact = B::new().op_fp(FDIV, Single).rd(5).rs1(1).rs2(3).build();
    ctx.run(div_zero).expect("fdiv.s emulates");
    ctx.run(div_inexact).expect("fdiv.s emulates");
    assert_eq!(ctx.regs.flags(), FpFlags::DZ | FpFlags::NX);
}
