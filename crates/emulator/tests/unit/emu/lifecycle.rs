//! # Lifecycle Tests
//!
//! Verifies lazy enabling of the floating-point unit, one-shot seeding,
//! per-entry loading and per-exit synchronization, and that the soft path
//! never touches privileged state.

use fpemu_core::arch::{FloatRegisterFile, TrapFrame};
use fpemu_core::common::constants::SR_EF;
use fpemu_core::common::data::Width::{Double, Single};
use fpemu_core::emu::lifecycle::{ContextState, enter, state};
use pretty_assertions::assert_eq;

use crate::common::builder::InstructionBuilder as B;
use crate::common::harness::TestContext;
use crate::common::mocks::{MockFaults, MockMachine};

#[test]
fn soft_entry_only_binds_transcoder() {
    let mut machine = MockMachine::soft();
    let mut regs = FloatRegisterFile::new();
    let mut tf = TrapFrame::default();

    let active = enter(&mut machine, &mut regs, &mut tf);
    assert_eq!(active.state(), ContextState::Disabled);
    assert!(regs.is_bound());
    active.exit(&mut machine, &regs);

    assert_eq!((machine.status_writes, machine.saves, machine.restores), (0, 0, 0));
    assert_eq!(tf.sr, 0);
}

#[test]
fn first_entry_enables_and_seeds_unit() {
    let mut machine = MockMachine::with_fpu();
    let mut regs = FloatRegisterFile::new();
    regs.write(6, Double, 42.0f64.to_bits());
    let mut tf = TrapFrame::default();

    assert_eq!(state(&machine), ContextState::Disabled);
    let active = enter(&mut machine, &mut regs, &mut tf);

    assert_eq!(active.state(), ContextState::Enabling);
    assert_eq!(machine.status & SR_EF, SR_EF);
    assert_eq!(tf.sr & SR_EF, SR_EF);
    assert_eq!(machine.status_writes, 1);
    // Seeded from software, then read back.
    assert_eq!(machine.unit_fpr[6], 42.0f64.to_bits());
    assert_eq!((machine.restores, machine.saves), (1, 1));
    assert_eq!(regs.read(6, Double), 42.0f64.to_bits());
    assert_eq!(state(&machine), ContextState::Active);
}

#[test]
fn later_entries_load_from_unit() {
    let mut machine = MockMachine::with_fpu();
    machine.status = SR_EF;
    machine.unit_fpr[2] = 7.0f64.to_bits();
    machine.unit_fsr = 0b001 << 5;
    let mut regs = FloatRegisterFile::new();
    let mut tf = TrapFrame::default();

    let active = enter(&mut machine, &mut regs, &mut tf);

    assert_eq!(active.state(), ContextState::Active);
    assert_eq!(machine.status_writes, 0);
    assert_eq!(machine.restores, 0);
    assert_eq!(regs.read(2, Double), 7.0f64.to_bits());
    assert_eq!(regs.dynamic_rm(), 0b001);
    assert_eq!(tf.sr, 0);
}

#[test]
fn exit_pushes_state_back() {
    let mut machine = MockMachine::with_fpu();
    machine.status = SR_EF;
    let mut regs = FloatRegisterFile::new();
    let mut tf = TrapFrame::default();

    let active = enter(&mut machine, &mut regs, &mut tf);
    regs.write(9, Double, 0x1234);
    regs.set_fsr(0x1f);
    active.exit(&mut machine, &regs);

    assert_eq!(machine.unit_fpr[9], 0x1234);
    assert_eq!(machine.unit_fsr, 0x1f);
}

#[test]
fn emulation_round_trips_through_unit() {
    let mut machine = MockMachine::with_fpu();
    machine.status = SR_EF;
    machine.unit_fpr[0] = u64::from(1.0f32.to_bits());
    machine.unit_fpr[1] = u64::from(2.0f32.to_bits());
    let mut ctx = TestContext::with_machine(machine);

    ctx.run(B::fadd(Single, 2, 0, 1)).expect("fadd.s emulates");

    let (machine, _, _) = ctx.emu.into_parts();
    assert_eq!(machine.unit_fpr[2] as u32, 3.0f32.to_bits());
    assert_eq!((machine.saves, machine.restores), (1, 1));
}

#[test]
fn fault_skips_synchronization() {
    let mut machine = MockMachine::with_fpu();
    machine.status = SR_EF;
    let mut faults = MockFaults::new();
    faults.expect_on_fault_load().times(1).return_const(());
    let mut ctx = TestContext::with_parts(Default::default(), machine, faults);

    // Base x0 with no displacement: below the user bound.
    let result = ctx.run(B::load(Double, 1, 0, 0));
    assert!(result.is_err());

    let (machine, _, _) = ctx.emu.into_parts();
    assert_eq!((machine.saves, machine.restores), (1, 0));
}
