//! # Address Validation Tests
//!
//! Alignment is checked before membership, membership is a signed comparison
//! against the user bound, and each direction/kind pair reaches exactly one
//! handler method.

use fpemu_core::arch::TrapFrame;
use fpemu_core::common::data::Direction::{self, Load, Store};
use fpemu_core::common::data::Width::{self, Double, Single};
use fpemu_core::common::error::{AccessFault, FaultKind};
use fpemu_core::mem::validate;
use mockall::predicate::{always, eq};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::mocks::MockFaults;

const BOUND: u64 = 0x1_0000;

#[rstest]
#[case::at_bound(BOUND, Single, Ok(BOUND))]
#[case::above_bound(0x2_0008, Double, Ok(0x2_0008))]
#[case::below_bound(BOUND - 8, Double, Err(FaultKind::OutOfRange))]
#[case::null(0, Single, Err(FaultKind::OutOfRange))]
#[case::upper_half(0x8000_0000_0000_0000, Double, Err(FaultKind::OutOfRange))]
#[case::all_ones_aligned(0xffff_ffff_ffff_fff8, Double, Err(FaultKind::OutOfRange))]
#[case::misaligned_double(0x2_0004, Double, Err(FaultKind::Misaligned))]
#[case::misaligned_below_bound(0x3, Single, Err(FaultKind::Misaligned))]
fn validates(#[case] addr: u64, #[case] width: Width, #[case] expected: Result<u64, FaultKind>) {
    let got = validate(addr, width, Load, BOUND)
        .map(|ea| ea.get())
        .map_err(|f| f.kind);
    assert_eq!(got, expected);
}

#[rstest]
fn fault_carries_direction(#[values(Load, Store)] direction: Direction) {
    let err = validate(0x5, Single, direction, BOUND).unwrap_err();
    assert_eq!(err, AccessFault { direction, kind: FaultKind::Misaligned, addr: 0x5 });
}

proptest! {
    #[test]
    fn misaligned_iff_not_multiple(addr in any::<u64>(), double in any::<bool>()) {
        let width = if double { Double } else { Single };
        let size = width.bytes();
        let result = validate(addr, width, Store, BOUND);
        let misaligned = matches!(result, Err(AccessFault { kind: FaultKind::Misaligned, .. }));
        prop_assert_eq!(misaligned, addr % size != 0);
    }

    #[test]
    fn aligned_out_of_range_iff_below_signed_bound(slot in any::<u64>(), double in any::<bool>()) {
        let width = if double { Double } else { Single };
        let addr = slot & !(width.bytes() - 1);
        let result = validate(addr, width, Load, BOUND);
        let out_of_range = matches!(result, Err(AccessFault { kind: FaultKind::OutOfRange, .. }));
        prop_assert_eq!(out_of_range, (addr as i64) < BOUND as i64);
        if let Ok(ea) = result {
            prop_assert_eq!(ea.get(), addr);
            prop_assert_eq!(ea.width(), width);
        }
    }
}

#[rstest]
#[case(Load, FaultKind::Misaligned)]
#[case(Store, FaultKind::Misaligned)]
#[case(Load, FaultKind::OutOfRange)]
#[case(Store, FaultKind::OutOfRange)]
fn report_reaches_one_handler(#[case] direction: Direction, #[case] kind: FaultKind) {
    let addr = 0xbad0;
    let mut faults = MockFaults::new();
    let times = |d, k| usize::from(direction == d && kind == k);
    faults
        .expect_on_misaligned_load()
        .with(always(), eq(addr))
        .times(times(Load, FaultKind::Misaligned))
        .return_const(());
    faults
        .expect_on_misaligned_store()
        .with(always(), eq(addr))
        .times(times(Store, FaultKind::Misaligned))
        .return_const(());
    faults
        .expect_on_fault_load()
        .with(always(), eq(addr))
        .times(times(Load, FaultKind::OutOfRange))
        .return_const(());
    faults
        .expect_on_fault_store()
        .with(always(), eq(addr))
        .times(times(Store, FaultKind::OutOfRange))
        .return_const(());

    let mut tf = TrapFrame::default();
    AccessFault { direction, kind, addr }.report(&mut faults, &mut tf);
}
