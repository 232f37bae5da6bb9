//! Numeric library environment.
//!
//! The `softfp` arithmetic reads its rounding mode and reports raised
//! exceptions through two link-time hooks. This module backs those hooks with
//! per-thread state, so each hart emulating instructions owns its own mode and
//! flag accumulator.

use std::cell::Cell;

use super::exception_flags::FpFlags;
use super::rounding_modes::RoundingMode;

thread_local! {
    static ROUNDING_MODE: Cell<RoundingMode> = const { Cell::new(RoundingMode::Rne) };
    static ACCRUED: Cell<FpFlags> = const { Cell::new(FpFlags::NONE) };
}

/// Selects the rounding mode used by subsequent library calls on this thread.
pub fn set_rounding_mode(rm: RoundingMode) {
    ROUNDING_MODE.with(|cell| cell.set(rm));
}

/// Returns the rounding mode currently in effect on this thread.
pub fn rounding_mode() -> RoundingMode {
    ROUNDING_MODE.with(Cell::get)
}

/// Clears the exception-flag accumulator.
pub fn clear_flags() {
    ACCRUED.with(|cell| cell.set(FpFlags::NONE));
}

/// Returns the flags raised since the last [`clear_flags`].
pub fn flags() -> FpFlags {
    ACCRUED.with(Cell::get)
}

/// ORs `raised` into the accumulator.
pub fn raise(raised: FpFlags) {
    ACCRUED.with(|cell| cell.set(cell.get() | raised));
}

#[unsafe(no_mangle)]
fn softfp_get_rounding_mode() -> softfp::RoundingMode {
    match rounding_mode() {
        RoundingMode::Rne => softfp::RoundingMode::TiesToEven,
        RoundingMode::Rtz => softfp::RoundingMode::TowardZero,
        RoundingMode::Rdn => softfp::RoundingMode::TowardNegative,
        RoundingMode::Rup => softfp::RoundingMode::TowardPositive,
        RoundingMode::Rmm => softfp::RoundingMode::TiesToAway,
    }
}

#[unsafe(no_mangle)]
fn softfp_set_exception_flags(flags: softfp::ExceptionFlags) {
    raise(FpFlags::from_bits(flags.bits() as u8));
}
