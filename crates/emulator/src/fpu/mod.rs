//! Floating-Point Unit (FPU).
//!
//! This module is the emulator's facade over the `softfp` IEEE 754 library.
//! Every operation works on raw bit patterns: single-precision operands and
//! results occupy the low 32 bits of a `u64` with the upper half zero.
//!
//! Operations are organized into submodules:
//! - [`rounding_modes`]: The five rounding modes and `rm` field resolution.
//! - [`exception_flags`]: The accrued NV/DZ/OF/UF/NX flag set.
//! - [`env`]: The per-hart rounding mode and flag accumulator the library
//!   consults through its link-time hooks.

/// Per-hart numeric environment backing the library hooks.
pub mod env;

/// Floating-point exception flag types.
pub mod exception_flags;

/// Rounding mode definitions and support.
pub mod rounding_modes;

use softfp::{F32, F64};

use crate::common::constants::{F32_SIGN_BIT, F64_SIGN_BIT};
use crate::common::data::Width;
use crate::isa::op::{IntFormat, SignOp};

use self::exception_flags::FpFlags;
use self::rounding_modes::RoundingMode;

#[inline]
fn s(bits: u64) -> F32 {
    F32::new(bits as u32)
}

#[inline]
fn d(bits: u64) -> F64 {
    F64::new(bits)
}

#[inline]
fn from_s(value: F32) -> u64 {
    u64::from(value.0)
}

/// Floating-Point Unit for emulated operations.
///
/// Stateless: the rounding mode and the raised flags live in [`env`], so
/// callers select a mode with [`env::set_rounding_mode`] before invoking a
/// rounding operation and read [`env::flags`] afterwards.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Returns the sign bit mask for `width`.
    #[inline]
    pub const fn sign_bit(width: Width) -> u64 {
        match width {
            Width::Single => F32_SIGN_BIT as u64,
            Width::Double => F64_SIGN_BIT,
        }
    }

    /// Flips the sign of a value.
    #[inline]
    pub const fn negate(width: Width, a: u64) -> u64 {
        a ^ Self::sign_bit(width)
    }

    /// Computes `a * b + c` with a single rounding.
    ///
    /// Addition, subtraction, and multiplication are all expressed through
    /// this primitive by the dispatch engine.
    ///
    /// # Arguments
    ///
    /// * `width` - Operand precision.
    /// * `a`, `b`, `c` - Operand bit patterns.
    pub fn mul_add(width: Width, a: u64, b: u64, c: u64) -> u64 {
        match width {
            Width::Single => from_s(F32::fused_multiply_add(s(a), s(b), s(c))),
            Width::Double => F64::fused_multiply_add(d(a), d(b), d(c)).0,
        }
    }

    /// Computes `a / b`.
    pub fn div(width: Width, a: u64, b: u64) -> u64 {
        match width {
            Width::Single => from_s(s(a) / s(b)),
            Width::Double => (d(a) / d(b)).0,
        }
    }

    /// Computes the square root of `a`.
    pub fn sqrt(width: Width, a: u64) -> u64 {
        match width {
            Width::Single => from_s(s(a).square_root()),
            Width::Double => d(a).square_root().0,
        }
    }

    /// Quiet equality; raises NV only for signaling NaN operands.
    ///
    /// The library's quiet comparison raises nothing, so the signaling check
    /// happens here.
    pub fn eq(width: Width, a: u64, b: u64) -> bool {
        let (equal, signaling) = match width {
            Width::Single => (s(a) == s(b), s(a).is_signaling() || s(b).is_signaling()),
            Width::Double => (d(a) == d(b), d(a).is_signaling() || d(b).is_signaling()),
        };
        if signaling {
            env::raise(FpFlags::NV);
        }
        equal
    }

    /// Ordered less-than; raises NV for any NaN operand.
    pub fn lt(width: Width, a: u64, b: u64) -> bool {
        match width {
            Width::Single => s(a) < s(b),
            Width::Double => d(a) < d(b),
        }
    }

    /// Less-than-or-equal, defined as `eq(a, b) || lt(a, b)`.
    ///
    /// Both primitives are always evaluated so their flags accrue.
    pub fn le(width: Width, a: u64, b: u64) -> bool {
        let eq = Self::eq(width, a, b);
        let lt = Self::lt(width, a, b);
        eq || lt
    }

    /// Composes the magnitude of `a` with a sign derived from `b`.
    ///
    /// Pure bit manipulation: NaN payloads and infinities pass through
    /// untouched and no flags are raised.
    pub const fn sign_inject(op: SignOp, width: Width, a: u64, b: u64) -> u64 {
        let sign = Self::sign_bit(width);
        let sign_b = match op {
            SignOp::Inject => b & sign,
            SignOp::Negate => !b & sign,
            SignOp::Xor => (a ^ b) & sign,
        };
        (a & !sign) | sign_b
    }

    /// Converts a float to an integer, rounding toward zero.
    ///
    /// # Returns
    ///
    /// The 64-bit register value: `Word` sign-extends the 32-bit result,
    /// `WordUnsigned` zero-extends it, `Long` and `LongUnsigned` are full
    /// width. Out-of-range and NaN inputs produce the library's saturated
    /// value and raise NV.
    pub fn to_int(format: IntFormat, width: Width, a: u64) -> u64 {
        env::set_rounding_mode(RoundingMode::Rtz);
        match (format, width) {
            (IntFormat::Word, Width::Single) => s(a).convert_to_sint::<u32>() as i32 as u64,
            (IntFormat::Word, Width::Double) => d(a).convert_to_sint::<u32>() as i32 as u64,
            (IntFormat::WordUnsigned, Width::Single) => u64::from(s(a).convert_to_uint::<u32>()),
            (IntFormat::WordUnsigned, Width::Double) => u64::from(d(a).convert_to_uint::<u32>()),
            (IntFormat::Long, Width::Single) => s(a).convert_to_sint::<u64>(),
            (IntFormat::Long, Width::Double) => d(a).convert_to_sint::<u64>(),
            (IntFormat::LongUnsigned, Width::Single) => s(a).convert_to_uint::<u64>(),
            (IntFormat::LongUnsigned, Width::Double) => d(a).convert_to_uint::<u64>(),
        }
    }

    /// Converts an integer register value to a float, rounding per the
    /// current mode.
    ///
    /// 32-bit formats take the low word of `x` and extend it (sign for
    /// `Word`, zero for `WordUnsigned`) before a 64-bit conversion.
    pub fn from_int(format: IntFormat, width: Width, x: u64) -> u64 {
        let (value, signed) = match format {
            IntFormat::Word => (x as u32 as i32 as u64, true),
            IntFormat::WordUnsigned => (u64::from(x as u32), false),
            IntFormat::Long => (x, true),
            IntFormat::LongUnsigned => (x, false),
        };
        match (width, signed) {
            (Width::Single, true) => from_s(F32::convert_from_sint::<u64>(value)),
            (Width::Single, false) => from_s(F32::convert_from_uint::<u64>(value)),
            (Width::Double, true) => F64::convert_from_sint::<u64>(value).0,
            (Width::Double, false) => F64::convert_from_uint::<u64>(value).0,
        }
    }

    /// Converts a double to single precision, rounding per the current mode.
    pub fn narrow(a: u64) -> u64 {
        let result: F32 = d(a).convert_format();
        from_s(result)
    }

    /// Converts a single to double precision. Always exact.
    pub fn widen(a: u64) -> u64 {
        let result: F64 = s(a).convert_format();
        result.0
    }
}
