//! Floating-point operation kinds.
//!
//! Every entry of the decode table maps to exactly one [`Op`]. Operations are
//! grouped by family; each family carries the operand [`Width`] it works on.

use crate::common::data::Width;

/// Sign-injection variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignOp {
    /// Magnitude of rs1, sign of rs2 (`fsgnj`).
    Inject,
    /// Magnitude of rs1, inverted sign of rs2 (`fsgnjn`).
    Negate,
    /// Magnitude of rs1, XOR of both signs (`fsgnjx`).
    Xor,
}

/// Comparison predicate; the integer result is 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// Ordered equal (`feq`).
    Eq,
    /// Ordered less-than (`flt`).
    Lt,
    /// Less-than-or-equal, defined as `eq || lt` (`fle`).
    Le,
}

/// Integer side of a float/integer conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntFormat {
    /// Signed 32-bit (`w`).
    Word,
    /// Unsigned 32-bit (`wu`).
    WordUnsigned,
    /// Signed 64-bit (`l`).
    Long,
    /// Unsigned 64-bit (`lu`).
    LongUnsigned,
}

impl IntFormat {
    /// Returns the assembler suffix (`w`, `wu`, `l`, `lu`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Word => "w",
            Self::WordUnsigned => "wu",
            Self::Long => "l",
            Self::LongUnsigned => "lu",
        }
    }
}

/// Two-operand (or one, for `sqrt`) arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `rs1 + rs2`, computed as `fma(rs1, 1.0, rs2)`.
    Add,
    /// `rs1 - rs2`, computed as `fma(rs1, 1.0, -rs2)`.
    Sub,
    /// `rs1 * rs2`, computed as `fma(rs1, rs2, +0)`.
    Mul,
    /// `rs1 / rs2`.
    Div,
    /// `sqrt(rs1)`.
    Sqrt,
}

/// Three-operand fused multiply-add family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FusedOp {
    /// `rs1 * rs2 + rs3`.
    MAdd,
    /// `rs1 * rs2 - rs3`.
    MSub,
    /// `-(rs1 * rs2 - rs3)`.
    NMSub,
    /// `-(rs1 * rs2 + rs3)`.
    NMAdd,
}

/// A supported floating-point operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `flw` / `fld`: memory into `f[rd]`.
    Load(Width),
    /// `fsw` / `fsd`: `f[rs2]` into memory.
    Store(Width),
    /// `mftx`: raw bits of `f[rs1]` into `x[rd]`.
    MoveToInt(Width),
    /// `mxtf`: raw bits of `x[rs1]` into `f[rd]`.
    MoveFromInt(Width),
    /// `fsgnj*`: bitwise sign composition.
    SignInject(SignOp, Width),
    /// `feq` / `flt` / `fle`: integer result in `x[rd]`.
    Compare(CmpOp, Width),
    /// `fcvt.<int>.<fmt>`: float `f[rs1]` to integer `x[rd]`, rounding toward zero.
    ToInt(IntFormat, Width),
    /// `fcvt.<fmt>.<int>`: integer `x[rs1]` to float `f[rd]`.
    FromInt(IntFormat, Width),
    /// `fcvt.s.d` / `fcvt.d.s`: the width is the destination precision.
    Convert(Width),
    /// `fadd`, `fsub`, `fmul`, `fdiv`, `fsqrt`.
    Arith(ArithOp, Width),
    /// `fmadd`, `fmsub`, `fnmsub`, `fnmadd`.
    Fused(FusedOp, Width),
}

impl Op {
    /// Returns true if the operation's result depends on the rounding mode.
    ///
    /// Float-to-integer conversions always round toward zero and widening
    /// to double is exact, so neither consults the `rm` field.
    pub const fn rounds(self) -> bool {
        matches!(
            self,
            Self::Arith(..) | Self::Fused(..) | Self::FromInt(..) | Self::Convert(Width::Single)
        )
    }

    /// Returns the memory access width for loads and stores.
    pub const fn access_width(self) -> Option<Width> {
        match self {
            Self::Load(width) | Self::Store(width) => Some(width),
            _ => None,
        }
    }
}
