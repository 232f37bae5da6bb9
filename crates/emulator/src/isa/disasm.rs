//! Floating-Point Instruction Disassembler.
//!
//! Renders a decoded [`Instruction`] as assembler-style text for trace logs,
//! the diagnostics CLI, and test failure messages. Registers are printed by
//! number (`x5`, `f3`). The rounding mode is appended only for operations
//! that round and only when it is static.
//!
//! ```ignore
//! use fpemu_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x1002_0e53), "fadd.s f2, f0, f1");
//! ```

use std::fmt;

use crate::common::constants::RM_DYNAMIC;
use crate::fpu::rounding_modes::RoundingMode;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::op::{ArithOp, CmpOp, FusedOp, Op, SignOp};

/// Integer register operand.
struct X(usize);

/// Floating-point register operand.
struct F(usize);

impl fmt::Display for X {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

const fn sign_mnemonic(op: SignOp) -> &'static str {
    match op {
        SignOp::Inject => "fsgnj",
        SignOp::Negate => "fsgnjn",
        SignOp::Xor => "fsgnjx",
    }
}

const fn cmp_mnemonic(op: CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => "feq",
        CmpOp::Lt => "flt",
        CmpOp::Le => "fle",
    }
}

const fn arith_mnemonic(op: ArithOp) -> &'static str {
    match op {
        ArithOp::Add => "fadd",
        ArithOp::Sub => "fsub",
        ArithOp::Mul => "fmul",
        ArithOp::Div => "fdiv",
        ArithOp::Sqrt => "fsqrt",
    }
}

const fn fused_mnemonic(op: FusedOp) -> &'static str {
    match op {
        FusedOp::MAdd => "fmadd",
        FusedOp::MSub => "fmsub",
        FusedOp::NMSub => "fnmsub",
        FusedOp::NMAdd => "fnmadd",
    }
}

impl Instruction {
    fn write_operands(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rd, rs1, rs2, rs3) = (self.rd, self.rs1, self.rs2, self.rs3);
        match self.op {
            Op::Load(w) => {
                let mn = if w.bytes() == 4 { "flw" } else { "fld" };
                write!(f, "{mn} {}, {}({})", F(rd), self.imm, X(rs1))
            }
            Op::Store(w) => {
                let mn = if w.bytes() == 4 { "fsw" } else { "fsd" };
                write!(f, "{mn} {}, {}({})", F(rs2), self.imm, X(rs1))
            }
            Op::MoveToInt(w) => write!(f, "mftx.{} {}, {}", w.suffix(), X(rd), F(rs1)),
            Op::MoveFromInt(w) => write!(f, "mxtf.{} {}, {}", w.suffix(), F(rd), X(rs1)),
            Op::SignInject(op, w) => write!(
                f,
                "{}.{} {}, {}, {}",
                sign_mnemonic(op),
                w.suffix(),
                F(rd),
                F(rs1),
                F(rs2)
            ),
            Op::Compare(op, w) => write!(
                f,
                "{}.{} {}, {}, {}",
                cmp_mnemonic(op),
                w.suffix(),
                X(rd),
                F(rs1),
                F(rs2)
            ),
            Op::ToInt(int, w) => {
                write!(f, "fcvt.{}.{} {}, {}", int.suffix(), w.suffix(), X(rd), F(rs1))
            }
            Op::FromInt(int, w) => {
                write!(f, "fcvt.{}.{} {}, {}", w.suffix(), int.suffix(), F(rd), X(rs1))
            }
            Op::Convert(w) => write!(
                f,
                "fcvt.{}.{} {}, {}",
                w.suffix(),
                w.other().suffix(),
                F(rd),
                F(rs1)
            ),
            Op::Arith(ArithOp::Sqrt, w) => write!(f, "fsqrt.{} {}, {}", w.suffix(), F(rd), F(rs1)),
            Op::Arith(op, w) => write!(
                f,
                "{}.{} {}, {}, {}",
                arith_mnemonic(op),
                w.suffix(),
                F(rd),
                F(rs1),
                F(rs2)
            ),
            Op::Fused(op, w) => write!(
                f,
                "{}.{} {}, {}, {}, {}",
                fused_mnemonic(op),
                w.suffix(),
                F(rd),
                F(rs1),
                F(rs2),
                F(rs3)
            ),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_operands(f)?;
        if self.op.rounds() && self.rm != RM_DYNAMIC {
            match RoundingMode::from_bits(self.rm) {
                Some(mode) => write!(f, ", {mode}")?,
                None => write!(f, ", rm{}", self.rm)?,
            }
        }
        Ok(())
    }
}

/// Disassembles a 32-bit word into a human-readable string.
///
/// Returns `"unknown"` for words that are not supported floating-point
/// encodings.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|| "unknown".to_string(), |insn| insn.to_string())
}
