//! Floating-Point Instruction Decoder.
//!
//! Decoding is a linear search over a static table of `(mask, pattern, op)`
//! triples. A word matches an entry when `word & mask == pattern`. The table
//! is constructed so that at most one entry matches any word; a word that
//! matches none is not a supported floating-point instruction.

use crate::common::constants::RM_DYNAMIC;
use crate::common::data::Width;
use crate::fpu::rounding_modes::RoundingMode;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::op::{ArithOp, CmpOp, FusedOp, IntFormat, Op, SignOp};
use crate::isa::opcodes::*;

/// One row of the decode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeEntry {
    /// Bits of the word that must match `pattern`.
    pub mask: u32,
    /// Required value of the masked bits.
    pub pattern: u32,
    /// Operation selected when the entry matches.
    pub op: Op,
}

impl DecodeEntry {
    /// Returns true if `word` is an encoding of this entry.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.pattern
    }
}

const fn fmt_code(width: Width) -> u32 {
    match width {
        Width::Single => FMT_S,
        Width::Double => FMT_D,
    }
}

const fn mem(opcode: u32, width: Width, op: Op) -> DecodeEntry {
    let code = match width {
        Width::Single => WIDTH_W,
        Width::Double => WIDTH_D,
    };
    DecodeEntry {
        mask: MASK_LOAD_STORE,
        pattern: opcode | (code << WIDTH_SHIFT),
        op,
    }
}

const fn fp(funct5: u32, width: Width, mask: u32, op: Op) -> DecodeEntry {
    DecodeEntry {
        mask,
        pattern: OP_FP | (fmt_code(width) << FMT_SHIFT) | (funct5 << FUNCT5_SHIFT),
        op,
    }
}

const fn fused(opcode: u32, width: Width, op: Op) -> DecodeEntry {
    DecodeEntry {
        mask: MASK_FUSED,
        pattern: opcode | (fmt_code(width) << FMT_SHIFT),
        op,
    }
}

use crate::common::data::Width::{Double as D, Single as S};

/// Every supported floating-point encoding.
pub static DECODE_TABLE: [DecodeEntry; 56] = [
    // Memory
    mem(OP_LOAD_FP, S, Op::Load(S)),
    mem(OP_LOAD_FP, D, Op::Load(D)),
    mem(OP_STORE_FP, S, Op::Store(S)),
    mem(OP_STORE_FP, D, Op::Store(D)),
    // Register moves
    fp(MFTX, S, MASK_FP_UNARY, Op::MoveToInt(S)),
    fp(MFTX, D, MASK_FP_UNARY, Op::MoveToInt(D)),
    fp(MXTF, S, MASK_FP_UNARY, Op::MoveFromInt(S)),
    fp(MXTF, D, MASK_FP_UNARY, Op::MoveFromInt(D)),
    // Sign injection
    fp(FSGNJ, S, MASK_FP, Op::SignInject(SignOp::Inject, S)),
    fp(FSGNJN, S, MASK_FP, Op::SignInject(SignOp::Negate, S)),
    fp(FSGNJX, S, MASK_FP, Op::SignInject(SignOp::Xor, S)),
    fp(FSGNJ, D, MASK_FP, Op::SignInject(SignOp::Inject, D)),
    fp(FSGNJN, D, MASK_FP, Op::SignInject(SignOp::Negate, D)),
    fp(FSGNJX, D, MASK_FP, Op::SignInject(SignOp::Xor, D)),
    // Comparisons
    fp(FEQ, S, MASK_FP, Op::Compare(CmpOp::Eq, S)),
    fp(FLT, S, MASK_FP, Op::Compare(CmpOp::Lt, S)),
    fp(FLE, S, MASK_FP, Op::Compare(CmpOp::Le, S)),
    fp(FEQ, D, MASK_FP, Op::Compare(CmpOp::Eq, D)),
    fp(FLT, D, MASK_FP, Op::Compare(CmpOp::Lt, D)),
    fp(FLE, D, MASK_FP, Op::Compare(CmpOp::Le, D)),
    // Float to integer
    fp(FCVT_L_F, S, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::Long, S)),
    fp(FCVT_LU_F, S, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::LongUnsigned, S)),
    fp(FCVT_W_F, S, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::Word, S)),
    fp(FCVT_WU_F, S, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::WordUnsigned, S)),
    fp(FCVT_L_F, D, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::Long, D)),
    fp(FCVT_LU_F, D, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::LongUnsigned, D)),
    fp(FCVT_W_F, D, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::Word, D)),
    fp(FCVT_WU_F, D, MASK_FP_RM_UNARY, Op::ToInt(IntFormat::WordUnsigned, D)),
    // Integer to float
    fp(FCVT_F_L, S, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::Long, S)),
    fp(FCVT_F_LU, S, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::LongUnsigned, S)),
    fp(FCVT_F_W, S, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::Word, S)),
    fp(FCVT_F_WU, S, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::WordUnsigned, S)),
    fp(FCVT_F_L, D, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::Long, D)),
    fp(FCVT_F_LU, D, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::LongUnsigned, D)),
    fp(FCVT_F_W, D, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::Word, D)),
    fp(FCVT_F_WU, D, MASK_FP_RM_UNARY, Op::FromInt(IntFormat::WordUnsigned, D)),
    // Precision conversion; the format names the destination
    fp(FCVT_F_F, S, MASK_FP_RM_UNARY, Op::Convert(S)),
    fp(FCVT_F_F, D, MASK_FP_RM_UNARY, Op::Convert(D)),
    // Arithmetic
    fp(FADD, S, MASK_FP_RM, Op::Arith(ArithOp::Add, S)),
    fp(FSUB, S, MASK_FP_RM, Op::Arith(ArithOp::Sub, S)),
    fp(FMUL, S, MASK_FP_RM, Op::Arith(ArithOp::Mul, S)),
    fp(FDIV, S, MASK_FP_RM, Op::Arith(ArithOp::Div, S)),
    fp(FSQRT, S, MASK_FP_RM_UNARY, Op::Arith(ArithOp::Sqrt, S)),
    fp(FADD, D, MASK_FP_RM, Op::Arith(ArithOp::Add, D)),
    fp(FSUB, D, MASK_FP_RM, Op::Arith(ArithOp::Sub, D)),
    fp(FMUL, D, MASK_FP_RM, Op::Arith(ArithOp::Mul, D)),
    fp(FDIV, D, MASK_FP_RM, Op::Arith(ArithOp::Div, D)),
    fp(FSQRT, D, MASK_FP_RM_UNARY, Op::Arith(ArithOp::Sqrt, D)),
    // Fused multiply-add
    fused(OP_FMADD, S, Op::Fused(FusedOp::MAdd, S)),
    fused(OP_FMSUB, S, Op::Fused(FusedOp::MSub, S)),
    fused(OP_FNMSUB, S, Op::Fused(FusedOp::NMSub, S)),
    fused(OP_FNMADD, S, Op::Fused(FusedOp::NMAdd, S)),
    fused(OP_FMADD, D, Op::Fused(FusedOp::MAdd, D)),
    fused(OP_FMSUB, D, Op::Fused(FusedOp::MSub, D)),
    fused(OP_FNMSUB, D, Op::Fused(FusedOp::NMSub, D)),
    fused(OP_FNMADD, D, Op::Fused(FusedOp::NMAdd, D)),
];

/// Finds the table entry matching `word`, if any.
pub fn lookup(word: u32) -> Option<&'static DecodeEntry> {
    DECODE_TABLE.iter().find(|entry| entry.matches(word))
}

/// Decodes a 32-bit word into an [`Instruction`].
///
/// Returns `None` when the word is not a supported floating-point encoding,
/// including a rounding operation whose static `rm` field is reserved.
/// Decoding never has side effects.
///
/// # Arguments
///
/// * `word` - The faulting instruction word.
pub fn decode(word: u32) -> Option<Instruction> {
    let entry = lookup(word)?;
    let rm = word.rm();
    if entry.op.rounds() && rm != RM_DYNAMIC && RoundingMode::from_bits(rm).is_none() {
        return None;
    }
    Some(Instruction::new(word, entry.op))
}
