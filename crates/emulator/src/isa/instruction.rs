//! Instruction encoding and field extraction.
//!
//! The floating-point instructions handled here use a register-high layout:
//! the destination sits in the top bits and the opcode in the bottom seven.
//!
//! ```text
//!  31    27 26   22 21   17 16   12 11  9 8  7 6      0
//! |   rd   |  rs1  |  rs2  |rs3/fn5|  rm  | fmt |opcode |
//! ```
//!
//! Loads and stores reuse bits 9:7 as a width code and carry a 12-bit signed
//! displacement; see [`InstructionBits::load_imm`] and
//! [`InstructionBits::store_imm`].

use crate::isa::op::Op;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the rounding-mode field (bits 9-11).
pub const RM_MASK: u32 = 0x7;
/// Bit mask for the format field (bits 7-8).
pub const FMT_MASK: u32 = 0x3;

const RD_SHIFT: u32 = 27;
const RS1_SHIFT: u32 = 22;
const RS2_SHIFT: u32 = 17;
const RS3_SHIFT: u32 = 12;
const RM_SHIFT: u32 = 9;
const FMT_SHIFT: u32 = 7;

/// Shift that places the load displacement (bits 21:10) at the top of a word.
const LOAD_IMM_LEFT: u32 = 10;
/// Arithmetic shift that brings the load displacement back down, sign-extended.
const LOAD_IMM_RIGHT: u32 = 20;

/// Low seven displacement bits of a store (bits 16:10).
const STORE_IMM_LO_SHIFT: u32 = 10;
const STORE_IMM_LO_MASK: u32 = 0x7F;
/// Position of the high five displacement bits after reassembly.
const STORE_IMM_HI_POS: u32 = 7;
/// Total width of a load/store displacement.
const IMM_BITS: u32 = 12;

/// Trait for extracting fields from an encoded floating-point instruction.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 27-31).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 22-26).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 17-21).
    fn rs2(&self) -> usize;

    /// Extracts the third source register field (bits 12-16, fused ops only).
    ///
    /// On `OP-FP` encodings the same bits hold the function code.
    fn rs3(&self) -> usize;

    /// Extracts the rounding-mode field (bits 9-11).
    fn rm(&self) -> u8;

    /// Extracts the format field (bits 7-8).
    fn fmt(&self) -> u32;

    /// Extracts the sign-extended load displacement (bits 10-21).
    fn load_imm(&self) -> i64;

    /// Extracts the sign-extended store displacement.
    ///
    /// The high five bits live in the `rd` slot (bits 27-31) and the low
    /// seven at bits 10-16, since a store has no destination register.
    fn store_imm(&self) -> i64;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> RS3_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rm(&self) -> u8 {
        ((self >> RM_SHIFT) & RM_MASK) as u8
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        (self >> FMT_SHIFT) & FMT_MASK
    }

    #[inline(always)]
    fn load_imm(&self) -> i64 {
        i64::from(((self << LOAD_IMM_LEFT) as i32) >> LOAD_IMM_RIGHT)
    }

    #[inline(always)]
    fn store_imm(&self) -> i64 {
        let hi = (self >> RD_SHIFT) & REG_MASK;
        let lo = (self >> STORE_IMM_LO_SHIFT) & STORE_IMM_LO_MASK;
        let raw = (hi << STORE_IMM_HI_POS) | lo;
        let shift = 32 - IMM_BITS;
        i64::from(((raw << shift) as i32) >> shift)
    }
}

/// A decoded floating-point instruction.
///
/// Every field is extracted up front regardless of whether the operation uses
/// it; the dispatch engine picks the ones it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The original 32-bit encoding.
    pub raw: u32,
    /// The operation selected by the decode table.
    pub op: Op,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Third source register index.
    pub rs3: usize,
    /// Raw rounding-mode field; 7 selects the dynamic mode from `fsr`.
    pub rm: u8,
    /// Sign-extended memory displacement; zero for non-memory operations.
    pub imm: i64,
}

impl Instruction {
    /// Builds an instruction from its encoding and a matched operation.
    pub fn new(raw: u32, op: Op) -> Self {
        let imm = match op {
            Op::Load(_) => raw.load_imm(),
            Op::Store(_) => raw.store_imm(),
            _ => 0,
        };
        Self {
            raw,
            op,
            rd: raw.rd(),
            rs1: raw.rs1(),
            rs2: raw.rs2(),
            rs3: raw.rs3(),
            rm: raw.rm(),
            imm,
        }
    }
}
