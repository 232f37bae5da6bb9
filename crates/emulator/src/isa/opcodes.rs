//! Floating-Point Opcodes, Format Codes and Function Codes.
//!
//! Loads and stores select their width through the 3-bit field at bits 9:7.
//! `OP-FP` and the fused opcodes carry a 2-bit format at bits 8:7 and, for
//! `OP-FP`, a 5-bit function code at bits 16:12.

/// Floating-point Load (FLW, FLD).
pub const OP_LOAD_FP: u32 = 0b0000111;

/// Floating-point Store (FSW, FSD).
pub const OP_STORE_FP: u32 = 0b0100111;

/// Floating-point Arithmetic (FADD, FSUB, conversions, moves, compares).
pub const OP_FP: u32 = 0b1010011;

/// Fused Multiply-Add (FMADD).
pub const OP_FMADD: u32 = 0b1000011;

/// Fused Multiply-Subtract (FMSUB).
pub const OP_FMSUB: u32 = 0b1000111;

/// Fused Negated Multiply-Subtract (FNMSUB).
pub const OP_FNMSUB: u32 = 0b1001011;

/// Fused Negated Multiply-Add (FNMADD).
pub const OP_FNMADD: u32 = 0b1001111;

/// Load/store width code for 32-bit accesses.
pub const WIDTH_W: u32 = 0b010;

/// Load/store width code for 64-bit accesses.
pub const WIDTH_D: u32 = 0b011;

/// Bit position of the load/store width code.
pub const WIDTH_SHIFT: u32 = 7;

/// Format code for single precision.
pub const FMT_S: u32 = 0b00;

/// Format code for double precision.
pub const FMT_D: u32 = 0b01;

/// Bit position of the format code.
pub const FMT_SHIFT: u32 = 7;

/// Bit position of the `OP-FP` function code.
pub const FUNCT5_SHIFT: u32 = 12;

/// Floating-point Add.
pub const FADD: u32 = 0;
/// Floating-point Subtract.
pub const FSUB: u32 = 1;
/// Floating-point Multiply.
pub const FMUL: u32 = 2;
/// Floating-point Divide.
pub const FDIV: u32 = 3;
/// Floating-point Square Root.
pub const FSQRT: u32 = 4;
/// Sign Injection (copy sign).
pub const FSGNJ: u32 = 5;
/// Sign Injection (negated sign).
pub const FSGNJN: u32 = 6;
/// Sign Injection (XOR sign).
pub const FSGNJX: u32 = 7;
/// Convert float to signed 64-bit integer.
pub const FCVT_L_F: u32 = 8;
/// Convert float to unsigned 64-bit integer.
pub const FCVT_LU_F: u32 = 9;
/// Convert float to signed 32-bit integer.
pub const FCVT_W_F: u32 = 10;
/// Convert float to unsigned 32-bit integer.
pub const FCVT_WU_F: u32 = 11;
/// Convert signed 64-bit integer to float.
pub const FCVT_F_L: u32 = 12;
/// Convert unsigned 64-bit integer to float.
pub const FCVT_F_LU: u32 = 13;
/// Convert signed 32-bit integer to float.
pub const FCVT_F_W: u32 = 14;
/// Convert unsigned 32-bit integer to float.
pub const FCVT_F_WU: u32 = 15;
/// Convert between single and double precision (format = destination).
pub const FCVT_F_F: u32 = 16;
/// Floating-point Equal.
pub const FEQ: u32 = 21;
/// Floating-point Less Than.
pub const FLT: u32 = 22;
/// Floating-point Less Than or Equal.
pub const FLE: u32 = 23;
/// Move float register bits to an integer register.
pub const MFTX: u32 = 28;
/// Move integer register bits to a float register.
pub const MXTF: u32 = 30;

/// Mask for loads and stores: opcode and width code.
pub const MASK_LOAD_STORE: u32 = 0x0000_03ff;

/// Mask for rounded two-operand `OP-FP` instructions: opcode, format, funct5.
pub const MASK_FP_RM: u32 = 0x0001_f1ff;

/// Mask for rounded one-operand `OP-FP` instructions: as [`MASK_FP_RM`] plus `rs2 == 0`.
pub const MASK_FP_RM_UNARY: u32 = 0x003f_f1ff;

/// Mask for unrounded two-operand `OP-FP` instructions: opcode, format, `rm`, funct5.
pub const MASK_FP: u32 = 0x0001_ffff;

/// Mask for unrounded one-operand `OP-FP` instructions: as [`MASK_FP`] plus `rs2 == 0`.
pub const MASK_FP_UNARY: u32 = 0x003f_ffff;

/// Mask for fused multiply-add instructions: opcode and format.
pub const MASK_FUSED: u32 = 0x0000_01ff;
