//! Global Emulator Constants.
//!
//! This module defines the architectural constants used across the emulator. It includes:
//! 1. **Status Constants:** The floating-point enable bit and status-word layout.
//! 2. **IEEE 754 Constants:** Sign masks and the multiplicative identity per width.
//! 3. **Address Constants:** The default lowest user-addressable address.

/// Number of architectural floating-point registers.
pub const NUM_FPRS: usize = 32;

/// Number of architectural general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Floating-point enable bit in the privileged status register (`SR_EF`).
pub const SR_EF: u64 = 0x2;

/// Default lowest user-addressable address.
///
/// Effective addresses below this bound are rejected with an access fault.
pub const DEFAULT_USER_START: u64 = 0x1_0000;

/// Bit position of the rounding-mode field in the FP status word.
pub const FSR_RM_SHIFT: u32 = 5;

/// Mask for the 3-bit rounding-mode field after shifting.
pub const FSR_RM_MASK: u32 = 0x7;

/// Mask for the 5 accrued exception flag bits (NV, DZ, OF, UF, NX).
pub const FSR_FLAGS_MASK: u32 = 0x1F;

/// Rounding-mode field value selecting the status word's mode.
pub const RM_DYNAMIC: u8 = 0b111;

/// Bit mask for the sign bit in a 32-bit IEEE 754 float (bit 31).
pub const F32_SIGN_BIT: u32 = 0x8000_0000;

/// Bit mask for the sign bit in a 64-bit IEEE 754 float (bit 63).
pub const F64_SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// `1.0` as an IEEE 754 binary32 bit pattern.
pub const F32_ONE: u32 = 0x3f80_0000;

/// `1.0` as an IEEE 754 binary64 bit pattern.
pub const F64_ONE: u64 = 0x3ff0_0000_0000_0000;
