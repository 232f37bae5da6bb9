//! Single/Double Width Transcoding.
//!
//! A floating-point register slot is 64 bits wide. Writing a single-precision
//! value into a slot, or pulling one back out, goes through a [`Transcode`]
//! implementation chosen once per execution context:
//! 1. **Soft:** Pure bit manipulation; widen zero-fills, narrow truncates.
//! 2. **Hard:** Round-trips the value through `f0` of a present FPU so the
//!    slot holds exactly what the hardware would store. Only built for
//!    `riscv64` targets.
//!
//! Both preserve NaN payloads, signs, and subnormal patterns of the 32-bit
//! value.

use std::fmt;

/// Width conversion between a 32-bit single pattern and a 64-bit slot.
pub trait Transcode: fmt::Debug + Sync {
    /// Produces the 64-bit slot contents for a single-precision pattern.
    fn transcode_widen(&self, bits: u32) -> u64;

    /// Recovers the single-precision pattern held in a 64-bit slot.
    fn transcode_narrow(&self, slot: u64) -> u32;
}

/// Bit-manipulation transcoder used when no FPU is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftTranscoder;

impl Transcode for SoftTranscoder {
    #[inline]
    fn transcode_widen(&self, bits: u32) -> u64 {
        u64::from(bits)
    }

    #[inline]
    fn transcode_narrow(&self, slot: u64) -> u32 {
        slot as u32
    }
}

/// Shared soft transcoder instance.
pub static SOFT: SoftTranscoder = SoftTranscoder;

/// Transcoder that moves values through hardware register `f0`.
///
/// Clobbers `f0`. The architectural `f0` always lives in the software
/// register file and is pushed back into the unit on context exit, so the
/// clobber is never observed by the user program.
#[cfg(target_arch = "riscv64")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HardTranscoder;

#[cfg(target_arch = "riscv64")]
impl Transcode for HardTranscoder {
    fn transcode_widen(&self, bits: u32) -> u64 {
        let mut slot = 0u64;
        // SAFETY: only reachable once the FPU has been enabled by the
        // lifecycle controller; writes 8 bytes through a valid `&mut u64`.
        unsafe {
            core::arch::asm!(
                ".option push",
                ".attribute arch, \"rv64gc\"",
                "fmv.w.x f0, {bits}",
                "fsd f0, ({slot})",
                ".option pop",
                bits = in(reg) bits,
                slot = in(reg) &mut slot,
                options(nostack)
            );
        }
        slot
    }

    fn transcode_narrow(&self, slot: u64) -> u32 {
        let bits: u64;
        // SAFETY: as above; reads 8 bytes through a valid `&u64`.
        unsafe {
            core::arch::asm!(
                ".option push",
                ".attribute arch, \"rv64gc\"",
                "fld f0, ({slot})",
                "fmv.x.w {bits}, f0",
                ".option pop",
                slot = in(reg) &slot,
                bits = lateout(reg) bits,
                options(nostack, readonly)
            );
        }
        bits as u32
    }
}

/// Shared hardware transcoder instance.
#[cfg(target_arch = "riscv64")]
pub static HARD: HardTranscoder = HardTranscoder;

/// Selects the transcoder for a context.
///
/// # Arguments
///
/// * `has_fpu` - Whether a hardware floating-point unit is present.
pub fn select(has_fpu: bool) -> &'static dyn Transcode {
    #[cfg(target_arch = "riscv64")]
    {
        if has_fpu {
            return &HARD;
        }
    }
    let _ = has_fpu;
    &SOFT
}
