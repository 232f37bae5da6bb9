//! User Memory Access.
//!
//! Loads and stores on behalf of the trapped program. Back ends only accept
//! [`EffectiveAddress`] values, so every access has passed validation.

use super::validate::EffectiveAddress;

/// Memory reachable at validated user addresses.
pub trait UserMemory {
    /// Reads 4 bytes.
    fn load_u32(&mut self, addr: EffectiveAddress) -> u32;

    /// Reads 8 bytes.
    fn load_u64(&mut self, addr: EffectiveAddress) -> u64;

    /// Writes 4 bytes.
    fn store_u32(&mut self, addr: EffectiveAddress, value: u32);

    /// Writes 8 bytes.
    fn store_u64(&mut self, addr: EffectiveAddress, value: u64);
}

/// Direct pointer access to the current address space.
///
/// For use inside a kernel trap handler where user memory is mapped at the
/// addresses the program sees.
#[derive(Debug)]
pub struct RawUserMemory {
    _private: (),
}

impl RawUserMemory {
    /// Creates a raw accessor.
    ///
    /// # Safety
    ///
    /// Every address at or above the configured user bound that passes
    /// alignment validation must be mapped, readable, and writable for the
    /// lifetime of the returned value.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl UserMemory for RawUserMemory {
    fn load_u32(&mut self, addr: EffectiveAddress) -> u32 {
        // SAFETY: aligned and in the user range per `EffectiveAddress`;
        // mapping guaranteed by the `new` contract.
        unsafe { (addr.get() as *const u32).read_volatile() }
    }

    fn load_u64(&mut self, addr: EffectiveAddress) -> u64 {
        // SAFETY: see `load_u32`.
        unsafe { (addr.get() as *const u64).read_volatile() }
    }

    fn store_u32(&mut self, addr: EffectiveAddress, value: u32) {
        // SAFETY: see `load_u32`.
        unsafe { (addr.get() as *mut u32).write_volatile(value) }
    }

    fn store_u64(&mut self, addr: EffectiveAddress, value: u64) {
        // SAFETY: see `load_u32`.
        unsafe { (addr.get() as *mut u64).write_volatile(value) }
    }
}
