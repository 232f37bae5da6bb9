//! Effective Address Validation.
//!
//! Every memory operand is checked before it is dereferenced:
//! 1. **Alignment:** The address must be a multiple of the access size.
//! 2. **Membership:** The address must not lie below the user address space.
//!
//! The membership test is a signed comparison, so any address with bit 63 set
//! is treated as negative and rejected. Passing both checks yields an
//! [`EffectiveAddress`], the only type a [`UserMemory`](super::UserMemory)
//! back end accepts.

use crate::common::data::{Direction, Width};
use crate::common::error::{AccessFault, FaultKind};

/// A validated user address.
///
/// Only [`validate`] constructs values of this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectiveAddress {
    addr: u64,
    width: Width,
}

impl EffectiveAddress {
    /// Returns the address.
    #[inline]
    pub const fn get(self) -> u64 {
        self.addr
    }

    /// Returns the access width the address was validated for.
    #[inline]
    pub const fn width(self) -> Width {
        self.width
    }
}

/// Checks whether an access at `addr` of `size` bytes is naturally aligned.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The access width in bytes (a power of two).
#[inline]
pub const fn is_aligned(addr: u64, size: u64) -> bool {
    if size <= 1 {
        return true;
    }
    (addr & (size - 1)) == 0
}

/// Computes a base-plus-displacement address with wrapping arithmetic.
#[inline]
pub const fn effective(base: u64, imm: i64) -> u64 {
    base.wrapping_add(imm as u64)
}

/// Validates an effective address for a load or store.
///
/// # Arguments
///
/// * `addr` - The computed effective address.
/// * `width` - The access width.
/// * `direction` - Whether the access is a load or a store.
/// * `user_start` - The lowest user-addressable address.
///
/// # Returns
///
/// The validated address, or the first failing check as an [`AccessFault`].
pub const fn validate(
    addr: u64,
    width: Width,
    direction: Direction,
    user_start: u64,
) -> Result<EffectiveAddress, AccessFault> {
    if !is_aligned(addr, width.bytes()) {
        return Err(AccessFault {
            direction,
            kind: FaultKind::Misaligned,
            addr,
        });
    }
    if (addr as i64) < (user_start as i64) {
        return Err(AccessFault {
            direction,
            kind: FaultKind::OutOfRange,
            addr,
        });
    }
    Ok(EffectiveAddress { addr, width })
}
