//! User memory operands.
//!
//! 1. **Validation:** Alignment and address-space checks producing [`EffectiveAddress`].
//! 2. **Access:** The [`UserMemory`] back-end trait and its raw-pointer implementation.

/// User memory back ends.
pub mod user;

/// Effective address validation.
pub mod validate;

pub use user::{RawUserMemory, UserMemory};
pub use validate::{EffectiveAddress, validate};
