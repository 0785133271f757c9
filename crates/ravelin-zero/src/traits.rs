// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

/// Trait for types that can be scrubbed at runtime.
///
/// After `fast_zeroize` returns, all sensitive data held by the value has
/// been overwritten with zeros. The implementations in this crate issue a
/// `compiler_fence` after writing so the scrub survives dead-store
/// elimination.
pub trait FastZeroizable {
    /// Zeroizes the value in place.
    fn fast_zeroize(&mut self);
}

/// Trait for verifying that a value has been zeroized.
///
/// Used by tests and assertions to check that no sensitive data remains.
///
/// # Example
///
/// ```rust
/// use ravelin_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut value: u32 = 42;
/// assert!(!value.is_zeroized());
///
/// value.fast_zeroize();
/// assert!(value.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if the value is zeroized (all bytes are 0).
    fn is_zeroized(&self) -> bool;
}

/// Metadata about the zeroization strategy for a type.
///
/// - `CAN_BE_BULK_ZEROIZED = true`: all-zeros is a valid bit pattern, so a
///   slice of this type may be scrubbed with one bulk `write_bytes`
///   (primitives).
/// - `CAN_BE_BULK_ZEROIZED = false`: element-by-element recursive
///   zeroization is required (types with pointers or invariants).
pub trait ZeroizeMetadata {
    /// Whether this type can be bulk-zeroized with a memset.
    const CAN_BE_BULK_ZEROIZED: bool;
}
