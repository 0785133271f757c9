// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_zero
//!
//! Systematic zeroization for the Ravelin framework.
//!
//! Key schedules, chaining values, and derived-key blocks must not outlive
//! the operation that produced them. This crate provides the two tools the
//! rest of the stack uses to enforce that:
//!
//! - [`FastZeroizable`]: scrub a value in place, with a compiler fence so the
//!   writes cannot be elided as dead stores.
//! - [`ZeroizingGuard`]: RAII wrapper for an owned sensitive value that
//!   scrubs it on drop, covering early returns and panics.
//!
//! [`ZeroizationProbe`] exists so tests can verify that scrubbing actually
//! happened.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_zero::{FastZeroizable, ZeroizationProbe, ZeroizingGuard};
//!
//! let mut round_key = [0x42u8; 16];
//! round_key.fast_zeroize();
//! assert!(round_key.is_zeroized());
//!
//! let guard: ZeroizingGuard<[u8; 32]> = ZeroizingGuard::from_default();
//! assert!(guard.is_zeroized());
//! // guard scrubs its contents when it goes out of scope
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod guard;
mod primitives;
mod traits;

pub use guard::ZeroizingGuard;
pub use traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
