// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_rand
//!
//! Two independent deterministic generators behind the
//! [`Prng`](ravelin_core::Prng) capability:
//!
//! - [`Isaac`]: Bob Jenkins' ISAAC, pure array mixing with no cipher or
//!   hash dependency
//! - [`X917`]: ANSI X9.17, built on a plugged-in 16-byte block cipher and a
//!   [`MonotonicClock`](ravelin_core::MonotonicClock)
//!
//! Neither gathers entropy on its own. Reseed material comes from the
//! caller — typically the accumulator in `ravelin-entropy` — and reseeding
//! always *perturbs* existing state instead of replacing it, so low-quality
//! seed material cannot reduce whatever entropy the generator already
//! holds.
//!
//! With the `std` feature, [`SystemClock`] provides a host-side
//! [`MonotonicClock`](ravelin_core::MonotonicClock) for X9.17.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
mod tests;

mod isaac;
mod x917;

#[cfg(feature = "std")]
mod clock;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use isaac::Isaac;
pub use x917::X917;
