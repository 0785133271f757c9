// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_entropy
//!
//! A Yarrow-style entropy accumulator, generic over any
//! [`Hash`](ravelin_core::Hash).
//!
//! Samples from up to `SOURCES` independent noise sources are hashed into
//! two pools; each source alternates between the *fast* pool (frequent,
//! optimistic reseeds) and the *slow* pool (rare, conservative reseeds).
//! [`Yarrow::seeding_ready`] reports when either pool's policy threshold is
//! met, and [`Yarrow::make_seed`] emits reseed material for a
//! [`Prng`](ravelin_core::Prng), one-way derived through a long chain of
//! hash iterations so a later state compromise cannot be run backwards to
//! recover earlier seeds.
//!
//! Entropy sources are external and untrusted: sample validation is the one
//! fallible path in the whole framework ([`EntropyError`]), and per-sample
//! entropy claims are capped by a density policy so a faulty source cannot
//! credit itself with unlimited entropy.
//!
//! Thresholds, the density cap, and the iteration count are policy, not
//! protocol; see [`AccumulatorConfig`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod yarrow;

pub use error::EntropyError;
pub use yarrow::{AccumulatorConfig, Yarrow};
