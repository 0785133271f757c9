// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The capability contracts implemented by external primitives.

/// A keyed, fixed-block-size invertible permutation (e.g. AES-128).
///
/// Implementations are external to the framework. Block operations work in
/// place on exactly [`BLOCK_LEN`](BlockCipher::BLOCK_LEN) bytes and cannot
/// fail; passing a slice of the wrong length is a caller contract violation.
pub trait BlockCipher {
    /// Key length in bytes.
    const KEY_LEN: usize;

    /// Block length in bytes. The framework supports 8 and 16.
    const BLOCK_LEN: usize;

    /// Installs the key, (re)running any key schedule.
    ///
    /// # Panics
    ///
    /// Panics if `key.len() != Self::KEY_LEN`.
    fn set_key(&mut self, key: &[u8]);

    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut [u8]);
}

/// An incremental message digest (e.g. SHA-1).
///
/// The `reset`/`update`/`finalize` cycle follows the usual streaming shape:
/// after `finalize` the internal state is unspecified and `reset` must be
/// called before the next message.
pub trait Hash {
    /// Digest length in bytes.
    const DIGEST_LEN: usize;

    /// Input block length in bytes (the HMAC pad width).
    const BLOCK_LEN: usize;

    /// Resets the state to the start of a new message.
    fn reset(&mut self);

    /// Absorbs `data` into the running digest.
    fn update(&mut self, data: &[u8]);

    /// Finishes the message and writes the digest.
    ///
    /// # Panics
    ///
    /// Panics if `digest.len() != Self::DIGEST_LEN`.
    fn finalize(&mut self, digest: &mut [u8]);
}

/// A keyed message authentication code.
///
/// The key survives across `begin`/`update`/`finalize` cycles: setting the
/// key once and authenticating many messages is the intended usage.
pub trait Mac {
    /// Digest (tag) length in bytes.
    const DIGEST_LEN: usize;

    /// Installs the key.
    fn set_key(&mut self, key: &[u8]);

    /// Starts authenticating a new message.
    fn begin(&mut self);

    /// Absorbs `data` into the current message.
    fn update(&mut self, data: &[u8]);

    /// Finishes the message and writes the tag.
    ///
    /// # Panics
    ///
    /// Panics if `digest.len() != Self::DIGEST_LEN`.
    fn finalize(&mut self, digest: &mut [u8]);
}

/// A deterministic generator with explicit reseeding.
///
/// Generators do not gather entropy themselves; reseed material comes from
/// the caller, typically out of an entropy accumulator.
pub trait Prng {
    /// Length of the reseed material in bytes.
    const SEED_LEN: usize;

    /// Mixes fresh seed material into the generator state.
    ///
    /// Reseeding perturbs the existing state rather than replacing it, so
    /// seed material of unknown quality can never reduce the entropy
    /// already present.
    ///
    /// # Panics
    ///
    /// Panics if `seed.len() != Self::SEED_LEN`.
    fn reseed(&mut self, seed: &[u8]);

    /// Fills `out` with generator output.
    fn generate(&mut self, out: &mut [u8]);

    /// Returns `true` once the generator has been fed real seed material.
    fn is_seeded(&self) -> bool;
}

/// Non-blocking reads of free-running hardware counters.
///
/// Both reads must return immediately; they are sampled inside generator
/// hot paths. Wrapping is expected and harmless.
pub trait MonotonicClock {
    /// A coarse tick counter (e.g. a scheduler tick).
    fn ticks(&self) -> u32;

    /// A high-resolution counter (e.g. a cycle counter).
    fn cycles(&self) -> u32;
}
