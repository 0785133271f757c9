// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 adapter over the `sha2` crate.

use ravelin_core::Hash;
use sha2::Digest;

/// SHA-256, adapting `sha2::Sha256` to the framework's [`Hash`] capability.
///
/// Demonstrates that any ecosystem digest can back the hash-generic layers
/// (HMAC, the entropy accumulator) without Ravelin implementing one.
pub struct Sha256 {
    inner: sha2::Sha256,
}

impl Sha256 {
    /// Creates a fresh hash state.
    pub fn new() -> Self {
        Self {
            inner: sha2::Sha256::new(),
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash for Sha256 {
    const DIGEST_LEN: usize = 32;
    const BLOCK_LEN: usize = 64;

    fn reset(&mut self) {
        Digest::reset(&mut self.inner);
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize(&mut self, digest: &mut [u8]) {
        assert_eq!(digest.len(), Self::DIGEST_LEN, "digest length mismatch");
        digest.copy_from_slice(&self.inner.finalize_reset());
    }
}
