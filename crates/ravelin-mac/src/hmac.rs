// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over any hash capability.

use ravelin_core::limits::{MAX_DIGEST_LEN, MAX_HASH_BLOCK_LEN};
use ravelin_core::{Hash, Mac};
use ravelin_util::fill_bytes_with_pattern;
use ravelin_zero::FastZeroizable;

/// Inner pad byte.
const IPAD: u8 = 0x36;
/// Outer pad byte.
const OPAD: u8 = 0x5c;

/// HMAC over any [`Hash`].
///
/// The key is held in a single buffer, stored in *outer-pad* form
/// (`key ⊕ 0x5c..`). `begin` XORs the buffer with `0x36 ⊕ 0x5c` to obtain
/// the inner-pad form, and `finalize` XORs it back. One buffer thus serves
/// both pads without ever holding two live copies of the key — the XOR
/// toggles must stay exactly paired or the key material is corrupted.
pub struct Hmac<H: Hash> {
    hash: H,
    /// Padded key in outer form, except between `begin` and `finalize`
    /// where it carries the inner form.
    key: [u8; MAX_HASH_BLOCK_LEN],
}

impl<H: Hash> Hmac<H> {
    /// Wraps `hash` with an all-zero key.
    pub fn new(hash: H) -> Self {
        assert!(
            H::BLOCK_LEN <= MAX_HASH_BLOCK_LEN,
            "hash block length exceeds framework limit"
        );
        assert!(
            H::DIGEST_LEN <= MAX_DIGEST_LEN && H::DIGEST_LEN <= H::BLOCK_LEN,
            "unsupported digest length"
        );

        let mut hmac = Self {
            hash,
            key: [0u8; MAX_HASH_BLOCK_LEN],
        };
        fill_bytes_with_pattern(&mut hmac.key[..H::BLOCK_LEN], OPAD);
        hmac
    }
}

impl<H: Hash> Mac for Hmac<H> {
    const DIGEST_LEN: usize = H::DIGEST_LEN;

    fn set_key(&mut self, key: &[u8]) {
        fill_bytes_with_pattern(&mut self.key[..H::BLOCK_LEN], OPAD);

        if key.len() > H::BLOCK_LEN {
            // Keys longer than the hash block are hashed down first.
            let mut digest = [0u8; MAX_DIGEST_LEN];
            self.hash.reset();
            self.hash.update(key);
            self.hash.finalize(&mut digest[..H::DIGEST_LEN]);

            for (stored, byte) in self.key.iter_mut().zip(&digest[..H::DIGEST_LEN]) {
                *stored ^= byte;
            }
            digest.fast_zeroize();
        } else {
            for (stored, byte) in self.key.iter_mut().zip(key) {
                *stored ^= byte;
            }
        }
    }

    fn begin(&mut self) {
        // Outer-pad form -> inner-pad form.
        for byte in &mut self.key[..H::BLOCK_LEN] {
            *byte ^= IPAD ^ OPAD;
        }

        self.hash.reset();
        self.hash.update(&self.key[..H::BLOCK_LEN]);
    }

    fn update(&mut self, data: &[u8]) {
        self.hash.update(data);
    }

    fn finalize(&mut self, digest: &mut [u8]) {
        assert_eq!(digest.len(), H::DIGEST_LEN, "digest length mismatch");

        let mut inner = [0u8; MAX_DIGEST_LEN];
        self.hash.finalize(&mut inner[..H::DIGEST_LEN]);

        // Inner-pad form -> outer-pad form; the stored key is whole again.
        for byte in &mut self.key[..H::BLOCK_LEN] {
            *byte ^= OPAD ^ IPAD;
        }

        self.hash.reset();
        self.hash.update(&self.key[..H::BLOCK_LEN]);
        self.hash.update(&inner[..H::DIGEST_LEN]);
        self.hash.finalize(digest);

        inner.fast_zeroize();
    }
}

impl<H: Hash> FastZeroizable for Hmac<H> {
    fn fast_zeroize(&mut self) {
        self.key.fast_zeroize();
    }
}

impl<H: Hash> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
