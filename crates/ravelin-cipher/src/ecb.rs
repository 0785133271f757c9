// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ECB passthrough.

use ravelin_core::BlockCipher;
use ravelin_core::limits::MAX_BLOCK_LEN;

/// Electronic codebook: each block passes through the cipher unchained.
///
/// ECB leaks equal-block structure and exists here as the degenerate mode
/// and as the building block the real modes are tested against.
pub struct Ecb<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Ecb<C> {
    /// Wraps `cipher` in ECB mode.
    pub fn new(cipher: C) -> Self {
        assert!(
            C::BLOCK_LEN > 0 && C::BLOCK_LEN <= MAX_BLOCK_LEN,
            "unsupported block length"
        );

        Self { cipher }
    }

    /// Access to the wrapped cipher, e.g. for rekeying.
    pub fn cipher_mut(&mut self) -> &mut C {
        &mut self.cipher
    }

    /// Encrypts one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len() != C::BLOCK_LEN`.
    pub fn encrypt_block(&mut self, block: &mut [u8]) {
        assert_eq!(block.len(), C::BLOCK_LEN, "block length mismatch");
        self.cipher.encrypt_block(block);
    }

    /// Decrypts one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len() != C::BLOCK_LEN`.
    pub fn decrypt_block(&mut self, block: &mut [u8]) {
        assert_eq!(block.len(), C::BLOCK_LEN, "block length mismatch");
        self.cipher.decrypt_block(block);
    }

    /// Encrypts a whole-blocks buffer in place.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of `C::BLOCK_LEN`.
    pub fn encrypt(&mut self, data: &mut [u8]) {
        assert_eq!(data.len() % C::BLOCK_LEN, 0, "data not block-aligned");

        for block in data.chunks_exact_mut(C::BLOCK_LEN) {
            self.cipher.encrypt_block(block);
        }
    }

    /// Decrypts a whole-blocks buffer in place.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of `C::BLOCK_LEN`.
    pub fn decrypt(&mut self, data: &mut [u8]) {
        assert_eq!(data.len() % C::BLOCK_LEN, 0, "data not block-aligned");

        for block in data.chunks_exact_mut(C::BLOCK_LEN) {
            self.cipher.decrypt_block(block);
        }
    }
}
