// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher block chaining.

use ravelin_core::BlockCipher;
use ravelin_core::limits::MAX_BLOCK_LEN;
use ravelin_util::xor_bytes;
use ravelin_zero::FastZeroizable;

use crate::mode_state::ModeState;

/// CBC mode over any block cipher.
///
/// Encryption: `block ← E(block ⊕ IV); IV ← block`.
/// Decryption saves the incoming ciphertext before deciphering, so the IV
/// update never reads the block after it has been overwritten — decryption
/// stays correct even when an encrypt and a decrypt share one IV value.
pub struct Cbc<C: BlockCipher> {
    cipher: C,
    state: ModeState,
}

impl<C: BlockCipher> Cbc<C> {
    /// Wraps `cipher` in CBC mode with a zero IV.
    pub fn new(cipher: C) -> Self {
        assert!(
            C::BLOCK_LEN > 0 && C::BLOCK_LEN <= MAX_BLOCK_LEN,
            "unsupported block length"
        );

        Self {
            cipher,
            state: ModeState::Iv([0u8; MAX_BLOCK_LEN]),
        }
    }

    /// Access to the wrapped cipher, e.g. for rekeying.
    pub fn cipher_mut(&mut self) -> &mut C {
        &mut self.cipher
    }

    /// Installs the IV for a new message.
    ///
    /// # Panics
    ///
    /// Panics if `iv.len() != C::BLOCK_LEN`.
    pub fn begin(&mut self, iv: &[u8]) {
        assert_eq!(iv.len(), C::BLOCK_LEN, "IV length mismatch");
        self.state.install(iv);
    }

    /// Encrypts one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len() != C::BLOCK_LEN`.
    pub fn encrypt_block(&mut self, block: &mut [u8]) {
        assert_eq!(block.len(), C::BLOCK_LEN, "block length mismatch");

        let iv = &mut self.state.bytes_mut()[..C::BLOCK_LEN];
        xor_bytes(block, iv);
        self.cipher.encrypt_block(block);
        iv.copy_from_slice(block);
    }

    /// Decrypts one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len() != C::BLOCK_LEN`.
    pub fn decrypt_block(&mut self, block: &mut [u8]) {
        assert_eq!(block.len(), C::BLOCK_LEN, "block length mismatch");

        // The incoming ciphertext becomes the next IV; it must be saved
        // before the in-place decrypt destroys it.
        let mut saved = [0u8; MAX_BLOCK_LEN];
        saved[..C::BLOCK_LEN].copy_from_slice(block);

        self.cipher.decrypt_block(block);

        let iv = &mut self.state.bytes_mut()[..C::BLOCK_LEN];
        xor_bytes(block, iv);
        iv.copy_from_slice(&saved[..C::BLOCK_LEN]);
    }

    /// Encrypts a whole-blocks buffer in place.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of `C::BLOCK_LEN`.
    pub fn encrypt(&mut self, data: &mut [u8]) {
        assert_eq!(data.len() % C::BLOCK_LEN, 0, "data not block-aligned");

        for block in data.chunks_exact_mut(C::BLOCK_LEN) {
            let iv = &mut self.state.bytes_mut()[..C::BLOCK_LEN];
            xor_bytes(block, iv);
            self.cipher.encrypt_block(block);
            self.state.bytes_mut()[..C::BLOCK_LEN].copy_from_slice(block);
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
            self.decrypt_block(block);
        }
    }
}

impl<C: BlockCipher> FastZeroizable for Cbc<C> {
    fn fast_zeroize(&mut self) {
        self.state.fast_zeroize();
    }
}
