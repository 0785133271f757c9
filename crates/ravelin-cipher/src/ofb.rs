// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Output feedback mode.

use ravelin_core::BlockCipher;
use ravelin_core::limits::MAX_BLOCK_LEN;
use ravelin_util::xor_bytes;
use ravelin_zero::FastZeroizable;

use crate::mode_state::ModeState;

/// OFB mode over any block cipher.
///
/// A stream construction: the feedback register is re-encrypted in place
/// before each block (`IV ← E(IV)`) and the data is XORed with the
/// post-step register. Decryption is identical to encryption; the cipher's
/// decrypt primitive is never used.
pub struct Ofb<C: BlockCipher> {
    cipher: C,
    state: ModeState,
}

impl<C: BlockCipher> Ofb<C> {
    /// Wraps `cipher` in OFB mode with a zero feedback register.
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

    /// Advances the feedback register: `IV ← E(IV)`.
    fn step(&mut self) {
        self.cipher
            .encrypt_block(&mut self.state.bytes_mut()[..C::BLOCK_LEN]);
    }

    /// Encrypts one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len() != C::BLOCK_LEN`.
    pub fn encrypt_block(&mut self, block: &mut [u8]) {
        assert_eq!(block.len(), C::BLOCK_LEN, "block length mismatch");

        self.step();
        xor_bytes(block, &self.state.bytes()[..C::BLOCK_LEN]);
    }

    /// Decrypts one block in place. XOR is self-inverse, so this *is*
    /// [`encrypt_block`](Self::encrypt_block).
    pub fn decrypt_block(&mut self, block: &mut [u8]) {
        self.encrypt_block(block);
    }

    /// Encrypts a whole-blocks buffer in place.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of `C::BLOCK_LEN`.
    pub fn encrypt(&mut self, data: &mut [u8]) {
        assert_eq!(data.len() % C::BLOCK_LEN, 0, "data not block-aligned");

        for block in data.chunks_exact_mut(C::BLOCK_LEN) {
            self.step();
            xor_bytes(block, &self.state.bytes()[..C::BLOCK_LEN]);
        }
    }

    /// Decrypts a whole-blocks buffer in place; same operation as
    /// [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.encrypt(data);
    }
}

impl<C: BlockCipher> FastZeroizable for Ofb<C> {
    fn fast_zeroize(&mut self) {
        self.state.fast_zeroize();
    }
}
