// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian counter mode.

use ravelin_core::BlockCipher;
use ravelin_core::limits::MAX_BLOCK_LEN;
use ravelin_util::xor_bytes;
use ravelin_zero::FastZeroizable;

use crate::mode_state::ModeState;

/// CTR mode over any block cipher.
///
/// A stream construction: every keystream block is the encryption of the
/// current counter value, and the counter increments big-endian with a
/// ripple carry over the full block width, wrapping silently when the whole
/// counter overflows. Decryption is the same XOR as encryption; the
/// cipher's decrypt primitive is never used.
pub struct Ctr<C: BlockCipher> {
    cipher: C,
    state: ModeState,
}

impl<C: BlockCipher> Ctr<C> {
    /// Wraps `cipher` in CTR mode with a zero counter.
    pub fn new(cipher: C) -> Self {
        assert!(
            C::BLOCK_LEN > 0 && C::BLOCK_LEN <= MAX_BLOCK_LEN,
            "unsupported block length"
        );

        Self {
            cipher,
            state: ModeState::Counter([0u8; MAX_BLOCK_LEN]),
        }
    }

    /// Access to the wrapped cipher, e.g. for rekeying.
    pub fn cipher_mut(&mut self) -> &mut C {
        &mut self.cipher
    }

    /// Installs the initial counter value for a new message.
    ///
    /// # Panics
    ///
    /// Panics if `counter.len() != C::BLOCK_LEN`.
    pub fn begin(&mut self, counter: &[u8]) {
        assert_eq!(counter.len(), C::BLOCK_LEN, "counter length mismatch");
        self.state.install(counter);
    }

    /// Produces the next keystream block and advances the counter.
    fn step(&mut self, keystream: &mut [u8]) {
        let counter = &mut self.state.bytes_mut()[..C::BLOCK_LEN];
        keystream.copy_from_slice(counter);
        self.cipher.encrypt_block(keystream);

        for byte in counter.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    /// Encrypts one block in place.
    ///
    /// # Panics
    ///
    /// Panics if `block.len() != C::BLOCK_LEN`.
    pub fn encrypt_block(&mut self, block: &mut [u8]) {
        assert_eq!(block.len(), C::BLOCK_LEN, "block length mismatch");

        let mut keystream = [0u8; MAX_BLOCK_LEN];
        self.step(&mut keystream[..C::BLOCK_LEN]);
        xor_bytes(block, &keystream[..C::BLOCK_LEN]);
        keystream.fast_zeroize();
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
            let mut keystream = [0u8; MAX_BLOCK_LEN];
            self.step(&mut keystream[..C::BLOCK_LEN]);
            xor_bytes(block, &keystream[..C::BLOCK_LEN]);
            keystream.fast_zeroize();
        }
    }

    /// Decrypts a whole-blocks buffer in place; same operation as
    /// [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.encrypt(data);
    }
}

impl<C: BlockCipher> FastZeroizable for Ctr<C> {
    fn fast_zeroize(&mut self) {
        self.state.fast_zeroize();
    }
}
