// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ANSI X9.17 generator over a plugged-in 16-byte block cipher.

use ravelin_core::{BlockCipher, MonotonicClock, Prng};
use ravelin_util::xor_bytes;
use ravelin_zero::FastZeroizable;

const BLOCK_LEN: usize = 16;

/// The ANSI X9.17 generator.
///
/// Each output block mixes a date/time block sampled from the clock with
/// the 16-byte state register through three cipher invocations:
///
/// ```text
/// EDT = E(DT)          DT from ticks/cycles reads
/// R   = E(EDT ⊕ V)     the emitted block
/// V   = E(EDT ⊕ R)     the next state
/// ```
///
/// X9.17 itself defines no reseeding; this implementation adds one (as the
/// surrounding framework requires): a freshly generated block XORed with
/// the first half of the seed becomes the new key, and the rest of the
/// seed is XORed into the state register.
///
/// The key schedule is re-run from the stored key on every operation, so
/// the cipher instance carries no state of its own between calls.
pub struct X917<C: BlockCipher, T: MonotonicClock> {
    cipher: C,
    clock: T,
    key: [u8; BLOCK_LEN],
    state: [u8; BLOCK_LEN],
    seeded: bool,
}

impl<C: BlockCipher, T: MonotonicClock> X917<C, T> {
    /// Wraps `cipher` and `clock` with an all-zero key and state.
    ///
    /// # Panics
    ///
    /// Panics unless the cipher has 16-byte blocks and a 16-byte key
    /// (AES-128 class).
    pub fn new(cipher: C, clock: T) -> Self {
        assert!(
            C::BLOCK_LEN == BLOCK_LEN && C::KEY_LEN == BLOCK_LEN,
            "X9.17 requires a 16-byte-block, 16-byte-key cipher"
        );

        Self {
            cipher,
            clock,
            key: [0u8; BLOCK_LEN],
            state: [0u8; BLOCK_LEN],
            seeded: false,
        }
    }

    /// Produces one output block and advances the state register.
    fn next_block(&mut self, out: &mut [u8; BLOCK_LEN]) {
        self.cipher.set_key(&self.key);

        let ticks = self.clock.ticks().to_be_bytes();
        let cycles = self.clock.cycles().to_be_bytes();

        let mut edt = [0u8; BLOCK_LEN];
        edt[0..4].copy_from_slice(&ticks);
        edt[4..8].copy_from_slice(&cycles);
        edt[8..12].copy_from_slice(&ticks);
        edt[12..16].copy_from_slice(&cycles);

        self.cipher.encrypt_block(&mut edt);

        out.copy_from_slice(&edt);
        xor_bytes(out, &self.state);
        self.cipher.encrypt_block(out);

        self.state.copy_from_slice(&edt);
        xor_bytes(&mut self.state, out);
        self.cipher.encrypt_block(&mut self.state);

        edt.fast_zeroize();
    }
}

impl<C: BlockCipher, T: MonotonicClock> Prng for X917<C, T> {
    const SEED_LEN: usize = 2 * BLOCK_LEN;

    fn reseed(&mut self, seed: &[u8]) {
        assert_eq!(seed.len(), Self::SEED_LEN, "seed length mismatch");

        let mut block = [0u8; BLOCK_LEN];
        self.next_block(&mut block);

        for (key_byte, (generated, seed_byte)) in
            self.key.iter_mut().zip(block.iter().zip(&seed[..BLOCK_LEN]))
        {
            *key_byte = generated ^ seed_byte;
        }
        xor_bytes(&mut self.state, &seed[BLOCK_LEN..]);

        self.seeded = true;
        block.fast_zeroize();
    }

    fn generate(&mut self, out: &mut [u8]) {
        assert!(self.seeded, "X9.17 generator used before reseeding");

        let mut block = [0u8; BLOCK_LEN];
        let mut written = 0;

        while written < out.len() {
            self.next_block(&mut block);

            let take = (out.len() - written).min(BLOCK_LEN);
            out[written..written + take].copy_from_slice(&block[..take]);
            written += take;
        }

        block.fast_zeroize();
    }

    fn is_seeded(&self) -> bool {
        self.seeded
    }
}

impl<C: BlockCipher, T: MonotonicClock> FastZeroizable for X917<C, T> {
    fn fast_zeroize(&mut self) {
        self.key.fast_zeroize();
        self.state.fast_zeroize();
    }
}

impl<C: BlockCipher, T: MonotonicClock> Drop for X917<C, T> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
