// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OMAC/CMAC over any block cipher, with OMAC1 and OMAC2 finalization.

use ravelin_core::limits::MAX_BLOCK_LEN;
use ravelin_core::{BlockCipher, Mac};
use ravelin_util::xor_bytes;
use ravelin_zero::FastZeroizable;

/// Which finalization the instance applies to the last block.
#[derive(Clone, Copy, PartialEq, Eq)]
enum OmacVariant {
    /// OMAC1 (CMAC, RFC 4493): partial blocks use `L·x²`.
    Omac1,
    /// OMAC2: partial blocks use `L·x⁻¹`.
    Omac2,
}

/// OMAC over any [`BlockCipher`] with an 8- or 16-byte block.
///
/// Data is buffered into an accumulation block and flushed through a CBC
/// step (`Y ← E(block ⊕ Y)`) only when more data follows, so the final
/// block — full or short — is always still in the buffer when `finalize`
/// runs. OMAC1 and OMAC2 share everything except how the subkey for a
/// partial final block is derived; the variant is fixed at construction.
///
/// The digest length equals the cipher block length.
pub struct Omac<C: BlockCipher> {
    cipher: C,
    /// CBC chaining value.
    y: [u8; MAX_BLOCK_LEN],
    /// Accumulation buffer for the current block.
    accum: [u8; MAX_BLOCK_LEN],
    /// Fill level of `accum`, always `<= C::BLOCK_LEN`.
    acc: usize,
    variant: OmacVariant,
}

impl<C: BlockCipher> Omac<C> {
    /// Creates an OMAC1 (CMAC) instance.
    pub fn omac1(cipher: C) -> Self {
        Self::with_variant(cipher, OmacVariant::Omac1)
    }

    /// Creates an OMAC2 instance.
    pub fn omac2(cipher: C) -> Self {
        Self::with_variant(cipher, OmacVariant::Omac2)
    }

    fn with_variant(cipher: C, variant: OmacVariant) -> Self {
        assert!(
            C::BLOCK_LEN == 8 || C::BLOCK_LEN == 16,
            "OMAC requires an 8- or 16-byte cipher block"
        );

        Self {
            cipher,
            y: [0u8; MAX_BLOCK_LEN],
            accum: [0u8; MAX_BLOCK_LEN],
            acc: 0,
            variant,
        }
    }

    /// CBC step: `Y ← E(accum ⊕ Y)`, emptying the accumulator.
    fn flush(&mut self) {
        let n = C::BLOCK_LEN;
        xor_bytes(&mut self.y[..n], &self.accum[..n]);
        self.cipher.encrypt_block(&mut self.y[..n]);
        self.acc = 0;
    }
}

impl<C: BlockCipher> Mac for Omac<C> {
    const DIGEST_LEN: usize = C::BLOCK_LEN;

    fn set_key(&mut self, key: &[u8]) {
        self.cipher.set_key(key);
    }

    fn begin(&mut self) {
        self.y.fast_zeroize();
        self.accum.fast_zeroize();
        self.acc = 0;
    }

    fn update(&mut self, data: &[u8]) {
        let n = C::BLOCK_LEN;
        let mut data = data;

        while !data.is_empty() {
            // Flush lazily: a full accumulator is only encrypted once more
            // data arrives, keeping the final block buffered for finalize.
            if self.acc == n {
                self.flush();
            }

            let take = (n - self.acc).min(data.len());
            self.accum[self.acc..self.acc + take].copy_from_slice(&data[..take]);
            self.acc += take;
            data = &data[take..];
        }
    }

    fn finalize(&mut self, digest: &mut [u8]) {
        let n = C::BLOCK_LEN;
        assert_eq!(digest.len(), n, "digest length mismatch");

        // L = E(0^n)
        let mut subkey = [0u8; MAX_BLOCK_LEN];
        self.cipher.encrypt_block(&mut subkey[..n]);

        if self.acc == n {
            gf2_dbl(&mut subkey[..n]);
        } else {
            // Pad the short (possibly empty) block: 0x80 then zeros.
            self.accum[self.acc] = 0x80;
            for byte in &mut self.accum[self.acc + 1..n] {
                *byte = 0;
            }

            match self.variant {
                OmacVariant::Omac1 => {
                    gf2_dbl(&mut subkey[..n]);
                    gf2_dbl(&mut subkey[..n]);
                }
                OmacVariant::Omac2 => gf2_halve(&mut subkey[..n]),
            }
        }

        xor_bytes(&mut self.accum[..n], &subkey[..n]);
        xor_bytes(&mut self.y[..n], &self.accum[..n]);
        self.cipher.encrypt_block(&mut self.y[..n]);

        digest.copy_from_slice(&self.y[..n]);
        subkey.fast_zeroize();
    }
}

impl<C: BlockCipher> FastZeroizable for Omac<C> {
    fn fast_zeroize(&mut self) {
        self.y.fast_zeroize();
        self.accum.fast_zeroize();
        self.acc.fast_zeroize();
    }
}

impl<C: BlockCipher> Drop for Omac<C> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

/// Doubles `block` in GF(2^n): left shift by one bit across the array,
/// folding the reduction constant into the last byte when the shifted-out
/// top bit was set (0x87 for 16-byte blocks, 0x1B for 8-byte).
fn gf2_dbl(block: &mut [u8]) {
    let reduction: u8 = if block.len() == 16 { 0x87 } else { 0x1b };
    let carry = block[0] & 0x80 != 0;
    let last = block.len() - 1;

    for i in 0..last {
        block[i] = (block[i] << 1) | (block[i + 1] >> 7);
    }
    block[last] <<= 1;

    if carry {
        block[last] ^= reduction;
    }
}

/// Halves `block` in GF(2^n): right shift by one bit across the array; when
/// the shifted-out low bit was set, the vacated top bit of the first byte is
/// filled and the reduction constant lands in the last byte (0x43 for
/// 16-byte blocks, 0x0D for 8-byte).
fn gf2_halve(block: &mut [u8]) {
    let reduction: u8 = if block.len() == 16 { 0x43 } else { 0x0d };
    let carry = block[block.len() - 1] & 0x01 != 0;
    let last = block.len() - 1;

    for i in (1..=last).rev() {
        block[i] = (block[i] >> 1) | (block[i - 1] << 7);
    }
    block[0] >>= 1;

    if carry {
        block[last] ^= reduction;
        block[0] ^= 0x80;
    }
}
