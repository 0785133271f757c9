// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 2898, generic over any MAC capability.

use ravelin_core::Mac;
use ravelin_core::limits::MAX_DIGEST_LEN;
use ravelin_util::xor_bytes;
use ravelin_zero::{FastZeroizable, ZeroizingGuard};

/// Maximum salt length the instance stores, in bytes.
pub const MAX_SALT_LEN: usize = 48;

/// PBKDF2 over any [`Mac`].
///
/// One derived block is `F(P, S, c) = U1 ⊕ U2 ⊕ … ⊕ U_iter`, where
/// `U1 = MAC(S ∥ BE32(c))` and `U_i = MAC(U_{i-1})`. Only the running XOR
/// and the previous `U` are kept, never the whole chain. Block `c` is
/// serialized big-endian over 4 bytes; that encoding is part of the interop
/// contract.
///
/// [`read`](Self::read) drains the current block and derives the next one
/// (incrementing `c`) whenever it runs dry, which makes the output an
/// unbounded stream: reading in arbitrary chunk sizes yields the same bytes
/// as one large read.
pub struct Pbkdf2<M: Mac> {
    mac: M,
    salt: [u8; MAX_SALT_LEN],
    salt_len: usize,
    /// Current block index `c`, already incremented for the block held in
    /// `block`. Zero before the first derivation.
    counter: u32,
    iterations: u32,
    /// The most recently derived block.
    block: [u8; MAX_DIGEST_LEN],
    /// Unread bytes remaining in `block`.
    to_read: usize,
}

impl<M: Mac> Pbkdf2<M> {
    /// Wraps `mac` with the given iteration count.
    ///
    /// # Panics
    ///
    /// Panics if `iterations == 0` or the MAC digest exceeds the framework
    /// limit.
    pub fn new(mac: M, iterations: u32) -> Self {
        assert!(iterations >= 1, "PBKDF2 requires at least one iteration");
        assert!(
            M::DIGEST_LEN > 0 && M::DIGEST_LEN <= MAX_DIGEST_LEN,
            "unsupported MAC digest length"
        );

        Self {
            mac,
            salt: [0u8; MAX_SALT_LEN],
            salt_len: 0,
            counter: 0,
            iterations,
            block: [0u8; MAX_DIGEST_LEN],
            to_read: 0,
        }
    }

    /// Starts a new derivation from `password` and `salt`.
    ///
    /// Resets the block counter and the read cursor; previously derived but
    /// unread bytes are discarded and scrubbed.
    ///
    /// # Panics
    ///
    /// Panics if `salt.len() > MAX_SALT_LEN`.
    pub fn begin(&mut self, password: &[u8], salt: &[u8]) {
        assert!(salt.len() <= MAX_SALT_LEN, "salt exceeds storage bound");

        self.mac.set_key(password);

        self.salt.fast_zeroize();
        self.salt[..salt.len()].copy_from_slice(salt);
        self.salt_len = salt.len();

        self.counter = 0;
        self.block.fast_zeroize();
        self.to_read = 0;
    }

    /// Derives block `c + 1` into the internal buffer.
    fn next_block(&mut self) {
        let digest_len = M::DIGEST_LEN;
        self.counter = self.counter.wrapping_add(1);

        let mut u = ZeroizingGuard::new([0u8; MAX_DIGEST_LEN]);
        let mut next = ZeroizingGuard::new([0u8; MAX_DIGEST_LEN]);

        // U1 = MAC(S || BE32(c))
        self.mac.begin();
        self.mac.update(&self.salt[..self.salt_len]);
        self.mac.update(&self.counter.to_be_bytes());
        self.mac.finalize(&mut u[..digest_len]);

        self.block[..digest_len].copy_from_slice(&u[..digest_len]);

        // U_i = MAC(U_{i-1}), folded into the block as produced.
        for _ in 1..self.iterations {
            self.mac.begin();
            self.mac.update(&u[..digest_len]);
            self.mac.finalize(&mut next[..digest_len]);

            u[..digest_len].copy_from_slice(&next[..digest_len]);
            xor_bytes(&mut self.block[..digest_len], &u[..digest_len]);
        }

        self.to_read = digest_len;
    }

    /// Fills `out` with the next bytes of the derived-key stream.
    pub fn read(&mut self, out: &mut [u8]) {
        let digest_len = M::DIGEST_LEN;
        let mut written = 0;

        while written < out.len() {
            if self.to_read == 0 {
                self.next_block();
            }

            let offset = digest_len - self.to_read;
            let take = self.to_read.min(out.len() - written);

            out[written..written + take].copy_from_slice(&self.block[offset..offset + take]);
            self.to_read -= take;
            written += take;
        }
    }
}

impl<M: Mac> FastZeroizable for Pbkdf2<M> {
    fn fast_zeroize(&mut self) {
        self.salt.fast_zeroize();
        self.block.fast_zeroize();
        self.salt_len.fast_zeroize();
        self.to_read.fast_zeroize();
        self.counter.fast_zeroize();
    }
}

impl<M: Mac> Drop for Pbkdf2<M> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
