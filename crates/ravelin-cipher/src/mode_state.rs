// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned chaining state for cipher modes.

use ravelin_core::limits::MAX_BLOCK_LEN;
use ravelin_zero::{FastZeroizable, ZeroizationProbe};

/// The chaining state of a cipher mode.
///
/// CBC and OFB chain through an initialization vector; CTR chains through a
/// counter. The variant documents which interpretation is in effect, and the
/// state is scrubbed when the mode is dropped.
///
/// Only the first `BLOCK_LEN` bytes of the backing array are meaningful for
/// ciphers with blocks shorter than [`MAX_BLOCK_LEN`].
pub enum ModeState {
    /// An initialization vector / feedback register (CBC, OFB).
    Iv([u8; MAX_BLOCK_LEN]),
    /// A big-endian block counter (CTR).
    Counter([u8; MAX_BLOCK_LEN]),
}

impl ModeState {
    /// Returns the state bytes.
    #[inline(always)]
    pub fn bytes(&self) -> &[u8; MAX_BLOCK_LEN] {
        match self {
            ModeState::Iv(bytes) | ModeState::Counter(bytes) => bytes,
        }
    }

    /// Returns the state bytes mutably.
    #[inline(always)]
    pub fn bytes_mut(&mut self) -> &mut [u8; MAX_BLOCK_LEN] {
        match self {
            ModeState::Iv(bytes) | ModeState::Counter(bytes) => bytes,
        }
    }

    /// Installs caller-provided state into the first `value.len()` bytes.
    #[inline]
    pub(crate) fn install(&mut self, value: &[u8]) {
        let bytes = self.bytes_mut();
        bytes.fast_zeroize();
        bytes[..value.len()].copy_from_slice(value);
    }
}

impl FastZeroizable for ModeState {
    fn fast_zeroize(&mut self) {
        self.bytes_mut().fast_zeroize();
    }
}

impl ZeroizationProbe for ModeState {
    fn is_zeroized(&self) -> bool {
        self.bytes().is_zeroized()
    }
}

impl Drop for ModeState {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
