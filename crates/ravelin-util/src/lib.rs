// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared across the Ravelin framework: in-place XOR for
//! block-mode chaining, constant-time comparison for digests, and small
//! helpers for tests.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::vec::Vec;

/// XORs `src` into `dst` in place.
///
/// This is the block-chaining primitive used by every cipher mode and MAC in
/// the framework: CBC whitening, CTR/OFB keystream application, OMAC subkey
/// mixing.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use ravelin_util::xor_bytes;
///
/// let mut block = [0b1100u8, 0xff];
/// xor_bytes(&mut block, &[0b1010, 0xff]);
/// assert_eq!(block, [0b0110, 0x00]);
/// ```
#[inline]
pub fn xor_bytes(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "xor_bytes length mismatch");

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if the slices are equal. The comparison time does not
/// depend on where the first difference occurs, which matters when the
/// compared value is a MAC digest.
///
/// # Example
///
/// ```
/// use ravelin_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Fills a byte slice with a repeating pattern byte.
///
/// # Example
///
/// ```
/// use ravelin_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 4];
/// fill_bytes_with_pattern(&mut buffer, 0x36);
/// assert_eq!(buffer, [0x36; 4]);
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Used throughout the test suites to express known-answer vectors.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use ravelin_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("2b7e15"), vec![0x2b, 0x7e, 0x15]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}
