// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_core::Hash;
use ravelin_util::hex_to_bytes;

use crate::Sha1;

fn sha1(data: &[u8]) -> [u8; 20] {
    let mut hash = Sha1::new();
    hash.update(data);

    let mut digest = [0u8; 20];
    hash.finalize(&mut digest);
    digest
}

#[test]
fn test_sha1_empty() {
    assert_eq!(
        sha1(b"").as_slice(),
        hex_to_bytes("da39a3ee5e6b4b0d3255bfef95601890afd80709")
    );
}

#[test]
fn test_sha1_abc() {
    assert_eq!(
        sha1(b"abc").as_slice(),
        hex_to_bytes("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
}

#[test]
fn test_sha1_two_block_message() {
    // 56 bytes forces the length padding into a second block.
    assert_eq!(
        sha1(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").as_slice(),
        hex_to_bytes("84983e441c3bd26ebaae4aa1f95129e5e54670f1")
    );
}

#[test]
fn test_sha1_chunked_update_matches_one_shot() {
    let message = b"The quick brown fox jumps over the lazy dog";

    let mut hash = Sha1::new();
    for chunk in message.chunks(5) {
        hash.update(chunk);
    }

    let mut chunked = [0u8; 20];
    hash.finalize(&mut chunked);

    assert_eq!(chunked, sha1(message));
}

#[test]
fn test_sha1_reset_reuses_state() {
    let mut hash = Sha1::new();
    hash.update(b"discarded");
    hash.reset();
    hash.update(b"abc");

    let mut digest = [0u8; 20];
    hash.finalize(&mut digest);

    assert_eq!(digest, sha1(b"abc"));
}
