// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_util::hex_to_bytes;

use crate::Ecb;
use crate::tests::{KEY_128, aes128};

#[test]
fn test_ecb_sp800_38a_first_block() {
    // SP 800-38A F.1.1 ECB-AES128.Encrypt, block #1
    let mut ecb = Ecb::new(aes128(KEY_128));

    let mut block = hex_to_bytes("6bc1bee22e409f96e93d7e117393172a");
    ecb.encrypt_block(&mut block);

    assert_eq!(block, hex_to_bytes("3ad77bb40d7a3660a89ecaf32466ef97"));
}

#[test]
fn test_ecb_round_trip_multi_block() {
    let mut ecb = Ecb::new(aes128(KEY_128));

    let original = hex_to_bytes(crate::tests::PLAINTEXT_64);
    let mut data = original.clone();

    ecb.encrypt(&mut data);
    assert_ne!(data, original);

    ecb.decrypt(&mut data);
    assert_eq!(data, original);
}

#[test]
#[should_panic(expected = "data not block-aligned")]
fn test_ecb_rejects_partial_block() {
    let mut ecb = Ecb::new(aes128(KEY_128));
    let mut data = [0u8; 20];
    ecb.encrypt(&mut data);
}
