// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_core::{BlockCipher, Mac};
use ravelin_test_utils::{RefAes128, RefAes192, RefAes256};
use ravelin_util::hex_to_bytes;

use crate::Omac;

const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KEY_192: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

const MESSAGE_64: &str = "6bc1bee22e409f96e93d7e117393172a\
                          ae2d8a571e03ac9c9eb76fac45af8e51\
                          30c81c46a35ce411e5fbc1191a0a52ef\
                          f69f2445df4f9b17ad2b417be66c3710";

fn omac1_aes128(key_hex: &str, message: &[u8]) -> [u8; 16] {
    let mut cipher = RefAes128::new();
    cipher.set_key(&hex_to_bytes(key_hex));

    let mut mac = Omac::omac1(cipher);
    mac.begin();
    mac.update(message);

    let mut digest = [0u8; 16];
    mac.finalize(&mut digest);
    digest
}

fn omac2_aes128(key_hex: &str, message: &[u8]) -> [u8; 16] {
    let mut cipher = RefAes128::new();
    cipher.set_key(&hex_to_bytes(key_hex));

    let mut mac = Omac::omac2(cipher);
    mac.begin();
    mac.update(message);

    let mut digest = [0u8; 16];
    mac.finalize(&mut digest);
    digest
}

// RFC 4493 section 4 examples.

#[test]
fn test_omac1_aes128_empty_message() {
    let digest = omac1_aes128(KEY_128, b"");
    assert_eq!(digest.as_slice(), hex_to_bytes("bb1d6929e95937287fa37d129b756746"));
}

#[test]
fn test_omac1_aes128_one_block() {
    let digest = omac1_aes128(KEY_128, &hex_to_bytes(MESSAGE_64)[..16]);
    assert_eq!(digest.as_slice(), hex_to_bytes("070a16b46b4d4144f79bdd9dd04a287c"));
}

#[test]
fn test_omac1_aes128_partial_tail() {
    // 40 bytes: two full blocks plus a short final block.
    let digest = omac1_aes128(KEY_128, &hex_to_bytes(MESSAGE_64)[..40]);
    assert_eq!(digest.as_slice(), hex_to_bytes("dfa66747de9ae63030ca32611497c827"));
}

#[test]
fn test_omac1_aes128_four_blocks() {
    let digest = omac1_aes128(KEY_128, &hex_to_bytes(MESSAGE_64));
    assert_eq!(digest.as_slice(), hex_to_bytes("51f0bebf7e3b9d92fc49741779363cfe"));
}

// NIST SP 800-38B AES-192/AES-256 vectors.

#[test]
fn test_omac1_aes192() {
    let message = hex_to_bytes(MESSAGE_64);

    let mut cipher = RefAes192::new();
    cipher.set_key(&hex_to_bytes(KEY_192));
    let mut mac = Omac::omac1(cipher);

    let mut digest = [0u8; 16];

    mac.begin();
    mac.finalize(&mut digest);
    assert_eq!(digest.as_slice(), hex_to_bytes("d17ddf46adaacde531cac483de7a9367"));

    mac.begin();
    mac.update(&message[..16]);
    mac.finalize(&mut digest);
    assert_eq!(digest.as_slice(), hex_to_bytes("9e99a7bf31e710900662f65e617c5184"));

    mac.begin();
    mac.update(&message);
    mac.finalize(&mut digest);
    assert_eq!(digest.as_slice(), hex_to_bytes("a1d5df0eed790f794d77589659f39a11"));
}

#[test]
fn test_omac1_aes256() {
    let message = hex_to_bytes(MESSAGE_64);

    let mut cipher = RefAes256::new();
    cipher.set_key(&hex_to_bytes(KEY_256));
    let mut mac = Omac::omac1(cipher);

    let mut digest = [0u8; 16];

    mac.begin();
    mac.finalize(&mut digest);
    assert_eq!(digest.as_slice(), hex_to_bytes("028962f61b7bf89efc6b551f4667d983"));

    mac.begin();
    mac.update(&message[..16]);
    mac.finalize(&mut digest);
    assert_eq!(digest.as_slice(), hex_to_bytes("28a7023f452e8f82bd4bf28d8c37c35c"));

    mac.begin();
    mac.update(&message);
    mac.finalize(&mut digest);
    assert_eq!(digest.as_slice(), hex_to_bytes("e1992190549f6ed5696a2c056c315410"));
}

// OMAC2 differs from OMAC1 only for partial (including empty) final blocks.

#[test]
fn test_omac2_aes128_empty_message() {
    let digest = omac2_aes128(KEY_128, b"");
    assert_eq!(digest.as_slice(), hex_to_bytes("f6bc6a41f4f84593809e59b719299cfe"));
}

#[test]
fn test_omac2_aes128_partial_tail() {
    let digest = omac2_aes128(KEY_128, &hex_to_bytes(MESSAGE_64)[..40]);
    assert_eq!(digest.as_slice(), hex_to_bytes("23fdaa0831cd314491ce4b25acb6023b"));
}

#[test]
fn test_omac2_matches_omac1_on_full_blocks() {
    let message = hex_to_bytes(MESSAGE_64);

    for len in [16, 32, 64] {
        assert_eq!(
            omac1_aes128(KEY_128, &message[..len]),
            omac2_aes128(KEY_128, &message[..len]),
        );
    }
}

#[test]
fn test_omac_update_chunking_is_equivalent() {
    let message = hex_to_bytes(MESSAGE_64);

    let mut cipher = RefAes128::new();
    cipher.set_key(&hex_to_bytes(KEY_128));
    let mut mac = Omac::omac1(cipher);

    mac.begin();
    for chunk in message.chunks(7) {
        mac.update(chunk);
    }

    let mut chunked = [0u8; 16];
    mac.finalize(&mut chunked);

    assert_eq!(chunked, omac1_aes128(KEY_128, &message));
}

#[test]
fn test_omac_instance_is_reusable() {
    let mut cipher = RefAes128::new();
    cipher.set_key(&hex_to_bytes(KEY_128));
    let mut mac = Omac::omac1(cipher);

    let mut first = [0u8; 16];
    mac.begin();
    mac.update(b"some bytes");
    mac.finalize(&mut first);

    let mut second = [0u8; 16];
    mac.begin();
    mac.update(b"some bytes");
    mac.finalize(&mut second);

    assert_eq!(first, second);
}
