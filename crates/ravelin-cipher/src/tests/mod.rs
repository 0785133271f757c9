// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod ecb;
mod round_trip;

use ravelin_core::BlockCipher;
use ravelin_test_utils::RefAes128;
use ravelin_util::hex_to_bytes;

/// SP 800-38A F.1-F.5 common key and plaintext.
pub(crate) const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
pub(crate) const PLAINTEXT_64: &str = "6bc1bee22e409f96e93d7e117393172a\
                                       ae2d8a571e03ac9c9eb76fac45af8e51\
                                       30c81c46a35ce411e5fbc1191a0a52ef\
                                       f69f2445df4f9b17ad2b417be66c3710";

pub(crate) fn aes128(key_hex: &str) -> RefAes128 {
    let mut cipher = RefAes128::new();
    cipher.set_key(&hex_to_bytes(key_hex));
    cipher
}
