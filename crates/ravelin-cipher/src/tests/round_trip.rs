// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use ravelin_core::BlockCipher;
use ravelin_test_utils::RefAes128;

use crate::{Cbc, Ctr, Ofb};

fn keyed(key: &[u8; 16]) -> RefAes128 {
    let mut cipher = RefAes128::new();
    cipher.set_key(key);
    cipher
}

proptest! {
    #[test]
    fn prop_cbc_round_trip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        blocks in prop::collection::vec(any::<[u8; 16]>(), 1..8),
    ) {
        let original: Vec<u8> = blocks.concat();
        let mut data = original.clone();

        let mut cbc = Cbc::new(keyed(&key));
        cbc.begin(&iv);
        cbc.encrypt(&mut data);

        let mut cbc = Cbc::new(keyed(&key));
        cbc.begin(&iv);
        cbc.decrypt(&mut data);

        prop_assert_eq!(data, original);
    }

    #[test]
    fn prop_ctr_round_trip(
        key in any::<[u8; 16]>(),
        counter in any::<[u8; 16]>(),
        blocks in prop::collection::vec(any::<[u8; 16]>(), 1..8),
    ) {
        let original: Vec<u8> = blocks.concat();
        let mut data = original.clone();

        let mut ctr = Ctr::new(keyed(&key));
        ctr.begin(&counter);
        ctr.encrypt(&mut data);

        let mut ctr = Ctr::new(keyed(&key));
        ctr.begin(&counter);
        ctr.decrypt(&mut data);

        prop_assert_eq!(data, original);
    }

    #[test]
    fn prop_ofb_round_trip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        blocks in prop::collection::vec(any::<[u8; 16]>(), 1..8),
    ) {
        let original: Vec<u8> = blocks.concat();
        let mut data = original.clone();

        let mut ofb = Ofb::new(keyed(&key));
        ofb.begin(&iv);
        ofb.encrypt(&mut data);

        let mut ofb = Ofb::new(keyed(&key));
        ofb.begin(&iv);
        ofb.decrypt(&mut data);

        prop_assert_eq!(data, original);
    }
}
