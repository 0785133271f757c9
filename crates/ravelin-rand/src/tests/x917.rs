// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_core::Prng;
use ravelin_test_utils::{CountingClock, RefAes128};
use ravelin_util::hex_to_bytes;

use crate::X917;

fn seed(from: u8) -> [u8; 32] {
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = from + i as u8;
    }
    seed
}

fn generator() -> X917<RefAes128, CountingClock> {
    X917::new(RefAes128::new(), CountingClock::new(0x1000, 0x2000))
}

#[test]
fn test_x917_deterministic_under_mock_clock() {
    let mut prng = generator();
    prng.reseed(&seed(0));

    let mut out = [0u8; 40];
    prng.generate(&mut out);

    assert_eq!(
        out.as_slice(),
        hex_to_bytes(
            "033f1045f62019b079d45661a344b9e8b79a673dbff1aa66794a73056dfe5a72024a18c2803c5c69"
        )
    );
}

#[test]
fn test_x917_reseed_rekeys_the_stream() {
    let mut prng = generator();
    prng.reseed(&seed(0));

    let mut before = [0u8; 40];
    prng.generate(&mut before);

    prng.reseed(&seed(32));

    let mut after = [0u8; 16];
    prng.generate(&mut after);

    assert_eq!(after.as_slice(), hex_to_bytes("816c0e57e182f5d4cd6ee57421d7707c"));
    assert_ne!(&before[..16], after.as_slice());
}

#[test]
fn test_x917_block_by_block_matches_bulk() {
    let mut bulk = generator();
    bulk.reseed(&seed(0));
    let mut expected = [0u8; 48];
    bulk.generate(&mut expected);

    let mut stepped = generator();
    stepped.reseed(&seed(0));
    let mut actual = [0u8; 48];
    for chunk in actual.chunks_exact_mut(16) {
        stepped.generate(chunk);
    }

    assert_eq!(actual, expected);
}

#[test]
fn test_x917_seeded_flag() {
    let mut prng = generator();
    assert!(!prng.is_seeded());

    prng.reseed(&seed(0));
    assert!(prng.is_seeded());
}

#[test]
#[should_panic(expected = "used before reseeding")]
fn test_x917_generate_before_reseed_panics() {
    let mut prng = generator();
    let mut out = [0u8; 16];
    prng.generate(&mut out);
}

#[test]
#[should_panic(expected = "seed length mismatch")]
fn test_x917_rejects_short_seed() {
    let mut prng = generator();
    prng.reseed(&[0u8; 16]);
}
