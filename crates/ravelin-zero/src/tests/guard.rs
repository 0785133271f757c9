// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{FastZeroizable, ZeroizationProbe, ZeroizingGuard};

#[test]
fn test_guard_scrubs_source_location() {
    let mut secret = [0x42u8; 16];

    let guard = ZeroizingGuard::from_mut(&mut secret);

    assert_eq!(*guard, [0x42u8; 16]);
    assert!(secret.is_zeroized());
}

#[test]
fn test_guard_from_default_is_zeroized() {
    let guard: ZeroizingGuard<[u8; 32]> = ZeroizingGuard::from_default();
    assert!(guard.is_zeroized());
}

#[test]
fn test_guard_new_owns_large_buffers() {
    // Working buffers larger than the array Default limit go through new().
    let mut guard = ZeroizingGuard::new([0u8; 64]);
    guard[63] = 0xff;

    assert!(!guard.is_zeroized());
}

#[test]
fn test_guard_deref_mut() {
    let mut guard: ZeroizingGuard<[u8; 4]> = ZeroizingGuard::from_default();

    guard[0] = 1;
    guard[3] = 9;

    assert_eq!(*guard, [1, 0, 0, 9]);
    assert!(!guard.is_zeroized());
}

#[test]
fn test_guard_explicit_zeroize() {
    let mut secret = [0xffu8; 8];
    let mut guard = ZeroizingGuard::from_mut(&mut secret);

    guard.fast_zeroize();

    assert!(guard.is_zeroized());
}

#[test]
fn test_guard_debug_is_redacted() {
    let mut secret = [0x42u8; 8];
    let guard = ZeroizingGuard::from_mut(&mut secret);

    assert_eq!(format!("{guard:?}"), "[REDACTED ZeroizingGuard]");
}
