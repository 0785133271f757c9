// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_util::fill_bytes_with_pattern;

#[test]
fn test_fill_bytes_with_pattern() {
    let mut buffer = [0u8; 8];

    fill_bytes_with_pattern(&mut buffer, 0x5c);
    assert!(buffer.iter().all(|&b| b == 0x5c));

    fill_bytes_with_pattern(&mut buffer, 0);
    assert!(buffer.iter().all(|&b| b == 0));
}

#[test]
fn test_fill_bytes_with_pattern_empty() {
    let mut buffer: [u8; 0] = [];
    fill_bytes_with_pattern(&mut buffer, 0xab);
}
