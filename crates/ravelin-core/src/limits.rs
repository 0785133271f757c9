// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed upper bounds for primitive parameters.
//!
//! Internal working buffers across the framework are dimensioned by these
//! constants, so they can live inline in each state struct with no heap
//! allocation. A primitive exceeding a bound is rejected by an assert at
//! construction time.

/// Largest supported cipher block, in bytes (AES-class ciphers).
pub const MAX_BLOCK_LEN: usize = 16;

/// Largest supported hash input block, in bytes (SHA-1/SHA-256 class).
pub const MAX_HASH_BLOCK_LEN: usize = 64;

/// Largest supported digest, in bytes.
pub const MAX_DIGEST_LEN: usize = 64;
