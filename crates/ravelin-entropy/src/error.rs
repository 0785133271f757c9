// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Entropy-sample validation error.
///
/// Sources are external and untrusted, so malformed samples are rejected
/// with an error instead of an assertion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The source id is outside the configured source table.
    #[error("entropy source id {source} is out of range")]
    UnknownSource {
        /// The offending source id.
        source: usize,
    },

    /// The sample carried no data.
    #[error("entropy sample is empty")]
    EmptySample,

    /// The source claimed more entropy than the sample physically holds.
    #[error("claimed {claimed} bits of entropy but the sample holds only {available}")]
    InvalidEntropyClaim {
        /// Bits of entropy the source claimed.
        claimed: u32,
        /// Bits the sample actually contains.
        available: u32,
    },
}
