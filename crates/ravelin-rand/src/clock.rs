// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host-side clock capability.

use std::time::Instant;

use ravelin_core::MonotonicClock;

/// A [`MonotonicClock`] backed by [`std::time::Instant`].
///
/// `ticks` is milliseconds and `cycles` is nanoseconds since construction,
/// both truncated to 32 bits. On an embedded target the integrator supplies
/// real free-running counters instead.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn ticks(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }

    fn cycles(&self) -> u32 {
        self.origin.elapsed().as_nanos() as u32
    }
}
