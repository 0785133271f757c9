// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic clock mock.

use core::cell::Cell;

use ravelin_core::MonotonicClock;

/// A deterministic [`MonotonicClock`] for tests.
///
/// Every `ticks()` read returns the previous value plus 1; every `cycles()`
/// read returns the previous value plus 7. Generators sampled against this
/// clock produce reproducible output.
pub struct CountingClock {
    ticks: Cell<u32>,
    cycles: Cell<u32>,
}

impl CountingClock {
    /// Creates a clock starting at the given counter values.
    pub fn new(ticks: u32, cycles: u32) -> Self {
        Self {
            ticks: Cell::new(ticks),
            cycles: Cell::new(cycles),
        }
    }
}

impl MonotonicClock for CountingClock {
    fn ticks(&self) -> u32 {
        let value = self.ticks.get();
        self.ticks.set(value.wrapping_add(1));
        value
    }

    fn cycles(&self) -> u32 {
        let value = self.cycles.get();
        self.cycles.set(value.wrapping_add(7));
        value
    }
}
