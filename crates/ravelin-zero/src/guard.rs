// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for owned values that auto-zeroizes on drop.

use alloc::boxed::Box;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe};

/// RAII guard for an owned sensitive value.
///
/// `ZeroizingGuard` wraps an owned value `T` in a `Box` and scrubs it when
/// the guard is dropped, including on early return and unwinding. The box
/// keeps the value at a single heap location, so moves of the guard do not
/// leave stray stack copies of the plaintext behind.
///
/// # Usage
///
/// ```rust
/// use ravelin_zero::{ZeroizingGuard, ZeroizationProbe};
///
/// let mut derived = [0x5au8; 20];
/// let guard = ZeroizingGuard::from_mut(&mut derived);
/// assert_eq!(*guard, [0x5au8; 20]);
/// assert!(derived.is_zeroized()); // source location already scrubbed
/// // *guard is scrubbed when the guard drops
/// ```
pub struct ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    inner: Box<T>,
}

impl<T> fmt::Debug for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingGuard]")
    }
}

impl<T> ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    /// Creates a guard owning `value`.
    ///
    /// Intended for values that are not yet sensitive at construction time
    /// (typically an all-zero working buffer that gets filled later); a
    /// value that already carries secrets should go through
    /// [`from_mut`](Self::from_mut) so the source location is scrubbed.
    pub fn new(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }
}

impl<T> ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    /// Creates a guard by swapping the value out of `value` and scrubbing
    /// the source location.
    pub fn from_mut(value: &mut T) -> Self {
        let mut boxed = Box::new(T::default());
        mem::swap(&mut *boxed, value);
        value.fast_zeroize();

        Self { inner: boxed }
    }

    /// Creates a guard holding `T::default()`.
    #[inline(always)]
    pub fn from_default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Deref for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> FastZeroizable for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn fast_zeroize(&mut self) {
        self.inner.fast_zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<T> Drop for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe,
{
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
