// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for primitives, slices, and arrays.

use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_zeroize_for_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    // Volatile write: the scrub must not be elided even if
                    // the value is never read again.
                    unsafe { ptr::write_volatile(self, 0) };
                    compiler_fence(Ordering::SeqCst);
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zeroize_for_primitives!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ZeroizeMetadata for bool {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl FastZeroizable for bool {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        unsafe { ptr::write_volatile(self, false) };
        compiler_fence(Ordering::SeqCst);
    }
}

impl ZeroizationProbe for bool {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        !*self
    }
}

impl<T> ZeroizeMetadata for [T]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T> FastZeroizable for [T]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    fn fast_zeroize(&mut self) {
        if T::CAN_BE_BULK_ZEROIZED {
            // Fast path: one bulk memset over the whole slice.
            unsafe { ptr::write_bytes(self.as_mut_ptr(), 0, self.len()) };
        } else {
            for elem in self.iter_mut() {
                elem.fast_zeroize();
            }
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for [T]
where
    T: ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        self.iter().all(ZeroizationProbe::is_zeroized)
    }
}

impl<T, const N: usize> ZeroizeMetadata for [T; N]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T, const N: usize> FastZeroizable for [T; N]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        self.as_mut_slice().fast_zeroize();
    }
}

impl<T, const N: usize> ZeroizationProbe for [T; N]
where
    T: ZeroizationProbe,
{
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}
