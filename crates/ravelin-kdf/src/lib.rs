// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_kdf
//!
//! Password-based key derivation per RFC 2898 (PBKDF2), generic over any
//! [`Mac`](ravelin_core::Mac).
//!
//! [`Pbkdf2`] derives an effectively unbounded key stream: successive
//! derived blocks are concatenated and drained through [`Pbkdf2::read`], so
//! callers can pull a 16-byte cipher key now and a 64-byte MAC key later
//! from the same derivation without precomputing either.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_kdf::Pbkdf2;
//! use ravelin_mac::Hmac;
//! use ravelin_test_utils::Sha1;
//!
//! let mut kdf = Pbkdf2::new(Hmac::new(Sha1::new()), 1000);
//! kdf.begin(b"password", b"salt");
//!
//! let mut key = [0u8; 32];
//! kdf.read(&mut key);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod pbkdf2;

pub use pbkdf2::{MAX_SALT_LEN, Pbkdf2};
