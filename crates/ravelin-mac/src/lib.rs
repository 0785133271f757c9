// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_mac
//!
//! Message authentication codes over pluggable primitives:
//!
//! - [`Hmac`]: RFC 2104 HMAC over any [`Hash`](ravelin_core::Hash)
//! - [`Omac`]: OMAC/CMAC over any [`BlockCipher`](ravelin_core::BlockCipher),
//!   with OMAC1 and OMAC2 finalization selected at construction
//!
//! Both implement the [`Mac`](ravelin_core::Mac) capability, so anything
//! generic over a MAC (the PBKDF2 implementation in `ravelin-kdf`, for
//! instance) accepts either.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_core::Mac;
//! use ravelin_mac::Hmac;
//! use ravelin_test_utils::Sha1;
//!
//! let mut mac = Hmac::new(Sha1::new());
//! mac.set_key(b"key");
//! mac.begin();
//! mac.update(b"message");
//!
//! let mut tag = [0u8; 20];
//! mac.finalize(&mut tag);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod hmac;
mod omac;

pub use hmac::Hmac;
pub use omac::Omac;
