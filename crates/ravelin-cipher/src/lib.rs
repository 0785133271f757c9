// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_cipher
//!
//! Modes of operation over any [`BlockCipher`](ravelin_core::BlockCipher):
//!
//! - [`Ecb`]: raw per-block passthrough
//! - [`Cbc`]: cipher block chaining
//! - [`Ctr`]: big-endian counter mode (stream construction)
//! - [`Ofb`]: output feedback (stream construction)
//!
//! CTR and OFB are built purely from block *encryption*; decryption is the
//! same XOR operation. Only CBC decryption ever touches the cipher's
//! decrypt primitive.
//!
//! Each mode owns its chaining state as a [`ModeState`] value installed by
//! `begin` and mutated in place by every block operation; nothing aliases
//! caller memory.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_cipher::Cbc;
//! use ravelin_core::BlockCipher;
//! use ravelin_test_utils::RefAes128;
//!
//! let mut cipher = RefAes128::new();
//! cipher.set_key(&[0u8; 16]);
//!
//! let mut cbc = Cbc::new(cipher);
//! cbc.begin(&[0u8; 16]);
//!
//! let mut block = *b"sixteen byte blk";
//! cbc.encrypt_block(&mut block);
//!
//! let mut cbc = Cbc::new({ let mut c = RefAes128::new(); c.set_key(&[0u8; 16]); c });
//! cbc.begin(&[0u8; 16]);
//! cbc.decrypt_block(&mut block);
//! assert_eq!(&block, b"sixteen byte blk");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cbc;
mod ctr;
mod ecb;
mod mode_state;
mod ofb;

pub use cbc::Cbc;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use mode_state::ModeState;
pub use ofb::Ofb;
