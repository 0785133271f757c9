// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Ravelin
//!
//! Pluggable symmetric cryptography for constrained targets.
//!
//! Ravelin is a `no_std` framework of block-cipher modes, MAC
//! constructions, a password-based KDF, deterministic generators, and a
//! Yarrow-style entropy accumulator. It implements **no** ciphers or hashes
//! of its own: concrete primitives are plugged in through the capability
//! traits in [`ravelin_core`], re-exported here.
//!
//! This is a re-export crate; each layer also builds stand-alone:
//!
//! - [`cipher`]: ECB, CBC, CTR, OFB over any [`BlockCipher`]
//! - [`mac`]: HMAC and OMAC1/OMAC2
//! - [`kdf`]: streaming PBKDF2 over any [`Mac`]
//! - [`rand`]: the ISAAC and ANSI X9.17 generators
//! - [`entropy`]: the two-pool entropy accumulator
//! - [`zero`] / [`util`]: scrubbing guards and byte helpers
//!
//! # Quick Start
//!
//! Accumulate entropy, derive a seed, and run a generator:
//!
//! ```rust
//! use ravelin::Prng;
//! use ravelin::entropy::Yarrow;
//! use ravelin::rand::X917;
//! use ravelin_test_utils::{CountingClock, RefAes128, Sha256};
//!
//! let mut pool: Yarrow<Sha256, 2> = Yarrow::new(Sha256::new(), Sha256::new());
//! while !pool.seeding_ready() {
//!     pool.add_entropy(0, b"interrupt-jitter-sample", 48).unwrap();
//! }
//!
//! let mut seed = [0u8; 32];
//! pool.make_seed(&mut seed);
//!
//! let mut prng = X917::new(RefAes128::new(), CountingClock::new(0, 0));
//! prng.reseed(&seed);
//!
//! let mut session_key = [0u8; 16];
//! prng.generate(&mut session_key);
//! ```
//!
//! # Concurrency model
//!
//! Every instance is exclusively owned by its caller and is not reentrant;
//! callers sharing an instance across execution contexts serialize access
//! themselves. Nothing in the stack blocks, spawns, or touches global
//! state.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

pub use ravelin_cipher as cipher;
pub use ravelin_entropy as entropy;
pub use ravelin_kdf as kdf;
pub use ravelin_mac as mac;
pub use ravelin_rand as rand;
pub use ravelin_util as util;
pub use ravelin_zero as zero;

pub use ravelin_core::{BlockCipher, Hash, Mac, MonotonicClock, Prng, limits};
