// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The two-pool accumulator.

use ravelin_core::Hash;
use ravelin_core::limits::MAX_DIGEST_LEN;
use ravelin_zero::ZeroizingGuard;

use crate::error::EntropyError;

/// Reseed policy knobs.
///
/// These mirror the classic Yarrow parameters but are deliberately *policy*:
/// none of them is pinned by an interop contract, and deployments tune them
/// to their source mix.
#[derive(Clone, Copy)]
pub struct AccumulatorConfig {
    /// Fast-pool per-source threshold in entropy bits.
    pub fast_threshold: u32,
    /// Slow-pool per-source threshold in entropy bits.
    pub slow_threshold: u32,
    /// How many distinct sources must reach `slow_threshold` before a slow
    /// reseed is allowed.
    pub slow_sources: usize,
    /// Density cap divisor: a sample of `n` bytes may be credited at most
    /// `n*8*100 / max_density_percent` bits. The default of 200 credits at
    /// most half the submitted bits.
    pub max_density_percent: u32,
    /// Hash-chain length of the reseed derivation.
    pub reseed_iterations: u32,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            fast_threshold: 100,
            slow_threshold: 160,
            slow_sources: 2,
            max_density_percent: 200,
            reseed_iterations: 80,
        }
    }
}

/// One pool: a running hash of every sample fed to it, plus a per-source
/// table of credited entropy bits.
struct Pool<H: Hash, const SOURCES: usize> {
    hash: H,
    counts: [u32; SOURCES],
}

impl<H: Hash, const SOURCES: usize> Pool<H, SOURCES> {
    fn new(mut hash: H) -> Self {
        hash.reset();
        Self {
            hash,
            counts: [0u32; SOURCES],
        }
    }

    fn clear(&mut self) {
        self.hash.reset();
        self.counts = [0u32; SOURCES];
    }
}

/// Yarrow-style entropy accumulator over `SOURCES` noise sources.
///
/// Each source alternates between the fast and the slow pool on every
/// sample, independently of the other sources; reseed decisions consider
/// all sources together.
///
/// ## Example
///
/// ```rust
/// use ravelin_entropy::Yarrow;
/// use ravelin_test_utils::Sha1;
///
/// let mut pool: Yarrow<Sha1, 4> = Yarrow::new(Sha1::new(), Sha1::new());
///
/// while !pool.seeding_ready() {
///     pool.add_entropy(0, b"interrupt timing sample!", 64).unwrap();
/// }
///
/// let mut seed = [0u8; 20];
/// pool.make_seed(&mut seed);
/// ```
pub struct Yarrow<H: Hash, const SOURCES: usize> {
    fast: Pool<H, SOURCES>,
    slow: Pool<H, SOURCES>,
    /// Per-source toggle: which pool receives the next sample.
    feeds_slow: [bool; SOURCES],
    config: AccumulatorConfig,
}

impl<H: Hash, const SOURCES: usize> Yarrow<H, SOURCES> {
    /// Creates an accumulator with the default policy.
    ///
    /// The two hash instances back the fast and the slow pool.
    pub fn new(fast_hash: H, slow_hash: H) -> Self {
        Self::with_config(fast_hash, slow_hash, AccumulatorConfig::default())
    }

    /// Creates an accumulator with an explicit policy.
    pub fn with_config(fast_hash: H, slow_hash: H, config: AccumulatorConfig) -> Self {
        assert!(
            H::DIGEST_LEN > 0 && H::DIGEST_LEN <= MAX_DIGEST_LEN,
            "unsupported digest length"
        );
        assert!(SOURCES > 0, "at least one entropy source");
        assert!(config.max_density_percent > 0, "density divisor must be nonzero");

        Self {
            fast: Pool::new(fast_hash),
            slow: Pool::new(slow_hash),
            feeds_slow: [false; SOURCES],
            config,
        }
    }

    /// Feeds one sample from `source` into the accumulator.
    ///
    /// The claimed entropy is capped by the density policy before being
    /// credited; the sample bytes are hashed into whichever pool the
    /// source currently feeds, and the source's pool toggle flips.
    ///
    /// # Errors
    ///
    /// - [`EntropyError::UnknownSource`] if `source >= SOURCES`
    /// - [`EntropyError::EmptySample`] if `data` is empty
    /// - [`EntropyError::InvalidEntropyClaim`] if `claimed_bits` exceeds
    ///   the bits physically present in the sample
    pub fn add_entropy(
        &mut self,
        source: usize,
        data: &[u8],
        claimed_bits: u32,
    ) -> Result<(), EntropyError> {
        if source >= SOURCES {
            return Err(EntropyError::UnknownSource { source });
        }
        if data.is_empty() {
            return Err(EntropyError::EmptySample);
        }

        let available = (data.len() as u64).saturating_mul(8);
        if u64::from(claimed_bits) > available {
            return Err(EntropyError::InvalidEntropyClaim {
                claimed: claimed_bits,
                available: available.min(u64::from(u32::MAX)) as u32,
            });
        }

        let cap = available * 100 / u64::from(self.config.max_density_percent);
        let credited = u64::from(claimed_bits).min(cap) as u32;

        let pool = if self.feeds_slow[source] {
            &mut self.slow
        } else {
            &mut self.fast
        };
        pool.hash.update(data);
        pool.counts[source] = pool.counts[source].saturating_add(credited);

        log::trace!(
            "source {source}: {} bytes, credited {credited}/{claimed_bits} bits",
            data.len()
        );

        self.feeds_slow[source] = !self.feeds_slow[source];
        Ok(())
    }

    /// Returns `true` once reseeding is due under the current policy:
    /// some source has reached the fast threshold, or enough sources have
    /// reached the slow threshold.
    pub fn seeding_ready(&self) -> bool {
        if self
            .fast
            .counts
            .iter()
            .any(|&bits| bits >= self.config.fast_threshold)
        {
            return true;
        }

        self.slow_ready()
    }

    /// Derives reseed material into `out` and resets the spent pool(s).
    ///
    /// When the slow condition holds, the slow pool's digest is folded into
    /// the fast pool first and the slow pool is cleared (a slow reseed);
    /// either way a fast reseed follows: the emitted seed is the end of an
    /// iterated hash chain over the fast pool's digest, so generator state
    /// compromised later cannot be run backwards to this seed.
    ///
    /// # Panics
    ///
    /// Panics if `out` is empty or longer than the hash digest.
    pub fn make_seed(&mut self, out: &mut [u8]) {
        let digest_len = H::DIGEST_LEN;
        assert!(
            !out.is_empty() && out.len() <= digest_len,
            "seed length must be within one digest"
        );

        if self.slow_ready() {
            let mut slow_digest = ZeroizingGuard::new([0u8; MAX_DIGEST_LEN]);
            self.slow.hash.finalize(&mut slow_digest[..digest_len]);
            self.fast.hash.update(&slow_digest[..digest_len]);
            self.slow.clear();

            log::debug!("slow reseed: slow pool folded into fast pool");
        }

        let mut v0 = ZeroizingGuard::new([0u8; MAX_DIGEST_LEN]);
        let mut v = ZeroizingGuard::new([0u8; MAX_DIGEST_LEN]);
        let mut next = ZeroizingGuard::new([0u8; MAX_DIGEST_LEN]);

        self.fast.hash.finalize(&mut v0[..digest_len]);
        v[..digest_len].copy_from_slice(&v0[..digest_len]);

        // v(i) = H(v(i-1) || v0 || BE32(i))
        for i in 1..=self.config.reseed_iterations {
            self.fast.hash.reset();
            self.fast.hash.update(&v[..digest_len]);
            self.fast.hash.update(&v0[..digest_len]);
            self.fast.hash.update(&i.to_be_bytes());
            self.fast.hash.finalize(&mut next[..digest_len]);

            v[..digest_len].copy_from_slice(&next[..digest_len]);
        }

        out.copy_from_slice(&v[..out.len()]);
        self.fast.clear();

        log::debug!("fast reseed: emitted {} seed bytes", out.len());
    }

    fn slow_ready(&self) -> bool {
        self.slow
            .counts
            .iter()
            .filter(|&&bits| bits >= self.config.slow_threshold)
            .count()
            >= self.config.slow_sources
    }
}
