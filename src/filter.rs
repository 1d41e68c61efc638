//! Bloom filter over a fixed-length bit vector.
//!
//! # Algorithm
//!
//! A Bloom filter answers set-membership queries probabilistically:
//!
//! - **False positives**: possible, with probability near the configured
//!   error rate, growing as the vector fills
//! - **False negatives**: never — bits are only ever set, never cleared
//!
//! Construction computes the vector length `m` and probe count `k` from
//! the capacity `n` and error rate `p` (see [`crate::core::params`]),
//! allocates the [`BitVec`], and stores `k`. `add` and `contains` derive
//! two base hashes per item — the item's own [`Digest::sum`] and the
//! caller-supplied secondary hash — then generate `k` probe indices via
//! double hashing (Kirsch & Mitzenmacher 2006):
//!
//! ```text
//! index_i = |(h1 + i·h2) mod m|    for i in 0..k
//! ```
//!
//! The linear combination is evaluated in `i128` so it cannot silently
//! overflow, reduced with `%` (whose result follows the dividend's sign
//! in Rust), and passed through an absolute-value step so the index is
//! nonnegative before it addresses the vector. All three steps are load
//! bearing; skipping the widening or the sign handling can produce
//! out-of-range or negative indices under other numeric representations
//! of the same formula.
//!
//! # Concurrency
//!
//! The filter has no intrinsic concurrency: `add` takes `&mut self` and
//! performs up to `k` unguarded writes. Callers that share a filter
//! across threads must serialize all access externally (e.g. a `Mutex`).
//! All operations are O(k) or O(m) and unconditionally terminate.
//!
//! # Examples
//!
//! ```
//! use bloomvec::{BloomFilter, hash};
//!
//! # fn main() -> bloomvec::Result<()> {
//! let secondary = |item: &&str| hash::fnv1a_with_seed(item.as_bytes(), 0x9e37_79b9_7f4a_7c15);
//! let mut filter = BloomFilter::optimal_with_error_rate(10_000, 0.01, secondary)?;
//!
//! filter.add(&"hello");
//! filter.add(&"world");
//!
//! assert!(filter.contains(&"hello"));
//! assert!(filter.contains(&"world"));
//! assert!(!filter.contains(&"goodbye"));
//! # Ok(())
//! # }
//! ```

use crate::core::bitvec::BitVec;
use crate::core::params;
use crate::error::{BloomVecError, Result};
use crate::hash::Digest;

use std::fmt;
use std::marker::PhantomData;

/// Bloom filter for items of type `T` with a caller-supplied secondary
/// hash `F`.
///
/// # Type Parameters
///
/// * `T` - Element type; must produce a stable digest via [`Digest`]
/// * `F` - Secondary hash strategy, any `Fn(&T) -> u64`
///
/// # Invariants
///
/// The hash count and the vector length are fixed for the filter's
/// lifetime. After construction the only mutation is bit-setting: bits go
/// from unset to set and never back, so `true_bits` is non-decreasing
/// across any sequence of `add` calls.
pub struct BloomFilter<T, F> {
    /// Underlying bit vector of length `m`.
    vector: BitVec,

    /// Number of probe positions per item (k).
    hash_count: usize,

    /// Caller-supplied secondary hash.
    hash_fn: F,

    /// Capacity the filter was sized for (n), kept for introspection.
    capacity: usize,

    /// Target false-positive rate (p), kept for introspection.
    target_error_rate: f64,

    _items: PhantomData<T>,
}

impl<T, F> BloomFilter<T, F>
where
    T: Digest,
    F: Fn(&T) -> u64,
{
    /// Create a filter with explicit parameters.
    ///
    /// This is the primitive constructor every other constructor routes
    /// through. On success the bit vector is allocated with every bit
    /// unset; on failure no filter is produced.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Expected number of distinct items (must be ≥ 1)
    /// * `error_rate` - Target false-positive rate, strictly inside (0, 1)
    /// * `hash_fn` - Secondary hash function, ideally independent in
    ///   distribution from [`Digest::sum`]
    /// * `bits` - Bit vector length `m` (must be ≥ 1)
    /// * `hash_count` - Probes per item `k` (must be ≥ 1)
    ///
    /// # Errors
    ///
    /// - [`BloomVecError::InvalidCapacity`] if `capacity < 1`
    /// - [`BloomVecError::ErrorRateOutOfBounds`] if `error_rate` is not
    ///   strictly inside (0, 1)
    /// - [`BloomVecError::InvalidBitCount`] if `bits < 1`; when `bits`
    ///   came out of a sizing computation this signals that the requested
    ///   capacity and error rate cannot be represented
    /// - [`BloomVecError::InvalidHashCount`] if `hash_count < 1`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::{BloomFilter, hash};
    ///
    /// let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 7);
    /// let filter = BloomFilter::new(100, 0.05, secondary, 1024, 4).unwrap();
    /// assert_eq!(filter.bit_count(), 1024);
    /// assert_eq!(filter.hash_count(), 4);
    /// ```
    pub fn new(
        capacity: usize,
        error_rate: f64,
        hash_fn: F,
        bits: usize,
        hash_count: usize,
    ) -> Result<Self> {
        if capacity < 1 {
            return Err(BloomVecError::invalid_capacity(capacity));
        }
        if !(error_rate > 0.0 && error_rate < 1.0) {
            return Err(BloomVecError::error_rate_out_of_bounds(error_rate));
        }
        if bits < 1 {
            return Err(BloomVecError::invalid_bit_count(bits));
        }
        if hash_count < 1 {
            return Err(BloomVecError::invalid_hash_count(hash_count));
        }

        Ok(Self {
            vector: BitVec::new(bits)?,
            hash_count,
            hash_fn,
            capacity,
            target_error_rate: error_rate,
            _items: PhantomData,
        })
    }

    /// Create a filter with optimal size for the given capacity and
    /// error rate.
    ///
    /// Computes `m = ⌈-n·ln(p) / (ln 2)²⌉` and `k = round((m/n)·ln 2)`
    /// and delegates to [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`new`](Self::new); additionally
    /// [`BloomVecError::InvalidParameters`] if the computed vector length
    /// exceeds what the platform can address.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::{BloomFilter, hash};
    ///
    /// let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 7);
    /// let filter = BloomFilter::optimal_with_error_rate(1000, 0.01, secondary).unwrap();
    /// assert!(filter.bit_count() > 0);
    /// assert!(filter.hash_count() >= 1);
    /// ```
    pub fn optimal_with_error_rate(capacity: usize, error_rate: f64, hash_fn: F) -> Result<Self> {
        let bits = params::optimal_bit_count(capacity, error_rate)?;
        let hash_count = params::optimal_hash_count(bits, capacity)?;
        Self::new(capacity, error_rate, hash_fn, bits, hash_count)
    }

    /// Create a filter with optimal size for the given capacity alone.
    ///
    /// The error rate defaults to `1/capacity` when that is numerically
    /// distinguishable from zero, falling back to the asymptotic estimate
    /// `0.6185 ^ (usize::MAX / capacity)` otherwise (see
    /// [`params::default_error_rate`]). Delegates to
    /// [`optimal_with_error_rate`](Self::optimal_with_error_rate).
    ///
    /// # Errors
    ///
    /// Returns the same errors as
    /// [`optimal_with_error_rate`](Self::optimal_with_error_rate). A
    /// capacity of 1 derives the degenerate rate 1.0 and is rejected;
    /// use a capacity of at least 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::{BloomFilter, hash};
    ///
    /// let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 7);
    /// let filter = BloomFilter::optimal(1000, secondary).unwrap();
    /// assert_eq!(filter.target_error_rate(), 0.001);
    /// ```
    pub fn optimal(capacity: usize, hash_fn: F) -> Result<Self> {
        let error_rate = params::default_error_rate(capacity)?;
        Self::optimal_with_error_rate(capacity, error_rate, hash_fn)
    }

    /// Add an item to the filter. It cannot be removed.
    ///
    /// Sets the `k` probe bits derived from the item's digest and the
    /// secondary hash. Idempotent: adding the same item twice leaves the
    /// vector in the same state as adding it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::{BloomFilter, hash};
    ///
    /// let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 7);
    /// let mut filter = BloomFilter::optimal_with_error_rate(100, 0.01, secondary).unwrap();
    ///
    /// filter.add(&42);
    /// assert!(filter.contains(&42));
    /// ```
    pub fn add(&mut self, item: &T) {
        let h1 = item.sum();
        let h2 = (self.hash_fn)(item);

        for i in 0..self.hash_count {
            let index = self.probe_index(h1, h2, i);
            self.vector
                .set(index, true)
                .expect("probe index is reduced modulo the vector length");
        }
    }

    /// Check whether an item might be in the filter.
    ///
    /// # Returns
    ///
    /// - `true`: the item is possibly present (or a false positive, with
    ///   probability near the configured error rate)
    /// - `false`: the item is definitely absent
    ///
    /// Never returns `false` for an item previously passed to
    /// [`add`](Self::add) on this filter: no bit is ever cleared. Probes
    /// the same `k` indices `add` would and short-circuits on the first
    /// unset bit.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        let h1 = item.sum();
        let h2 = (self.hash_fn)(item);

        for i in 0..self.hash_count {
            let index = self.probe_index(h1, h2, i);
            let bit = self
                .vector
                .get(index)
                .expect("probe index is reduced modulo the vector length");
            if !bit {
                return false;
            }
        }

        true
    }

    /// Derive the i-th probe index via double hashing.
    ///
    /// `h1 + i·h2` is evaluated in `i128` (two u64s and a small multiplier
    /// cannot overflow 128 bits), reduced with `%` — which in Rust keeps
    /// the dividend's sign — and passed through `unsigned_abs` to
    /// guarantee a nonnegative index strictly below the vector length.
    #[inline]
    fn probe_index(&self, h1: u64, h2: u64, i: usize) -> usize {
        let combined = i128::from(h1) + (i as i128) * i128::from(h2);
        let reduced = combined % (self.vector.len() as i128);
        reduced.unsigned_abs() as usize
    }

    /// The number of true bits in the underlying vector.
    ///
    /// Non-decreasing across any sequence of [`add`](Self::add) calls.
    /// Computed by full scan; see [`BitVec::true_bits`].
    #[must_use]
    pub fn true_bits(&self) -> usize {
        self.vector.true_bits()
    }

    /// The ratio of true bits to vector length, in `[0, 1]`.
    ///
    /// A live indicator of filter saturation, useful for comparing actual
    /// fill against the theoretical target. Not used internally for any
    /// decision.
    #[must_use]
    pub fn truthiness(&self) -> f64 {
        self.true_bits() as f64 / self.vector.len() as f64
    }

    /// The bit vector length (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.vector.len()
    }

    /// The number of hash probes per item (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// The capacity (n) the filter was sized for.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The target false-positive rate (p) the filter was sized for.
    #[must_use]
    #[inline]
    pub fn target_error_rate(&self) -> f64 {
        self.target_error_rate
    }

    /// Check whether no item has been added yet (no bits set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.true_bits() == 0
    }

    /// Estimate the current false-positive rate from the fill ratio.
    ///
    /// For a filter with fill ratio `f`, a query for an absent item hits
    /// `k` independent bits, each set with probability `f`, giving an
    /// estimated rate of `f^k`.
    #[must_use]
    pub fn estimated_error_rate(&self) -> f64 {
        self.truthiness().powi(self.hash_count as i32)
    }
}

impl<T, F: Clone> Clone for BloomFilter<T, F> {
    fn clone(&self) -> Self {
        Self {
            vector: self.vector.clone(),
            hash_count: self.hash_count,
            hash_fn: self.hash_fn.clone(),
            capacity: self.capacity,
            target_error_rate: self.target_error_rate,
            _items: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for BloomFilter<T, F>
where
    T: Digest,
    F: Fn(&T) -> u64,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bits", &self.vector.len())
            .field("hash_count", &self.hash_count)
            .field("capacity", &self.capacity)
            .field("target_error_rate", &self.target_error_rate)
            .field("true_bits", &self.true_bits())
            .finish_non_exhaustive()
    }
}
