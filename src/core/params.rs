//! Optimal parameter calculation for Bloom filters.
//!
//! Implements the standard sizing formulas from the Bloom filter
//! literature. Given an expected item count `n` and target false-positive
//! rate `p`:
//!
//! - `m = ⌈-n × ln(p) / (ln 2)²⌉` (bits in the vector)
//! - `k = round((m/n) × ln 2)` (hash probes per item)
//!
//! `ln(p)` is negative for any `p` in (0, 1), so the negation keeps `m`
//! positive.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

use crate::error::{BloomVecError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: (ln 2)² ≈ 0.4804530139182014.
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Base of the asymptotic default-error-rate fallback, 0.6185 ≈ 0.5^(ln 2).
///
/// A conservative heuristic from the Bloom filter literature, used when
/// `1/capacity` is not numerically distinguishable from zero. Documented
/// default behavior, not verified-optimal.
const FALLBACK_RATE_BASE: f64 = 0.6185;

/// Calculate the optimal number of bits for the given constraints.
///
/// Implements `m = ⌈-n × ln(p) / (ln 2)²⌉`, clamped to at least 1 bit.
///
/// # Arguments
///
/// * `capacity` - Expected number of distinct items (must be ≥ 1)
/// * `error_rate` - Target false-positive rate, strictly inside (0, 1)
///
/// # Errors
///
/// - [`BloomVecError::InvalidCapacity`] if `capacity < 1`
/// - [`BloomVecError::ErrorRateOutOfBounds`] if `error_rate` is not in (0, 1)
/// - [`BloomVecError::InvalidParameters`] if the computed size cannot be
///   represented as `usize`
///
/// # Examples
///
/// ```
/// use bloomvec::core::params::optimal_bit_count;
///
/// // 1000 items at 1% false positives needs ~9.6 bits per item
/// let bits = optimal_bit_count(1000, 0.01).unwrap();
/// assert!((9585..=9586).contains(&bits));
/// ```
pub fn optimal_bit_count(capacity: usize, error_rate: f64) -> Result<usize> {
    if capacity < 1 {
        return Err(BloomVecError::invalid_capacity(capacity));
    }
    if !(error_rate > 0.0 && error_rate < 1.0) {
        return Err(BloomVecError::error_rate_out_of_bounds(error_rate));
    }

    // m = -n × ln(p) / (ln 2)²; ln(p) < 0 makes the numerator positive.
    let bits = -(capacity as f64) * error_rate.ln() / LN2_SQUARED;

    if !bits.is_finite() || bits > usize::MAX as f64 {
        return Err(BloomVecError::invalid_parameters(format!(
            "capacity {} with error rate {} requires a bit vector longer than usize::MAX; \
             reduce the capacity or raise the error rate",
            capacity, error_rate
        )));
    }

    // Round up so the target rate is met or exceeded; never below 1 bit.
    Ok((bits.ceil() as usize).max(1))
}

/// Calculate the optimal number of hash probes per item.
///
/// Implements `k = round((m/n) × ln 2)`, clamped to at least 1.
///
/// # Arguments
///
/// * `bits` - Bit vector length `m` (must be ≥ 1)
/// * `capacity` - Expected number of distinct items `n` (must be ≥ 1)
///
/// # Errors
///
/// - [`BloomVecError::InvalidBitCount`] if `bits < 1`
/// - [`BloomVecError::InvalidCapacity`] if `capacity < 1`
///
/// # Examples
///
/// ```
/// use bloomvec::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// ```
pub fn optimal_hash_count(bits: usize, capacity: usize) -> Result<usize> {
    if bits < 1 {
        return Err(BloomVecError::invalid_bit_count(bits));
    }
    if capacity < 1 {
        return Err(BloomVecError::invalid_capacity(capacity));
    }

    let k = (bits as f64 / capacity as f64) * LN_2;
    Ok((k.round() as usize).max(1))
}

/// Derive a default false-positive rate from the capacity alone.
///
/// Returns `1 / capacity` when that is numerically distinguishable from
/// zero; otherwise falls back to the asymptotic estimate
/// `0.6185 ^ (usize::MAX / capacity)`.
///
/// Note that a capacity of 1 yields a rate of 1.0, which the filter
/// constructors reject; the fully-optimal constructor therefore requires
/// a capacity of at least 2.
///
/// # Errors
///
/// Returns [`BloomVecError::InvalidCapacity`] if `capacity < 1`.
///
/// # Examples
///
/// ```
/// use bloomvec::core::params::default_error_rate;
///
/// assert_eq!(default_error_rate(1000).unwrap(), 0.001);
/// ```
pub fn default_error_rate(capacity: usize) -> Result<f64> {
    if capacity < 1 {
        return Err(BloomVecError::invalid_capacity(capacity));
    }

    let rate = 1.0 / capacity as f64;
    if rate > 0.0 {
        Ok(rate)
    } else {
        Ok(FALLBACK_RATE_BASE.powf((usize::MAX / capacity) as f64))
    }
}
