//! Error types for bloomvec operations.
//!
//! All fallible operations in the crate return [`Result<T>`] with
//! [`BloomVecError`] as the error type. Errors are raised at construction
//! time (invalid sizing inputs) or by the bit vector on out-of-range
//! access; there are no retries and no partial-failure states —
//! construction either fully succeeds or produces no filter at all.
//!
//! # Error Propagation
//!
//! ```
//! use bloomvec::{Result, BloomVecError};
//! use bloomvec::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn filter_params(capacity: usize, rate: f64) -> Result<(usize, usize)> {
//!     let bits = optimal_bit_count(capacity, rate)?;
//!     let hashes = optimal_hash_count(bits, capacity)?;
//!     Ok((bits, hashes))
//! }
//! # assert!(filter_params(1000, 0.01).is_ok());
//! ```

use std::fmt;

/// Result type alias for bloomvec operations.
///
/// # Examples
/// ```
/// use bloomvec::{Result, BloomVecError};
///
/// fn check_capacity(capacity: usize) -> Result<()> {
///     if capacity < 1 {
///         return Err(BloomVecError::invalid_capacity(capacity));
///     }
///     Ok(())
/// }
/// # assert!(check_capacity(10).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, BloomVecError>;

/// Errors that can occur during Bloom filter construction or bit access.
///
/// Each variant carries the offending value so call sites can report
/// exactly which input was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomVecError {
    /// Derived parameters are inconsistent or unrepresentable.
    ///
    /// Raised when a capacity/error-rate combination would require a bit
    /// vector larger than the platform can address.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// Capacity (expected number of distinct items) is less than 1.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// Target false-positive rate is outside the open interval (0, 1).
    ///
    /// A rate of 0 would require infinite memory; a rate of 1 accepts
    /// everything. NaN is also rejected.
    ErrorRateOutOfBounds {
        /// The rejected rate.
        rate: f64,
    },

    /// Bit vector length is less than 1.
    ///
    /// When this comes out of a sizing computation it signals that the
    /// requested capacity and error rate cannot be satisfied.
    InvalidBitCount {
        /// The rejected length in bits.
        bits: usize,
    },

    /// Number of hash probes per item is less than 1.
    InvalidHashCount {
        /// The rejected probe count.
        count: usize,
    },

    /// Bit index outside `[0, length)` was requested.
    ///
    /// Under correct filter usage this never occurs: probe derivation
    /// always reduces modulo the vector length. It exists as a defensive
    /// invariant check on the bit vector itself.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Length of the bit vector.
        length: usize,
    },
}

impl fmt::Display for BloomVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
            Self::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "Invalid capacity: {}. Expected item count must be at least 1.",
                    capacity
                )
            }
            Self::ErrorRateOutOfBounds { rate } => {
                write!(
                    f,
                    "Error rate {} is out of bounds. Must be strictly inside (0, 1).",
                    rate
                )
            }
            Self::InvalidBitCount { bits } => {
                write!(
                    f,
                    "Invalid bit vector length: {}. Must be at least 1 bit.",
                    bits
                )
            }
            Self::InvalidHashCount { count } => {
                write!(f, "Invalid hash count: {}. Must be at least 1.", count)
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for bit vector of length {}.",
                    index, length
                )
            }
        }
    }
}

impl std::error::Error for BloomVecError {}

impl BloomVecError {
    /// Create an `InvalidParameters` error with a formatted message.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create an `InvalidCapacity` error.
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create an `ErrorRateOutOfBounds` error.
    #[must_use]
    pub fn error_rate_out_of_bounds(rate: f64) -> Self {
        Self::ErrorRateOutOfBounds { rate }
    }

    /// Create an `InvalidBitCount` error.
    #[must_use]
    pub fn invalid_bit_count(bits: usize) -> Self {
        Self::InvalidBitCount { bits }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize) -> Self {
        Self::InvalidHashCount { count }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_capacity() {
        let err = BloomVecError::invalid_capacity(0);
        let display = format!("{err}");
        assert!(display.contains("0"));
        assert!(display.contains("at least 1"));
    }

    #[test]
    fn test_display_error_rate_out_of_bounds() {
        let err = BloomVecError::error_rate_out_of_bounds(1.5);
        let display = format!("{err}");
        assert!(display.contains("1.5"));
        assert!(display.contains("(0, 1)"));
    }

    #[test]
    fn test_display_invalid_bit_count() {
        let err = BloomVecError::invalid_bit_count(0);
        let display = format!("{err}");
        assert!(display.contains("0"));
        assert!(display.contains("bit"));
    }

    #[test]
    fn test_display_invalid_hash_count() {
        let err = BloomVecError::invalid_hash_count(0);
        let display = format!("{err}");
        assert!(display.contains("hash count"));
    }

    #[test]
    fn test_display_index_out_of_bounds() {
        let err = BloomVecError::index_out_of_bounds(150, 100);
        let display = format!("{err}");
        assert!(display.contains("150"));
        assert!(display.contains("100"));
        assert!(display.contains("out of bounds"));
    }

    #[test]
    fn test_display_invalid_parameters() {
        let err = BloomVecError::invalid_parameters("size overflows usize");
        let display = format!("{err}");
        assert!(display.contains("size overflows usize"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _err: Box<dyn std::error::Error> = Box::new(BloomVecError::invalid_capacity(0));
    }

    #[test]
    fn test_error_clone_eq() {
        let err1 = BloomVecError::index_out_of_bounds(5, 3);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(BloomVecError::invalid_capacity(0))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
