//! bloomvec: a Bloom filter over a fixed-length bit vector.
//!
//! A Bloom filter is a space-efficient probabilistic data structure that
//! tests whether an element is a member of a set. It can produce:
//!
//! - **False positives**: may report an element present when it isn't
//! - **Zero false negatives**: if it says an element is absent, it is
//!
//! Items can never be removed, and the filter never resizes. Construction
//! sizes the underlying bit vector (`m` bits) and probe count (`k`) from
//! a target capacity and false-positive rate; queries derive `k` probe
//! positions from two base hashes via double hashing.
//!
//! # Quick Start
//!
//! ```
//! use bloomvec::{BloomFilter, hash};
//!
//! # fn main() -> bloomvec::Result<()> {
//! let secondary = |item: &&str| hash::fnv1a_with_seed(item.as_bytes(), 0x9e37_79b9_7f4a_7c15);
//!
//! // Sized for 10,000 items at a 1% false-positive rate
//! let mut filter = BloomFilter::optimal_with_error_rate(10_000, 0.01, secondary)?;
//!
//! filter.add(&"hello");
//! filter.add(&"world");
//!
//! assert!(filter.contains(&"hello"));    // possibly present
//! assert!(!filter.contains(&"goodbye")); // definitely absent
//! # Ok(())
//! # }
//! ```
//!
//! # Element Types
//!
//! An element type must implement [`hash::Digest`], producing a stable
//! 64-bit digest of itself. Implementations are provided for the
//! primitive integers, strings, and byte slices; implement it for your
//! own types with any deterministic mixing (the [`hash`] module helpers
//! cover the common cases).
//!
//! The second ingredient is a caller-supplied secondary hash function
//! `Fn(&T) -> u64`, injected at construction. Pick one independent in
//! distribution from the digest; the library does not enforce
//! independence, and a poor choice degrades the false-positive rate
//! without ever breaking the no-false-negative guarantee.
//!
//! # Monitoring Saturation
//!
//! ```
//! use bloomvec::{BloomFilter, hash};
//!
//! # fn main() -> bloomvec::Result<()> {
//! let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 7);
//! let mut filter = BloomFilter::optimal_with_error_rate(1000, 0.01, secondary)?;
//!
//! for i in 0..500u64 {
//!     filter.add(&i);
//! }
//!
//! // Fraction of bits set: compare actual fill against the design target
//! println!("truthiness: {:.3}", filter.truthiness());
//! println!("estimated error rate: {:.5}", filter.estimated_error_rate());
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous and single-threaded by contract;
//! `add` takes `&mut self` and performs unguarded bit writes. Wrap the
//! filter in a `Mutex` (or equivalent) to share it across threads.
//!
//! # Feature Flags
//!
//! | Feature  | Enables                                             |
//! |----------|-----------------------------------------------------|
//! | `xxhash` | [`hash::xxh3_secondary`], an xxh3-based secondary hash |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]

/// Core data structures and sizing math.
pub mod core;

/// Error types and result alias.
pub mod error;

/// The Bloom filter itself.
pub mod filter;

/// Item digests and secondary hash building blocks.
pub mod hash;

// Re-export the working surface at the crate root.
pub use crate::core::bitvec::BitVec;
pub use crate::error::{BloomVecError, Result};
pub use crate::filter::BloomFilter;
pub use crate::hash::Digest;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomvec::prelude::*;
///
/// let secondary = |item: &u64| bloomvec::hash::mix64(item.wrapping_add(1));
/// let mut filter = BloomFilter::optimal_with_error_rate(100, 0.01, secondary).unwrap();
/// filter.add(&3);
/// assert!(filter.contains(&3));
/// ```
pub mod prelude {
    pub use crate::core::bitvec::BitVec;
    pub use crate::error::{BloomVecError, Result};
    pub use crate::filter::BloomFilter;
    pub use crate::hash::Digest;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::hash;

    #[test]
    fn test_prelude_imports() {
        let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 3);
        let mut filter = BloomFilter::optimal_with_error_rate(100, 0.01, secondary).unwrap();
        filter.add(&99);
        assert!(filter.contains(&99));
    }

    #[test]
    fn test_root_reexports() {
        let _vector = BitVec::new(8).unwrap();
        let _err: BloomVecError = BloomVecError::invalid_capacity(0);

        fn digest_of(item: impl Digest) -> u64 {
            item.sum()
        }
        assert_eq!(digest_of(5u64), digest_of(5u64));
    }
}
