//! Fixed-length bit vector with checked point access.
//!
//! `BitVec` backs the Bloom filter: a sequence of `m` boolean bits, fixed
//! at construction, packed into 64-bit words. Access is range-checked and
//! returns [`Result`] so callers outside the filter get a proper
//! [`IndexOutOfBounds`](crate::BloomVecError::IndexOutOfBounds) instead of
//! a panic.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! # Performance Characteristics
//!
//! - Space: `⌈m/64⌉ × 8` bytes for `m` bits
//! - `set` / `get`: O(1)
//! - `true_bits`: O(m/64) full scan over the words (POPCNT per word)
//!
//! # Examples
//!
//! ```
//! use bloomvec::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! bv.set(42, true).unwrap();
//! assert!(bv.get(42).unwrap());
//! assert!(!bv.get(43).unwrap());
//! assert_eq!(bv.true_bits(), 1);
//! ```

use crate::error::{BloomVecError, Result};

/// Fixed-length bit vector.
///
/// The length is set at construction and never changes; there is no
/// resizing operation. `Box<[u64]>` makes the fixed-size allocation
/// explicit in the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    /// Packed words, each storing 64 bits.
    words: Box<[u64]>,

    /// Total number of addressable bits.
    len: usize,
}

impl BitVec {
    /// Create a new bit vector with the specified number of bits.
    ///
    /// All bits are initialized to false. `⌈length / 64⌉` words are
    /// allocated.
    ///
    /// # Arguments
    ///
    /// * `length` - Number of bits in the vector (must be ≥ 1)
    ///
    /// # Errors
    ///
    /// Returns [`BloomVecError::InvalidBitCount`] if `length < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(1000).unwrap();
    /// assert_eq!(bv.len(), 1000);
    /// assert_eq!(bv.true_bits(), 0);
    ///
    /// assert!(BitVec::new(0).is_err());
    /// ```
    pub fn new(length: usize) -> Result<Self> {
        if length < 1 {
            return Err(BloomVecError::invalid_bit_count(length));
        }

        let num_words = (length + 63) / 64;
        Ok(Self {
            words: vec![0u64; num_words].into_boxed_slice(),
            len: length,
        })
    }

    /// Get the number of bits in the vector.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check whether the vector has zero bits.
    ///
    /// Always `false` for a successfully constructed `BitVec` (the
    /// constructor rejects zero-length vectors); provided for API
    /// completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomVecError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(64).unwrap();
    /// assert!(!bv.get(10).unwrap());
    /// assert!(bv.get(64).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(BloomVecError::index_out_of_bounds(index, self.len));
        }

        let mask = 1u64 << (index % 64);
        Ok(self.words[index / 64] & mask != 0)
    }

    /// Write the bit at `index`.
    ///
    /// Setting an already-set bit (or clearing an already-clear one) is
    /// idempotent. No other bit is affected.
    ///
    /// # Errors
    ///
    /// Returns [`BloomVecError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::core::bitvec::BitVec;
    ///
    /// let mut bv = BitVec::new(64).unwrap();
    /// bv.set(10, true).unwrap();
    /// assert!(bv.get(10).unwrap());
    /// bv.set(10, false).unwrap();
    /// assert!(!bv.get(10).unwrap());
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.len {
            return Err(BloomVecError::index_out_of_bounds(index, self.len));
        }

        let mask = 1u64 << (index % 64);
        if value {
            self.words[index / 64] |= mask;
        } else {
            self.words[index / 64] &= !mask;
        }
        Ok(())
    }

    /// Count the bits currently set true.
    ///
    /// Computed by a full scan over the packed words, O(m/64). The filter
    /// mutates rarely relative to queries, so no incremental counter is
    /// kept in sync.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomvec::core::bitvec::BitVec;
    ///
    /// let mut bv = BitVec::new(100).unwrap();
    /// bv.set(3, true).unwrap();
    /// bv.set(97, true).unwrap();
    /// assert_eq!(bv.true_bits(), 2);
    /// ```
    #[must_use]
    pub fn true_bits(&self) -> usize {
        // Bits past `len` in the last word are never set, so a plain
        // popcount over all words is exact.
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_length() {
        assert_eq!(
            BitVec::new(0).unwrap_err(),
            BloomVecError::invalid_bit_count(0)
        );
    }

    #[test]
    fn test_new_initializes_all_false() {
        let bv = BitVec::new(130).unwrap();
        for i in 0..130 {
            assert!(!bv.get(i).unwrap(), "bit {} should start false", i);
        }
        assert_eq!(bv.true_bits(), 0);
    }

    #[test]
    fn test_len_is_fixed() {
        let bv = BitVec::new(77).unwrap();
        assert_eq!(bv.len(), 77);
        assert!(!bv.is_empty());
    }

    #[test]
    fn test_set_and_get_single_bit() {
        let mut bv = BitVec::new(100).unwrap();
        bv.set(63, true).unwrap();
        assert!(bv.get(63).unwrap());
        assert!(!bv.get(62).unwrap());
        assert!(!bv.get(64).unwrap());
    }

    #[test]
    fn test_set_false_clears_bit() {
        let mut bv = BitVec::new(10).unwrap();
        bv.set(5, true).unwrap();
        bv.set(5, false).unwrap();
        assert!(!bv.get(5).unwrap());
        assert_eq!(bv.true_bits(), 0);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut bv = BitVec::new(10).unwrap();
        bv.set(2, true).unwrap();
        bv.set(2, true).unwrap();
        assert_eq!(bv.true_bits(), 1);
    }

    #[test]
    fn test_get_out_of_range() {
        let bv = BitVec::new(100).unwrap();
        assert_eq!(
            bv.get(100).unwrap_err(),
            BloomVecError::index_out_of_bounds(100, 100)
        );
        assert!(bv.get(usize::MAX).is_err());
    }

    #[test]
    fn test_set_out_of_range() {
        let mut bv = BitVec::new(100).unwrap();
        assert_eq!(
            bv.set(100, true).unwrap_err(),
            BloomVecError::index_out_of_bounds(100, 100)
        );
    }

    #[test]
    fn test_true_bits_counts_across_words() {
        let mut bv = BitVec::new(200).unwrap();
        for index in [0, 1, 63, 64, 127, 128, 199] {
            bv.set(index, true).unwrap();
        }
        assert_eq!(bv.true_bits(), 7);
    }

    #[test]
    fn test_length_not_multiple_of_word_size() {
        let mut bv = BitVec::new(65).unwrap();
        bv.set(64, true).unwrap();
        assert!(bv.get(64).unwrap());
        assert!(bv.get(65).is_err());
        assert_eq!(bv.true_bits(), 1);
    }

    #[test]
    fn test_single_bit_vector() {
        let mut bv = BitVec::new(1).unwrap();
        assert!(!bv.get(0).unwrap());
        bv.set(0, true).unwrap();
        assert!(bv.get(0).unwrap());
        assert!(bv.get(1).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut bv = BitVec::new(10).unwrap();
        bv.set(4, true).unwrap();

        let mut copy = bv.clone();
        copy.set(4, false).unwrap();

        assert!(bv.get(4).unwrap());
        assert!(!copy.get(4).unwrap());
    }
}
