//! Item digests and secondary hash building blocks.
//!
//! The filter requires two things of its inputs:
//!
//! - the element type implements [`Digest`], producing a stable 64-bit
//!   digest of itself (`sum`), and
//! - the caller supplies a secondary hash function `Fn(&T) -> u64`,
//!   ideally independent in distribution from `sum` for good probe
//!   spread. Independence is not enforced; a poor choice degrades the
//!   false-positive rate but never breaks correctness.
//!
//! All helpers here are deterministic across processes and runs, so a
//! digest computed today matches one computed tomorrow. That is the
//! reason [`Digest`] is not simply `std::hash::Hash`: `DefaultHasher` is
//! randomly seeded per process.
//!
//! # Examples
//!
//! ```
//! use bloomvec::hash::{self, Digest};
//!
//! assert_eq!(42u64.sum(), 42u64.sum());
//! assert_ne!("left".sum(), "right".sum());
//!
//! // A ready-made secondary hash for integer items
//! let secondary = |item: &u64| hash::fnv1a_with_seed(&item.to_le_bytes(), 0x9e37_79b9_7f4a_7c15);
//! let _ = secondary(&42);
//! ```

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Capability of producing a stable 64-bit digest of a value.
///
/// The digest must be deterministic: equal values yield equal digests
/// across repeated calls, processes, and program runs. This is the
/// primary hash (`h1`) the filter combines with the caller-supplied
/// secondary hash under the double-hashing scheme.
///
/// # Implementing for Your Types
///
/// ```
/// use bloomvec::hash::{self, Digest};
///
/// struct UserId(u64);
///
/// impl Digest for UserId {
///     fn sum(&self) -> u64 {
///         hash::mix64(self.0)
///     }
/// }
/// ```
pub trait Digest {
    /// Produce the stable 64-bit digest of this value.
    fn sum(&self) -> u64;
}

impl<T: Digest + ?Sized> Digest for &T {
    #[inline]
    fn sum(&self) -> u64 {
        (**self).sum()
    }
}

macro_rules! impl_digest_for_int {
    ($($ty:ty),*) => {
        $(
            impl Digest for $ty {
                #[inline]
                fn sum(&self) -> u64 {
                    mix64(*self as u64)
                }
            }
        )*
    };
}

impl_digest_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Digest for u128 {
    #[inline]
    fn sum(&self) -> u64 {
        mix64((*self >> 64) as u64) ^ mix64(*self as u64)
    }
}

impl Digest for i128 {
    #[inline]
    fn sum(&self) -> u64 {
        (*self as u128).sum()
    }
}

impl Digest for str {
    #[inline]
    fn sum(&self) -> u64 {
        fnv1a(self.as_bytes())
    }
}

impl Digest for String {
    #[inline]
    fn sum(&self) -> u64 {
        fnv1a(self.as_bytes())
    }
}

impl Digest for [u8] {
    #[inline]
    fn sum(&self) -> u64 {
        fnv1a(self)
    }
}

impl Digest for Vec<u8> {
    #[inline]
    fn sum(&self) -> u64 {
        fnv1a(self)
    }
}

/// Hash arbitrary bytes with FNV-1a (64-bit).
///
/// Deterministic and allocation-free; adequate spread for short keys such
/// as identifiers and serialized integers.
///
/// # Examples
///
/// ```
/// use bloomvec::hash::fnv1a;
///
/// assert_eq!(fnv1a(b"hello"), fnv1a(b"hello"));
/// assert_ne!(fnv1a(b"hello"), fnv1a(b"world"));
/// ```
#[must_use]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    fnv1a_with_seed(bytes, 0)
}

/// Hash arbitrary bytes with FNV-1a, folding a seed into the offset basis.
///
/// Different seeds yield decorrelated hash families over the same input,
/// which makes this a convenient source of secondary hash functions:
///
/// ```
/// use bloomvec::hash::fnv1a_with_seed;
///
/// let h1 = fnv1a_with_seed(b"item", 0);
/// let h2 = fnv1a_with_seed(b"item", 0x9e37_79b9_7f4a_7c15);
/// assert_ne!(h1, h2);
/// ```
#[must_use]
pub fn fnv1a_with_seed(bytes: &[u8], seed: u64) -> u64 {
    let mut hash = FNV_OFFSET_BASIS ^ seed;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Finalize a 64-bit value with the splitmix64 mixing function.
///
/// Full-avalanche: every input bit affects roughly half the output bits,
/// which turns sequential integers into well-spread digests.
///
/// # Examples
///
/// ```
/// use bloomvec::hash::mix64;
///
/// assert_ne!(mix64(1), mix64(2));
/// assert_eq!(mix64(7), mix64(7));
/// ```
#[must_use]
pub fn mix64(value: u64) -> u64 {
    let mut x = value.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// xxh3-based secondary hash over an item's digest bytes.
///
/// A ready-made secondary hash function for any [`Digest`] type, using a
/// different algorithm family than the FNV/splitmix digests above.
///
/// # Examples
///
/// ```
/// use bloomvec::hash::xxh3_secondary;
///
/// let h = xxh3_secondary(&42u64);
/// assert_eq!(h, xxh3_secondary(&42u64));
/// ```
#[cfg(feature = "xxhash")]
#[must_use]
pub fn xxh3_secondary<T: Digest>(item: &T) -> u64 {
    xxhash_rust::xxh3::xxh3_64_with_seed(&item.sum().to_le_bytes(), 0x27d4_eb2f_1656_67c5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(12345u64.sum(), 12345u64.sum());
        assert_eq!("stable".sum(), "stable".sum());
        assert_eq!(vec![1u8, 2, 3].sum(), vec![1u8, 2, 3].sum());
    }

    #[test]
    fn test_digest_distinguishes_values() {
        assert_ne!(1u64.sum(), 2u64.sum());
        assert_ne!("a".sum(), "b".sum());
        assert_ne!((-1i64).sum(), 1i64.sum());
    }

    #[test]
    fn test_digest_through_reference() {
        let value = 99u32;
        assert_eq!((&value).sum(), value.sum());
        let text = String::from("ref");
        assert_eq!((&text).sum(), text.sum());
    }

    #[test]
    fn test_string_and_str_agree() {
        let owned = String::from("same bytes");
        assert_eq!(owned.sum(), "same bytes".sum());
    }

    #[test]
    fn test_u128_uses_both_halves() {
        let low = 1u128;
        let high = 1u128 << 64;
        assert_ne!(low.sum(), high.sum());
    }

    #[test]
    fn test_fnv1a_known_vector() {
        // FNV-1a of the empty input is the offset basis
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
    }

    #[test]
    fn test_fnv1a_seed_changes_output() {
        assert_ne!(fnv1a_with_seed(b"item", 0), fnv1a_with_seed(b"item", 1));
    }

    #[test]
    fn test_mix64_avalanche_spreads_sequential_inputs() {
        // Adjacent inputs should differ in many output bits
        let differing = (mix64(1000) ^ mix64(1001)).count_ones();
        assert!(differing >= 16, "only {} bits differ", differing);
    }

    #[cfg(feature = "xxhash")]
    #[test]
    fn test_xxh3_secondary_differs_from_sum() {
        let item = 42u64;
        assert_ne!(xxh3_secondary(&item), item.sum());
        assert_eq!(xxh3_secondary(&item), xxh3_secondary(&item));
    }
}
