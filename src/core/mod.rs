//! Core data structures and sizing math.
//!
//! - [`bitvec`] - the fixed-length bit vector the filter reads and writes
//! - [`params`] - optimal `m`/`k` calculation and the default error rate

pub mod bitvec;
pub mod params;

pub use bitvec::BitVec;
pub use params::{default_error_rate, optimal_bit_count, optimal_hash_count};
