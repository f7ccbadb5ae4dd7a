//! Default content digest: 64-bit FNV-1a from the `fnv` crate.
//!
//! Any deterministic 64-bit digest can stand in; shapes take a
//! [`BuildHasher`](std::hash::BuildHasher) so callers can plug in their own.

use std::hash::Hasher;

pub use fnv::{FnvBuildHasher, FnvHasher};

/// One-shot FNV-1a digest of `bytes`.
#[must_use]
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h = FnvHasher::default();
    h.write(bytes);
    h.finish()
}
