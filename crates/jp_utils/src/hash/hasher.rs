//! Hash states used across the workspace.
//!
//! - [`FixedHashState`]: `foldhash` with a constant seed, so hashing a value
//!   gives the same result in every process.
//! - [`NoOpHashState`]: passes an already well-distributed `u64` straight
//!   through. Meant for [`TypeId`](core::any::TypeId) keys.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_SEED: FixedState = FixedState::with_seed(0x6A50_0B1E_C7A4_2D31);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A `BuildHasher` whose output depends only on the hashed value.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use jp_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("token");
/// let b = FixedHashState.hash_one("token");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that keeps the last `u64` written to it.
///
/// Writes of other widths fold their bytes into the state so that a single
/// `write_u32(n)` and `write_u64(n)` agree.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// `BuildHasher` for [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hasher};
/// use jp_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// hasher.write_u64(42);
/// assert_eq!(hasher.finish(), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn narrow_writes_match_u64() {
        let mut a = NoOpHashState.build_hasher();
        a.write_u32(1234);
        let mut b = NoOpHashState.build_hasher();
        b.write_u64(1234);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn fixed_state_is_stable() {
        assert_eq!(FixedHashState.hash_one(7_u32), FixedHashState.hash_one(7_u32));
        assert_ne!(FixedHashState.hash_one("a"), FixedHashState.hash_one("b"));
    }
}
