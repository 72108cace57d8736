use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_SEED: FixedState = FixedState::with_seed(0x5A17_3C0F_E11D_2B47);

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] whose output only depends on the hashed input.
///
/// Iteration order of containers built with it is stable between runs,
/// which keeps property dumps and test expectations reproducible.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use zeug_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("name"), FixedHashState.hash_one("name"));
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
/// `TypeId` hashes itself through `write_u64`, so its value is used
/// directly. Byte writes are folded in for completeness.
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
        for byte in bytes {
            self.hash = self.hash.rotate_left(8) ^ u64::from(*byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// The [`BuildHasher`] of [`NoOpHasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedHashState, NoOpHashState};
    use core::hash::BuildHasher;

    #[test]
    fn fixed_is_deterministic() {
        let a = FixedHashState.hash_one(42_u32);
        let b = FixedHashState.hash_one(42_u32);
        assert_eq!(a, b);
        assert_ne!(a, FixedHashState.hash_one(43_u32));
    }

    #[test]
    fn no_op_passes_u64() {
        assert_eq!(NoOpHashState.hash_one(7_u64), 7);
    }
}
