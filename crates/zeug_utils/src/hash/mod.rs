//! Provide hash containers, re-exports *hashbrown* and *foldhash*.
//!
//! - [`FixedHashState`]: deterministic hashing through a fixed `foldhash` seed.
//! - [`NoOpHashState`]: passes an already-hashed `u64` through, used for `TypeId` keys.
//! - [`HashMap`] / [`HashSet`]: `hashbrown` containers defaulting to [`FixedHashState`].

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use zeug_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("width", 640);
/// assert_eq!(map.get("width"), Some(&640));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
