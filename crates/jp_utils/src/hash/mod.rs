//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
