use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`].
///
/// `TypeId` is already a well-mixed hash, so the map uses [`NoOpHashState`]
/// and skips hashing entirely. The [`HashMap`] underneath is not exposed.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use jp_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// map.insert(TypeId::of::<u8>(), "byte");
/// assert_eq!(map.get(&TypeId::of::<u8>()), Some(&"byte"));
/// assert_eq!(map.get(&TypeId::of::<u16>()), None);
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    ///
    /// Usable in `static` initializers.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Returns the value stored for `type_id`, inserting the result of `f`
    /// first if the key is vacant.
    ///
    /// `f` runs only when the key is not present, so an entry that is already
    /// published is never replaced.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value corresponding to the type.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Inserts a key-value pair, returning the previous value if any.
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn get_or_insert_keeps_first_value() {
        let mut map = TypeIdMap::new();
        assert_eq!(*map.get_or_insert(TypeId::of::<i32>(), || 1), 1);
        assert_eq!(*map.get_or_insert(TypeId::of::<i32>(), || 2), 1);
        assert_eq!(map.len(), 1);
        assert!(map.contains(&TypeId::of::<i32>()));
    }

    #[test]
    fn clear_empties_map() {
        let mut map = TypeIdMap::new();
        map.insert(TypeId::of::<u8>(), ());
        map.insert(TypeId::of::<u16>(), ());
        assert_eq!(map.len(), 2);
        map.clear();
        assert!(map.is_empty());
    }
}
