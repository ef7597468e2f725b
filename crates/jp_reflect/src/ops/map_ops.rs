use alloc::string::String;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Map

/// A key-value map.
///
/// Lookups take the key as a `&dyn Reflect`; a key of another type than the
/// map's key type finds nothing.
///
/// ```
/// use std::collections::BTreeMap;
/// use jp_reflect::ops::Map;
///
/// let mut map = BTreeMap::new();
/// map.insert("a".to_string(), 1_i64);
///
/// let map: &dyn Map = &map;
/// assert!(map.get(&"a".to_string()).is_some());
/// assert!(map.get(&1_i64).is_none());
/// assert!(map.get_str("a").is_some());
/// ```
pub trait Map: Reflect {
    /// Returns the value stored under `key`.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the value stored under a textual key.
    ///
    /// Keys of type `String` and `&'static str` are matched. Maps keyed by
    /// anything else find nothing.
    fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
        self.get(&String::from(key))
    }

    /// Returns the number of entries.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
