use alloc::collections::BTreeMap;
use alloc::string::String;
use core::any::TypeId;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Map, ReflectRef};

macro_rules! impl_reflect_map {
    ($ty:ident <K, V $(, $s:ident)?> where K: $($key_bound:path),+) => {
        impl<K, V $(, $s)?> Typed for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed $(+ $key_bound)+,
            V: Reflect + Typed,
            $($s: BuildHasher + Send + Sync + 'static,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V $(, $s)?> Reflect for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed $(+ $key_bound)+,
            V: Reflect + Typed,
            $($s: BuildHasher + Send + Sync + 'static,)?
        {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Map
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }
        }

        impl<K, V $(, $s)?> Map for $ty<K, V $(, $s)?>
        where
            K: Reflect + Typed $(+ $key_bound)+,
            V: Reflect + Typed,
            $($s: BuildHasher + Send + Sync + 'static,)?
        {
            fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                $ty::get(self, key).map(|value| value as &dyn Reflect)
            }

            fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
                if TypeId::of::<K>() != TypeId::of::<&'static str>() {
                    return Map::get(self, &String::from(key));
                }
                // A borrowed `&str` cannot stand in for `&&'static str`.
                $ty::iter(self)
                    .find(|(k, _)| {
                        (*k as &dyn Reflect)
                            .downcast_ref::<&'static str>()
                            .is_some_and(|k| *k == key)
                    })
                    .map(|(_, value)| value as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }
        }
    };
}

impl_reflect_map!(BTreeMap<K, V> where K: Ord);

mod std_hash_map {
    use core::hash::{BuildHasher, Hash};
    use std::collections::HashMap;

    use super::*;

    impl_reflect_map!(HashMap<K, V, S> where K: Eq, Hash);
}

mod hashbrown_hash_map {
    use core::hash::{BuildHasher, Hash};

    use jp_utils::hash::hashbrown::HashMap;

    use super::*;

    impl_reflect_map!(HashMap<K, V, S> where K: Eq, Hash);
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};

    use jp_utils::hash::HashMap as FixedHashMap;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::ReflectRef;

    #[test]
    fn btree_map_lookup() {
        let mut map = BTreeMap::new();
        map.insert("A".to_string(), 1_u32);

        let ReflectRef::Map(reflected) = map.reflect_ref() else {
            panic!("expected a map");
        };
        assert_eq!(reflected.len(), 1);
        assert_eq!(
            reflected.get(&"A".to_string()).unwrap().downcast_ref::<u32>(),
            Some(&1)
        );
        assert!(reflected.get(&"B".to_string()).is_none());
    }

    #[test]
    fn mismatched_key_type_finds_nothing() {
        let mut map = std::collections::HashMap::new();
        map.insert(7_i64, "seven".to_string());

        let ReflectRef::Map(reflected) = map.reflect_ref() else {
            panic!("expected a map");
        };
        assert!(reflected.get(&"7".to_string()).is_none());
        assert!(reflected.get(&7_i64).is_some());
    }

    #[test]
    fn textual_keys() {
        let mut owned = BTreeMap::new();
        owned.insert("a".to_string(), 1_u8);
        let mut borrowed = std::collections::HashMap::new();
        borrowed.insert("b", 2_u8);
        let mut numeric = BTreeMap::new();
        numeric.insert(3_u8, 3_u8);

        let ReflectRef::Map(owned) = owned.reflect_ref() else {
            panic!("expected a map");
        };
        let ReflectRef::Map(borrowed) = borrowed.reflect_ref() else {
            panic!("expected a map");
        };
        let ReflectRef::Map(numeric) = numeric.reflect_ref() else {
            panic!("expected a map");
        };

        assert_eq!(owned.get_str("a").unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(borrowed.get_str("b").unwrap().downcast_ref::<u8>(), Some(&2));
        assert!(borrowed.get_str("a").is_none());
        assert!(numeric.get_str("3").is_none());
    }

    #[test]
    fn hashbrown_map_info() {
        let mut map: FixedHashMap<String, bool> = FixedHashMap::default();
        map.insert("on".to_string(), true);

        let info = <FixedHashMap<String, bool>>::type_info().as_map().unwrap();
        assert!(info.key_ty().is::<String>());
        assert!(info.value_info().ty().is::<bool>());
        assert!(map.as_reflect().reflect_ref().peel().is_some());
    }
}
