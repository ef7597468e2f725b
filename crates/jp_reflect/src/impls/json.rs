use alloc::string::String;
use core::fmt;

use serde_json::{Map as JsonMap, Value};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{MapInfo, OpaqueInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Map, ReflectRef};

// -----------------------------------------------------------------------------
// Value

// The shape of a `Value` is only known at runtime, so its static info is
// opaque while `reflect_ref` reports the actual variant.
impl Typed for Value {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for Value {
    fn reflect_kind(&self) -> ReflectKind {
        match self {
            Value::Array(_) => ReflectKind::List,
            Value::Object(_) => ReflectKind::Map,
            _ => ReflectKind::Opaque,
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Value::Array(items) => ReflectRef::List(items),
            Value::Object(entries) => ReflectRef::Map(entries),
            _ => ReflectRef::Opaque(self),
        }
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Map<String, Value>

impl Typed for JsonMap<String, Value> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Map(MapInfo::new::<Self, String, Value>()))
    }
}

impl Reflect for JsonMap<String, Value> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Map
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Map for JsonMap<String, Value> {
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let key = key.downcast_ref::<String>()?;
        JsonMap::get(self, key).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
        JsonMap::get(self, key).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        JsonMap::len(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use serde_json::json;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ReflectRef;

    #[test]
    fn value_reports_runtime_shape() {
        let value = json!({ "A": [1, 2], "B": null });
        assert_eq!(value.reflect_kind(), ReflectKind::Map);

        let ReflectRef::Map(map) = value.reflect_ref() else {
            panic!("expected a map");
        };
        let items = map.get(&"A".to_string()).unwrap();
        assert_eq!(items.reflect_kind(), ReflectKind::List);
        assert_eq!(map.get(&"B".to_string()).unwrap().reflect_kind(), ReflectKind::Opaque);
        assert!(map.get(&1_u8).is_none());
        assert_eq!(map.get_str("B").unwrap().reflect_kind(), ReflectKind::Opaque);
        assert!(map.get_str("C").is_none());
    }

    #[test]
    fn value_debug_uses_serde_json() {
        let value = json!([true]);
        assert_eq!(format!("{:?}", value.as_reflect()), format!("{value:?}"));
    }
}
