use alloc::borrow::ToOwned;
use core::any::{Any, type_name};
use core::borrow::Borrow;
use core::str::Split;

use jp_reflect::Reflect;
use jp_reflect::ops::{ReflectRef, Struct};

use crate::{FieldCache, PointerError, Token};

// -----------------------------------------------------------------------------
// Free functions

/// Resolves the pointer `text` against `value`.
///
/// Segments are parsed while walking, so a missing value on an early segment
/// is reported even if a later segment is malformed. To resolve the same
/// pointer many times, parse it once into a [`Pointer`](crate::Pointer).
///
/// # Examples
///
/// ```
/// use jp_pointer::PointerErrorKind;
/// use serde_json::{Value, json};
///
/// let doc = json!({ "A": [{}, {}, { "B": "C" }] });
/// let found = jp_pointer::get("/A/2/B", &doc).unwrap();
/// assert_eq!(found.downcast_ref::<Value>(), Some(&json!("C")));
///
/// let err = jp_pointer::get("/A/-", &doc).unwrap_err();
/// assert_eq!(err.kind(), PointerErrorKind::ArrayIndexOutOfBounds);
/// ```
pub fn get<'v>(text: &str, value: &'v dyn Reflect) -> Result<&'v dyn Reflect, PointerError> {
    match segments(text)? {
        Some(segments) => resolve(FieldCache::global(), segments.map(Token::parse), value),
        None => Ok(value),
    }
}

/// Resolves the pointer `text` against `value` and downcasts the result.
///
/// See [`Pointer::get_as`](crate::Pointer::get_as).
pub fn get_as<'v, T: Any>(text: &str, value: &'v dyn Reflect) -> Result<&'v T, PointerError> {
    downcast(get(text, value)?)
}

/// Splits pointer text into its raw segments; `None` for the root pointer.
pub(crate) fn segments(text: &str) -> Result<Option<Split<'_, char>>, PointerError> {
    if text.is_empty() {
        return Ok(None);
    }
    match text.strip_prefix('/') {
        Some(rest) => Ok(Some(rest.split('/'))),
        None => Err(PointerError::InvalidPointer(text.to_owned())),
    }
}

/// Downcasts `value`, looking through `Option`, `Box` and `Arc` layers.
pub(crate) fn downcast<T: Any>(value: &dyn Reflect) -> Result<&T, PointerError> {
    let mut current = value;
    loop {
        if let Some(found) = current.downcast_ref::<T>() {
            return Ok(found);
        }
        match current.reflect_ref() {
            ReflectRef::Indirect(indirect) => match indirect.target() {
                Some(target) => current = target,
                None => break,
            },
            _ => break,
        }
    }
    Err(PointerError::TypeMismatch {
        expected: type_name::<T>(),
    })
}

// -----------------------------------------------------------------------------
// Engine

/// Walks `tokens` from `root`, stopping at the first error.
///
/// `serde_json` containers are stepped through directly. The first value
/// that is not one of them switches the walk to reflection for that token
/// and every later one.
pub(crate) fn resolve<'v, T, I>(
    cache: &FieldCache,
    tokens: I,
    root: &'v dyn Reflect,
) -> Result<&'v dyn Reflect, PointerError>
where
    T: Borrow<Token>,
    I: IntoIterator<Item = Result<T, PointerError>>,
{
    let mut current = root;
    #[cfg(feature = "json")]
    let mut dynamic = true;

    for token in tokens {
        let token = token?;
        let token: &Token = token.borrow();

        #[cfg(feature = "json")]
        if dynamic {
            if let Some(next) = json::step(token, current)? {
                current = next;
                continue;
            }
            log::trace!(
                "falling back to reflection at token {:?} on `{}`",
                token.field(),
                current.reflect_type_info().type_path()
            );
            dynamic = false;
        }

        current = step(cache, token, current)?;
    }

    Ok(current)
}

fn not_found(token: &Token) -> PointerError {
    PointerError::ValueNotFound(token.field().to_owned())
}

/// The position addressed by `token` in a sequence of `len` elements.
fn element_index(token: &Token, len: usize) -> Result<usize, PointerError> {
    match token.index() {
        Some(index) if index < len => Ok(index),
        Some(_) => Err(out_of_bounds(token, len)),
        None if token.is_append_marker() => Err(out_of_bounds(token, len)),
        None => Err(PointerError::InvalidArrayIndex(token.field().to_owned())),
    }
}

fn out_of_bounds(token: &Token, len: usize) -> PointerError {
    PointerError::ArrayIndexOutOfBounds {
        token: token.field().to_owned(),
        len,
    }
}

fn step<'v>(
    cache: &FieldCache,
    token: &Token,
    current: &'v dyn Reflect,
) -> Result<&'v dyn Reflect, PointerError> {
    let shape = current.reflect_ref().peel().ok_or_else(|| not_found(token))?;

    let next = match shape {
        ReflectRef::List(list) => list.get(element_index(token, list.len())?),
        ReflectRef::Array(array) => array.get(element_index(token, array.len())?),
        ReflectRef::Map(map) => map.get_str(token.field()),
        ReflectRef::Struct(record) => struct_field(cache, token, record),
        ReflectRef::Indirect(_) | ReflectRef::Opaque(_) => None,
    };

    next.ok_or_else(|| not_found(token))
}

fn struct_field<'v>(
    cache: &FieldCache,
    token: &Token,
    record: &'v dyn Struct,
) -> Option<&'v dyn Reflect> {
    let Some(info) = record.reflect_type_info().as_struct() else {
        return record.field(token.field());
    };

    let table = cache.table(info);
    walk_chain(record, table.get(token.field())?)
}

/// Follows a field position chain; every position but the last must land on
/// a struct, possibly behind indirections.
fn walk_chain<'v>(record: &'v dyn Struct, chain: &[usize]) -> Option<&'v dyn Reflect> {
    let (&last, prefix) = chain.split_last()?;

    let mut record = record;
    for &position in prefix {
        match record.field_at(position)?.reflect_ref().peel()? {
            ReflectRef::Struct(inner) => record = inner,
            _ => return None,
        }
    }
    record.field_at(last)
}

// -----------------------------------------------------------------------------
// JSON fast path

#[cfg(feature = "json")]
mod json {
    use alloc::string::String;
    use alloc::vec::Vec;

    use jp_reflect::Reflect;
    use serde_json::{Map, Value};

    use super::{element_index, not_found};
    use crate::{PointerError, Token};

    /// Steps into a `serde_json` container.
    ///
    /// `Ok(None)` means `current` is not a JSON container and reflection has
    /// to take over.
    pub(super) fn step<'v>(
        token: &Token,
        current: &'v dyn Reflect,
    ) -> Result<Option<&'v dyn Reflect>, PointerError> {
        if let Some(value) = current.downcast_ref::<Value>() {
            return match value {
                Value::Object(entries) => entry(token, entries).map(Some),
                Value::Array(items) => element(token, items).map(Some),
                Value::Null => Err(not_found(token)),
                _ => Ok(None),
            };
        }
        if let Some(entries) = current.downcast_ref::<Map<String, Value>>() {
            return entry(token, entries).map(Some);
        }
        if let Some(items) = current.downcast_ref::<Vec<Value>>() {
            return element(token, items).map(Some);
        }
        Ok(None)
    }

    fn entry<'v>(
        token: &Token,
        entries: &'v Map<String, Value>,
    ) -> Result<&'v dyn Reflect, PointerError> {
        match entries.get(token.field()) {
            Some(value) => Ok(value),
            None => Err(not_found(token)),
        }
    }

    fn element<'v>(token: &Token, items: &'v [Value]) -> Result<&'v dyn Reflect, PointerError> {
        let index = element_index(token, items.len())?;
        Ok(&items[index])
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use jp_reflect::Reflect;
    use jp_reflect::derive::Reflect;
    use jp_reflect::info::ReflectKind;
    use serde_json::{Value, json};

    use super::{get, get_as};
    use crate::{PointerError, PointerErrorKind};

    #[derive(Reflect)]
    struct Leaf {
        #[reflect(json = "B")]
        pub b: String,
    }

    #[derive(Reflect)]
    struct Doc {
        #[reflect(json = "A")]
        pub a: Vec<Leaf>,
    }

    #[derive(Reflect)]
    struct Renamed {
        #[reflect(json = "B")]
        pub e: String,
    }

    #[derive(Reflect)]
    struct Dynamic {
        #[reflect(json = "A")]
        pub d: Vec<Box<dyn Reflect>>,
    }

    #[derive(Reflect)]
    struct Nullable {
        #[reflect(json = "A")]
        pub a: Vec<Option<Box<dyn Reflect>>>,
    }

    #[derive(Reflect)]
    struct Inner {
        #[reflect(json = "X")]
        pub x: u8,
        #[reflect(json = "Y")]
        pub y: u8,
    }

    #[derive(Reflect)]
    struct Shadow {
        #[reflect(embed)]
        inner: Option<Box<Inner>>,
        #[reflect(json = "X")]
        pub x: u8,
    }

    fn leaf(b: &str) -> Leaf {
        Leaf { b: b.to_string() }
    }

    fn typed_doc() -> Doc {
        Doc {
            a: vec![leaf(""), leaf(""), leaf("C")],
        }
    }

    // -------------------------------------------------------------------------
    // Resolution

    #[test]
    fn resolves_dynamic_values() {
        let doc = json!({ "A": [{}, {}, { "B": "C" }] });
        assert_eq!(get_as::<Value>("/A/2/B", &doc), Ok(&json!("C")));
        assert_eq!(get_as::<Value>("", &doc), Ok(&doc));

        let inner = doc["A"].as_array().unwrap();
        assert_eq!(get_as::<Value>("/2/B", inner), Ok(&json!("C")));

        let entries = doc.as_object().unwrap();
        assert_eq!(get_as::<Value>("/A/0", entries), Ok(&json!({})));
    }

    #[test]
    fn resolves_typed_values() {
        let doc = typed_doc();
        assert_eq!(get_as::<String>("/A/2/B", &doc).unwrap(), "C");
        assert!(get_as::<Vec<Leaf>>("/A", &doc).is_ok());

        let err = get("/A/2/b", &doc).unwrap_err();
        assert_eq!(err, PointerError::ValueNotFound("b".to_string()));
    }

    #[test]
    fn resolves_boxed_reflect_values() {
        let doc = Dynamic {
            d: vec![
                Box::new(Renamed { e: "x".to_string() }),
                Box::new(1_u8),
                Box::new(Renamed { e: "C".to_string() }),
            ],
        };
        assert_eq!(get_as::<String>("/A/2/B", &doc).unwrap(), "C");

        let err = get("/A/1/B", &doc).unwrap_err();
        assert_eq!(err.kind(), PointerErrorKind::ValueNotFound);
    }

    #[test]
    fn falls_back_to_reflection_inside_json() {
        let doc: Box<dyn Reflect> = Box::new(json!({ "A": [1, { "B": true }] }));
        assert_eq!(get_as::<Value>("/A/1/B", &doc), Ok(&json!(true)));

        let mut map = BTreeMap::new();
        map.insert("doc".to_string(), json!({ "k": [10, 20] }));
        assert_eq!(get_as::<Value>("/doc/k/1", &map), Ok(&json!(20)));

        let err = get("/doc/k/1/deeper", &map).unwrap_err();
        assert_eq!(err, PointerError::ValueNotFound("deeper".to_string()));
    }

    // -------------------------------------------------------------------------
    // Sequences

    #[test]
    fn sequence_errors_report_length() {
        let dynamic = json!({ "A": [1, 2, 3] });
        let typed = typed_doc();

        for value in [&dynamic as &dyn Reflect, &typed] {
            assert_eq!(
                get("/A/5", value).unwrap_err(),
                PointerError::ArrayIndexOutOfBounds {
                    token: "5".to_string(),
                    len: 3
                }
            );
            assert_eq!(
                get("/A/-", value).unwrap_err(),
                PointerError::ArrayIndexOutOfBounds {
                    token: "-".to_string(),
                    len: 3
                }
            );
            assert_eq!(
                get("/A/x", value).unwrap_err(),
                PointerError::InvalidArrayIndex("x".to_string())
            );
            assert_eq!(
                get("/A/01", value).unwrap_err(),
                PointerError::InvalidArrayIndex("01".to_string())
            );
        }
    }

    #[test]
    fn fixed_arrays_index_like_lists() {
        let value = [Some(1_u8), None];
        assert_eq!(get_as::<u8>("/0", &value), Ok(&1));
        assert_eq!(get("/1", &value).unwrap().reflect_kind(), ReflectKind::Indirect);
        assert_eq!(
            get("/1/0", &value).unwrap_err(),
            PointerError::ValueNotFound("0".to_string())
        );
        assert_eq!(get("/2", &value).unwrap_err().kind(), PointerErrorKind::ArrayIndexOutOfBounds);
    }

    // -------------------------------------------------------------------------
    // Nulls

    #[test]
    fn null_elements_resolve() {
        let dynamic = json!({ "A": [null, null, null] });
        assert_eq!(get_as::<Value>("/A/2", &dynamic), Ok(&Value::Null));
        assert_eq!(
            get("/A/2/B", &dynamic).unwrap_err(),
            PointerError::ValueNotFound("B".to_string())
        );

        let typed = Nullable {
            a: vec![None, None, None],
        };
        let found = get("/A/2", &typed).unwrap();
        assert!(found.is::<Option<Box<dyn Reflect>>>());
        assert_eq!(
            get("/A/2/B", &typed).unwrap_err(),
            PointerError::ValueNotFound("B".to_string())
        );
    }

    // -------------------------------------------------------------------------
    // Structs

    #[test]
    fn outer_field_shadows_embedded() {
        let value = Shadow {
            inner: Some(Box::new(Inner { x: 1, y: 2 })),
            x: 3,
        };
        assert_eq!(get_as::<u8>("/X", &value), Ok(&3));
        assert_eq!(get_as::<u8>("/Y", &value), Ok(&2));

        let empty = Shadow { inner: None, x: 3 };
        assert_eq!(get_as::<u8>("/X", &empty), Ok(&3));
        assert_eq!(
            get("/Y", &empty).unwrap_err(),
            PointerError::ValueNotFound("Y".to_string())
        );
    }

    #[test]
    fn maps_need_textual_keys() {
        let mut by_name = BTreeMap::new();
        by_name.insert("a".to_string(), 1_u8);
        assert_eq!(get_as::<u8>("/a", &by_name), Ok(&1));

        let mut by_literal = BTreeMap::new();
        by_literal.insert("lit", vec![4_u8]);
        assert_eq!(get_as::<u8>("/lit/0", &by_literal), Ok(&4));
        assert_eq!(
            get("/other", &by_literal).unwrap_err(),
            PointerError::ValueNotFound("other".to_string())
        );

        let mut by_number = BTreeMap::new();
        by_number.insert(1_u32, 1_u8);
        assert_eq!(
            get("/1", &by_number).unwrap_err(),
            PointerError::ValueNotFound("1".to_string())
        );
    }

    #[test]
    fn scalars_have_no_children() {
        let value = Arc::new(5_i32);
        assert_eq!(get_as::<i32>("", &value), Ok(&5));
        assert_eq!(
            get("/0", &value).unwrap_err(),
            PointerError::ValueNotFound("0".to_string())
        );
    }

    // -------------------------------------------------------------------------
    // Errors

    #[test]
    fn errors_follow_walk_order() {
        let doc = json!({ "A": 1 });
        assert_eq!(
            get("/B/~2", &doc).unwrap_err(),
            PointerError::ValueNotFound("B".to_string())
        );
        assert_eq!(
            get("/A~2/B", &doc).unwrap_err(),
            PointerError::InvalidToken("A~2".to_string())
        );
        assert_eq!(
            get("A", &doc).unwrap_err(),
            PointerError::InvalidPointer("A".to_string())
        );
    }

    #[test]
    fn typed_retrieval_mismatch() {
        let doc = typed_doc();
        assert_eq!(
            get_as::<u32>("/A/0/B", &doc).unwrap_err(),
            PointerError::TypeMismatch {
                expected: core::any::type_name::<u32>()
            }
        );

        let boxed: Vec<Box<dyn Reflect>> = vec![Box::new(Some(7_u16))];
        assert_eq!(get_as::<u16>("/0", &boxed), Ok(&7));
    }
}
