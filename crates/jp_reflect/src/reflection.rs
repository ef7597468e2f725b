use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of runtime reflection.
///
/// A `&dyn Reflect` can be asked for its shape through [`reflect_ref`] and
/// narrowed to a concrete type through [`downcast_ref`]. Traversal code only
/// ever borrows; nothing here mutates the reflected value.
///
/// Prefer [the derive macro](crate::derive::Reflect) for structs. Containers
/// from `core`, `alloc` and `std` are implemented in [`impls`](crate::impls).
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` reports the box. [`Reflect::ty_id`]
/// reports the value the trait object was created from:
///
/// ```
/// use jp_reflect::Reflect;
/// use core::any::TypeId;
///
/// let value: &dyn Reflect = &5_u8;
/// assert_eq!(value.ty_id(), TypeId::of::<u8>());
/// assert!(value.is::<u8>());
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`downcast_ref`]: Reflect#method.downcast_ref
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Moves this value into a `Box<dyn Reflect>`.
    ///
    /// ```
    /// use jp_reflect::Reflect;
    ///
    /// let boxed = "text".to_string().into_boxed_reflect();
    /// assert_eq!(boxed.downcast_ref::<String>().unwrap(), "text");
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [kind](ReflectKind) of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns a shape-specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Formats the value for [`Debug`](fmt::Debug) output of `dyn Reflect`.
    ///
    /// The default prints the shape recursively; leaf types override it with
    /// their own `Debug`.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(value) => {
                let info = self.reflect_type_info();
                let mut out = f.debug_struct(info.type_path());
                if let Some(info) = info.as_struct() {
                    for (index, field) in info.iter().enumerate() {
                        if let Some(value) = value.field_at(index) {
                            out.field(field.name(), &value);
                        }
                    }
                }
                out.finish()
            }
            ReflectRef::List(list) => f.debug_list().entries(list.iter()).finish(),
            ReflectRef::Array(array) => f
                .debug_list()
                .entries((0..array.len()).filter_map(|i| array.get(i)))
                .finish(),
            ReflectRef::Map(map) => {
                let path = self.reflect_type_info().type_path();
                write!(f, "{path} {{ len: {} }}", map.len())
            }
            ReflectRef::Indirect(indirect) => match indirect.target() {
                Some(target) => target.reflect_debug(f),
                None => f.write_str("null"),
            },
            ReflectRef::Opaque(_) => f.write_str(self.reflect_type_info().type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// ```
    /// use jp_reflect::Reflect;
    ///
    /// let value: &dyn Reflect = &vec![1_u32, 2];
    /// assert_eq!(value.downcast_ref::<Vec<u32>>(), Some(&vec![1, 2]));
    /// assert!(value.downcast_ref::<u32>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{ReflectRef, Struct};

    #[derive(Reflect)]
    struct Inner {
        pub x: i32,
        pub shared: String,
    }

    #[derive(Reflect)]
    struct Outer {
        #[reflect(embed)]
        inner: Inner,
        #[reflect(json = "renamed,omitempty")]
        pub r#type: u8,
        #[serde(rename = "s")]
        pub serde_named: bool,
        #[serde(skip)]
        pub skipped: f64,
        private: u16,
    }

    #[derive(Reflect)]
    struct Wrapper<T> {
        pub items: Vec<T>,
        pub fixed: u32,
    }

    #[derive(Reflect)]
    struct Marker;

    fn outer() -> Outer {
        Outer {
            inner: Inner {
                x: 1,
                shared: "in".to_string(),
            },
            r#type: 2,
            serde_named: true,
            skipped: 0.5,
            private: 3,
        }
    }

    #[test]
    fn derived_field_access() {
        let value = outer();
        assert_eq!(value.field_len(), 5);
        assert_eq!(value.field("type").unwrap().downcast_ref::<u8>(), Some(&2));
        assert_eq!(value.field_at(4).unwrap().downcast_ref::<u16>(), Some(&3));
        assert!(value.field("missing").is_none());
        assert!(value.field_at(5).is_none());
        assert_eq!(value.iter_fields().count(), 5);

        let ReflectRef::Struct(inner) = value.field("inner").unwrap().reflect_ref() else {
            panic!("expected a struct");
        };
        assert_eq!(inner.field("x").unwrap().downcast_ref::<i32>(), Some(&1));
    }

    #[test]
    fn derived_field_metadata() {
        let info = Outer::type_info().as_struct().unwrap();
        let fields: Vec<_> = info
            .iter()
            .map(|f| (f.name(), f.is_exported(), f.is_embedded(), f.tag()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("inner", false, true, None),
                ("type", true, false, Some("renamed,omitempty")),
                ("serde_named", true, false, Some("s")),
                ("skipped", true, false, Some("-")),
                ("private", false, false, None),
            ]
        );
        assert!(info.field_at(0).unwrap().type_info().is_struct());
    }

    #[test]
    fn generic_and_unit_structs() {
        let value = Wrapper {
            items: vec![1_u8],
            fixed: 9,
        };
        assert_eq!(value.reflect_kind(), ReflectKind::Struct);
        let items = value.field("items").unwrap();
        assert_eq!(items.reflect_kind(), ReflectKind::List);

        let a = <Wrapper<u8>>::type_info();
        let b = <Wrapper<i8>>::type_info();
        assert_ne!(a.type_id(), b.type_id());

        assert_eq!(Marker.field_len(), 0);
        assert!(Marker::type_info().as_struct().unwrap().field_at(0).is_none());
    }

    #[test]
    fn debug_output() {
        let value: Box<dyn Reflect> = Box::new(Wrapper {
            items: vec![Some(1_u8), None],
            fixed: 9,
        });
        let text = format!("{value:?}");
        assert!(text.ends_with("{ items: [1, null], fixed: 9 }"), "{text}");
    }
}
