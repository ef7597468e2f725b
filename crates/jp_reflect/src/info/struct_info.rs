use alloc::boxed::Box;

use crate::info::{NamedField, Type};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Fields keep their declaration order, which is also the order
/// [`Struct::field_at`] uses.
///
/// # Examples
///
/// ```rust
/// use jp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    /// Create a new [`StructInfo`].
    pub fn new<T: Struct>(fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the full type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given field `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
