use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// Access to the fields of a struct with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). Field
/// indices follow declaration order and agree with
/// [`StructInfo::field_at`](crate::info::StructInfo::field_at).
pub trait Struct: Reflect {
    /// Returns the value of the field named `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jp_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let ts = Foo { a: 1, b: true };
    ///
    /// assert!(ts.field("a").is_some());
    /// assert!(ts.field("c").is_none());
    /// ```
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the value of the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>
    where
        Self: Sized,
    {
        StructFieldIter::new(self)
    }
}

impl dyn Struct {
    /// See [`Struct::iter_fields`].
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a [`Struct`].
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        Self { value, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value.field_at(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.value.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
