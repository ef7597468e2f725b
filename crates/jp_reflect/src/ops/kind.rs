use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, Indirect, List, Map, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, shape-specific view of a reflected value.
///
/// Obtained through [`Reflect::reflect_ref`].
///
/// ```
/// use jp_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// let value = vec![1_u8, 2, 3];
/// let ReflectRef::List(list) = value.reflect_ref() else {
///     unreachable!()
/// };
/// assert_eq!(list.len(), 3);
/// assert_eq!(value.reflect_ref().kind(), ReflectKind::List);
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Indirect(&'a dyn Indirect),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [kind](ReflectKind) of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Indirect(_) => ReflectKind::Indirect,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Follows [`Indirect`] layers.
    ///
    /// Returns `None` as soon as a layer refers to nothing.
    ///
    /// ```
    /// use jp_reflect::{Reflect, info::ReflectKind};
    ///
    /// let present: Option<Box<u8>> = Some(Box::new(1));
    /// let absent: Option<Box<u8>> = None;
    /// assert_eq!(present.reflect_ref().peel().unwrap().kind(), ReflectKind::Opaque);
    /// assert!(absent.reflect_ref().peel().is_none());
    /// ```
    pub fn peel(self) -> Option<ReflectRef<'a>> {
        let mut current = self;
        while let Self::Indirect(indirect) = current {
            current = indirect.target()?.reflect_ref();
        }
        Some(current)
    }
}
