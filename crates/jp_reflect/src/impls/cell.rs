//! Containers for static storage of type information.
//!
//! A [`Typed`](crate::info::Typed) implementation keeps its [`TypeInfo`] in a
//! `static` inside `type_info`. For a generic type that `static` is shared by
//! every instantiation, so [`GenericTypeInfoCell`] keys its entries by
//! [`TypeId`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use jp_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// Internally an [`OnceLock`], almost no additional expense.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, creating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// ```
/// use jp_reflect::{
///     impls::GenericTypeInfoCell,
///     info::{ListInfo, TypeInfo, Typed},
/// };
///
/// struct Stack<T>(Vec<T>);
///
/// impl<T: Typed> Typed for Stack<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
///
/// let a = <Stack<u8>>::type_info();
/// let b = <Stack<u16>>::type_info();
/// assert!(a.as_list().unwrap().item_info().ty().is::<u8>());
/// assert!(b.as_list().unwrap().item_info().ty().is::<u16>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, creating it with `f` if absent.
    ///
    /// The created info is leaked; it lives as long as the program.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // `f` may itself ask for other infos, so it runs before the write lock is
    // taken. A racing thread may build the same info; the first one stays.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || &*Box::leak(Box::new(value)))
    }
}
