use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, ListInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Array, List, ReflectRef};

// -----------------------------------------------------------------------------
// Lists

macro_rules! impl_reflect_list {
    ($ty:ident, $as_items:path) => {
        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::List
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                $as_items(self).get(index).map(|item| item as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }
        }
    };
}

impl_reflect_list!(Vec, Vec::as_slice);
impl_reflect_list!(VecDeque, core::convert::identity);

// -----------------------------------------------------------------------------
// Arrays

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Array
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::format;
    use alloc::vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn vec_is_list() {
        let value = vec![1_u8, 2, 3];
        let ReflectRef::List(list) = value.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).unwrap().downcast_ref::<u8>(), Some(&3));
        assert!(list.get(3).is_none());
        assert_eq!(list.iter().count(), 3);
        assert_eq!(format!("{:?}", value.as_reflect()), "[1, 2, 3]");
    }

    #[test]
    fn deque_is_list() {
        let value: VecDeque<i32> = [4, 5].into_iter().collect();
        assert_eq!(value.reflect_kind(), ReflectKind::List);
        let ReflectRef::List(list) = value.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(list.get(1).unwrap().downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn array_is_array() {
        let value = [true, false];
        let ReflectRef::Array(array) = value.reflect_ref() else {
            panic!("expected an array");
        };
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(1).unwrap().downcast_ref::<bool>(), Some(&false));

        let info = <[bool; 2]>::type_info().as_array().unwrap();
        assert_eq!(info.capacity(), 2);
        assert!(info.item_info().ty().is::<bool>());
    }

    #[test]
    fn generic_infos_are_distinct() {
        let a = <Vec<u8>>::type_info();
        let b = <Vec<u16>>::type_info();
        assert_ne!(a.type_id(), b.type_id());
        assert!(core::ptr::eq(a, <Vec<u8>>::type_info()));
    }
}
