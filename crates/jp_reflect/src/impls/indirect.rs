use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
use crate::info::{IndirectInfo, OpaqueInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Indirect, ReflectRef};

macro_rules! impl_reflect_indirect {
    ($ty:ident, |$this:ident| $target:expr) => {
        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Indirect(IndirectInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Indirect
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Indirect(self)
            }
        }

        impl<T: Reflect + Typed> Indirect for $ty<T> {
            #[inline]
            fn target(&self) -> Option<&dyn Reflect> {
                let $this = self;
                $target
            }
        }
    };
}

impl_reflect_indirect!(Option, |this| this.as_ref().map(|v| v as &dyn Reflect));
impl_reflect_indirect!(Box, |this| Some(&**this as &dyn Reflect));
impl_reflect_indirect!(Arc, |this| Some(&**this as &dyn Reflect));

// -----------------------------------------------------------------------------
// Box<dyn Reflect>

// Its static info says nothing about the boxed value, so it is opaque.
impl Typed for Box<dyn Reflect> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Indirect
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Indirect(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl Indirect for Box<dyn Reflect> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn option_target() {
        let some = Some(3_u8);
        let none: Option<u8> = None;

        let ReflectRef::Indirect(indirect) = some.reflect_ref() else {
            panic!("expected an indirection");
        };
        assert_eq!(indirect.target().unwrap().downcast_ref::<u8>(), Some(&3));

        let ReflectRef::Indirect(indirect) = none.reflect_ref() else {
            panic!("expected an indirection");
        };
        assert!(indirect.target().is_none());
        assert_eq!(format!("{:?}", none.as_reflect()), "null");
    }

    #[test]
    fn nested_indirection_peels() {
        let value = Some(Box::new(Arc::new("x".to_string())));
        let leaf = value.reflect_ref().peel().unwrap();
        assert_eq!(leaf.kind(), ReflectKind::Opaque);

        let info = <Option<Box<Arc<u8>>>>::type_info();
        assert!(info.peel_indirect().ty().is::<u8>());
    }

    #[test]
    fn boxed_dyn_reflect_targets_contents() {
        let boxed: Box<dyn Reflect> = Box::new(5_i16);
        let outer: &dyn Reflect = &boxed;
        assert!(outer.is::<Box<dyn Reflect>>());
        assert_eq!(outer.reflect_kind(), ReflectKind::Indirect);

        let ReflectRef::Indirect(indirect) = outer.reflect_ref() else {
            panic!("expected an indirection");
        };
        assert_eq!(indirect.target().unwrap().downcast_ref::<i16>(), Some(&5));
        assert_eq!(format!("{outer:?}"), "5");
    }
}
