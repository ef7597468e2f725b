use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::ReflectRef;

/// Implements [`Typed`] and [`Reflect`] for leaf types printed with `Debug`.
macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

impl_reflect_opaque!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn leaf_values_are_opaque() {
        let value: &dyn Reflect = &"C".to_string();
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(format!("{value:?}"), "\"C\"");
        assert_eq!(<i32 as Typed>::type_info().type_path(), "i32");
    }
}
