use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by every
/// built-in implementation in [`impls`](crate::impls). Manual implementations
/// should store the info in a [`NonGenericTypeInfoCell`] or, for generic types,
/// a [`GenericTypeInfoCell`]:
///
/// ```
/// use jp_reflect::{
///     Reflect,
///     impls::NonGenericTypeInfoCell,
///     info::{NamedField, ReflectKind, StructInfo, TypeInfo, Typed},
///     ops::{ReflectRef, Struct},
/// };
///
/// struct Celsius {
///     degrees: f64,
/// }
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             NamedField::new::<f64>("degrees").with_exported(true),
///         ])))
///     }
/// }
///
/// impl Reflect for Celsius {
///     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Struct }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
/// }
///
/// impl Struct for Celsius {
///     fn field(&self, name: &str) -> Option<&dyn Reflect> {
///         (name == "degrees").then_some(&self.degrees as &dyn Reflect)
///     }
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         (index == 0).then_some(&self.degrees as &dyn Reflect)
///     }
///     fn field_len(&self) -> usize { 1 }
/// }
///
/// let info = Celsius::type_info().as_struct().unwrap();
/// assert_eq!(info.field_at(0).unwrap().name(), "degrees");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe counterpart of [`Typed`].
///
/// Blanket-implemented for every [`Typed`] type; a supertrait of
/// [`Reflect`](crate::Reflect).
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
