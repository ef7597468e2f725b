use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// Besides name and type, a field records what pointer resolution needs to
/// decide its JSON-visible name:
///
/// - `exported`: declared `pub`. Non-exported fields are invisible unless
///   they are embedded structs.
/// - `embedded`: the field's own fields are promoted into the parent.
/// - `tag`: the raw serialization tag, e.g. `"name,omitempty"` or `"-"`.
///
/// # Examples
///
/// ```
/// use jp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(json = "value,omitempty")]
///     pub field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.ty().is::<f32>());
/// assert_eq!(field.name(), "field_a");
/// assert_eq!(field.tag(), Some("value,omitempty"));
/// assert!(field.is_exported());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty: Type,
    // Created on first access; the function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    exported: bool,
    embedded: bool,
    tag: Option<&'static str>,
}

impl NamedField {
    /// Creates a non-exported, non-embedded, untagged field of type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            exported: false,
            embedded: false,
            tag: None,
        }
    }

    #[inline]
    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    #[inline]
    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    #[inline]
    pub fn with_tag(mut self, tag: Option<&'static str>) -> Self {
        self.tag = tag;
        self
    }

    /// Returns the field name as declared.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw serialization tag, if any.
    #[inline]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }
}
