use core::any::{TypeId, type_name};
use core::fmt;

use crate::info::{StructInfo, Typed};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to one of the traits in [`ops`](crate::ops) and to
/// one variant of [`TypeInfo`] and [`ReflectRef`](crate::ops::ReflectRef).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Map,
    /// A value that may or may not refer to another value: `Option<T>`,
    /// `Box<T>`, `Arc<T>`.
    Indirect,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Indirect => f.pad("Indirect"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a reflected type: its [`TypeId`] and its type path.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the `Type` of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, as given by [`type_name`].
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns `true` if this is the type `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// Shape infos

macro_rules! impl_ty_accessors {
    ($info:ident) => {
        impl $info {
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

            /// Returns the [`TypeId`].
            #[inline]
            pub const fn type_id(&self) -> TypeId {
                self.ty.id()
            }
        }
    };
}

/// Type info for growable sequences such as `Vec<T>`.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    #[inline]
    pub fn new<TList: ?Sized + 'static, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the [`TypeInfo`] of the element type.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}

/// Type info for fixed-size sequences such as `[T; N]`.
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    #[inline]
    pub fn new<TArray: ?Sized + 'static, TItem: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_info: TItem::type_info,
            capacity,
        }
    }

    /// Returns the [`TypeInfo`] of the element type.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the fixed length.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Type info for key-value maps.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    #[inline]
    pub fn new<TMap: ?Sized + 'static, TKey: 'static, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_ty: Type::of::<TKey>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the key [`Type`].
    ///
    /// Pointer tokens can only address maps whose key type is `String`.
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the [`TypeInfo`] of the value type.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}

/// Type info for values that refer to at most one other value.
#[derive(Clone, Debug)]
pub struct IndirectInfo {
    ty: Type,
    target_info: fn() -> &'static TypeInfo,
}

impl IndirectInfo {
    #[inline]
    pub fn new<TIndirect: ?Sized + 'static, TTarget: Typed>() -> Self {
        Self {
            ty: Type::of::<TIndirect>(),
            target_info: TTarget::type_info,
        }
    }

    /// Returns the [`TypeInfo`] of the referenced type.
    #[inline]
    pub fn target_info(&self) -> &'static TypeInfo {
        (self.target_info)()
    }
}

/// Type info for leaf values with no reflected structure.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    #[inline]
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

impl_ty_accessors!(ListInfo);
impl_ty_accessors!(ArrayInfo);
impl_ty_accessors!(MapInfo);
impl_ty_accessors!(IndirectInfo);
impl_ty_accessors!(OpaqueInfo);

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Obtained through [`Typed::type_info`] when the type is known, or through
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped) from a
/// `dyn Reflect`. Each variant carries the shape-specific info, e.g. the
/// declared fields of a [`StructInfo`].
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Indirect(IndirectInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Returns the shape-specific info, or `None` for another kind.
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_indirect: Indirect => IndirectInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns `true` for [`TypeInfo::Struct`].
    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Indirect(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the full type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the [kind](ReflectKind) of this info.
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

    /// Follows [`Indirect`](TypeInfo::Indirect) layers down to the first
    /// info of another kind.
    ///
    /// ```
    /// use jp_reflect::info::{ReflectKind, Typed};
    ///
    /// let info = <Option<Box<Vec<u8>>>>::type_info().peel_indirect();
    /// assert_eq!(info.kind(), ReflectKind::List);
    /// ```
    pub fn peel_indirect(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Indirect(indirect) = info {
            info = indirect.target_info();
        }
        info
    }
}
