//! Static type information for reflected types.
//!
//! - [`Typed`]: access to a type's [`TypeInfo`] without an instance.
//! - [`DynamicTyped`]: the same, through a trait object.
//! - [`TypeInfo`]: one variant per [`ReflectKind`], e.g. [`StructInfo`].
//! - [`NamedField`]: a struct field with the metadata field promotion needs
//!   (visibility, embedding, serialization tag).

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod struct_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use struct_info::StructInfo;
pub use type_info::{ArrayInfo, IndirectInfo, ListInfo, MapInfo, OpaqueInfo};
pub use type_info::{ReflectKind, Type, TypeInfo};
pub use typed::{DynamicTyped, Typed};
