//! Read-only access to the shape of a reflected value.
//!
//! The following are subtraits of [`Reflect`], one per [`ReflectKind`]:
//!
//! - [`Struct`]: named fields (e.g. `A { .. }`).
//! - [`List`]: growable sequences (e.g. `Vec<i32>`).
//! - [`Array`]: fixed-size sequences (e.g. `[i32; 5]`).
//! - [`Map`]: key-value maps (e.g. `HashMap<String, f32>`).
//! - [`Indirect`]: zero or one referenced value (e.g. `Option<T>`, `Box<T>`).
//!
//! [`ReflectRef`] ties them together; opaque values expose no structure.
//!
//! [`Reflect`]: crate::Reflect
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod indirect_ops;
mod kind;
mod list_ops;
mod map_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;

pub use indirect_ops::Indirect;
pub use list_ops::{Array, List, ListItemIter};
pub use map_ops::Map;
pub use struct_ops::{Struct, StructFieldIter};
