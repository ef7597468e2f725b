//! Reflection for foreign types, plus the cells used to implement
//! [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: storage for a non-generic type's info.
//! - [`GenericTypeInfoCell`]: storage for a generic type's info, one entry
//!   per instantiation.
//!
//! ## Implemented Menu
//!
//! - opaque:
//!     - `bool`, `char`, `()`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `&'static str`, `String`
//! - sequences:
//!     - `Vec<T>`, `VecDeque<T>` (list)
//!     - `[T; N]` (array)
//! - maps:
//!     - `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`
//!     - `hashbrown::HashMap<K, V, S>`
//! - indirect:
//!     - `Option<T>`, `Box<T>`, `Arc<T>`, `Box<dyn Reflect>`
//! - json: ("json" feature)
//!     - `serde_json::Value`, `serde_json::Map<String, Value>`

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod indirect;
mod maps;
mod opaque;
mod sequences;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
