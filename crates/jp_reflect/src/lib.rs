//! Runtime reflection for pointer resolution.
//!
//! A value implementing [`Reflect`] can be inspected without knowing its
//! concrete type: [`Reflect::reflect_ref`] yields one of a closed set of
//! shapes ([`ReflectRef`](ops::ReflectRef)), and [`Typed`](info::Typed)
//! gives static metadata such as the declared fields of a struct.
//!
//! ```
//! use jp_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! let point = Point { x: 1, y: 2 };
//! let ReflectRef::Struct(fields) = point.reflect_ref() else {
//!     unreachable!()
//! };
//! let y = fields.field("y").unwrap().downcast_ref::<i32>();
//! assert_eq!(y, Some(&2));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `jp_reflect`, which must also resolve when
// the derive is used inside this crate.
extern crate self as jp_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use jp_reflect_derive as derive;
pub use reflection::Reflect;
