//! JSON pointers ([RFC 6901]) resolved against `serde_json` documents and
//! reflected Rust data.
//!
//! A pointer is parsed into a [`Pointer`] of unescaped [`Token`]s and walked
//! against a [`Reflect`] value one token at a time. `serde_json` containers
//! are stepped through directly; every other value is inspected through
//! reflection: sequences by index, string-keyed maps by key, structs by their
//! visible field names (see [`FieldTable`]), with `Option`, `Box` and `Arc`
//! layers looked through.
//!
//! ```
//! use jp_pointer::{Pointer, PointerErrorKind};
//! use jp_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Order {
//!     #[reflect(json = "lines")]
//!     pub items: Vec<Line>,
//! }
//!
//! #[derive(Reflect)]
//! struct Line {
//!     pub sku: String,
//! }
//!
//! let order = Order {
//!     items: vec![Line { sku: "A-1".into() }],
//! };
//!
//! let sku = Pointer::from_static("/lines/0/sku");
//! assert_eq!(sku.get_as::<String>(&order).unwrap(), "A-1");
//!
//! let err = jp_pointer::get("/lines/1", &order).unwrap_err();
//! assert_eq!(err.kind(), PointerErrorKind::ArrayIndexOutOfBounds);
//! ```
//!
//! [RFC 6901]: https://www.rfc-editor.org/rfc/rfc6901
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod fields;
mod pointer;
mod resolve;
mod token;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::{PointerError, PointerErrorKind};
pub use fields::{FieldCache, FieldTable};
pub use jp_reflect::Reflect;
pub use pointer::Pointer;
pub use resolve::{get, get_as};
pub use token::Token;
