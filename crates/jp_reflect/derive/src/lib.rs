//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static SERDE_ATTRIBUTE_NAME: &str = "serde";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Typed`, `Reflect` and `Struct` for a
/// struct with named fields (or a unit struct, which has no fields).
/// Enums, tuple structs and types with lifetime parameters are rejected.
///
/// ## Field Metadata
///
/// Each field records three facts used when pointer tokens are matched
/// against field names:
///
/// - **exported**: the field is declared `pub`.
/// - **embedded**: the field's own fields are promoted into this struct.
/// - **tag**: a serialization tag such as `"name,omitempty"`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Outer {
///     #[reflect(embed)]
///     inner: Inner,
///     #[reflect(json = "b,omitempty")]
///     pub big_b: String,
///     #[reflect(json = "-")]
///     pub hidden: u32,
/// }
/// ```
///
/// ## Serde Attributes
///
/// Without a `#[reflect(json = "...")]` tag, the field's `#[serde(...)]`
/// attributes are consulted:
///
/// - `rename = "x"` (or `rename(serialize = "x")`) becomes the tag `"x"`.
/// - `skip` or `skip_serializing` becomes the tag `"-"`.
/// - `flatten` marks the field as embedded.
///
/// Other serde keys are ignored.
///
/// ## Generics
///
/// Generic types are supported. Every field type that mentions a type
/// parameter must implement `Reflect` and `Typed`.
#[proc_macro_derive(Reflect, attributes(reflect, serde))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
