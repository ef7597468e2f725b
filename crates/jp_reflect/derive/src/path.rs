//! Paths of the `jp_reflect` items named by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `jp_reflect` crate.
///
/// 1. For crates that depend on `jp_reflect`, `::jp_reflect` is returned.
/// 2. For crates that depend on `jp_core`, `::jp_core::reflect` is returned.
/// 3. For other situations, `::jp_reflect` is returned.
///
/// This reads the caller's `Cargo.toml`, so it is called once per derive and
/// the path is passed around.
pub(crate) fn jp_reflect() -> syn::Path {
    jp_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jp_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn typed_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn struct_info_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn named_field_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::info::NamedField }
}

#[inline(always)]
pub(crate) fn reflect_kind_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::info::ReflectKind }
}

#[inline(always)]
pub(crate) fn reflect_ref_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn struct_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::ops::Struct }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::impls::NonGenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(jp_reflect_path: &syn::Path) -> TokenStream {
    quote! { #jp_reflect_path::impls::GenericTypeInfoCell }
}
