use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` is an expression producing the `TypeInfo`.
pub(crate) fn impl_trait_typed(info: &ReflectStruct, type_info_tokens: TokenStream) -> TokenStream {
    let jp_reflect_path = info.jp_reflect_path();
    let trait_typed_ = crate::path::typed_(jp_reflect_path);
    let type_info_ = crate::path::type_info_(jp_reflect_path);

    let inner_cell_tokens = if info.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(jp_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(jp_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = info.where_clause();

    quote! {
        impl #impl_generics #trait_typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
