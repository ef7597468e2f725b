use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct, reflect_kind_token: TokenStream) -> TokenStream {
    let jp_reflect_path = info.jp_reflect_path();

    let reflect_ = crate::path::reflect_(jp_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(jp_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(jp_reflect_path);

    let ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = info.where_clause();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }
        }
    }
}
