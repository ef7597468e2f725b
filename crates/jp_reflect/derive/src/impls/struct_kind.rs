use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(info, struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info, quote!(Struct));

    quote! {
        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Expression building the `TypeInfo::Struct` of this type.
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let jp_reflect_path = info.jp_reflect_path();
    let type_info_ = crate::path::type_info_(jp_reflect_path);
    let struct_info_ = crate::path::struct_info_(jp_reflect_path);
    let named_field_ = crate::path::named_field_(jp_reflect_path);

    let fields = info.fields().iter().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        let exported = field.exported;
        let embedded = field.attrs.embed;
        let tag = match field.attrs.tag() {
            Some(tag) => {
                let lit = LitStr::new(&tag, field.ident.span());
                quote!(::core::option::Option::Some(#lit))
            }
            None => quote!(::core::option::Option::None),
        };

        quote! {
            #named_field_::new::<#ty>(#name)
                .with_exported(#exported)
                .with_embedded(#embedded)
                .with_tag(#tag)
        }
    });

    quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields,)*
        ]))
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let jp_reflect_path = info.jp_reflect_path();
    let struct_ = crate::path::struct_(jp_reflect_path);
    let reflect_ = crate::path::reflect_(jp_reflect_path);

    let field_names = info.fields().iter().map(|field| &field.name);
    let field_idents: Vec<_> = info.fields().iter().map(|field| field.ident).collect();
    let field_indices = 0..info.fields().len();
    let field_len = info.fields().len();

    let ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = info.where_clause();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}
