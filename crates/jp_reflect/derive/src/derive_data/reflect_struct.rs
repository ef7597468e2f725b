use proc_macro2::{TokenStream, TokenTree};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

use super::FieldAttributes;

/// A field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The name used for lookups, without a raw-identifier prefix.
    pub name: String,
    pub exported: bool,
    pub attrs: FieldAttributes,
}

/// A struct with named fields, ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    ident: &'a Ident,
    generics: &'a Generics,
    fields: Vec<StructField<'a>>,
    jp_reflect_path: syn::Path,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` can only be derived for structs",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| {
                    // Named fields always carry an ident.
                    let ident = field.ident.as_ref().ok_or_else(|| {
                        syn::Error::new_spanned(field, "expected a named field")
                    })?;
                    Ok(StructField {
                        ident,
                        ty: &field.ty,
                        name: ident.unraw().to_string(),
                        exported: matches!(field.vis, Visibility::Public(_)),
                        attrs: FieldAttributes::parse_attributes(&field.attrs)?,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "`Reflect` can only be derived for structs with named fields",
                ));
            }
        };

        Ok(Self {
            ident: &input.ident,
            generics: &input.generics,
            fields,
            jp_reflect_path: crate::path::jp_reflect(),
        })
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    #[inline]
    pub fn jp_reflect_path(&self) -> &syn::Path {
        &self.jp_reflect_path
    }

    /// Whether `Typed` needs a per-instantiation cell.
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// The `where` clause shared by all generated impls.
    ///
    /// Generic types require `Self: Send + Sync + 'static`, plus
    /// `Reflect + Typed` for every field type that mentions a type parameter.
    pub fn where_clause(&self) -> TokenStream {
        let mut tokens = quote! { where };

        if let Some(where_clause) = &self.generics.where_clause {
            let predicates = where_clause.predicates.iter();
            tokens.extend(quote! { #(#predicates,)* });
        }

        let params: Vec<&Ident> = self.generics.type_params().map(|p| &p.ident).collect();
        if params.is_empty() {
            return tokens;
        }

        tokens.extend(quote! {
            Self: ::core::any::Any + ::core::marker::Send + ::core::marker::Sync,
        });

        let reflect_ = crate::path::reflect_(&self.jp_reflect_path);
        let typed_ = crate::path::typed_(&self.jp_reflect_path);
        for field in &self.fields {
            let ty = field.ty;
            if mentions_any(&params, quote!(#ty)) {
                tokens.extend(quote! { #ty: #reflect_ + #typed_, });
            }
        }

        tokens
    }
}

/// Do any of the identifiers in `idents` appear in `tokens`?
fn mentions_any(idents: &[&Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => idents.iter().any(|p| **p == ident),
        TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}

// -----------------------------------------------------------------------------
// Tests
