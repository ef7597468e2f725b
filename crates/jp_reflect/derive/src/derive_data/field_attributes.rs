use proc_macro2::TokenStream;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

use crate::{REFLECT_ATTRIBUTE_NAME, SERDE_ATTRIBUTE_NAME};

/// Field-level attributes relevant to reflection.
///
/// `#[reflect(...)]` takes precedence over `#[serde(...)]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(embed)]` or `#[serde(flatten)]`.
    pub embed: bool,
    /// `#[reflect(json = "...")]`, kept verbatim.
    pub json_tag: Option<String>,
    /// `#[serde(rename = "...")]` or `#[serde(rename(serialize = "..."))]`.
    pub serde_rename: Option<String>,
    /// `#[serde(skip)]` or `#[serde(skip_serializing)]`.
    pub serde_skip: bool,
}

impl FieldAttributes {
    pub fn parse_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_reflect(meta))?;
            } else if attr.path().is_ident(SERDE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_serde(meta))?;
            }
        }

        Ok(this)
    }

    /// The raw tag recorded in the field info.
    pub fn tag(&self) -> Option<String> {
        if let Some(tag) = &self.json_tag {
            return Some(tag.clone());
        }
        if self.serde_skip {
            return Some("-".to_owned());
        }
        self.serde_rename.clone()
    }

    fn parse_reflect(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("embed") {
            self.embed = true;
            Ok(())
        } else if meta.path.is_ident("json") {
            let lit: LitStr = meta.value()?.parse()?;
            self.json_tag = Some(lit.value());
            Ok(())
        } else {
            Err(meta.error("unsupported reflect attribute, expected `embed` or `json = \"...\"`"))
        }
    }

    fn parse_serde(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if meta.input.peek(Token![=]) {
                let lit: LitStr = meta.value()?.parse()?;
                self.serde_rename = Some(lit.value());
                return Ok(());
            }
            return meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("serialize") {
                    let lit: LitStr = inner.value()?.parse()?;
                    self.serde_rename = Some(lit.value());
                    Ok(())
                } else {
                    skip_meta(&inner)
                }
            });
        }

        if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            self.serde_skip = true;
        } else if meta.path.is_ident("flatten") {
            self.embed = true;
        } else {
            skip_meta(&meta)?;
        }
        Ok(())
    }
}

/// Consumes the value of a serde key this macro does not interpret.
fn skip_meta(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::{Data, DeriveInput, Field, Fields, parse_quote};

    use super::FieldAttributes;

    fn first_field(input: DeriveInput) -> Field {
        let Data::Struct(data) = input.data else {
            panic!("expected a struct");
        };
        let Fields::Named(fields) = data.fields else {
            panic!("expected named fields");
        };
        fields.named.into_iter().next().unwrap()
    }

    fn parse(input: DeriveInput) -> FieldAttributes {
        FieldAttributes::parse_attributes(&first_field(input).attrs).unwrap()
    }

    #[test]
    fn reflect_tag_wins_over_serde() {
        let attrs = parse(parse_quote! {
            struct S {
                #[serde(rename = "a")]
                #[reflect(json = "b,omitempty")]
                pub x: u8,
            }
        });
        assert_eq!(attrs.tag().as_deref(), Some("b,omitempty"));
    }

    #[test]
    fn serde_fallbacks() {
        let renamed = parse(parse_quote! {
            struct S {
                #[serde(default, rename(serialize = "s", deserialize = "d"))]
                pub x: u8,
            }
        });
        assert_eq!(renamed.tag().as_deref(), Some("s"));

        let skipped = parse(parse_quote! {
            struct S {
                #[serde(skip, with = "module")]
                pub x: u8,
            }
        });
        assert_eq!(skipped.tag().as_deref(), Some("-"));

        let flattened = parse(parse_quote! {
            struct S {
                #[serde(flatten)]
                pub x: Inner,
            }
        });
        assert!(flattened.embed);
        assert_eq!(flattened.tag(), None);
    }

    #[test]
    fn unknown_reflect_key_is_an_error() {
        let field = first_field(parse_quote! {
            struct S {
                #[reflect(rename = "x")]
                pub x: u8,
            }
        });
        assert!(FieldAttributes::parse_attributes(&field.attrs).is_err());
    }
}
