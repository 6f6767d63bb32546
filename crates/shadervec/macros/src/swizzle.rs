//! Swizzle implementation macro.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Literal};
use quote::{format_ident, quote};
use shadervec_types::component::FIELD_NAMES;
use shadervec_types::{MAX_COMPONENTS, NamingScheme, SwizzlePattern};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Token, Type};

/// Parses macro input like `Float3, 3, [f32, Float2, Float3, Float4]`.
struct Swizzling {
    vector: Ident,
    width: usize,
    /// Result type of a selection, indexed by arity minus one.
    outputs: Vec<Type>,
}

impl Parse for Swizzling {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let vector: Ident = input.parse()?;
        input.parse::<Token![,]>()?;

        let width_lit: syn::LitInt = input.parse()?;
        let width: usize = width_lit.base10_parse()?;
        if !(2..=MAX_COMPONENTS).contains(&width) {
            return Err(syn::Error::new(
                width_lit.span(),
                format!("vector width must be between 2 and {MAX_COMPONENTS}"),
            ));
        }
        input.parse::<Token![,]>()?;

        let bracketed;
        let bracket = syn::bracketed!(bracketed in input);
        let outputs: Punctuated<Type, Token![,]> =
            bracketed.parse_terminated(Type::parse, Token![,])?;
        if outputs.len() != MAX_COMPONENTS {
            return Err(syn::Error::new(
                bracket.span.join(),
                format!(
                    "expected {MAX_COMPONENTS} result types (one per arity), found {}",
                    outputs.len()
                ),
            ));
        }
        input.parse::<Option<Token![,]>>()?;

        Ok(Self {
            vector,
            width,
            outputs: outputs.into_iter().collect(),
        })
    }
}

impl Swizzling {
    fn expand(&self) -> proc_macro2::TokenStream {
        let vector = &self.vector;
        let accessors = NamingScheme::ALL.into_iter().flat_map(|scheme| {
            SwizzlePattern::all(self.width).map(move |pattern| self.accessors(scheme, &pattern))
        });
        quote! {
            impl #vector {
                #(#accessors)*
            }
        }
    }

    fn accessors(
        &self,
        scheme: NamingScheme,
        pattern: &SwizzlePattern,
    ) -> proc_macro2::TokenStream {
        let name = pattern.name(scheme);
        let arity = pattern.len();
        let output = &self.outputs[arity - 1];
        let fields: Vec<Ident> = pattern
            .indices()
            .iter()
            .map(|&index| format_ident!("{}", FIELD_NAMES[index]))
            .collect();
        let allow = scheme
            .is_uppercase()
            .then(|| quote!(#[allow(non_snake_case)]));

        let getter = format_ident!("{}", name);
        let getter_doc = format!(
            "Reads `{name}`, i.e. `{}`.",
            fields
                .iter()
                .map(|field| format!("self.{field}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let mut tokens = if arity == 1 {
            let field = &fields[0];
            quote! {
                #[doc = #getter_doc]
                #allow
                #[inline]
                #[must_use]
                pub fn #getter(self) -> #output {
                    self.#field
                }
            }
        } else {
            quote! {
                #[doc = #getter_doc]
                #allow
                #[inline]
                #[must_use]
                pub fn #getter(self) -> #output {
                    <#output>::new(#(self.#fields),*)
                }
            }
        };

        if !pattern.is_writable() {
            return tokens;
        }

        let setter = format_ident!("set_{}", name);
        let proxy = format_ident!("{}_mut", name);
        if arity == 1 {
            let field = &fields[0];
            let setter_doc = format!("Writes `value` to `{name}`, i.e. `self.{field}`.");
            let proxy_doc = format!("Mutable reference to `{name}`, i.e. `self.{field}`.");
            tokens.extend(quote! {
                #[doc = #setter_doc]
                #allow
                #[inline]
                pub fn #setter(&mut self, value: f32) {
                    self.#field = value;
                }

                #[doc = #proxy_doc]
                #allow
                #[inline]
                pub fn #proxy(&mut self) -> &mut f32 {
                    &mut self.#field
                }
            });
        } else {
            let sources: Vec<Ident> = FIELD_NAMES[..arity]
                .iter()
                .map(|field| format_ident!("{}", field))
                .collect();
            let arity_lit = Literal::usize_unsuffixed(arity);
            let setter_doc = format!(
                "Writes `value` through `{name}`: {}.",
                fields
                    .iter()
                    .zip(&sources)
                    .map(|(field, source)| format!("`value.{source}` to `self.{field}`"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            let proxy_doc = format!(
                "Borrows the components selected by `{name}` as a writable swizzle, in that order."
            );
            tokens.extend(quote! {
                #[doc = #setter_doc]
                #allow
                #[inline]
                pub fn #setter(&mut self, value: #output) {
                    #(self.#fields = value.#sources;)*
                }

                #[doc = #proxy_doc]
                #allow
                #[inline]
                pub fn #proxy(&mut self) -> crate::SwizzleMut<'_, #output, #arity_lit> {
                    let Self { #(#fields,)* .. } = self;
                    crate::SwizzleMut::new([#(#fields),*])
                }
            });
        }
        tokens
    }
}

pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    let swizzling = syn::parse_macro_input!(token_stream as Swizzling);
    swizzling.expand().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quote::ToTokens;
    use std::collections::BTreeMap;
    use syn::{ImplItem, ItemImpl};

    fn swizzling(width: usize) -> Swizzling {
        let width = Literal::usize_unsuffixed(width);
        syn::parse2(quote!(Float, #width, [f32, Float2, Float3, Float4])).unwrap()
    }

    /// Generated method bodies, keyed by method name.
    fn methods(width: usize) -> BTreeMap<String, String> {
        let item: ItemImpl = syn::parse2(swizzling(width).expand()).unwrap();
        item.items
            .into_iter()
            .filter_map(|item| match item {
                ImplItem::Fn(method) => Some((
                    method.sig.ident.to_string(),
                    method.block.to_token_stream().to_string(),
                )),
                _ => None,
            })
            .collect()
    }

    fn writable(width: usize) -> impl Iterator<Item = (NamingScheme, SwizzlePattern)> {
        NamingScheme::ALL.into_iter().flat_map(move |scheme| {
            SwizzlePattern::all(width)
                .filter(SwizzlePattern::is_writable)
                .map(move |pattern| (scheme, pattern))
        })
    }

    #[test]
    fn setters_exist_exactly_for_writable_patterns() {
        for width in 2..=MAX_COMPONENTS {
            let methods = methods(width);
            let getters = NamingScheme::ALL.len() * SwizzlePattern::all(width).count();
            let setters: Vec<&String> = methods.keys().filter(|n| n.starts_with("set_")).collect();
            let proxies: Vec<&String> = methods.keys().filter(|n| n.ends_with("_mut")).collect();
            let expected: Vec<String> = writable(width)
                .map(|(scheme, pattern)| pattern.name(scheme))
                .collect();

            assert_eq!(methods.len(), getters + 2 * expected.len(), "width {width}");
            for name in &expected {
                assert!(methods.contains_key(&format!("set_{name}")), "set_{name}");
                assert!(methods.contains_key(&format!("{name}_mut")), "{name}_mut");
            }
            assert_eq!(setters.len(), expected.len());
            assert_eq!(proxies.len(), expected.len());
        }
    }

    #[test]
    fn repeating_patterns_only_get_a_getter() {
        let methods = methods(3);
        for name in ["xx", "rgr", "ZZZZ"] {
            assert!(methods.contains_key(name), "{name}");
            assert!(!methods.contains_key(&format!("set_{name}")), "set_{name}");
            assert!(!methods.contains_key(&format!("{name}_mut")), "{name}_mut");
        }
    }

    #[test]
    fn setters_assign_in_swizzle_order() {
        for width in 2..=MAX_COMPONENTS {
            let methods = methods(width);
            for (scheme, pattern) in writable(width) {
                let name = pattern.name(scheme);
                let fields = pattern
                    .indices()
                    .iter()
                    .map(|&index| format_ident!("{}", FIELD_NAMES[index]));
                let expected = if pattern.len() == 1 {
                    quote!({ #(self.#fields = value;)* })
                } else {
                    let sources = FIELD_NAMES[..pattern.len()]
                        .iter()
                        .map(|source| format_ident!("{}", source));
                    quote!({ #(self.#fields = value.#sources;)* })
                };
                assert_eq!(
                    methods[&format!("set_{name}")],
                    expected.to_string(),
                    "{name}"
                );
            }
        }
    }

    #[test]
    fn getters_read_in_swizzle_order() {
        let methods = methods(4);
        assert_eq!(
            methods["wzx"],
            quote!({ <Float3>::new(self.w, self.z, self.x) }).to_string()
        );
        assert_eq!(methods["b"], quote!({ self.z }).to_string());
    }

    #[test]
    fn rejects_bad_input() {
        let outputs = quote!([f32, Float2, Float3, Float4]);
        for width in [0, 1, 5] {
            let width = Literal::usize_unsuffixed(width);
            let input = quote!(Float, #width, #outputs);
            assert!(syn::parse2::<Swizzling>(input).is_err(), "width {width}");
        }
        let missing_output = quote!(Float3, 3, [f32, Float2, Float3]);
        assert!(syn::parse2::<Swizzling>(missing_output).is_err());
    }
}
