use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[weight(<integer expr>)]
#[proc_macro_derive(WeightedKeys, attributes(weight))]
pub fn derive_weighted_keys(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "WeightedKeys can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    // Collect (variant_ident, weight_expr)
    let mut entries = Vec::new();

    for variant in &data_enum.variants {
        // Keys are copied into the sampler, so only fieldless variants
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(
                variant.span(),
                "WeightedKeys only supports fieldless variants",
            )
            .to_compile_error()
            .into();
        }

        let weight_expr = match weight_attr(&variant.attrs) {
            Ok(Some(expr)) => expr,
            Ok(None) => {
                return syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
                    .to_compile_error()
                    .into();
            }
            Err(err) => return err.to_compile_error().into(),
        };

        let ident = &variant.ident;
        // weights must type-check as u64
        entries.push(quote! { (Self::#ident, { let w: u64 = #weight_expr; w }) });
    }

    let expanded = quote! {
        impl weighted_random::WeightedKeys for #enum_ident {
            const ENTRIES: &'static [(Self, u64)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a `WeightedRandom<#enum_ident>` from the annotated weights.
            pub fn sampler() -> weighted_random::WeightedRandom<Self> {
                <Self as weighted_random::WeightedKeys>::sampler()
            }
        }
    };

    expanded.into()
}

/// Find the variant's `#[weight(...)]` and parse its body as an expression.
/// A second `#[weight]` on the same variant is an error.
fn weight_attr(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut found: Option<Expr> = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("weight") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[weight(<expr>)]"));
        };
        if found.is_some() {
            return Err(syn::Error::new(list.span(), "duplicate #[weight(...)]"));
        }
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        found = Some(expr);
    }
    Ok(found)
}
