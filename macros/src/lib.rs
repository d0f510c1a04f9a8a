use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::Parser;

/// Number of fields every model carries: three color components and alpha.
const FIELD_COUNT: usize = 4;

/// Generate constructors, accessors and array conversions for a color model
/// with three color components followed by alpha.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<TokenStream2> {
    if input.fields.len() != FIELD_COUNT {
        return Err(syn::Error::new_spanned(
            &input.fields,
            "Models must have exactly 4 fields, three color components followed by alpha.",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Models can not be generic.",
        ));
    }

    let names = input
        .fields
        .iter()
        .map(|f| {
            f.ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(f, "Model fields must be named."))
        })
        .collect::<syn::Result<Vec<_>>>()?;
    debug_assert!(names.len() == FIELD_COUNT);

    // Every component shares one type so `elem` and `to_array` can return it.
    let ty = input.fields.iter().next().map(|f| f.ty.clone()).ok_or_else(|| {
        syn::Error::new_spanned(&input.fields, "Models must have at least one field.")
    })?;
    let ty_str = quote!(#ty).to_string();
    if let Some(other) = input.fields.iter().find(|f| {
        let t = &f.ty;
        quote!(#t).to_string() != ty_str
    }) {
        return Err(syn::Error::new_spanned(
            &other.ty,
            "All fields of a model must have the same type.",
        ));
    }

    // Make sure the fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug)]
    })?;
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let tys = vec![ty.clone(); FIELD_COUNT];
    let indices = (0..FIELD_COUNT).collect::<Vec<_>>();

    let with_fns = names.iter().map(|name| {
        let fn_name = format_ident!("with_{}", name);
        let doc = format!("Return a copy of this color with `{name}` replaced.");
        quote! {
            #[doc = #doc]
            #[must_use]
            pub const fn #fn_name(self, #name: #ty) -> Self {
                Self { #name, ..self }
            }
        }
    });

    let set_fns = names.iter().map(|name| {
        let fn_name = format_ident!("set_{}", name);
        let doc = format!("Replace `{name}` in place.");
        quote! {
            #[doc = #doc]
            pub fn #fn_name(&mut self, #name: #ty) -> &mut Self {
                self.#name = #name;
                self
            }
        }
    });

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color from its components.
            pub const fn new(#(#names: #tys),*) -> Self {
                Self { #(#names),* }
            }

            #(#with_fns)*

            #(#set_fns)*

            /// Overwrite every component at once.
            pub fn set(&mut self, #(#names: #tys),*) -> &mut Self {
                #(self.#names = #names;)*
                self
            }

            /// Return the component at `index`, counting in declaration order.
            pub fn elem(&self, index: usize) -> Result<#ty, crate::Error> {
                match index {
                    #(#indices => Ok(self.#names),)*
                    _ => Err(crate::Error::OutOfRange { index }),
                }
            }

            /// Return the components in declaration order.
            pub const fn to_array(&self) -> [#ty; 4] {
                [#(self.#names),*]
            }
        }

        impl From<[#ty; 4]> for #struct_name {
            fn from([#(#names),*]: [#ty; 4]) -> Self {
                Self::new(#(#names),*)
            }
        }

        impl From<#struct_name> for [#ty; 4] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    Ok(quote! {
        #input
        #model_impl
    })
}
