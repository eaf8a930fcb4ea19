//! Inspect derive macro implementation.
//!
//! Generates `memprobe::Inspect` implementations from struct and enum
//! definitions. Generated code refers to the runtime crate through the
//! absolute path `::memprobe`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse_macro_input, Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Variant,
};

use crate::utils::{
    add_inspect_bounds, field_member, parse_field_options, report_name, FieldOptions, ReportNames,
};

/// Main entry point for the Inspect derive macro.
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_inspect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

pub(crate) fn derive_inspect_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = add_inspect_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => struct_body(name, &data.fields)?,
        Data::Enum(data) => enum_body(name, data)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Inspect derive does not support unions",
            ))
        }
    };

    Ok(quote! {
        impl #impl_generics ::memprobe::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::memprobe::Shape<'_> {
                #body
            }
        }
    })
}

/// `StructShape::new(..)` for an aggregate named `type_name`.
fn struct_shape_head(type_name: &LitStr) -> TokenStream2 {
    quote! {
        ::memprobe::StructShape::new(
            #type_name,
            ::core::module_path!(),
            ::core::mem::size_of::<Self>(),
        )
    }
}

fn struct_body(name: &Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let type_name = LitStr::new(&name.unraw().to_string(), name.span());
    let head = struct_shape_head(&type_name);

    let mut names = ReportNames::default();
    let mut field_calls = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let options = parse_field_options(field)?;
        if options.skip {
            continue;
        }
        let member = field_member(field, index);
        let report = report_name(field, index, &options);
        names.claim(&report)?;
        field_calls.push(quote! { .field(#report, &self.#member) });
    }

    Ok(quote! {
        ::memprobe::Shape::Struct(#head #(#field_calls)*)
    })
}

fn enum_body(name: &Ident, data: &DataEnum) -> syn::Result<TokenStream2> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let arms = data
        .variants
        .iter()
        .map(|variant| variant_arm(name, variant))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}

/// Generate the match arm for one enum variant.
fn variant_arm(enum_name: &Ident, variant: &Variant) -> syn::Result<TokenStream2> {
    let ident = &variant.ident;

    let options = variant
        .fields
        .iter()
        .map(parse_field_options)
        .collect::<syn::Result<Vec<FieldOptions>>>()?;

    // Unit variants hold nothing: an empty tagged union.
    if matches!(variant.fields, Fields::Unit) {
        return Ok(quote! {
            Self::#ident => ::memprobe::Shape::Interface(::core::option::Option::None),
        });
    }

    // A lone tuple payload is the value the union currently holds.
    if matches!(variant.fields, Fields::Unnamed(_))
        && options.len() == 1
        && !options[0].skip
    {
        if let Some(rename) = &options[0].rename {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` has no effect on a variant that unwraps to its payload",
            ));
        }
        return Ok(quote! {
            Self::#ident(__payload) => ::memprobe::Shape::Interface(
                ::core::option::Option::Some(__payload as &dyn ::memprobe::Inspect),
            ),
        });
    }

    let type_name = LitStr::new(
        &format!("{}::{}", enum_name.unraw(), ident.unraw()),
        ident.span(),
    );
    let head = struct_shape_head(&type_name);

    let mut names = ReportNames::default();
    let mut patterns = Vec::new();
    let mut field_calls = Vec::new();
    for (index, (field, options)) in variant.fields.iter().zip(&options).enumerate() {
        let binding = format_ident!("__field{}", index);
        let bound = if options.skip {
            quote! { _ }
        } else {
            let report = report_name(field, index, options);
            names.claim(&report)?;
            field_calls.push(quote! { .field(#report, #binding) });
            quote! { #binding }
        };
        patterns.push(match &field.ident {
            Some(field_ident) => quote! { #field_ident: #bound },
            None => bound,
        });
    }

    let pattern = if matches!(variant.fields, Fields::Named(_)) {
        quote! { Self::#ident { #(#patterns),* } }
    } else {
        quote! { Self::#ident( #(#patterns),* ) }
    };

    Ok(quote! {
        #pattern => ::memprobe::Shape::Struct(#head #(#field_calls)*),
    })
}
