//! Shared utilities for the Inspect derive.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::{ext::IdentExt, parse_quote, Field, Generics, LitStr, Member};

/// Options parsed from a field's `#[inspect(...)]` attributes.
#[derive(Default)]
pub struct FieldOptions {
    pub skip: bool,
    pub rename: Option<LitStr>,
}

/// Parse every `#[inspect(...)]` attribute on a field.
pub fn parse_field_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                options.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        })?;
    }

    Ok(options)
}

/// The member used to access field `index` (`self.name` or `self.0`).
pub fn field_member(field: &Field, index: usize) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(index.into()),
    }
}

/// The name a field is reported under, honoring `rename`.
pub fn report_name(field: &Field, index: usize, options: &FieldOptions) -> LitStr {
    if let Some(rename) = &options.rename {
        return rename.clone();
    }
    match &field.ident {
        Some(ident) => LitStr::new(&ident.unraw().to_string(), ident.span()),
        None => LitStr::new(&index.to_string(), Span::call_site()),
    }
}

/// Report names already taken within one aggregate.
///
/// Members are keyed by report name in the breakdown, so two members
/// reported under the same name would overwrite each other.
#[derive(Default)]
pub struct ReportNames {
    taken: HashSet<String>,
}

impl ReportNames {
    /// Take `name`, or fail spanned on it if an earlier member has it.
    pub fn claim(&mut self, name: &LitStr) -> syn::Result<()> {
        let value = name.value();
        if self.taken.insert(value.clone()) {
            Ok(())
        } else {
            Err(syn::Error::new(
                name.span(),
                format!("duplicate report name `{value}`"),
            ))
        }
    }
}

/// Add an `Inspect` bound to every type parameter.
pub fn add_inspect_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::memprobe::Inspect));
    }
    generics
}
