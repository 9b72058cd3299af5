//! Enum-specific `Display` derivation.
//!
//! Each variant is assembled on its own, so every variant renders as
//! `Type.Variant` followed by its own members.

use desensitize_core::TypeKind;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, DataEnum, Result};

use crate::{
    container::ContainerOptions,
    members::{enumerate_fields, Receiver, UsedGenerics},
    record::plan_record,
    DeriveOutput,
};

pub(crate) fn derive_enum(
    name: &Ident,
    data: &DataEnum,
    generics: &syn::Generics,
    options: &ContainerOptions,
) -> Result<DeriveOutput> {
    let type_name = name.to_string();
    let mut used = UsedGenerics::default();
    let mut arms: Vec<TokenStream> = Vec::with_capacity(data.variants.len());
    let mut warnings = Vec::new();
    let mut descriptors = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let fields = enumerate_fields(
            &variant.fields,
            Receiver::Bindings,
            options,
            generics,
            &mut used,
        )?;
        let record = plan_record(
            &type_name,
            TypeKind::Enum,
            &fields,
            options,
            Some(variant_ident),
        )?;
        if let Some(warning) = record.warning {
            warnings.push((warning, variant.span()));
        }

        let pattern = &fields.pattern;
        let body = record.body;
        arms.push(quote! {
            #name::#variant_ident { #(#pattern,)* .. } => {
                #body
            }
        });
        descriptors.extend(fields.descriptors());
    }

    // A reference to an uninhabited enum is still inhabited; match the place.
    let display_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(DeriveOutput {
        display_body,
        used,
        warnings,
        descriptors,
    })
}
