//! Struct-specific `Display` derivation.
//!
//! This module renders the struct's fields through `self` and collects generic
//! parameters that require trait bounds.

use desensitize_core::TypeKind;
use proc_macro2::{Ident, Span};
use syn::{DataStruct, Result};

use crate::{
    container::ContainerOptions,
    members::{enumerate_fields, Receiver, UsedGenerics},
    record::plan_record,
    DeriveOutput,
};

pub(crate) fn derive_struct(
    name: &Ident,
    data: &DataStruct,
    generics: &syn::Generics,
    options: &ContainerOptions,
) -> Result<DeriveOutput> {
    let mut used = UsedGenerics::default();
    let fields = enumerate_fields(
        &data.fields,
        Receiver::SelfFields,
        options,
        generics,
        &mut used,
    )?;
    let record = plan_record(&name.to_string(), TypeKind::Class, &fields, options, None)?;
    let warning_span = if data.fields.is_empty() {
        name.span()
    } else {
        fields.span
    };

    Ok(DeriveOutput {
        display_body: record.body,
        used,
        warnings: record
            .warning
            .into_iter()
            .map(|warning| (warning, warning_span))
            .collect::<Vec<(_, Span)>>(),
        descriptors: fields.descriptors(),
    })
}
