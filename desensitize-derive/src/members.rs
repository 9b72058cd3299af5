//! Member enumeration shared by struct and enum derivation.
//!
//! Turns the fields of a struct or variant into [`MemberDescriptor`]s plus
//! the expressions the emitted code uses to reach each value.

use desensitize_core::{MemberDescriptor, ValueCategory};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, Fields, Result};

use crate::{
    container::ContainerOptions,
    field::{parse_field_options, FieldRole},
    generics::collect_generics_from_type,
    types::value_category,
};

/// How emitted code reaches field values.
///
/// Variant fields are bound as `__field_<name>`, so a binding never shadows
/// the formatter or repeats its field name in the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Receiver {
    /// Struct fields, read through `self`.
    SelfFields,
    /// Variant fields, bound by a match pattern.
    Bindings,
}

/// A rendered member together with the expression producing a reference to its value.
pub(crate) struct Member {
    pub(crate) descriptor: MemberDescriptor,
    pub(crate) value: TokenStream,
}

/// The fields of one struct or variant, ready for assembly.
pub(crate) struct EnumeratedFields {
    pub(crate) members: Vec<Member>,
    /// Reference to the parent field, rendered by the super call.
    pub(crate) parent: Option<TokenStream>,
    /// Pattern entries (`field: binding`) for every field read by binding.
    pub(crate) pattern: Vec<TokenStream>,
    /// Names are rendered by default for named fields, not for tuple fields.
    pub(crate) names_by_default: bool,
    pub(crate) span: Span,
}

impl EnumeratedFields {
    pub(crate) fn descriptors(&self) -> Vec<MemberDescriptor> {
        self.members
            .iter()
            .map(|member| member.descriptor.clone())
            .collect()
    }
}

/// Types mentioning generic parameters that need bounds, split by the trait they need.
#[derive(Default)]
pub(crate) struct UsedGenerics {
    pub(crate) render_value: Vec<syn::Type>,
    pub(crate) display: Vec<syn::Type>,
}

pub(crate) fn enumerate_fields(
    fields: &Fields,
    receiver: Receiver,
    options: &ContainerOptions,
    generics: &syn::Generics,
    used: &mut UsedGenerics,
) -> Result<EnumeratedFields> {
    let mut members = Vec::new();
    let mut parent = None;
    let mut pattern = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_options = parse_field_options(&field.attrs)?;
        let span = field.span();
        let (member, name, binding) = match &field.ident {
            Some(ident) => (
                syn::Member::Named(ident.clone()),
                ident.to_string(),
                format_ident!("__field_{}", ident),
            ),
            None => (
                syn::Member::Unnamed(syn::Index {
                    index: u32::try_from(index)
                        .map_err(|_| syn::Error::new(span, "too many fields"))?,
                    span,
                }),
                index.to_string(),
                format_ident!("__field_{}", index),
            ),
        };
        let field_value = match receiver {
            Receiver::SelfFields => quote_spanned! { span => &self.#member },
            Receiver::Bindings => quote_spanned! { span => #binding },
        };

        match field_options.role {
            FieldRole::Skipped => {}
            FieldRole::Parent => {
                if parent.is_some() {
                    return Err(syn::Error::new(
                        span,
                        "only one field can be marked #[desensitize(parent)]",
                    ));
                }
                collect_generics_from_type(&field.ty, generics, &mut used.display);
                if receiver == Receiver::Bindings {
                    pattern.push(quote! { #member: #binding });
                }
                parent = Some(field_value);
            }
            FieldRole::Member => {
                let getter = field_options
                    .getter
                    .filter(|_| !options.do_not_use_getters);
                let (descriptor, value) = match getter {
                    Some(getter) => (
                        MemberDescriptor::accessor(getter.to_string()),
                        quote_spanned! { span => &self.#getter() },
                    ),
                    None => {
                        if receiver == Receiver::Bindings {
                            pattern.push(quote! { #member: #binding });
                        }
                        (MemberDescriptor::field(name.clone()), field_value)
                    }
                };
                let category = value_category(&field.ty);
                let mut descriptor = descriptor
                    .with_category(category)
                    .with_display_name(field_options.rename.unwrap_or(name));
                if let Some(masking) = field_options.masking {
                    if category != ValueCategory::Scalar {
                        return Err(syn::Error::new(
                            field.ident.as_ref().map_or(span, syn::Ident::span),
                            "array members cannot be masked; mask the elements' type instead",
                        ));
                    }
                    descriptor = descriptor.with_masking(masking);
                }
                collect_generics_from_type(&field.ty, generics, &mut used.render_value);
                members.push(Member { descriptor, value });
            }
        }
    }

    Ok(EnumeratedFields {
        members,
        parent,
        pattern,
        names_by_default: !matches!(fields, Fields::Unnamed(_)),
        span: fields.span(),
    })
}
