//! Plans and lowers the rendering of one struct or enum variant.

use desensitize_core::{assemble, resolve_call_super, RenderOptions, TypeKind, Warning};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;
use syn::Result;

use crate::{
    container::ContainerOptions,
    lower::{lower_plan, LowerContext},
    members::EnumeratedFields,
};

pub(crate) struct RecordOutput {
    pub(crate) body: TokenStream,
    pub(crate) warning: Option<Warning>,
}

pub(crate) fn plan_record(
    type_name: &str,
    type_kind: TypeKind,
    fields: &EnumeratedFields,
    options: &ContainerOptions,
    variant: Option<&Ident>,
) -> Result<RecordOutput> {
    let has_parent = fields.parent.is_some();
    let (call_super, warning) = resolve_call_super(
        type_name,
        options.call_super,
        has_parent,
        options.call_super_policy,
    );
    if call_super && !has_parent {
        return Err(syn::Error::new(
            options.call_super_span.unwrap_or(fields.span),
            "call_super = true requires a field marked #[desensitize(parent)]",
        ));
    }

    let render_options = match type_kind {
        TypeKind::Class => RenderOptions::class(type_name),
        TypeKind::Enum => RenderOptions::enumeration(type_name),
    }
    .with_include_names(options.include_names.unwrap_or(fields.names_by_default))
    .with_call_super(call_super);

    let plan = assemble(&fields.descriptors(), &render_options);
    let body = lower_plan(
        &LowerContext {
            members: &fields.members,
            parent: fields.parent.as_ref(),
            variant,
            span: fields.span,
        },
        &plan,
    )?;

    Ok(RecordOutput { body, warning })
}

/// Surfaces a synthesis warning as a compiler warning at `span`.
///
/// Stable proc macros cannot emit warnings directly; using a deprecated
/// item makes rustc report the note instead.
pub(crate) fn warning_tokens(warning: &Warning, span: Span) -> TokenStream {
    let note = warning.to_string();
    quote_spanned! { span =>
        const _: () = {
            #[deprecated(note = #note)]
            #[allow(non_camel_case_types)]
            struct desensitize_warning;
            let _ = desensitize_warning;
        };
    }
}
