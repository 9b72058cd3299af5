//! Lowering of rendering plans into `Display` statements.
//!
//! Each [`RenderStep`] becomes one write against the formatter, calling the
//! runtime helpers that mirror the core interpreter.

use desensitize_core::{RenderStep, RenderingPlan, MASK_ROUTINE_NAME};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::Result;

use crate::{crate_path, members::Member};

pub(crate) struct LowerContext<'a> {
    pub(crate) members: &'a [Member],
    pub(crate) parent: Option<&'a TokenStream>,
    /// Set when lowering the plan of an enum variant.
    pub(crate) variant: Option<&'a Ident>,
    pub(crate) span: Span,
}

/// The formatter parameter of the generated `fmt`.
///
/// Resolved at the macro's mixed site, so user fields bound in the same
/// scope cannot shadow it.
pub(crate) fn formatter_ident() -> Ident {
    Ident::new("__formatter", Span::mixed_site())
}

/// Hands out member values in plan order; the assembler never reorders members.
struct MemberCursor<'a> {
    members: std::slice::Iter<'a, Member>,
    span: Span,
}

impl<'a> MemberCursor<'a> {
    fn next_value(&mut self, name: &str) -> Result<&'a TokenStream> {
        match self.members.next() {
            Some(member) if member.descriptor.name == name => Ok(&member.value),
            _ => Err(syn::Error::new(
                self.span,
                format!("no member named `{name}` at this position"),
            )),
        }
    }
}

/// Lowers `plan` into statements ending in `Ok(())`.
pub(crate) fn lower_plan(ctx: &LowerContext<'_>, plan: &RenderingPlan) -> Result<TokenStream> {
    let runtime = crate_path("__private");
    let routine = format_ident!("{}", MASK_ROUTINE_NAME);
    let f = formatter_ident();
    let mut statements = Vec::with_capacity(plan.len());
    let mut cursor = MemberCursor {
        members: ctx.members.iter(),
        span: ctx.span,
    };

    for step in plan {
        let statement = match step {
            RenderStep::Literal { text } => quote! { #f.write_str(#text)?; },
            RenderStep::EnumSelfName => {
                let variant = ctx.variant.ok_or_else(|| {
                    syn::Error::new(ctx.span, "enum self-name step outside of a variant")
                })?;
                let name = variant.to_string();
                quote! { #f.write_str(#name)?; }
            }
            RenderStep::SuperCall => {
                let parent = ctx.parent.ok_or_else(|| {
                    syn::Error::new(
                        ctx.span,
                        "call_super requires a field marked #[desensitize(parent)]",
                    )
                })?;
                quote! { ::core::fmt::Display::fmt(#parent, #f)?; }
            }
            RenderStep::MemberValue { member, masked } => {
                let value = cursor.next_value(&member.name)?;
                match (&member.masking, masked) {
                    (Some(config), true) => {
                        let pre_len = config.pre_len;
                        let suf_len = config.suf_len;
                        let cipher = &config.cipher;
                        quote! {
                            #runtime::write_masked(
                                #f,
                                Self::#routine(#runtime::mask_input(#value), #pre_len, #suf_len, #cipher),
                            )?;
                        }
                    }
                    _ => quote! { #runtime::write_member(#f, #value)?; },
                }
            }
            RenderStep::ArrayStringify { member, deep } => {
                let value = cursor.next_value(&member.name)?;
                quote! { #runtime::write_array(#f, #value, #deep)?; }
            }
        };
        statements.push(statement);
    }

    Ok(quote! {
        #(#statements)*
        ::core::result::Result::Ok(())
    })
}
