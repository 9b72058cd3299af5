//! Container-level attribute parsing for `#[derive(Desensitize)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use desensitize_core::{CallSuperPolicy, Existence};
use proc_macro2::Span;
use syn::{Attribute, LitBool, LitStr, Meta, Result};

/// Options parsed from container-level `#[desensitize(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Overrides the per-shape default (names for named fields, none for tuples).
    pub(crate) include_names: Option<bool>,
    /// Explicit super-call choice; `None` defers to `call_super_policy`.
    pub(crate) call_super: Option<bool>,
    /// Where `call_super` was given, for errors about it.
    pub(crate) call_super_span: Option<Span>,
    pub(crate) call_super_policy: CallSuperPolicy,
    /// The type implements `Display` itself.
    pub(crate) skip_display: bool,
    /// The type provides its own `desensitize` masking routine.
    pub(crate) custom_mask: bool,
    /// Members with a getter read their field instead.
    pub(crate) do_not_use_getters: bool,
}

impl ContainerOptions {
    pub(crate) fn render_existence(&self) -> Existence {
        if self.skip_display {
            Existence::PresentUserAuthored
        } else {
            Existence::Absent
        }
    }

    pub(crate) fn mask_existence(&self) -> Existence {
        if self.custom_mask {
            Existence::PresentUserAuthored
        } else {
            Existence::Absent
        }
    }
}

/// Parses container-level `#[desensitize(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("desensitize") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[desensitize] on container - currently no meaning, ignore
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("include_names") {
                        let value: LitBool = meta.value()?.parse()?;
                        options.include_names = Some(value.value);
                        Ok(())
                    } else if meta.path.is_ident("call_super") {
                        let value: LitBool = meta.value()?.parse()?;
                        options.call_super = Some(value.value);
                        options.call_super_span = Some(value.span());
                        Ok(())
                    } else if meta.path.is_ident("call_super_policy") {
                        let value: LitStr = meta.value()?.parse()?;
                        options.call_super_policy = CallSuperPolicy::from_name(&value.value())
                            .ok_or_else(|| {
                                syn::Error::new(
                                    value.span(),
                                    "expected `skip`, `warn` or `call` for call_super_policy",
                                )
                            })?;
                        Ok(())
                    } else if meta.path.is_ident("skip_display") {
                        options.skip_display = true;
                        Ok(())
                    } else if meta.path.is_ident("custom_mask") {
                        options.custom_mask = true;
                        Ok(())
                    } else if meta.path.is_ident("do_not_use_getters") {
                        options.do_not_use_getters = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected one of include_names, \
                             call_super, call_super_policy, skip_display, custom_mask, \
                             do_not_use_getters",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[desensitize]",
                ));
            }
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use desensitize_core::{CallSuperPolicy, Existence};
use proc_macro2::Span;
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_defaults() {
        let attrs = parse_attrs(quote! {});
        let options = parse_container_options(&attrs).unwrap();
        assert_eq!(options.include_names, None);
        assert_eq!(options.call_super, None);
        assert_eq!(options.call_super_policy, CallSuperPolicy::Skip);
        assert_eq!(options.render_existence(), Existence::Absent);
        assert_eq!(options.mask_existence(), Existence::Absent);
        assert!(!options.do_not_use_getters);
    }

    #[test]
    fn every_option_is_parsed() {
        let attrs = parse_attrs(quote! {
            #[desensitize(include_names = false, call_super = true, call_super_policy = "warn")]
            #[desensitize(skip_display, custom_mask, do_not_use_getters)]
        });
        let options = parse_container_options(&attrs).unwrap();
        assert_eq!(options.include_names, Some(false));
        assert_eq!(options.call_super, Some(true));
        assert_eq!(options.call_super_policy, CallSuperPolicy::Warn);
        assert_eq!(options.render_existence(), Existence::PresentUserAuthored);
        assert_eq!(options.mask_existence(), Existence::PresentUserAuthored);
        assert!(options.do_not_use_getters);
    }

    #[test]
    fn unknown_policy_errors() {
        let attrs = parse_attrs(quote! { #[desensitize(call_super_policy = "always")] });
        let result = parse_container_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("expected `skip`, `warn` or `call`"));
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[desensitize(unknown_option)] });
        let result = parse_container_options(&attrs);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown container option"));
    }

    #[test]
    fn bare_desensitize_on_container_is_ignored() {
        let attrs = parse_attrs(quote! { #[desensitize] });
        let options = parse_container_options(&attrs).unwrap();
        assert!(!options.skip_display);
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! { #[derive(Clone)] #[serde(rename_all = "camelCase")] });
        let options = parse_container_options(&attrs).unwrap();
        assert!(!options.custom_mask);
    }
}
