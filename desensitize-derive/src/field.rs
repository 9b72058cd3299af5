//! Parsing of `#[desensitize(...)]` field attributes.
//!
//! This module maps attribute syntax to member decisions and produces
//! structured errors for invalid forms.

use desensitize_core::{MaskingConfig, Preset, DEFAULT_CIPHER};
use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Ident, LitInt, LitStr, Meta, Result};

/// How a field takes part in rendering.
///
/// | Attribute | Role |
/// |-----------|------|
/// | None | `Member`, rendered unmasked |
/// | `#[desensitize(skip)]` | `Skipped` |
/// | `#[desensitize(parent)]` | `Parent`, rendered through the super call |
/// | `#[desensitize(mobile)]` etc. | `Member` with a masking config |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum FieldRole {
    #[default]
    Member,
    Skipped,
    Parent,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) role: FieldRole,
    pub(crate) rename: Option<String>,
    pub(crate) getter: Option<Ident>,
    pub(crate) masking: Option<MaskingConfig>,
}

/// Collects the pieces of a masking config while attributes are being read.
#[derive(Default)]
struct MaskingSpec {
    lengths: Option<(usize, usize)>,
    cipher: Option<(String, Span)>,
}

impl MaskingSpec {
    fn set_lengths(&mut self, lengths: (usize, usize), span: Span) -> Result<()> {
        if self.lengths.is_some() {
            return Err(syn::Error::new(
                span,
                "multiple masking configurations specified on the same field",
            ));
        }
        self.lengths = Some(lengths);
        Ok(())
    }

    fn set_cipher(&mut self, cipher: String, span: Span) -> Result<()> {
        if self.cipher.is_some() {
            return Err(syn::Error::new(span, "cipher specified more than once"));
        }
        self.cipher = Some((cipher, span));
        Ok(())
    }

    fn finish(self) -> Result<Option<MaskingConfig>> {
        match (self.lengths, self.cipher) {
            (Some((pre, suf)), cipher) => Ok(Some(MaskingConfig::new(pre, suf).with_cipher(
                cipher.map_or_else(|| DEFAULT_CIPHER.to_string(), |(cipher, _)| cipher),
            ))),
            (None, Some((_, span))) => Err(syn::Error::new(
                span,
                "`cipher` needs a preset (e.g. `mobile`) or `mask(pre = .., suf = ..)`",
            )),
            (None, None) => Ok(None),
        }
    }
}

fn parse_usize(lit: &LitInt) -> Result<usize> {
    lit.base10_parse::<usize>()
}

fn parse_mask_lengths(meta: &syn::meta::ParseNestedMeta<'_>, spec: &mut MaskingSpec) -> Result<()> {
    let mut pre: Option<usize> = None;
    let mut suf: Option<usize> = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("pre") {
            pre = Some(parse_usize(&inner.value()?.parse()?)?);
            Ok(())
        } else if inner.path.is_ident("suf") {
            suf = Some(parse_usize(&inner.value()?.parse()?)?);
            Ok(())
        } else if inner.path.is_ident("cipher") {
            let cipher: LitStr = inner.value()?.parse()?;
            spec.set_cipher(cipher.value(), cipher.span())
        } else {
            Err(inner.error("expected `pre`, `suf` or `cipher` inside mask(...)"))
        }
    })?;
    spec.set_lengths((pre.unwrap_or(0), suf.unwrap_or(0)), meta.path.span())
}

fn set_role(options: &mut FieldOptions, role: FieldRole, span: Span) -> Result<()> {
    if options.role != FieldRole::Member {
        return Err(syn::Error::new(
            span,
            "`skip` and `parent` cannot be combined on the same field",
        ));
    }
    options.role = role;
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    let mut spec = MaskingSpec::default();
    let mut last_span = None;

    for attr in attrs {
        if !attr.path().is_ident("desensitize") {
            continue;
        }
        last_span = Some(attr.span());

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected options, e.g. #[desensitize(mobile)] or #[desensitize(skip)]",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        set_role(&mut options, FieldRole::Skipped, meta.path.span())
                    } else if meta.path.is_ident("parent") {
                        set_role(&mut options, FieldRole::Parent, meta.path.span())
                    } else if meta.path.is_ident("rename") {
                        let name: LitStr = meta.value()?.parse()?;
                        options.rename = Some(name.value());
                        Ok(())
                    } else if meta.path.is_ident("getter") {
                        let getter: LitStr = meta.value()?.parse()?;
                        options.getter = Some(getter.parse()?);
                        Ok(())
                    } else if meta.path.is_ident("cipher") {
                        let cipher: LitStr = meta.value()?.parse()?;
                        spec.set_cipher(cipher.value(), cipher.span())
                    } else if meta.path.is_ident("mask") {
                        parse_mask_lengths(&meta, &mut spec)
                    } else if let Some(preset) = meta
                        .path
                        .get_ident()
                        .and_then(|ident| Preset::from_name(&ident.to_string()))
                    {
                        let config = preset.config();
                        spec.set_lengths((config.pre_len, config.suf_len), meta.path.span())
                    } else {
                        Err(meta.error(
                            "unknown field option; expected skip, parent, rename, getter, \
                             cipher, mask(...) or a preset (id_card_no, mobile, bank_card_no, name)",
                        ))
                    }
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[desensitize]",
                ));
            }
        }
    }

    if let Some(span) = last_span {
        options.masking = spec.finish()?;
        if options.role != FieldRole::Member
            && (options.masking.is_some() || options.rename.is_some() || options.getter.is_some())
        {
            return Err(syn::Error::new(
                span,
                "`skip` and `parent` fields are not rendered as members; remove the other options",
            ));
        }
    }

    Ok(options)
}
