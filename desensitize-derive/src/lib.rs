//! Derive macro for `desensitize`.
//!
//! This crate generates the `Display` implementation behind
//! `#[derive(Desensitize)]`. It:
//! - reads `#[desensitize(...)]` container and field attributes
//! - enumerates members and assembles a rendering plan with `desensitize-core`
//! - lowers the plan into formatter writes
//!
//! The masking itself runs at runtime through the `desensitize` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

#[cfg(feature = "slog")]
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Result};

use desensitize_core::{
    decide_render, mask_routine_required, MemberDescriptor, SynthesisError, TypeShape, Warning,
    MASK_ROUTINE_NAME,
};

mod container;
mod derive_enum;
mod derive_struct;
mod field;
mod generics;
mod lower;
mod members;
mod record;
mod types;
use container::parse_container_options;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_display_bounds, add_render_value_bounds};
use lower::formatter_ident;
use members::UsedGenerics;
use record::warning_tokens;

/// Derives `Display` with masked members, plus `desensitize::ToRenderValue`.
///
/// The generated `Display` renders `Type(a=1, b=2)` for structs and
/// `Type.Variant(a=1)` for enum variants. Members keep declaration order.
///
/// # Container Attributes
///
/// - `#[desensitize(include_names = false)]` - Render values without `name=`. Defaults to
///   `true` for named fields and `false` for tuple fields.
/// - `#[desensitize(call_super = true)]` - Open with `(super=...)`, rendering the field marked
///   `#[desensitize(parent)]` through its `Display`.
/// - `#[desensitize(call_super_policy = "skip" | "warn" | "call")]` - What to do with a parent
///   field when `call_super` is not given. `warn` skips the call and raises a compiler warning.
/// - `#[desensitize(skip_display)]` - The type implements `Display` itself; nothing is generated
///   for it.
/// - `#[desensitize(custom_mask)]` - The type provides its own
///   `fn desensitize(Option<String>, usize, usize, &str) -> Option<String>`.
/// - `#[desensitize(do_not_use_getters)]` - Read fields directly even where a getter is named.
///
/// # Field Attributes
///
/// - **No annotation**: rendered as is through `ToRenderValue`.
/// - `#[desensitize(id_card_no)]`, `mobile`, `bank_card_no`, `name` - Mask with a preset
///   (6/4, 3/4, 4/4 and 1/0 visible characters).
/// - `#[desensitize(mask(pre = 2, suf = 1, cipher = "#"))]` - Mask with explicit lengths.
/// - `#[desensitize(cipher = "#")]` - Override the cipher of a preset.
/// - `#[desensitize(rename = "phone")]` - Render under another name.
/// - `#[desensitize(getter = "full_name")]` - Render `self.full_name()` instead of the field.
/// - `#[desensitize(skip)]` - Leave the field out.
/// - `#[desensitize(parent)]` - The field stands in for the parent type.
///
/// Array-like fields (`[T; N]`, slices, `Vec`, `VecDeque`) render as `[a, b]` and cannot be
/// masked. Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `ToRenderValue`, so derived types nest inside other derived types.
/// - `slog::Value` (behind `feature = "slog"`), logging the rendered text. The derive first
///   looks for a top-level `slog` crate; if not found, it checks the `DESENSITIZE_SLOG_CRATE`
///   env var for an alternate path (e.g., `my_log::slog`).
#[proc_macro_derive(Desensitize, attributes(desensitize))]
pub fn derive_desensitize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the desensitize crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "desensitize", ... }`)
/// and internal usage: the desensitize crate aliases itself with
/// `extern crate self as desensitize`, so the absolute path also resolves in
/// its unit tests and doctests.
fn crate_root() -> TokenStream {
    match crate_name("desensitize") {
        Ok(FoundCrate::Itself) => quote! { ::desensitize },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::desensitize },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// If the top-level `slog` crate is not available, falls back to the
/// `DESENSITIZE_SLOG_CRATE` env var, which should be a path like `my_log::slog`.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("DESENSITIZE_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the DESENSITIZE_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("DESENSITIZE_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

/// What struct and enum derivation hand back to [`expand`].
pub(crate) struct DeriveOutput {
    pub(crate) display_body: TokenStream,
    pub(crate) used: UsedGenerics,
    pub(crate) warnings: Vec<(Warning, proc_macro2::Span)>,
    pub(crate) descriptors: Vec<MemberDescriptor>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = parse_container_options(&attrs)?;
    let crate_root = crate_root();

    let output = match &data {
        Data::Struct(data) => derive_struct(&ident, data, &generics, &options)?,
        Data::Enum(data) => derive_enum(&ident, data, &generics, &options)?,
        Data::Union(u) => {
            let err = SynthesisError::NotARecord {
                type_name: ident.to_string(),
                shape: TypeShape::Union,
            };
            return Err(syn::Error::new(u.union_token.span(), err));
        }
    };

    let type_name = ident.to_string();
    let (_, ty_generics, _) = generics.split_for_impl();

    let display_impl = if decide_render(&type_name, options.render_existence(), false)
        .should_synthesize()
    {
        let display_generics = add_render_value_bounds(generics.clone(), &output.used.render_value);
        let display_generics = add_display_bounds(display_generics, &output.used.display);
        let (impl_generics, ty_generics, where_clause) = display_generics.split_for_impl();
        let body = &output.display_body;
        let formatter = formatter_ident();
        quote! {
            #[allow(unused_variables)]
            impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
                fn fmt(&self, #formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #body
                }
            }
        }
    } else {
        quote! {}
    };

    let mask_routine = if mask_routine_required(&output.descriptors, options.mask_existence()) {
        let routine = format_ident!("{}", MASK_ROUTINE_NAME);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #[doc(hidden)]
                #[allow(dead_code)]
                fn #routine(
                    input: ::core::option::Option<::std::string::String>,
                    pre_len: usize,
                    suf_len: usize,
                    cipher: &str,
                ) -> ::core::option::Option<::std::string::String> {
                    #crate_root::mask(input, pre_len, suf_len, cipher)
                }
            }
        }
    } else {
        quote! {}
    };

    // Bounded on `Self: Display` so a hand-written Display works too.
    let mut displayable = generics.clone();
    displayable
        .make_where_clause()
        .predicates
        .push(parse_quote!(#ident #ty_generics: ::core::fmt::Display));

    let render_value_impl = {
        let (impl_generics, ty_generics, where_clause) = displayable.split_for_impl();
        quote! {
            impl #impl_generics #crate_root::ToRenderValue for #ident #ty_generics #where_clause {
                fn to_render_value(&self) -> #crate_root::RenderValue {
                    #crate_root::RenderValue::text(self)
                }
            }
        }
    };

    // Only generate slog impl when the slog feature is enabled on desensitize-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        let (impl_generics, ty_generics, where_clause) = displayable.split_for_impl();
        quote! {
            impl #impl_generics #slog_crate::Value for #ident #ty_generics #where_clause {
                fn serialize(
                    &self,
                    record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    #crate_root::slog::serialize_rendered(self, record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    let warnings = output
        .warnings
        .iter()
        .map(|(warning, span)| warning_tokens(warning, *span));

    Ok(quote! {
        #display_impl

        #mask_routine

        #render_value_impl

        #slog_impl

        #(#warnings)*
    })
}
