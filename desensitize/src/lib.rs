//! Masked `Display` rendering for records holding sensitive fields.
//!
//! `#[derive(Desensitize)]` generates a `Display` implementation that renders
//! a struct as `Type(a=1, b=2)` (or an enum variant as `Type.Variant(a=1)`),
//! masking annotated fields on the way:
//!
//! ```rust
//! use desensitize::Desensitize;
//!
//! #[derive(Desensitize)]
//! struct Customer {
//!     #[desensitize(name)]
//!     name: String,
//!     #[desensitize(mobile)]
//!     phone: String,
//!     visits: u32,
//! }
//!
//! let customer = Customer {
//!     name: "Alice".into(),
//!     phone: "13812345678".into(),
//!     visits: 3,
//! };
//! assert_eq!(
//!     customer.to_string(),
//!     "Customer(name=A****, phone=138****5678, visits=3)"
//! );
//! ```
//!
//! Key rules:
//! - Masking keeps a visible prefix and suffix and replaces every character
//!   in between with the cipher (`*` by default).
//! - Values too short to hide anything are rendered unchanged.
//! - Absent values (`None`) render as `null`, masked or not.
//! - Arrays render as `[a, b]`; nested arrays of primitives render as `[...]`.
//!
//! The same plans can be built and evaluated at runtime: see [`assemble`],
//! [`render`] and [`Synthesizer`].
//!
//! What it does not do:
//! - change `Debug`
//! - mask anything outside `Display` (and `slog`, behind the `slog` feature)

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
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use desensitize_derive::Desensitize;

#[allow(unused_extern_crates)]
extern crate self as desensitize;

#[cfg(feature = "slog")]
pub mod slog;

pub use desensitize_core::{
    assemble, decide_render, mask, mask_routine_required, mask_str, render, resolve_call_super,
    write_rendered, AccessKind, CallSuperPolicy, ConfigError, Existence, MaskRoutine,
    MaskingConfig, MemberDescriptor, Preset, RenderDecision, RenderOptions, RenderSource,
    RenderStep, RenderValue, RenderingPlan, Synthesis, SynthesisConfig, SynthesisError,
    SynthesisRequest, Synthesizer, ToRenderValue, TypeKind, TypeShape, UnknownPreset,
    ValueCategory, Warning, DEFAULT_CIPHER, MASK_ROUTINE_ARITY, MASK_ROUTINE_NAME,
    NESTED_ARRAY_TOKEN, NULL_TOKEN,
};
#[doc(hidden)]
pub use desensitize_core::runtime as __private;

#[cfg(test)]
mod tests {
    use crate::Desensitize;

    #[derive(Desensitize)]
    struct Internal {
        #[desensitize(bank_card_no)]
        card: String,
    }

    #[test]
    fn derive_resolves_the_crate_from_inside() {
        let internal = Internal {
            card: "6222020200112233".into(),
        };
        assert_eq!(internal.to_string(), "Internal(card=6222********2233)");
    }
}
